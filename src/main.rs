use clap::Parser;
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::{logging, App, GameConfig, GameError};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::path::PathBuf;

/// Flap through the pipes. Space flaps, Esc quits.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON file overriding tuning values
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Seed for a repeatable pipe sequence
    #[arg(long)]
    seed: Option<u64>,

    /// Tick rate cap in Hz
    #[arg(long)]
    fps: Option<u32>,

    /// Write logs to this file
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Print the effective config as JSON and exit
    #[arg(long)]
    print_config: bool,
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("flappy: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), GameError> {
    let config = GameConfig::resolve(args.config.as_deref(), args.fps)?;

    if args.print_config {
        println!("{}", config.to_json());
        return Ok(());
    }

    if let Some(path) = &args.log_file {
        logging::init(path, args.verbose)?;
    }

    let rng = match args.seed {
        Some(seed) => {
            log::info!("using seed {}", seed);
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_entropy(),
    };
    let mut app = App::new(config, rng);

    let mut terminal = setup_terminal()?;
    let result = app.run(&mut terminal);
    restore_terminal(&mut terminal)?;

    if result.is_ok() {
        log::info!(
            "exiting: {} round(s), high score {}",
            app.session().rounds_played(),
            app.session().high_score()
        );
    }
    result
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = stdout
        .execute(EnterAlternateScreen)
        .and_then(|s| s.execute(EnableMouseCapture).map(|_| ()))
    {
        let _ = stdout.execute(LeaveAlternateScreen);
        let _ = disable_raw_mode();
        return Err(e);
    }
    let backend = CrosstermBackend::new(stdout);
    match Terminal::new(backend) {
        Ok(terminal) => Ok(terminal),
        Err(e) => {
            let mut stdout = io::stdout();
            let _ = stdout.execute(DisableMouseCapture);
            let _ = stdout.execute(LeaveAlternateScreen);
            let _ = disable_raw_mode();
            Err(e)
        }
    }
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    terminal.backend_mut().execute(DisableMouseCapture)?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()
}
