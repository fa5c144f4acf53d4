//! Integration test: game loop and rendering
//!
//! Runs the app against ratatui's test backend: spawn cadence, high-score
//! timing, the game-over view and restarting through the drawn button.

use flappy::core::obstacle::Obstacle;
use flappy::ui::{BIRD_COLOR, FLOOR_COLOR};
use flappy::{App, GameConfig, GameEvent, GameState, LoopControl};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use std::time::Duration;

const WIDTH: u16 = 80;
const HEIGHT: u16 = 40;

fn new_app() -> App<ChaCha8Rng> {
    App::new(GameConfig::default(), ChaCha8Rng::seed_from_u64(99))
}

fn new_terminal() -> Terminal<TestBackend> {
    Terminal::new(TestBackend::new(WIDTH, HEIGHT)).unwrap()
}

fn screen_rows(terminal: &Terminal<TestBackend>) -> Vec<String> {
    let buffer = terminal.backend().buffer();
    (0..HEIGHT)
        .map(|y| (0..WIDTH).map(|x| buffer.get(x, y).symbol()).collect())
        .collect()
}

fn screen_contains(terminal: &Terminal<TestBackend>, text: &str) -> bool {
    screen_rows(terminal).iter().any(|row| row.contains(text))
}

/// Score one point, then end the round on the floor.
fn play_to_game_over(app: &mut App<ChaCha8Rng>) {
    let center = app.session().player.center_y;
    app.session_mut()
        .field
        .push(Obstacle::new(15.0, 80.0, center, 250.0, 1024.0));
    app.tick(Duration::ZERO);
    assert_eq!(app.session().score(), 1);

    app.session_mut().player.center_y = 890.0;
    app.tick(Duration::ZERO);
    assert_eq!(app.session().state(), GameState::GameOver);
}

// =============================================================================
// Clock Tests
// =============================================================================

#[test]
fn test_spawn_follows_wall_clock() {
    let mut app = new_app();
    app.tick(Duration::from_millis(1199));
    assert!(app.session().field.is_empty());

    app.tick(Duration::from_millis(1));
    assert_eq!(app.session().field.len(), 1);
    // Spawned at the right edge, then advanced once this tick
    let obstacle = &app.session().field.obstacles()[0];
    assert!((obstacle.left() - 573.0).abs() < f64::EPSILON);
}

#[test]
fn test_many_short_ticks_spawn_same_as_few_long_ones() {
    let mut fast = new_app();
    for _ in 0..120 {
        // Hover so the round outlives the spawn period
        fast.session_mut().player.velocity = 0.0;
        fast.tick(Duration::from_millis(10));
    }
    assert!(fast.session().is_active());
    let mut slow = new_app();
    slow.tick(Duration::from_millis(1200));

    assert_eq!(fast.session().field.len(), 1);
    assert_eq!(slow.session().field.len(), 1);
}

#[test]
fn test_no_spawn_while_game_over() {
    let mut app = new_app();
    play_to_game_over(&mut app);
    let before = app.session().field.len();
    app.tick(Duration::from_millis(5000));
    assert_eq!(app.session().field.len(), before);
}

#[test]
fn test_same_seed_spawns_same_gap_sequence() {
    fn gap_centers(seed: u64) -> Vec<f64> {
        let mut app = App::new(GameConfig::default(), StdRng::seed_from_u64(seed));
        for _ in 0..8 {
            app.push_event(GameEvent::SpawnObstacle);
        }
        app.update();
        app.session()
            .field
            .iter()
            .map(|obstacle| obstacle.gap_center())
            .collect()
    }

    let first = gap_centers(2024);
    assert_eq!(first.len(), 8);
    assert_eq!(first, gap_centers(2024));
}

#[test]
fn test_quit_event_stops_loop() {
    let mut app = new_app();
    app.push_event(GameEvent::Quit);
    assert_eq!(app.tick(Duration::ZERO), LoopControl::Quit);
}

// =============================================================================
// Rendering Tests
// =============================================================================

#[test]
fn test_active_frame_shows_player_floor_and_score() {
    let mut app = new_app();
    let mut terminal = new_terminal();
    app.present(&mut terminal).unwrap();

    let buffer = terminal.backend().buffer();
    // Content area is 78x36 at (1, 1); player spans columns 14..=21, rows 19..=20
    assert_eq!(buffer.get(14, 19).bg, BIRD_COLOR);
    assert_eq!(buffer.get(5, 36).bg, FLOOR_COLOR);
    assert_eq!(buffer.get(39, 4).symbol(), "0");
    assert!(app.restart_bounds().is_none());
    assert!(screen_contains(&terminal, "Flappy Bird"));
}

#[test]
fn test_high_score_updates_on_game_over_render() {
    let mut app = new_app();
    let mut terminal = new_terminal();
    play_to_game_over(&mut app);

    // Collision alone does not touch the high score
    assert_eq!(app.session().high_score(), 0);

    app.present(&mut terminal).unwrap();
    assert_eq!(app.session().high_score(), 1);
    assert!(screen_contains(&terminal, "Game Over!"));
    assert!(screen_contains(&terminal, "Score: 1"));
    assert!(screen_contains(&terminal, "High Score: 1"));
    assert!(screen_contains(&terminal, "Restart"));
}

#[test]
fn test_game_over_frame_hides_player() {
    let mut app = new_app();
    let mut terminal = new_terminal();
    play_to_game_over(&mut app);
    app.present(&mut terminal).unwrap();

    let buffer = terminal.backend().buffer();
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            assert_ne!(buffer.get(x, y).bg, BIRD_COLOR);
        }
    }
}

#[test]
fn test_restart_button_bounds_cover_label() {
    let mut app = new_app();
    let mut terminal = new_terminal();
    play_to_game_over(&mut app);
    app.present(&mut terminal).unwrap();

    let bounds = app.restart_bounds().expect("game-over render publishes bounds");
    let rows = screen_rows(&terminal);
    let label_row = &rows[bounds.y as usize];
    let start = label_row.find("Restart").expect("label on the button row");
    let label_col = label_row[..start].chars().count() as u16;
    assert!(label_col >= bounds.x);
    assert!(label_col + 7 <= bounds.x + bounds.width);
}

// =============================================================================
// Restart Tests
// =============================================================================

#[test]
fn test_click_on_drawn_button_restarts() {
    let mut app = new_app();
    let mut terminal = new_terminal();
    app.tick(Duration::from_millis(1200));
    play_to_game_over(&mut app);
    app.present(&mut terminal).unwrap();
    let high_before = app.session().high_score();
    let bounds = app.restart_bounds().unwrap();

    app.push_event(GameEvent::PointerDown {
        column: bounds.x + bounds.width / 2,
        row: bounds.y,
    });
    app.update();

    let session = app.session();
    assert_eq!(session.state(), GameState::Active);
    assert_eq!(session.score(), 0);
    assert!(session.field.is_empty());
    // One tick of gravity has run since the reset
    assert!((session.player.velocity - 0.25).abs() < f64::EPSILON);
    assert!(
        (session.player.center_y - (session.player.initial_center_y() + 0.25)).abs()
            < f64::EPSILON
    );
    assert_eq!(session.high_score(), high_before);
    assert!(app.restart_bounds().is_none());
}

#[test]
fn test_click_off_button_does_nothing() {
    let mut app = new_app();
    let mut terminal = new_terminal();
    play_to_game_over(&mut app);
    app.present(&mut terminal).unwrap();

    app.push_event(GameEvent::PointerDown { column: 0, row: 0 });
    app.update();
    assert_eq!(app.session().state(), GameState::GameOver);
}

#[test]
fn test_click_before_any_game_over_render_is_ignored() {
    let mut app = new_app();
    play_to_game_over(&mut app);
    // No render yet, so no button has been published
    app.push_event(GameEvent::PointerDown { column: 40, row: 20 });
    app.update();
    assert_eq!(app.session().state(), GameState::GameOver);
}

#[test]
fn test_space_restarts_after_game_over() {
    let mut app = new_app();
    let mut terminal = new_terminal();
    play_to_game_over(&mut app);
    app.present(&mut terminal).unwrap();

    app.push_event(GameEvent::Flap);
    app.update();
    assert_eq!(app.session().state(), GameState::Active);
    assert_eq!(app.session().high_score(), 1);

    app.present(&mut terminal).unwrap();
    assert!(!screen_contains(&terminal, "Game Over!"));
}
