//! Logger setup. The terminal belongs to the UI, so log output only goes to
//! a file and only when one is requested.

use crate::error::GameError;
use env_logger::{Builder, Env, Target};
use log::LevelFilter;
use std::fs::OpenOptions;
use std::path::Path;

/// Initializes the global logger writing to `path`.
///
/// When `verbose` is `true`, debug messages are included. Otherwise only info
/// level and above. `RUST_LOG` overrides either default.
pub fn init(path: &Path, verbose: bool) -> Result<(), GameError> {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| GameError::Logging(format!("{}: {}", path.display(), e)))?;

    let env = Env::default().default_filter_or(level.to_string());
    let mut builder = Builder::from_env(env);
    builder.target(Target::Pipe(Box::new(file)));

    builder
        .try_init()
        .map_err(|e| GameError::Logging(format!("logger already set: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_reported() {
        // The only test in this binary that installs a logger
        let path = std::env::temp_dir().join(format!("flappy-log-{}.log", std::process::id()));
        let first = init(&path, false);
        let second = init(&path, true);
        let _ = std::fs::remove_file(&path);

        assert!(first.is_ok());
        assert!(matches!(second, Err(GameError::Logging(_))));
    }

    #[test]
    fn test_unwritable_path_is_reported() {
        let path = std::env::temp_dir()
            .join("flappy-no-such-dir")
            .join("nested")
            .join("out.log");
        assert!(matches!(init(&path, false), Err(GameError::Logging(_))));
    }
}
