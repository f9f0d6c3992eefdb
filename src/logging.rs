//! Debug logging
//!
//! The UI owns the terminal, so log records never go to stderr. Set
//! `COUNTRY_TYPEAHEAD_LOG` to a file path to capture them; `RUST_LOG`
//! controls the level (default `debug`).

use std::fs::OpenOptions;
use std::io;
use std::path::Path;

use env_logger::{Builder, Env, Target};

pub const LOG_ENV: &str = "COUNTRY_TYPEAHEAD_LOG";

/// Initialize logging if `COUNTRY_TYPEAHEAD_LOG` is set; otherwise a no-op
pub fn init() -> io::Result<()> {
    match std::env::var_os(LOG_ENV) {
        Some(path) if !path.is_empty() => init_to_file(Path::new(&path)),
        _ => Ok(()),
    }
}

/// Append log records to `path`
pub fn init_to_file(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let result = Builder::from_env(Env::default().default_filter_or("debug"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init();

    // A logger installed earlier (tests) wins
    if let Err(e) = result {
        log::debug!("Logger already initialized: {}", e);
    }
    Ok(())
}
