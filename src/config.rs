//! Configuration loading
//!
//! Reads `~/.config/country-typeahead/config.toml`. A missing file means
//! defaults; a file that exists but cannot be read or parsed is an error.

mod types;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub use types::{Config, LookupConfig, SuggestionsConfig};

use crate::error::TypeaheadError;

const CONFIG_DIR: &str = "country-typeahead";
const CONFIG_FILE: &str = "config.toml";

pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join(CONFIG_DIR).join(CONFIG_FILE))
}

/// Load the config from the default location
pub fn load_config() -> Result<Config, TypeaheadError> {
    match config_path() {
        Some(path) => load_config_from_path(&path),
        None => Ok(Config::default()),
    }
}

pub fn load_config_from_path(path: &Path) -> Result<Config, TypeaheadError> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }
        Err(source) => {
            return Err(TypeaheadError::ConfigRead {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    toml::from_str(&contents).map_err(|source| TypeaheadError::ConfigParse {
        path: path.to_path_buf(),
        source,
    })
}
