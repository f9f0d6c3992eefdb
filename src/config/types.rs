// Configuration type definitions

use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://restcountries.com/v3.1";
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;
pub const DEFAULT_DEBOUNCE_MS: u64 = 150;
pub const DEFAULT_MAX_VISIBLE: u16 = 8;

/// Lookup configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    pub base_url: String,
    pub timeout_ms: u64,
    /// Use the built-in country table instead of the network
    pub offline: bool,
}

impl Default for LookupConfig {
    fn default() -> Self {
        LookupConfig {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            offline: false,
        }
    }
}

/// Suggestion panel configuration section
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SuggestionsConfig {
    pub debounce_ms: u64,
    /// Rows of the suggestion panel before it scrolls
    pub max_visible: u16,
}

impl Default for SuggestionsConfig {
    fn default() -> Self {
        SuggestionsConfig {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            max_visible: DEFAULT_MAX_VISIBLE,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub lookup: LookupConfig,
    #[serde(default)]
    pub suggestions: SuggestionsConfig,
}
