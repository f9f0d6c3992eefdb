//! Country lookup collaborators
//!
//! Defines the lookup trait, the raw wire record, the LookupError type, and
//! the two lookup implementations (REST and bundled).

use futures::future::BoxFuture;
use serde::Deserialize;
use thiserror::Error;

mod bundled;
mod rest;

pub use bundled::BundledLookup;
pub use rest::RestCountriesClient;

/// Future returned by a lookup; settles with the raw records for one query
pub type LookupFuture = BoxFuture<'static, Result<Vec<RawCountry>, LookupError>>;

/// Errors that can occur while looking up countries
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LookupError {
    /// Transport failure (connection refused, DNS, TLS, ...)
    #[error("Network error: {0}")]
    Network(String),

    /// The request did not complete within the configured timeout
    #[error("Lookup timed out")]
    Timeout,

    /// The service answered with a non-success status other than 404
    #[error("Lookup failed with HTTP status {0}")]
    Status(u16),

    /// The response body could not be decoded
    #[error("Decode error: {0}")]
    Decode(String),

    /// The query could not be turned into a request
    #[error("Invalid query: {0}")]
    InvalidQuery(String),
}

/// Country names as returned by the lookup service
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawName {
    pub common: String,
    pub official: String,
}

/// Flag image references
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Default)]
pub struct RawFlags {
    #[serde(default)]
    pub png: String,
}

/// Raw country record (restcountries.com v3.1 shape)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawCountry {
    /// ISO 3166-1 numeric code; missing for a few territories
    #[serde(default)]
    pub ccn3: Option<String>,
    /// ISO 3166-1 alpha-3 code
    #[serde(default)]
    pub cca3: Option<String>,
    pub name: RawName,
    #[serde(default)]
    pub flags: RawFlags,
}

/// Source of country suggestions
///
/// Returns `None` when there is nothing to look up (blank query); the state
/// machine treats that as a no-op.
pub trait CountryLookup: Send + Sync {
    fn lookup(&self, query: &str) -> Option<LookupFuture>;
}
