//! restcountries.com client
//!
//! One GET per query: `{base_url}/name/{query}?fields=name,ccn3,cca3,flags`.
//! The service answers 404 when nothing matches; that is reported as an
//! empty result, not as an error.

use std::time::Duration;

use futures::FutureExt;
use reqwest::{Client, StatusCode, Url};

use super::{CountryLookup, LookupError, LookupFuture, RawCountry};
use crate::config::LookupConfig;
use crate::error::TypeaheadError;

const FIELDS: &str = "name,ccn3,cca3,flags";

#[derive(Debug, Clone)]
pub struct RestCountriesClient {
    client: Client,
    base_url: Url,
}

impl RestCountriesClient {
    /// Build a client from the `[lookup]` config section
    pub fn from_config(config: &LookupConfig) -> Result<Self, TypeaheadError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| TypeaheadError::BaseUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(TypeaheadError::BaseUrl {
                url: config.base_url.clone(),
                reason: "URL cannot be a base".to_string(),
            });
        }

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self { client, base_url })
    }

    /// URL for a name search
    pub fn search_url(&self, query: &str) -> Result<Url, LookupError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| LookupError::InvalidQuery(query.to_string()))?
            .pop_if_empty()
            .push("name")
            .push(query);
        url.query_pairs_mut().append_pair("fields", FIELDS);
        Ok(url)
    }
}

impl CountryLookup for RestCountriesClient {
    fn lookup(&self, query: &str) -> Option<LookupFuture> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }

        let url = match self.search_url(query) {
            Ok(url) => url,
            Err(e) => return Some(futures::future::ready(Err(e)).boxed()),
        };
        let client = self.client.clone();

        log::debug!("GET {}", url);
        Some(async move { fetch(&client, url).await }.boxed())
    }
}

async fn fetch(client: &Client, url: Url) -> Result<Vec<RawCountry>, LookupError> {
    let response = client.get(url).send().await.map_err(map_transport_error)?;

    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Ok(Vec::new());
    }
    if !status.is_success() {
        return Err(LookupError::Status(status.as_u16()));
    }

    response
        .json::<Vec<RawCountry>>()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                LookupError::Timeout
            } else {
                LookupError::Decode(e.to_string())
            }
        })
}

fn map_transport_error(e: reqwest::Error) -> LookupError {
    if e.is_timeout() {
        LookupError::Timeout
    } else {
        LookupError::Network(e.to_string())
    }
}
