//! Animal lookup against the animal-facts HTTP API.
//!
//! Client-side (csr): real HTTP calls via `gloo-net`.
//! Native builds: [`AnimalsApi`] reports [`FetchError::NotConfigured`] since
//! the request is only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every failure comes back as a [`FetchError`]; the search session turns it
//! into an empty result list rather than surfacing it.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::future::Future;

use super::types::{Animal, FetchError};
use crate::config::ApiConfig;

/// Anything that can look animals up by name.
pub trait AnimalSource {
    /// Fetch all animals matching `name`.
    fn fetch_animals(&self, name: &str) -> impl Future<Output = Result<Vec<Animal>, FetchError>>;
}

/// HTTP client for `GET {base_url}?name=<term>` authenticated by `X-Api-Key`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimalsApi {
    config: ApiConfig,
}

impl AnimalsApi {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    async fn get(&self, name: &str) -> Result<Vec<Animal>, FetchError> {
        #[cfg(feature = "csr")]
        {
            let resp = gloo_net::http::Request::get(&self.config.base_url)
                .query([("name", name)])
                .header("X-Api-Key", &self.config.api_key)
                .send()
                .await
                .map_err(|e| FetchError::Network(e.to_string()))?;
            let status = resp.status();
            if !(200..300).contains(&status) {
                return Err(FetchError::Status { status });
            }
            let body = resp.text().await.map_err(|e| FetchError::Network(e.to_string()))?;
            decode_animals(&body)
        }
        #[cfg(not(feature = "csr"))]
        {
            leptos::logging::log!("animal lookup for {name} skipped outside the browser");
            Err(FetchError::NotConfigured)
        }
    }
}

impl AnimalSource for AnimalsApi {
    fn fetch_animals(&self, name: &str) -> impl Future<Output = Result<Vec<Animal>, FetchError>> {
        self.get(name)
    }
}

/// Decode an API response body, dropping records without a usable name.
///
/// # Errors
///
/// Returns [`FetchError::Decode`] if the body is not a JSON array of animals.
pub fn decode_animals(body: &str) -> Result<Vec<Animal>, FetchError> {
    let animals: Vec<Animal> = serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))?;
    Ok(animals.into_iter().filter(|a| !a.name.trim().is_empty()).collect())
}
