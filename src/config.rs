//! Animal API configuration baked in at build time.
//!
//! A WASM bundle has no process environment, so values are captured with
//! `option_env!` when the crate is compiled:
//! - `ANIMALS_API_KEY` (required): sent as the `X-Api-Key` header
//! - `ANIMALS_API_BASE_URL` (optional): defaults to [`DEFAULT_ANIMALS_API_URL`]

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_ANIMALS_API_URL: &str = "https://api.api-ninjas.com/v1/animals";
pub const API_KEY_VAR: &str = "ANIMALS_API_KEY";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing API key: env var {var} not set at build time")]
    MissingApiKey { var: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub api_key: String,
    pub base_url: String,
}

impl ApiConfig {
    /// Build config from the variables captured at compile time.
    ///
    /// # Errors
    ///
    /// Returns an error if `ANIMALS_API_KEY` was not set for the build.
    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_vars(option_env!("ANIMALS_API_KEY"), option_env!("ANIMALS_API_BASE_URL"))
    }

    /// Build config from raw variable values. Blank values count as unset.
    ///
    /// # Errors
    ///
    /// Returns an error if `api_key` is absent or blank.
    pub fn from_vars(api_key: Option<&str>, base_url: Option<&str>) -> Result<Self, ConfigError> {
        let api_key = non_blank(api_key)
            .ok_or_else(|| ConfigError::MissingApiKey { var: API_KEY_VAR.into() })?
            .to_string();
        let base_url = non_blank(base_url)
            .unwrap_or(DEFAULT_ANIMALS_API_URL)
            .trim_end_matches('/')
            .to_string();
        Ok(Self { api_key, base_url })
    }
}

fn non_blank(raw: Option<&str>) -> Option<&str> {
    raw.map(str::trim).filter(|v| !v.is_empty())
}
