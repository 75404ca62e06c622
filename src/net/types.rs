//! Animal records and fetch errors shared across search and favorites.
//!
//! DESIGN
//! ======
//! The same `Animal` shape is decoded from API responses and written to
//! `localStorage`, so the stored favorites stay readable across releases.
//! Only `name` is required; everything else tolerates absence.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Free-form attribute map in the order the API delivered it.
pub type Characteristics = serde_json::Map<String, serde_json::Value>;

/// One searched or favorited creature.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Animal {
    /// Display name; identifies the animal within the favorites list.
    pub name: String,
    /// Attribute name to opaque value (e.g. `"habitat": "Savannah"`).
    #[serde(default)]
    pub characteristics: Characteristics,
    /// Rating carried on older stored favorites. Never written here.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<i64>,
}

impl Animal {
    pub fn new(name: impl Into<String>, characteristics: Characteristics) -> Self {
        Self { name: name.into(), characteristics, rating: None }
    }

    /// Characteristic keys, in delivery order.
    pub fn attributes(&self) -> Vec<String> {
        self.characteristics.keys().cloned().collect()
    }

    /// Render a characteristic value for display; strings lose their quotes.
    pub fn characteristic_text(&self, attr: &str) -> Option<String> {
        self.characteristics.get(attr).map(|value| match value {
            serde_json::Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    }
}

/// Failure modes of the animal lookup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    /// No API key was configured at build time.
    #[error("animal API is not configured")]
    NotConfigured,

    /// The request never produced a response.
    #[error("API request failed: {0}")]
    Network(String),

    /// The API answered with a non-success status.
    #[error("API response error: status {status}")]
    Status { status: u16 },

    /// The response body was not a list of animals.
    #[error("API response parse failed: {0}")]
    Decode(String),
}
