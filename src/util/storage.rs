//! Key-value persistence over browser `localStorage`.
//!
//! SYSTEM CONTEXT
//! ==============
//! Favorites and rating records are the only durable state in the app. Both
//! flow through [`PersistentStore`], which is injected into the state modules
//! instead of touching `window.localStorage` ad hoc. Tests and non-browser
//! builds swap in [`MemoryStore`].
//!
//! ERROR HANDLING
//! ==============
//! Reads never fail: a missing key, unavailable storage, or a value that is
//! not valid JSON all collapse to `None` (first-run state must never break the
//! UI). Writes report a [`StorageError`] so callers can warn the user.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Errors produced when writing to the backing store.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// Storage is disabled or missing in this environment.
    #[error("local storage is unavailable")]
    Unavailable,

    /// The host refused the write because the storage quota is exhausted.
    #[error("storage quota exceeded while writing {key}")]
    QuotaExceeded { key: String },

    /// The host rejected the write for another reason.
    #[error("storage write failed: {0}")]
    Write(String),

    /// The value could not be encoded as JSON.
    #[error("storage encode failed: {0}")]
    Encode(String),
}

/// Synchronous string key-value backend.
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value for `key`, `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read at all.
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write the raw value for `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the write.
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

// =============================================================
// Browser backend
// =============================================================

/// `window.localStorage` for the running browser profile.
///
/// The storage handle is looked up on every call, so the type holds no JS
/// values and can live inside shared reactive state.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

#[cfg(feature = "csr")]
impl LocalStorage {
    fn storage() -> Result<web_sys::Storage, StorageError> {
        let window = web_sys::window().ok_or(StorageError::Unavailable)?;
        match window.local_storage() {
            Ok(Some(storage)) => Ok(storage),
            Ok(None) | Err(_) => Err(StorageError::Unavailable),
        }
    }
}

#[cfg(feature = "csr")]
impl KeyValueStore for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Self::storage()?
            .get_item(key)
            .map_err(|_| StorageError::Unavailable)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        use wasm_bindgen::JsCast as _;

        Self::storage()?.set_item(key, value).map_err(|err| {
            match err.dyn_ref::<web_sys::DomException>().map(web_sys::DomException::name) {
                Some(name) if name == "QuotaExceededError" => StorageError::QuotaExceeded { key: key.to_owned() },
                Some(name) => StorageError::Write(name),
                None => StorageError::Write(format!("{err:?}")),
            }
        })
    }
}

#[cfg(not(feature = "csr"))]
impl KeyValueStore for LocalStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Err(StorageError::Unavailable)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Unavailable)
    }
}

// =============================================================
// In-memory backend
// =============================================================

/// In-process map backend with an optional byte quota.
///
/// The quota counts key and value bytes across all entries, mirroring how
/// browsers account for `localStorage` usage.
#[derive(Debug, Default)]
pub struct MemoryStore {
    items: Mutex<BTreeMap<String, String>>,
    quota: Option<usize>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store that rejects writes once `bytes` would be exceeded.
    #[must_use]
    pub fn with_quota(bytes: usize) -> Self {
        Self { items: Mutex::new(BTreeMap::new()), quota: Some(bytes) }
    }

    /// Raw value currently stored under `key`.
    #[cfg(test)]
    pub fn raw(&self, key: &str) -> Option<String> {
        self.items.lock().map_or(None, |items| items.get(key).cloned())
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let items = self.items.lock().map_err(|_| StorageError::Unavailable)?;
        Ok(items.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.items.lock().map_err(|_| StorageError::Unavailable)?;
        if let Some(quota) = self.quota {
            let others: usize = items
                .iter()
                .filter(|(k, _)| k.as_str() != key)
                .map(|(k, v)| k.len() + v.len())
                .sum();
            if others + key.len() + value.len() > quota {
                return Err(StorageError::QuotaExceeded { key: key.to_owned() });
            }
        }
        items.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

// =============================================================
// JSON adapter
// =============================================================

/// Shared JSON view over a [`KeyValueStore`].
#[derive(Clone)]
pub struct PersistentStore {
    backend: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for PersistentStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PersistentStore").finish_non_exhaustive()
    }
}

impl PersistentStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Store backed by the browser's `localStorage`.
    #[must_use]
    pub fn browser() -> Self {
        Self::new(Arc::new(LocalStorage))
    }

    /// Fresh in-memory store, returned together with its backend so callers
    /// can inspect raw values.
    #[cfg(test)]
    #[must_use]
    pub fn in_memory() -> (Self, Arc<MemoryStore>) {
        let backend = Arc::new(MemoryStore::new());
        (Self::new(backend.clone()), backend)
    }

    /// Load and decode the JSON value stored under `key`.
    ///
    /// Returns `None` when the key is absent, storage is unreadable, or the
    /// stored text does not decode as `T`.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let raw = match self.backend.get_item(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                leptos::logging::warn!("storage read failed for {key}: {e}");
                return None;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => Some(value),
            Err(e) => {
                leptos::logging::warn!("ignoring unreadable value for {key}: {e}");
                None
            }
        }
    }

    /// Like [`PersistentStore::load`], substituting `T::default()`.
    pub fn load_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        self.load(key).unwrap_or_default()
    }

    /// Encode `value` as JSON and write it under `key`.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding fails or the backend rejects the write.
    pub fn save<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StorageError> {
        let raw = serde_json::to_string(value).map_err(|e| StorageError::Encode(e.to_string()))?;
        self.backend.set_item(key, &raw)
    }
}
