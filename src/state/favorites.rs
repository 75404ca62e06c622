//! Favorites collection mirrored to persistent storage.
//!
//! DESIGN
//! ======
//! Every mutation rewrites the full collection under [`FAVORITES_KEY`] in the
//! same synchronous call, so memory and storage agree as soon as the call
//! returns. A failed write does not roll back the in-memory change; the
//! failure is logged and handed back in the [`Mutation`].
//!
//! Duplicate names are allowed. Ratings are keyed by name, so duplicates
//! share one rating record.

#[cfg(test)]
#[path = "favorites_test.rs"]
mod favorites_test;

use crate::net::types::Animal;
use crate::util::storage::{PersistentStore, StorageError};

/// Storage key holding the JSON array of favorite animals.
pub const FAVORITES_KEY: &str = "favoriteAnimals";

/// Outcome of a favorites mutation.
#[derive(Debug)]
pub struct Mutation<'a> {
    /// Collection after the mutation.
    pub favorites: &'a [Animal],
    /// Number of entries added or removed.
    pub changed: usize,
    /// Result of writing the collection to storage.
    pub persisted: Result<(), StorageError>,
}

#[derive(Clone, Debug)]
pub struct FavoritesManager {
    store: PersistentStore,
    items: Vec<Animal>,
}

impl FavoritesManager {
    /// Hydrate from `store`, starting empty on first run or unreadable data.
    pub fn load(store: PersistentStore) -> Self {
        let items: Vec<Animal> = store.load_or_default(FAVORITES_KEY);
        Self { store, items }
    }

    /// Favorites in insertion order.
    pub fn list(&self) -> &[Animal] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|a| a.name == name)
    }

    /// First favorite with `name`.
    pub fn find(&self, name: &str) -> Option<&Animal> {
        self.items.iter().find(|a| a.name == name)
    }

    /// Append `animal` and persist the whole collection.
    pub fn add(&mut self, animal: Animal) -> Mutation<'_> {
        self.items.push(animal);
        self.commit(1)
    }

    /// Drop every entry named `name` and persist the result.
    pub fn remove(&mut self, name: &str) -> Mutation<'_> {
        let before = self.items.len();
        self.items.retain(|a| a.name != name);
        self.commit(before - self.items.len())
    }

    fn commit(&self, changed: usize) -> Mutation<'_> {
        let persisted = self.store.save(FAVORITES_KEY, &self.items);
        if let Err(e) = &persisted {
            leptos::logging::warn!("favorites not persisted: {e}");
        }
        Mutation { favorites: &self.items, changed, persisted }
    }
}
