//! Favorites plus rating selection, kept consistent with each other.
//!
//! SYSTEM CONTEXT
//! ==============
//! Removing a favorite has to drop a matching rating selection, so both live
//! behind one value that the UI provides through context.

#[cfg(test)]
#[path = "wildlife_test.rs"]
mod wildlife_test;

use super::favorites::{FavoritesManager, Mutation};
use super::rating::{RatingError, RatingWorkflow, SaveConfirmation};
use crate::net::types::Animal;
use crate::util::storage::{PersistentStore, StorageError};

#[derive(Clone, Debug)]
pub struct WildlifeState {
    favorites: FavoritesManager,
    rating: RatingWorkflow,
    /// Last failed favorites write, until favorites are written again.
    favorites_warning: Option<String>,
    /// Last failed rating write, until a rating is written again.
    rating_warning: Option<String>,
}

impl WildlifeState {
    /// Hydrate favorites from `store` and share it with the rating form.
    pub fn load(store: PersistentStore) -> Self {
        Self {
            favorites: FavoritesManager::load(store.clone()),
            rating: RatingWorkflow::new(store),
            favorites_warning: None,
            rating_warning: None,
        }
    }

    pub fn favorites(&self) -> &FavoritesManager {
        &self.favorites
    }

    pub fn rating(&self) -> &RatingWorkflow {
        &self.rating
    }

    pub fn rating_mut(&mut self) -> &mut RatingWorkflow {
        &mut self.rating
    }

    /// Outstanding storage failure to show the user. Favorites take
    /// precedence since memory and storage disagree until they are rewritten.
    pub fn storage_warning(&self) -> Option<&str> {
        self.favorites_warning.as_deref().or(self.rating_warning.as_deref())
    }

    pub fn add_favorite(&mut self, animal: Animal) -> Mutation<'_> {
        let mutation = self.favorites.add(animal);
        note_write(&mut self.favorites_warning, &mutation.persisted);
        mutation
    }

    /// Remove every favorite named `name`, dropping it from the rating form
    /// if it is the current selection.
    pub fn remove_favorite(&mut self, name: &str) -> Mutation<'_> {
        if self.rating.clear_if_selected(name) {
            leptos::logging::log!("cleared rating selection for removed favorite {name}");
        }
        let mutation = self.favorites.remove(name);
        note_write(&mut self.favorites_warning, &mutation.persisted);
        mutation
    }

    /// Start rating the first favorite named `name`. Returns `false` if there
    /// is no such favorite.
    pub fn select_favorite(&mut self, name: &str) -> bool {
        let Some(animal) = self.favorites.find(name).cloned() else {
            return false;
        };
        self.rating.select(animal);
        true
    }

    /// Save the rating form, tracking any storage failure for display.
    ///
    /// # Errors
    ///
    /// Returns an error if nothing is selected or the write fails.
    pub fn save_rating(&mut self) -> Result<SaveConfirmation, RatingError> {
        let result = self.rating.save();
        match &result {
            Ok(_) => self.rating_warning = None,
            Err(RatingError::Storage(e)) => self.rating_warning = Some(e.to_string()),
            Err(_) => {}
        }
        result
    }
}

fn note_write(warning: &mut Option<String>, persisted: &Result<(), StorageError>) {
    *warning = persisted.as_ref().err().map(ToString::to_string);
}
