//! Rating form state for the selected favorite animal.
//!
//! DESIGN
//! ======
//! Exactly one animal is rated at a time. Selecting an animal starts a fresh
//! form (rating 0, nothing liked); saved values are never pre-loaded. Only
//! [`RatingWorkflow::save`] touches storage, writing one record per animal
//! name under [`rating_key`]. Records outlive the favorite they belong to.

#[cfg(test)]
#[path = "rating_test.rs"]
mod rating_test;

use serde::{Deserialize, Serialize};

use crate::net::types::Animal;
use crate::util::storage::{PersistentStore, StorageError};

pub const MIN_RATING: u8 = 0;
pub const MAX_RATING: u8 = 5;

/// Namespace for rating records. Keys are `rating:<name>` rather than the
/// bare animal name, so no animal can overwrite [`FAVORITES_KEY`].
///
/// [`FAVORITES_KEY`]: crate::state::favorites::FAVORITES_KEY
const RATING_KEY_PREFIX: &str = "rating:";

/// Storage key for the rating record of `animal_name`.
pub fn rating_key(animal_name: &str) -> String {
    format!("{RATING_KEY_PREFIX}{animal_name}")
}

/// Clamp an arbitrary input into `MIN_RATING..=MAX_RATING`.
pub fn clamp_rating(value: i64) -> u8 {
    u8::try_from(value.clamp(i64::from(MIN_RATING), i64::from(MAX_RATING))).unwrap_or(MIN_RATING)
}

/// Persisted rating for one animal name.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingRecord {
    pub animal_name: String,
    pub rating: u8,
    pub liked_attributes: Vec<String>,
}

/// Proof that a record was written, with the message shown to the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SaveConfirmation {
    pub animal_name: String,
}

impl SaveConfirmation {
    pub fn message(&self) -> String {
        format!("Saved rating for {}", self.animal_name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RatingError {
    #[error("no animal selected")]
    NoSelection,

    #[error("{0} is not an attribute of the selected animal")]
    UnknownAttribute(String),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Clone, Debug)]
pub struct RatingWorkflow {
    store: PersistentStore,
    selected: Option<Animal>,
    attributes: Vec<String>,
    rating: u8,
    liked: Vec<String>,
    confirmation: Option<SaveConfirmation>,
}

impl RatingWorkflow {
    pub fn new(store: PersistentStore) -> Self {
        Self {
            store,
            selected: None,
            attributes: Vec::new(),
            rating: MIN_RATING,
            liked: Vec::new(),
            confirmation: None,
        }
    }

    pub fn selected(&self) -> Option<&Animal> {
        self.selected.as_ref()
    }

    pub fn selected_name(&self) -> Option<&str> {
        self.selected.as_ref().map(|a| a.name.as_str())
    }

    /// Attributes offered for the current selection.
    pub fn attributes(&self) -> &[String] {
        &self.attributes
    }

    pub fn rating(&self) -> u8 {
        self.rating
    }

    pub fn liked_attributes(&self) -> &[String] {
        &self.liked
    }

    pub fn is_liked(&self, attr: &str) -> bool {
        self.liked.iter().any(|a| a == attr)
    }

    /// Confirmation from the most recent save of the current selection.
    pub fn confirmation(&self) -> Option<&SaveConfirmation> {
        self.confirmation.as_ref()
    }

    /// Make `animal` the active selection with a blank form.
    pub fn select(&mut self, animal: Animal) {
        self.attributes = animal.attributes();
        self.selected = Some(animal);
        self.rating = MIN_RATING;
        self.liked.clear();
        self.confirmation = None;
    }

    pub fn clear(&mut self) {
        self.selected = None;
        self.attributes.clear();
        self.rating = MIN_RATING;
        self.liked.clear();
        self.confirmation = None;
    }

    /// Clear the selection if it is named `name`. Returns whether it was.
    pub fn clear_if_selected(&mut self, name: &str) -> bool {
        if self.selected_name() != Some(name) {
            return false;
        }
        self.clear();
        true
    }

    /// Store `value` clamped into range and return what was stored.
    pub fn set_rating(&mut self, value: i64) -> u8 {
        self.rating = clamp_rating(value);
        self.rating
    }

    /// Flip `attr` in the liked set. Returns whether it is liked afterward.
    ///
    /// # Errors
    ///
    /// Returns an error if nothing is selected or `attr` was not offered for
    /// the selection.
    pub fn toggle_attribute(&mut self, attr: &str) -> Result<bool, RatingError> {
        if self.selected.is_none() {
            return Err(RatingError::NoSelection);
        }
        if !self.attributes.iter().any(|a| a == attr) {
            return Err(RatingError::UnknownAttribute(attr.to_owned()));
        }
        if let Some(pos) = self.liked.iter().position(|a| a == attr) {
            self.liked.remove(pos);
            Ok(false)
        } else {
            self.liked.push(attr.to_owned());
            Ok(true)
        }
    }

    /// Snapshot of the form as it would be saved.
    pub fn record(&self) -> Option<RatingRecord> {
        self.selected.as_ref().map(|animal| RatingRecord {
            animal_name: animal.name.clone(),
            rating: self.rating,
            liked_attributes: self.liked.clone(),
        })
    }

    /// Write the form to storage, replacing any earlier record for this
    /// animal name. The selection stays active.
    ///
    /// # Errors
    ///
    /// Returns an error if nothing is selected or the write fails.
    pub fn save(&mut self) -> Result<SaveConfirmation, RatingError> {
        let record = self.record().ok_or(RatingError::NoSelection)?;
        if let Err(e) = self.store.save(&rating_key(&record.animal_name), &record) {
            leptos::logging::warn!("rating for {} not persisted: {e}", record.animal_name);
            return Err(e.into());
        }
        let confirmation = SaveConfirmation { animal_name: record.animal_name };
        self.confirmation = Some(confirmation.clone());
        Ok(confirmation)
    }

    /// Previously saved record for `animal_name`, if one is readable.
    pub fn saved_record(&self, animal_name: &str) -> Option<RatingRecord> {
        self.store.load(&rating_key(animal_name))
    }
}
