//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the search, favorites, and rating surfaces while
//! reading/writing shared state from Leptos context providers.

pub mod animal_card;
pub mod favorites_panel;
pub mod rating_panel;
pub mod search_panel;
