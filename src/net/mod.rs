//! Networking modules for the animal-facts HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the lookup request and `types` defines the shared animal
//! schema used by both search results and persisted favorites.

pub mod api;
pub mod types;
