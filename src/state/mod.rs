//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`favorites`, `rating`, `search`) so each piece
//! can be tested without a browser. `wildlife` ties favorites and rating
//! together for the UI; `search` stays separate since its results are never
//! persisted.

pub mod favorites;
pub mod rating;
pub mod search;
pub mod wildlife;
