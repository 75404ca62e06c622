//! Transient search results and the lifecycle of the current lookup.
//!
//! DESIGN
//! ======
//! A lookup is split into [`SearchSession::begin`] and
//! [`SearchSession::complete`] so the UI can hold the session in a signal
//! while the request is awaited elsewhere. Each request carries a sequence
//! number; a response for anything but the latest request is dropped, so a
//! slow answer for an old term never overwrites newer results.
//!
//! There is no timeout or cancellation: a request that never resolves
//! leaves the session in [`SearchStatus::Loading`].

#[cfg(test)]
#[path = "search_test.rs"]
mod search_test;

use crate::net::api::AnimalSource;
use crate::net::types::{Animal, FetchError};

/// Where the current lookup stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SearchStatus {
    #[default]
    Idle,
    Loading,
    /// Lookup succeeded with this many results.
    Results(usize),
    /// Lookup failed; results are empty.
    Failed,
}

/// Tag identifying one issued lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchRequest {
    pub seq: u64,
    pub term: String,
}

#[derive(Clone, Debug, Default)]
pub struct SearchSession {
    pub results: Vec<Animal>,
    pub status: SearchStatus,
    pub error: Option<String>,
    last_issued: u64,
}

impl SearchSession {
    pub fn is_loading(&self) -> bool {
        self.status == SearchStatus::Loading
    }

    /// Start a lookup for `term`. Blank terms are ignored and leave the
    /// session untouched.
    pub fn begin(&mut self, term: &str) -> Option<SearchRequest> {
        let term = term.trim();
        if term.is_empty() {
            return None;
        }
        self.last_issued += 1;
        self.status = SearchStatus::Loading;
        leptos::logging::log!("searching animals for {term} (request {})", self.last_issued);
        Some(SearchRequest { seq: self.last_issued, term: term.to_owned() })
    }

    /// Apply the outcome of `request`. Returns `false` if a newer request has
    /// been issued since, in which case nothing changes.
    pub fn complete(&mut self, request: &SearchRequest, outcome: Result<Vec<Animal>, FetchError>) -> bool {
        if request.seq != self.last_issued {
            leptos::logging::log!("discarding stale results for {} (request {})", request.term, request.seq);
            return false;
        }
        match outcome {
            Ok(animals) => {
                self.status = SearchStatus::Results(animals.len());
                self.results = animals;
                self.error = None;
            }
            Err(e) => {
                leptos::logging::warn!("error fetching animal data for {}: {e}", request.term);
                self.status = SearchStatus::Failed;
                self.results.clear();
                self.error = Some(e.to_string());
            }
        }
        true
    }

    /// Run one lookup for `term` through `source` and apply its outcome.
    pub async fn search<S: AnimalSource>(&mut self, term: &str, source: &S) -> SearchStatus {
        let Some(request) = self.begin(term) else {
            return self.status;
        };
        let outcome = source.fetch_animals(&request.term).await;
        self.complete(&request, outcome);
        self.status
    }
}
