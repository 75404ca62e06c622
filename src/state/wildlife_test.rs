use std::cell::RefCell;
use std::future::Future;
use std::sync::Arc;

use futures::executor::block_on;

use super::*;
use crate::net::api::AnimalSource;
use crate::net::types::FetchError;
use crate::state::favorites::FAVORITES_KEY;
use crate::state::rating::{RatingRecord, rating_key};
use crate::state::search::{SearchSession, SearchStatus};
use crate::util::storage::MemoryStore;

struct CannedSource {
    calls: RefCell<Vec<String>>,
    body: &'static str,
}

impl AnimalSource for CannedSource {
    fn fetch_animals(&self, name: &str) -> impl Future<Output = Result<Vec<Animal>, FetchError>> {
        self.calls.borrow_mut().push(name.to_owned());
        std::future::ready(crate::net::api::decode_animals(self.body))
    }
}

fn animal(name: &str) -> Animal {
    serde_json::from_str(&format!(r#"{{"name":"{name}","characteristics":{{"habitat":"Savannah","diet":"Carnivore"}}}}"#))
        .unwrap()
}

// =============================================================
// Coordination
// =============================================================

#[test]
fn removing_selected_favorite_clears_selection() {
    let (store, _) = PersistentStore::in_memory();
    let mut state = WildlifeState::load(store);
    assert!(state.add_favorite(animal("Lion")).persisted.is_ok());
    assert!(state.select_favorite("Lion"));
    assert!(state.remove_favorite("Lion").persisted.is_ok());
    assert!(state.rating().selected().is_none());
    assert!(state.favorites().is_empty());
}

#[test]
fn removing_other_favorite_keeps_selection() {
    let (store, _) = PersistentStore::in_memory();
    let mut state = WildlifeState::load(store);
    assert!(state.add_favorite(animal("Lion")).persisted.is_ok());
    assert!(state.add_favorite(animal("Tiger")).persisted.is_ok());
    assert!(state.select_favorite("Lion"));
    assert!(state.remove_favorite("Tiger").persisted.is_ok());
    assert_eq!(state.rating().selected_name(), Some("Lion"));
}

#[test]
fn select_missing_favorite_is_noop() {
    let (store, _) = PersistentStore::in_memory();
    let mut state = WildlifeState::load(store);
    assert!(!state.select_favorite("Okapi"));
    assert!(state.rating().selected().is_none());
}

#[test]
fn removing_favorite_leaves_rating_record() {
    let (store, backend) = PersistentStore::in_memory();
    let mut state = WildlifeState::load(store);
    assert!(state.add_favorite(animal("Lion")).persisted.is_ok());
    assert!(state.select_favorite("Lion"));
    assert!(state.save_rating().is_ok());
    assert!(state.remove_favorite("Lion").persisted.is_ok());
    assert!(backend.raw(&rating_key("Lion")).is_some());
}

#[test]
fn duplicate_favorites_share_one_rating_record() {
    let (store, _) = PersistentStore::in_memory();
    let mut state = WildlifeState::load(store);
    assert!(state.add_favorite(animal("Lion")).persisted.is_ok());
    assert!(state.add_favorite(animal("Lion")).persisted.is_ok());
    assert!(state.select_favorite("Lion"));
    state.rating_mut().set_rating(2);
    assert!(state.save_rating().is_ok());
    assert!(state.select_favorite("Lion"));
    state.rating_mut().set_rating(5);
    assert!(state.save_rating().is_ok());
    assert_eq!(state.rating().saved_record("Lion").map(|r| r.rating), Some(5));
}

#[test]
fn write_failure_sets_warning_and_keeps_memory_state() {
    let store = PersistentStore::new(Arc::new(MemoryStore::with_quota(8)));
    let mut state = WildlifeState::load(store);
    assert!(state.add_favorite(animal("Lion")).persisted.is_err());
    assert!(state.favorites().contains("Lion"));
    assert!(state.storage_warning().is_some());
    assert!(state.select_favorite("Lion"));
    assert!(state.save_rating().is_err());
    assert!(state.storage_warning().is_some());
}

#[test]
fn rating_save_does_not_clear_unsaved_favorites_warning() {
    let store = PersistentStore::new(Arc::new(MemoryStore::with_quota(120)));
    let mut state = WildlifeState::load(store.clone());
    let mut characteristics = crate::net::types::Characteristics::new();
    characteristics.insert("notes".into(), "x".repeat(200).into());
    assert!(state.add_favorite(Animal::new("Lion", characteristics)).persisted.is_err());
    assert!(state.select_favorite("Lion"));
    assert!(state.save_rating().is_ok());
    assert!(state.storage_warning().is_some());
    assert!(store.load::<Vec<Animal>>(FAVORITES_KEY).is_none());

    assert!(state.remove_favorite("Lion").persisted.is_ok());
    assert!(state.storage_warning().is_none());
}

#[test]
fn favorites_write_does_not_clear_rating_warning() {
    let mut state = WildlifeState::load(PersistentStore::new(Arc::new(MemoryStore::with_quota(100))));
    assert!(state.add_favorite(animal("Lion")).persisted.is_ok());
    assert!(state.select_favorite("Lion"));
    assert!(matches!(state.save_rating(), Err(RatingError::Storage(_))));
    assert!(state.remove_favorite("Lion").persisted.is_ok());
    assert!(state.storage_warning().is_some());
}

#[test]
fn successful_write_clears_matching_warning() {
    let (store, _) = PersistentStore::in_memory();
    let mut state = WildlifeState::load(store);
    state.favorites_warning = Some("quota".into());
    state.rating_warning = Some("quota".into());
    assert!(state.add_favorite(animal("Lion")).persisted.is_ok());
    assert_eq!(state.storage_warning(), Some("quota"));
    assert!(state.select_favorite("Lion"));
    assert!(state.save_rating().is_ok());
    assert!(state.storage_warning().is_none());
}

#[test]
fn rating_for_animal_named_like_favorites_key_keeps_collection() {
    let (store, _) = PersistentStore::in_memory();
    let mut state = WildlifeState::load(store.clone());
    assert!(state.add_favorite(animal(FAVORITES_KEY)).persisted.is_ok());
    assert!(state.select_favorite(FAVORITES_KEY));
    state.rating_mut().set_rating(3);
    assert!(state.save_rating().is_ok());
    assert_eq!(store.load::<Vec<Animal>>(FAVORITES_KEY).map(|f| f.len()), Some(1));
    assert_eq!(state.rating().saved_record(FAVORITES_KEY).map(|r| r.rating), Some(3));
}

#[test]
fn reload_restores_favorites_but_not_selection() {
    let (store, _) = PersistentStore::in_memory();
    let mut state = WildlifeState::load(store.clone());
    assert!(state.add_favorite(animal("Lion")).persisted.is_ok());
    assert!(state.select_favorite("Lion"));
    let reloaded = WildlifeState::load(store);
    assert_eq!(reloaded.favorites().list(), state.favorites().list());
    assert!(reloaded.rating().selected().is_none());
}

// =============================================================
// End-to-end flows
// =============================================================

#[test]
fn lion_search_add_rate_save_flow() {
    let source = CannedSource {
        calls: RefCell::new(Vec::new()),
        body: r#"[{"name":"Lion","characteristics":{"habitat":"Savannah","diet":"Carnivore"}}]"#,
    };
    let (store, _) = PersistentStore::in_memory();
    let mut search = SearchSession::default();
    let mut state = WildlifeState::load(store.clone());

    assert_eq!(block_on(search.search("Lion", &source)), SearchStatus::Results(1));
    let found = search.results[0].clone();

    assert!(state.add_favorite(found).persisted.is_ok());
    let names: Vec<_> = state.favorites().list().iter().map(|a| a.name.as_str()).collect();
    assert_eq!(names, vec!["Lion"]);
    assert_eq!(store.load::<Vec<Animal>>(FAVORITES_KEY).as_deref(), Some(state.favorites().list()));

    assert!(state.select_favorite("Lion"));
    assert_eq!(state.rating().attributes(), ["habitat".to_owned(), "diet".to_owned()]);
    state.rating_mut().set_rating(4);
    assert_eq!(state.rating_mut().toggle_attribute("habitat"), Ok(true));
    let confirmation = state.save_rating().unwrap();
    assert_eq!(confirmation.message(), "Saved rating for Lion");

    let record: Option<RatingRecord> = store.load(&rating_key("Lion"));
    assert_eq!(
        record,
        Some(RatingRecord { animal_name: "Lion".into(), rating: 4, liked_attributes: vec!["habitat".into()] })
    );
}

#[test]
fn empty_search_term_issues_no_fetch() {
    let source = CannedSource {
        calls: RefCell::new(Vec::new()),
        body: r#"[{"name":"Lion","characteristics":{}}]"#,
    };
    let mut search = SearchSession::default();
    block_on(search.search("Lion", &source));
    block_on(search.search("", &source));
    assert_eq!(source.calls.borrow().len(), 1);
    assert_eq!(search.results.len(), 1);
}

#[test]
fn failed_search_yields_empty_results() {
    let source = CannedSource { calls: RefCell::new(Vec::new()), body: r#"{"error":"Invalid API Key."}"# };
    let mut search = SearchSession::default();
    assert_eq!(block_on(search.search("Zzz", &source)), SearchStatus::Failed);
    assert!(search.results.is_empty());
}
