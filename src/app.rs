//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::config::ApiConfig;
use crate::net::api::AnimalsApi;
use crate::pages::home::HomePage;
use crate::state::search::SearchSession;
use crate::state::wildlife::WildlifeState;
use crate::util::storage::PersistentStore;

/// Root application component.
///
/// Hydrates favorites from `localStorage` and provides the shared state
/// contexts. A missing API key is logged and leaves search returning no
/// results; the rest of the app keeps working.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let wildlife = RwSignal::new(WildlifeState::load(PersistentStore::browser()));
    let search = RwSignal::new(SearchSession::default());
    let api = match ApiConfig::from_build_env() {
        Ok(config) => Some(AnimalsApi::new(config)),
        Err(e) => {
            leptos::logging::warn!("animal search disabled: {e}");
            None
        }
    };

    provide_context(wildlife);
    provide_context(search);
    provide_context(api);

    view! {
        <Title text="Wildlife Rating"/>
        <main class="container">
            <HomePage/>
        </main>
    }
}
