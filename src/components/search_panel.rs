//! Search form and results grid.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submitting the form starts a lookup on the shared `SearchSession`; the
//! response is applied when it arrives, unless a newer search superseded it.
//! Each result can be appended to the favorites.

use leptos::prelude::*;

use crate::components::animal_card::AnimalCard;
use crate::net::api::AnimalsApi;
use crate::net::types::{Animal, FetchError};
use crate::state::search::{SearchRequest, SearchSession};
use crate::state::wildlife::WildlifeState;

#[component]
pub fn SearchPanel() -> impl IntoView {
    let search = expect_context::<RwSignal<SearchSession>>();
    let wildlife = expect_context::<RwSignal<WildlifeState>>();
    let api = expect_context::<Option<AnimalsApi>>();
    let term = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(request) = search.try_update(|s| s.begin(&term.get_untracked())).flatten() else {
            return;
        };
        run_lookup(api.clone(), search, request);
    };

    let on_add = Callback::new(move |animal: Animal| {
        wildlife.update(|w| {
            w.add_favorite(animal);
        });
    });

    view! {
        <form class="search-form" on:submit=on_submit>
            <input
                type="text"
                class="search-form__input"
                placeholder="Search for an animal..."
                prop:value=move || term.get()
                on:input=move |ev| term.set(event_target_value(&ev))
            />
            <button type="submit" class="btn search-form__submit">
                "Search"
            </button>
        </form>

        <Show
            when=move || !search.with(SearchSession::is_loading)
            fallback=|| view! { <p class="search-status">"Loading animals..."</p> }
        >
            <div class="animal-grid">
                {move || {
                    let results = search.with(|s| s.results.clone());
                    if results.is_empty() {
                        return view! {
                            <p class="animal-grid__empty">"No animals found. Please try another search."</p>
                        }
                            .into_any();
                    }
                    results
                        .into_iter()
                        .map(|animal| {
                            let name = animal.name.clone();
                            view! {
                                <AnimalCard name=name>
                                    <button class="btn" on:click=move |_| on_add.run(animal.clone())>
                                        "Add to Favorites"
                                    </button>
                                </AnimalCard>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>
        </Show>
    }
}

/// Await `request` against the API and apply the outcome to `search`.
fn run_lookup(api: Option<AnimalsApi>, search: RwSignal<SearchSession>, request: SearchRequest) {
    #[cfg(feature = "csr")]
    {
        use crate::net::api::AnimalSource as _;

        leptos::task::spawn_local(async move {
            let outcome = match &api {
                Some(api) => api.fetch_animals(&request.term).await,
                None => Err(FetchError::NotConfigured),
            };
            search.update(|s| {
                s.complete(&request, outcome);
            });
        });
    }
    #[cfg(not(feature = "csr"))]
    {
        drop(api);
        search.update(|s| {
            s.complete(&request, Err(FetchError::NotConfigured));
        });
    }
}
