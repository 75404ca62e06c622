//! Favorites list with rate/remove actions and the storage warning banner.

use leptos::prelude::*;

use crate::components::animal_card::AnimalCard;
use crate::state::wildlife::WildlifeState;

#[component]
pub fn FavoritesPanel() -> impl IntoView {
    let wildlife = expect_context::<RwSignal<WildlifeState>>();

    let on_rate = Callback::new(move |name: String| {
        wildlife.update(|w| {
            if !w.select_favorite(&name) {
                leptos::logging::warn!("cannot rate {name}: not a favorite");
            }
        });
    });
    let on_remove = Callback::new(move |name: String| {
        wildlife.update(|w| {
            w.remove_favorite(&name);
        });
    });

    view! {
        <section class="favorites">
            <h2 class="favorites__title">"Favorite Animals"</h2>
            <Show when=move || wildlife.with(|w| w.storage_warning().is_some())>
                <p class="favorites__warning" role="alert">
                    "Changes could not be saved in this browser: "
                    {move || wildlife.with(|w| w.storage_warning().unwrap_or_default().to_owned())}
                </p>
            </Show>
            <div class="favorites__list">
                {move || {
                    let names: Vec<String> = wildlife
                        .with(|w| w.favorites().list().iter().map(|a| a.name.clone()).collect());
                    if names.is_empty() {
                        return view! { <p class="favorites__empty">"No favorite animals added yet."</p> }
                            .into_any();
                    }
                    names
                        .into_iter()
                        .map(|name| {
                            let rate_name = name.clone();
                            let remove_name = name.clone();
                            view! {
                                <AnimalCard name=name>
                                    <button class="btn" on:click=move |_| on_rate.run(rate_name.clone())>
                                        "Rate"
                                    </button>
                                    <button
                                        class="btn btn--danger"
                                        on:click=move |_| on_remove.run(remove_name.clone())
                                    >
                                        "Remove"
                                    </button>
                                </AnimalCard>
                            }
                        })
                        .collect_view()
                        .into_any()
                }}
            </div>
        </section>
    }
}
