//! Card frame shared by search results and favorites.

use leptos::prelude::*;

/// An animal name with its action buttons underneath.
#[component]
pub fn AnimalCard(name: String, children: Children) -> impl IntoView {
    view! {
        <div class="animal-card">
            <h2 class="animal-card__name">{name}</h2>
            <div class="animal-card__actions">{children()}</div>
        </div>
    }
}
