//! Single page combining search, favorites, and rating.

use leptos::prelude::*;

use crate::components::favorites_panel::FavoritesPanel;
use crate::components::rating_panel::RatingPanel;
use crate::components::search_panel::SearchPanel;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <h1 class="home-page__title">"Wildlife Rating"</h1>
            <SearchPanel/>
            <FavoritesPanel/>
            <RatingPanel/>
        </div>
    }
}
