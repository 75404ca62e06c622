//! Rating form for the selected favorite.
//!
//! The form starts blank on every selection. The last saved record is shown
//! alongside as read-only context but is never copied into the inputs.

use leptos::prelude::*;

use crate::state::rating::{MAX_RATING, MIN_RATING, SaveConfirmation};
use crate::state::wildlife::WildlifeState;

#[component]
pub fn RatingPanel() -> impl IntoView {
    let wildlife = expect_context::<RwSignal<WildlifeState>>();

    view! {
        <Show when=move || wildlife.with(|w| w.rating().selected().is_some())>
            <RatingForm wildlife=wildlife/>
        </Show>
    }
}

#[component]
fn RatingForm(wildlife: RwSignal<WildlifeState>) -> impl IntoView {
    let name = move || wildlife.with(|w| w.rating().selected_name().unwrap_or_default().to_owned());

    let on_rating_input = move |ev: leptos::ev::Event| {
        // Non-numeric input counts as zero.
        let value = event_target_value(&ev).trim().parse::<i64>().unwrap_or(0);
        wildlife.update(|w| {
            w.rating_mut().set_rating(value);
        });
    };

    let on_save = move |_| match wildlife.try_update(WildlifeState::save_rating) {
        Some(Ok(confirmation)) => notify(&confirmation.message()),
        Some(Err(e)) => leptos::logging::warn!("rating not saved: {e}"),
        None => {}
    };

    let last_saved = move || {
        wildlife.with(|w| {
            let rating = w.rating();
            rating
                .selected_name()
                .and_then(|n| rating.saved_record(n))
                .map(|record| format!("Last saved: {}/{MAX_RATING}", record.rating))
        })
    };

    view! {
        <div class="rating-panel">
            <h2 class="rating-panel__name">{name}</h2>
            <p class="rating-panel__last-saved">{last_saved}</p>
            <input
                type="number"
                class="rating-panel__rating"
                min=MIN_RATING.to_string()
                max=MAX_RATING.to_string()
                placeholder="Rate (0-5)"
                prop:value=move || wildlife.with(|w| w.rating().rating().to_string())
                on:input=on_rating_input
            />
            <div class="rating-panel__attributes">
                {move || {
                    wildlife
                        .with(|w| w.rating().attributes().to_vec())
                        .into_iter()
                        .map(|attr| view! { <AttributeToggle wildlife=wildlife attr=attr/> })
                        .collect_view()
                }}
            </div>
            <button class="btn rating-panel__save" on:click=on_save>
                "Save"
            </button>
            <p class="rating-panel__confirmation">
                {move || wildlife.with(|w| w.rating().confirmation().map(SaveConfirmation::message))}
            </p>
        </div>
    }
}

#[component]
fn AttributeToggle(wildlife: RwSignal<WildlifeState>, attr: String) -> impl IntoView {
    let checked_attr = attr.clone();
    let toggle_attr = attr.clone();
    let value_attr = attr.clone();
    let value = move || {
        wildlife.with(|w| {
            w.rating()
                .selected()
                .and_then(|animal| animal.characteristic_text(&value_attr))
                .map(|text| format!(" ({text})"))
        })
    };
    let on_change = move |_| {
        wildlife.update(|w| {
            if let Err(e) = w.rating_mut().toggle_attribute(&toggle_attr) {
                leptos::logging::warn!("cannot toggle {toggle_attr}: {e}");
            }
        });
    };

    view! {
        <label class="rating-panel__attribute">
            <input
                type="checkbox"
                prop:checked=move || wildlife.with(|w| w.rating().is_liked(&checked_attr))
                on:change=on_change
            />
            <span>{attr}</span>
            <span class="rating-panel__attribute-value">{value}</span>
        </label>
    }
}

/// Tell the user a save went through.
fn notify(message: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.alert_with_message(message) {
                leptos::logging::warn!("alert failed: {e:?}");
            }
        }
    }
    leptos::logging::log!("{message}");
}
