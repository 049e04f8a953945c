//! Filter Bar Component
//!
//! Category and cuisine selects, liked-only toggle, free-text search and a
//! clear-all button. Every change resets the list to page 1.

use leptos::prelude::*;
use wasm_bindgen::JsCast;

use crate::filter::{FilterState, ALL};

/// Cuisine options offered by the catalog API
pub const AREAS: &[&str] = &[
    ALL,
    "American",
    "British",
    "Canadian",
    "Chinese",
    "Croatian",
    "Dutch",
    "Egyptian",
    "French",
    "Greek",
    "Indian",
    "Irish",
    "Italian",
    "Jamaican",
    "Japanese",
    "Kenyan",
    "Malaysian",
    "Mexican",
    "Moroccan",
    "Polish",
    "Portuguese",
    "Russian",
    "Spanish",
    "Thai",
    "Tunisian",
    "Turkish",
    "Unknown",
    "Vietnamese",
];

#[component]
pub fn FilterBar(
    filter_state: RwSignal<FilterState>,
    page: RwSignal<usize>,
    categories: Memo<Vec<String>>,
) -> impl IntoView {
    let select_value = |ev: &web_sys::Event| {
        let target = ev.target().unwrap();
        let select = target.dyn_ref::<web_sys::HtmlSelectElement>().unwrap();
        select.value()
    };

    view! {
        <div class="filter-bar">
            <input
                type="search"
                class="search-input"
                placeholder="Search meals..."
                prop:value=move || filter_state.get().query
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    let value = input.value();
                    filter_state.update(|filter| filter.query = value);
                    page.set(1);
                }
            />

            <select
                class="category-select"
                on:change=move |ev| {
                    let value = select_value(&ev);
                    filter_state.update(|filter| filter.category = value);
                    page.set(1);
                }
            >
                {move || categories.get().into_iter().map(|name| {
                    let value = name.clone();
                    view! {
                        <option
                            value=name.clone()
                            selected=move || filter_state.get().category == value
                        >
                            {name.clone()}
                        </option>
                    }
                }).collect_view()}
            </select>

            <select
                class="area-select"
                on:change=move |ev| {
                    let value = select_value(&ev);
                    filter_state.update(|filter| filter.area = value);
                    page.set(1);
                }
            >
                {AREAS.iter().map(|area| view! {
                    <option
                        value=*area
                        selected=move || filter_state.get().area == *area
                    >
                        {*area}
                    </option>
                }).collect_view()}
            </select>

            <button
                class=move || {
                    if filter_state.get().liked_only { "liked-toggle active" } else { "liked-toggle" }
                }
                on:click=move |_| {
                    filter_state.update(|filter| filter.liked_only = !filter.liked_only);
                    page.set(1);
                }
            >
                "♥ Liked"
            </button>

            <Show when=move || filter_state.get().is_active()>
                <button
                    class="clear-filters"
                    on:click=move |_| {
                        filter_state.update(|filter| filter.clear());
                        page.set(1);
                    }
                >
                    "× Clear filters"
                </button>
            </Show>
        </div>
    }
}
