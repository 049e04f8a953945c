//! Meal List Component
//!
//! The list screen: filter bar, result grid, pagination and the removed
//! panel. A failed fetch shows once and does not hide locally created
//! items.

use leptos::prelude::*;

use crate::filter::{FilterState, Page};
use crate::store::{use_app_store, AppStateStoreFields, RemoteState};

use super::{FilterBar, MealCard, Pagination, RemovedPanel};

#[component]
pub fn MealList(
    page_data: Memo<Page>,
    filter_state: RwSignal<FilterState>,
    page: RwSignal<usize>,
    categories: Memo<Vec<String>>,
) -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="meal-list">
            <FilterBar filter_state=filter_state page=page categories=categories/>

            {move || match store.remote_state().get() {
                RemoteState::Loading => view! {
                    <p class="loading">"Loading meals..."</p>
                }
                .into_any(),
                RemoteState::Failed(message) => view! {
                    <p class="load-error">{format!("Failed to load meals: {message}")}</p>
                }
                .into_any(),
                RemoteState::Ready => ().into_any(),
            }}

            {move || {
                let data = page_data.get();
                if data.total == 0 {
                    view! { <p class="empty">"No meals match the current filters."</p> }
                        .into_any()
                } else {
                    view! {
                        <div class="meal-grid">
                            {data
                                .items
                                .into_iter()
                                .map(|item| view! { <MealCard item=item/> })
                                .collect_view()}
                        </div>
                    }
                    .into_any()
                }
            }}

            <p class="item-count">
                {move || format!("{} meals", page_data.get().total)}
            </p>

            <Pagination page=page page_data=page_data/>

            <RemovedPanel/>
        </div>
    }
}
