//! Mealbook App
//!
//! Top-level component: fetches the remote catalog once on mount, derives
//! the effective (reconciled, filtered, paginated) view and dispatches the
//! current screen.

use std::collections::BTreeSet;

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{EditMeal, MealDetail, MealForm, MealList};
use crate::context::{use_app_context, AppContext, Screen};
use crate::filter::{self, FilterState, ALL};
use crate::local::LocalStore;
use crate::reconcile;
use crate::storage::LocalStorage;
use crate::store::{
    store_set_categories, store_set_remote, store_set_remote_failed, AppState,
    AppStateStoreFields, AppStore,
};

#[component]
pub fn App() -> impl IntoView {
    let store: AppStore = Store::new(AppState::default());
    provide_context(store);

    let (screen, set_screen) = signal(Screen::List);
    let local = RwSignal::new(LocalStore::load(LocalStorage));
    provide_context(AppContext::new((screen, set_screen), local));
    let ctx = use_app_context();

    let filter_state = RwSignal::new(FilterState::default());
    let page = RwSignal::new(1usize);

    // Load the catalog on mount. A failed fetch is reported once, never
    // retried; user-created items render regardless.
    Effect::new(move |_| {
        spawn_local(async move {
            match api::fetch_popular().await {
                Ok(items) => {
                    web_sys::console::log_1(
                        &format!("[APP] Loaded {} meals", items.len()).into(),
                    );
                    store_set_remote(&store, items);
                }
                Err(err) => {
                    web_sys::console::error_1(&format!("[APP] fetch failed: {err}").into());
                    store_set_remote_failed(&store, err.to_string());
                }
            }
            match api::fetch_categories().await {
                Ok(categories) => store_set_categories(&store, categories),
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("[APP] categories fetch failed: {err}").into(),
                    );
                }
            }
        });
    });

    // Remote snapshot merged with local overrides, creations and removals
    let effective = Memo::new(move |_| {
        let remote = store.remote_items().read();
        ctx.local.with(|local| {
            reconcile::effective_catalog(
                &remote,
                local.overrides(),
                local.user_items(),
                local.removed(),
            )
        })
    });

    let filtered = Memo::new(move |_| {
        let items = effective.get();
        let current = filter_state.get();
        ctx.local
            .with(|local| filter::apply(&items, &current, local.liked()))
    });

    let page_data = Memo::new(move |_| filter::paginate(&filtered.get(), page.get()));

    // "all" plus fetched category names plus anything seen on the items
    let categories = Memo::new(move |_| {
        let mut names = BTreeSet::new();
        names.extend(store.categories().get());
        for item in effective.get() {
            if !item.category.is_empty() {
                names.insert(item.category);
            }
        }
        let mut options = vec![ALL.to_string()];
        options.extend(names);
        options
    });

    view! {
        <div class="app-layout">
            <header class="navbar">
                <h1 class="brand" on:click=move |_| ctx.show_list()>"Mealbook"</h1>
                <nav>
                    <button class="nav-link" on:click=move |_| ctx.show_list()>
                        "All meals"
                    </button>
                    <button class="nav-link" on:click=move |_| ctx.go_to(Screen::Create)>
                        "+ Add meal"
                    </button>
                </nav>
            </header>

            <main class="main-content">
                {move || match screen.get() {
                    Screen::List => view! {
                        <MealList
                            page_data=page_data
                            filter_state=filter_state
                            page=page
                            categories=categories
                        />
                    }
                    .into_any(),
                    Screen::Detail(id) => view! { <MealDetail id=id/> }.into_any(),
                    Screen::Create => view! { <MealForm/> }.into_any(),
                    Screen::Edit(id) => view! { <EditMeal id=id/> }.into_any(),
                }}
            </main>
        </div>
    }
}
