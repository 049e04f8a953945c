//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Holds the
//! remote side of the world: the latest fetch result and the fetched
//! category names. User-made state lives in the persisted local store.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::CatalogItem;

/// Outcome of the bulk remote fetch. A failure is surfaced once and not
/// retried; user-created items still render without remote data.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum RemoteState {
    #[default]
    Loading,
    Ready,
    Failed(String),
}

/// Remote-derived application state
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Latest bulk fetch result, in API order
    pub remote_items: Vec<CatalogItem>,
    /// Category names from the categories endpoint
    pub categories: Vec<String>,
    /// Bulk fetch status
    pub remote_state: RemoteState,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the remote snapshot after a successful fetch
pub fn store_set_remote(store: &AppStore, items: Vec<CatalogItem>) {
    *store.remote_items().write() = items;
    *store.remote_state().write() = RemoteState::Ready;
}

/// Record a failed bulk fetch
pub fn store_set_remote_failed(store: &AppStore, message: String) {
    *store.remote_state().write() = RemoteState::Failed(message);
}

/// Replace the fetched category names
pub fn store_set_categories(store: &AppStore, categories: Vec<String>) {
    *store.categories().write() = categories;
}
