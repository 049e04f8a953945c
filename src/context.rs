//! Application Context
//!
//! Shared state provided via Leptos Context API: the current screen and
//! the persisted local store.

use leptos::prelude::*;

use crate::local::LocalStore;
use crate::storage::LocalStorage;

/// Which view is showing. There is no router; navigation is a signal.
#[derive(Clone, Debug, PartialEq)]
pub enum Screen {
    List,
    Detail(String),
    Create,
    Edit(String),
}

/// App-wide state provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current screen - read
    pub screen: ReadSignal<Screen>,
    /// Current screen - write
    set_screen: WriteSignal<Screen>,
    /// Persisted user state; mutations persist synchronously
    pub local: RwSignal<LocalStore<LocalStorage>>,
}

impl AppContext {
    pub fn new(
        screen: (ReadSignal<Screen>, WriteSignal<Screen>),
        local: RwSignal<LocalStore<LocalStorage>>,
    ) -> Self {
        Self {
            screen: screen.0,
            set_screen: screen.1,
            local,
        }
    }

    /// Navigate to a screen
    pub fn go_to(&self, screen: Screen) {
        self.set_screen.set(screen);
    }

    /// Back to the list view
    pub fn show_list(&self) {
        self.go_to(Screen::List);
    }
}

/// Get the app context
pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
