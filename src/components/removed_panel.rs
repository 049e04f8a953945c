//! Removed Panel Component
//!
//! Collapsible list of soft-deleted ids with restore buttons. Restoring
//! only clears the removed flag; a removed user-created item has no data
//! left to come back.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn RemovedPanel() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();

    let removed = Memo::new(move |_| {
        ctx.local
            .with(|local| local.removed().iter().cloned().collect::<Vec<String>>())
    });

    // Resolve a display name from the raw fetch; removed items are absent
    // from the effective catalog by definition.
    let display_name = move |id: &str| {
        store
            .remote_items()
            .read()
            .iter()
            .find(|item| item.id == id)
            .map(|item| item.name.clone())
            .unwrap_or_else(|| format!("#{id} (no longer available)"))
    };

    view! {
        <Show when=move || !removed.get().is_empty()>
            <details class="removed-panel">
                <summary>
                    {move || format!("Removed meals ({})", removed.get().len())}
                </summary>
                <ul class="removed-list">
                    {move || removed.get().into_iter().map(|id| {
                        let restore_id = id.clone();
                        view! {
                            <li class="removed-item">
                                <span>{display_name(&id)}</span>
                                <button
                                    class="restore-btn"
                                    on:click=move |_| {
                                        let id = restore_id.clone();
                                        ctx.local.update(|local| local.restore(&id));
                                    }
                                >
                                    "Restore"
                                </button>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </details>
        </Show>
    }
}
