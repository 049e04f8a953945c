//! Local Override Store
//!
//! User-made changes layered over the remote catalog: edits of remote items
//! (whole-record overrides), locally created items, removed ids and liked
//! ids. Every collection is persisted in full, as a JSON array under its own
//! key, synchronously on each mutation, so the UI reflects the change on the
//! same render pass and a reload starts from the same state.

use std::collections::BTreeSet;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::models::{user_id, CatalogItem};
use crate::storage::StorageBackend;

pub const OVERRIDES_KEY: &str = "mealbook.overrides";
pub const USER_ITEMS_KEY: &str = "mealbook.user_items";
pub const REMOVED_KEY: &str = "mealbook.removed";
pub const LIKED_KEY: &str = "mealbook.liked";

/// Persisted user state. An id is tracked in `overrides` or `user_items`,
/// never both: the id namespace decides which collection an edit lands in.
#[derive(Clone, Debug)]
pub struct LocalStore<S: StorageBackend> {
    backend: S,
    overrides: Vec<CatalogItem>,
    user_items: Vec<CatalogItem>,
    removed: BTreeSet<String>,
    liked: BTreeSet<String>,
}

impl<S: StorageBackend> LocalStore<S> {
    /// Load all collections from the backend. Missing or corrupt entries
    /// fall back to the empty default.
    pub fn load(backend: S) -> Self {
        let overrides = read(&backend, OVERRIDES_KEY);
        let user_items = read(&backend, USER_ITEMS_KEY);
        let removed = read(&backend, REMOVED_KEY);
        let liked = read(&backend, LIKED_KEY);
        Self {
            backend,
            overrides,
            user_items,
            removed,
            liked,
        }
    }

    pub fn overrides(&self) -> &[CatalogItem] {
        &self.overrides
    }

    pub fn user_items(&self) -> &[CatalogItem] {
        &self.user_items
    }

    pub fn removed(&self) -> &BTreeSet<String> {
        &self.removed
    }

    pub fn liked(&self) -> &BTreeSet<String> {
        &self.liked
    }

    pub fn is_liked(&self, id: &str) -> bool {
        self.liked.contains(id)
    }

    pub fn is_removed(&self, id: &str) -> bool {
        self.removed.contains(id)
    }

    /// Record an edit. User-created items are updated in place; edits of
    /// remote items become overrides keyed by the remote id.
    pub fn record_edit(&mut self, item: CatalogItem) {
        if item.is_user_created() {
            upsert(&mut self.user_items, item);
            self.persist(USER_ITEMS_KEY, &self.user_items);
        } else {
            upsert(&mut self.overrides, item);
            self.persist(OVERRIDES_KEY, &self.overrides);
        }
    }

    /// Create a new local item. The id is the reserved prefix plus the
    /// caller-supplied millisecond timestamp.
    pub fn create_user_item(&mut self, mut item: CatalogItem, now_ms: u64) -> CatalogItem {
        item.id = user_id(now_ms);
        self.user_items.push(item.clone());
        self.persist(USER_ITEMS_KEY, &self.user_items);
        item
    }

    /// Soft-delete an id. Idempotent. Clears the like and drops any override
    /// record; a user-created item is discarded outright since it has no
    /// remote copy to fall back to.
    pub fn remove(&mut self, id: &str) {
        if self.removed.insert(id.to_string()) {
            self.persist(REMOVED_KEY, &self.removed);
        }
        if self.liked.remove(id) {
            self.persist(LIKED_KEY, &self.liked);
        }
        let override_count = self.overrides.len();
        self.overrides.retain(|item| item.id != id);
        if self.overrides.len() != override_count {
            self.persist(OVERRIDES_KEY, &self.overrides);
        }
        let user_count = self.user_items.len();
        self.user_items.retain(|item| item.id != id);
        if self.user_items.len() != user_count {
            self.persist(USER_ITEMS_KEY, &self.user_items);
        }
    }

    /// Undo a soft delete. Only the removed flag is cleared; overrides and
    /// user items deleted by `remove` stay gone.
    pub fn restore(&mut self, id: &str) {
        if self.removed.remove(id) {
            self.persist(REMOVED_KEY, &self.removed);
        }
    }

    /// Flip the liked flag for an id.
    pub fn toggle_like(&mut self, id: &str) {
        if !self.liked.insert(id.to_string()) {
            self.liked.remove(id);
        }
        self.persist(LIKED_KEY, &self.liked);
    }

    fn persist<T: Serialize>(&self, key: &str, value: &T) {
        if let Ok(raw) = serde_json::to_string(value) {
            self.backend.save(key, &raw);
        }
    }
}

fn read<S: StorageBackend, T: DeserializeOwned + Default>(backend: &S, key: &str) -> T {
    backend
        .load(key)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

fn upsert(items: &mut Vec<CatalogItem>, item: CatalogItem) {
    match items.iter_mut().find(|existing| existing.id == item.id) {
        Some(slot) => *slot = item,
        None => items.push(item),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn make_item(id: &str, name: &str) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            name: name.to_string(),
            category: "Dessert".to_string(),
            area: "British".to_string(),
            ..Default::default()
        }
    }

    fn setup_store() -> LocalStore<MemoryStorage> {
        LocalStore::load(MemoryStorage::default())
    }

    #[test]
    fn test_edit_of_remote_item_becomes_override() {
        let mut store = setup_store();
        store.record_edit(make_item("52772", "Teriyaki Chicken"));

        assert_eq!(store.overrides().len(), 1);
        assert!(store.user_items().is_empty());
    }

    #[test]
    fn test_second_edit_replaces_override() {
        let mut store = setup_store();
        store.record_edit(make_item("52772", "First"));
        store.record_edit(make_item("52772", "Second"));

        assert_eq!(store.overrides().len(), 1);
        assert_eq!(store.overrides()[0].name, "Second");
    }

    #[test]
    fn test_edit_of_user_item_updates_it_in_place() {
        let mut store = setup_store();
        let created = store.create_user_item(make_item("", "Draft"), 1_700_000_000_000);

        let mut edited = created.clone();
        edited.name = "Final".to_string();
        store.record_edit(edited);

        assert_eq!(store.user_items().len(), 1);
        assert_eq!(store.user_items()[0].name, "Final");
        assert!(store.overrides().is_empty());
    }

    #[test]
    fn test_create_assigns_namespaced_id() {
        let mut store = setup_store();
        let created = store.create_user_item(make_item("ignored", "Pie"), 42);

        assert_eq!(created.id, "user-42");
        assert!(created.is_user_created());
        assert_eq!(store.user_items()[0].id, "user-42");
    }

    #[test]
    fn test_remove_is_idempotent() {
        let mut store = setup_store();
        store.remove("52772");
        let after_first = store.removed().clone();
        store.remove("52772");

        assert_eq!(store.removed(), &after_first);
        assert!(store.is_removed("52772"));
    }

    #[test]
    fn test_remove_clears_like_and_override() {
        let mut store = setup_store();
        store.toggle_like("52772");
        store.record_edit(make_item("52772", "Edited"));

        store.remove("52772");

        assert!(!store.is_liked("52772"));
        assert!(store.overrides().is_empty());
    }

    #[test]
    fn test_remove_discards_user_item_outright() {
        let mut store = setup_store();
        let created = store.create_user_item(make_item("", "Mine"), 7);

        store.remove(&created.id);
        assert!(store.user_items().is_empty());

        // restore only clears the removed flag, the item stays gone
        store.restore(&created.id);
        assert!(store.user_items().is_empty());
        assert!(!store.is_removed(&created.id));
    }

    #[test]
    fn test_restore_does_not_resurrect_override() {
        let mut store = setup_store();
        store.record_edit(make_item("52772", "Edited"));
        store.remove("52772");
        store.restore("52772");

        assert!(!store.is_removed("52772"));
        assert!(store.overrides().is_empty());
    }

    #[test]
    fn test_toggle_like_is_its_own_inverse() {
        let mut store = setup_store();
        let before = store.liked().clone();

        store.toggle_like("2");
        assert!(store.is_liked("2"));
        store.toggle_like("2");

        assert_eq!(store.liked(), &before);
    }

    #[test]
    fn test_state_survives_reload_from_same_backend() {
        let backend = MemoryStorage::default();

        let mut store = LocalStore::load(backend.clone());
        store.record_edit(make_item("52772", "Edited"));
        store.create_user_item(make_item("", "Mine"), 9);
        store.toggle_like("52772");
        store.remove("52893");

        let reloaded = LocalStore::load(backend);
        assert_eq!(reloaded.overrides().len(), 1);
        assert_eq!(reloaded.user_items().len(), 1);
        assert!(reloaded.is_liked("52772"));
        assert!(reloaded.is_removed("52893"));
    }

    #[test]
    fn test_corrupt_persisted_json_falls_back_to_empty() {
        let backend = MemoryStorage::default();
        backend.save(OVERRIDES_KEY, "{not json");
        backend.save(LIKED_KEY, "42");

        let store = LocalStore::load(backend);
        assert!(store.overrides().is_empty());
        assert!(store.liked().is_empty());
    }
}
