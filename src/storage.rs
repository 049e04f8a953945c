//! Persistence Seam
//!
//! Key-value storage behind a small trait so the local store can be tested
//! without a browser. The real backend is `window.localStorage`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// Whole-value key-value persistence.
pub trait StorageBackend: Clone {
    /// Read the stored value for `key`, if any.
    fn load(&self, key: &str) -> Option<String>;
    /// Write `value` under `key`, replacing whatever was there.
    fn save(&self, key: &str, value: &str);
}

/// Browser localStorage backend.
///
/// Load and save failures (storage disabled, quota exceeded) degrade to
/// "nothing stored" rather than panicking; the store falls back to its
/// empty defaults.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl StorageBackend for LocalStorage {
    fn load(&self, key: &str) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(key).ok()?
    }

    fn save(&self, key: &str, value: &str) {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
        else {
            return;
        };
        if storage.set_item(key, value).is_err() {
            web_sys::console::error_1(&format!("[STORAGE] failed to persist {}", key).into());
        }
    }
}

/// In-memory backend for tests.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl StorageBackend for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::default();
        assert_eq!(storage.load("missing"), None);

        storage.save("key", "one");
        storage.save("key", "two");
        assert_eq!(storage.load("key").as_deref(), Some("two"));
    }

    #[test]
    fn test_memory_storage_is_shared_across_clones() {
        let storage = MemoryStorage::default();
        storage.clone().save("key", "value");
        assert_eq!(storage.load("key").as_deref(), Some("value"));
    }
}
