//! Reconciliation
//!
//! Merges the latest remote fetch with the local override store into the
//! effective catalog shown to the user. Pure functions, re-run whenever
//! either input changes.

use std::collections::{BTreeSet, HashMap};

use crate::models::CatalogItem;

/// Build the effective catalog from a remote fetch result and local state.
///
/// Removed ids are dropped, overrides replace the fetched record wholesale
/// (never a field-level merge), and user-created items are appended in
/// creation order. Remote ordering is preserved, with substitution in place.
///
/// The two sources are independent: before the first fetch completes,
/// `remote` is empty and the result is exactly the user-created items. An
/// override whose target is missing from `remote` is simply inert.
pub fn effective_catalog(
    remote: &[CatalogItem],
    overrides: &[CatalogItem],
    user_items: &[CatalogItem],
    removed: &BTreeSet<String>,
) -> Vec<CatalogItem> {
    let override_by_id: HashMap<&str, &CatalogItem> = overrides
        .iter()
        .map(|item| (item.id.as_str(), item))
        .collect();

    let mut catalog: Vec<CatalogItem> = remote
        .iter()
        .filter(|item| !removed.contains(&item.id))
        .map(|item| match override_by_id.get(item.id.as_str()) {
            Some(edited) => (*edited).clone(),
            None => item.clone(),
        })
        .collect();

    catalog.extend(user_items.iter().cloned());
    catalog
}

/// Resolve a single id for the detail view: override first, then user item,
/// then the cached remote list. `None` means the caller should fall back to
/// a direct single-item fetch.
pub fn lookup(
    id: &str,
    overrides: &[CatalogItem],
    user_items: &[CatalogItem],
    remote: &[CatalogItem],
) -> Option<CatalogItem> {
    overrides
        .iter()
        .find(|item| item.id == id)
        .or_else(|| user_items.iter().find(|item| item.id == id))
        .or_else(|| remote.iter().find(|item| item.id == id))
        .cloned()
}
