//! Filter and Pagination
//!
//! Predicate application over the effective catalog plus fixed-size
//! pagination. Filter state is ephemeral UI state and is never persisted.

use std::collections::BTreeSet;

use crate::models::CatalogItem;

/// Sentinel option meaning "no filter" for category and area selects.
pub const ALL: &str = "all";

/// Free-text search only kicks in from this query length; shorter queries
/// match everything rather than nothing.
pub const MIN_QUERY_LEN: usize = 3;

pub const PAGE_SIZE: usize = 12;

#[derive(Clone, Debug, PartialEq)]
pub struct FilterState {
    pub category: String,
    pub area: String,
    pub liked_only: bool,
    pub query: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            category: ALL.to_string(),
            area: ALL.to_string(),
            liked_only: false,
            query: String::new(),
        }
    }
}

impl FilterState {
    /// Reset every predicate to its pass-through default.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_active(&self) -> bool {
        *self != Self::default()
    }
}

/// Apply all active predicates (logical AND) in catalog order.
pub fn apply(
    items: &[CatalogItem],
    filter: &FilterState,
    liked: &BTreeSet<String>,
) -> Vec<CatalogItem> {
    let query = filter.query.to_lowercase();
    let search_active = filter.query.chars().count() >= MIN_QUERY_LEN;

    items
        .iter()
        .filter(|item| {
            let matches_liked = !filter.liked_only || liked.contains(&item.id);
            let matches_category = filter.category == ALL || item.category == filter.category;
            let matches_area = filter.area == ALL || item.area == filter.area;
            let matches_search = !search_active
                || item.name.to_lowercase().contains(&query)
                || item.category.to_lowercase().contains(&query)
                || item.area.to_lowercase().contains(&query);

            matches_liked && matches_category && matches_area && matches_search
        })
        .cloned()
        .collect()
}

/// One page of results plus the totals the pagination controls need.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Page {
    pub items: Vec<CatalogItem>,
    pub total: usize,
    pub total_pages: usize,
    pub current: usize,
}

/// Slice out a 1-based page of `PAGE_SIZE` items. An out-of-range page
/// yields an empty slice; clamping is left to the controls.
pub fn paginate(items: &[CatalogItem], page: usize) -> Page {
    let total = items.len();
    let total_pages = total.div_ceil(PAGE_SIZE);
    let start = page.saturating_sub(1) * PAGE_SIZE;
    let slice = if page == 0 || start >= total {
        Vec::new()
    } else {
        items[start..(start + PAGE_SIZE).min(total)].to_vec()
    };
    Page {
        items: slice,
        total,
        total_pages,
        current: page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_item(id: &str, name: &str, category: &str, area: &str) -> CatalogItem {
        CatalogItem {
            id: id.to_string(),
            name: name.to_string(),
            category: category.to_string(),
            area: area.to_string(),
            ..Default::default()
        }
    }

    fn sample() -> Vec<CatalogItem> {
        vec![
            make_item("1", "Apple Frangipan Tart", "Dessert", "British"),
            make_item("2", "Beef Banh Mi", "Beef", "Vietnamese"),
            make_item("3", "Banana Pancakes", "Dessert", "American"),
        ]
    }

    #[test]
    fn test_default_filter_passes_everything_through() {
        let items = sample();
        let out = apply(&items, &FilterState::default(), &BTreeSet::new());
        assert_eq!(out, items);
    }

    #[test]
    fn test_category_filter_is_exact_match() {
        let items = sample();
        let filter = FilterState {
            category: "Dessert".to_string(),
            ..Default::default()
        };

        let out = apply(&items, &filter, &BTreeSet::new());
        let ids: Vec<&str> = out.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, ["1", "3"]);
    }

    #[test]
    fn test_area_filter_is_exact_match() {
        let items = sample();
        let filter = FilterState {
            area: "Vietnamese".to_string(),
            ..Default::default()
        };

        let out = apply(&items, &filter, &BTreeSet::new());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "2");
    }

    #[test]
    fn test_liked_only_checks_membership() {
        let items = sample();
        let liked: BTreeSet<String> = ["2".to_string()].into_iter().collect();
        let filter = FilterState {
            liked_only: true,
            ..Default::default()
        };

        let out = apply(&items, &filter, &liked);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "2");
    }

    #[test]
    fn test_short_query_is_bypassed() {
        let items = sample();
        let filter = FilterState {
            query: "zz".to_string(),
            ..Default::default()
        };

        assert_eq!(apply(&items, &filter, &BTreeSet::new()).len(), 3);
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let items = sample();

        let by_name = FilterState {
            query: "BANANA".to_string(),
            ..Default::default()
        };
        let out = apply(&items, &by_name, &BTreeSet::new());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "3");

        let by_area = FilterState {
            query: "vietnam".to_string(),
            ..Default::default()
        };
        let out = apply(&items, &by_area, &BTreeSet::new());
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "2");

        let by_category = FilterState {
            query: "dessert".to_string(),
            ..Default::default()
        };
        assert_eq!(apply(&items, &by_category, &BTreeSet::new()).len(), 2);
    }

    #[test]
    fn test_predicates_combine_with_and() {
        let items = sample();
        let liked: BTreeSet<String> = ["1".to_string(), "3".to_string()].into_iter().collect();
        let filter = FilterState {
            category: "Dessert".to_string(),
            liked_only: true,
            query: "banana".to_string(),
            ..Default::default()
        };

        let out = apply(&items, &filter, &liked);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, "3");
    }

    #[test]
    fn test_clear_resets_to_default() {
        let mut filter = FilterState {
            category: "Beef".to_string(),
            liked_only: true,
            query: "tart".to_string(),
            ..Default::default()
        };
        assert!(filter.is_active());

        filter.clear();
        assert_eq!(filter, FilterState::default());
        assert!(!filter.is_active());
    }

    #[test]
    fn test_paginate_slices_fixed_pages() {
        let items: Vec<CatalogItem> = (0..30)
            .map(|i| make_item(&i.to_string(), "Item", "Misc", "Unknown"))
            .collect();

        let first = paginate(&items, 1);
        assert_eq!(first.items.len(), PAGE_SIZE);
        assert_eq!(first.total, 30);
        assert_eq!(first.total_pages, 3);
        assert_eq!(first.items[0].id, "0");

        let last = paginate(&items, 3);
        assert_eq!(last.items.len(), 6);
        assert_eq!(last.items[0].id, "24");
    }

    #[test]
    fn test_paginate_out_of_range_is_empty() {
        let items = sample();
        assert!(paginate(&items, 5).items.is_empty());
        assert!(paginate(&items, 0).items.is_empty());
        assert!(paginate(&[], 1).items.is_empty());
        assert_eq!(paginate(&[], 1).total_pages, 0);
    }
}
