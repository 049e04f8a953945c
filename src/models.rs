//! Catalog Models
//!
//! Data structures shared by the API client, the local store and the views.

use serde::{Deserialize, Serialize};

/// Identifier namespace reserved for items created in this browser.
/// Remote ids are numeric strings, so the prefix can never collide.
pub const USER_ID_PREFIX: &str = "user-";

/// One ingredient slot: name plus free-form measure text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub measure: String,
}

/// Nutrition facts, present on some catalog entries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Nutrition {
    pub calories: f64,
    pub carbohydrates: f64,
    pub protein: f64,
    pub fat: f64,
    pub sugar: f64,
}

/// A catalog entry, either fetched from the remote API or created locally.
///
/// Origin is carried by the id: remote entries keep their API-assigned id,
/// locally created ones get a `user-<timestamp>` id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogItem {
    pub id: String,
    pub name: String,
    pub category: String,
    pub area: String,
    pub instructions: String,
    #[serde(default)]
    pub thumb: Option<String>,
    #[serde(default)]
    pub tags: Option<String>,
    #[serde(default)]
    pub youtube: Option<String>,
    #[serde(default)]
    pub ingredients: Vec<Ingredient>,
    #[serde(default)]
    pub nutrition: Option<Nutrition>,
}

impl CatalogItem {
    pub fn is_user_created(&self) -> bool {
        self.id.starts_with(USER_ID_PREFIX)
    }
}

/// Build a locally scoped id from a millisecond timestamp.
pub fn user_id(now_ms: u64) -> String {
    format!("{USER_ID_PREFIX}{now_ms}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_prefix() {
        let id = user_id(1_700_000_000_000);
        assert_eq!(id, "user-1700000000000");

        let item = CatalogItem {
            id,
            ..Default::default()
        };
        assert!(item.is_user_created());
    }

    #[test]
    fn test_remote_id_is_not_user_created() {
        let item = CatalogItem {
            id: "52772".to_string(),
            ..Default::default()
        };
        assert!(!item.is_user_created());
    }
}
