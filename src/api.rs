//! Remote Catalog API
//!
//! Read-only client for TheMealDB JSON API. List responses arrive as
//! `{"meals": [...]}` with `null` standing in for the empty list, and each
//! row carries its ingredients in twenty numbered slot pairs
//! (`strIngredient1`/`strMeasure1`, ...). The mapping layer collects those
//! slots into an ordered list and hides the positional scheme from the rest
//! of the app.

use std::collections::HashMap;

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::Deserialize;
use thiserror::Error;

use crate::models::{CatalogItem, Ingredient};

const BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

const INGREDIENT_SLOTS: usize = 20;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("catalog returned HTTP {0}")]
    Status(u16),
}

/// Raw API row. Unknown keys (the numbered ingredient and measure slots
/// among them) are collected into `slots`.
#[derive(Debug, Deserialize)]
struct RawMeal {
    #[serde(rename = "idMeal")]
    id: String,
    #[serde(rename = "strMeal")]
    name: Option<String>,
    #[serde(rename = "strCategory")]
    category: Option<String>,
    #[serde(rename = "strArea")]
    area: Option<String>,
    #[serde(rename = "strInstructions")]
    instructions: Option<String>,
    #[serde(rename = "strMealThumb")]
    thumb: Option<String>,
    #[serde(rename = "strTags")]
    tags: Option<String>,
    #[serde(rename = "strYoutube")]
    youtube: Option<String>,
    #[serde(flatten)]
    slots: HashMap<String, Option<String>>,
}

#[derive(Debug, Deserialize)]
struct MealListResponse {
    meals: Option<Vec<RawMeal>>,
}

#[derive(Debug, Deserialize)]
struct CategoryListResponse {
    categories: Option<Vec<RawCategory>>,
}

#[derive(Debug, Deserialize)]
struct RawCategory {
    #[serde(rename = "strCategory")]
    name: String,
}

impl RawMeal {
    fn into_item(self) -> CatalogItem {
        let mut ingredients = Vec::new();
        for slot in 1..=INGREDIENT_SLOTS {
            let name = slot_value(&self.slots, "strIngredient", slot);
            if name.is_empty() {
                continue;
            }
            ingredients.push(Ingredient {
                name,
                measure: slot_value(&self.slots, "strMeasure", slot),
            });
        }

        CatalogItem {
            id: self.id,
            name: self.name.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
            area: self.area.unwrap_or_default(),
            instructions: self.instructions.unwrap_or_default(),
            thumb: self.thumb.filter(|s| !s.is_empty()),
            tags: self.tags.filter(|s| !s.is_empty()),
            youtube: self.youtube.filter(|s| !s.is_empty()),
            ingredients,
            nutrition: None,
        }
    }
}

fn slot_value(slots: &HashMap<String, Option<String>>, prefix: &str, slot: usize) -> String {
    slots
        .get(&format!("{prefix}{slot}"))
        .and_then(|value| value.as_deref())
        .map(str::trim)
        .unwrap_or_default()
        .to_string()
}

fn encode(component: &str) -> String {
    utf8_percent_encode(component, NON_ALPHANUMERIC).to_string()
}

async fn get_meals(url: String) -> Result<Vec<CatalogItem>, ApiError> {
    let response = reqwest::get(url).await?;
    if !response.status().is_success() {
        return Err(ApiError::Status(response.status().as_u16()));
    }
    let body: MealListResponse = response.json().await?;
    Ok(body
        .meals
        .unwrap_or_default()
        .into_iter()
        .map(RawMeal::into_item)
        .collect())
}

/// Server-side name search. The empty query is how the API spells
/// "list everything".
pub async fn search(query: &str) -> Result<Vec<CatalogItem>, ApiError> {
    get_meals(format!("{BASE_URL}/search.php?s={}", encode(query))).await
}

/// The default bulk listing.
pub async fn fetch_popular() -> Result<Vec<CatalogItem>, ApiError> {
    search("").await
}

/// Single-item lookup, used when the detail view misses every local source.
pub async fn fetch_by_id(id: &str) -> Result<Option<CatalogItem>, ApiError> {
    let items = get_meals(format!("{BASE_URL}/lookup.php?i={}", encode(id))).await?;
    Ok(items.into_iter().next())
}

/// Category names for the filter select.
pub async fn fetch_categories() -> Result<Vec<String>, ApiError> {
    let response = reqwest::get(format!("{BASE_URL}/categories.php")).await?;
    if !response.status().is_success() {
        return Err(ApiError::Status(response.status().as_u16()));
    }
    let body: CategoryListResponse = response.json().await?;
    Ok(body
        .categories
        .unwrap_or_default()
        .into_iter()
        .map(|category| category.name)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ingredient_slots_collect_in_order_skipping_blanks() {
        let raw: RawMeal = serde_json::from_str(
            r#"{
                "idMeal": "52772",
                "strMeal": "Teriyaki Chicken Casserole",
                "strCategory": "Chicken",
                "strArea": "Japanese",
                "strInstructions": "Preheat oven to 350.",
                "strMealThumb": "https://example.test/teriyaki.jpg",
                "strTags": "Meat,Casserole",
                "strYoutube": "",
                "strIngredient1": "soy sauce",
                "strMeasure1": "3/4 cup",
                "strIngredient2": " ",
                "strMeasure2": "unused",
                "strIngredient3": "sesame seed",
                "strMeasure3": null,
                "strIngredient4": null,
                "strMeasure4": null
            }"#,
        )
        .unwrap();

        let item = raw.into_item();
        assert_eq!(item.id, "52772");
        assert_eq!(
            item.ingredients,
            vec![
                Ingredient {
                    name: "soy sauce".to_string(),
                    measure: "3/4 cup".to_string(),
                },
                Ingredient {
                    name: "sesame seed".to_string(),
                    measure: String::new(),
                },
            ]
        );
        // empty strings become absent options
        assert!(item.youtube.is_none());
        assert_eq!(item.tags.as_deref(), Some("Meat,Casserole"));
    }

    #[test]
    fn test_partial_filter_rows_map_to_empty_fields() {
        // filter.php rows only carry id, name and thumb
        let raw: RawMeal = serde_json::from_str(
            r#"{"idMeal": "52893", "strMeal": "Apple Crumble", "strMealThumb": "x.jpg"}"#,
        )
        .unwrap();

        let item = raw.into_item();
        assert_eq!(item.name, "Apple Crumble");
        assert_eq!(item.category, "");
        assert!(item.ingredients.is_empty());
    }

    #[test]
    fn test_null_meal_list_decodes_as_empty() {
        let body: MealListResponse = serde_json::from_str(r#"{"meals": null}"#).unwrap();
        assert!(body.meals.is_none());
    }

    #[test]
    fn test_query_components_are_escaped() {
        assert_eq!(encode("fish & chips"), "fish%20%26%20chips");
    }
}
