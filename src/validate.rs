//! Form Validation
//!
//! Field-level rules for the create/edit form. Validation failures stay in
//! the form; nothing reaches the local store until the draft is clean.

use std::collections::HashMap;

use crate::models::{CatalogItem, Ingredient, Nutrition};

/// Editable form state for a catalog item. Optional model fields are plain
/// strings here; empty means absent.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MealDraft {
    pub name: String,
    pub category: String,
    pub area: String,
    pub instructions: String,
    pub tags: String,
    pub youtube: String,
    pub thumb: String,
    pub ingredients: Vec<Ingredient>,
}

/// Field name -> first error message for that field.
pub type FieldErrors = HashMap<&'static str, String>;

impl MealDraft {
    pub fn from_item(item: &CatalogItem) -> Self {
        let mut ingredients = item.ingredients.clone();
        if ingredients.is_empty() {
            ingredients.push(Ingredient::default());
        }
        Self {
            name: item.name.clone(),
            category: item.category.clone(),
            area: item.area.clone(),
            instructions: item.instructions.clone(),
            tags: item.tags.clone().unwrap_or_default(),
            youtube: item.youtube.clone().unwrap_or_default(),
            thumb: item.thumb.clone().unwrap_or_default(),
            ingredients,
        }
    }

    /// Turn a validated draft back into an item. `id` keeps the edited
    /// item's identity; `nutrition` is carried through unchanged since the
    /// form does not edit it.
    pub fn into_item(self, id: String, nutrition: Option<Nutrition>) -> CatalogItem {
        CatalogItem {
            id,
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            area: self.area.trim().to_string(),
            instructions: self.instructions.trim().to_string(),
            thumb: optional(self.thumb),
            tags: optional(self.tags),
            youtube: optional(self.youtube),
            ingredients: self.ingredients,
            nutrition,
        }
    }
}

fn optional(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Check every rule; an empty map means the draft may be submitted.
pub fn validate(draft: &MealDraft) -> FieldErrors {
    let mut errors = FieldErrors::new();

    if draft.name.trim().chars().count() < 2 {
        errors.insert("name", "Name must be at least 2 characters".to_string());
    }
    if draft.category.trim().chars().count() < 2 {
        errors.insert("category", "Category must be at least 2 characters".to_string());
    }
    if draft.area.trim().chars().count() < 2 {
        errors.insert("area", "Cuisine must be at least 2 characters".to_string());
    }
    if draft.instructions.trim().chars().count() < 10 {
        errors.insert(
            "instructions",
            "Instructions must be at least 10 characters".to_string(),
        );
    }

    let youtube = draft.youtube.trim();
    if !youtube.is_empty() && !youtube.starts_with("http://") && !youtube.starts_with("https://") {
        errors.insert("youtube", "Invalid video URL".to_string());
    }

    if draft.ingredients.is_empty() {
        errors.insert("ingredients", "At least one ingredient required".to_string());
    } else if draft.ingredients.iter().any(|row| row.name.trim().is_empty()) {
        errors.insert("ingredients", "Ingredient name required".to_string());
    } else if draft
        .ingredients
        .iter()
        .any(|row| row.measure.trim().is_empty())
    {
        errors.insert("ingredients", "Measure required".to_string());
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_draft() -> MealDraft {
        MealDraft {
            name: "Shakshuka".to_string(),
            category: "Breakfast".to_string(),
            area: "Egyptian".to_string(),
            instructions: "Simmer tomatoes, crack in the eggs, cover.".to_string(),
            ingredients: vec![Ingredient {
                name: "Eggs".to_string(),
                measure: "4".to_string(),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_draft_has_no_errors() {
        assert!(validate(&make_draft()).is_empty());
    }

    #[test]
    fn test_short_fields_are_rejected() {
        let draft = MealDraft {
            name: "X".to_string(),
            category: " ".to_string(),
            area: "Z".to_string(),
            instructions: "too short".to_string(),
            ..make_draft()
        };

        let errors = validate(&draft);
        assert!(errors.contains_key("name"));
        assert!(errors.contains_key("category"));
        assert!(errors.contains_key("area"));
        assert!(errors.contains_key("instructions"));
    }

    #[test]
    fn test_youtube_is_optional_but_must_be_a_url() {
        let mut draft = make_draft();
        draft.youtube = String::new();
        assert!(!validate(&draft).contains_key("youtube"));

        draft.youtube = "not a url".to_string();
        assert!(validate(&draft).contains_key("youtube"));

        draft.youtube = "https://youtube.com/watch?v=abc".to_string();
        assert!(!validate(&draft).contains_key("youtube"));
    }

    #[test]
    fn test_ingredient_rows_must_be_complete() {
        let mut draft = make_draft();
        draft.ingredients.clear();
        assert!(validate(&draft).contains_key("ingredients"));

        draft.ingredients = vec![Ingredient {
            name: "Flour".to_string(),
            measure: String::new(),
        }];
        assert!(validate(&draft).contains_key("ingredients"));

        draft.ingredients[0].measure = "200g".to_string();
        assert!(!validate(&draft).contains_key("ingredients"));
    }

    #[test]
    fn test_round_trip_keeps_identity_and_nutrition() {
        let nutrition = Some(Nutrition {
            calories: 52.0,
            ..Default::default()
        });
        let item = CatalogItem {
            id: "52772".to_string(),
            name: "Teriyaki Chicken".to_string(),
            category: "Chicken".to_string(),
            area: "Japanese".to_string(),
            instructions: "Bake for forty minutes.".to_string(),
            tags: Some("Meat".to_string()),
            nutrition: nutrition.clone(),
            ..Default::default()
        };

        let draft = MealDraft::from_item(&item);
        // an empty slot row is offered for editing convenience
        assert_eq!(draft.ingredients.len(), 1);

        let rebuilt = draft.into_item(item.id.clone(), item.nutrition.clone());
        assert_eq!(rebuilt.id, "52772");
        assert_eq!(rebuilt.tags.as_deref(), Some("Meat"));
        assert_eq!(rebuilt.nutrition, nutrition);
    }
}
