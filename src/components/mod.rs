//! View Components
//!
//! One component per file, list screen down to form fields.

mod delete_confirm_button;
mod filter_bar;
mod ingredient_rows;
mod input_field;
mod meal_card;
mod meal_detail;
mod meal_form;
mod meal_list;
mod pagination;
mod removed_panel;
mod text_area_field;

pub use delete_confirm_button::DeleteConfirmButton;
pub use filter_bar::FilterBar;
pub use ingredient_rows::IngredientRows;
pub use input_field::InputField;
pub use meal_card::MealCard;
pub use meal_detail::MealDetail;
pub use meal_form::{EditMeal, MealForm};
pub use meal_list::MealList;
pub use pagination::Pagination;
pub use removed_panel::RemovedPanel;
pub use text_area_field::TextAreaField;
