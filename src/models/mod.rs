//! Data models
//!
//! Rust structs mirroring the backend's tables, plus the shared nutrition
//! value type.

mod food;
mod food_log;
mod nutrition;
mod recipe;
mod recipe_ingredient;
mod user_profile;

pub use food::Food;
pub use food_log::{FoodLog, MealType};
pub use nutrition::NutritionInfo;
pub use recipe::Recipe;
pub use recipe_ingredient::RecipeIngredient;
pub use user_profile::UserProfile;

#[cfg(test)]
pub(crate) use food::test_food;
#[cfg(test)]
pub(crate) use food_log::test_log;
#[cfg(test)]
pub(crate) use recipe::test_recipe;
#[cfg(test)]
pub(crate) use recipe_ingredient::test_ingredient;
