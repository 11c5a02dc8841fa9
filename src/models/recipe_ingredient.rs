//! Recipe Ingredient model
//!
//! Quantity and unit of one food within one recipe.

use serde::{Deserialize, Serialize};

/// A row of the `recipe_ingredients` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeIngredient {
    pub id: String,
    pub recipe_id: String,
    pub food_id: String,
    pub quantity: f64,
    pub unit: String,
    pub preparation_note: Option<String>,
    #[serde(default)]
    pub is_optional: bool,
    /// Display ordering key
    #[serde(default)]
    pub sort_order: i32,
    pub ingredient_group: Option<String>,
    pub created_at: Option<String>,
}

#[cfg(test)]
pub(crate) fn test_ingredient(
    id: &str,
    recipe_id: &str,
    food_id: &str,
    quantity: f64,
    unit: &str,
    sort_order: i32,
) -> RecipeIngredient {
    RecipeIngredient {
        id: id.to_string(),
        recipe_id: recipe_id.to_string(),
        food_id: food_id.to_string(),
        quantity,
        unit: unit.to_string(),
        preparation_note: None,
        is_optional: false,
        sort_order,
        ingredient_group: None,
        created_at: None,
    }
}
