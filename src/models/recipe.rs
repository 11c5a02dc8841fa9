//! Recipe model
//!
//! A row of the `recipes` table. The cached per-serving columns are owned by
//! the backend; this crate derives nutrition from the ingredients instead.

use serde::{Deserialize, Serialize};

/// A recipe with its declared serving count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub category_id: Option<String>,
    pub prep_time_minutes: Option<i32>,
    pub cook_time_minutes: Option<i32>,
    pub servings: i32,
    pub difficulty_level: Option<String>,
    /// JSON-encoded step list
    pub instructions: Option<String>,
    pub calories_per_serving: Option<f64>,
    pub protein_per_serving: Option<f64>,
    pub carbs_per_serving: Option<f64>,
    pub fat_per_serving: Option<f64>,
    pub fiber_per_serving: Option<f64>,
    pub created_by: Option<String>,
    #[serde(default = "default_true")]
    pub is_public: bool,
    pub rating: Option<f64>,
    #[serde(default)]
    pub rating_count: i32,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub dietary_tags: Vec<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
pub(crate) fn test_recipe(id: &str, servings: i32) -> Recipe {
    Recipe {
        id: id.to_string(),
        name: format!("Recipe {}", id),
        description: None,
        category_id: None,
        prep_time_minutes: None,
        cook_time_minutes: None,
        servings,
        difficulty_level: None,
        instructions: None,
        calories_per_serving: None,
        protein_per_serving: None,
        carbs_per_serving: None,
        fat_per_serving: None,
        fiber_per_serving: None,
        created_by: None,
        is_public: true,
        rating: None,
        rating_count: 0,
        image_url: None,
        video_url: None,
        tags: Vec::new(),
        dietary_tags: Vec::new(),
        created_at: None,
        updated_at: None,
    }
}
