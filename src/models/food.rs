//! Food model
//!
//! A row of the `foods` table: a nutrient profile defined per serving.

use serde::{Deserialize, Serialize};

use super::NutritionInfo;

/// A food with its nutrient profile per `serving_size` `serving_unit`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Food {
    pub id: String,
    pub name: String,
    pub brand_id: Option<String>,
    pub category_id: Option<String>,
    pub barcode: Option<String>,
    pub serving_size: f64,
    pub serving_unit: String,
    pub servings_per_container: Option<f64>,
    pub calories: f64,
    #[serde(default)]
    pub protein_g: f64,
    #[serde(default)]
    pub carbohydrates_g: f64,
    #[serde(default)]
    pub dietary_fiber_g: f64,
    #[serde(default)]
    pub sugars_g: f64,
    #[serde(default)]
    pub added_sugars_g: f64,
    #[serde(default)]
    pub total_fat_g: f64,
    #[serde(default)]
    pub saturated_fat_g: f64,
    #[serde(default)]
    pub trans_fat_g: f64,
    #[serde(default)]
    pub cholesterol_mg: f64,
    #[serde(default)]
    pub sodium_mg: f64,
    #[serde(default)]
    pub vitamin_a_iu: f64,
    #[serde(default)]
    pub vitamin_c_mg: f64,
    #[serde(default)]
    pub vitamin_d_iu: f64,
    #[serde(default)]
    pub calcium_mg: f64,
    #[serde(default)]
    pub iron_mg: f64,
    #[serde(default)]
    pub potassium_mg: f64,
    #[serde(default)]
    pub allergens: Vec<String>,
    pub ingredients: Option<String>,
    pub data_source: Option<String>,
    #[serde(default)]
    pub verified: bool,
    pub image_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl Food {
    /// The six tracked nutrients for one declared serving
    pub fn nutrition_per_serving(&self) -> NutritionInfo {
        NutritionInfo {
            calories: self.calories,
            protein_g: self.protein_g,
            carbohydrates_g: self.carbohydrates_g,
            fat_g: self.total_fat_g,
            fiber_g: self.dietary_fiber_g,
            sodium_mg: self.sodium_mg,
        }
    }
}

/// Build a food row with only the fields the calculations read
#[cfg(test)]
pub(crate) fn test_food(id: &str, serving_size: f64, serving_unit: &str, n: NutritionInfo) -> Food {
    Food {
        id: id.to_string(),
        name: format!("Food {}", id),
        brand_id: None,
        category_id: None,
        barcode: None,
        serving_size,
        serving_unit: serving_unit.to_string(),
        servings_per_container: None,
        calories: n.calories,
        protein_g: n.protein_g,
        carbohydrates_g: n.carbohydrates_g,
        dietary_fiber_g: n.fiber_g,
        sugars_g: 0.0,
        added_sugars_g: 0.0,
        total_fat_g: n.fat_g,
        saturated_fat_g: 0.0,
        trans_fat_g: 0.0,
        cholesterol_mg: 0.0,
        sodium_mg: n.sodium_mg,
        vitamin_a_iu: 0.0,
        vitamin_c_mg: 0.0,
        vitamin_d_iu: 0.0,
        calcium_mg: 0.0,
        iron_mg: 0.0,
        potassium_mg: 0.0,
        allergens: Vec::new(),
        ingredients: None,
        data_source: None,
        verified: true,
        image_url: None,
        thumbnail_url: None,
        created_at: None,
        updated_at: None,
    }
}
