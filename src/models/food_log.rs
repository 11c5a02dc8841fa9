//! Food log model
//!
//! A consumed food or recipe with the nutrition recorded at log time.

use serde::{Deserialize, Serialize};

use super::NutritionInfo;

/// Meal type of a log entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealType {
    Breakfast,
    Lunch,
    Dinner,
    Snack,
    Other,
}

impl MealType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MealType::Breakfast => "breakfast",
            MealType::Lunch => "lunch",
            MealType::Dinner => "dinner",
            MealType::Snack => "snack",
            MealType::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => MealType::Breakfast,
            "lunch" => MealType::Lunch,
            "dinner" => MealType::Dinner,
            "snack" | "snacks" => MealType::Snack,
            _ => MealType::Other,
        }
    }
}

/// A row of the `food_logs` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodLog {
    pub id: String,
    pub user_id: String,
    pub food_id: Option<String>,
    pub recipe_id: Option<String>,
    pub quantity: f64,
    pub unit: String,
    /// Free text in the table; see [`FoodLog::meal`]
    pub meal_type: Option<String>,
    pub consumed_at: String,
    pub calories: f64,
    #[serde(default)]
    pub protein_g: f64,
    #[serde(default)]
    pub carbohydrates_g: f64,
    #[serde(default)]
    pub fat_g: f64,
    #[serde(default)]
    pub fiber_g: f64,
    #[serde(default)]
    pub sodium_mg: f64,
    pub notes: Option<String>,
    pub location: Option<String>,
    pub mood_before: Option<String>,
    pub mood_after: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl FoodLog {
    pub fn nutrition(&self) -> NutritionInfo {
        NutritionInfo {
            calories: self.calories,
            protein_g: self.protein_g,
            carbohydrates_g: self.carbohydrates_g,
            fat_g: self.fat_g,
            fiber_g: self.fiber_g,
            sodium_mg: self.sodium_mg,
        }
    }

    pub fn meal(&self) -> MealType {
        self.meal_type
            .as_deref()
            .map(MealType::from_str)
            .unwrap_or(MealType::Other)
    }
}

#[cfg(test)]
pub(crate) fn test_log(id: &str, user_id: &str, consumed_at: &str, meal: Option<&str>, n: NutritionInfo) -> FoodLog {
    FoodLog {
        id: id.to_string(),
        user_id: user_id.to_string(),
        food_id: Some("f1".to_string()),
        recipe_id: None,
        quantity: 1.0,
        unit: "piece".to_string(),
        meal_type: meal.map(str::to_string),
        consumed_at: consumed_at.to_string(),
        calories: n.calories,
        protein_g: n.protein_g,
        carbohydrates_g: n.carbohydrates_g,
        fat_g: n.fat_g,
        fiber_g: n.fiber_g,
        sodium_mg: n.sodium_mg,
        notes: None,
        location: None,
        mood_before: None,
        mood_after: None,
        created_at: None,
        updated_at: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meal_type_parsing() {
        assert_eq!(MealType::from_str("Breakfast"), MealType::Breakfast);
        assert_eq!(MealType::from_str(" snacks "), MealType::Snack);
        assert_eq!(MealType::from_str("brunch"), MealType::Other);
    }

    #[test]
    fn test_meal_defaults_to_other() {
        let log = test_log("l1", "u1", "2025-01-09T08:00:00Z", None, NutritionInfo::zero());
        assert_eq!(log.meal(), MealType::Other);
    }
}
