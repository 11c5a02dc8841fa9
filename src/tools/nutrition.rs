//! Nutrition Tools
//!
//! Food scaling, recipe aggregation, and daily summaries over a
//! [`NutritionStore`].

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::NutritionInfo;
use crate::nutrition::{self, DailySummary, RecipeNutrition};
use crate::store::NutritionStore;

/// Response for scale_food
#[derive(Debug, Serialize)]
pub struct ScaledFoodResponse {
    pub food_id: String,
    pub food_name: String,
    pub quantity: f64,
    pub unit: String,
    pub serving_size: f64,
    pub serving_unit: String,
    pub nutrition: NutritionInfo,
}

/// Response for recipe_nutrition
#[derive(Debug, Serialize)]
pub struct RecipeNutritionResponse {
    pub recipe_id: String,
    /// True when some ingredients were left out of the totals
    pub partial: bool,
    #[serde(flatten)]
    pub nutrition: RecipeNutrition,
}

/// Parse a YYYY-MM-DD date
pub fn parse_date(date: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|e| format!("Invalid date '{}' (expected YYYY-MM-DD): {}", date, e))
}

/// Nutrition of `quantity` `unit` of a stored food
pub async fn scale_food<S>(
    store: &S,
    food_id: &str,
    quantity: f64,
    unit: &str,
) -> Result<ScaledFoodResponse, String>
where
    S: NutritionStore + ?Sized,
{
    if !quantity.is_finite() || quantity < 0.0 {
        return Err(format!("Quantity must be a non-negative number, got {}", quantity));
    }

    let food = store
        .get_food(food_id)
        .await
        .map_err(|e| format!("Failed to fetch food: {}", e))?
        .ok_or_else(|| format!("Food not found with id: {}", food_id))?;

    let nutrition = nutrition::scale_food(&food, quantity, unit).map_err(|e| e.to_string())?;

    Ok(ScaledFoodResponse {
        food_id: food.id,
        food_name: food.name,
        quantity,
        unit: unit.to_string(),
        serving_size: food.serving_size,
        serving_unit: food.serving_unit,
        nutrition,
    })
}

/// Per-serving nutrition for a stored recipe
pub async fn recipe_nutrition<S>(store: &S, recipe_id: &str) -> Result<RecipeNutritionResponse, String>
where
    S: NutritionStore + ?Sized,
{
    let nutrition = nutrition::calculate_recipe_nutrition(store, recipe_id)
        .await
        .map_err(|e| e.to_string())?;

    Ok(RecipeNutritionResponse {
        recipe_id: recipe_id.to_string(),
        partial: nutrition.is_partial(),
        nutrition,
    })
}

/// Totals and goal progress for one user and date
pub async fn daily_summary<S>(store: &S, user_id: &str, date: &str) -> Result<DailySummary, String>
where
    S: NutritionStore + ?Sized,
{
    let date = parse_date(date)?;
    nutrition::summarize_day(store, user_id, date)
        .await
        .map_err(|e| format!("Failed to build daily summary: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{test_food, test_ingredient, test_log, test_recipe};
    use crate::store::memory::MemoryStore;

    fn n(calories: f64) -> NutritionInfo {
        NutritionInfo {
            calories,
            protein_g: 10.0,
            carbohydrates_g: 20.0,
            fat_g: 4.0,
            fiber_g: 2.0,
            sodium_mg: 80.0,
        }
    }

    #[tokio::test]
    async fn test_scale_food() {
        let store = MemoryStore::default().with_food(test_food("oats", 100.0, "g", n(200.0)));
        let result = scale_food(&store, "oats", 150.0, "g").await.unwrap();
        assert_eq!(result.food_id, "oats");
        assert_eq!(result.food_name, "Food oats");
        assert_eq!(result.nutrition.calories, 300.0);
        assert_eq!(result.nutrition.protein_g, 15.0);
    }

    #[tokio::test]
    async fn test_scale_food_errors() {
        let store = MemoryStore::default().with_food(test_food("bad", 0.0, "g", n(200.0)));

        let err = scale_food(&store, "missing", 1.0, "g").await.unwrap_err();
        assert!(err.contains("not found"));

        assert!(scale_food(&store, "bad", 100.0, "g").await.is_err());
        assert!(scale_food(&store, "bad", -1.0, "g").await.is_err());
    }

    #[tokio::test]
    async fn test_recipe_nutrition_partial_flag() {
        let store = MemoryStore::default()
            .with_recipe(test_recipe("r1", 2))
            .with_food(test_food("f1", 100.0, "g", n(100.0)))
            .with_ingredient(test_ingredient("i1", "r1", "f1", 200.0, "g", 0))
            .with_ingredient(test_ingredient("i2", "r1", "gone", 1.0, "piece", 1));

        let result = recipe_nutrition(&store, "r1").await.unwrap();
        assert!(result.partial);
        assert_eq!(result.nutrition.per_serving.calories, 100.0);

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["recipe_id"], "r1");
        assert_eq!(json["unresolved"][0]["reason"]["kind"], "food_not_found");
    }

    #[tokio::test]
    async fn test_daily_summary_parses_date() {
        let mut store = MemoryStore::default();
        store.logs = vec![test_log("l1", "u1", "2025-02-03T09:00:00Z", Some("breakfast"), n(350.0))];

        let summary = daily_summary(&store, "u1", "2025-02-03").await.unwrap();
        assert_eq!(summary.totals.calories, 350.0);

        let err = daily_summary(&store, "u1", "02/03/2025").await.unwrap_err();
        assert!(err.contains("YYYY-MM-DD"));
    }
}
