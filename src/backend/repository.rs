//! Table reads backing [`NutritionStore`]

use async_trait::async_trait;

use super::client::{BackendClient, BackendResult};
use super::query::Query;
use super::tables;
use crate::models::{Food, FoodLog, Recipe, RecipeIngredient, UserProfile};
use crate::store::NutritionStore;

#[async_trait]
impl NutritionStore for BackendClient {
    async fn get_recipe(&self, recipe_id: &str) -> BackendResult<Option<Recipe>> {
        self.select_optional(tables::RECIPES, Query::new().eq("id", recipe_id))
            .await
    }

    async fn get_recipe_ingredients(&self, recipe_id: &str) -> BackendResult<Vec<RecipeIngredient>> {
        let query = Query::new()
            .eq("recipe_id", recipe_id)
            .order("sort_order", true);
        self.select_many(tables::RECIPE_INGREDIENTS, &query).await
    }

    async fn get_food(&self, food_id: &str) -> BackendResult<Option<Food>> {
        self.select_optional(tables::FOODS, Query::new().eq("id", food_id))
            .await
    }

    async fn get_user_profile(&self, user_id: &str) -> BackendResult<Option<UserProfile>> {
        self.select_optional(tables::USER_PROFILES, Query::new().eq("id", user_id))
            .await
    }

    async fn get_food_logs(&self, user_id: &str, start: &str, end: &str) -> BackendResult<Vec<FoodLog>> {
        let query = Query::new()
            .eq("user_id", user_id)
            .gte("consumed_at", start)
            .lt("consumed_at", end)
            .order("consumed_at", true);
        self.select_many(tables::FOOD_LOGS, &query).await
    }
}
