//! Nutrition store
//!
//! The reads the calculations depend on, behind a trait so aggregation can
//! run against the hosted backend or an in-memory fixture.

use async_trait::async_trait;

use crate::backend::BackendResult;
use crate::models::{Food, FoodLog, Recipe, RecipeIngredient, UserProfile};

#[async_trait]
pub trait NutritionStore: Send + Sync {
    async fn get_recipe(&self, recipe_id: &str) -> BackendResult<Option<Recipe>>;

    /// Ingredients of a recipe ordered by `sort_order`
    async fn get_recipe_ingredients(&self, recipe_id: &str) -> BackendResult<Vec<RecipeIngredient>>;

    async fn get_food(&self, food_id: &str) -> BackendResult<Option<Food>>;

    async fn get_user_profile(&self, user_id: &str) -> BackendResult<Option<UserProfile>>;

    /// A user's food logs consumed within `[start, end)` (ISO 8601)
    async fn get_food_logs(&self, user_id: &str, start: &str, end: &str) -> BackendResult<Vec<FoodLog>>;
}

#[cfg(test)]
pub(crate) mod memory {
    //! In-memory store with failure injection for tests

    use std::collections::{HashMap, HashSet};

    use super::*;
    use crate::backend::BackendError;

    #[derive(Default)]
    pub struct MemoryStore {
        pub recipes: HashMap<String, Recipe>,
        pub ingredients: Vec<RecipeIngredient>,
        pub foods: HashMap<String, Food>,
        pub profiles: HashMap<String, UserProfile>,
        pub logs: Vec<FoodLog>,
        pub failing_foods: HashSet<String>,
        pub fail_recipes: bool,
        pub fail_ingredients: bool,
        pub fail_logs: bool,
    }

    fn unavailable() -> BackendError {
        BackendError::Api {
            status: 503,
            message: "unavailable".to_string(),
        }
    }

    impl MemoryStore {
        pub fn with_food(mut self, food: Food) -> Self {
            self.foods.insert(food.id.clone(), food);
            self
        }

        pub fn with_recipe(mut self, recipe: Recipe) -> Self {
            self.recipes.insert(recipe.id.clone(), recipe);
            self
        }

        pub fn with_ingredient(mut self, ingredient: RecipeIngredient) -> Self {
            self.ingredients.push(ingredient);
            self
        }
    }

    #[async_trait]
    impl NutritionStore for MemoryStore {
        async fn get_recipe(&self, recipe_id: &str) -> BackendResult<Option<Recipe>> {
            if self.fail_recipes {
                return Err(unavailable());
            }
            Ok(self.recipes.get(recipe_id).cloned())
        }

        async fn get_recipe_ingredients(&self, recipe_id: &str) -> BackendResult<Vec<RecipeIngredient>> {
            if self.fail_ingredients {
                return Err(unavailable());
            }
            let mut rows: Vec<RecipeIngredient> = self
                .ingredients
                .iter()
                .filter(|i| i.recipe_id == recipe_id)
                .cloned()
                .collect();
            rows.sort_by_key(|i| i.sort_order);
            Ok(rows)
        }

        async fn get_food(&self, food_id: &str) -> BackendResult<Option<Food>> {
            if self.failing_foods.contains(food_id) {
                return Err(unavailable());
            }
            Ok(self.foods.get(food_id).cloned())
        }

        async fn get_user_profile(&self, user_id: &str) -> BackendResult<Option<UserProfile>> {
            Ok(self.profiles.get(user_id).cloned())
        }

        async fn get_food_logs(&self, user_id: &str, start: &str, end: &str) -> BackendResult<Vec<FoodLog>> {
            if self.fail_logs {
                return Err(unavailable());
            }
            Ok(self
                .logs
                .iter()
                .filter(|l| l.user_id == user_id)
                .filter(|l| l.consumed_at.as_str() >= start && l.consumed_at.as_str() < end)
                .cloned()
                .collect())
        }
    }
}
