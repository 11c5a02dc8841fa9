//! Recipe aggregation
//!
//! Sums scaled ingredient nutrition across a recipe and divides by its
//! serving count. Ingredients whose food cannot be resolved are left out of
//! the sum and reported on the result.

use serde::Serialize;
use thiserror::Error;
use tracing::{info, warn};

use super::scaling::scale_food;
use crate::backend::BackendError;
use crate::models::{Food, NutritionInfo, RecipeIngredient};
use crate::store::NutritionStore;

/// Aggregation error types
#[derive(Debug, Error)]
pub enum AggregationError {
    #[error("Recipe not found with id: {0}")]
    RecipeNotFound(String),

    #[error("Failed to fetch recipe {recipe_id}: {source}")]
    Recipe {
        recipe_id: String,
        #[source]
        source: BackendError,
    },

    #[error("Failed to fetch ingredients for recipe {recipe_id}: {source}")]
    Ingredients {
        recipe_id: String,
        #[source]
        source: BackendError,
    },
}

/// Why an ingredient was left out of the sum
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum UnresolvedReason {
    FoodNotFound,
    LookupFailed(String),
    InvalidServingSize(String),
}

/// An ingredient excluded from the aggregate
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnresolvedIngredient {
    pub ingredient_id: String,
    pub food_id: String,
    pub reason: UnresolvedReason,
}

/// One recipe ingredient after its food lookup
#[derive(Debug, Clone)]
pub enum IngredientLookup {
    Resolved {
        ingredient_id: String,
        food: Food,
        quantity: f64,
        unit: String,
    },
    Unresolved(UnresolvedIngredient),
}

impl IngredientLookup {
    pub fn resolved(ingredient: &RecipeIngredient, food: Food) -> Self {
        IngredientLookup::Resolved {
            ingredient_id: ingredient.id.clone(),
            food,
            quantity: ingredient.quantity,
            unit: ingredient.unit.clone(),
        }
    }

    pub fn unresolved(ingredient: &RecipeIngredient, reason: UnresolvedReason) -> Self {
        IngredientLookup::Unresolved(UnresolvedIngredient {
            ingredient_id: ingredient.id.clone(),
            food_id: ingredient.food_id.clone(),
            reason,
        })
    }
}

/// Per-serving nutrition for a recipe
#[derive(Debug, Clone, Serialize)]
pub struct RecipeNutrition {
    pub per_serving: NutritionInfo,
    pub total: NutritionInfo,
    /// Divisor actually applied (declared servings, floored at 1)
    pub servings_used: i32,
    pub ingredients_counted: usize,
    pub unresolved: Vec<UnresolvedIngredient>,
}

impl RecipeNutrition {
    /// True when at least one ingredient was left out
    pub fn is_partial(&self) -> bool {
        !self.unresolved.is_empty()
    }
}

/// Aggregate already-resolved ingredients into per-serving nutrition
pub fn aggregate_ingredients(servings: i32, ingredients: &[IngredientLookup]) -> RecipeNutrition {
    let servings_used = if servings < 1 {
        warn!("Recipe declares {} servings; dividing by 1 instead", servings);
        1
    } else {
        servings
    };

    let mut total = NutritionInfo::zero();
    let mut ingredients_counted = 0;
    let mut unresolved = Vec::new();

    for lookup in ingredients {
        match lookup {
            IngredientLookup::Resolved {
                ingredient_id,
                food,
                quantity,
                unit,
            } => match scale_food(food, *quantity, unit) {
                Ok(scaled) => {
                    total += scaled;
                    ingredients_counted += 1;
                }
                Err(e) => {
                    warn!("Skipping ingredient {}: {}", ingredient_id, e);
                    unresolved.push(UnresolvedIngredient {
                        ingredient_id: ingredient_id.clone(),
                        food_id: food.id.clone(),
                        reason: UnresolvedReason::InvalidServingSize(e.to_string()),
                    });
                }
            },
            IngredientLookup::Unresolved(missing) => {
                warn!(
                    "Skipping ingredient {} (food {}): {:?}",
                    missing.ingredient_id, missing.food_id, missing.reason
                );
                unresolved.push(missing.clone());
            }
        }
    }

    RecipeNutrition {
        per_serving: total.per_serving(servings_used as f64),
        total,
        servings_used,
        ingredients_counted,
        unresolved,
    }
}

/// Fetch a recipe, its ingredients, and their foods, then aggregate
///
/// Fails if the recipe or its ingredient list cannot be fetched. A food
/// lookup that fails or finds nothing only excludes that ingredient.
pub async fn calculate_recipe_nutrition<S>(
    store: &S,
    recipe_id: &str,
) -> Result<RecipeNutrition, AggregationError>
where
    S: NutritionStore + ?Sized,
{
    let ingredients = store
        .get_recipe_ingredients(recipe_id)
        .await
        .map_err(|source| AggregationError::Ingredients {
            recipe_id: recipe_id.to_string(),
            source,
        })?;

    let recipe = store
        .get_recipe(recipe_id)
        .await
        .map_err(|source| AggregationError::Recipe {
            recipe_id: recipe_id.to_string(),
            source,
        })?
        .ok_or_else(|| AggregationError::RecipeNotFound(recipe_id.to_string()))?;

    let mut lookups = Vec::with_capacity(ingredients.len());
    for ingredient in &ingredients {
        let lookup = match store.get_food(&ingredient.food_id).await {
            Ok(Some(food)) => IngredientLookup::resolved(ingredient, food),
            Ok(None) => IngredientLookup::unresolved(ingredient, UnresolvedReason::FoodNotFound),
            Err(e) => IngredientLookup::unresolved(ingredient, UnresolvedReason::LookupFailed(e.to_string())),
        };
        lookups.push(lookup);
    }

    let result = aggregate_ingredients(recipe.servings, &lookups);
    info!(
        "Recipe {} aggregated: {} of {} ingredients, {:.1} kcal per serving",
        recipe_id,
        result.ingredients_counted,
        ingredients.len(),
        result.per_serving.calories
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{test_food, test_ingredient, test_recipe};
    use crate::nutrition::scale_food;
    use crate::store::memory::MemoryStore;

    fn n(calories: f64, protein_g: f64) -> NutritionInfo {
        NutritionInfo {
            calories,
            protein_g,
            carbohydrates_g: calories / 10.0,
            fat_g: protein_g / 2.0,
            fiber_g: 1.0,
            sodium_mg: 100.0,
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_single_ingredient_single_serving_equals_scaled() {
        let food = test_food("f1", 100.0, "g", n(200.0, 10.0));
        let ingredient = test_ingredient("i1", "r1", "f1", 150.0, "g", 0);
        let expected = scale_food(&food, 150.0, "g").unwrap();

        let result = aggregate_ingredients(1, &[IngredientLookup::resolved(&ingredient, food)]);
        assert_eq!(result.per_serving, expected);
        assert_eq!(result.total, expected);
        assert!(!result.is_partial());
    }

    #[test]
    fn test_divides_by_servings() {
        let rice = test_food("rice", 100.0, "g", n(130.0, 2.7));
        let egg = test_food("egg", 50.0, "g", n(70.0, 6.0));
        let lookups = vec![
            IngredientLookup::resolved(&test_ingredient("i1", "r", "rice", 300.0, "g", 0), rice),
            IngredientLookup::resolved(&test_ingredient("i2", "r", "egg", 2.0, "piece", 1), egg),
        ];

        let result = aggregate_ingredients(4, &lookups);
        // 3 * 130 + 2 * 70 = 530 total
        assert!(close(result.total.calories, 530.0));
        assert!(close(result.per_serving.calories, 132.5));
        assert!(close(result.per_serving.protein_g, (3.0 * 2.7 + 2.0 * 6.0) / 4.0));
        assert_eq!(result.ingredients_counted, 2);
        assert_eq!(result.servings_used, 4);
    }

    #[test]
    fn test_zero_servings_floors_to_one() {
        let food = test_food("f1", 100.0, "g", n(100.0, 5.0));
        let ingredient = test_ingredient("i1", "r1", "f1", 100.0, "g", 0);
        for servings in [0, -3] {
            let lookups = [IngredientLookup::resolved(&ingredient, food.clone())];
            let result = aggregate_ingredients(servings, &lookups);
            assert_eq!(result.servings_used, 1);
            assert!(close(result.per_serving.calories, 100.0));
            assert!(result.per_serving.calories.is_finite());
        }
    }

    #[test]
    fn test_invalid_serving_size_is_reported() {
        let broken = test_food("bad", 0.0, "g", n(100.0, 5.0));
        let ingredient = test_ingredient("i1", "r1", "bad", 100.0, "g", 0);
        let result = aggregate_ingredients(1, &[IngredientLookup::resolved(&ingredient, broken)]);
        assert_eq!(result.ingredients_counted, 0);
        assert_eq!(result.per_serving, NutritionInfo::zero());
        assert!(matches!(
            result.unresolved[0].reason,
            UnresolvedReason::InvalidServingSize(_)
        ));
    }

    #[test]
    fn test_empty_recipe() {
        let result = aggregate_ingredients(2, &[]);
        assert_eq!(result.total, NutritionInfo::zero());
        assert!(!result.is_partial());
    }

    fn soup_store() -> MemoryStore {
        MemoryStore::default()
            .with_recipe(test_recipe("soup", 2))
            .with_food(test_food("carrot", 100.0, "g", n(41.0, 0.9)))
            .with_food(test_food("stock", 240.0, "g", n(15.0, 1.0)))
            .with_ingredient(test_ingredient("i1", "soup", "carrot", 200.0, "g", 1))
            .with_ingredient(test_ingredient("i2", "soup", "stock", 2.0, "cups", 0))
            .with_ingredient(test_ingredient("i3", "soup", "ghost", 1.0, "piece", 2))
    }

    #[tokio::test]
    async fn test_calculate_from_store() {
        let store = soup_store();
        let result = calculate_recipe_nutrition(&store, "soup").await.unwrap();

        // carrot: 2 * 41 = 82, stock: 2 cups = 480g = 2 servings * 15 = 30
        assert!(close(result.total.calories, 112.0));
        assert!(close(result.per_serving.calories, 56.0));
        assert_eq!(result.ingredients_counted, 2);
        assert!(result.is_partial());
        assert_eq!(
            result.unresolved,
            vec![UnresolvedIngredient {
                ingredient_id: "i3".to_string(),
                food_id: "ghost".to_string(),
                reason: UnresolvedReason::FoodNotFound,
            }]
        );
    }

    #[tokio::test]
    async fn test_food_lookup_failure_is_not_fatal() {
        let mut store = soup_store();
        store.failing_foods.insert("carrot".to_string());

        let result = calculate_recipe_nutrition(&store, "soup").await.unwrap();
        assert!(close(result.total.calories, 30.0));
        assert_eq!(result.unresolved.len(), 2);
        assert!(matches!(
            result.unresolved[0].reason,
            UnresolvedReason::LookupFailed(_)
        ));
    }

    #[tokio::test]
    async fn test_missing_recipe() {
        let store = MemoryStore::default();
        let err = calculate_recipe_nutrition(&store, "nope").await.unwrap_err();
        assert!(matches!(err, AggregationError::RecipeNotFound(id) if id == "nope"));
    }

    #[tokio::test]
    async fn test_ingredient_fetch_failure() {
        let mut store = soup_store();
        store.fail_ingredients = true;
        let err = calculate_recipe_nutrition(&store, "soup").await.unwrap_err();
        assert!(matches!(err, AggregationError::Ingredients { .. }));
    }

    #[tokio::test]
    async fn test_recipe_fetch_failure() {
        let mut store = soup_store();
        store.fail_recipes = true;
        let err = calculate_recipe_nutrition(&store, "soup").await.unwrap_err();
        assert!(matches!(err, AggregationError::Recipe { .. }));
    }
}
