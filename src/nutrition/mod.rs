//! Nutrition calculation module
//!
//! Unit handling, per-food scaling, recipe aggregation, and daily totals.

pub mod aggregate;
pub mod daily;
pub mod scaling;
pub mod units;

pub use aggregate::{
    aggregate_ingredients, calculate_recipe_nutrition, AggregationError, IngredientLookup,
    RecipeNutrition, UnresolvedIngredient, UnresolvedReason,
};
pub use daily::{day_bounds, goal_progress, summarize_day, summarize_logs, DailySummary, GoalProgress, MealCalories};
pub use scaling::{scale_food, scaling_factor, ScalingError};
pub use units::{QuantityUnit, G_PER_CUP, G_PER_OZ};
