//! Backend module
//!
//! Client for the hosted Postgres-over-REST API and the table reads the
//! calculations need.

pub mod client;
pub mod query;
mod repository;

pub use client::{BackendClient, BackendError, BackendResult};
pub use query::Query;

/// Table names in the backend schema
pub mod tables {
    pub const USER_PROFILES: &str = "user_profiles";
    pub const FOODS: &str = "foods";
    pub const RECIPES: &str = "recipes";
    pub const RECIPE_INGREDIENTS: &str = "recipe_ingredients";
    pub const FOOD_LOGS: &str = "food_logs";
}
