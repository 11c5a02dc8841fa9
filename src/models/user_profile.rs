//! User profile model
//!
//! Only the daily targets feed into calculations; the rest is carried for
//! callers that display the profile.

use serde::{Deserialize, Serialize};

/// A row of the `user_profiles` table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub username: Option<String>,
    pub email: String,
    pub full_name: Option<String>,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub height_cm: Option<f64>,
    pub weight_kg: Option<f64>,
    pub activity_level: Option<String>,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    #[serde(default)]
    pub health_goals: Vec<String>,
    pub daily_calorie_target: Option<i32>,
    pub daily_protein_target: Option<f64>,
    pub daily_carb_target: Option<f64>,
    pub daily_fat_target: Option<f64>,
    pub daily_fiber_target: Option<f64>,
    pub avatar_url: Option<String>,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

fn default_timezone() -> String {
    "UTC".to_string()
}
