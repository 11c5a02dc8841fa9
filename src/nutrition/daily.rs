//! Daily totals
//!
//! Sums a user's logged nutrition for one date and relates it to the daily
//! targets on their profile.

use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;

use crate::backend::BackendError;
use crate::models::{FoodLog, MealType, NutritionInfo, UserProfile};
use crate::store::NutritionStore;

/// Calories per meal type
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MealCalories {
    pub breakfast: f64,
    pub lunch: f64,
    pub dinner: f64,
    pub snack: f64,
    pub other: f64,
}

/// Percent of each daily target reached; None when no target is set
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct GoalProgress {
    pub calories: Option<f64>,
    pub protein: Option<f64>,
    pub carbohydrates: Option<f64>,
    pub fat: Option<f64>,
    pub fiber: Option<f64>,
}

/// Nutrition summary for one user and date
#[derive(Debug, Clone, Serialize)]
pub struct DailySummary {
    pub user_id: String,
    pub date: NaiveDate,
    pub totals: NutritionInfo,
    pub meal_calories: MealCalories,
    pub goals: GoalProgress,
    pub log_count: usize,
}

fn percent_of(total: f64, target: Option<f64>) -> Option<f64> {
    target.filter(|t| *t > 0.0).map(|t| total * 100.0 / t)
}

/// Goal percentages for totals against a profile's targets
pub fn goal_progress(totals: &NutritionInfo, profile: Option<&UserProfile>) -> GoalProgress {
    let profile = match profile {
        Some(p) => p,
        None => return GoalProgress::default(),
    };

    GoalProgress {
        calories: percent_of(totals.calories, profile.daily_calorie_target.map(f64::from)),
        protein: percent_of(totals.protein_g, profile.daily_protein_target),
        carbohydrates: percent_of(totals.carbohydrates_g, profile.daily_carb_target),
        fat: percent_of(totals.fat_g, profile.daily_fat_target),
        fiber: percent_of(totals.fiber_g, profile.daily_fiber_target),
    }
}

/// Build a summary from logs already narrowed to one user and date
pub fn summarize_logs(
    user_id: &str,
    date: NaiveDate,
    logs: &[FoodLog],
    profile: Option<&UserProfile>,
) -> DailySummary {
    let mut totals = NutritionInfo::zero();
    let mut meal_calories = MealCalories::default();

    for log in logs {
        totals += log.nutrition();
        let slot = match log.meal() {
            MealType::Breakfast => &mut meal_calories.breakfast,
            MealType::Lunch => &mut meal_calories.lunch,
            MealType::Dinner => &mut meal_calories.dinner,
            MealType::Snack => &mut meal_calories.snack,
            MealType::Other => &mut meal_calories.other,
        };
        *slot += log.calories;
    }

    DailySummary {
        user_id: user_id.to_string(),
        date,
        goals: goal_progress(&totals, profile),
        totals,
        meal_calories,
        log_count: logs.len(),
    }
}

/// Bounds of the UTC day `date` as `[start, end)` timestamps
pub fn day_bounds(date: NaiveDate) -> (String, String) {
    let start = format!("{}T00:00:00Z", date);
    let end = match date.succ_opt() {
        Some(next) => format!("{}T00:00:00Z", next),
        // last representable date
        None => "infinity".to_string(),
    };
    (start, end)
}

/// Fetch a user's profile and logs for `date` (UTC day) and summarize them
pub async fn summarize_day<S>(
    store: &S,
    user_id: &str,
    date: NaiveDate,
) -> Result<DailySummary, BackendError>
where
    S: NutritionStore + ?Sized,
{
    let (start, end) = day_bounds(date);

    let profile = store.get_user_profile(user_id).await?;
    let logs = store.get_food_logs(user_id, &start, &end).await?;

    let summary = summarize_logs(user_id, date, &logs, profile.as_ref());
    info!(
        "Daily summary for {} on {}: {} logs, {:.1} kcal",
        user_id, date, summary.log_count, summary.totals.calories
    );

    Ok(summary)
}
