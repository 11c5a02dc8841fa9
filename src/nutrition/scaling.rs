//! Nutrient scaling
//!
//! Scales a food's per-serving nutrient profile to a requested quantity.

use thiserror::Error;

use super::units::QuantityUnit;
use crate::models::{Food, NutritionInfo};

/// Scaling error types
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ScalingError {
    #[error("Invalid serving size {serving_size} for unit '{unit}'")]
    InvalidServingSize { serving_size: f64, unit: String },
}

/// Calculate the multiplier to apply to a food's per-serving nutrition
///
/// # Arguments
/// * `quantity` - The requested amount (e.g., 150.0)
/// * `unit` - Unit of `quantity` (e.g., "g", "oz", "cup", "piece")
/// * `serving_size` - The food's declared serving size
///
/// Piece units ignore `serving_size`: one piece is one serving.
pub fn scaling_factor(quantity: f64, unit: &str, serving_size: f64) -> Result<f64, ScalingError> {
    let parsed = QuantityUnit::parse(unit);

    let grams_per_unit = match parsed.grams_per_unit() {
        Some(g) => g,
        None => return Ok(quantity),
    };

    if !serving_size.is_finite() || serving_size <= 0.0 {
        return Err(ScalingError::InvalidServingSize {
            serving_size,
            unit: unit.to_string(),
        });
    }

    if let QuantityUnit::Other(ref other) = parsed {
        tracing::debug!(
            "Unrecognized unit '{}', scaling {} against serving size {} as grams",
            other,
            quantity,
            serving_size
        );
    }

    Ok(quantity * grams_per_unit / serving_size)
}

/// Scale a food's nutrient profile to `quantity` `unit`
pub fn scale_food(food: &Food, quantity: f64, unit: &str) -> Result<NutritionInfo, ScalingError> {
    let factor = scaling_factor(quantity, unit, food.serving_size)?;
    Ok(food.nutrition_per_serving().scale(factor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::test_food;

    fn profile() -> NutritionInfo {
        NutritionInfo {
            calories: 200.0,
            protein_g: 8.0,
            carbohydrates_g: 30.0,
            fat_g: 6.0,
            fiber_g: 4.0,
            sodium_mg: 120.0,
        }
    }

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_grams_example() {
        // 150g of a 100g-serving food at 200 kcal = 300 kcal
        let food = test_food("f", 100.0, "g", profile());
        let scaled = scale_food(&food, 150.0, "g").unwrap();
        assert!(close(scaled.calories, 300.0));
    }

    #[test]
    fn test_grams_is_linear_in_every_field() {
        let food = test_food("f", 40.0, "g", profile());
        for q in [0.0, 1.0, 17.5, 40.0, 250.0] {
            let scaled = scale_food(&food, q, "grams").unwrap();
            let p = profile();
            assert!(close(scaled.calories, p.calories * q / 40.0));
            assert!(close(scaled.protein_g, p.protein_g * q / 40.0));
            assert!(close(scaled.carbohydrates_g, p.carbohydrates_g * q / 40.0));
            assert!(close(scaled.fat_g, p.fat_g * q / 40.0));
            assert!(close(scaled.fiber_g, p.fiber_g * q / 40.0));
            assert!(close(scaled.sodium_mg, p.sodium_mg * q / 40.0));
        }
    }

    #[test]
    fn test_ounces() {
        // 2 oz = 56.7g of a 100g serving
        let factor = scaling_factor(2.0, "OZ", 100.0).unwrap();
        assert!(close(factor, 0.567));
    }

    #[test]
    fn test_cups_fixed_density() {
        // 1 cup = 240g of a 120g serving = 2 servings
        let factor = scaling_factor(1.0, "cup", 120.0).unwrap();
        assert!(close(factor, 2.0));
    }

    #[test]
    fn test_piece_ignores_serving_size() {
        let small = test_food("a", 10.0, "g", profile());
        let large = test_food("b", 500.0, "g", profile());
        let a = scale_food(&small, 3.0, "pieces").unwrap();
        let b = scale_food(&large, 3.0, "Item").unwrap();
        assert_eq!(a, b);
        assert!(close(a.calories, 600.0));
    }

    #[test]
    fn test_piece_with_zero_serving_size() {
        assert_eq!(scaling_factor(2.0, "piece", 0.0), Ok(2.0));
    }

    #[test]
    fn test_unknown_unit_falls_back_to_grams() {
        let factor = scaling_factor(50.0, "tbsp", 25.0).unwrap();
        assert!(close(factor, 2.0));
    }

    #[test]
    fn test_invalid_serving_size() {
        let err = scaling_factor(100.0, "g", 0.0).unwrap_err();
        assert!(matches!(err, ScalingError::InvalidServingSize { .. }));
        assert!(scaling_factor(1.0, "cup", -5.0).is_err());
        assert!(scaling_factor(1.0, "oz", f64::NAN).is_err());
    }
}
