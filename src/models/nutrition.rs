//! Shared nutrition value type
//!
//! Output of food scaling, recipe aggregation, and daily totals.

use serde::{Deserialize, Serialize};

/// Six nutrient totals
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct NutritionInfo {
    pub calories: f64,
    pub protein_g: f64,
    pub carbohydrates_g: f64,
    pub fat_g: f64,
    pub fiber_g: f64,
    pub sodium_mg: f64,
}

impl NutritionInfo {
    pub fn zero() -> Self {
        Self::default()
    }

    /// Scale every field by a multiplier
    pub fn scale(&self, multiplier: f64) -> Self {
        Self {
            calories: self.calories * multiplier,
            protein_g: self.protein_g * multiplier,
            carbohydrates_g: self.carbohydrates_g * multiplier,
            fat_g: self.fat_g * multiplier,
            fiber_g: self.fiber_g * multiplier,
            sodium_mg: self.sodium_mg * multiplier,
        }
    }

    /// Add another nutrition value field by field
    pub fn add(&self, other: &NutritionInfo) -> Self {
        Self {
            calories: self.calories + other.calories,
            protein_g: self.protein_g + other.protein_g,
            carbohydrates_g: self.carbohydrates_g + other.carbohydrates_g,
            fat_g: self.fat_g + other.fat_g,
            fiber_g: self.fiber_g + other.fiber_g,
            sodium_mg: self.sodium_mg + other.sodium_mg,
        }
    }

    /// Divide every field by a serving count
    pub fn per_serving(&self, servings: f64) -> Self {
        Self {
            calories: self.calories / servings,
            protein_g: self.protein_g / servings,
            carbohydrates_g: self.carbohydrates_g / servings,
            fat_g: self.fat_g / servings,
            fiber_g: self.fiber_g / servings,
            sodium_mg: self.sodium_mg / servings,
        }
    }
}

impl std::ops::Add for NutritionInfo {
    type Output = NutritionInfo;

    fn add(self, other: NutritionInfo) -> NutritionInfo {
        NutritionInfo::add(&self, &other)
    }
}

impl std::ops::AddAssign for NutritionInfo {
    fn add_assign(&mut self, other: NutritionInfo) {
        *self = NutritionInfo::add(self, &other);
    }
}

impl std::ops::Mul<f64> for NutritionInfo {
    type Output = NutritionInfo;

    fn mul(self, multiplier: f64) -> NutritionInfo {
        self.scale(multiplier)
    }
}

impl std::iter::Sum for NutritionInfo {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(NutritionInfo::zero(), |acc, n| acc + n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> NutritionInfo {
        NutritionInfo {
            calories: 200.0,
            protein_g: 10.0,
            carbohydrates_g: 30.0,
            fat_g: 5.0,
            fiber_g: 2.0,
            sodium_mg: 150.0,
        }
    }

    #[test]
    fn test_scale() {
        let scaled = sample() * 1.5;
        assert_eq!(scaled.calories, 300.0);
        assert_eq!(scaled.protein_g, 15.0);
        assert_eq!(scaled.sodium_mg, 225.0);
    }

    #[test]
    fn test_sum_and_per_serving() {
        let total: NutritionInfo = vec![sample(), sample()].into_iter().sum();
        assert_eq!(total.calories, 400.0);

        let each = total.per_serving(4.0);
        assert_eq!(each.calories, 100.0);
        assert_eq!(each.fat_g, 2.5);
    }

    #[test]
    fn test_add_assign() {
        let mut acc = NutritionInfo::zero();
        acc += sample();
        acc += sample();
        assert_eq!(acc, sample() * 2.0);
    }
}
