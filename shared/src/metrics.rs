//! Daily calorie and water target calculations
//!
//! Calories follow the Mifflin-St Jeor BMR scaled by the activity factor
//! and the goal multiplier. Water is a flat 35 ml per kilogram of body
//! weight.
//!
//! All functions are pure. Nothing here validates input: a NaN or infinite
//! value flows through the arithmetic and surfaces as a missing field in
//! [`CalculationResult`].

use serde::{Deserialize, Serialize};

use crate::profile::{CalculationResult, Gender, UserProfile};

/// Water recommendation per kilogram of body weight, ml
pub const WATER_ML_PER_KG: f64 = 35.0;

// ============================================================================
// Rounding
// ============================================================================

/// Round half away from zero, `None` when the value is not a finite number
/// or does not fit an `i64`.
///
/// 2.5 rounds to 3 and -2.5 rounds to -3.
pub fn round_metric(value: f64) -> Option<i64> {
    let rounded = value.round();
    if rounded.is_finite() && rounded >= i64::MIN as f64 && rounded < i64::MAX as f64 {
        Some(rounded as i64)
    } else {
        None
    }
}

// ============================================================================
// BMR and TDEE
// ============================================================================

/// Calculate Basal Metabolic Rate using the Mifflin-St Jeor equation
///
/// Men: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) + 5
/// Women: BMR = 10 × weight(kg) + 6.25 × height(cm) - 5 × age(y) - 161
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age_years: f64, gender: Gender) -> f64 {
    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * age_years;
    match gender {
        Gender::Male => base + 5.0,
        Gender::Female => base - 161.0,
    }
}

/// TDEE = BMR × activity factor
pub fn calculate_tdee(bmr: f64, activity_factor: f64) -> f64 {
    bmr * activity_factor
}

/// Daily water target in ml, rounded
pub fn daily_water_ml(weight_kg: f64) -> Option<i64> {
    round_metric(weight_kg * WATER_ML_PER_KG)
}

// ============================================================================
// Full Calculation
// ============================================================================

/// Intermediate values of one calculation, before rounding
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricsBreakdown {
    pub bmr: f64,
    pub tdee: f64,
    pub activity_factor: f64,
    pub goal_multiplier: f64,
    /// TDEE × goal multiplier
    pub calorie_target: f64,
    /// Weight × 35
    pub water_target_ml: f64,
}

impl MetricsBreakdown {
    pub fn result(&self) -> CalculationResult {
        CalculationResult {
            calories: round_metric(self.calorie_target),
            water_ml: round_metric(self.water_target_ml),
        }
    }
}

/// Calculate every intermediate value for a profile
pub fn metrics_breakdown(profile: &UserProfile) -> MetricsBreakdown {
    let bmr = calculate_bmr(profile.weight, profile.height, profile.age, profile.gender);
    let tdee = calculate_tdee(bmr, profile.activity_factor);
    let goal_multiplier = profile.goal.multiplier();

    MetricsBreakdown {
        bmr,
        tdee,
        activity_factor: profile.activity_factor,
        goal_multiplier,
        calorie_target: tdee * goal_multiplier,
        water_target_ml: profile.weight * WATER_ML_PER_KG,
    }
}

/// Compute the daily calorie and water targets for a profile
///
/// Never fails. Deterministic for identical input.
pub fn compute_metrics(profile: &UserProfile) -> CalculationResult {
    metrics_breakdown(profile).result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::{ActivityLevel, Goal};
    use proptest::prelude::*;
    use rstest::rstest;

    fn reference_male() -> UserProfile {
        UserProfile {
            age: 25.0,
            weight: 70.0,
            height: 175.0,
            gender: Gender::Male,
            activity_factor: 1.2,
            goal: Goal::Maintain,
        }
    }

    fn reference_female() -> UserProfile {
        UserProfile {
            age: 30.0,
            weight: 60.0,
            height: 165.0,
            gender: Gender::Female,
            activity_factor: 1.55,
            goal: Goal::Maintain,
        }
    }

    // =========================================================================
    // Rounding Tests
    // =========================================================================

    #[rstest]
    #[case(2.5, Some(3))]
    #[case(-2.5, Some(-3))]
    #[case(2.4999, Some(2))]
    #[case(-2.4999, Some(-2))]
    #[case(2008.5, Some(2009))]
    #[case(0.0, Some(0))]
    #[case(f64::NAN, None)]
    #[case(f64::INFINITY, None)]
    #[case(f64::NEG_INFINITY, None)]
    #[case(1e300, None)]
    fn test_round_metric(#[case] value: f64, #[case] expected: Option<i64>) {
        assert_eq!(round_metric(value), expected);
    }

    // =========================================================================
    // BMR/TDEE Tests
    // =========================================================================

    #[test]
    fn test_bmr_mifflin() {
        assert_eq!(calculate_bmr(70.0, 175.0, 25.0, Gender::Male), 1673.75);
        assert_eq!(calculate_bmr(60.0, 165.0, 30.0, Gender::Female), 1320.25);
    }

    #[test]
    fn test_male_reference_breakdown() {
        let breakdown = metrics_breakdown(&reference_male());
        assert_eq!(breakdown.bmr, 1673.75);
        assert!((breakdown.tdee - 2008.5).abs() < 1e-9);
        assert_eq!(breakdown.goal_multiplier, 1.0);
        assert_eq!(breakdown.water_target_ml, 2450.0);
    }

    #[test]
    fn test_female_reference_breakdown() {
        let breakdown = metrics_breakdown(&reference_female());
        assert_eq!(breakdown.bmr, 1320.25);
        assert!((breakdown.tdee - 2046.3875).abs() < 1e-9);
    }

    #[rstest]
    #[case(Goal::Maintain, 2009)]
    #[case(Goal::Lose, 1707)]
    #[case(Goal::Gain, 2310)]
    fn test_male_reference_calories(#[case] goal: Goal, #[case] calories: i64) {
        let result = compute_metrics(&reference_male().with_goal(goal));
        assert_eq!(result.calories, Some(calories));
        assert_eq!(result.water_ml, Some(2450));
    }

    #[test]
    fn test_female_reference_result() {
        let result = compute_metrics(&reference_female());
        assert_eq!(
            result,
            CalculationResult {
                calories: Some(2046),
                water_ml: Some(2100),
            }
        );
    }

    #[test]
    fn test_compute_is_idempotent() {
        let profile = reference_female();
        let first = compute_metrics(&profile);
        let second = compute_metrics(&profile);
        assert_eq!(first, second);
        assert_eq!(profile, reference_female());
    }

    #[test]
    fn test_nan_weight_propagates_to_both_fields() {
        let profile = UserProfile {
            weight: f64::NAN,
            ..reference_male()
        };
        let result = compute_metrics(&profile);
        assert_eq!(result.calories, None);
        assert_eq!(result.water_ml, None);
    }

    #[test]
    fn test_nan_age_only_affects_calories() {
        let profile = UserProfile {
            age: f64::NAN,
            ..reference_male()
        };
        let result = compute_metrics(&profile);
        assert_eq!(result.calories, None);
        assert_eq!(result.water_ml, Some(2450));
    }

    #[test]
    fn test_out_of_range_input_does_not_fail() {
        let profile = UserProfile {
            age: 500.0,
            weight: 1.0,
            height: 10.0,
            ..reference_male()
        };
        let result = compute_metrics(&profile);
        assert!(result.calories.unwrap() < 0);
        assert_eq!(result.water_ml, Some(35));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: Male target exceeds female target by exactly 166 kcal before scaling
        #[test]
        fn prop_male_bmr_offset(
            weight in 30.0f64..300.0,
            height in 100.0f64..250.0,
            age in 10.0f64..100.0
        ) {
            let male = calculate_bmr(weight, height, age, Gender::Male);
            let female = calculate_bmr(weight, height, age, Gender::Female);
            prop_assert!((male - female - 166.0).abs() < 1e-6);
        }

        /// Property: Goal ordering holds for every in-domain profile
        #[test]
        fn prop_goal_ordering(
            weight in 30.0f64..300.0,
            height in 100.0f64..250.0,
            age in 10.0f64..100.0,
            level in 0usize..5
        ) {
            let profile = UserProfile {
                age,
                weight,
                height,
                gender: Gender::Female,
                activity_factor: ActivityLevel::ALL[level].factor(),
                goal: Goal::Maintain,
            };
            let lose = compute_metrics(&profile.clone().with_goal(Goal::Lose)).calories.unwrap();
            let maintain = compute_metrics(&profile.clone().with_goal(Goal::Maintain)).calories.unwrap();
            let gain = compute_metrics(&profile.with_goal(Goal::Gain)).calories.unwrap();
            prop_assert!(lose <= maintain && maintain <= gain);
        }

        /// Property: Water depends only on weight
        #[test]
        fn prop_water_depends_on_weight(
            weight in 30.0f64..300.0,
            age in 10.0f64..100.0
        ) {
            let profile = UserProfile { weight, age, ..reference_female() };
            let result = compute_metrics(&profile);
            prop_assert_eq!(result.water_ml, daily_water_ml(weight));
        }
    }
}
