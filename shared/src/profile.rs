//! Profile and result types for the calorie calculation
//!
//! All body measurements are stored in SI-adjacent units: kilograms,
//! centimeters and years. Numeric fields are plain `f64` so that values
//! coerced from raw form input (including NaN) can flow through unchanged.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::errors::CalculatorError;

// ============================================================================
// Gender
// ============================================================================

/// Gender used by the Mifflin-St Jeor constant term
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    #[default]
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    /// Lenient mapping used by the permissive form policy: anything that is
    /// not exactly `male` counts as female.
    pub fn from_form_value(value: &str) -> Self {
        if value == "male" {
            Gender::Male
        } else {
            Gender::Female
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Gender {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "male" | "m" => Ok(Gender::Male),
            "female" | "f" => Ok(Gender::Female),
            _ => Err(CalculatorError::UnknownGender(s.to_string())),
        }
    }
}

// ============================================================================
// Activity Level
// ============================================================================

/// Habitual activity level, each mapped to a fixed TDEE factor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Sedentary lifestyle
    #[default]
    Sedentary,
    /// Light activity
    Light,
    /// Moderate activity
    Moderate,
    /// High activity
    High,
    /// Extreme activity
    Extreme,
}

impl ActivityLevel {
    /// Every level, from least to most active
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::Light,
        ActivityLevel::Moderate,
        ActivityLevel::High,
        ActivityLevel::Extreme,
    ];

    /// Get the activity multiplier for TDEE calculation
    pub fn factor(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::High => 1.725,
            ActivityLevel::Extreme => 1.9,
        }
    }

    /// Find the level whose factor matches exactly
    pub fn from_factor(factor: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|level| (level.factor() - factor).abs() < 1e-9)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "sedentary",
            ActivityLevel::Light => "light",
            ActivityLevel::Moderate => "moderate",
            ActivityLevel::High => "high",
            ActivityLevel::Extreme => "extreme",
        }
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ActivityLevel {
    type Err = CalculatorError;

    /// Accepts a level name or one of the fixed factor values (`"1.55"`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "sedentary" => return Ok(ActivityLevel::Sedentary),
            "light" | "lightly_active" => return Ok(ActivityLevel::Light),
            "moderate" | "moderately_active" => return Ok(ActivityLevel::Moderate),
            "high" | "very_active" => return Ok(ActivityLevel::High),
            "extreme" | "extra_active" => return Ok(ActivityLevel::Extreme),
            _ => {}
        }
        match normalized.parse::<f64>() {
            Ok(factor) => {
                Self::from_factor(factor).ok_or(CalculatorError::UnsupportedActivityFactor(factor))
            }
            Err(_) => Err(CalculatorError::UnknownActivityLevel(s.to_string())),
        }
    }
}

// ============================================================================
// Goal
// ============================================================================

/// Body weight goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Goal {
    /// Weight loss
    Lose,
    /// Weight maintenance
    #[default]
    Maintain,
    /// Mass gain
    Gain,
}

impl Goal {
    pub const ALL: [Goal; 3] = [Goal::Lose, Goal::Maintain, Goal::Gain];

    /// Scalar applied to TDEE to get the calorie target
    pub fn multiplier(&self) -> f64 {
        match self {
            Goal::Lose => 0.85,
            Goal::Maintain => 1.0,
            Goal::Gain => 1.15,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Goal::Lose => "lose",
            Goal::Maintain => "maintain",
            Goal::Gain => "gain",
        }
    }

    /// Exact lookup of a form value, `None` for anything unrecognised
    pub fn from_form_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|goal| goal.as_str() == value)
    }
}

impl fmt::Display for Goal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Goal {
    type Err = CalculatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_form_value(&s.trim().to_lowercase())
            .ok_or_else(|| CalculatorError::UnknownGoal(s.to_string()))
    }
}

// ============================================================================
// User Profile
// ============================================================================

/// Body metrics needed for one calculation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Age in years
    #[validate(range(min = 10.0, max = 100.0, message = "Age must be between 10 and 100"))]
    pub age: f64,
    /// Weight in kilograms
    #[validate(range(min = 30.0, max = 300.0, message = "Weight must be between 30 and 300 kg"))]
    pub weight: f64,
    /// Height in centimeters
    #[validate(range(min = 100.0, max = 250.0, message = "Height must be between 100 and 250 cm"))]
    pub height: f64,
    pub gender: Gender,
    /// TDEE multiplier, normally one of the [`ActivityLevel`] factors
    pub activity_factor: f64,
    pub goal: Goal,
}

impl Default for UserProfile {
    /// The form's initial state
    fn default() -> Self {
        Self {
            age: 25.0,
            weight: 70.0,
            height: 175.0,
            gender: Gender::Male,
            activity_factor: ActivityLevel::Sedentary.factor(),
            goal: Goal::Maintain,
        }
    }
}

impl UserProfile {
    /// The activity level matching `activity_factor`, if it is one of the fixed set
    pub fn activity_level(&self) -> Option<ActivityLevel> {
        ActivityLevel::from_factor(self.activity_factor)
    }

    pub fn with_goal(mut self, goal: Goal) -> Self {
        self.goal = goal;
        self
    }
}

// ============================================================================
// Calculation Result
// ============================================================================

/// Daily targets derived from a profile
///
/// A field is `None` when its arithmetic produced a non-number (NaN or an
/// infinity); shells render that as `NaN`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalculationResult {
    /// Daily calorie target, kcal
    pub calories: Option<i64>,
    /// Daily water target, ml
    #[serde(rename = "water")]
    pub water_ml: Option<i64>,
}

impl CalculationResult {
    /// True when both fields hold a number
    pub fn is_complete(&self) -> bool {
        self.calories.is_some() && self.water_ml.is_some()
    }
}

/// Render an optional integer metric the way the browser would
pub fn format_metric(value: Option<i64>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "NaN".to_string(),
    }
}

impl fmt::Display for CalculationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "water {} ml/day, calories {} kcal/day",
            format_metric(self.water_ml),
            format_metric(self.calories)
        )
    }
}
