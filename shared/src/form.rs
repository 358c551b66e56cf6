//! Form state held by a rendering shell
//!
//! A shell keeps the raw text of each form control in a [`ProfileForm`],
//! replaces one field per edit, and on submit asks [`CalculatorForm`] to
//! coerce the text into a [`UserProfile`] and run the calculation. The last
//! result is kept until the next successful submit.
//!
//! Two coercion policies exist. [`InputPolicy::Permissive`] reproduces the
//! browser behaviour (empty text is zero, unparsable text is NaN, unknown
//! goals leave calories undefined). [`InputPolicy::Strict`] rejects bad
//! input with a [`CalculatorError`] naming every offending field.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::errors::{CalculatorError, CalculatorResult, FieldError};
use crate::metrics::{compute_metrics, daily_water_ml, metrics_breakdown, MetricsBreakdown};
use crate::profile::{ActivityLevel, CalculationResult, Gender, Goal, UserProfile};
use crate::recommendations::{recommendations_for_locale, Locale};
use crate::validation::validate_profile;

// ============================================================================
// Number Coercion
// ============================================================================

/// Convert form text to a number using the browser's `Number()` rules
///
/// Surrounding whitespace is ignored, empty text is `0`, `Infinity` and
/// `0x`/`0o`/`0b` integer literals are understood, and anything else that
/// is not a decimal literal is NaN.
pub fn coerce_number(raw: &str) -> f64 {
    let text = raw.trim();
    if text.is_empty() {
        return 0.0;
    }

    match text {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match text.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &text[2..];
        if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
            return f64::NAN;
        }
        return digits
            .chars()
            .filter_map(|c| c.to_digit(radix))
            .fold(0.0, |acc, d| acc * radix as f64 + d as f64);
    }

    // Rust also accepts "inf" and "nan" spellings, the browser does not
    if !text
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
    {
        return f64::NAN;
    }
    text.parse::<f64>().unwrap_or(f64::NAN)
}

// ============================================================================
// Form Fields
// ============================================================================

/// How raw form text is turned into a profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum InputPolicy {
    /// Browser-compatible coercion, never rejects
    Permissive,
    /// Parse and validate, reject with field errors
    #[default]
    Strict,
}

impl FromStr for InputPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "permissive" | "lenient" => Ok(InputPolicy::Permissive),
            "strict" => Ok(InputPolicy::Strict),
            _ => Err(format!("Unknown input policy: {}", s)),
        }
    }
}

/// One control of the calculator form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Age,
    Weight,
    Height,
    Gender,
    Activity,
    Goal,
}

impl FormField {
    pub const ALL: [FormField; 6] = [
        FormField::Age,
        FormField::Weight,
        FormField::Height,
        FormField::Gender,
        FormField::Activity,
        FormField::Goal,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            FormField::Age => "age",
            FormField::Weight => "weight",
            FormField::Height => "height",
            FormField::Gender => "gender",
            FormField::Activity => "activity",
            FormField::Goal => "goal",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| format!("Unknown form field: {}", s))
    }
}

// ============================================================================
// Profile Form
// ============================================================================

/// Raw text of every form control
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileForm {
    pub age: String,
    pub weight: String,
    pub height: String,
    pub gender: String,
    pub activity: String,
    pub goal: String,
}

impl Default for ProfileForm {
    fn default() -> Self {
        Self::from(&UserProfile::default())
    }
}

impl From<&UserProfile> for ProfileForm {
    fn from(profile: &UserProfile) -> Self {
        Self {
            age: profile.age.to_string(),
            weight: profile.weight.to_string(),
            height: profile.height.to_string(),
            gender: profile.gender.as_str().to_string(),
            activity: profile.activity_factor.to_string(),
            goal: profile.goal.as_str().to_string(),
        }
    }
}

impl ProfileForm {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Age => &self.age,
            FormField::Weight => &self.weight,
            FormField::Height => &self.height,
            FormField::Gender => &self.gender,
            FormField::Activity => &self.activity,
            FormField::Goal => &self.goal,
        }
    }

    /// Replace the text of one field
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        trace!(field = field.name(), value = %value, "Form field updated");
        match field {
            FormField::Age => self.age = value,
            FormField::Weight => self.weight = value,
            FormField::Height => self.height = value,
            FormField::Gender => self.gender = value,
            FormField::Activity => self.activity = value,
            FormField::Goal => self.goal = value,
        }
    }

    /// Coerce every field with browser rules
    ///
    /// `None` when the goal is not one of the known values; the calorie
    /// target is undefined then.
    pub fn coerce_permissive(&self) -> Option<UserProfile> {
        let goal = Goal::from_form_value(&self.goal)?;
        Some(UserProfile {
            age: coerce_number(&self.age),
            weight: coerce_number(&self.weight),
            height: coerce_number(&self.height),
            gender: Gender::from_form_value(&self.gender),
            activity_factor: coerce_number(&self.activity),
            goal,
        })
    }

    /// Calculate with browser-compatible coercion; never fails
    pub fn compute_permissive(&self) -> CalculationResult {
        match self.coerce_permissive() {
            Some(profile) => compute_metrics(&profile),
            None => CalculationResult {
                calories: None,
                water_ml: daily_water_ml(coerce_number(&self.weight)),
            },
        }
    }

    /// Parse and validate every field into a profile
    ///
    /// Parse failures and range failures are reported together, in form
    /// field order.
    pub fn parse_strict(&self) -> CalculatorResult<UserProfile> {
        let mut errors = Vec::new();

        let mut number = |field: FormField| -> f64 {
            match parse_strict_number(field, self.get(field)) {
                Ok(value) => value,
                Err(error) => {
                    errors.push(error);
                    f64::NAN
                }
            }
        };
        let age = number(FormField::Age);
        let weight = number(FormField::Weight);
        let height = number(FormField::Height);

        // Placeholders keep the remaining fields checkable
        let gender = self.gender.parse::<Gender>().unwrap_or_else(|e| {
            errors.push(FieldError::new("gender", e.to_string()));
            Gender::default()
        });
        let activity = self.activity.parse::<ActivityLevel>().unwrap_or_else(|e| {
            errors.push(FieldError::new("activity", e.to_string()));
            ActivityLevel::default()
        });
        let goal = self.goal.parse::<Goal>().unwrap_or_else(|e| {
            errors.push(FieldError::new("goal", e.to_string()));
            Goal::default()
        });

        let profile = UserProfile {
            age,
            weight,
            height,
            gender,
            activity_factor: activity.factor(),
            goal,
        };

        if let Err(CalculatorError::Validation(range_errors)) = validate_profile(&profile) {
            let unparsed: Vec<&'static str> = errors.iter().map(|e| e.field).collect();
            errors.extend(
                range_errors
                    .into_iter()
                    .filter(|e| !unparsed.contains(&e.field)),
            );
        }

        if errors.is_empty() {
            Ok(profile)
        } else {
            errors.sort_by_key(|e| field_order(e.field));
            Err(CalculatorError::Validation(errors))
        }
    }

    /// Calculate under the given policy
    pub fn compute(&self, policy: InputPolicy) -> CalculatorResult<CalculationResult> {
        match policy {
            InputPolicy::Permissive => Ok(self.compute_permissive()),
            InputPolicy::Strict => self.parse_strict().map(|profile| compute_metrics(&profile)),
        }
    }
}

fn field_order(name: &str) -> usize {
    FormField::ALL
        .iter()
        .position(|field| field.name() == name)
        .unwrap_or(FormField::ALL.len())
}

/// Parse a plain decimal literal; no radix prefixes, no `Infinity`
fn parse_decimal(raw: &str) -> Option<f64> {
    let text = raw.trim();
    if text.is_empty()
        || !text
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'))
    {
        return None;
    }
    text.parse::<f64>().ok()
}

fn parse_strict_number(field: FormField, raw: &str) -> Result<f64, FieldError> {
    if raw.trim().is_empty() {
        return Err(FieldError::new(field.name(), "Value is required"));
    }
    parse_decimal(raw)
        .ok_or_else(|| FieldError::new(field.name(), format!("{:?} is not a number", raw)))
}

// ============================================================================
// Calculator Form
// ============================================================================

/// Mutable form state plus the last calculated result
#[derive(Debug, Clone, Default)]
pub struct CalculatorForm {
    form: ProfileForm,
    policy: InputPolicy,
    locale: Locale,
    last_result: Option<CalculationResult>,
}

impl CalculatorForm {
    pub fn new(policy: InputPolicy, locale: Locale) -> Self {
        Self {
            form: ProfileForm::default(),
            policy,
            locale,
            last_result: None,
        }
    }

    pub fn with_form(mut self, form: ProfileForm) -> Self {
        self.form = form;
        self
    }

    pub fn form(&self) -> &ProfileForm {
        &self.form
    }

    pub fn policy(&self) -> InputPolicy {
        self.policy
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set(field, value);
    }

    /// Calculate from the current form and replace the result slot
    ///
    /// A rejected submit leaves the previous result in place.
    pub fn submit(&mut self) -> CalculatorResult<CalculationResult> {
        let result = self.form.compute(self.policy)?;
        debug!(
            calories = ?result.calories,
            water_ml = ?result.water_ml,
            "Calculation submitted"
        );
        self.last_result = Some(result);
        Ok(result)
    }

    pub fn last_result(&self) -> Option<&CalculationResult> {
        self.last_result.as_ref()
    }

    /// Intermediate values for the current form, when it yields a profile
    pub fn breakdown(&self) -> Option<MetricsBreakdown> {
        let profile = match self.policy {
            InputPolicy::Permissive => self.form.coerce_permissive(),
            InputPolicy::Strict => self.form.parse_strict().ok(),
        };
        profile.as_ref().map(metrics_breakdown)
    }

    /// Recommendations for the goal currently selected in the form
    pub fn recommendations(&self) -> &'static [&'static str] {
        recommendations_for_locale(&self.form.goal, self.locale)
    }
}
