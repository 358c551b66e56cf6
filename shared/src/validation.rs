//! Input validation for the strict form policy
//!
//! Range bounds live on [`UserProfile`] as `validator` derive rules. Those
//! rules let NaN through, so finiteness is checked here first.

use validator::{Validate, ValidationErrorsKind};

use crate::errors::{CalculatorError, CalculatorResult, FieldError};
use crate::profile::{ActivityLevel, UserProfile};

/// Validate that a numeric field holds a real number
pub fn validate_finite(label: &str, value: f64) -> Result<(), String> {
    if value.is_nan() || value.is_infinite() {
        return Err(format!("{} must be a valid number", label));
    }
    Ok(())
}

/// Validate that an activity factor is one of the fixed set
pub fn validate_activity_factor(factor: f64) -> Result<(), String> {
    if ActivityLevel::from_factor(factor).is_some() {
        Ok(())
    } else {
        let allowed = ActivityLevel::ALL
            .iter()
            .map(|level| level.factor().to_string())
            .collect::<Vec<_>>()
            .join(", ");
        Err(format!("Activity factor must be one of: {}", allowed))
    }
}

/// Validate a whole profile, reporting every bad field at once
pub fn validate_profile(profile: &UserProfile) -> CalculatorResult<()> {
    let mut errors = Vec::new();

    let numeric = [
        ("age", "Age", profile.age),
        ("weight", "Weight", profile.weight),
        ("height", "Height", profile.height),
    ];

    let range_errors = profile.validate().err();

    for (field, label, value) in numeric {
        if let Err(message) = validate_finite(label, value) {
            errors.push(FieldError::new(field, message));
            continue;
        }
        let Some(range_errors) = range_errors.as_ref() else {
            continue;
        };
        if let Some(ValidationErrorsKind::Field(field_errors)) = range_errors.errors().get(field) {
            for error in field_errors {
                let message = error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("{} is out of range", label));
                errors.push(FieldError::new(field, message));
            }
        }
    }

    if let Err(message) = validate_activity_factor(profile.activity_factor) {
        errors.push(FieldError::new("activity", message));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        tracing::debug!(count = errors.len(), "Profile rejected by validation");
        Err(CalculatorError::Validation(errors))
    }
}
