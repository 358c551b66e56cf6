//! Error types for the Calorie Calculator

use std::fmt;

use thiserror::Error;

/// A single rejected form field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// Field name as the form knows it (`age`, `weight`, ...)
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Calculator error types
///
/// The metric calculation itself never fails; these are raised only by the
/// strict input policy when a profile is built from raw form values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    #[error("Invalid number for {field}: {value:?}")]
    InvalidNumber { field: &'static str, value: String },

    #[error("Unknown gender: {0}")]
    UnknownGender(String),

    #[error("Unknown goal: {0}")]
    UnknownGoal(String),

    #[error("Unknown activity level: {0}")]
    UnknownActivityLevel(String),

    #[error("Unsupported activity factor: {0}")]
    UnsupportedActivityFactor(f64),

    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    #[error("Validation error: {}", join_field_errors(.0))]
    Validation(Vec<FieldError>),
}

impl CalculatorError {
    /// Field names involved in this error, in report order
    pub fn fields(&self) -> Vec<&'static str> {
        match self {
            CalculatorError::InvalidNumber { field, .. } => vec![*field],
            CalculatorError::UnknownGender(_) => vec!["gender"],
            CalculatorError::UnknownGoal(_) => vec!["goal"],
            CalculatorError::UnknownActivityLevel(_)
            | CalculatorError::UnsupportedActivityFactor(_) => vec!["activity"],
            CalculatorError::UnknownLocale(_) => vec![],
            CalculatorError::Validation(errors) => errors.iter().map(|e| e.field).collect(),
        }
    }
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result alias for calculator operations
pub type CalculatorResult<T> = Result<T, CalculatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_lists_every_field() {
        let err = CalculatorError::Validation(vec![
            FieldError::new("age", "Age must be at least 10"),
            FieldError::new("weight", "Weight must be a valid number"),
        ]);
        assert_eq!(
            err.to_string(),
            "Validation error: age: Age must be at least 10; weight: Weight must be a valid number"
        );
        assert_eq!(err.fields(), vec!["age", "weight"]);
    }

    #[test]
    fn test_invalid_number_names_field() {
        let err = CalculatorError::InvalidNumber {
            field: "height",
            value: "tall".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid number for height: \"tall\"");
        assert_eq!(err.fields(), vec!["height"]);
    }
}
