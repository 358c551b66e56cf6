//! Calorie Calculator Shared Library
//!
//! This crate contains the calculation core (daily calorie and water
//! targets, goal recommendations) and the form state used by the WASM and
//! CLI shells.

pub mod errors;
pub mod form;
pub mod metrics;
pub mod profile;
pub mod recommendations;
pub mod validation;

// Re-export commonly used items
pub use errors::*;
pub use form::{coerce_number, CalculatorForm, FormField, InputPolicy, ProfileForm};
pub use metrics::{compute_metrics, metrics_breakdown, MetricsBreakdown};
pub use profile::*;
pub use recommendations::{recommendations_for, recommendations_for_locale, Labels, Locale};
pub use validation::validate_profile;
