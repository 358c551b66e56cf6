//! Calorie Calculator WASM Module
//!
//! This crate provides WebAssembly bindings so the browser form can call
//! the calculation core directly. Results cross the boundary as JSON
//! strings.

use calorie_calculator_shared::{
    self as shared, ActivityLevel, CalculationResult, Gender, Goal, Locale, ProfileForm,
    UserProfile,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

/// Outcome of a form submission as seen by JavaScript
#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
enum FormResponse {
    Ok {
        #[serde(flatten)]
        result: CalculationResult,
        recommendations: Vec<String>,
    },
    Error {
        message: String,
        fields: Vec<&'static str>,
    },
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        serde_json::json!({ "status": "error", "message": e.to_string(), "fields": [] }).to_string()
    })
}

/// One `<option>` of a select control
#[derive(Debug, Serialize)]
struct SelectOption {
    value: String,
    label: &'static str,
}

/// Every label and option the browser form renders
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FormLabels {
    title: &'static str,
    age: &'static str,
    weight: &'static str,
    height: &'static str,
    gender: &'static str,
    activity: &'static str,
    goal: &'static str,
    submit: &'static str,
    results: &'static str,
    water: &'static str,
    water_unit: &'static str,
    calories: &'static str,
    calories_unit: &'static str,
    recommendations: &'static str,
    gender_options: Vec<SelectOption>,
    activity_options: Vec<SelectOption>,
    goal_options: Vec<SelectOption>,
}

impl FormLabels {
    fn new(locale: Locale) -> Self {
        let labels = locale.labels();
        Self {
            title: labels.title,
            age: labels.age,
            weight: labels.weight,
            height: labels.height,
            gender: labels.gender,
            activity: labels.activity,
            goal: labels.goal,
            submit: labels.submit,
            results: labels.results,
            water: labels.water,
            water_unit: labels.water_unit,
            calories: labels.calories,
            calories_unit: labels.calories_unit,
            recommendations: labels.recommendations,
            gender_options: [Gender::Male, Gender::Female]
                .into_iter()
                .map(|g| SelectOption {
                    value: g.as_str().to_string(),
                    label: g.label(locale),
                })
                .collect(),
            activity_options: ActivityLevel::ALL
                .into_iter()
                .map(|level| SelectOption {
                    value: level.factor().to_string(),
                    label: level.label(locale),
                })
                .collect(),
            goal_options: Goal::ALL
                .into_iter()
                .map(|goal| SelectOption {
                    value: goal.as_str().to_string(),
                    label: goal.label(locale),
                })
                .collect(),
        }
    }
}

/// Labels and select options for the form, as JSON
#[wasm_bindgen]
pub fn form_labels(locale: &str) -> String {
    let locale = locale.parse::<Locale>().unwrap_or_default();
    to_json(&FormLabels::new(locale))
}

/// Calculate daily calorie and water targets
///
/// An unknown goal leaves `calories` null, matching the browser form.
#[wasm_bindgen]
pub fn compute_metrics(
    age_years: f64,
    weight_kg: f64,
    height_cm: f64,
    is_male: bool,
    activity_factor: f64,
    goal: &str,
) -> String {
    let gender = if is_male { Gender::Male } else { Gender::Female };
    let result = match Goal::from_form_value(goal) {
        Some(goal) => shared::compute_metrics(&UserProfile {
            age: age_years,
            weight: weight_kg,
            height: height_cm,
            gender,
            activity_factor,
            goal,
        }),
        None => CalculationResult {
            calories: None,
            water_ml: shared::metrics::daily_water_ml(weight_kg),
        },
    };
    to_json(&result)
}

/// Calculate from the raw text of the form controls
///
/// `form_json` holds the six fields as strings; missing fields take the
/// form defaults. With `strict` set, bad input is reported instead of
/// producing NaN.
#[wasm_bindgen]
pub fn compute_metrics_from_form(form_json: &str, strict: bool, locale: &str) -> String {
    let locale = locale.parse::<Locale>().unwrap_or_default();
    let form: ProfileForm = match serde_json::from_str(form_json) {
        Ok(form) => form,
        Err(e) => {
            return to_json(&FormResponse::Error {
                message: format!("Invalid form data: {}", e),
                fields: vec![],
            })
        }
    };

    let policy = if strict {
        shared::InputPolicy::Strict
    } else {
        shared::InputPolicy::Permissive
    };

    let response = match form.compute(policy) {
        Ok(result) => FormResponse::Ok {
            result,
            recommendations: shared::recommendations_for_locale(&form.goal, locale)
                .iter()
                .map(|s| s.to_string())
                .collect(),
        },
        Err(e) => FormResponse::Error {
            fields: e.fields(),
            message: e.to_string(),
        },
    };
    to_json(&response)
}

/// Recommendations for a goal in the default locale
#[wasm_bindgen]
pub fn recommendations_for(goal: &str) -> Vec<String> {
    shared::recommendations_for(goal)
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Recommendations for a goal in the given locale (`ru` or `en`)
#[wasm_bindgen]
pub fn recommendations_for_locale(goal: &str, locale: &str) -> Vec<String> {
    let locale = locale.parse::<Locale>().unwrap_or_default();
    shared::recommendations_for_locale(goal, locale)
        .iter()
        .map(|s| s.to_string())
        .collect()
}
