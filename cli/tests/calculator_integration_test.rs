//! Integration tests for the calculator CLI

mod common;

use calorie_calculator_cli::{config::AppConfig, run};
use calorie_calculator_shared::{CalculatorError, InputPolicy, Locale};
use rstest::rstest;

#[test]
fn test_defaults_give_reference_targets() {
    let value = common::run_json(&[]);
    assert_eq!(value["calories"], 2009);
    assert_eq!(value["water"], 2450);
    assert_eq!(value["recommendations"].as_array().unwrap().len(), 3);
}

#[rstest]
#[case("lose", 1707)]
#[case("maintain", 2009)]
#[case("gain", 2310)]
fn test_goal_changes_calories(#[case] goal: &str, #[case] calories: i64) {
    let value = common::run_json(&["--goal", goal]);
    assert_eq!(value["calories"], calories);
    assert_eq!(value["water"], 2450);
}

#[test]
fn test_female_reference_profile() {
    let value = common::run_json(&[
        "--age", "30", "--weight", "60", "--height", "165", "--gender", "female", "--activity",
        "1.55",
    ]);
    assert_eq!(value["calories"], 2046);
    assert_eq!(value["water"], 2100);
}

#[test]
fn test_text_output_is_localized() {
    let ru = common::run_with_defaults(&[]).unwrap();
    assert!(ru.starts_with("Результаты\n"));
    assert!(ru.contains("Калории: 2009 ккал/день"));

    let en = common::run_with_defaults(&["--locale", "en"]).unwrap();
    assert!(en.contains("Water: 2450 ml/day"));
    assert!(en.contains("- Eat a balanced diet"));
}

#[test]
fn test_breakdown_flag() {
    let value = common::run_json(&["--breakdown"]);
    assert_eq!(value["breakdown"]["bmr"], 1673.75);
    assert_eq!(value["breakdown"]["goalMultiplier"], 1.0);

    let text = common::run_with_defaults(&["--breakdown", "--locale", "en"]).unwrap();
    assert!(text.contains("BMR: 1673.75"));
    assert!(text.contains("TDEE: 2008.50 (x1.2)"));
}

#[test]
fn test_strict_rejects_bad_input() {
    let err = common::run_with_defaults(&["--weight", "abc", "--goal", "bulk"]).unwrap_err();
    let err = err.downcast::<CalculatorError>().unwrap();
    assert_eq!(err.fields(), vec!["weight", "goal"]);
}

#[test]
fn test_strict_reports_range_and_parse_errors_together() {
    let err = common::run_with_defaults(&["--age", "5", "--weight", "0x46", "--goal", "bulk"]).unwrap_err();
    let err = err.downcast::<CalculatorError>().unwrap();
    assert_eq!(err.fields(), vec!["age", "weight", "goal"]);
}

#[test]
fn test_strict_rejects_out_of_range_age() {
    let err = common::run_with_defaults(&["--age", "-5"]).unwrap_err();
    assert!(err.to_string().contains("age"));
}

#[test]
fn test_permissive_passes_nan_through() {
    let value = common::run_json(&["--weight", "abc", "--permissive"]);
    assert!(value["calories"].is_null());
    assert!(value["water"].is_null());

    let text = common::run_with_defaults(&["--goal", "bulk", "--permissive", "--locale", "en"]).unwrap();
    assert!(text.contains("Calories: NaN kcal/day"));
    assert!(text.contains("Water: 2450 ml/day"));
    assert!(!text.contains("- "));
}

#[test]
fn test_config_supplies_defaults() {
    let mut config = AppConfig::default();
    config.profile.goal = "gain".to_string();
    config.calculator.locale = Locale::En;
    config.calculator.policy = InputPolicy::Permissive;

    let output = run(&common::cli(&["--weight", "heavy"]), &config).unwrap();
    assert!(output.contains("Water: NaN ml/day"));
    assert!(output.contains("- Strength training 4-5 times a week"));

    // Command line flags win over config
    let output = run(&common::cli(&["--goal", "lose", "--locale", "ru"]), &config).unwrap();
    assert!(output.contains("Калории: 1707 ккал/день"));
}
