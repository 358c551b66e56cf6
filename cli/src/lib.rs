//! Calorie Calculator CLI Library
//!
//! This library exposes the command line shell's modules for use in tests:
//! argument parsing, configuration, and rendering around the shared
//! calculation core.

pub mod config;
pub mod render;

use std::path::PathBuf;

use anyhow::Result;
use calorie_calculator_shared::{CalculatorForm, FormField, InputPolicy, Locale};
use clap::Parser;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::render::{OutputFormat, Report};

/// Command line arguments
#[derive(Parser, Debug, Default)]
#[command(
    name = "calorie-calculator",
    version,
    about = "Daily calorie and water targets from basic body metrics",
    long_about = "Computes a daily calorie target (Mifflin-St Jeor BMR x activity x goal) and a daily water target, then prints goal recommendations."
)]
pub struct Cli {
    /// Age in years (10-100)
    #[arg(long, allow_hyphen_values = true)]
    pub age: Option<String>,

    /// Weight in kilograms (30-300)
    #[arg(long, allow_hyphen_values = true)]
    pub weight: Option<String>,

    /// Height in centimeters (100-250)
    #[arg(long, allow_hyphen_values = true)]
    pub height: Option<String>,

    /// male or female
    #[arg(long)]
    pub gender: Option<String>,

    /// Activity factor (1.2, 1.375, 1.55, 1.725, 1.9) or level name
    #[arg(long)]
    pub activity: Option<String>,

    /// lose, maintain or gain
    #[arg(long)]
    pub goal: Option<String>,

    /// Coerce input like the browser form instead of rejecting it
    #[arg(long)]
    pub permissive: bool,

    /// Output language (ru, en)
    #[arg(long)]
    pub locale: Option<Locale>,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print BMR and TDEE intermediate values
    #[arg(long)]
    pub breakdown: bool,

    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    pub verbose: bool,
}

impl Cli {
    fn field_overrides(&self) -> [(FormField, Option<&String>); 6] {
        [
            (FormField::Age, self.age.as_ref()),
            (FormField::Weight, self.weight.as_ref()),
            (FormField::Height, self.height.as_ref()),
            (FormField::Gender, self.gender.as_ref()),
            (FormField::Activity, self.activity.as_ref()),
            (FormField::Goal, self.goal.as_ref()),
        ]
    }
}

/// Run one calculation and return the rendered output
pub fn run(cli: &Cli, config: &AppConfig) -> Result<String> {
    let policy = if cli.permissive {
        InputPolicy::Permissive
    } else {
        config.calculator.policy
    };
    let locale = cli.locale.unwrap_or(config.calculator.locale);
    let format = cli.format.unwrap_or(config.calculator.format);

    let mut calculator = CalculatorForm::new(policy, locale).with_form(config.profile.clone());
    for (field, value) in cli.field_overrides() {
        if let Some(value) = value {
            calculator.set_field(field, value.as_str());
        }
    }
    debug!(
        form = ?calculator.form(),
        policy = ?calculator.policy(),
        locale = %calculator.locale(),
        "Form assembled"
    );

    let result = calculator.submit()?;
    if !result.is_complete() {
        warn!("Input produced a non-numeric target");
    }
    info!(
        calories = ?result.calories,
        water_ml = ?result.water_ml,
        goal = %calculator.form().goal,
        "Targets calculated"
    );

    let breakdown = if cli.breakdown || config.calculator.show_breakdown {
        calculator.breakdown()
    } else {
        None
    };

    let report = Report {
        result,
        recommendations: calculator
            .recommendations()
            .iter()
            .map(|s| s.to_string())
            .collect(),
        breakdown,
        locale: calculator.locale(),
    };
    report.render(format)
}
