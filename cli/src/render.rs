//! Terminal rendering of calculation results

use std::fmt::Write;

use anyhow::Result;
use calorie_calculator_shared::{format_metric, CalculationResult, Locale, MetricsBreakdown};
use serde::{Deserialize, Serialize};

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Everything one run prints
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    #[serde(flatten)]
    pub result: CalculationResult,
    pub recommendations: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<MetricsBreakdown>,
    #[serde(skip)]
    pub locale: Locale,
}

impl Report {
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Text => Ok(self.render_text()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    /// Localized text block: results, optional breakdown, recommendations
    pub fn render_text(&self) -> String {
        let labels = self.locale.labels();
        let mut out = String::new();

        // Writing into a String cannot fail
        let _ = writeln!(out, "{}", labels.results);
        let _ = writeln!(
            out,
            "{}: {} {}",
            labels.water,
            format_metric(self.result.water_ml),
            labels.water_unit
        );
        let _ = writeln!(
            out,
            "{}: {} {}",
            labels.calories,
            format_metric(self.result.calories),
            labels.calories_unit
        );

        if let Some(breakdown) = &self.breakdown {
            let _ = writeln!(out);
            let _ = writeln!(out, "BMR: {:.2}", breakdown.bmr);
            let _ = writeln!(
                out,
                "TDEE: {:.2} (x{})",
                breakdown.tdee, breakdown.activity_factor
            );
            let _ = writeln!(
                out,
                "{}: {:.2} (x{})",
                labels.goal, breakdown.calorie_target, breakdown.goal_multiplier
            );
        }

        let _ = writeln!(out);
        let _ = writeln!(out, "{}", labels.recommendations);
        for item in &self.recommendations {
            let _ = writeln!(out, "- {}", item);
        }
        out
    }
}
