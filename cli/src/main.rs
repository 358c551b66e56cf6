//! Calorie Calculator CLI
//!
//! Usage:
//! ```bash
//! # Defaults from the form: 25y, 70kg, 175cm, male, sedentary, maintain
//! calorie-calculator
//!
//! # Explicit profile, English output with intermediate values
//! calorie-calculator --age 30 --weight 60 --height 165 --gender female \
//!     --activity moderate --goal lose --locale en --breakdown
//!
//! # Browser-compatible coercion, JSON output
//! calorie-calculator --weight abc --permissive --format json
//! ```

use anyhow::Result;
use calorie_calculator_cli::{config::AppConfig, run, Cli};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load(cli.config.as_deref())?;

    init_tracing(&config, cli.verbose);

    tracing::debug!(
        version = env!("CARGO_PKG_VERSION"),
        env = if AppConfig::is_production() { "production" } else { "development" },
        "Starting calorie calculator"
    );

    let output = run(&cli, &config)?;
    print!("{}", output);
    Ok(())
}

/// Initialize tracing/logging
///
/// Logs go to stderr so stdout carries only the report.
fn init_tracing(config: &AppConfig, verbose: bool) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            "calorie_calculator_cli=debug,calorie_calculator_shared=debug".into()
        } else {
            config.logging.filter.as_str().into()
        }
    });

    let subscriber = tracing_subscriber::registry().with(env_filter);

    if config.logging.json || AppConfig::is_production() {
        // JSON logging for production (better for log aggregation)
        subscriber
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}
