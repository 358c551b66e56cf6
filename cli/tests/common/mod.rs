//! Common test utilities for CLI integration tests

#![allow(dead_code)]

use calorie_calculator_cli::{config::AppConfig, run, Cli};
use clap::Parser;

/// Parse arguments the way the binary does, program name included
pub fn cli(args: &[&str]) -> Cli {
    let mut argv = vec!["calorie-calculator"];
    argv.extend_from_slice(args);
    Cli::parse_from(argv)
}

/// Run with default configuration and return the rendered output
pub fn run_with_defaults(args: &[&str]) -> anyhow::Result<String> {
    run(&cli(args), &AppConfig::default())
}

/// Run with JSON output and parse it
pub fn run_json(args: &[&str]) -> serde_json::Value {
    let mut args = args.to_vec();
    args.extend_from_slice(&["--format", "json"]);
    let output = run_with_defaults(&args).expect("run should succeed");
    serde_json::from_str(&output).expect("output should be JSON")
}
