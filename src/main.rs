use anyhow::{Context, Result};
use clap::Parser;
use colored::*;
use std::path::PathBuf;
use tracing::{info, warn};

use fitcalc::calculator::WorkoutCalculator;
use fitcalc::config::AppConfig;
use fitcalc::logging::{init_logging, LogLevel};
use fitcalc::report::{render_all, OutputFormat};
use fitcalc::samples::sample_workouts;

/// fitcalc - Workout metrics calculator
///
/// Computes distance, mean speed and calories for the built-in sample
/// swimming, walking and running workouts and prints a summary of each.
#[derive(Parser)]
#[command(name = "fitcalc")]
#[command(version = "0.1.0")]
#[command(about = "Workout metrics calculator", long_about = None)]
struct Cli {
    /// Sets a custom config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Increase verbosity of log output (stderr)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Output format (text, json)
    #[arg(short = 'f', long)]
    format: Option<OutputFormat>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load_from_file(path)?,
        None => AppConfig::load_or_default(),
    };

    if cli.verbose > 0 {
        config.logging.level = LogLevel::from_verbosity(cli.verbose);
        eprintln!(
            "{}",
            format!("Log level: {}", config.logging.level.to_filter()).dimmed()
        );
    }

    init_logging(&config.logging).context("Failed to initialize logging")?;

    let format = cli.format.unwrap_or(config.output.format);
    let workouts = sample_workouts();

    for workout in &workouts {
        if let Err(e) = workout.check_preconditions() {
            warn!(kind = ?workout.kind(), error = %e, "Workout violates calculation preconditions");
        }
    }

    let reports = WorkoutCalculator::summarize_all(&workouts);
    for report in &reports {
        info!(training_type = %report.training_type, "Rendering workout summary");
    }

    let output = render_all(&reports, format).context("Failed to render reports")?;
    print!("{}", output);

    Ok(())
}
