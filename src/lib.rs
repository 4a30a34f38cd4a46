// Library interface for fitcalc modules
// This allows integration tests to access the core functionality

pub mod calculator;
pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod report;
pub mod samples;

// Re-export commonly used types for convenience
pub use calculator::{CaloriesCalculator, WorkoutCalculator};
pub use config::AppConfig;
pub use error::{CalculationError, FitCalcError, Result};
pub use logging::{LogConfig, LogFormat, LogLevel};
pub use models::*;
pub use report::{render, render_all, render_json, OutputFormat};
