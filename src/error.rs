//! Error types for fitcalc
//!
//! Calculations never fail: bad inputs surface as non-finite numbers. These
//! types cover the surrounding layers (precondition checks and report
//! serialization) and integrate with the tracing system.

use thiserror::Error;

/// Top-level error type for all fitcalc operations
#[derive(Debug, Error)]
pub enum FitCalcError {
    /// Calculation precondition errors
    #[error("Calculation error: {0}")]
    Calculation(#[from] CalculationError),

    /// Report serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Calculation precondition violations
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalculationError {
    /// A divisor in the formula is zero
    #[error("Division by zero in {calculation}: {parameter} is zero")]
    DivisionByZero {
        calculation: String,
        parameter: String,
    },

    /// Invalid parameter
    #[error("Invalid parameter for {calculation}: {parameter}={value}")]
    InvalidParameter {
        calculation: String,
        parameter: String,
        value: String,
    },
}

/// Result type alias for fitcalc operations
pub type Result<T> = std::result::Result<T, FitCalcError>;

impl FitCalcError {
    /// Get error severity level
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FitCalcError::Calculation(_) => ErrorSeverity::Warning,
            FitCalcError::Serialization(_) => ErrorSeverity::Error,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// Error that prevents the operation
    Error,
    /// Warning that doesn't prevent operation
    Warning,
}

impl ErrorSeverity {
    /// Convert to tracing level
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            ErrorSeverity::Error => tracing::Level::ERROR,
            ErrorSeverity::Warning => tracing::Level::WARN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_severity() {
        let err = FitCalcError::Calculation(CalculationError::DivisionByZero {
            calculation: "mean speed".to_string(),
            parameter: "duration".to_string(),
        });
        assert_eq!(err.severity(), ErrorSeverity::Warning);
        assert_eq!(err.severity().to_tracing_level(), tracing::Level::WARN);

        let err: FitCalcError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert_eq!(err.severity(), ErrorSeverity::Error);
    }

    #[test]
    fn test_error_messages() {
        let err = CalculationError::InvalidParameter {
            calculation: "walking calories".to_string(),
            parameter: "height".to_string(),
            value: "0".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Invalid parameter for walking calories: height=0"
        );
    }
}
