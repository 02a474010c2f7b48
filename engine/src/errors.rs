//! Error types for the calculator engine
//!
//! The engine raises exactly two kinds of error, both recoverable by
//! re-prompting the user: a field-identified validation failure, and an
//! invalid physical measurement caught during unit normalization.
//! Persistence failures are a caller concern and never appear here.

use thiserror::Error;

/// Calculator engine error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CalculatorError {
    /// Bad, missing, or out-of-range input, identified by field name
    #[error("{field}: {message}")]
    Validation { field: String, message: String },

    /// Non-positive or non-finite physical measurement
    #[error("{field}: {value} is not a valid measurement")]
    InvalidMeasurement { field: String, value: f64 },
}

impl CalculatorError {
    /// Build a validation error for a named input field
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }

    /// The offending field name, for form highlighting
    pub fn field(&self) -> &str {
        match self {
            Self::Validation { field, .. } => field,
            Self::InvalidMeasurement { field, .. } => field,
        }
    }
}

/// Result type alias used throughout the engine
pub type EngineResult<T> = Result<T, CalculatorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_carries_field() {
        let err = CalculatorError::validation("reps", "must be between 1 and 30");
        assert_eq!(err.field(), "reps");
        assert_eq!(err.to_string(), "reps: must be between 1 and 30");
    }

    #[test]
    fn test_invalid_measurement_display() {
        let err = CalculatorError::InvalidMeasurement {
            field: "weight".to_string(),
            value: -5.0,
        };
        assert_eq!(err.field(), "weight");
        assert!(err.to_string().contains("weight"));
        assert!(err.to_string().contains("-5"));
    }
}
