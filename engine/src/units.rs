//! Unit conversion and normalization module
//!
//! Every formula in the engine operates on canonical metric values
//! (kilograms, centimeters). The imperial path exists only at the
//! boundary: inputs are normalized here before any formula runs, and
//! converted back only for display.
//!
//! Conversion factors: 1 lb = 0.45359237 kg, 1 inch = 2.54 cm.

use crate::errors::{CalculatorError, EngineResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kilograms per pound
pub const KG_PER_LB: f64 = 0.45359237;

/// Centimeters per inch
pub const CM_PER_INCH: f64 = 2.54;

/// Unit system selected on the input form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

impl UnitSystem {
    /// Normalize a weight input to kilograms
    ///
    /// Rejects non-positive and non-finite values; a weight of zero or
    /// below is never a valid measurement in this domain.
    pub fn weight_to_kg(&self, value: f64, field: &str) -> EngineResult<f64> {
        check_measurement(value, field)?;
        Ok(match self {
            UnitSystem::Metric => value,
            UnitSystem::Imperial => value * KG_PER_LB,
        })
    }

    /// Normalize a height/length input to centimeters
    pub fn length_to_cm(&self, value: f64, field: &str) -> EngineResult<f64> {
        check_measurement(value, field)?;
        Ok(match self {
            UnitSystem::Metric => value,
            UnitSystem::Imperial => value * CM_PER_INCH,
        })
    }

    /// Convert a canonical kg value back to this system's display unit
    pub fn weight_from_kg(&self, kg: f64) -> f64 {
        match self {
            UnitSystem::Metric => kg,
            UnitSystem::Imperial => kg / KG_PER_LB,
        }
    }

    /// Convert a canonical cm value back to this system's display unit
    pub fn length_from_cm(&self, cm: f64) -> f64 {
        match self {
            UnitSystem::Metric => cm,
            UnitSystem::Imperial => cm / CM_PER_INCH,
        }
    }

    /// Display unit for weights in this system
    pub fn weight_unit(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "kg",
            UnitSystem::Imperial => "lbs",
        }
    }

    /// Display unit for heights in this system
    pub fn length_unit(&self) -> &'static str {
        match self {
            UnitSystem::Metric => "cm",
            UnitSystem::Imperial => "in",
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnitSystem::Metric => write!(f, "metric"),
            UnitSystem::Imperial => write!(f, "imperial"),
        }
    }
}

impl std::str::FromStr for UnitSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "metric" | "si" => Ok(UnitSystem::Metric),
            "imperial" | "us" => Ok(UnitSystem::Imperial),
            _ => Err(format!("Unknown unit system: {}", s)),
        }
    }
}

/// Reject non-positive or non-finite physical measurements
fn check_measurement(value: f64, field: &str) -> EngineResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalculatorError::InvalidMeasurement {
            field: field.to_string(),
            value,
        });
    }
    Ok(())
}
