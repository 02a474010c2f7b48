//! History records
//!
//! The engine produces the serializable record of a calculation; the
//! surrounding service owns storage. A record belongs to either an
//! authenticated user or an anonymous session, never both. Anonymous
//! and authenticated history are never merged.

use crate::result::CalculatorResult;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use uuid::Uuid;

/// The calculator that produced a record, slug-stable for storage and URLs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalculatorType {
    Bmr,
    Tdee,
    Protein,
    BodyFat,
    Bmi,
    OneRepMax,
    Macros,
    IdealWeight,
    CalorieDeficit,
    LeanBodyMass,
    TrainingVolume,
}

impl CalculatorType {
    /// Storage/URL slug for this calculator
    pub fn as_str(&self) -> &'static str {
        match self {
            CalculatorType::Bmr => "bmr",
            CalculatorType::Tdee => "tdee",
            CalculatorType::Protein => "protein",
            CalculatorType::BodyFat => "body-fat",
            CalculatorType::Bmi => "bmi",
            CalculatorType::OneRepMax => "one-rep-max",
            CalculatorType::Macros => "macros",
            CalculatorType::IdealWeight => "ideal-weight",
            CalculatorType::CalorieDeficit => "calorie-deficit",
            CalculatorType::LeanBodyMass => "lean-body-mass",
            CalculatorType::TrainingVolume => "training-volume",
        }
    }

    /// All known calculators
    pub fn all() -> &'static [CalculatorType] {
        &[
            CalculatorType::Bmr,
            CalculatorType::Tdee,
            CalculatorType::Protein,
            CalculatorType::BodyFat,
            CalculatorType::Bmi,
            CalculatorType::OneRepMax,
            CalculatorType::Macros,
            CalculatorType::IdealWeight,
            CalculatorType::CalorieDeficit,
            CalculatorType::LeanBodyMass,
            CalculatorType::TrainingVolume,
        ]
    }
}

impl fmt::Display for CalculatorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for CalculatorType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CalculatorType::all()
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| format!("Unknown calculator type: {}", s))
    }
}

/// A completed calculation ready for persistence
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalculatorResultRecord {
    pub calculator_type: CalculatorType,
    /// Authenticated owner, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<Uuid>,
    /// Anonymous session owner, if no authenticated user
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    /// Raw input values as submitted
    pub inputs: Value,
    /// Shaped result
    pub results: CalculatorResult,
    pub created_at: DateTime<Utc>,
}

impl CalculatorResultRecord {
    /// Create an unowned record; attach identity with `for_user` or `for_session`
    pub fn new(calculator_type: CalculatorType, inputs: Value, results: CalculatorResult) -> Self {
        Self {
            calculator_type,
            user_id: None,
            session_id: None,
            inputs,
            results,
            created_at: Utc::now(),
        }
    }

    /// Assign the record to an authenticated user
    pub fn for_user(mut self, user_id: Uuid) -> Self {
        self.user_id = Some(user_id);
        self.session_id = None;
        self
    }

    /// Assign the record to an anonymous session
    pub fn for_session(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self.user_id = None;
        self
    }
}
