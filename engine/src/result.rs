//! Result shaping
//!
//! Every calculator produces the same canonical shape: a primary value
//! with a display unit, an optional category label, optional secondary
//! breakdown lines, and optional guidance strings. Results are built
//! once and never mutated afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A secondary figure shown under the primary result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownLine {
    pub label: String,
    pub value: BreakdownValue,
}

/// Breakdown values are either numeric or preformatted text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum BreakdownValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for BreakdownValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BreakdownValue::Number(n) => write!(f, "{}", n),
            BreakdownValue::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<f64> for BreakdownValue {
    fn from(n: f64) -> Self {
        BreakdownValue::Number(n)
    }
}

impl From<u32> for BreakdownValue {
    fn from(n: u32) -> Self {
        BreakdownValue::Number(n as f64)
    }
}

impl From<String> for BreakdownValue {
    fn from(s: String) -> Self {
        BreakdownValue::Text(s)
    }
}

impl From<&str> for BreakdownValue {
    fn from(s: &str) -> Self {
        BreakdownValue::Text(s.to_string())
    }
}

/// Canonical calculator output
///
/// Serializes to the wire shape consumed by forms and persisted in
/// history records: `value`, `unit`, optional `category`, `breakdown`,
/// and `recommendations`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalculatorResult {
    /// Primary computed result (always finite and non-negative)
    pub value: f64,
    /// Display unit for `value`, e.g. "kcal/day" or "lbs"
    pub unit: String,
    /// Classification label when the calculator defines ranges
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Secondary derived figures
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub breakdown: Vec<BreakdownLine>,
    /// Human-readable guidance strings
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub recommendations: Vec<String>,
}

impl CalculatorResult {
    /// Start a result from the primary value and its display unit
    pub fn new(value: f64, unit: impl Into<String>) -> Self {
        debug_assert!(value.is_finite() && value >= 0.0);
        Self {
            value,
            unit: unit.into(),
            category: None,
            breakdown: Vec::new(),
            recommendations: Vec::new(),
        }
    }

    /// Attach a category label
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Append a breakdown line
    pub fn with_line(mut self, label: impl Into<String>, value: impl Into<BreakdownValue>) -> Self {
        self.breakdown.push(BreakdownLine {
            label: label.into(),
            value: value.into(),
        });
        self
    }

    /// Append a recommendation string
    pub fn with_recommendation(mut self, text: impl Into<String>) -> Self {
        self.recommendations.push(text.into());
        self
    }

    /// Append several recommendation strings
    pub fn with_recommendations<I, S>(mut self, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.recommendations.extend(texts.into_iter().map(Into::into));
        self
    }
}

/// Round to one decimal place for display values
pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to two decimal places for display values
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_serialization_shape() {
        let result = CalculatorResult::new(22.9, "BMI")
            .with_category("Normal weight")
            .with_line("Weight", "70.0 kg")
            .with_line("Height", 175.0)
            .with_recommendation("You're in the healthy weight range");

        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["value"], 22.9);
        assert_eq!(json["unit"], "BMI");
        assert_eq!(json["category"], "Normal weight");
        assert_eq!(json["breakdown"][0]["label"], "Weight");
        assert_eq!(json["breakdown"][0]["value"], "70.0 kg");
        assert_eq!(json["breakdown"][1]["value"], 175.0);
        assert_eq!(json["recommendations"][0], "You're in the healthy weight range");
    }

    #[test]
    fn test_empty_optionals_omitted() {
        let result = CalculatorResult::new(100.0, "kg");
        let json = serde_json::to_value(&result).unwrap();
        assert!(json.get("category").is_none());
        assert!(json.get("breakdown").is_none());
        assert!(json.get("recommendations").is_none());
    }

    #[test]
    fn test_roundtrip() {
        let result = CalculatorResult::new(1805.0, "kcal/day").with_line("Age", 30u32);
        let json = serde_json::to_string(&result).unwrap();
        let back: CalculatorResult = serde_json::from_str(&json).unwrap();
        assert_eq!(result, back);
    }

    #[test]
    fn test_rounding_helpers() {
        assert_eq!(round1(22.857), 22.9);
        assert_eq!(round2(233.3333), 233.33);
    }
}
