//! Cross-calculator data bridge
//!
//! The output of one calculator prefills the input of another: a TDEE
//! result feeds the macros form, a computed protein target feeds the
//! macro split, and shared measurements (weight, height, unit system)
//! carry across forms. The engine does not own the storage; the caller
//! passes the last known values in and gets a merged view back.
//!
//! Precedence: values present as URL query parameters override stored
//! values, so shareable deep links beat local history. Everything works
//! with no prior data at all.

use crate::tables::{ActivityLevel, Goal, Sex};
use crate::units::UnitSystem;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Shared fields carried between calculator forms
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sex: Option<Sex>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<UnitSystem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activity_level: Option<ActivityLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal: Option<Goal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body_fat: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reps: Option<u32>,
    /// Computed BMR, carried into the TDEE form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bmr: Option<f64>,
    /// Computed TDEE, carried into the macros and deficit forms
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tdee: Option<f64>,
    /// Computed protein target in grams, carried into the macros form
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
}

impl CalculatorData {
    /// Merge newer values over this set; absent fields keep their value
    ///
    /// Mirrors the overwrite-on-present semantics of the stored blob the
    /// browser keeps: submitting a form updates only the fields that
    /// form collected.
    pub fn merge(&self, newer: &CalculatorData) -> CalculatorData {
        CalculatorData {
            sex: newer.sex.or(self.sex),
            age: newer.age.or(self.age),
            weight: newer.weight.or(self.weight),
            height: newer.height.or(self.height),
            unit: newer.unit.or(self.unit),
            activity_level: newer.activity_level.or(self.activity_level),
            goal: newer.goal.or(self.goal),
            body_fat: newer.body_fat.or(self.body_fat),
            reps: newer.reps.or(self.reps),
            bmr: newer.bmr.or(self.bmr),
            tdee: newer.tdee.or(self.tdee),
            protein: newer.protein.or(self.protein),
        }
    }

    /// True if no field is set
    pub fn is_empty(&self) -> bool {
        *self == CalculatorData::default()
    }

    /// Parse URL query parameters into shared fields
    ///
    /// Unknown keys and unparseable values are skipped, never errors: a
    /// malformed deep link degrades to the stored values.
    pub fn from_query_params(params: &HashMap<String, String>) -> CalculatorData {
        let num = |key: &str| params.get(key).and_then(|v| v.parse::<f64>().ok());
        let int = |key: &str| params.get(key).and_then(|v| v.parse::<u32>().ok());

        CalculatorData {
            sex: params.get("sex").and_then(|v| v.parse().ok()),
            age: int("age"),
            weight: num("weight"),
            height: num("height"),
            unit: params.get("unit").and_then(|v| v.parse().ok()),
            activity_level: params.get("activity_level").and_then(|v| v.parse().ok()),
            goal: params.get("goal").and_then(|v| v.parse().ok()),
            body_fat: num("body_fat"),
            reps: int("reps"),
            bmr: num("bmr"),
            tdee: num("tdee"),
            protein: num("protein"),
        }
    }
}

/// Resolve the values a form should prefill with
///
/// URL parameters win over stored data, field by field.
pub fn resolve_prefill(
    url_params: &HashMap<String, String>,
    stored: &CalculatorData,
) -> CalculatorData {
    stored.merge(&CalculatorData::from_query_params(url_params))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_merge_newer_wins_absent_preserved() {
        let stored = CalculatorData {
            weight: Some(80.0),
            height: Some(180.0),
            tdee: Some(2800.0),
            ..Default::default()
        };
        let newer = CalculatorData {
            weight: Some(78.5),
            goal: Some(Goal::FatLoss),
            ..Default::default()
        };

        let merged = stored.merge(&newer);
        assert_eq!(merged.weight, Some(78.5));
        assert_eq!(merged.height, Some(180.0));
        assert_eq!(merged.tdee, Some(2800.0));
        assert_eq!(merged.goal, Some(Goal::FatLoss));
    }

    #[test]
    fn test_url_params_override_stored() {
        let stored = CalculatorData {
            weight: Some(80.0),
            tdee: Some(2800.0),
            ..Default::default()
        };
        let url = params(&[("weight", "75"), ("goal", "muscle-gain")]);

        let prefill = resolve_prefill(&url, &stored);
        assert_eq!(prefill.weight, Some(75.0));
        assert_eq!(prefill.tdee, Some(2800.0));
        assert_eq!(prefill.goal, Some(Goal::MuscleGain));
    }

    #[test]
    fn test_malformed_url_value_falls_back_to_stored() {
        let stored = CalculatorData {
            weight: Some(80.0),
            ..Default::default()
        };
        let url = params(&[("weight", "heavy")]);

        let prefill = resolve_prefill(&url, &stored);
        assert_eq!(prefill.weight, Some(80.0));
    }

    #[test]
    fn test_empty_everything_is_fine() {
        let prefill = resolve_prefill(&HashMap::new(), &CalculatorData::default());
        assert!(prefill.is_empty());
    }

    #[test]
    fn test_typed_query_parsing() {
        let url = params(&[
            ("sex", "female"),
            ("age", "29"),
            ("unit", "imperial"),
            ("activity_level", "moderate"),
            ("reps", "5"),
        ]);
        let data = CalculatorData::from_query_params(&url);
        assert_eq!(data.sex, Some(Sex::Female));
        assert_eq!(data.age, Some(29));
        assert_eq!(data.unit, Some(UnitSystem::Imperial));
        assert_eq!(data.activity_level, Some(ActivityLevel::Moderate));
        assert_eq!(data.reps, Some(5));
    }

    #[test]
    fn test_serde_omits_unset_fields() {
        let data = CalculatorData {
            tdee: Some(2797.75),
            ..Default::default()
        };
        let json = serde_json::to_value(&data).unwrap();
        assert_eq!(json, serde_json::json!({"tdee": 2797.75}));
    }
}
