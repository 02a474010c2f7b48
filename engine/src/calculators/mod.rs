//! Formula set
//!
//! One pure function per calculator. Each takes a typed input struct,
//! validates it (rejecting rather than clamping bad values), computes on
//! canonical metric units, and shapes the outcome into a
//! [`CalculatorResult`](crate::result::CalculatorResult).

mod body;
mod energy;
mod strength;

pub use body::{
    calculate_bmi, calculate_body_fat, calculate_ideal_weight, calculate_lean_body_mass,
    BmiCategory, BmiInput, BodyFatCategory, BodyFatInput, IdealWeightInput, LeanBodyMassInput,
};
pub use energy::{
    calculate_bmr, calculate_calorie_deficit, calculate_macros, calculate_protein, calculate_tdee,
    BmrInput, CalorieDeficitInput, MacrosInput, ProteinInput, TdeeInput,
};
pub use strength::{
    calculate_one_rep_max, calculate_training_volume, LoggedSet, OneRepMaxInput,
    TrainingVolumeInput,
};

use crate::errors::{CalculatorError, EngineResult};
use crate::record::CalculatorType;
use crate::result::CalculatorResult;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Run a calculator from untyped JSON inputs
///
/// This is the single dispatch point shared by the HTTP API and the
/// WASM bindings. Payloads that do not match the calculator's input
/// shape are rejected as validation errors on the `inputs` field.
pub fn compute(calculator_type: CalculatorType, inputs: &Value) -> EngineResult<CalculatorResult> {
    match calculator_type {
        CalculatorType::Bmr => calculate_bmr(&parse(inputs)?),
        CalculatorType::Tdee => calculate_tdee(&parse(inputs)?),
        CalculatorType::Protein => calculate_protein(&parse(inputs)?),
        CalculatorType::Macros => calculate_macros(&parse(inputs)?),
        CalculatorType::CalorieDeficit => calculate_calorie_deficit(&parse(inputs)?),
        CalculatorType::Bmi => calculate_bmi(&parse(inputs)?),
        CalculatorType::BodyFat => calculate_body_fat(&parse(inputs)?),
        CalculatorType::LeanBodyMass => calculate_lean_body_mass(&parse(inputs)?),
        CalculatorType::IdealWeight => calculate_ideal_weight(&parse(inputs)?),
        CalculatorType::OneRepMax => calculate_one_rep_max(&parse(inputs)?),
        CalculatorType::TrainingVolume => calculate_training_volume(&parse(inputs)?),
    }
}

fn parse<T: DeserializeOwned>(inputs: &Value) -> EngineResult<T> {
    serde_json::from_value(inputs.clone())
        .map_err(|e| CalculatorError::validation("inputs", e.to_string()))
}
