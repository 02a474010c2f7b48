//! FitTools WASM Module
//!
//! WebAssembly bindings so the calculators run in the browser without a
//! round trip. Every binding is JSON-in/JSON-out: inputs arrive as a
//! JSON string matching the calculator's input shape and results come
//! back as the canonical result shape. Validation failures surface as
//! JavaScript exceptions.
//!
//! The string-based cores are separate from the #[wasm_bindgen]
//! wrappers so they stay testable on the host target, where JsValue
//! cannot be constructed.

use fittools_engine::calculators;
use fittools_engine::prefill::CalculatorData;
use fittools_engine::record::CalculatorType;
use wasm_bindgen::prelude::*;

/// Run a calculator by its slug (e.g. "bmi", "one-rep-max")
#[wasm_bindgen]
pub fn run_calculator(calculator_type: &str, inputs_json: &str) -> Result<String, JsValue> {
    run_calculator_impl(calculator_type, inputs_json).map_err(|e| JsValue::from_str(&e))
}

/// All known calculator slugs
#[wasm_bindgen]
pub fn calculator_types() -> Vec<String> {
    CalculatorType::all()
        .iter()
        .map(|t| t.as_str().to_string())
        .collect()
}

/// Merge stored prefill data with newer values
///
/// Both arguments are JSON objects of previously entered fields; values
/// in `newer_json` win. Returns the merged object for storage.
#[wasm_bindgen]
pub fn merge_calculator_data(stored_json: &str, newer_json: &str) -> Result<String, JsValue> {
    merge_calculator_data_impl(stored_json, newer_json).map_err(|e| JsValue::from_str(&e))
}

fn run_calculator_impl(calculator_type: &str, inputs_json: &str) -> Result<String, String> {
    let calculator_type: CalculatorType = calculator_type.parse()?;
    let inputs = serde_json::from_str(inputs_json)
        .map_err(|e| format!("Invalid JSON inputs: {}", e))?;

    let result = calculators::compute(calculator_type, &inputs).map_err(|e| e.to_string())?;

    serde_json::to_string(&result).map_err(|e| e.to_string())
}

fn merge_calculator_data_impl(stored_json: &str, newer_json: &str) -> Result<String, String> {
    let stored: CalculatorData =
        serde_json::from_str(stored_json).map_err(|e| format!("Invalid stored data: {}", e))?;
    let newer: CalculatorData =
        serde_json::from_str(newer_json).map_err(|e| format!("Invalid new data: {}", e))?;

    serde_json::to_string(&stored.merge(&newer)).map_err(|e| e.to_string())
}
