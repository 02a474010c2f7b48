//! Calculator dispatch service
//!
//! Thin wrapper over the engine's JSON dispatch that maps engine
//! validation failures into API errors. Inputs stay as JSON at the API
//! boundary so a single endpoint can serve every calculator.

use crate::error::ApiError;
use fittools_engine::{calculators, CalculatorResult, CalculatorType};
use serde_json::Value;

/// Calculator dispatch service
pub struct CalculatorService;

impl CalculatorService {
    /// Compute a result for the given calculator type from JSON inputs
    pub fn compute(
        calculator_type: CalculatorType,
        inputs: &Value,
    ) -> Result<CalculatorResult, ApiError> {
        Ok(calculators::compute(calculator_type, inputs)?)
    }
}
