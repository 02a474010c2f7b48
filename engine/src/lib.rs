//! FitTools Calculator Engine
//!
//! Pure computation core for the fitness calculators: energy (BMR, TDEE,
//! protein, macros, calorie deficit), body composition (BMI, body fat,
//! lean body mass, ideal weight) and strength (one-rep max, training
//! volume), plus the unit conversion, prefill and history record types
//! shared by the backend and WASM modules.

pub mod calculators;
pub mod errors;
pub mod prefill;
pub mod record;
pub mod result;
pub mod tables;
pub mod units;
pub mod validation;

// Re-export commonly used items
pub use calculators::*;
pub use errors::{CalculatorError, EngineResult};
pub use result::{BreakdownLine, BreakdownValue, CalculatorResult};
pub use tables::{ActivityLevel, DeficitPace, Goal, Sex};

// Export units module items (canonical source for unit handling)
pub use units::*;

// Export record and prefill types
pub use prefill::CalculatorData;
pub use record::{CalculatorResultRecord, CalculatorType};
