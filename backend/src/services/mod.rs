//! Business logic services
//!
//! Services encapsulate business logic and coordinate between
//! repositories and the calculator engine.

pub mod calculators;

pub use calculators::CalculatorService;
