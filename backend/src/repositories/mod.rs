//! Database repositories
//!
//! Provides data access layer for database operations.

pub mod history;

pub use history::{HistoryQuery, HistoryRepository, StoredCalculatorResult};
