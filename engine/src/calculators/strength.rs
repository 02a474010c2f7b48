//! Strength calculators: one-rep max and training volume

use crate::errors::{CalculatorError, EngineResult};
use crate::result::{round1, round2, CalculatorResult};
use crate::units::UnitSystem;
use crate::validation;
use serde::{Deserialize, Serialize};

// ============================================================================
// One-Rep Max (Epley)
// ============================================================================

/// Standard training percentages of 1RM and the reps typically possible
const TRAINING_PERCENTAGES: &[(u32, u32)] = &[(95, 2), (90, 3), (85, 5)];

/// Inputs for the one-rep max calculator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OneRepMaxInput {
    /// Weight lifted for the given reps
    pub weight: f64,
    /// Reps completed, 1-30
    pub reps: u32,
    #[serde(default)]
    pub unit: UnitSystem,
}

/// Estimated one-rep max via the Epley formula: `weight * (1 + reps/30)`
///
/// The ratio is unit-free, so the result is reported in the unit the
/// weight was entered in. Accuracy degrades above ~10 reps but the
/// estimate is still computed up to 30.
pub fn calculate_one_rep_max(input: &OneRepMaxInput) -> EngineResult<CalculatorResult> {
    let weight_kg = input.unit.weight_to_kg(input.weight, "weight")?;
    validation::validate_lift_weight_kg(weight_kg)
        .map_err(|m| CalculatorError::validation("weight", m))?;
    validation::validate_reps(input.reps).map_err(|m| CalculatorError::validation("reps", m))?;

    let one_rm = input.weight * (1.0 + input.reps as f64 / 30.0);
    let unit = input.unit.weight_unit();

    let mut result = CalculatorResult::new(round2(one_rm), unit)
        .with_line("Weight Used", format!("{} {}", input.weight, unit))
        .with_line("Reps Completed", input.reps);

    for (percentage, reps) in TRAINING_PERCENTAGES {
        result = result.with_line(
            format!("{}% of 1RM", percentage),
            format!("{:.0} {} ({} reps)", one_rm * *percentage as f64 / 100.0, unit, reps),
        );
    }

    let mut result = result.with_recommendation(format!(
        "Your estimated one-rep max is {:.0} {}",
        one_rm, unit
    ));
    if input.reps > 10 {
        result = result.with_recommendation(
            "Estimates from sets above 10 reps are rough - retest with a heavier set for accuracy",
        );
    }
    Ok(result
        .with_recommendation("Always use a spotter when testing near-maximal weights")
        .with_recommendation("Train strength at 70-85% of 1RM, hypertrophy at 60-70%"))
}

// ============================================================================
// Training Volume
// ============================================================================

/// A logged group of sets at a fixed weight and rep count
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggedSet {
    pub sets: u32,
    pub reps: u32,
    pub weight: f64,
}

/// Inputs for the training volume calculator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingVolumeInput {
    pub entries: Vec<LoggedSet>,
    #[serde(default)]
    pub unit: UnitSystem,
}

/// Total training volume: `sets * reps * weight`, summed over entries
pub fn calculate_training_volume(input: &TrainingVolumeInput) -> EngineResult<CalculatorResult> {
    if input.entries.is_empty() {
        return Err(CalculatorError::validation(
            "entries",
            "At least one set must be logged",
        ));
    }

    let mut volume = 0.0;
    let mut total_sets = 0u32;
    for (i, entry) in input.entries.iter().enumerate() {
        let field = format!("entries[{}]", i);
        let weight_kg = input.unit.weight_to_kg(entry.weight, &field)?;
        validation::validate_lift_weight_kg(weight_kg)
            .map_err(|m| CalculatorError::validation(&field, m))?;
        validation::validate_sets(entry.sets)
            .map_err(|m| CalculatorError::validation(&field, m))?;
        validation::validate_reps(entry.reps)
            .map_err(|m| CalculatorError::validation(&field, m))?;

        volume += entry.sets as f64 * entry.reps as f64 * entry.weight;
        total_sets += entry.sets;
    }

    let unit = input.unit.weight_unit();

    Ok(CalculatorResult::new(round1(volume), unit)
        .with_line("Exercises Logged", input.entries.len() as u32)
        .with_line("Total Sets", total_sets)
        .with_line("Total Volume", format!("{:.0} {}", volume, unit))
        .with_recommendation(format!(
            "Your total training volume is {:.0} {} across {} sets",
            volume, unit, total_sets
        ))
        .with_recommendation(
            "Progressive overload: add 2.5-5% weight or 1-2 reps week over week",
        )
        .with_recommendation("10-20 sets per muscle group per week suits most trainees"))
}
