//! Energy calculators: BMR, TDEE, protein, macros, calorie deficit
//!
//! BMR uses the Mifflin-St Jeor equation. TDEE, macros, and deficit
//! calculations chain off it: a BMR result feeds the TDEE form, and a
//! TDEE result feeds the macro split and deficit planner.

use crate::errors::{CalculatorError, EngineResult};
use crate::result::{round1, round2, CalculatorResult};
use crate::tables::{
    ActivityLevel, DeficitPace, Goal, Sex, KCAL_PER_G_CARB, KCAL_PER_G_FAT, KCAL_PER_G_PROTEIN,
};
use crate::units::UnitSystem;
use crate::validation;
use serde::{Deserialize, Serialize};

// ============================================================================
// BMR (Mifflin-St Jeor)
// ============================================================================

/// Inputs for the BMR calculator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmrInput {
    pub sex: Sex,
    pub age: u32,
    /// Body weight in the selected unit system
    pub weight: f64,
    /// Height in the selected unit system
    pub height: f64,
    #[serde(default)]
    pub unit: UnitSystem,
}

/// Basal Metabolic Rate via Mifflin-St Jeor
///
/// Men: `10*kg + 6.25*cm - 5*age + 5`
/// Women: `10*kg + 6.25*cm - 5*age - 161`
pub fn calculate_bmr(input: &BmrInput) -> EngineResult<CalculatorResult> {
    let weight_kg = input.unit.weight_to_kg(input.weight, "weight")?;
    let height_cm = input.unit.length_to_cm(input.height, "height")?;

    validation::validate_weight_kg(weight_kg)
        .map_err(|m| CalculatorError::validation("weight", m))?;
    validation::validate_height_cm(height_cm)
        .map_err(|m| CalculatorError::validation("height", m))?;
    validation::validate_age(input.age).map_err(|m| CalculatorError::validation("age", m))?;

    let base = 10.0 * weight_kg + 6.25 * height_cm - 5.0 * input.age as f64;
    let bmr = match input.sex {
        Sex::Male => base + 5.0,
        Sex::Female => base - 161.0,
    };

    if bmr <= 0.0 {
        // Only reachable at the extreme corners of the valid ranges
        return Err(CalculatorError::validation(
            "age",
            "Inputs produce a non-positive metabolic rate",
        ));
    }

    Ok(CalculatorResult::new(round1(bmr), "kcal/day")
        .with_line("Age", input.age)
        .with_line("Weight", format!("{:.1} kg", weight_kg))
        .with_line("Height", format!("{:.1} cm", height_cm))
        .with_recommendation(format!(
            "Your BMR is {:.0} calories per day - what your body burns at complete rest",
            bmr
        ))
        .with_recommendation(
            "Multiply BMR by your activity level to get your total daily needs (TDEE)",
        )
        .with_recommendation("Recalculate after every 5 kg of weight change"))
}

// ============================================================================
// TDEE
// ============================================================================

/// Inputs for the TDEE calculator
///
/// Takes a BMR figure rather than raw body stats; the BMR result
/// prefills it through the cross-calculator bridge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TdeeInput {
    pub bmr: f64,
    pub activity_level: ActivityLevel,
}

/// Total Daily Energy Expenditure: `BMR * activity multiplier`
pub fn calculate_tdee(input: &TdeeInput) -> EngineResult<CalculatorResult> {
    validation::validate_calories(input.bmr)
        .map_err(|m| CalculatorError::validation("bmr", m))?;

    let multiplier = input.activity_level.multiplier();
    let tdee = input.bmr * multiplier;

    Ok(CalculatorResult::new(round2(tdee), "kcal/day")
        .with_line("BMR", format!("{:.0} kcal/day", input.bmr))
        .with_line("Activity Level", input.activity_level.description())
        .with_line("Activity Multiplier", multiplier)
        .with_recommendation(format!(
            "Eat around {:.0} calories per day to maintain your current weight",
            tdee
        ))
        .with_recommendation(
            "For weight loss, subtract 250-500 calories; for muscle gain, add 300-500",
        )
        .with_recommendation("Reassess monthly - TDEE shifts as weight and activity change"))
}

// ============================================================================
// Protein
// ============================================================================

/// Inputs for the protein calculator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProteinInput {
    pub weight: f64,
    #[serde(default)]
    pub unit: UnitSystem,
    pub activity_level: ActivityLevel,
    #[serde(default)]
    pub goal: Goal,
}

/// Daily protein target: `weight_kg * g/kg`, with the coefficient
/// selected by activity level and adjusted by goal (see [`crate::tables`])
pub fn calculate_protein(input: &ProteinInput) -> EngineResult<CalculatorResult> {
    let weight_kg = input.unit.weight_to_kg(input.weight, "weight")?;
    validation::validate_weight_kg(weight_kg)
        .map_err(|m| CalculatorError::validation("weight", m))?;

    let g_per_kg = input.activity_level.protein_g_per_kg() + input.goal.protein_adjustment();
    let grams = weight_kg * g_per_kg;

    Ok(CalculatorResult::new(grams.round(), "g/day")
        .with_line("Body Weight", format!("{:.1} kg", weight_kg))
        .with_line("Protein per kg", format!("{:.1} g", g_per_kg))
        .with_line("Activity Level", input.activity_level.description())
        .with_line("Goal", input.goal.description())
        .with_recommendation(format!("Aim for {:.0} g of protein per day", grams))
        .with_recommendation("Spread protein intake across meals throughout the day")
        .with_recommendation("Good sources: chicken, fish, eggs, dairy, legumes"))
}

// ============================================================================
// Macros
// ============================================================================

/// Inputs for the macro split calculator
///
/// TDEE and the protein target arrive prefilled from their calculators.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MacrosInput {
    pub tdee: f64,
    #[serde(default)]
    pub goal: Goal,
    /// Fixed daily protein target in grams
    pub protein: f64,
}

/// Allocate TDEE across protein, carbs, and fat
///
/// Protein calories are fixed by the target; fat takes a goal-dependent
/// share of TDEE; carbs take the remainder. 4 kcal/g for protein and
/// carbs, 9 kcal/g for fat.
pub fn calculate_macros(input: &MacrosInput) -> EngineResult<CalculatorResult> {
    validation::validate_calories(input.tdee)
        .map_err(|m| CalculatorError::validation("tdee", m))?;
    validation::validate_protein_grams(input.protein)
        .map_err(|m| CalculatorError::validation("protein", m))?;

    let protein_cal = input.protein * KCAL_PER_G_PROTEIN;
    let fat_cal = input.tdee * input.goal.fat_share();
    let carb_cal = input.tdee - protein_cal - fat_cal;

    if carb_cal < 0.0 {
        return Err(CalculatorError::validation(
            "protein",
            "Protein target and fat allocation exceed the calorie budget",
        ));
    }

    let protein_g = (protein_cal / KCAL_PER_G_PROTEIN).round();
    let carb_g = (carb_cal / KCAL_PER_G_CARB).round();
    let fat_g = (fat_cal / KCAL_PER_G_FAT).round();
    let pct = |cal: f64| (cal / input.tdee * 100.0).round();

    Ok(CalculatorResult::new(input.tdee.round(), "kcal/day")
        .with_line("Protein", format!("{:.0} g ({:.0}%)", protein_g, pct(protein_cal)))
        .with_line("Carbs", format!("{:.0} g ({:.0}%)", carb_g, pct(carb_cal)))
        .with_line("Fats", format!("{:.0} g ({:.0}%)", fat_g, pct(fat_cal)))
        .with_line("Goal", input.goal.description())
        .with_recommendation(format!(
            "Daily targets: {:.0} g protein, {:.0} g carbs, {:.0} g fats",
            protein_g, carb_g, fat_g
        ))
        .with_recommendation("Distribute macros across 4-6 meals through the day")
        .with_recommendation("These are targets, not rules - adjust based on your response"))
}

// ============================================================================
// Calorie Deficit
// ============================================================================

/// Inputs for the calorie deficit planner
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CalorieDeficitInput {
    pub tdee: f64,
    #[serde(default)]
    pub pace: DeficitPace,
    pub sex: Sex,
}

/// Daily calorie target: `TDEE - deficit`, clamped at the safety floor
///
/// The floor (1200 kcal for women, 1500 for men) is applied with a
/// warning recommendation rather than silently altering the requested
/// pace.
pub fn calculate_calorie_deficit(input: &CalorieDeficitInput) -> EngineResult<CalculatorResult> {
    validation::validate_calories(input.tdee)
        .map_err(|m| CalculatorError::validation("tdee", m))?;

    let deficit = input.pace.deficit_kcal();
    let floor = input.sex.calorie_floor();
    let unclamped = input.tdee - deficit;
    let target = unclamped.max(floor);
    let clamped = unclamped < floor;

    let mut result = CalculatorResult::new(target.round(), "kcal/day")
        .with_line("TDEE", format!("{:.0} kcal/day", input.tdee))
        .with_line("Deficit", format!("{:.0} kcal/day", deficit))
        .with_line("Target Calories", format!("{:.0} kcal/day", target))
        .with_line("Expected Loss", format!("{} lbs/week", input.pace.weekly_loss_lbs()))
        .with_recommendation(format!(
            "Eat {:.0} calories per day for {} weight loss",
            target,
            input.pace.description().to_lowercase()
        ));

    if clamped {
        result = result.with_recommendation(format!(
            "Warning: a {:.0} kcal deficit would drop you below the safe minimum of {:.0} \
             kcal/day, so your target has been held at the floor",
            deficit, floor
        ));
    }

    Ok(result
        .with_recommendation("Reassess monthly - your TDEE decreases as you lose weight")
        .with_recommendation("Pair the deficit with resistance training to preserve muscle"))
}
