//! Body composition calculators: BMI, body fat, lean body mass, ideal weight

use crate::errors::{CalculatorError, EngineResult};
use crate::result::{round1, round2, CalculatorResult};
use crate::tables::Sex;
use crate::units::UnitSystem;
use crate::validation;
use serde::{Deserialize, Serialize};

// ============================================================================
// BMI
// ============================================================================

/// BMI category per WHO thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BmiCategory {
    /// Classify a BMI value: <18.5, 18.5-24.9, 25-29.9, >=30
    pub fn classify(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }

    fn advice(&self) -> &'static [&'static str] {
        match self {
            BmiCategory::Underweight => &[
                "Aim for gradual weight gain of 0.25-0.5 kg per week through healthy eating",
                "Build muscle mass with resistance training 2-3x per week",
            ],
            BmiCategory::Normal => &[
                "You're in the healthy weight range - keep up balanced nutrition and exercise",
                "Consider body composition goals such as building muscle at this weight",
            ],
            BmiCategory::Overweight => &[
                "A 250-500 kcal daily deficit gives a sustainable 0.25-0.5 kg weekly loss",
                "Aim for 150+ minutes of moderate activity per week",
            ],
            BmiCategory::Obese => &[
                "Consult a healthcare provider for a safe, supervised weight loss plan",
                "Focus on long-term dietary and exercise changes over quick fixes",
            ],
        }
    }
}

/// Inputs for the BMI calculator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BmiInput {
    pub weight: f64,
    pub height: f64,
    #[serde(default)]
    pub unit: UnitSystem,
}

/// Body Mass Index: `kg / m^2`
pub fn calculate_bmi(input: &BmiInput) -> EngineResult<CalculatorResult> {
    let weight_kg = input.unit.weight_to_kg(input.weight, "weight")?;
    let height_cm = input.unit.length_to_cm(input.height, "height")?;

    validation::validate_weight_kg(weight_kg)
        .map_err(|m| CalculatorError::validation("weight", m))?;
    validation::validate_height_cm(height_cm)
        .map_err(|m| CalculatorError::validation("height", m))?;

    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    let category = BmiCategory::classify(bmi);

    Ok(CalculatorResult::new(round2(bmi), "BMI")
        .with_category(category.label())
        .with_line("Weight", format!("{:.1} kg", weight_kg))
        .with_line("Height", format!("{:.1} cm", height_cm))
        .with_recommendation(format!(
            "Your BMI is {:.1} - {}",
            bmi,
            category.label().to_lowercase()
        ))
        .with_recommendations(category.advice().iter().copied())
        .with_recommendation(
            "BMI ignores body composition - athletes can read high while lean",
        ))
}

// ============================================================================
// Body Fat (US Navy circumference method)
// ============================================================================

/// Body fat category with sex-specific ranges
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BodyFatCategory {
    EssentialFat,
    Athletes,
    Fitness,
    Average,
    Obese,
}

impl BodyFatCategory {
    /// Classify a body fat percentage by sex
    pub fn classify(percent: f64, sex: Sex) -> Self {
        match sex {
            Sex::Male => {
                if percent < 6.0 {
                    BodyFatCategory::EssentialFat
                } else if percent < 14.0 {
                    BodyFatCategory::Athletes
                } else if percent < 18.0 {
                    BodyFatCategory::Fitness
                } else if percent < 25.0 {
                    BodyFatCategory::Average
                } else {
                    BodyFatCategory::Obese
                }
            }
            Sex::Female => {
                if percent < 16.0 {
                    BodyFatCategory::EssentialFat
                } else if percent < 20.0 {
                    BodyFatCategory::Athletes
                } else if percent < 25.0 {
                    BodyFatCategory::Fitness
                } else if percent < 32.0 {
                    BodyFatCategory::Average
                } else {
                    BodyFatCategory::Obese
                }
            }
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            BodyFatCategory::EssentialFat => "Essential Fat",
            BodyFatCategory::Athletes => "Athletes",
            BodyFatCategory::Fitness => "Fitness",
            BodyFatCategory::Average => "Average",
            BodyFatCategory::Obese => "Obese",
        }
    }
}

/// Inputs for the body fat calculator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BodyFatInput {
    pub sex: Sex,
    pub weight: f64,
    pub height: f64,
    /// Neck circumference
    pub neck: f64,
    /// Waist circumference at the navel
    pub waist: f64,
    /// Hip circumference; required for women
    #[serde(default)]
    pub hip: Option<f64>,
    #[serde(default)]
    pub unit: UnitSystem,
}

/// Body fat percentage via the US Navy circumference method
///
/// Men: `495 / (1.0324 - 0.19077*log10(waist - neck) + 0.15456*log10(height)) - 450`
/// Women: `495 / (1.29579 - 0.35004*log10(waist + hip - neck) + 0.22100*log10(height)) - 450`
pub fn calculate_body_fat(input: &BodyFatInput) -> EngineResult<CalculatorResult> {
    let weight_kg = input.unit.weight_to_kg(input.weight, "weight")?;
    let height_cm = input.unit.length_to_cm(input.height, "height")?;
    let neck_cm = input.unit.length_to_cm(input.neck, "neck")?;
    let waist_cm = input.unit.length_to_cm(input.waist, "waist")?;

    validation::validate_weight_kg(weight_kg)
        .map_err(|m| CalculatorError::validation("weight", m))?;
    validation::validate_height_cm(height_cm)
        .map_err(|m| CalculatorError::validation("height", m))?;
    validation::validate_circumference_cm(neck_cm)
        .map_err(|m| CalculatorError::validation("neck", m))?;
    validation::validate_circumference_cm(waist_cm)
        .map_err(|m| CalculatorError::validation("waist", m))?;

    let body_fat = match input.sex {
        Sex::Male => {
            if waist_cm <= neck_cm {
                return Err(CalculatorError::validation(
                    "waist",
                    "Waist must be larger than neck circumference",
                ));
            }
            495.0
                / (1.0324 - 0.19077 * (waist_cm - neck_cm).log10()
                    + 0.15456 * height_cm.log10())
                - 450.0
        }
        Sex::Female => {
            let hip = input.hip.ok_or_else(|| {
                CalculatorError::validation("hip", "Hip measurement is required for women")
            })?;
            let hip_cm = input.unit.length_to_cm(hip, "hip")?;
            validation::validate_circumference_cm(hip_cm)
                .map_err(|m| CalculatorError::validation("hip", m))?;
            if waist_cm + hip_cm <= neck_cm {
                return Err(CalculatorError::validation(
                    "waist",
                    "Waist plus hip must be larger than neck circumference",
                ));
            }
            495.0
                / (1.29579 - 0.35004 * (waist_cm + hip_cm - neck_cm).log10()
                    + 0.22100 * height_cm.log10())
                - 450.0
        }
    };

    // The regression can stray slightly outside [0, 100] at extreme but
    // valid tape measurements; the estimate is pinned, not the inputs.
    let body_fat = body_fat.clamp(0.0, 100.0);
    let category = BodyFatCategory::classify(body_fat, input.sex);
    let lean_kg = weight_kg * (1.0 - body_fat / 100.0);
    let fat_kg = weight_kg - lean_kg;

    Ok(CalculatorResult::new(round1(body_fat), "%")
        .with_category(category.label())
        .with_line("Total Weight", format!("{:.1} kg", weight_kg))
        .with_line("Fat Mass", format!("{:.1} kg", fat_kg))
        .with_line("Lean Body Mass", format!("{:.1} kg", lean_kg))
        .with_recommendation(format!(
            "Your body fat is {:.1}% ({})",
            body_fat,
            category.label()
        ))
        .with_recommendation("Re-measure every 4-6 weeks under the same conditions")
        .with_recommendation(
            "Tape estimates drift with technique - combine with photos and strength trends",
        ))
}

// ============================================================================
// Lean Body Mass
// ============================================================================

/// Inputs for the lean body mass calculator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeanBodyMassInput {
    pub weight: f64,
    /// Measured body fat percentage
    pub body_fat: f64,
    #[serde(default)]
    pub unit: UnitSystem,
}

/// Lean body mass: `weight - weight * bodyFat/100`
pub fn calculate_lean_body_mass(input: &LeanBodyMassInput) -> EngineResult<CalculatorResult> {
    let weight_kg = input.unit.weight_to_kg(input.weight, "weight")?;
    validation::validate_weight_kg(weight_kg)
        .map_err(|m| CalculatorError::validation("weight", m))?;
    validation::validate_body_fat_percent(input.body_fat)
        .map_err(|m| CalculatorError::validation("body_fat", m))?;

    let lean_kg = weight_kg * (1.0 - input.body_fat / 100.0);
    let fat_kg = weight_kg - lean_kg;
    let lean_display = input.unit.weight_from_kg(lean_kg);

    Ok(CalculatorResult::new(round1(lean_display), input.unit.weight_unit())
        .with_line("Total Weight", format!("{:.1} kg", weight_kg))
        .with_line("Body Fat %", format!("{:.1}%", input.body_fat))
        .with_line("Fat Mass", format!("{:.1} kg", fat_kg))
        .with_line("Lean Body Mass", format!("{:.1} kg", lean_kg))
        .with_line("LBM Percentage", format!("{:.1}%", 100.0 - input.body_fat))
        .with_recommendation(format!(
            "Your lean body mass is {:.1} kg ({:.1}% of total weight)",
            lean_kg,
            100.0 - input.body_fat
        ))
        .with_recommendation("LBM covers muscle, bone, organs, and water - everything but fat")
        .with_recommendation("Resistance training 3-4x per week grows or preserves LBM"))
}

// ============================================================================
// Ideal Weight (Robinson, 1983)
// ============================================================================

/// Inputs for the ideal weight calculator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdealWeightInput {
    pub sex: Sex,
    pub height: f64,
    #[serde(default)]
    pub unit: UnitSystem,
}

/// Ideal body weight via the Robinson formula
///
/// Men: `52 kg + 1.9 kg per inch over 5 ft`
/// Women: `49 kg + 1.7 kg per inch over 5 ft`
pub fn calculate_ideal_weight(input: &IdealWeightInput) -> EngineResult<CalculatorResult> {
    let height_cm = input.unit.length_to_cm(input.height, "height")?;
    validation::validate_height_cm(height_cm)
        .map_err(|m| CalculatorError::validation("height", m))?;

    let inches_over_5ft = (height_cm / 2.54 - 60.0).max(0.0);
    let ideal_kg = match input.sex {
        Sex::Male => 52.0 + 1.9 * inches_over_5ft,
        Sex::Female => 49.0 + 1.7 * inches_over_5ft,
    };

    let range_kg = 2.0;
    let ideal_display = input.unit.weight_from_kg(ideal_kg);
    let low = input.unit.weight_from_kg(ideal_kg - range_kg);
    let high = input.unit.weight_from_kg(ideal_kg + range_kg);
    let unit = input.unit.weight_unit();

    Ok(CalculatorResult::new(round1(ideal_display), unit)
        .with_line("Height", format!("{:.1} cm", height_cm))
        .with_line("Formula", "Robinson (1983)")
        .with_line(
            "Ideal Weight Range",
            format!("{:.0} - {:.0} {}", low, high, unit),
        )
        .with_recommendation(format!(
            "Your ideal weight is around {:.0} {} ({:.0}-{:.0} {})",
            ideal_display, unit, low, high, unit
        ))
        .with_recommendation(
            "This is an estimate - muscle mass and frame shift the healthy figure",
        )
        .with_recommendation("Body fat percentage tells you more than scale weight alone"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    // =========================================================================
    // BMI
    // =========================================================================

    #[rstest]
    #[case(70.0, 175.0, 22.86, "Normal weight")]
    #[case(50.0, 175.0, 16.33, "Underweight")]
    #[case(100.0, 175.0, 32.65, "Obese")]
    #[case(80.0, 175.0, 26.12, "Overweight")]
    fn test_bmi_known_values(
        #[case] weight: f64,
        #[case] height: f64,
        #[case] bmi: f64,
        #[case] category: &str,
    ) {
        let input = BmiInput { weight, height, unit: UnitSystem::Metric };
        let result = calculate_bmi(&input).unwrap();
        assert_eq!(result.value, bmi);
        assert_eq!(result.category.as_deref(), Some(category));
    }

    #[test]
    fn test_bmi_metric_imperial_equivalence() {
        let metric = BmiInput { weight: 80.0, height: 180.0, unit: UnitSystem::Metric };
        let imperial = BmiInput {
            weight: 80.0 / 0.45359237,
            height: 180.0 / 2.54,
            unit: UnitSystem::Imperial,
        };
        let a = calculate_bmi(&metric).unwrap().value;
        let b = calculate_bmi(&imperial).unwrap().value;
        assert!(((a - b) / a).abs() < 1e-6);
    }

    #[test]
    fn test_bmi_category_boundaries() {
        assert_eq!(BmiCategory::classify(18.49), BmiCategory::Underweight);
        assert_eq!(BmiCategory::classify(18.5), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(24.99), BmiCategory::Normal);
        assert_eq!(BmiCategory::classify(25.0), BmiCategory::Overweight);
        assert_eq!(BmiCategory::classify(30.0), BmiCategory::Obese);
    }

    // =========================================================================
    // Body Fat
    // =========================================================================

    #[test]
    fn test_body_fat_male_navy_formula() {
        let input = BodyFatInput {
            sex: Sex::Male,
            weight: 85.0,
            height: 180.0,
            neck: 38.0,
            waist: 90.0,
            hip: None,
            unit: UnitSystem::Metric,
        };
        let result = calculate_body_fat(&input).unwrap();
        // 495 / (1.0324 - 0.19077*log10(52) + 0.15456*log10(180)) - 450
        let expected = 495.0
            / (1.0324 - 0.19077 * 52.0f64.log10() + 0.15456 * 180.0f64.log10())
            - 450.0;
        assert!((result.value - (expected * 10.0).round() / 10.0).abs() < 1e-9);
        assert!(result.category.is_some());
    }

    #[test]
    fn test_body_fat_female_requires_hip() {
        let input = BodyFatInput {
            sex: Sex::Female,
            weight: 65.0,
            height: 165.0,
            neck: 32.0,
            waist: 75.0,
            hip: None,
            unit: UnitSystem::Metric,
        };
        let err = calculate_body_fat(&input).unwrap_err();
        assert_eq!(err.field(), "hip");
    }

    #[test]
    fn test_body_fat_rejects_waist_not_larger_than_neck() {
        let input = BodyFatInput {
            sex: Sex::Male,
            weight: 85.0,
            height: 180.0,
            neck: 40.0,
            waist: 38.0,
            hip: None,
            unit: UnitSystem::Metric,
        };
        let err = calculate_body_fat(&input).unwrap_err();
        assert_eq!(err.field(), "waist");
    }

    #[rstest]
    #[case(Sex::Male, 10.0, BodyFatCategory::Athletes)]
    #[case(Sex::Male, 20.0, BodyFatCategory::Average)]
    #[case(Sex::Female, 18.0, BodyFatCategory::Athletes)]
    #[case(Sex::Female, 28.0, BodyFatCategory::Average)]
    #[case(Sex::Female, 35.0, BodyFatCategory::Obese)]
    fn test_body_fat_categories(
        #[case] sex: Sex,
        #[case] percent: f64,
        #[case] expected: BodyFatCategory,
    ) {
        assert_eq!(BodyFatCategory::classify(percent, sex), expected);
    }

    // =========================================================================
    // Lean Body Mass
    // =========================================================================

    #[test]
    fn test_lbm_from_imperial_weight() {
        // 180 lbs -> 81.65 kg; 15% fat -> LBM = weight * 0.85
        let input = LeanBodyMassInput {
            weight: 180.0,
            body_fat: 15.0,
            unit: UnitSystem::Imperial,
        };
        let result = calculate_lean_body_mass(&input).unwrap();
        assert_eq!(result.value, 153.0); // 180 * 0.85 lbs
        assert_eq!(result.unit, "lbs");

        let lbm_line = result
            .breakdown
            .iter()
            .find(|l| l.label == "Lean Body Mass")
            .unwrap();
        assert_eq!(lbm_line.value.to_string(), "69.4 kg"); // 81.65 * 0.85
    }

    #[rstest]
    #[case(0.0)]
    #[case(100.0)]
    #[case(150.0)]
    #[case(-5.0)]
    fn test_lbm_rejects_invalid_body_fat(#[case] body_fat: f64) {
        let input = LeanBodyMassInput { weight: 80.0, body_fat, unit: UnitSystem::Metric };
        let err = calculate_lean_body_mass(&input).unwrap_err();
        assert_eq!(err.field(), "body_fat");
    }

    // =========================================================================
    // Ideal Weight
    // =========================================================================

    #[test]
    fn test_ideal_weight_robinson_male_180cm() {
        let input = IdealWeightInput {
            sex: Sex::Male,
            height: 180.0,
            unit: UnitSystem::Metric,
        };
        let result = calculate_ideal_weight(&input).unwrap();
        // 180 cm = 70.866 in -> 52 + 1.9 * 10.866 = 72.6 kg
        assert!((result.value - 72.6).abs() < 0.05);
        assert_eq!(result.unit, "kg");
    }

    #[test]
    fn test_ideal_weight_differs_by_sex() {
        let male = IdealWeightInput { sex: Sex::Male, height: 170.0, unit: UnitSystem::Metric };
        let female = IdealWeightInput { sex: Sex::Female, ..male.clone() };
        let m = calculate_ideal_weight(&male).unwrap().value;
        let f = calculate_ideal_weight(&female).unwrap().value;
        assert!(m > f);
    }

    #[test]
    fn test_ideal_weight_short_height_floors_at_base() {
        // Below 5 ft the per-inch term contributes nothing
        let input = IdealWeightInput {
            sex: Sex::Female,
            height: 140.0,
            unit: UnitSystem::Metric,
        };
        let result = calculate_ideal_weight(&input).unwrap();
        assert_eq!(result.value, 49.0);
    }

    // =========================================================================
    // Properties
    // =========================================================================

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: BMI value is finite and non-negative over valid ranges
        #[test]
        fn prop_bmi_finite_nonnegative(weight in 20.0f64..500.0, height in 50.0f64..300.0) {
            let input = BmiInput { weight, height, unit: UnitSystem::Metric };
            let result = calculate_bmi(&input).unwrap();
            prop_assert!(result.value.is_finite() && result.value >= 0.0);
        }

        /// Property: LBM never exceeds total weight
        #[test]
        fn prop_lbm_below_total_weight(
            weight in 20.0f64..500.0,
            body_fat in 1.0f64..99.0
        ) {
            let input = LeanBodyMassInput { weight, body_fat, unit: UnitSystem::Metric };
            let result = calculate_lean_body_mass(&input).unwrap();
            prop_assert!(result.value < weight);
            prop_assert!(result.value > 0.0);
        }

        /// Property: identical inputs yield identical results
        #[test]
        fn prop_bmi_idempotent(weight in 20.0f64..500.0, height in 50.0f64..300.0) {
            let input = BmiInput { weight, height, unit: UnitSystem::Metric };
            prop_assert_eq!(calculate_bmi(&input).unwrap(), calculate_bmi(&input).unwrap());
        }
    }
}
