//! Input validation functions
//!
//! Range checks applied after unit normalization, so all bounds are in
//! canonical metric units. Helpers return a plain message; callers
//! attach the offending field name via [`crate::errors::CalculatorError`].

/// Validate body weight (in kg)
pub fn validate_weight_kg(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg < 20.0 {
        return Err("Weight must be at least 20 kg".to_string());
    }
    if weight_kg > 500.0 {
        return Err("Weight must be at most 500 kg".to_string());
    }
    Ok(())
}

/// Validate height (in cm)
pub fn validate_height_cm(height_cm: f64) -> Result<(), String> {
    if height_cm.is_nan() || height_cm.is_infinite() {
        return Err("Height must be a valid number".to_string());
    }
    if height_cm < 50.0 {
        return Err("Height must be at least 50 cm".to_string());
    }
    if height_cm > 300.0 {
        return Err("Height must be at most 300 cm".to_string());
    }
    Ok(())
}

/// Validate age in years
pub fn validate_age(age_years: u32) -> Result<(), String> {
    if age_years < 1 {
        return Err("Age must be at least 1 year".to_string());
    }
    if age_years > 120 {
        return Err("Age must be at most 120 years".to_string());
    }
    Ok(())
}

/// Validate repetition count for one-rep-max estimation
///
/// The Epley formula degrades above ~10 reps but is still computed up
/// to 30; beyond that the estimate is meaningless and is rejected.
pub fn validate_reps(reps: u32) -> Result<(), String> {
    if reps < 1 || reps > 30 {
        return Err("Reps must be between 1 and 30".to_string());
    }
    Ok(())
}

/// Validate body fat percentage
///
/// 0 and 100 are excluded: neither is a physically possible body
/// composition, and both degenerate the lean-mass arithmetic.
pub fn validate_body_fat_percent(percent: f64) -> Result<(), String> {
    if percent.is_nan() || percent.is_infinite() {
        return Err("Body fat must be a valid number".to_string());
    }
    if percent <= 0.0 || percent >= 100.0 {
        return Err("Body fat must be between 0 and 100 percent".to_string());
    }
    Ok(())
}

/// Validate a set count for training volume
pub fn validate_sets(sets: u32) -> Result<(), String> {
    if sets < 1 {
        return Err("Sets must be at least 1".to_string());
    }
    if sets > 100 {
        return Err("Sets must be at most 100".to_string());
    }
    Ok(())
}

/// Validate a lifted weight (already normalized to kg)
///
/// Looser than body weight: a bar can be lighter than a person.
pub fn validate_lift_weight_kg(weight_kg: f64) -> Result<(), String> {
    if weight_kg.is_nan() || weight_kg.is_infinite() {
        return Err("Weight must be a valid number".to_string());
    }
    if weight_kg <= 0.0 {
        return Err("Weight must be positive".to_string());
    }
    if weight_kg > 1000.0 {
        return Err("Weight exceeds any recorded lift".to_string());
    }
    Ok(())
}

/// Validate a daily calorie figure (BMR or TDEE handed between calculators)
pub fn validate_calories(calories: f64) -> Result<(), String> {
    if calories.is_nan() || calories.is_infinite() {
        return Err("Calories must be a valid number".to_string());
    }
    if calories < 500.0 {
        return Err("Calories must be at least 500 kcal/day".to_string());
    }
    if calories > 20000.0 {
        return Err("Calorie value unreasonably high".to_string());
    }
    Ok(())
}

/// Validate a daily protein target in grams
pub fn validate_protein_grams(grams: f64) -> Result<(), String> {
    if grams.is_nan() || grams.is_infinite() {
        return Err("Protein must be a valid number".to_string());
    }
    if grams <= 0.0 {
        return Err("Protein must be positive".to_string());
    }
    if grams > 1000.0 {
        return Err("Protein target unreasonably high".to_string());
    }
    Ok(())
}

/// Validate a body circumference measurement (in cm)
pub fn validate_circumference_cm(cm: f64) -> Result<(), String> {
    if cm.is_nan() || cm.is_infinite() {
        return Err("Measurement must be a valid number".to_string());
    }
    if cm < 10.0 || cm > 300.0 {
        return Err("Measurement must be between 10 and 300 cm".to_string());
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_validate_weight_kg() {
        assert!(validate_weight_kg(70.0).is_ok());
        assert!(validate_weight_kg(20.0).is_ok());
        assert!(validate_weight_kg(500.0).is_ok());
        assert!(validate_weight_kg(10.0).is_err());
        assert!(validate_weight_kg(-5.0).is_err());
        assert!(validate_weight_kg(600.0).is_err());
        assert!(validate_weight_kg(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_height_cm() {
        assert!(validate_height_cm(175.0).is_ok());
        assert!(validate_height_cm(49.9).is_err());
        assert!(validate_height_cm(300.1).is_err());
        assert!(validate_height_cm(f64::INFINITY).is_err());
    }

    #[test]
    fn test_validate_reps() {
        assert!(validate_reps(1).is_ok());
        assert!(validate_reps(30).is_ok());
        assert!(validate_reps(0).is_err());
        assert!(validate_reps(31).is_err());
    }

    #[test]
    fn test_validate_body_fat_percent() {
        assert!(validate_body_fat_percent(15.0).is_ok());
        assert!(validate_body_fat_percent(0.0).is_err());
        assert!(validate_body_fat_percent(100.0).is_err());
        assert!(validate_body_fat_percent(150.0).is_err());
        assert!(validate_body_fat_percent(-1.0).is_err());
    }

    #[test]
    fn test_validate_calories() {
        assert!(validate_calories(2000.0).is_ok());
        assert!(validate_calories(100.0).is_err());
        assert!(validate_calories(50000.0).is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_valid_weight_range(weight in 20.0f64..=500.0) {
            prop_assert!(validate_weight_kg(weight).is_ok());
        }

        #[test]
        fn prop_invalid_weight_below_min(weight in -100.0f64..20.0) {
            prop_assert!(validate_weight_kg(weight).is_err());
        }

        #[test]
        fn prop_valid_height_range(height in 50.0f64..=300.0) {
            prop_assert!(validate_height_cm(height).is_ok());
        }

        #[test]
        fn prop_valid_reps_range(reps in 1u32..=30) {
            prop_assert!(validate_reps(reps).is_ok());
        }

        #[test]
        fn prop_valid_body_fat_range(pct in 0.1f64..99.9) {
            prop_assert!(validate_body_fat_percent(pct).is_ok());
        }
    }
}
