//! Shared coefficient tables
//!
//! Every coefficient that more than one calculator references lives
//! here, as a method on the enum that selects it. This keeps the
//! protein-per-kg, macro-ratio, and deficit tables from drifting apart
//! between calculators that share an axis.

use serde::{Deserialize, Serialize};

// ============================================================================
// Biological Sex
// ============================================================================

/// Biological sex, used for physiological calculations only
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    /// Minimum safe daily calorie target
    ///
    /// Deficit calculations clamp to this floor and warn instead of
    /// returning a lower target.
    pub fn calorie_floor(&self) -> f64 {
        match self {
            Sex::Male => 1500.0,
            Sex::Female => 1200.0,
        }
    }
}

impl std::str::FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "male" | "m" => Ok(Sex::Male),
            "female" | "f" => Ok(Sex::Female),
            _ => Err(format!("Unknown sex: {}", s)),
        }
    }
}

// ============================================================================
// Activity Level
// ============================================================================

/// Activity level for TDEE and protein calculations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum ActivityLevel {
    /// Little or no exercise
    Sedentary,
    /// Light exercise 1-3 days/week
    #[default]
    Light,
    /// Moderate exercise 3-5 days/week
    Moderate,
    /// Hard exercise 6-7 days/week
    Active,
    /// Very hard exercise or physical job
    VeryActive,
}

impl ActivityLevel {
    /// Activity multiplier applied to BMR to obtain TDEE
    pub fn multiplier(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.375,
            ActivityLevel::Moderate => 1.55,
            ActivityLevel::Active => 1.725,
            ActivityLevel::VeryActive => 1.9,
        }
    }

    /// Baseline protein intake in grams per kg of body weight
    ///
    /// One fixed coefficient per bucket; goals add on top of this via
    /// [`Goal::protein_adjustment`].
    pub fn protein_g_per_kg(&self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::Light => 1.4,
            ActivityLevel::Moderate => 1.6,
            ActivityLevel::Active => 1.8,
            ActivityLevel::VeryActive => 2.0,
        }
    }

    /// Human-readable description for result breakdowns
    pub fn description(&self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary (little/no exercise)",
            ActivityLevel::Light => "Light Activity (1-3 days/week)",
            ActivityLevel::Moderate => "Moderate Activity (3-5 days/week)",
            ActivityLevel::Active => "Active (6-7 days/week)",
            ActivityLevel::VeryActive => "Very Active (hard exercise, physical job)",
        }
    }
}

impl std::str::FromStr for ActivityLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sedentary" => Ok(ActivityLevel::Sedentary),
            "light" => Ok(ActivityLevel::Light),
            "moderate" => Ok(ActivityLevel::Moderate),
            "active" => Ok(ActivityLevel::Active),
            "very-active" | "very_active" => Ok(ActivityLevel::VeryActive),
            _ => Err(format!("Unknown activity level: {}", s)),
        }
    }
}

// ============================================================================
// Goal
// ============================================================================

/// Training/nutrition goal shared by the protein and macro calculators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Goal {
    FatLoss,
    #[default]
    Maintenance,
    MuscleGain,
}

impl Goal {
    /// Extra protein (g/kg) on top of the activity baseline
    pub fn protein_adjustment(&self) -> f64 {
        match self {
            Goal::FatLoss | Goal::MuscleGain => 0.2,
            Goal::Maintenance => 0.0,
        }
    }

    /// Share of TDEE allocated to fat in the macro split
    ///
    /// Carbs take whatever remains after protein and fat.
    pub fn fat_share(&self) -> f64 {
        match self {
            Goal::FatLoss => 0.20,
            Goal::MuscleGain => 0.25,
            Goal::Maintenance => 0.30,
        }
    }

    /// Human-readable description for result breakdowns
    pub fn description(&self) -> &'static str {
        match self {
            Goal::FatLoss => "Fat Loss",
            Goal::Maintenance => "Maintenance",
            Goal::MuscleGain => "Muscle Gain",
        }
    }
}

impl std::str::FromStr for Goal {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "fat-loss" | "fat_loss" => Ok(Goal::FatLoss),
            "maintenance" | "maintain" => Ok(Goal::Maintenance),
            "muscle-gain" | "muscle_gain" => Ok(Goal::MuscleGain),
            _ => Err(format!("Unknown goal: {}", s)),
        }
    }
}

// ============================================================================
// Deficit Pace
// ============================================================================

/// How aggressively to cut calories for weight loss
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeficitPace {
    Slow,
    #[default]
    Moderate,
    Aggressive,
}

impl DeficitPace {
    /// Daily calorie deficit for this pace
    pub fn deficit_kcal(&self) -> f64 {
        match self {
            DeficitPace::Slow => 250.0,
            DeficitPace::Moderate => 500.0,
            DeficitPace::Aggressive => 1000.0,
        }
    }

    /// Expected weekly weight loss in lbs at this pace
    pub fn weekly_loss_lbs(&self) -> f64 {
        match self {
            DeficitPace::Slow => 0.25,
            DeficitPace::Moderate => 0.5,
            DeficitPace::Aggressive => 1.0,
        }
    }

    /// Human-readable description for result breakdowns
    pub fn description(&self) -> &'static str {
        match self {
            DeficitPace::Slow => "Slow",
            DeficitPace::Moderate => "Moderate",
            DeficitPace::Aggressive => "Aggressive",
        }
    }
}

impl std::str::FromStr for DeficitPace {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "slow" => Ok(DeficitPace::Slow),
            "moderate" => Ok(DeficitPace::Moderate),
            "aggressive" => Ok(DeficitPace::Aggressive),
            _ => Err(format!("Unknown deficit pace: {}", s)),
        }
    }
}

// ============================================================================
// Energy density
// ============================================================================

/// kcal per gram of protein or carbohydrate
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
/// kcal per gram of carbohydrate
pub const KCAL_PER_G_CARB: f64 = 4.0;
/// kcal per gram of fat
pub const KCAL_PER_G_FAT: f64 = 9.0;
