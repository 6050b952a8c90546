use serde::Serialize;

use crate::calculator::constants::MIN_SAFE_INTAKE_KCAL;
use crate::models::ActivityLevel;

/// BMR formula picked from lean body mass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Formula {
    /// `370 + 21.6 × LBM`, lean mass below 45 kg.
    KatchMcArdle,
    /// `28 × LBM`, lean mass 45-60 kg inclusive.
    Simple,
    /// `500 + 22 × LBM`, lean mass above 60 kg.
    Cunningham,
}

impl Formula {
    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Formula::KatchMcArdle => "Katch–McArdle",
            Formula::Simple => "簡易式",
            Formula::Cunningham => "Cunningham",
        }
    }

    /// Right-hand side of the equation in terms of LBM.
    pub fn equation(self) -> &'static str {
        match self {
            Formula::KatchMcArdle => "370 + 21.6 × LBM",
            Formula::Simple => "28 × LBM",
            Formula::Cunningham => "500 + 22 × LBM",
        }
    }
}

/// Tagged BMR result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BmrEstimate {
    pub kcal: f64,
    pub formula: Formula,
}

/// Intake plan derived from a monthly loss target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TargetIntake {
    pub target_loss_kg_per_month: f64,
    /// Whole kcal.
    pub deficit_per_day_kcal: i64,
    pub recommended_intake_kcal: f64,
    pub weekly_loss_kg: f64,
}

impl TargetIntake {
    /// Advisory health-caution signal; never blocks the calculation.
    pub fn is_below_safe_minimum(&self) -> bool {
        self.recommended_intake_kcal < MIN_SAFE_INTAKE_KCAL
    }
}

/// Daily grams of each macronutrient.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct MacroGrams {
    pub protein: f64,
    pub fat: f64,
    pub carb: f64,
}

/// Everyday foods that supply the macro grams on their own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FoodEquivalents {
    pub chicken_g: i64,
    pub eggs: i64,
    /// Unrounded; shown with one decimal.
    pub oil_tbsp: f64,
    pub rice_g: i64,
    pub pasta_g: i64,
    pub udon_g: i64,
}

/// Everything computed for one request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Derived {
    pub weight_kg: f64,
    pub body_fat_pct: f64,
    pub lean_mass_kg: f64,
    pub bmr: BmrEstimate,
    pub activity: ActivityLevel,
    pub activity_factor: f64,
    pub tdee_kcal: f64,
    pub target: Option<TargetIntake>,
    pub macro_grams: MacroGrams,
    pub food_equivalents: FoodEquivalents,
}

impl Derived {
    /// Calories the macro split is based on: the target intake, or TDEE.
    pub fn intake_kcal(&self) -> f64 {
        self.target
            .map(|t| t.recommended_intake_kcal)
            .unwrap_or(self.tdee_kcal)
    }

    pub fn low_intake_warning(&self) -> bool {
        self.target.is_some_and(|t| t.is_below_safe_minimum())
    }
}
