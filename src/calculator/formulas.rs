use tracing::debug;

use crate::calculator::constants::*;
use crate::models::{BmrEstimate, FoodEquivalents, Formula, MacroGrams, TargetIntake};

/// Round to the nearest integer, halves toward positive infinity.
pub fn round_half_up(value: f64) -> f64 {
    let rounded = value.round();
    if value - rounded == 0.5 {
        rounded + 1.0
    } else {
        rounded
    }
}

/// Lean body mass in kg.
///
/// Formula: weight × (1 − body_fat / 100)
#[inline]
pub fn compute_lean_mass(weight_kg: f64, body_fat_pct: f64) -> f64 {
    weight_kg * (1.0 - body_fat_pct / 100.0)
}

/// BMR with the formula chosen from lean mass.
///
/// - below 45 kg: Katch–McArdle
/// - 45 to 60 kg inclusive: simple 28 × LBM
/// - above 60 kg: Cunningham
///
/// Both 45 and 60 fall in the simple branch, so the result jumps at each
/// boundary.
pub fn compute_bmr(lean_mass_kg: f64) -> BmrEstimate {
    let estimate = if lean_mass_kg < KATCH_MCARDLE_MAX_LBM {
        BmrEstimate {
            kcal: KATCH_MCARDLE_INTERCEPT + KATCH_MCARDLE_SLOPE * lean_mass_kg,
            formula: Formula::KatchMcArdle,
        }
    } else if lean_mass_kg <= CUNNINGHAM_MIN_LBM {
        BmrEstimate {
            kcal: SIMPLE_FACTOR * lean_mass_kg,
            formula: Formula::Simple,
        }
    } else {
        BmrEstimate {
            kcal: CUNNINGHAM_INTERCEPT + CUNNINGHAM_SLOPE * lean_mass_kg,
            formula: Formula::Cunningham,
        }
    };

    debug!(
        lean_mass_kg,
        formula = ?estimate.formula,
        bmr_kcal = estimate.kcal,
        "selected BMR formula"
    );
    estimate
}

/// BMR with the fixed 28 × LBM factor, no branching.
pub fn compute_legacy_bmr(lean_mass_kg: f64) -> BmrEstimate {
    BmrEstimate {
        kcal: SIMPLE_FACTOR * lean_mass_kg,
        formula: Formula::Simple,
    }
}

#[inline]
pub fn compute_tdee(bmr_kcal: f64, activity_factor: f64) -> f64 {
    bmr_kcal * activity_factor
}

/// Daily deficit and intake needed to lose `target_loss_kg_per_month`.
pub fn compute_target_intake(tdee_kcal: f64, target_loss_kg_per_month: f64) -> TargetIntake {
    let deficit =
        round_half_up(target_loss_kg_per_month * KCAL_PER_KG_FAT / DAYS_PER_MONTH) as i64;
    let intake = tdee_kcal - deficit as f64;

    debug!(
        target_loss_kg_per_month,
        deficit_per_day_kcal = deficit,
        recommended_intake_kcal = intake,
        "computed target intake"
    );

    TargetIntake {
        target_loss_kg_per_month,
        deficit_per_day_kcal: deficit,
        recommended_intake_kcal: intake,
        weekly_loss_kg: target_loss_kg_per_month / WEEKS_PER_MONTH,
    }
}

/// Fixed 25/25/50 PFC split of `intake_kcal`, in grams.
pub fn compute_macros(intake_kcal: f64) -> MacroGrams {
    MacroGrams {
        protein: intake_kcal * PROTEIN_SHARE / KCAL_PER_G_PROTEIN,
        fat: intake_kcal * FAT_SHARE / KCAL_PER_G_FAT,
        carb: intake_kcal * CARB_SHARE / KCAL_PER_G_CARB,
    }
}

pub fn compute_food_equivalents(macros: &MacroGrams) -> FoodEquivalents {
    FoodEquivalents {
        chicken_g: per_100g(macros.protein, CHICKEN_PROTEIN_PER_100G),
        eggs: round_half_up(macros.protein / EGG_PROTEIN_G) as i64,
        oil_tbsp: macros.fat / OIL_G_PER_TBSP,
        rice_g: per_100g(macros.carb, RICE_CARB_PER_100G),
        pasta_g: per_100g(macros.carb, PASTA_CARB_PER_100G),
        udon_g: per_100g(macros.carb, UDON_CARB_PER_100G),
    }
}

/// Grams of a food holding `nutrient_g`, given its content per 100 g.
fn per_100g(nutrient_g: f64, content_per_100g: f64) -> i64 {
    round_half_up(nutrient_g / content_per_100g * 100.0) as i64
}
