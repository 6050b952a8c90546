pub mod constants;
pub mod formulas;
pub mod targets;

use tracing::debug;

use crate::error::Result;
use crate::models::{BmrEstimate, Derived, Inputs};

pub use constants::*;
pub use formulas::{
    compute_bmr, compute_food_equivalents, compute_legacy_bmr, compute_lean_mass, compute_macros,
    compute_target_intake, compute_tdee, round_half_up,
};
pub use targets::target_loss_options;

/// Which BMR estimate to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BmrMode {
    /// Three formulas keyed on lean mass.
    #[default]
    Tiered,
    /// Fixed 28 × LBM.
    Legacy,
}

impl BmrMode {
    pub fn bmr(self, lean_mass_kg: f64) -> BmrEstimate {
        match self {
            BmrMode::Tiered => compute_bmr(lean_mass_kg),
            BmrMode::Legacy => compute_legacy_bmr(lean_mass_kg),
        }
    }
}

/// Validate `inputs` and run the whole calculation.
///
/// Nothing is computed when validation fails. Without a loss target the
/// PFC split is taken from TDEE.
pub fn calculate(inputs: &Inputs, mode: BmrMode) -> Result<Derived> {
    let valid = inputs.validate()?;

    let lean_mass_kg = compute_lean_mass(valid.weight_kg, valid.body_fat_pct);
    let bmr = mode.bmr(lean_mass_kg);
    let activity_factor = valid.activity.factor();
    let tdee_kcal = compute_tdee(bmr.kcal, activity_factor);
    let target = valid
        .target_loss_kg_per_month
        .map(|loss| compute_target_intake(tdee_kcal, loss));

    let intake = target
        .map(|t| t.recommended_intake_kcal)
        .unwrap_or(tdee_kcal);
    let macro_grams = compute_macros(intake);
    let food_equivalents = compute_food_equivalents(&macro_grams);

    debug!(?mode, lean_mass_kg, tdee_kcal, intake, "calculation complete");

    Ok(Derived {
        weight_kg: valid.weight_kg,
        body_fat_pct: valid.body_fat_pct,
        lean_mass_kg,
        bmr,
        activity: valid.activity,
        activity_factor,
        tdee_kcal,
        target,
        macro_grams,
        food_equivalents,
    })
}
