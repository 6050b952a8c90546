use crate::calculator::constants::{
    TARGET_MAX_KG, TARGET_MAX_WEIGHT_FRACTION, TARGET_MIN_KG, TARGET_STEP_KG,
};

/// Selectable monthly loss targets for a body weight.
///
/// Runs from 1.0 kg up to 4% of body weight, floored to the 0.5 kg step,
/// in 0.5 kg increments, and never past 20 kg. Always contains at least the
/// 1.0 kg minimum.
pub fn target_loss_options(weight_kg: f64) -> Vec<f64> {
    let upper = if weight_kg.is_finite() && weight_kg > 0.0 {
        (weight_kg * TARGET_MAX_WEIGHT_FRACTION).min(TARGET_MAX_KG)
    } else {
        TARGET_MIN_KG
    };
    let upper = TARGET_MIN_KG.max((upper / TARGET_STEP_KG).floor() * TARGET_STEP_KG);

    // Whole steps avoid drift from repeated float addition
    let steps = ((upper - TARGET_MIN_KG) / TARGET_STEP_KG).round() as usize;
    (0..=steps)
        .map(|i| TARGET_MIN_KG + i as f64 * TARGET_STEP_KG)
        .collect()
}
