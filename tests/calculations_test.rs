use assert_float_eq::*;

use tdee_calc_rs::calculator::{BmrMode, calculate, compute_bmr, compute_lean_mass};
use tdee_calc_rs::models::{ActivityLevel, Formula, Inputs};
use tdee_calc_rs::TdeeError;

#[test]
fn test_maintenance_scenario() {
    let derived = calculate(&Inputs::new(70.0, 20.0, 3, None), BmrMode::Tiered).unwrap();

    assert_float_absolute_eq!(derived.lean_mass_kg, 56.0, 1e-9);
    assert_eq!(derived.bmr.formula, Formula::Simple);
    assert_float_absolute_eq!(derived.bmr.kcal, 1568.0, 1e-9);
    assert_eq!(derived.activity, ActivityLevel::ModeratelyActive);
    assert_float_absolute_eq!(derived.tdee_kcal, 2430.4, 1e-9);

    // No target: PFC comes from TDEE
    assert!(derived.target.is_none());
    assert_float_absolute_eq!(derived.intake_kcal(), derived.tdee_kcal, 1e-12);
    assert_float_absolute_eq!(derived.macro_grams.protein, 151.9, 1e-9);
}

#[test]
fn test_target_scenario() {
    let derived = calculate(&Inputs::new(70.0, 20.0, 3, Some(2.0)), BmrMode::Tiered).unwrap();
    let target = derived.target.unwrap();

    assert_eq!(target.deficit_per_day_kcal, 513);
    assert_float_absolute_eq!(target.recommended_intake_kcal, 1917.4, 1e-9);
    assert_float_absolute_eq!(target.weekly_loss_kg, 0.5, 1e-12);

    assert_eq!(derived.macro_grams.protein.round(), 120.0);
    assert_float_absolute_eq!(derived.macro_grams.fat, 53.3, 0.05);
    assert_float_absolute_eq!(derived.macro_grams.carb, 239.7, 0.05);
    assert!(!derived.low_intake_warning());
}

#[test]
fn test_formula_per_lean_mass_band() {
    // 50 kg at 30% -> 35 kg lean
    let light = calculate(&Inputs::new(50.0, 30.0, 1, None), BmrMode::Tiered).unwrap();
    assert_eq!(light.bmr.formula, Formula::KatchMcArdle);
    assert_float_absolute_eq!(light.bmr.kcal, 1126.0, 1e-9);
    assert_float_absolute_eq!(light.tdee_kcal, 1351.2, 1e-9);

    // 90 kg at 15% -> 76.5 kg lean
    let heavy = calculate(&Inputs::new(90.0, 15.0, 4, None), BmrMode::Tiered).unwrap();
    assert_eq!(heavy.bmr.formula, Formula::Cunningham);
    assert_float_absolute_eq!(heavy.bmr.kcal, 2183.0, 1e-9);
    assert_float_absolute_eq!(heavy.tdee_kcal, 3765.675, 1e-9);
}

#[test]
fn test_legacy_mode_uses_fixed_factor() {
    let inputs = Inputs::new(90.0, 15.0, 4, None);
    let derived = calculate(&inputs, BmrMode::Legacy).unwrap();
    assert_eq!(derived.bmr.formula, Formula::Simple);
    assert_float_absolute_eq!(derived.bmr.kcal, 28.0 * 76.5, 1e-9);
}

#[test]
fn test_body_fat_extremes() {
    let lean = calculate(&Inputs::new(64.0, 0.0, 2, None), BmrMode::Tiered).unwrap();
    assert_eq!(lean.lean_mass_kg, 64.0);

    let all_fat = calculate(&Inputs::new(64.0, 100.0, 2, None), BmrMode::Tiered).unwrap();
    assert_eq!(all_fat.lean_mass_kg, 0.0);
    assert_eq!(all_fat.bmr.formula, Formula::KatchMcArdle);
    assert_eq!(all_fat.bmr.kcal, 370.0);
}

#[test]
fn test_lean_mass_stays_within_weight() {
    for weight in [0.0, 0.5, 42.0, 70.0, 180.0] {
        for body_fat in [0.0, 12.5, 33.3, 50.0, 99.9, 100.0] {
            let lean = compute_lean_mass(weight, body_fat);
            assert!(lean.is_finite());
            assert!(lean >= 0.0 && lean <= weight, "{} {} -> {}", weight, body_fat, lean);
        }
    }
}

#[test]
fn test_boundary_discontinuities_preserved() {
    assert_eq!(compute_bmr(45.0).kcal, 1260.0);
    assert_eq!(compute_bmr(60.0).kcal, 1680.0);
    assert_eq!(compute_bmr(60.01).formula, Formula::Cunningham);
}

#[test]
fn test_invalid_inputs_rejected() {
    let cases = [
        Inputs::new(-1.0, 20.0, 3, None),
        Inputs::new(70.0, -0.5, 3, None),
        Inputs::new(70.0, 100.1, 3, None),
        Inputs::new(70.0, 20.0, 0, None),
        Inputs::new(70.0, 20.0, 6, None),
        Inputs::new(70.0, 20.0, 3, Some(f64::NAN)),
    ];
    for inputs in &cases {
        assert!(calculate(inputs, BmrMode::Tiered).is_err(), "{:?}", inputs);
    }

    let err = calculate(&Inputs::new(70.0, 20.0, 6, None), BmrMode::Tiered).unwrap_err();
    assert!(matches!(err, TdeeError::InvalidActivityLevel(_)));
    assert!(err.to_string().contains("activity"));
}

#[test]
fn test_aggressive_target_flags_low_intake() {
    // 45 kg lean at 1.2 -> 1512 kcal TDEE, 3 kg/month -> 770 deficit
    let derived = calculate(&Inputs::new(60.0, 25.0, 1, Some(3.0)), BmrMode::Tiered).unwrap();
    assert_float_absolute_eq!(derived.tdee_kcal, 1512.0, 1e-9);
    assert!(derived.low_intake_warning());
}
