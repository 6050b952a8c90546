// ─────────────────────────────────────────────────────────────────────────────
// BMR formulas (kcal/day from lean body mass in kg)
// ─────────────────────────────────────────────────────────────────────────────

/// Lean mass below this uses Katch–McArdle.
pub const KATCH_MCARDLE_MAX_LBM: f64 = 45.0;

/// Lean mass above this uses Cunningham. 45-60 inclusive uses the simple factor.
pub const CUNNINGHAM_MIN_LBM: f64 = 60.0;

pub const KATCH_MCARDLE_INTERCEPT: f64 = 370.0;
pub const KATCH_MCARDLE_SLOPE: f64 = 21.6;

/// Simple formula factor, also the only factor in legacy mode.
pub const SIMPLE_FACTOR: f64 = 28.0;

pub const CUNNINGHAM_INTERCEPT: f64 = 500.0;
pub const CUNNINGHAM_SLOPE: f64 = 22.0;

// ─────────────────────────────────────────────────────────────────────────────
// Weight-loss targets
// ─────────────────────────────────────────────────────────────────────────────

/// Approximate energy content of 1 kg of body fat.
pub const KCAL_PER_KG_FAT: f64 = 7700.0;

pub const DAYS_PER_MONTH: f64 = 30.0;

/// A month counts as exactly four weeks for the weekly pace.
pub const WEEKS_PER_MONTH: f64 = 4.0;

/// Intake below this triggers the health-caution line.
pub const MIN_SAFE_INTAKE_KCAL: f64 = 1200.0;

/// Smallest selectable monthly target.
pub const TARGET_MIN_KG: f64 = 1.0;

/// Selectable targets advance in this step.
pub const TARGET_STEP_KG: f64 = 0.5;

/// Largest selectable target as a fraction of body weight.
pub const TARGET_MAX_WEIGHT_FRACTION: f64 = 0.04;

/// Hard ceiling on the selectable target, whatever the weight.
pub const TARGET_MAX_KG: f64 = 20.0;

// ─────────────────────────────────────────────────────────────────────────────
// PFC split
// ─────────────────────────────────────────────────────────────────────────────

pub const PROTEIN_SHARE: f64 = 0.25;
pub const FAT_SHARE: f64 = 0.25;
pub const CARB_SHARE: f64 = 0.50;

pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;
pub const KCAL_PER_G_CARB: f64 = 4.0;

// ─────────────────────────────────────────────────────────────────────────────
// Food composition
// ─────────────────────────────────────────────────────────────────────────────

/// Protein grams per 100 g chicken breast.
pub const CHICKEN_PROTEIN_PER_100G: f64 = 32.0;

/// Protein grams per egg.
pub const EGG_PROTEIN_G: f64 = 6.0;

/// Grams of oil in one tablespoon (all fat).
pub const OIL_G_PER_TBSP: f64 = 13.6;

/// Carb grams per 100 g cooked rice.
pub const RICE_CARB_PER_100G: f64 = 28.0;

/// Carb grams per 100 g pasta.
pub const PASTA_CARB_PER_100G: f64 = 25.0;

/// Carb grams per 100 g udon.
pub const UDON_CARB_PER_100G: f64 = 21.0;
