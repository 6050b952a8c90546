use crate::calculator::{MIN_SAFE_INTAKE_KCAL, round_half_up};
use crate::models::{ActivityLevel, Derived};

/// Text sections of a calculation report.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub input_values: String,
    pub steps: String,
    pub result: String,
    /// Present when a loss target was given.
    pub target_summary: Option<String>,
    pub pfc_summary: String,
    pub low_intake_warning: bool,
}

fn fixed1(value: f64) -> String {
    format!("{:.1}", value)
}

fn fixed0(value: f64) -> String {
    format!("{}", round_half_up(value) as i64)
}

/// Build all report sections from a finished calculation.
pub fn build_report(derived: &Derived) -> Report {
    let level = derived.activity;
    let lbm = fixed1(derived.lean_mass_kg);
    let bmr = fixed1(derived.bmr.kcal);
    let tdee = fixed1(derived.tdee_kcal);
    let formula = derived.bmr.formula;

    let input_values = [
        format!("体重: {} kg", fixed1(derived.weight_kg)),
        format!("体脂肪率: {} %", fixed1(derived.body_fat_pct)),
        format!("除脂肪体重(LBM): {} kg", lbm),
        format!(
            "活動係数: {}（{}/{}）",
            derived.activity_factor,
            level.label_ja(),
            level.label_en()
        ),
    ]
    .join("\n");

    let steps = [
        format!(
            "除脂肪体重 = 体重 × (1 − 体脂肪率/100) = {} × (1 − {}/100) = {} kg",
            fixed1(derived.weight_kg),
            fixed1(derived.body_fat_pct),
            lbm
        ),
        format!(
            "基礎代謝（{}） = {} = {} = {} kcal",
            formula.name(),
            formula.equation(),
            formula.equation().replace("LBM", &lbm),
            bmr
        ),
        format!(
            "総消費カロリー(TDEE) = 基礎代謝 × 活動係数 = {} × {} = {} kcal",
            bmr, derived.activity_factor, tdee
        ),
    ]
    .join("\n");

    let result = [
        format!("除脂肪体重: {} kg", lbm),
        format!("基礎代謝(BMR): {} kcal", bmr),
        format!("使用式: {}", formula.name()),
        format!("活動レベル: {} (係数 {})", level.label_ja(), derived.activity_factor),
        format!("1日あたりの消費カロリー(TDEE): {} kcal", tdee),
    ]
    .join("\n");

    let target_summary = derived.target.map(|t| {
        [
            format!("目標: {} kg/月", fixed1(t.target_loss_kg_per_month)),
            format!("必要赤字: {} kcal/日", t.deficit_per_day_kcal),
            format!("推奨摂取カロリー: {} kcal/日", fixed0(t.recommended_intake_kcal)),
            format!(
                "減量ペース: 週あたり{} kg、月あたり{} kg",
                fixed1(t.weekly_loss_kg),
                fixed1(t.target_loss_kg_per_month)
            ),
        ]
        .join("\n")
    });

    let macros = &derived.macro_grams;
    let food = &derived.food_equivalents;
    let pfc_summary = [
        format!("タンパク質: {} g", fixed0(macros.protein)),
        format!("→ 鶏むね肉 約{} g", food.chicken_g),
        format!("→ 卵 約{} 個", food.eggs),
        format!("脂質: {} g", fixed0(macros.fat)),
        format!("→ 油 約{} 大さじ", fixed1(food.oil_tbsp)),
        format!("炭水化物: {} g", fixed0(macros.carb)),
        format!("→ ご飯 約{} g", food.rice_g),
        format!("→ パスタ 約{} g", food.pasta_g),
        format!("→ うどん 約{} g", food.udon_g),
    ]
    .join("\n");

    Report {
        input_values,
        steps,
        result,
        target_summary,
        pfc_summary,
        low_intake_warning: derived.low_intake_warning(),
    }
}

/// Caution line for intake below the safe minimum.
pub fn low_intake_message() -> String {
    format!(
        "⚠ 推奨摂取カロリーが{}kcalを下回っています。無理のない目標に見直してください。",
        MIN_SAFE_INTAKE_KCAL
    )
}

/// Print a report, one bracketed section at a time.
pub fn display_report(report: &Report) {
    println!();
    println!("[入力値]");
    println!("{}", report.input_values);
    println!();
    println!("[計算過程]");
    println!("{}", report.steps);
    println!();
    println!("[計算結果]");
    println!("{}", report.result);

    if let Some(summary) = &report.target_summary {
        println!();
        println!("[目標]");
        println!("{}", summary);
        if report.low_intake_warning {
            println!("{}", low_intake_message());
        }
    }

    println!();
    println!("[PFCバランス (P25% / F25% / C50%)]");
    println!("{}", report.pfc_summary);
    println!();
}

/// One selector line per level, followed by its hint.
pub fn format_activity_table() -> String {
    ActivityLevel::ALL
        .iter()
        .map(|level| {
            format!(
                " {} = {}（{}, 係数 {}）\n     → {}",
                level.key(),
                level.label_ja(),
                level.label_en(),
                level.factor(),
                level.description()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn display_activity_table() {
    println!("活動レベル:");
    println!("{}", format_activity_table());
}

/// Print selectable monthly targets for a body weight.
pub fn display_target_options(weight_kg: f64, options: &[f64]) {
    println!("体重 {} kg の目標候補:", fixed1(weight_kg));
    for option in options {
        println!("  {} kg/月", fixed1(*option));
    }
}
