use dialoguer::{Confirm, Input, Select};

use crate::calculator::target_loss_options;
use crate::error::{Result, TdeeError};
use crate::models::ActivityLevel;

/// Ask for a number, re-asking until it parses and lies in range.
fn prompt_number(prompt: &str, min: f64, max: Option<f64>) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .validate_with(|text: &String| -> std::result::Result<(), String> {
            let value: f64 = text
                .trim()
                .parse()
                .map_err(|_| "数値で入力してください。例: 70, 20.5 など".to_string())?;
            if !value.is_finite() || value < min {
                return Err(format!("値が小さすぎます。{}以上を入力してください。", min));
            }
            if let Some(max) = max {
                if value > max {
                    return Err(format!("値が大きすぎます。{}以下を入力してください。", max));
                }
            }
            Ok(())
        })
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| TdeeError::InvalidInput(format!("not a number: {}", input)))
}

pub fn prompt_weight() -> Result<f64> {
    prompt_number("体重(kg)を入力してください", 0.0, None)
}

pub fn prompt_body_fat() -> Result<f64> {
    prompt_number("体脂肪率(%)を入力してください", 0.0, Some(100.0))
}

/// Pick an activity level from the five-entry selector.
pub fn prompt_activity() -> Result<ActivityLevel> {
    let items: Vec<String> = ActivityLevel::ALL
        .iter()
        .map(|level| {
            format!(
                "{} = {}（{}, 係数 {}）→ {}",
                level.key(),
                level.label_ja(),
                level.label_en(),
                level.factor(),
                level.description()
            )
        })
        .collect();

    let selection = Select::new()
        .with_prompt("活動レベルを選んでください")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(ActivityLevel::ALL[selection])
}

/// Pick a monthly loss target from the options for `weight_kg`.
///
/// The last entry skips the target and keeps a maintenance intake.
pub fn prompt_target(weight_kg: f64) -> Result<Option<f64>> {
    let options = target_loss_options(weight_kg);
    let mut items: Vec<String> = options
        .iter()
        .map(|kg| format!("{:.1} kg/月", kg))
        .collect();
    items.push("目標なし（維持）".to_string());

    let selection = Select::new()
        .with_prompt("1ヶ月の減量目標を選んでください")
        .items(&items)
        .default(0)
        .interact()?;

    Ok(options.get(selection).copied())
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}
