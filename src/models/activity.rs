use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::error::{Result, TdeeError};

/// Minimum Jaro-Winkler score for a name to resolve to a level.
const NAME_MATCH_THRESHOLD: f64 = 0.8;

/// Self-reported activity level used to scale BMR into TDEE.
///
/// Keys 1-5 are the public identifiers shown in the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityLevel {
    Sedentary,
    LightlyActive,
    ModeratelyActive,
    VeryActive,
    ExtraActive,
}

impl ActivityLevel {
    /// All levels in key order.
    pub const ALL: [ActivityLevel; 5] = [
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];

    pub fn key(self) -> u8 {
        match self {
            ActivityLevel::Sedentary => 1,
            ActivityLevel::LightlyActive => 2,
            ActivityLevel::ModeratelyActive => 3,
            ActivityLevel::VeryActive => 4,
            ActivityLevel::ExtraActive => 5,
        }
    }

    /// Multiplier applied to BMR.
    pub fn factor(self) -> f64 {
        match self {
            ActivityLevel::Sedentary => 1.2,
            ActivityLevel::LightlyActive => 1.375,
            ActivityLevel::ModeratelyActive => 1.55,
            ActivityLevel::VeryActive => 1.725,
            ActivityLevel::ExtraActive => 1.9,
        }
    }

    pub fn label_ja(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "座りがち",
            ActivityLevel::LightlyActive => "軽い運動",
            ActivityLevel::ModeratelyActive => "中程度の運動",
            ActivityLevel::VeryActive => "非常に活発",
            ActivityLevel::ExtraActive => "極めて活発",
        }
    }

    pub fn label_en(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly Active",
            ActivityLevel::ModeratelyActive => "Moderately Active",
            ActivityLevel::VeryActive => "Very Active",
            ActivityLevel::ExtraActive => "Extra Active",
        }
    }

    /// Hint text shown under the selector.
    pub fn description(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "デスクワーク中心、通勤や買い物以外ほとんど歩かない",
            ActivityLevel::LightlyActive => {
                "週1〜3回の軽い運動（散歩・軽いウォーキング）、立ち仕事が多め"
            }
            ActivityLevel::ModeratelyActive => {
                "週3〜5回の運動（速歩ウォーキング・軽いジョギング・サイクリング・ヨガなど）"
            }
            ActivityLevel::VeryActive => {
                "ほぼ毎日の運動（ランニング・水泳・筋トレ・登山など）、肉体労働が中心の仕事"
            }
            ActivityLevel::ExtraActive => {
                "1日2回のトレーニングを行うアスリート、建設業・農業など非常に体を使う仕事"
            }
        }
    }

    /// Look up a level by its 1-5 key.
    pub fn from_key(key: i64) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|level| i64::from(level.key()) == key)
            .ok_or_else(|| TdeeError::InvalidActivityLevel(key.to_string()))
    }

    /// Resolve user text: a numeric key, or a level name in either locale.
    ///
    /// Names are matched exactly first (case-insensitive, ignoring spaces,
    /// hyphens and underscores), then by the closest Jaro-Winkler score.
    pub fn resolve(text: &str) -> Result<Self> {
        let text = text.trim();
        if let Ok(key) = text.parse::<i64>() {
            return Self::from_key(key);
        }

        let wanted = normalize(text);
        if wanted.is_empty() {
            return Err(TdeeError::InvalidActivityLevel(text.to_string()));
        }

        let exact = Self::ALL.into_iter().find(|level| {
            normalize(level.label_en()) == wanted || normalize(level.label_ja()) == wanted
        });
        if let Some(level) = exact {
            return Ok(level);
        }

        Self::ALL
            .into_iter()
            .map(|level| {
                let score = jaro_winkler(&normalize(level.label_en()), &wanted)
                    .max(jaro_winkler(&normalize(level.label_ja()), &wanted));
                (level, score)
            })
            .filter(|(_, score)| *score > NAME_MATCH_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(level, _)| level)
            .ok_or_else(|| TdeeError::InvalidActivityLevel(text.to_string()))
    }
}

fn normalize(name: &str) -> String {
    name.chars()
        .filter(|c| !matches!(c, ' ' | '-' | '_'))
        .flat_map(char::to_lowercase)
        .collect()
}
