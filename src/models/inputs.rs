use serde::{Deserialize, Serialize};

use crate::error::{Result, TdeeError};
use crate::models::ActivityLevel;

/// Raw body-composition inputs for one calculation request.
///
/// Field names double as the CSV header for batch files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Inputs {
    pub weight_kg: f64,
    pub body_fat_pct: f64,
    /// Activity key, 1-5.
    pub activity: i64,
    #[serde(default)]
    pub target_loss_kg_per_month: Option<f64>,
}

/// Inputs that passed validation, with the activity level resolved.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidInputs {
    pub weight_kg: f64,
    pub body_fat_pct: f64,
    pub activity: ActivityLevel,
    pub target_loss_kg_per_month: Option<f64>,
}

impl Inputs {
    pub fn new(
        weight_kg: f64,
        body_fat_pct: f64,
        activity: i64,
        target_loss_kg_per_month: Option<f64>,
    ) -> Self {
        Self {
            weight_kg,
            body_fat_pct,
            activity,
            target_loss_kg_per_month,
        }
    }

    /// Check every field, in order weight, body fat, activity, target.
    pub fn validate(&self) -> Result<ValidInputs> {
        if !(self.weight_kg.is_finite() && self.weight_kg >= 0.0) {
            return Err(TdeeError::InvalidWeight(self.weight_kg));
        }
        if !(self.body_fat_pct.is_finite() && (0.0..=100.0).contains(&self.body_fat_pct)) {
            return Err(TdeeError::InvalidBodyFat(self.body_fat_pct));
        }
        let activity = ActivityLevel::from_key(self.activity)?;
        if let Some(target) = self.target_loss_kg_per_month {
            if !(target.is_finite() && target >= 0.0) {
                return Err(TdeeError::InvalidTargetLoss(target));
            }
        }

        Ok(ValidInputs {
            weight_kg: self.weight_kg,
            body_fat_pct: self.body_fat_pct,
            activity,
            target_loss_kg_per_month: self.target_loss_kg_per_month,
        })
    }
}
