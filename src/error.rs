use thiserror::Error;

#[derive(Debug, Error)]
pub enum TdeeError {
    #[error("Invalid weight: {0} (expected a number >= 0 kg)")]
    InvalidWeight(f64),

    #[error("Invalid body fat: {0} (expected a number between 0 and 100 %)")]
    InvalidBodyFat(f64),

    #[error("Invalid activity level: {0} (expected 1-5 or a level name)")]
    InvalidActivityLevel(String),

    #[error("Invalid target loss: {0} (expected a number >= 0 kg/month)")]
    InvalidTargetLoss(f64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, TdeeError>;
