//! Єдиний тип помилок публічного API.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ZvitError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("report has no parseable date")]
    MissingDate,

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, ZvitError>;
