use thiserror::Error;

use crate::dataset::models::Rank;
use crate::source::StatCategory;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Navigation to {target} failed: {reason}")]
    NavigationFailure { target: String, reason: String },

    #[error("Champion '{name}' from the {category} rank {rank} table is not in the roster")]
    LookupFailure {
        name: String,
        category: StatCategory,
        rank: Rank,
    },

    #[error("No offense stats for '{name}' at rank {rank} to merge defense stats into")]
    MergeFailure { name: String, rank: Rank },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("HTML error: {0}")]
    HtmlError(String),

    #[error("JSON error: {0}")]
    JsonError(String),

    #[error("IO error: {0}")]
    IoError(String),
}

impl AppError {
    pub fn navigation(target: impl ToString, reason: impl ToString) -> Self {
        AppError::NavigationFailure {
            target: target.to_string(),
            reason: reason.to_string(),
        }
    }
}
