use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

use super::MatchResult;

/// The most recently submitted ranking
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredResult {
    pub matches: Vec<MatchResult>,
    pub timestamp: DateTime<Utc>,
}

/// Payload for submitting a finished ranking
#[derive(Debug, Deserialize)]
pub struct SubmitResultRequest {
    #[serde(default)]
    pub matches: Option<Vec<MatchResult>>,
    /// Defaults to the time of submission when absent
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

impl SubmitResultRequest {
    /// Validates the payload and stamps it for storage
    pub fn into_stored(self, now: DateTime<Utc>) -> AppResult<StoredResult> {
        let matches = match self.matches {
            Some(matches) if !matches.is_empty() => matches,
            _ => return Err(AppError::InvalidInput("Invalid result data".to_string())),
        };

        if matches.iter().any(|m| m.percentage > 100) {
            return Err(AppError::InvalidInput("Invalid result data".to_string()));
        }

        Ok(StoredResult {
            matches,
            timestamp: self.timestamp.unwrap_or(now),
        })
    }
}
