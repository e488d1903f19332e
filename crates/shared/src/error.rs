use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    MalformedDeepLink,
    UnknownDay,
    NavigationHistoryUnavailable,
    MissingProgramData,
    Validation,
}

/// Every variant is recoverable: callers degrade to "nothing shown" or a no-op.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AgendaError {
    #[error("malformed deep link fragment '{fragment}'")]
    MalformedDeepLink { fragment: String },
    #[error("no day scheduled on {date}")]
    UnknownDay { date: String },
    #[error("navigation history unavailable: {reason}")]
    NavigationHistoryUnavailable { reason: String },
    #[error("program has no days")]
    MissingProgramData,
    #[error("invalid calendar date (expected YYYY-MM-DD): {0}")]
    InvalidDate(String),
    #[error("invalid time of day (expected HH:MM): {0}")]
    InvalidTime(String),
}

impl AgendaError {
    pub fn history_unavailable(reason: impl Into<String>) -> Self {
        Self::NavigationHistoryUnavailable {
            reason: reason.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        match self {
            AgendaError::MalformedDeepLink { .. } => ErrorCode::MalformedDeepLink,
            AgendaError::UnknownDay { .. } => ErrorCode::UnknownDay,
            AgendaError::NavigationHistoryUnavailable { .. } => {
                ErrorCode::NavigationHistoryUnavailable
            }
            AgendaError::MissingProgramData => ErrorCode::MissingProgramData,
            AgendaError::InvalidDate(_) | AgendaError::InvalidTime(_) => ErrorCode::Validation,
        }
    }
}
