//! List Manager Errors
//!
//! A remote call has exactly one failure kind, `RequestFailed`, whether the
//! transport broke, the server answered non-2xx, or the body did not decode.

use thiserror::Error;

use crate::record::RecordId;

/// Common result type for list-manager operations
pub type ListResult<T> = Result<T, ListError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ListError {
    #[error("request failed: {method} {url}: {reason}")]
    RequestFailed {
        method: &'static str,
        url: String,
        reason: String,
    },

    #[error("record #{0} is not in the local collection")]
    UnknownRecord(RecordId),

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl ListError {
    pub fn request_failed(method: &'static str, url: &str, reason: impl ToString) -> Self {
        ListError::RequestFailed {
            method,
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    /// True for failures that came back from the remote service
    pub fn is_request_failure(&self) -> bool {
        matches!(self, ListError::RequestFailed { .. })
    }
}

impl From<toml::de::Error> for ListError {
    fn from(e: toml::de::Error) -> Self {
        ListError::Config(e.to_string())
    }
}
