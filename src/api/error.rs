//! Error types for synchronizing with the recent-callers endpoint.

use thiserror::Error;

use crate::callers::NormalizeError;

/// Errors that can occur while fetching and reshaping recent callers.
#[derive(Debug, Error)]
pub enum SyncError {
    /// The HTTP client could not be constructed
    #[error("Failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// Network or transport failure
    #[error("Request to '{url}' failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// Server answered with a non-2xx status
    #[error("Server returned {status}: {body}")]
    Status { status: u16, body: String },

    /// Body is not the expected JSON shape
    #[error("Invalid response body: {0}")]
    Decode(#[from] serde_json::Error),

    /// Body decoded but carries no `recent` array
    #[error("Response is missing the `recent` field")]
    MissingRecent,

    /// One element of `recent` could not be reshaped
    #[error("Caller record #{index} is invalid: {source}")]
    Normalize {
        index: usize,
        #[source]
        source: NormalizeError,
    },
}

impl SyncError {
    /// Stable tag for log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            SyncError::Client(_) => "client_error",
            SyncError::Transport { .. } => "transport_error",
            SyncError::Status { .. } => "status_error",
            SyncError::Decode(_) => "decode_error",
            SyncError::MissingRecent => "missing_recent",
            SyncError::Normalize { .. } => "normalize_error",
        }
    }
}
