//! Core trait for recent-callers sources.

use async_trait::async_trait;

use super::error::SyncError;
use crate::callers::RecentResponse;

/// Something that can produce the raw recent-callers document.
///
/// Implemented by [`CallerApi`](super::CallerApi) over HTTP and by test
/// doubles that control timing and payloads.
#[async_trait]
pub trait RecentCallersSource: Send + Sync {
    /// Fetch the current recent-callers document.
    ///
    /// Implementations must not retry; a failure is reported as-is.
    async fn fetch_recent(&self) -> Result<RecentResponse, SyncError>;
}
