//! Actions: asynchronous orchestration that commits mutations.
//!
//! Actions never write state directly. Overlapping fetches are not guarded:
//! each commits its own result, so the last one to settle wins.

use std::sync::Arc;

use super::mutation::Mutation;
use super::Store;
use crate::api::{RecentCallersSource, SyncError};
use crate::callers::{normalize, RecentCaller};

/// Entry points views use to trigger work against the store.
#[derive(Clone)]
pub struct Actions {
    store: Store,
    source: Arc<dyn RecentCallersSource>,
}

impl Actions {
    pub fn new(store: Store, source: Arc<dyn RecentCallersSource>) -> Self {
        Self { store, source }
    }

    /// Get a reference to the store.
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Startup hook. Logs build facts; does not touch state.
    pub fn init_app(&self) {
        let (version, is_debug) = self.store.read(|s| (s.version.clone(), s.debug));
        tracing::info!(version = %version, debug = is_debug, "App initialized");
    }

    /// Fetch, reshape, and publish the recent callers.
    ///
    /// On success commits `SET_CALLERS` and `CLEAR_ERROR` as one batch and
    /// returns the number of records. On failure commits `SET_ERROR` and
    /// leaves the caller list untouched.
    pub async fn fetch_recent_callers(&self) -> Result<usize, SyncError> {
        match self.load().await {
            Ok(callers) => {
                let count = callers.len();
                self.store
                    .commit_all([Mutation::set_callers(callers), Mutation::ClearError]);
                tracing::info!(count, "Recent callers updated");
                Ok(count)
            }
            Err(err) => {
                tracing::warn!(kind = err.kind(), error = %err, "Fetching recent callers failed");
                self.store.commit(Mutation::SetError(err.to_string()));
                Err(err)
            }
        }
    }

    async fn load(&self) -> Result<Vec<RecentCaller>, SyncError> {
        let response = self.source.fetch_recent().await?;
        let recent = response.recent.ok_or(SyncError::MissingRecent)?;

        recent
            .into_iter()
            .enumerate()
            .map(|(index, raw)| {
                normalize(raw).map_err(|source| SyncError::Normalize { index, source })
            })
            .collect()
    }
}
