//! Application state.

use crate::callers::RecentCaller;
use crate::config::BuildInfo;
use crate::mvi::Model;

/// The single application-wide state.
///
/// Only [`StoreReducer`](super::StoreReducer) produces new values of this
/// type once the store exists; everything else reads snapshots.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct State {
    /// True in development mode.
    pub debug: bool,
    /// Build version, `-dev` suffixed in development mode.
    pub version: String,
    /// Declared for startup completion; nothing sets it yet.
    pub is_initialized: bool,
    /// Callers in server response order.
    pub recent_callers: Vec<RecentCaller>,
    /// Message of the most recent failed fetch.
    pub last_error: Option<String>,
}

impl Model for State {}

impl State {
    /// Initial state derived from build mode and version.
    pub fn from_build(build: &BuildInfo) -> Self {
        Self {
            debug: build.mode.is_development(),
            version: build.version_string(),
            is_initialized: false,
            recent_callers: Vec::new(),
            last_error: None,
        }
    }
}
