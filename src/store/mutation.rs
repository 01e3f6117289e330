//! Mutations: the only write path into [`State`](super::State).

use crate::callers::RecentCaller;
use crate::mvi::Intent;

/// A named, synchronous state transformation.
#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    /// Replace the caller list wholesale.
    SetCallers(Vec<RecentCaller>),
    /// Record a failed fetch.
    SetError(String),
    /// Forget the last failure.
    ClearError,
}

impl Intent for Mutation {}

impl Mutation {
    /// `SET_CALLERS` with an optional payload; `None` means an empty list.
    pub fn set_callers(payload: impl Into<Option<Vec<RecentCaller>>>) -> Self {
        Mutation::SetCallers(payload.into().unwrap_or_default())
    }

    /// Name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Mutation::SetCallers(_) => "SET_CALLERS",
            Mutation::SetError(_) => "SET_ERROR",
            Mutation::ClearError => "CLEAR_ERROR",
        }
    }
}
