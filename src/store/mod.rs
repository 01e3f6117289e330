//! Application store: state, mutations, and the actions that feed them.
//!
//! # Architecture
//!
//! - `state.rs` - the single application state
//! - `mutation.rs` - named state transformations
//! - `reducer.rs` - applies mutations
//! - `actions.rs` - async orchestration that commits mutations
//!
//! [`Store`] is an owned, cloneable handle. Views read snapshots through it;
//! writes only happen through [`Store::commit`].

mod actions;
mod mutation;
mod reducer;
mod state;

pub use actions::Actions;
pub use mutation::Mutation;
pub use reducer::StoreReducer;
pub use state::State;

use std::sync::Arc;

use parking_lot::RwLock;
use tokio::sync::watch;

use crate::mvi::Reducer;

/// Shared handle to the application state.
///
/// Uses a read-write lock: many concurrent readers (views), exclusive
/// commits. Each commit bumps a revision counter that subscribers can await.
#[derive(Clone)]
pub struct Store {
    inner: Arc<RwLock<State>>,
    revision: Arc<watch::Sender<u64>>,
}

impl Store {
    pub fn new(state: State) -> Self {
        let (revision, _) = watch::channel(0);
        Self {
            inner: Arc::new(RwLock::new(state)),
            revision: Arc::new(revision),
        }
    }

    /// Get a clone of the current state.
    pub fn snapshot(&self) -> State {
        self.inner.read().clone()
    }

    /// Read the current state without cloning it.
    pub fn read<R>(&self, f: impl FnOnce(&State) -> R) -> R {
        let state = self.inner.read();
        f(&*state)
    }

    /// Apply a mutation.
    ///
    /// The write lock is held for the reducer call only, so a mutation is
    /// never observed half-applied.
    pub fn commit(&self, mutation: Mutation) {
        self.commit_all([mutation]);
    }

    /// Apply several mutations under a single write lock.
    ///
    /// Readers and other commits see either none or all of the batch. The
    /// revision is bumped once per batch.
    pub fn commit_all(&self, mutations: impl IntoIterator<Item = Mutation>) {
        let mut names = Vec::new();
        {
            let mut state = self.inner.write();
            for mutation in mutations {
                names.push(mutation.name());
                let current = std::mem::take(&mut *state);
                *state = StoreReducer::reduce(current, mutation);
            }
        }
        if names.is_empty() {
            return;
        }
        self.revision.send_modify(|rev| *rev += 1);
        tracing::debug!(mutations = ?names, revision = self.revision(), "Committed mutations");
    }

    /// Number of commits applied so far.
    pub fn revision(&self) -> u64 {
        *self.revision.borrow()
    }

    /// Subscribe to commit notifications.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_bumps_revision() {
        let store = Store::new(State::default());
        assert_eq!(store.revision(), 0);
        store.commit(Mutation::ClearError);
        store.commit(Mutation::SetError("x".into()));
        assert_eq!(store.revision(), 2);
        assert_eq!(store.read(|s| s.last_error.clone()).as_deref(), Some("x"));
    }

    #[test]
    fn commit_all_applies_batch_as_one_revision() {
        let store = Store::new(State::default());
        store.commit(Mutation::SetError("stale".into()));
        store.commit_all([Mutation::set_callers(None), Mutation::ClearError]);
        assert_eq!(store.revision(), 2);
        assert!(store.read(|s| s.last_error.is_none()));

        store.commit_all(std::iter::empty());
        assert_eq!(store.revision(), 2);
    }

    #[tokio::test]
    async fn subscribers_see_commits() {
        let store = Store::new(State::default());
        let mut rx = store.subscribe();
        store.commit(Mutation::set_callers(None));
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), 1);
    }
}
