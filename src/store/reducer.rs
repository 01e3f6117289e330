//! Reducer for the application store.

use crate::mvi::Reducer;

use super::mutation::Mutation;
use super::state::State;

/// Applies [`Mutation`]s to [`State`].
pub struct StoreReducer;

impl Reducer for StoreReducer {
    type State = State;
    type Intent = Mutation;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Unconditional overwrite: no merge, no diffing.
            Mutation::SetCallers(recent_callers) => State {
                recent_callers,
                ..state
            },
            Mutation::SetError(message) => State {
                last_error: Some(message),
                ..state
            },
            Mutation::ClearError => State {
                last_error: None,
                ..state
            },
        }
    }
}
