//! Reducer for the caller table selection.

use crate::mvi::Reducer;

use super::intent::SelectionIntent;
use super::state::SelectionState;

/// Reducer for selection state transitions.
pub struct SelectionReducer;

impl Reducer for SelectionReducer {
    type State = SelectionState;
    type Intent = SelectionIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let len = match intent {
            SelectionIntent::Next { len }
            | SelectionIntent::Previous { len }
            | SelectionIntent::First { len }
            | SelectionIntent::Last { len }
            | SelectionIntent::Sync { len } => len,
        };
        if len == 0 {
            return SelectionState { selected: None };
        }
        let last = len - 1;

        let selected = match (intent, state.selected) {
            (SelectionIntent::Next { .. }, None) => 0,
            (SelectionIntent::Next { .. }, Some(i)) => {
                if i >= last {
                    0
                } else {
                    i + 1
                }
            }
            (SelectionIntent::Previous { .. }, None) => last,
            (SelectionIntent::Previous { .. }, Some(i)) => {
                if i == 0 || i > last {
                    last
                } else {
                    i - 1
                }
            }
            (SelectionIntent::First { .. }, _) => 0,
            (SelectionIntent::Last { .. }, _) => last,
            (SelectionIntent::Sync { .. }, None) => 0,
            (SelectionIntent::Sync { .. }, Some(i)) => i.min(last),
        };

        SelectionState {
            selected: Some(selected),
        }
    }
}
