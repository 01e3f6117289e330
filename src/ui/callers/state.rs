//! State for the caller table selection.

use crate::mvi::Model;

/// Selected row of the caller table. `None` while the table is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SelectionState {
    pub selected: Option<usize>,
}

impl Model for SelectionState {}

impl SelectionState {
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }
}
