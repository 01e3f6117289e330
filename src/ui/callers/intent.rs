//! Intents for the caller table selection.

use crate::mvi::Intent;

/// Intents that move or revalidate the selected row.
///
/// Every intent carries the current row count so the reducer stays pure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionIntent {
    /// Move down one row, wrapping to the top.
    Next { len: usize },
    /// Move up one row, wrapping to the bottom.
    Previous { len: usize },
    /// Jump to the first row.
    First { len: usize },
    /// Jump to the last row.
    Last { len: usize },
    /// The caller list was replaced; clamp the selection to the new length.
    Sync { len: usize },
}

impl Intent for SelectionIntent {}
