//! Caller table selection feature module.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Selected row
//! - `intent.rs` - Navigation and data-change events
//! - `reducer.rs` - State transitions

mod intent;
mod reducer;
mod state;

pub use intent::SelectionIntent;
pub use reducer::SelectionReducer;
pub use state::SelectionState;
