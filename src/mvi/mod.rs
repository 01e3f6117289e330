//! Model-View-Intent (MVI) primitives.
//!
//! Shared by the application store and the terminal views so that every
//! state transition in the crate flows through the same shape:
//!
//! ```text
//! Intent ──→ Reducer ──→ Model ──→ View
//!    ↑                             │
//!    └─────────────────────────────┘
//! ```
//!
//! - **Model**: a self-contained snapshot of state
//! - **Intent**: a mutation or user action
//! - **Reducer**: pure function that transforms a model based on an intent

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::Model;
