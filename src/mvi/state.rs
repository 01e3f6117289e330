//! Base trait for models in MVI architecture.

/// Marker trait for state objects.
///
/// Models should be:
/// - Cloneable (snapshots are handed to views)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for detecting changes)
/// - Defaultable (reducers take the current value out with `mem::take`)
pub trait Model: Clone + PartialEq + Default + Send + 'static {}
