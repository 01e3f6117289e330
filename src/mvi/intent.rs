//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Store mutations committed by actions
/// - User actions (key presses)
/// - System events (fetch completion, data changes)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
