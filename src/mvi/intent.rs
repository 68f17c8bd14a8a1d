//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent actions dispatched against a store, either by the
/// user (saving a question) or by the system (restoring a persisted profile).
pub trait Intent: Send + 'static {}
