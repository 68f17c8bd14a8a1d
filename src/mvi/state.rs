//! Base trait for state in MVI architecture.

/// Marker trait for state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Comparable (PartialEq for detecting changes)
/// - Defaultable (the empty state a store starts from)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
