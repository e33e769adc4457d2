//! Marker trait for UI state.

/// State is a plain value: cloneable, comparable, with an initial default.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
