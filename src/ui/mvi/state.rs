//! Marker trait for reducer-owned state.

/// State objects are replaced wholesale by reducers, compared to detect
/// changes, and start from `Default`.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
