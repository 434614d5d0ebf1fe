//! Marker trait for intents.

/// Something that happened and may change state: a key press mapped to a
/// table control, or the completion of the catalog fetch.
pub trait Intent: Send + 'static {}
