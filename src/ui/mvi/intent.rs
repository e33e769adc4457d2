//! Marker trait for intents.

/// Something that happened: a key press mapped to an action, or the
/// settled result of a backend request.
pub trait Intent: Send + 'static {}
