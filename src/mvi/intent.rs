/// Marker trait for intent objects.
///
/// Intents are either caller actions (picking a destination) or system
/// events (a position fix arrived, a route request completed, a timer fired).
pub trait Intent: Send + 'static {}
