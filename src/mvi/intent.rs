//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents represent:
/// - Fetch lifecycle events (started, loaded, failed)
/// - User input (search text)
///
/// Intents are processed by reducers to produce new states.
pub trait Intent: Send + 'static {}
