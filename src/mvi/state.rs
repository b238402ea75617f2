//! Base trait for published view state.

/// Marker trait for state snapshots.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (everything an observer needs to render)
/// - Comparable (PartialEq so no-op transitions are not published)
/// - Shareable across tasks (held in a watch channel)
pub trait ViewState: Clone + PartialEq + Default + Send + Sync + 'static {}
