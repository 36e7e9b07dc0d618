/// Marker trait for state snapshots.
///
/// Snapshots are replaced wholesale, never patched, so observers can compare
/// them with `PartialEq` and only re-render on change.
pub trait ViewState: Clone + PartialEq + Default + Send + Sync + 'static {}
