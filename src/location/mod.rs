//! Device location: permission, single-shot position and periodic watch.

mod provider;
mod watch;

pub use provider::{
    DeviceLocationProvider, LocationError, Permission, SerializedProvider, StaticLocationProvider,
};
pub use watch::LocationWatch;
