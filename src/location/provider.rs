use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;
use thiserror::Error;
use tokio::sync::Mutex as AsyncMutex;

use crate::geo::GeoPoint;

/// Answer to a location permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    Granted,
    Denied,
}

/// Errors a location provider can report.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Position unavailable: {reason}")]
    Unavailable { reason: String },
}

/// Platform location service.
///
/// Implementations may suspend for as long as the platform needs. Callers
/// must not issue concurrent calls against the same provider; wrap it in a
/// [`SerializedProvider`] to share it.
#[async_trait]
pub trait DeviceLocationProvider: Send + Sync {
    /// Ask the user for permission to read the device position.
    async fn request_permission(&self) -> Permission;

    /// Read the current device position.
    async fn current_position(&self) -> Result<GeoPoint, LocationError>;
}

/// Shares one provider between the fetch path and the periodic watch,
/// allowing only one outstanding call at a time.
pub struct SerializedProvider {
    inner: Arc<dyn DeviceLocationProvider>,
    gate: AsyncMutex<()>,
}

impl SerializedProvider {
    pub fn new(inner: Arc<dyn DeviceLocationProvider>) -> Self {
        Self {
            inner,
            gate: AsyncMutex::new(()),
        }
    }

    pub async fn request_permission(&self) -> Permission {
        let _turn = self.gate.lock().await;
        self.inner.request_permission().await
    }

    pub async fn current_position(&self) -> Result<GeoPoint, LocationError> {
        let _turn = self.gate.lock().await;
        self.inner.current_position().await
    }
}

/// Provider reporting a position set by the host (CLI flag, config, tests).
pub struct StaticLocationProvider {
    position: Mutex<Option<GeoPoint>>,
    permission: Permission,
}

impl StaticLocationProvider {
    pub fn new(position: Option<GeoPoint>, permission: Permission) -> Self {
        Self {
            position: Mutex::new(position),
            permission,
        }
    }

    /// Move the reported position. Picked up by the next query.
    pub fn set_position(&self, position: GeoPoint) {
        *self.position.lock() = Some(position);
    }
}

#[async_trait]
impl DeviceLocationProvider for StaticLocationProvider {
    async fn request_permission(&self) -> Permission {
        self.permission
    }

    async fn current_position(&self) -> Result<GeoPoint, LocationError> {
        if self.permission == Permission::Denied {
            return Err(LocationError::PermissionDenied);
        }
        (*self.position.lock()).ok_or_else(|| LocationError::Unavailable {
            reason: "no position has been reported".to_string(),
        })
    }
}
