//! Shared test utilities and fakes.

#![allow(dead_code, unused_imports)]

pub mod mock_directions;

use async_trait::async_trait;
use officeroute::directions::{RouteClient, RouteError};
use officeroute::geo::{GeoPoint, Route, RouteRequest};
use officeroute::location::{DeviceLocationProvider, LocationError, Permission};
use officeroute::workflow::{RouteWorkflow, WorkflowState};
use parking_lot::Mutex;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;
use tokio::sync::oneshot;

pub fn point(lon: f64, lat: f64) -> GeoPoint {
    GeoPoint::new(lon, lat).unwrap()
}

/// Write `content` to a temporary file named `name`.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    std::fs::write(&path, content).expect("Failed to write temp file");
    (temp_dir, path)
}

/// Poll `condition` until it holds, or panic.
pub async fn wait_until(mut condition: impl FnMut() -> bool) {
    tokio::time::timeout(Duration::from_secs(5), async {
        while !condition() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await
    .expect("condition not met in time");
}

/// Wait until the workflow state satisfies `predicate`, or panic.
pub async fn wait_for_state(
    workflow: &RouteWorkflow,
    predicate: impl Fn(&WorkflowState) -> bool,
) -> WorkflowState {
    let mut receiver = workflow.subscribe();
    let state = tokio::time::timeout(Duration::from_secs(5), receiver.wait_for(|s| predicate(s)))
        .await
        .expect("timed out waiting for workflow state")
        .expect("workflow state channel closed")
        .clone();
    state
}

// -- Route client fake ----------------------------------------------------------

struct Scripted {
    destination: Option<GeoPoint>,
    result: Result<Route, RouteError>,
    gate: Option<oneshot::Receiver<()>>,
}

/// Route client that replays scripted answers.
///
/// Each call takes the first answer scripted for its destination (or for
/// any destination). With nothing scripted it answers with a straight line
/// from origin to destination.
#[derive(Default)]
pub struct FakeRouteClient {
    calls: Mutex<Vec<RouteRequest>>,
    script: Mutex<Vec<Scripted>>,
}

impl FakeRouteClient {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push(&self, result: Result<Route, RouteError>) {
        self.script.lock().push(Scripted {
            destination: None,
            result,
            gate: None,
        });
    }

    pub fn push_for(&self, destination: GeoPoint, result: Result<Route, RouteError>) {
        self.script.lock().push(Scripted {
            destination: Some(destination),
            result,
            gate: None,
        });
    }

    /// Script an answer for `destination` that is held back until the
    /// returned sender fires (or is dropped).
    pub fn push_gated_for(
        &self,
        destination: GeoPoint,
        result: Result<Route, RouteError>,
    ) -> oneshot::Sender<()> {
        let (release, gate) = oneshot::channel();
        self.script.lock().push(Scripted {
            destination: Some(destination),
            result,
            gate: Some(gate),
        });
        release
    }

    pub fn calls(&self) -> Vec<RouteRequest> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().len()
    }
}

#[async_trait]
impl RouteClient for FakeRouteClient {
    async fn fetch_route(&self, request: &RouteRequest) -> Result<Route, RouteError> {
        self.calls.lock().push(*request);
        let scripted = {
            let mut script = self.script.lock();
            script
                .iter()
                .position(|entry| {
                    entry
                        .destination
                        .map_or(true, |destination| destination == request.destination)
                })
                .map(|index| script.remove(index))
        };
        match scripted {
            Some(Scripted { result, gate, .. }) => {
                if let Some(gate) = gate {
                    let _ = gate.await;
                }
                result
            }
            None => Ok(Route::new(vec![request.origin, request.destination])),
        }
    }
}

// -- Location provider fake -----------------------------------------------------

/// Location provider with a settable answer that counts its calls.
pub struct FakeLocationProvider {
    permission: Permission,
    answer: Mutex<Result<GeoPoint, LocationError>>,
    position_calls: AtomicUsize,
    permission_calls: AtomicUsize,
}

impl FakeLocationProvider {
    pub fn at(position: GeoPoint) -> Arc<Self> {
        Arc::new(Self {
            permission: Permission::Granted,
            answer: Mutex::new(Ok(position)),
            position_calls: AtomicUsize::new(0),
            permission_calls: AtomicUsize::new(0),
        })
    }

    pub fn denied() -> Arc<Self> {
        Arc::new(Self {
            permission: Permission::Denied,
            answer: Mutex::new(Err(LocationError::PermissionDenied)),
            position_calls: AtomicUsize::new(0),
            permission_calls: AtomicUsize::new(0),
        })
    }

    pub fn move_to(&self, position: GeoPoint) {
        *self.answer.lock() = Ok(position);
    }

    pub fn fail(&self, reason: &str) {
        *self.answer.lock() = Err(LocationError::Unavailable {
            reason: reason.to_string(),
        });
    }

    pub fn position_calls(&self) -> usize {
        self.position_calls.load(Ordering::SeqCst)
    }

    pub fn permission_calls(&self) -> usize {
        self.permission_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DeviceLocationProvider for FakeLocationProvider {
    async fn request_permission(&self) -> Permission {
        self.permission_calls.fetch_add(1, Ordering::SeqCst);
        self.permission
    }

    async fn current_position(&self) -> Result<GeoPoint, LocationError> {
        self.position_calls.fetch_add(1, Ordering::SeqCst);
        self.answer.lock().clone()
    }
}
