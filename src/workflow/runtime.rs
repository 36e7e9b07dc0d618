use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use tokio::sync::watch;
use tokio::task::{AbortHandle, JoinHandle};

use crate::directions::RouteClient;
use crate::geo::{GeoPoint, RouteRequest};
use crate::location::{DeviceLocationProvider, LocationWatch, Permission, SerializedProvider};
use crate::mvi::Reducer;

use super::error::{ErrorKind, WorkflowError};
use super::intent::WorkflowIntent;
use super::liveness::Liveness;
use super::reducer::WorkflowReducer;
use super::state::WorkflowState;

/// Where the origin of a route comes from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OriginSource {
    /// Ask the device for its position on every destination change.
    Device,
    /// Always start from the same point.
    Fixed(GeoPoint),
    /// The caller picks the origin with [`RouteWorkflow::select_origin`].
    Selected,
}

impl OriginSource {
    fn label(&self) -> &'static str {
        match self {
            OriginSource::Device => "the device",
            OriginSource::Fixed(_) => "a fixed point",
            OriginSource::Selected => "a selection",
        }
    }
}

struct Shared {
    state: watch::Sender<WorkflowState>,
    /// Mirrors `state.generation` so in-flight work can check it without
    /// touching the channel lock.
    generation: AtomicU64,
    liveness: Liveness,
    source: OriginSource,
    provider: Arc<SerializedProvider>,
    client: Arc<dyn RouteClient>,
}

impl Shared {
    /// Apply one intent as a whole-state replacement.
    ///
    /// The liveness check runs under the channel's write lock, so nothing
    /// lands after [`end`](Self::end) returns.
    fn dispatch(&self, intent: WorkflowIntent) -> bool {
        self.state.send_if_modified(|state| {
            if !self.liveness.is_alive() {
                return false;
            }
            let next = WorkflowReducer::reduce(state.clone(), intent);
            if next == *state {
                return false;
            }
            *state = next;
            true
        })
    }

    /// Start a new generation and apply the selection that opens it.
    ///
    /// Returns `None` once the workflow has ended.
    fn begin(&self, intent: impl FnOnce(u64) -> WorkflowIntent) -> Option<u64> {
        let mut started = None;
        self.state.send_if_modified(|state| {
            if !self.liveness.is_alive() {
                return false;
            }
            let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
            started = Some(generation);
            *state = WorkflowReducer::reduce(state.clone(), intent(generation));
            true
        });
        started
    }

    fn end(&self) -> bool {
        let mut ended = false;
        self.state.send_if_modified(|_| {
            ended = self.liveness.end();
            false
        });
        ended
    }

    fn is_current(&self, generation: u64) -> bool {
        self.liveness.is_alive() && self.generation.load(Ordering::SeqCst) == generation
    }

    async fn resolve_and_fetch(&self, generation: u64, destination: GeoPoint) {
        let Some(origin) = self.resolve_origin(generation).await else {
            return;
        };
        if !self.is_current(generation) {
            tracing::debug!(generation, "Dropping position for superseded selection");
            return;
        }
        self.dispatch(WorkflowIntent::PositionResolved { origin, generation });
        self.fetch(generation, RouteRequest { origin, destination }).await;
    }

    async fn resolve_origin(&self, generation: u64) -> Option<GeoPoint> {
        match self.source {
            OriginSource::Fixed(origin) => Some(origin),
            OriginSource::Selected => {
                let origin = self.state.borrow().origin;
                if origin.is_none() {
                    self.dispatch(WorkflowIntent::OriginPending { generation });
                }
                origin
            }
            OriginSource::Device => {
                let auto_fill = self.state.borrow().auto_fill;
                if !auto_fill {
                    self.dispatch(WorkflowIntent::PositionFailed {
                        error: ErrorKind::PositionUnavailable,
                        generation,
                    });
                    return None;
                }
                match self.provider.current_position().await {
                    Ok(origin) => Some(origin),
                    Err(err) => {
                        tracing::warn!(error = %err, "Could not determine current position");
                        self.dispatch(WorkflowIntent::PositionFailed {
                            error: ErrorKind::from(&err),
                            generation,
                        });
                        None
                    }
                }
            }
        }
    }

    async fn fetch(&self, generation: u64, request: RouteRequest) {
        tracing::debug!(generation, origin = %request.origin, destination = %request.destination, "Requesting route");
        let result = self.client.fetch_route(&request).await;
        if !self.is_current(generation) {
            tracing::debug!(generation, "Discarding route result for superseded selection");
            return;
        }
        match result {
            Ok(route) => {
                tracing::debug!(generation, points = route.points.len(), "Route received");
                self.dispatch(WorkflowIntent::RouteFetched {
                    route,
                    origin: request.origin,
                    generation,
                });
            }
            Err(err) => {
                tracing::warn!(generation, error = %err, "Route request failed");
                self.dispatch(WorkflowIntent::RouteFailed {
                    error: ErrorKind::from(&err),
                    origin: request.origin,
                    generation,
                });
            }
        }
    }

    async fn refresh_origin(self: Arc<Self>, poll_interval: Duration) {
        match self.provider.current_position().await {
            Ok(origin) => {
                self.dispatch(WorkflowIntent::OriginRefreshed { origin });
            }
            Err(err) => tracing::debug!(error = %err, "No initial position"),
        }

        let mut positions = LocationWatch::spawn(Arc::clone(&self.provider), poll_interval);
        loop {
            tokio::select! {
                _ = self.liveness.ended() => break,
                position = positions.next() => match position {
                    Some(origin) => {
                        self.dispatch(WorkflowIntent::OriginRefreshed { origin });
                    }
                    None => break,
                },
            }
        }
        positions.cancel();
    }
}

/// Drives one route workflow: selections in, [`WorkflowState`] snapshots out.
///
/// Must be used from within a tokio runtime. Dropping the workflow shuts it
/// down.
pub struct RouteWorkflow {
    inner: Arc<Shared>,
    in_flight: Mutex<Option<AbortHandle>>,
    tick_task: Mutex<Option<JoinHandle<()>>>,
}

impl RouteWorkflow {
    /// Create a workflow and start its background origin refresh.
    ///
    /// With [`OriginSource::Device`] this asks for location permission first.
    /// A refusal is recorded in the state and turns origin auto-fill off.
    pub async fn start(
        source: OriginSource,
        provider: Arc<dyn DeviceLocationProvider>,
        client: Arc<dyn RouteClient>,
        poll_interval: Duration,
    ) -> Self {
        let (state, _) = watch::channel(WorkflowState::default());
        let inner = Arc::new(Shared {
            state,
            generation: AtomicU64::new(0),
            liveness: Liveness::new(),
            source,
            provider: Arc::new(SerializedProvider::new(provider)),
            client,
        });

        let workflow = Self {
            inner,
            in_flight: Mutex::new(None),
            tick_task: Mutex::new(None),
        };

        match source {
            OriginSource::Device => match workflow.inner.provider.request_permission().await {
                Permission::Granted => {
                    let task = tokio::spawn(Arc::clone(&workflow.inner).refresh_origin(poll_interval));
                    *workflow.tick_task.lock() = Some(task);
                }
                Permission::Denied => {
                    tracing::warn!("Location permission denied, origin auto-fill disabled");
                    workflow.inner.dispatch(WorkflowIntent::PermissionDenied);
                }
            },
            OriginSource::Fixed(origin) => {
                workflow
                    .inner
                    .begin(|generation| WorkflowIntent::OriginSelected { origin, generation });
            }
            OriginSource::Selected => {}
        }

        workflow
    }

    pub fn source(&self) -> OriginSource {
        self.inner.source
    }

    /// Pick a destination. Supersedes any selection still in flight.
    pub fn select_destination(&self, destination: GeoPoint) {
        // Held across begin + spawn so the stored task is always the newest.
        let mut in_flight = self.in_flight.lock();
        let Some(generation) = self.inner.begin(|generation| WorkflowIntent::DestinationSelected {
            destination,
            generation,
        }) else {
            return;
        };
        tracing::debug!(generation, %destination, "Destination selected");

        let shared = Arc::clone(&self.inner);
        let task = tokio::spawn(async move { shared.resolve_and_fetch(generation, destination).await });
        if let Some(previous) = in_flight.replace(task.abort_handle()) {
            previous.abort();
        }
    }

    /// Pick the origin. Only valid for [`OriginSource::Selected`].
    ///
    /// Fetches a route straight away when a destination is already set.
    pub fn select_origin(&self, origin: GeoPoint) -> Result<(), WorkflowError> {
        if self.inner.source != OriginSource::Selected {
            return Err(WorkflowError::OriginNotSelectable(self.inner.source.label()));
        }

        let mut in_flight = self.in_flight.lock();
        let Some(generation) = self
            .inner
            .begin(|generation| WorkflowIntent::OriginSelected { origin, generation })
        else {
            return Ok(());
        };
        tracing::debug!(generation, %origin, "Origin selected");

        let destination = self.inner.state.borrow().destination;
        if let Some(destination) = destination {
            let shared = Arc::clone(&self.inner);
            let request = RouteRequest { origin, destination };
            let task = tokio::spawn(async move { shared.fetch(generation, request).await });
            if let Some(previous) = in_flight.replace(task.abort_handle()) {
                previous.abort();
            }
        }
        Ok(())
    }

    pub fn subscribe(&self) -> watch::Receiver<WorkflowState> {
        self.inner.state.subscribe()
    }

    pub fn snapshot(&self) -> WorkflowState {
        self.inner.state.borrow().clone()
    }

    /// Wait until no selection is being resolved or fetched.
    ///
    /// Returns the last state immediately once the workflow is shut down.
    pub async fn settled(&self) -> WorkflowState {
        let mut receiver = self.subscribe();
        let settled = async {
            receiver
                .wait_for(|state| !state.is_busy())
                .await
                .map(|state| state.clone())
        };
        tokio::select! {
            result = settled => result.unwrap_or_else(|_| self.snapshot()),
            _ = self.inner.liveness.ended() => self.snapshot(),
        }
    }

    pub fn is_alive(&self) -> bool {
        self.inner.liveness.is_alive()
    }

    /// Stop the workflow. No result lands in the state afterwards.
    pub fn shutdown(&self) {
        if self.inner.end() {
            tracing::debug!("Route workflow shut down");
        }
        if let Some(task) = self.in_flight.lock().take() {
            task.abort();
        }
        if let Some(task) = self.tick_task.lock().take() {
            task.abort();
        }
    }
}

impl Drop for RouteWorkflow {
    fn drop(&mut self) {
        self.shutdown();
    }
}
