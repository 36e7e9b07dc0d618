//! Intents that drive the route workflow.

use crate::geo::{GeoPoint, Route};
use crate::mvi::Intent;

use super::error::ErrorKind;

/// Everything that can happen to a route workflow.
///
/// Results of asynchronous work carry the generation of the selection that
/// started them, so a result from a superseded selection can be recognised.
#[derive(Debug, Clone)]
pub enum WorkflowIntent {
    /// A destination was picked; resolve the origin next.
    DestinationSelected { destination: GeoPoint, generation: u64 },

    /// An origin was picked (or fixed). Fetches straight away when a
    /// destination is already known.
    OriginSelected { origin: GeoPoint, generation: u64 },

    /// The origin for this generation is known.
    PositionResolved { origin: GeoPoint, generation: u64 },

    /// The origin for this generation could not be determined.
    PositionFailed { error: ErrorKind, generation: u64 },

    /// The origin must be picked before this generation can continue.
    OriginPending { generation: u64 },

    /// The route for this generation arrived. `origin` is the one it was
    /// requested from.
    RouteFetched {
        route: Route,
        origin: GeoPoint,
        generation: u64,
    },

    /// The route request for this generation failed.
    RouteFailed {
        error: ErrorKind,
        origin: GeoPoint,
        generation: u64,
    },

    /// Periodic background position. Updates the origin only.
    OriginRefreshed { origin: GeoPoint },

    /// The user refused location access.
    PermissionDenied,
}

impl Intent for WorkflowIntent {}
