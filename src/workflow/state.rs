//! State of a route workflow.

use crate::geo::{GeoPoint, Route, RouteRequest};
use crate::mvi::ViewState;

use super::error::ErrorKind;

/// Where the workflow is in the selection → route cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// No destination chosen, or the last attempt could not proceed.
    #[default]
    Idle,
    /// Resolving the origin.
    Locating,
    /// Route request in flight.
    Fetching,
    /// A route result is available (possibly empty).
    Ready,
}

/// Snapshot of a route workflow.
///
/// Produced only by [`WorkflowReducer`](super::WorkflowReducer); presenters
/// receive clones and never write back.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkflowState {
    pub phase: Phase,
    pub origin: Option<GeoPoint>,
    pub destination: Option<GeoPoint>,
    /// `None` until a route is requested; `Some(empty)` when none was found.
    pub route: Option<Route>,
    /// True only while an explicit selection is being resolved or fetched.
    pub loading: bool,
    pub last_error: Option<ErrorKind>,
    /// Generation of the most recent selection. Older results are dropped.
    pub generation: u64,
    /// The origin moved since the displayed route was fetched.
    pub stale_location: bool,
    /// Whether the device may fill in the origin.
    pub auto_fill: bool,
}

impl Default for WorkflowState {
    fn default() -> Self {
        Self {
            phase: Phase::Idle,
            origin: None,
            destination: None,
            route: None,
            loading: false,
            last_error: None,
            generation: 0,
            stale_location: false,
            auto_fill: true,
        }
    }
}

impl ViewState for WorkflowState {}

impl WorkflowState {
    /// An operation started by a selection is in flight.
    pub fn is_busy(&self) -> bool {
        matches!(self.phase, Phase::Locating | Phase::Fetching)
    }

    /// A non-empty route is on display.
    pub fn has_route(&self) -> bool {
        self.route.as_ref().is_some_and(|route| !route.is_empty())
    }

    /// The request for the current endpoints, once both are known.
    pub fn route_request(&self) -> Option<RouteRequest> {
        Some(RouteRequest {
            origin: self.origin?,
            destination: self.destination?,
        })
    }
}
