//! Reducer for route workflow state transitions.

use crate::geo::Route;
use crate::mvi::Reducer;

use super::error::ErrorKind;
use super::intent::WorkflowIntent;
use super::state::{Phase, WorkflowState};

/// Reducer for route workflow state transitions.
pub struct WorkflowReducer;

impl Reducer for WorkflowReducer {
    type State = WorkflowState;
    type Intent = WorkflowIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            WorkflowIntent::DestinationSelected {
                destination,
                generation,
            } => WorkflowState {
                phase: Phase::Locating,
                destination: Some(destination),
                loading: true,
                last_error: None,
                generation,
                ..state
            },

            WorkflowIntent::OriginSelected { origin, generation } => {
                if state.destination.is_some() {
                    WorkflowState {
                        phase: Phase::Fetching,
                        origin: Some(origin),
                        loading: true,
                        last_error: None,
                        stale_location: false,
                        generation,
                        ..state
                    }
                } else {
                    WorkflowState {
                        origin: Some(origin),
                        generation,
                        ..state
                    }
                }
            }

            WorkflowIntent::PositionResolved { origin, generation } => {
                if !accepts(&state, generation, Phase::Locating) {
                    return state;
                }
                WorkflowState {
                    phase: Phase::Fetching,
                    origin: Some(origin),
                    stale_location: false,
                    ..state
                }
            }

            WorkflowIntent::PositionFailed { error, generation } => {
                if !accepts(&state, generation, Phase::Locating) {
                    return state;
                }
                // Prior origin and route stay as they were.
                WorkflowState {
                    phase: Phase::Idle,
                    loading: false,
                    last_error: Some(error),
                    ..state
                }
            }

            WorkflowIntent::OriginPending { generation } => {
                if !accepts(&state, generation, Phase::Locating) {
                    return state;
                }
                WorkflowState {
                    phase: Phase::Idle,
                    loading: false,
                    ..state
                }
            }

            WorkflowIntent::RouteFetched {
                route,
                origin,
                generation,
            } => {
                if !accepts(&state, generation, Phase::Fetching) {
                    return state;
                }
                // A tick may have moved the origin while the request was out.
                let stale_location = state.origin != Some(origin);
                WorkflowState {
                    phase: Phase::Ready,
                    route: Some(route),
                    loading: false,
                    last_error: None,
                    stale_location,
                    ..state
                }
            }

            WorkflowIntent::RouteFailed {
                error,
                origin,
                generation,
            } => {
                if !accepts(&state, generation, Phase::Fetching) {
                    return state;
                }
                if error == ErrorKind::NoRouteFound {
                    let stale_location = state.origin != Some(origin);
                    WorkflowState {
                        phase: Phase::Ready,
                        route: Some(Route::empty()),
                        loading: false,
                        last_error: Some(error),
                        stale_location,
                        ..state
                    }
                } else {
                    // Keep the last good route on screen.
                    let phase = if state.has_route() {
                        Phase::Ready
                    } else {
                        Phase::Idle
                    };
                    WorkflowState {
                        phase,
                        loading: false,
                        last_error: Some(error),
                        ..state
                    }
                }
            }

            WorkflowIntent::OriginRefreshed { origin } => {
                if !state.auto_fill {
                    return state;
                }
                let moved = state.origin != Some(origin);
                WorkflowState {
                    origin: Some(origin),
                    stale_location: state.stale_location || (moved && state.has_route()),
                    ..state
                }
            }

            WorkflowIntent::PermissionDenied => WorkflowState {
                auto_fill: false,
                last_error: Some(ErrorKind::PermissionDenied),
                ..state
            },
        }
    }
}

/// A result applies only to the newest selection, in the phase it was for.
fn accepts(state: &WorkflowState, generation: u64, phase: Phase) -> bool {
    state.generation == generation && state.phase == phase
}
