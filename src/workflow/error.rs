use serde::Serialize;
use thiserror::Error;

use crate::directions::RouteError;
use crate::location::LocationError;

/// Failure recorded in the workflow state.
///
/// Every network or sensor failure is converted into one of these at the
/// boundary where it occurs; none of them propagate to a presenter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// The user refused location access. Origin auto-fill is off.
    PermissionDenied,
    /// The device could not report a position.
    PositionUnavailable,
    /// The directions request never got an answer.
    Transport { message: String },
    /// The directions service answered with an error.
    Service { status: u16, body: String },
    /// The directions service answered with no route.
    NoRouteFound,
}

impl ErrorKind {
    /// User-friendly message for display.
    pub fn user_message(&self) -> &'static str {
        match self {
            ErrorKind::PermissionDenied => "Location access is off, pick an origin instead",
            ErrorKind::PositionUnavailable => "Could not determine your current location",
            ErrorKind::Transport { .. } => "Could not reach the directions service",
            ErrorKind::Service { .. } => "The directions service could not compute a route",
            ErrorKind::NoRouteFound => "No route found between the selected points",
        }
    }

    /// Technical details for diagnostics.
    pub fn details(&self) -> String {
        match self {
            ErrorKind::PermissionDenied => "Location permission denied".to_string(),
            ErrorKind::PositionUnavailable => "Position query failed".to_string(),
            ErrorKind::Transport { message } => format!("Transport error: {}", message),
            ErrorKind::Service { status, body } => format!("HTTP {}: {}", status, body),
            ErrorKind::NoRouteFound => "Response contained no route features".to_string(),
        }
    }

    pub fn severity(&self) -> Severity {
        match self {
            ErrorKind::NoRouteFound => Severity::Info,
            ErrorKind::PermissionDenied | ErrorKind::PositionUnavailable => Severity::Warning,
            ErrorKind::Transport { .. } | ErrorKind::Service { .. } => Severity::Error,
        }
    }
}

/// How loudly a failure should be surfaced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// An expected outcome, not a fault.
    Info,
    Warning,
    Error,
}

impl From<&RouteError> for ErrorKind {
    fn from(err: &RouteError) -> Self {
        match err {
            RouteError::Transport(source) => ErrorKind::Transport {
                message: source.to_string(),
            },
            RouteError::Service { status, body } => ErrorKind::Service {
                status: *status,
                body: body.clone(),
            },
            RouteError::NoRouteFound => ErrorKind::NoRouteFound,
            // A 2xx the client could not decode is still the service's fault.
            RouteError::InvalidResponse { message } => ErrorKind::Service {
                status: 200,
                body: message.clone(),
            },
        }
    }
}

impl From<&LocationError> for ErrorKind {
    fn from(err: &LocationError) -> Self {
        match err {
            LocationError::PermissionDenied | LocationError::Unavailable { .. } => {
                ErrorKind::PositionUnavailable
            }
        }
    }
}

/// Misuse of the workflow API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorkflowError {
    #[error("The origin comes from {0} and cannot be selected")]
    OriginNotSelectable(&'static str),
}
