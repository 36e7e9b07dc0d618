use thiserror::Error;

use super::wire::OrsErrorPayload;

/// Errors a [`RouteClient`](super::RouteClient) can return.
#[derive(Debug, Error)]
pub enum RouteError {
    /// The request never produced a response (timeout, DNS, refused).
    #[error("Directions request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The service answered with a non-success status.
    #[error("Directions service returned {status}: {body}")]
    Service { status: u16, body: String },

    /// The service answered successfully but with no route.
    #[error("No route found between the selected points")]
    NoRouteFound,

    /// A success response that could not be decoded.
    #[error("Invalid directions response: {message}")]
    InvalidResponse { message: String },
}

impl RouteError {
    /// The service's own error message, when the body carries one.
    ///
    /// Falls back to the raw body for unstructured errors.
    pub fn service_message(&self) -> Option<String> {
        match self {
            RouteError::Service { body, .. } => {
                match serde_json::from_str::<OrsErrorPayload>(body) {
                    Ok(payload) => Some(match payload.error.code {
                        Some(code) => format!("{} (code {})", payload.error.message, code),
                        None => payload.error.message,
                    }),
                    Err(_) => Some(body.clone()),
                }
            }
            _ => None,
        }
    }
}
