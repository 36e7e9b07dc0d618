//! Driving directions from a remote routing service.
//!
//! A [`RouteClient`] turns a [`RouteRequest`] into a [`Route`]. It performs a
//! single attempt per call; retrying and deduplication belong to the caller.

mod client;
mod error;
mod wire;

use async_trait::async_trait;

use crate::geo::{Route, RouteRequest};

pub use client::{decode_route, OrsRouteClient};
pub use error::RouteError;

/// Source of driving routes between two points.
#[async_trait]
pub trait RouteClient: Send + Sync {
    /// Fetch the route from `request.origin` to `request.destination`.
    ///
    /// # Returns
    /// * `Ok(Route)` - Non-empty path in travel order
    /// * `Err(RouteError::NoRouteFound)` - The service found nothing
    /// * `Err(_)` - Transport or service failure
    async fn fetch_route(&self, request: &RouteRequest) -> Result<Route, RouteError>;
}
