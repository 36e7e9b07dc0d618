use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;

use crate::config::{ConfigError, DirectionsConfig, SecureString};
use crate::geo::{GeoPoint, Route, RouteRequest};

use super::error::RouteError;
use super::wire::{DirectionsBody, FeatureCollection};
use super::RouteClient;

/// [`RouteClient`] backed by an OpenRouteService-compatible HTTP API.
pub struct OrsRouteClient {
    client: Client,
    endpoint: String,
    api_key: SecureString,
}

impl OrsRouteClient {
    pub fn new(
        base_url: &str,
        profile: &str,
        api_key: SecureString,
        connect_timeout: Duration,
        timeout: Duration,
    ) -> Result<Self, ConfigError> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(timeout)
            .build()
            .map_err(ConfigError::HttpClient)?;

        Ok(Self {
            client,
            endpoint: format!(
                "{}/v2/directions/{}/geojson",
                base_url.trim_end_matches('/'),
                profile
            ),
            api_key,
        })
    }

    /// Build a client from config, resolving the API key.
    pub fn from_config(config: &DirectionsConfig) -> Result<Self, ConfigError> {
        Self::new(
            &config.base_url,
            &config.profile,
            config.api_key()?,
            config.connect_timeout(),
            config.timeout(),
        )
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl RouteClient for OrsRouteClient {
    async fn fetch_route(&self, request: &RouteRequest) -> Result<Route, RouteError> {
        let body = DirectionsBody::from(request);
        tracing::debug!(
            endpoint = %self.endpoint,
            origin = %request.origin,
            destination = %request.destination,
            "Requesting route"
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION, self.api_key.expose())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json, application/geo+json")
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(endpoint = %self.endpoint, error = %e, "Directions request failed");
                RouteError::Transport(e)
            })?;

        let status = response.status();
        let text = response.text().await.map_err(RouteError::Transport)?;

        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), body = %text, "Directions service error");
            return Err(RouteError::Service {
                status: status.as_u16(),
                body: text,
            });
        }

        decode_route(&text)
    }
}

/// Decode a success body into a route, swapping wire `[lon, lat]` pairs into
/// [`GeoPoint`]s and keeping wire order.
pub fn decode_route(text: &str) -> Result<Route, RouteError> {
    let collection: FeatureCollection =
        serde_json::from_str(text).map_err(|e| RouteError::InvalidResponse {
            message: e.to_string(),
        })?;

    let Some(feature) = collection.features.and_then(|f| f.into_iter().next()) else {
        return Err(RouteError::NoRouteFound);
    };

    if feature.geometry.coordinates.is_empty() {
        return Err(RouteError::NoRouteFound);
    }

    let points = feature
        .geometry
        .coordinates
        .iter()
        .enumerate()
        .map(|(i, pair)| {
            GeoPoint::from_position(pair).map_err(|e| RouteError::InvalidResponse {
                message: format!("coordinate {}: {}", i, e),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Route::new(points))
}
