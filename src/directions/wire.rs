// Wire shapes for the directions API (GeoJSON flavour).

use serde::{Deserialize, Serialize};

use crate::geo::RouteRequest;

/// Request body: `{"coordinates": [[lon, lat], [lon, lat]]}`, origin first.
#[derive(Debug, Serialize)]
pub(crate) struct DirectionsBody {
    pub coordinates: [[f64; 2]; 2],
}

impl From<&RouteRequest> for DirectionsBody {
    fn from(request: &RouteRequest) -> Self {
        Self {
            coordinates: [request.origin.to_lon_lat(), request.destination.to_lon_lat()],
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct FeatureCollection {
    #[serde(default)]
    pub features: Option<Vec<RouteFeature>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RouteFeature {
    pub geometry: LineString,
}

#[derive(Debug, Deserialize)]
pub(crate) struct LineString {
    #[serde(default)]
    pub coordinates: Vec<Vec<f64>>,
}

// Structured error body returned with non-2xx statuses.
#[derive(Debug, Deserialize)]
pub(crate) struct OrsErrorPayload {
    pub error: OrsErrorDetail,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OrsErrorDetail {
    #[serde(default)]
    pub code: Option<u32>,
    pub message: String,
}
