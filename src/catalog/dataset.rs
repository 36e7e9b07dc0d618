//! Serde shapes for the GeoJSON-like office dataset.
//!
//! Every field is optional here so that a missing name or coordinate pair is
//! reported as a catalog error with the offending index, not as an opaque
//! serde failure.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub(crate) struct Dataset {
    #[serde(default)]
    pub features: Vec<RawFeature>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawFeature {
    #[serde(default)]
    pub properties: Option<RawProperties>,
    #[serde(default)]
    pub geometry: Option<RawGeometry>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawProperties {
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RawGeometry {
    #[serde(default)]
    pub coordinates: Option<Vec<f64>>,
}
