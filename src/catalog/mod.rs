//! The catalog of supported office locations.
//!
//! The catalog is loaded once from a bundled GeoJSON-like dataset and never
//! mutated afterwards. An entry's identity is its index in load order.

mod dataset;

use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use thiserror::Error;

use crate::geo::{GeoPoint, NamedLocation};
use dataset::{Dataset, RawFeature};

/// The dataset compiled into the binary.
const BUNDLED_DATASET: &str = include_str!("../../data/offices.geojson");

/// Errors that can occur when loading the catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog entry {index}: {reason}")]
    Malformed { index: usize, reason: String },

    #[error("Malformed catalog: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

impl CatalogError {
    /// Whether the dataset itself is bad (as opposed to unreadable).
    pub fn is_malformed(&self) -> bool {
        matches!(self, Self::Malformed { .. } | Self::InvalidJson(_))
    }
}

/// A picker option: what the user sees and the point it stands for.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PickerItem {
    pub label: String,
    pub value: GeoPoint,
}

/// Ordered, read-only set of named office locations.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocationCatalog {
    locations: Vec<NamedLocation>,
}

impl LocationCatalog {
    /// Parse a dataset. Deterministic; the same input yields the same catalog.
    pub fn parse(json: &str) -> Result<Self, CatalogError> {
        let dataset: Dataset = serde_json::from_str(json)?;
        let locations = dataset
            .features
            .into_iter()
            .enumerate()
            .map(|(index, feature)| to_location(index, feature))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { locations })
    }

    /// Load the dataset shipped with the binary.
    pub fn bundled() -> Result<Self, CatalogError> {
        Self::parse(BUNDLED_DATASET)
    }

    /// Load a dataset from disk.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|e| CatalogError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Degrade a failed load into an empty catalog.
    ///
    /// Nothing is selectable afterwards, but the caller keeps running.
    pub fn load_or_empty(result: Result<Self, CatalogError>) -> Self {
        match result {
            Ok(catalog) => catalog,
            Err(err) => {
                tracing::error!(error = %err, "Catalog failed to load, no locations are selectable");
                Self::default()
            }
        }
    }

    pub fn locations(&self) -> &[NamedLocation] {
        &self.locations
    }

    pub fn get(&self, index: usize) -> Option<&NamedLocation> {
        self.locations.get(index)
    }

    /// Find an entry by name, ignoring ASCII case and surrounding whitespace.
    pub fn find(&self, name: &str) -> Option<&NamedLocation> {
        let needle = name.trim();
        self.locations
            .iter()
            .find(|location| location.name.eq_ignore_ascii_case(needle))
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Reshape the catalog into picker options, in catalog order.
    pub fn picker_items(&self) -> Vec<PickerItem> {
        self.locations
            .iter()
            .map(|location| PickerItem {
                label: location.name.clone(),
                value: location.point,
            })
            .collect()
    }
}

fn to_location(index: usize, feature: RawFeature) -> Result<NamedLocation, CatalogError> {
    let malformed = |reason: String| CatalogError::Malformed { index, reason };

    let name = feature
        .properties
        .and_then(|p| p.name)
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty())
        .ok_or_else(|| malformed("missing name".to_string()))?;

    let coordinates = feature
        .geometry
        .and_then(|g| g.coordinates)
        .ok_or_else(|| malformed(format!("'{}' has no coordinates", name)))?;

    let point = GeoPoint::from_slice(&coordinates)
        .map_err(|e| malformed(format!("'{}': {}", name, e)))?;

    Ok(NamedLocation { name, point })
}
