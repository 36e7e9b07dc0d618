//! Geographic value types shared by every layer.
//!
//! Wire formats (GeoJSON, the directions API) carry positions as
//! `[longitude, latitude]`. Internally a [`GeoPoint`] names both axes, so the
//! swap happens exactly once, at the boundary that reads or writes the pair.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Errors produced when constructing a [`GeoPoint`].
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeoError {
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),

    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),

    #[error("expected a [longitude, latitude] pair, got {0} values")]
    NotAPair(usize),
}

/// A validated position on the globe.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoPoint {
    longitude: f64,
    latitude: f64,
}

impl GeoPoint {
    /// Create a point, rejecting out-of-range or non-finite axes.
    pub fn new(longitude: f64, latitude: f64) -> Result<Self, GeoError> {
        if !longitude.is_finite() || !(-180.0..=180.0).contains(&longitude) {
            return Err(GeoError::LongitudeOutOfRange(longitude));
        }
        if !latitude.is_finite() || !(-90.0..=90.0).contains(&latitude) {
            return Err(GeoError::LatitudeOutOfRange(latitude));
        }
        Ok(Self {
            longitude,
            latitude,
        })
    }

    /// Decode a wire-order `[longitude, latitude]` pair.
    pub fn from_lon_lat(pair: [f64; 2]) -> Result<Self, GeoError> {
        Self::new(pair[0], pair[1])
    }

    /// Decode a wire-order pair of unknown length.
    pub fn from_slice(values: &[f64]) -> Result<Self, GeoError> {
        match values {
            [lon, lat] => Self::new(*lon, *lat),
            other => Err(GeoError::NotAPair(other.len())),
        }
    }

    /// Decode a GeoJSON position, `[longitude, latitude]` with an optional
    /// altitude that is dropped.
    pub fn from_position(values: &[f64]) -> Result<Self, GeoError> {
        match values {
            [lon, lat] | [lon, lat, _] => Self::new(*lon, *lat),
            other => Err(GeoError::NotAPair(other.len())),
        }
    }

    /// Encode as a wire-order `[longitude, latitude]` pair.
    pub fn to_lon_lat(self) -> [f64; 2] {
        [self.longitude, self.latitude]
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lat {}, lon {}", self.latitude, self.longitude)
    }
}

/// A catalog entry: a named office and where it is.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NamedLocation {
    pub name: String,
    pub point: GeoPoint,
}

/// The two endpoints of a route request. Both are always present.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RouteRequest {
    pub origin: GeoPoint,
    pub destination: GeoPoint,
}

/// An ordered path returned by the directions service.
///
/// An empty path means the service answered but found no route.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct Route {
    pub points: Vec<GeoPoint>,
}

impl Route {
    pub fn new(points: Vec<GeoPoint>) -> Self {
        Self { points }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_boundary_values() {
        assert!(GeoPoint::new(180.0, 90.0).is_ok());
        assert!(GeoPoint::new(-180.0, -90.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range_axes() {
        assert_eq!(
            GeoPoint::new(180.5, 0.0),
            Err(GeoError::LongitudeOutOfRange(180.5))
        );
        assert_eq!(
            GeoPoint::new(0.0, -90.1),
            Err(GeoError::LatitudeOutOfRange(-90.1))
        );
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
    }

    #[test]
    fn lon_lat_pair_keeps_axis_order() {
        let point = GeoPoint::from_lon_lat([-77.03, -12.05]).unwrap();
        assert_eq!(point.longitude(), -77.03);
        assert_eq!(point.latitude(), -12.05);
        assert_eq!(point.to_lon_lat(), [-77.03, -12.05]);
    }

    #[test]
    fn from_slice_requires_exactly_two_values() {
        assert_eq!(GeoPoint::from_slice(&[1.0]), Err(GeoError::NotAPair(1)));
        assert_eq!(
            GeoPoint::from_slice(&[1.0, 2.0, 3.0]),
            Err(GeoError::NotAPair(3))
        );
        assert!(GeoPoint::from_slice(&[1.0, 2.0]).is_ok());
    }

    #[test]
    fn position_drops_altitude() {
        let point = GeoPoint::from_position(&[-77.03, -12.05, 154.2]).unwrap();
        assert_eq!(point, GeoPoint::new(-77.03, -12.05).unwrap());
        assert_eq!(
            GeoPoint::from_position(&[1.0, 2.0, 3.0, 4.0]),
            Err(GeoError::NotAPair(4))
        );
    }

    #[test]
    fn empty_route_is_distinct_from_populated() {
        assert!(Route::empty().is_empty());
        let route = Route::new(vec![GeoPoint::new(1.0, 2.0).unwrap()]);
        assert!(!route.is_empty());
    }
}
