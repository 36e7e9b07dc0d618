//! Pure projection of workflow state into something a map can draw.

use serde::Serialize;

use crate::catalog::LocationCatalog;
use crate::geo::GeoPoint;
use crate::workflow::{ErrorKind, Severity, WorkflowState};

/// Extra span added on each side when fitting the camera to a route.
pub const FIT_PADDING: f64 = 0.1;
/// Smallest span the camera will zoom to.
pub const MIN_DELTA: f64 = 0.01;
const OVERVIEW_DELTA: f64 = 0.05;
const DEFAULT_DELTA: f64 = 10.0;
const ROUTE_WIDTH: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    pub fn name(&self) -> &'static str {
        match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Blue => "blue",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub coordinate: GeoPoint,
    pub title: String,
    pub color: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polyline {
    pub points: Vec<GeoPoint>,
    pub color: Color,
    pub width: u32,
}

/// Visible map area: a centre and the span around it, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Region {
    pub latitude: f64,
    pub longitude: f64,
    pub latitude_delta: f64,
    pub longitude_delta: f64,
}

impl Default for Region {
    /// Centred on Peru.
    fn default() -> Self {
        Self {
            latitude: -9.19,
            longitude: -75.0152,
            latitude_delta: DEFAULT_DELTA,
            longitude_delta: DEFAULT_DELTA,
        }
    }
}

impl Region {
    pub fn around(point: GeoPoint, delta: f64) -> Self {
        Self {
            latitude: point.latitude(),
            longitude: point.longitude(),
            latitude_delta: delta,
            longitude_delta: delta,
        }
    }

    /// Smallest region containing every point, widened by `padding` times
    /// the span on each side. `None` for no points.
    pub fn fit(points: &[GeoPoint], padding: f64) -> Option<Self> {
        let (first, rest) = points.split_first()?;
        let mut min_lat = first.latitude();
        let mut max_lat = min_lat;
        let mut min_lon = first.longitude();
        let mut max_lon = min_lon;
        for point in rest {
            min_lat = min_lat.min(point.latitude());
            max_lat = max_lat.max(point.latitude());
            min_lon = min_lon.min(point.longitude());
            max_lon = max_lon.max(point.longitude());
        }

        let widen = 1.0 + 2.0 * padding.max(0.0);
        Some(Self {
            latitude: (min_lat + max_lat) / 2.0,
            longitude: (min_lon + max_lon) / 2.0,
            latitude_delta: ((max_lat - min_lat) * widen).max(MIN_DELTA),
            longitude_delta: ((max_lon - min_lon) * widen).max(MIN_DELTA),
        })
    }
}

/// Transient message about the last failure.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notice {
    pub message: String,
    pub details: String,
    pub severity: Severity,
}

impl From<&ErrorKind> for Notice {
    fn from(kind: &ErrorKind) -> Self {
        Self {
            message: kind.user_message().to_string(),
            details: kind.details(),
            severity: kind.severity(),
        }
    }
}

/// Everything a render surface needs for one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapScene {
    pub markers: Vec<Marker>,
    pub polyline: Option<Polyline>,
    pub region: Region,
    pub notice: Option<Notice>,
    pub loading: bool,
}

impl MapScene {
    pub fn from_state(state: &WorkflowState) -> Self {
        let mut markers = Vec::with_capacity(2);
        if let Some(origin) = state.origin {
            markers.push(Marker {
                coordinate: origin,
                title: "Origin".to_string(),
                color: Color::Red,
            });
        }
        if let Some(destination) = state.destination {
            markers.push(Marker {
                coordinate: destination,
                title: "Destination".to_string(),
                color: Color::Green,
            });
        }

        let polyline = state
            .route
            .as_ref()
            .filter(|route| !route.is_empty())
            .map(|route| Polyline {
                points: route.points.clone(),
                color: Color::Blue,
                width: ROUTE_WIDTH,
            });

        let region = match &polyline {
            Some(line) => Region::fit(&line.points, FIT_PADDING),
            None => {
                let endpoints: Vec<GeoPoint> = markers.iter().map(|m| m.coordinate).collect();
                Region::fit(&endpoints, FIT_PADDING)
            }
        }
        .unwrap_or_default();

        Self {
            markers,
            polyline,
            region,
            notice: state.last_error.as_ref().map(Notice::from),
            loading: state.loading,
        }
    }

    /// Office overview, or a close-up on the office at `focus`.
    ///
    /// An out-of-range `focus` shows the overview.
    pub fn catalog(catalog: &LocationCatalog, focus: Option<usize>) -> Self {
        let marker = |name: &str, point: GeoPoint| Marker {
            coordinate: point,
            title: name.to_string(),
            color: Color::Blue,
        };

        if let Some(office) = focus.and_then(|index| catalog.get(index)) {
            return Self {
                markers: vec![marker(&office.name, office.point)],
                polyline: None,
                region: Region::around(office.point, MIN_DELTA),
                notice: None,
                loading: false,
            };
        }

        let region = catalog
            .get(0)
            .map(|first| Region::around(first.point, OVERVIEW_DELTA))
            .unwrap_or_default();
        Self {
            markers: catalog
                .locations()
                .iter()
                .map(|office| marker(&office.name, office.point))
                .collect(),
            polyline: None,
            region,
            notice: None,
            loading: false,
        }
    }
}
