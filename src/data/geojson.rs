use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::str::FromStr;

/// A GeoJSON position: `[lng, lat]` or `[lng, lat, elevation]`.
///
/// Earthquake feeds put the hypocenter depth in km in the third slot.
pub type Position = Vec<f64>;

/// GeoJSON geometry types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GeoJsonGeometry {
    Point {
        coordinates: Position,
    },
    LineString {
        coordinates: Vec<Position>,
    },
    Polygon {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPoint {
        coordinates: Vec<Position>,
    },
    MultiLineString {
        coordinates: Vec<Vec<Position>>,
    },
    MultiPolygon {
        coordinates: Vec<Vec<Vec<Position>>>,
    },
    GeometryCollection {
        geometries: Vec<GeoJsonGeometry>,
    },
}

/// GeoJSON feature with geometry and properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct GeoJsonFeature {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    pub geometry: Option<GeoJsonGeometry>,
    #[serde(default)]
    pub properties: Option<Map<String, Value>>,
}

/// GeoJSON feature collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection {
    /// Feed metadata block (title, generation time, count) when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Value>,
    pub features: Vec<GeoJsonFeature>,
}

/// Root GeoJSON object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum GeoJson {
    FeatureCollection(FeatureCollection),
    Feature(GeoJsonFeature),
}

impl GeoJson {
    /// All features, whether the root is a single feature or a collection
    pub fn features(&self) -> &[GeoJsonFeature] {
        match self {
            GeoJson::FeatureCollection(collection) => &collection.features,
            GeoJson::Feature(feature) => std::slice::from_ref(feature),
        }
    }

    /// Feed title from the collection metadata, if any
    pub fn title(&self) -> Option<&str> {
        match self {
            GeoJson::FeatureCollection(collection) => collection
                .metadata
                .as_ref()
                .and_then(|m| m.get("title"))
                .and_then(Value::as_str),
            GeoJson::Feature(_) => None,
        }
    }
}

impl FromStr for GeoJson {
    type Err = crate::Error;

    /// Parses a `FeatureCollection` or `Feature` root. The `type` member is
    /// checked up front since the struct tags alone accept any value.
    fn from_str(s: &str) -> crate::Result<Self> {
        let invalid = |e: serde_json::Error| crate::Error::ParseError(format!("Invalid GeoJSON: {}", e));
        let value: Value = serde_json::from_str(s).map_err(invalid)?;

        match value.get("type").and_then(Value::as_str) {
            Some("FeatureCollection") | Some("Feature") => serde_json::from_value(value).map_err(invalid),
            Some(other) => Err(crate::Error::ParseError(format!(
                "unsupported GeoJSON root type '{}'",
                other
            ))),
            None => Err(crate::Error::ParseError("GeoJSON root has no type".to_string())),
        }
    }
}

impl From<Vec<GeoJsonFeature>> for GeoJson {
    fn from(features: Vec<GeoJsonFeature>) -> Self {
        GeoJson::FeatureCollection(FeatureCollection {
            metadata: None,
            features,
        })
    }
}

impl GeoJsonFeature {
    /// Looks up a property by name
    pub fn property(&self, key: &str) -> Option<&Value> {
        self.properties.as_ref().and_then(|p| p.get(key))
    }
}

impl GeoJsonGeometry {
    /// Converts every vertex to LatLng points
    pub fn to_lat_lng_points(&self) -> Vec<LatLng> {
        self.to_lines().into_iter().flatten().collect()
    }

    /// Splits the geometry into drawable paths.
    ///
    /// Each point becomes a single-vertex path; polygon rings become closed
    /// paths. Positions with fewer than two numbers are dropped.
    pub fn to_lines(&self) -> Vec<Vec<LatLng>> {
        fn path(positions: &[Position]) -> Vec<LatLng> {
            positions
                .iter()
                .filter_map(|p| LatLng::from_position(p))
                .collect()
        }

        match self {
            GeoJsonGeometry::Point { coordinates } => {
                LatLng::from_position(coordinates).map(|p| vec![vec![p]]).unwrap_or_default()
            }
            GeoJsonGeometry::MultiPoint { coordinates } => coordinates
                .iter()
                .filter_map(|c| LatLng::from_position(c))
                .map(|p| vec![p])
                .collect(),
            GeoJsonGeometry::LineString { coordinates } => vec![path(coordinates)],
            GeoJsonGeometry::MultiLineString { coordinates } | GeoJsonGeometry::Polygon { coordinates } => {
                coordinates.iter().map(|line| path(line)).collect()
            }
            GeoJsonGeometry::MultiPolygon { coordinates } => coordinates
                .iter()
                .flat_map(|polygon| polygon.iter().map(|ring| path(ring)))
                .collect(),
            GeoJsonGeometry::GeometryCollection { geometries } => {
                geometries.iter().flat_map(|g| g.to_lines()).collect()
            }
        }
    }
}

/// One earthquake event extracted from a feed feature.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarthquakeFeature {
    pub position: LatLng,
    /// Hypocenter depth in km (negative above sea level)
    pub depth_km: f64,
    pub magnitude: f64,
    pub place: String,
}

pub const UNKNOWN_PLACE: &str = "Unknown location";

impl EarthquakeFeature {
    /// Reads an earthquake out of a Point feature.
    ///
    /// Returns `None` when the feature has no usable Point geometry. A missing
    /// depth or magnitude reads as 0 and a missing place as [`UNKNOWN_PLACE`].
    pub fn from_feature(feature: &GeoJsonFeature) -> Option<Self> {
        let Some(GeoJsonGeometry::Point { coordinates }) = &feature.geometry else {
            return None;
        };
        let position = LatLng::from_position(coordinates)?;

        Some(Self {
            position,
            depth_km: coordinates.get(2).copied().unwrap_or(0.0),
            magnitude: feature
                .property("mag")
                .and_then(Value::as_f64)
                .unwrap_or(0.0),
            place: feature
                .property("place")
                .and_then(Value::as_str)
                .unwrap_or(UNKNOWN_PLACE)
                .to_string(),
        })
    }
}
