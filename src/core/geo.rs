use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

const MAX_LATITUDE: f64 = 85.0511287798;

/// A WGS84 coordinate in degrees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Builds a coordinate from a GeoJSON position (`[lng, lat, ...]`).
    /// Returns `None` when the position has fewer than two numbers.
    pub fn from_position(position: &[f64]) -> Option<Self> {
        match position {
            [lng, lat, ..] => Some(Self::new(*lat, *lng)),
            _ => None,
        }
    }

    /// Latitude within ±90 and longitude within ±180
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }

    /// Web Mercator stops short of the poles
    pub fn clamp_lat(lat: f64) -> f64 {
        lat.clamp(-MAX_LATITUDE, MAX_LATITUDE)
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Extent of a set of coordinates, as loaded overlay data reports it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    pub fn from_coords(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self::new(LatLng::new(south, west), LatLng::new(north, east))
    }

    /// Smallest bounds containing every point, `None` for an empty iterator.
    pub fn from_points<'a>(points: impl IntoIterator<Item = &'a LatLng>) -> Option<Self> {
        let mut points = points.into_iter();
        let first = points.next()?;
        let mut bounds = Self::new(*first, *first);
        for point in points {
            bounds.extend(point);
        }
        Some(bounds)
    }

    /// Grows the box until it covers `point`
    pub fn extend(&mut self, point: &LatLng) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }

    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }

    pub fn union(&self, other: &LatLngBounds) -> LatLngBounds {
        let mut merged = self.clone();
        merged.extend(&other.south_west);
        merged.extend(&other.north_east);
        merged
    }
}

/// Slippy-map tile address, as substituted into `{z}/{x}/{y}` templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TileCoord {
    pub x: u32,
    pub y: u32,
    pub z: u8,
}

impl TileCoord {
    pub fn new(x: u32, y: u32, z: u8) -> Self {
        Self { x, y, z }
    }

    /// The tile covering `point` at `zoom`
    pub fn from_lat_lng(point: &LatLng, zoom: u8) -> Self {
        let tiles = f64::from(1_u32 << zoom);
        let last = (1_u32 << zoom) - 1;
        let lat = LatLng::clamp_lat(point.lat).to_radians();

        let x = ((point.lng + 180.0) / 360.0 * tiles).floor() as u32;
        let y = ((1.0 - lat.tan().asinh() / PI) / 2.0 * tiles).floor() as u32;

        Self::new(x.min(last), y.min(last), zoom)
    }

    pub fn is_valid(&self) -> bool {
        let tiles = 1_u32 << self.z;
        self.x < tiles && self.y < tiles
    }
}
