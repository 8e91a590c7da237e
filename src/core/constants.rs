//! Map-wide defaults taken from the classic USGS earthquake map: feed
//! endpoints, initial view, tile sources and marker stroke parameters.
//! Keeping them in a single place makes it easier to tweak the magic numbers.

/// USGS summary feed: every earthquake of the past seven days.
pub const EARTHQUAKE_FEED_URL: &str =
    "https://earthquake.usgs.gov/earthquakes/feed/v1.0/summary/all_week.geojson";

/// PB2002 plate boundary model (Bird, 2003) as GeoJSON line strings.
pub const TECTONIC_PLATES_FEED_URL: &str =
    "https://raw.githubusercontent.com/fraxen/tectonicplates/master/GeoJSON/PB2002_boundaries.json";

/// Initial map center (latitude, longitude), around the equator.
pub const DEFAULT_CENTER: (f64, f64) = (20.0, 0.0);

/// Initial zoom level showing the whole world.
pub const DEFAULT_ZOOM: f64 = 2.0;

/// Default square tile size in pixels.
pub const TILE_SIZE: u32 = 256;

pub const BASIC_MAP_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const STREET_MAP_URL: &str = "https://{s}.tile.openstreetmap.fr/hot/{z}/{x}/{y}.png";
pub const OSM_ATTRIBUTION: &str = "&copy; OpenStreetMap contributors";

/// Display names used by the layer-selection control.
pub const BASIC_MAP_NAME: &str = "Basic Map";
pub const STREET_MAP_NAME: &str = "Street Map";
pub const EARTHQUAKES_NAME: &str = "Earthquakes";
pub const TECTONIC_PLATES_NAME: &str = "Tectonic Plates";

/// Marker radius multiplier applied to the magnitude.
pub const MAGNITUDE_SCALE: f64 = 4.0;

/// Smallest radius a marker is ever drawn with.
pub const MIN_MARKER_RADIUS: f64 = 1.0;

pub const MARKER_STROKE_COLOR: &str = "#000";
pub const MARKER_STROKE_WEIGHT: f64 = 0.5;

pub const PLATE_LINE_COLOR: &str = "orange";
pub const PLATE_LINE_WEIGHT: f64 = 2.0;

/// User agent sent with feed requests.
pub const USER_AGENT: &str = concat!("quakemap/", env!("CARGO_PKG_VERSION"));

/// Feed request timeout in seconds.
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
