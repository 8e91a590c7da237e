//! # quakemap
//!
//! Builds the model of an interactive earthquake map: depth/magnitude marker
//! styling, the depth legend, tectonic plate overlays and the layer-selection
//! control, ready to be replayed by any Leaflet-style map widget.
//!
//! Map rendering, tiling and projection are left to that widget. This crate
//! fetches the two GeoJSON feeds, styles every feature and records what the
//! widget should draw in a [`RenderContext`].

pub mod core;
pub mod data;
pub mod layers;
pub mod prelude;
pub mod rendering;
pub mod style;
pub mod traits;
pub mod ui;
pub use crate::core::constants;

// Re-export public API
pub use crate::core::{
    config::QuakeMapConfig,
    context::MapContext,
    geo::{LatLng, LatLngBounds, TileCoord},
};

pub use layers::{
    base::LayerTrait, earthquake::EarthquakeLayer, manager::LayerManager,
    plates::TectonicPlateLayer, tile::TileLayer,
};

pub use ui::{controls::LayerControl, legend::Legend, popup::Popup};

pub use rendering::context::RenderContext;

pub use style::{
    color_for_depth, legend_buckets, radius_for_magnitude, style_for, DepthBucket, DepthScale,
    LineStyle, MarkerStyle,
};

pub use data::{
    feed::{FeedClient, HttpFeedClient},
    geojson::{EarthquakeFeature, GeoJson},
    loader::{LoadReport, OverlayLoader},
};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, MapError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum MapError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Layer error: {0}")]
    Layer(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

/// Error type alias for convenience
pub type Error = MapError;
