//! Prelude module for common quakemap types and traits
//!
//! This module re-exports the most commonly used types, traits, and functions
//! for easy importing with `use quakemap::prelude::*;`

pub use crate::core::{
    config::{FeedConfig, QuakeMapConfig},
    context::{MapContext, OverlayKind},
    geo::{LatLng, LatLngBounds, TileCoord},
};

pub use crate::layers::{
    base::LayerTrait, earthquake::EarthquakeLayer, manager::LayerManager,
    plates::TectonicPlateLayer, tile::TileLayer,
};

pub use crate::data::{
    feed::{FeedClient, HttpFeedClient},
    geojson::{EarthquakeFeature, GeoJson, GeoJsonFeature},
    loader::{FeedOutcome, LoadReport, OverlayLoader},
};

pub use crate::style::{
    color_for_depth, legend_buckets, radius_for_magnitude, style_for, DepthBucket, DepthScale,
    LineStyle, MarkerStyle,
};

pub use crate::rendering::context::{DrawCommand, RenderContext};

pub use crate::ui::{LayerControl, Legend, Popup, Position};

pub use crate::{Error as MapError, Result};

pub use fxhash::{FxHashMap as HashMap, FxHashSet as HashSet};
