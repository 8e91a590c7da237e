use crate::constants::{
    MAGNITUDE_SCALE, MARKER_STROKE_COLOR, MARKER_STROKE_WEIGHT, MIN_MARKER_RADIUS,
    PLATE_LINE_COLOR, PLATE_LINE_WEIGHT,
};
use crate::data::geojson::EarthquakeFeature;
use crate::style::depth::{color_for_depth, DepthScale};
use serde::{Deserialize, Serialize};

/// Style for an earthquake circle marker
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerStyle {
    /// Fill color (hex)
    pub fill_color: String,
    /// Circle radius in pixels, always positive
    pub radius: f64,
    /// Border color
    pub stroke_color: String,
    /// Border width
    pub stroke_weight: f64,
    /// Fill opacity (0.0 to 1.0)
    pub fill_opacity: f64,
    /// Stroke opacity (0.0 to 1.0)
    pub stroke_opacity: f64,
}

impl MarkerStyle {
    /// Marker with the fixed black hairline stroke and full opacity.
    pub fn new(fill_color: impl Into<String>, radius: f64) -> Self {
        Self {
            fill_color: fill_color.into(),
            radius,
            stroke_color: MARKER_STROKE_COLOR.to_string(),
            stroke_weight: MARKER_STROKE_WEIGHT,
            fill_opacity: 1.0,
            stroke_opacity: 1.0,
        }
    }
}

/// Style for plate boundary lines
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineStyle {
    /// Line color
    pub color: String,
    /// Line width
    pub weight: f64,
    /// Opacity (0.0 to 1.0)
    pub opacity: f64,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            color: PLATE_LINE_COLOR.to_string(),
            weight: PLATE_LINE_WEIGHT,
            opacity: 1.0,
        }
    }
}

/// Marker radius for a magnitude.
///
/// Magnitude 0 gets the minimum visible radius; anything else is scaled
/// linearly. Products that are not positive (negative or NaN magnitudes) are
/// clamped to the minimum radius as well.
pub fn radius_for_magnitude(magnitude: f64) -> f64 {
    if magnitude == 0.0 {
        return MIN_MARKER_RADIUS;
    }

    let radius = magnitude * MAGNITUDE_SCALE;
    if radius > 0.0 {
        radius
    } else {
        MIN_MARKER_RADIUS
    }
}

/// Full marker style for one earthquake on the default depth scale.
pub fn style_for(feature: &EarthquakeFeature) -> MarkerStyle {
    MarkerStyle::new(
        color_for_depth(feature.depth_km),
        radius_for_magnitude(feature.magnitude),
    )
}

/// Same as [`style_for`] but colored with a custom depth scale.
pub fn style_with_scale(feature: &EarthquakeFeature, scale: &DepthScale) -> MarkerStyle {
    MarkerStyle::new(
        scale.color_for(feature.depth_km),
        radius_for_magnitude(feature.magnitude),
    )
}
