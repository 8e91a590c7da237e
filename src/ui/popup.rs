use crate::core::geo::LatLng;
use crate::data::geojson::EarthquakeFeature;
use serde::{Deserialize, Serialize};

/// Popup bound to a marker, shown when the marker is clicked
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Popup {
    pub position: LatLng,
    /// HTML content
    pub content: String,
}

impl Popup {
    pub fn new(position: LatLng, content: String) -> Self {
        Self { position, content }
    }

    /// Location, magnitude and depth of one earthquake.
    ///
    /// Values come from the extracted [`EarthquakeFeature`], so a feed record
    /// with a null magnitude shows `0` here rather than `null`.
    pub fn for_earthquake(quake: &EarthquakeFeature) -> Self {
        let content = format!(
            "<strong>Location:</strong> {} <br>\n\
             <strong>Magnitude:</strong> {} <br>\n\
             <strong>Depth:</strong> {} km",
            escape_html(&quake.place),
            quake.magnitude,
            quake.depth_km
        );
        Self::new(quake.position, content)
    }
}

/// Escapes text for inclusion in HTML content
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
