//! Map configuration
//!
//! Every field has a default matching the classic USGS earthquake map, so an
//! empty JSON object is a complete configuration. Files only need to list the
//! values they change.

use crate::constants::{
    BASIC_MAP_NAME, BASIC_MAP_URL, DEFAULT_CENTER, DEFAULT_REQUEST_TIMEOUT_SECS, DEFAULT_ZOOM,
    EARTHQUAKE_FEED_URL, OSM_ATTRIBUTION, STREET_MAP_NAME, STREET_MAP_URL,
    TECTONIC_PLATES_FEED_URL, USER_AGENT,
};
use crate::core::geo::LatLng;
use crate::style::{DepthScale, LineStyle};
use crate::ui::elements::Position;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuakeMapConfig {
    pub view: ViewConfig,
    pub base_layers: Vec<BaseLayerConfig>,
    pub feeds: FeedConfig,
    pub overlays: OverlayConfig,
    pub legend: LegendConfig,
    pub layer_control: LayerControlConfig,
}

impl Default for QuakeMapConfig {
    fn default() -> Self {
        Self {
            view: ViewConfig::default(),
            base_layers: vec![
                BaseLayerConfig::openstreetmap(BASIC_MAP_NAME, BASIC_MAP_URL),
                BaseLayerConfig::openstreetmap(STREET_MAP_NAME, STREET_MAP_URL),
            ],
            feeds: FeedConfig::default(),
            overlays: OverlayConfig::default(),
            legend: LegendConfig::default(),
            layer_control: LayerControlConfig::default(),
        }
    }
}

impl QuakeMapConfig {
    /// Parses and validates a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON configuration file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading configuration from {}", path.display());
        Self::from_json_str(&std::fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.view.center.is_valid() {
            return Err(Error::InvalidConfig(format!(
                "map center ({}, {}) is out of range",
                self.view.center.lat, self.view.center.lng
            )));
        }

        if !(0.0..=24.0).contains(&self.view.zoom) {
            return Err(Error::InvalidConfig(format!(
                "zoom {} is out of range",
                self.view.zoom
            )));
        }

        if self.base_layers.is_empty() {
            return Err(Error::InvalidConfig(
                "at least one base layer is required".to_string(),
            ));
        }

        for (i, layer) in self.base_layers.iter().enumerate() {
            if self.base_layers[..i].iter().any(|l| l.name == layer.name) {
                return Err(Error::InvalidConfig(format!(
                    "duplicate base layer name '{}'",
                    layer.name
                )));
            }
        }

        if self.feeds.request_timeout_secs == 0 {
            return Err(Error::InvalidConfig(
                "request timeout must be positive".to_string(),
            ));
        }

        self.legend.depth_scale()?;
        Ok(())
    }
}

/// Initial map view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewConfig {
    pub center: LatLng,
    pub zoom: f64,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            center: LatLng::new(DEFAULT_CENTER.0, DEFAULT_CENTER.1),
            zoom: DEFAULT_ZOOM,
        }
    }
}

/// One selectable background tile source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseLayerConfig {
    pub name: String,
    /// URL template, e.g. `https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png`
    pub url_template: String,
    #[serde(default)]
    pub attribution: String,
    #[serde(default)]
    pub subdomains: Vec<String>,
}

impl BaseLayerConfig {
    fn openstreetmap(name: &str, url_template: &str) -> Self {
        Self {
            name: name.to_string(),
            url_template: url_template.to_string(),
            attribution: OSM_ATTRIBUTION.to_string(),
            subdomains: vec!["a".to_string(), "b".to_string(), "c".to_string()],
        }
    }
}

/// Remote GeoJSON sources and HTTP settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedConfig {
    pub earthquakes_url: String,
    pub plates_url: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
}

impl FeedConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for FeedConfig {
    fn default() -> Self {
        Self {
            earthquakes_url: EARTHQUAKE_FEED_URL.to_string(),
            plates_url: TECTONIC_PLATES_FEED_URL.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
            user_agent: USER_AGENT.to_string(),
        }
    }
}

/// Which overlays are switched on as soon as their data arrives
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OverlayConfig {
    pub show_earthquakes: bool,
    pub show_plates: bool,
    pub plate_style: LineStyle,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            show_earthquakes: true,
            show_plates: false,
            plate_style: LineStyle::default(),
        }
    }
}

/// `lower_bound` and swatch color of one legend bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DepthThreshold {
    pub lower_bound: f64,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LegendConfig {
    pub position: Position,
    pub thresholds: Vec<DepthThreshold>,
}

impl LegendConfig {
    /// Builds the validated depth scale described by the thresholds
    pub fn depth_scale(&self) -> Result<DepthScale> {
        DepthScale::from_thresholds(
            self.thresholds
                .iter()
                .map(|t| (t.lower_bound, t.color.clone())),
        )
    }
}

impl Default for LegendConfig {
    fn default() -> Self {
        Self {
            position: Position::BottomRight,
            thresholds: DepthScale::earthquake()
                .buckets()
                .iter()
                .map(|b| DepthThreshold {
                    lower_bound: b.lower_bound,
                    color: b.color.clone(),
                })
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayerControlConfig {
    pub position: Position,
    pub collapsed: bool,
}

impl Default for LayerControlConfig {
    fn default() -> Self {
        Self {
            position: Position::TopRight,
            collapsed: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = QuakeMapConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.view.center, LatLng::new(20.0, 0.0));
        assert_eq!(config.view.zoom, 2.0);
        assert_eq!(config.base_layers.len(), 2);
        assert_eq!(config.base_layers[0].name, "Basic Map");
        assert!(!config.layer_control.collapsed);
        assert_eq!(config.legend.position, Position::BottomRight);
    }

    #[test]
    fn test_empty_json_is_default() {
        let config = QuakeMapConfig::from_json_str("{}").unwrap();
        assert_eq!(config, QuakeMapConfig::default());
    }

    #[test]
    fn test_partial_json_overrides() {
        let config = QuakeMapConfig::from_json_str(
            r#"{
                "view": {"zoom": 4},
                "feeds": {"request_timeout_secs": 5},
                "legend": {"position": "bottomleft"}
            }"#,
        )
        .unwrap();

        assert_eq!(config.view.zoom, 4.0);
        assert_eq!(config.view.center, LatLng::new(20.0, 0.0));
        assert_eq!(config.feeds.request_timeout(), Duration::from_secs(5));
        assert_eq!(config.feeds.earthquakes_url, EARTHQUAKE_FEED_URL);
        assert_eq!(config.legend.position, Position::BottomLeft);
        assert_eq!(config.legend.thresholds.len(), 6);
    }

    #[test]
    fn test_default_thresholds_rebuild_earthquake_scale() {
        let scale = LegendConfig::default().depth_scale().unwrap();
        assert_eq!(scale, DepthScale::earthquake());
    }

    #[test]
    fn test_invalid_configs_are_rejected() {
        let bad_zoom = QuakeMapConfig::from_json_str(r#"{"view": {"zoom": 40}}"#);
        assert!(matches!(bad_zoom, Err(Error::InvalidConfig(_))));

        let no_layers = QuakeMapConfig::from_json_str(r#"{"base_layers": []}"#);
        assert!(matches!(no_layers, Err(Error::InvalidConfig(_))));

        let bad_scale = QuakeMapConfig::from_json_str(
            r##"{"legend": {"thresholds": [{"lower_bound": 5, "color": "#000"}, {"lower_bound": 1, "color": "#fff"}]}}"##,
        );
        assert!(matches!(bad_scale, Err(Error::InvalidConfig(_))));

        let not_json = QuakeMapConfig::from_json_str("zoom = 3");
        assert!(matches!(not_json, Err(Error::Serialization(_))));
    }
}
