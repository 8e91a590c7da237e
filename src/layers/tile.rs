use crate::{
    constants::TILE_SIZE,
    core::{config::BaseLayerConfig, geo::TileCoord},
    layers::base::{LayerProperties, LayerTrait, LayerType},
    rendering::context::{DrawCommand, RenderContext},
    Result,
};

/// Configuration for a tile layer
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct TileLayerOptions {
    /// URL template for tiles (e.g., "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png")
    pub url_template: String,
    /// Available subdomains for load balancing
    pub subdomains: Vec<String>,
    /// Attribution text
    pub attribution: String,
    /// Tile size in pixels
    pub tile_size: u32,
    /// Maximum zoom level for this tile source
    pub max_zoom: u8,
    /// Minimum zoom level for this tile source
    pub min_zoom: u8,
}

impl Default for TileLayerOptions {
    fn default() -> Self {
        Self {
            url_template: crate::constants::BASIC_MAP_URL.to_string(),
            subdomains: vec!["a".to_string(), "b".to_string(), "c".to_string()],
            attribution: crate::constants::OSM_ATTRIBUTION.to_string(),
            tile_size: TILE_SIZE,
            max_zoom: 18,
            min_zoom: 0,
        }
    }
}

impl From<&BaseLayerConfig> for TileLayerOptions {
    fn from(config: &BaseLayerConfig) -> Self {
        Self {
            url_template: config.url_template.clone(),
            subdomains: config.subdomains.clone(),
            attribution: config.attribution.clone(),
            ..Self::default()
        }
    }
}

/// A background layer of raster tiles from a tile server.
///
/// Fetching and drawing the tiles is the widget's job; this layer only
/// describes the source.
pub struct TileLayer {
    properties: LayerProperties,
    options: TileLayerOptions,
}

impl TileLayer {
    /// Create a new tile layer with custom options
    pub fn with_options(id: String, name: String, options: TileLayerOptions) -> Self {
        Self {
            properties: LayerProperties::new(id, name, LayerType::Tile),
            options,
        }
    }

    /// Create a tile layer for OpenStreetMap
    pub fn openstreetmap(id: String, name: String) -> Self {
        Self::with_options(id, name, TileLayerOptions::default())
    }

    pub fn tile_options(&self) -> &TileLayerOptions {
        &self.options
    }

    /// Build the URL of one tile, rotating through the subdomains
    pub fn tile_url(&self, coord: TileCoord) -> String {
        let subdomain = if self.options.subdomains.is_empty() {
            ""
        } else {
            let idx = ((coord.x + coord.y) % self.options.subdomains.len() as u32) as usize;
            self.options.subdomains[idx].as_str()
        };

        self.options
            .url_template
            .replace("{s}", subdomain)
            .replace("{z}", &coord.z.to_string())
            .replace("{x}", &coord.x.to_string())
            .replace("{y}", &coord.y.to_string())
    }
}

impl LayerTrait for TileLayer {
    crate::impl_layer_trait!(TileLayer, properties);

    fn render(&self, context: &mut RenderContext) -> Result<()> {
        context.push(DrawCommand::TileLayer {
            layer_id: self.properties.id.clone(),
            url_template: self.options.url_template.clone(),
            subdomains: self.options.subdomains.clone(),
            attribution: self.options.attribution.clone(),
            opacity: self.properties.opacity,
        });
        Ok(())
    }

    fn options(&self) -> serde_json::Value {
        serde_json::to_value(&self.options).unwrap_or(serde_json::Value::Null)
    }
}
