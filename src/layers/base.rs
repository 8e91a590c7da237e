pub use crate::traits::LayerOperations as LayerTrait;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayerType {
    /// Raster background tiles
    Tile,
    /// Circle markers
    Marker,
    /// Polylines
    Vector,
}

impl LayerType {
    /// Base layers are mutually exclusive; everything else is an overlay
    pub fn is_base(&self) -> bool {
        matches!(self, LayerType::Tile)
    }
}

impl std::fmt::Display for LayerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayerType::Tile => write!(f, "tile"),
            LayerType::Marker => write!(f, "marker"),
            LayerType::Vector => write!(f, "vector"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct LayerProperties {
    pub id: String,
    pub name: String,
    pub layer_type: LayerType,
    pub z_index: i32,
    pub opacity: f32,
    pub visible: bool,
}

impl LayerProperties {
    pub fn new(id: String, name: String, layer_type: LayerType) -> Self {
        Self {
            id,
            name,
            layer_type,
            z_index: default_z_index(layer_type),
            opacity: 1.0,
            visible: true,
        }
    }
}

/// Tiles at the bottom, lines above them, markers on top
fn default_z_index(layer_type: LayerType) -> i32 {
    match layer_type {
        LayerType::Tile => 0,
        LayerType::Vector => 10,
        LayerType::Marker => 20,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layer_properties() {
        let props = LayerProperties::new(
            "plates".to_string(),
            "Tectonic Plates".to_string(),
            LayerType::Vector,
        );

        assert_eq!(props.id, "plates");
        assert_eq!(props.name, "Tectonic Plates");
        assert_eq!(props.layer_type, LayerType::Vector);
        assert_eq!(props.z_index, 10);
        assert_eq!(props.opacity, 1.0);
        assert!(props.visible);
    }

    #[test]
    fn test_z_index_stacks_markers_over_lines_over_tiles() {
        let z = |t| LayerProperties::new(String::new(), String::new(), t).z_index;
        assert!(z(LayerType::Tile) < z(LayerType::Vector));
        assert!(z(LayerType::Vector) < z(LayerType::Marker));
    }

    #[test]
    fn test_layer_type_display() {
        assert_eq!(LayerType::Tile.to_string(), "tile");
        assert_eq!(LayerType::Vector.to_string(), "vector");
        assert_eq!(LayerType::Marker.to_string(), "marker");
        assert!(LayerType::Tile.is_base());
        assert!(!LayerType::Marker.is_base());
    }
}
