use crate::{
    core::geo::{LatLng, LatLngBounds},
    data::geojson::GeoJson,
    layers::base::{LayerProperties, LayerTrait, LayerType},
    rendering::context::{RenderContext, StyleConversion},
    style::LineStyle,
    Result,
};

/// One boundary segment between two plates
#[derive(Debug, Clone, PartialEq)]
pub struct PlateBoundary {
    /// PB2002 boundary code such as `AF-AN`, when the feed provides one
    pub name: Option<String>,
    pub points: Vec<LatLng>,
}

/// Overlay of tectonic plate boundaries drawn as polylines
pub struct TectonicPlateLayer {
    properties: LayerProperties,
    style: LineStyle,
    boundaries: Vec<PlateBoundary>,
}

impl TectonicPlateLayer {
    pub fn new(id: String, name: String, style: LineStyle) -> Self {
        Self {
            properties: LayerProperties::new(id, name, LayerType::Vector),
            style,
            boundaries: Vec::new(),
        }
    }

    /// Replaces the boundaries with the line work in `data`.
    ///
    /// Every path with at least two vertices becomes a boundary; points are
    /// ignored. Returns the number of boundaries kept.
    pub fn set_data(&mut self, data: &GeoJson) -> usize {
        self.boundaries = data
            .features()
            .iter()
            .flat_map(|feature| {
                let name = feature
                    .property("Name")
                    .or_else(|| feature.property("name"))
                    .and_then(serde_json::Value::as_str)
                    .map(str::to_string);

                feature
                    .geometry
                    .iter()
                    .flat_map(|geometry| geometry.to_lines())
                    .filter(|points| points.len() >= 2)
                    .map(move |points| PlateBoundary {
                        name: name.clone(),
                        points,
                    })
                    .collect::<Vec<_>>()
            })
            .collect();

        self.boundaries.len()
    }

    pub fn boundaries(&self) -> &[PlateBoundary] {
        &self.boundaries
    }

    pub fn style(&self) -> &LineStyle {
        &self.style
    }

    pub fn is_empty(&self) -> bool {
        self.boundaries.is_empty()
    }
}

impl LayerTrait for TectonicPlateLayer {
    crate::impl_layer_trait!(TectonicPlateLayer, properties);

    fn render(&self, context: &mut RenderContext) -> Result<()> {
        let style = self.style.with_layer_opacity(self.properties.opacity);
        for boundary in &self.boundaries {
            context.draw_polyline(&self.properties.id, boundary.points.clone(), style.clone());
        }
        Ok(())
    }

    fn bounds(&self) -> Option<LatLngBounds> {
        LatLngBounds::from_points(self.boundaries.iter().flat_map(|b| &b.points))
    }

    fn feature_count(&self) -> usize {
        self.boundaries.len()
    }

    fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "color": self.style.color,
            "weight": self.style.weight,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::context::DrawCommand;

    fn sample() -> GeoJson {
        r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"Name": "AF-AN"},
                 "geometry": {"type": "LineString", "coordinates": [[-0.43, -54.85], [-0.03, -54.31], [0.68, -53.81]]}},
                {"type": "Feature", "properties": {"Name": "SO-AN"},
                 "geometry": {"type": "MultiLineString", "coordinates": [[[31.0, -44.0], [31.5, -44.5]], [[32.0, -45.0], [32.5, -45.5]]]}},
                {"type": "Feature", "properties": {},
                 "geometry": {"type": "Point", "coordinates": [10.0, 10.0]}}
            ]
        }"#
        .parse()
        .unwrap()
    }

    fn layer() -> TectonicPlateLayer {
        TectonicPlateLayer::new(
            "plates".to_string(),
            "Tectonic Plates".to_string(),
            LineStyle::default(),
        )
    }

    #[test]
    fn test_set_data_collects_lines() {
        let mut layer = layer();
        assert_eq!(layer.set_data(&sample()), 3);

        let boundaries = layer.boundaries();
        assert_eq!(boundaries[0].name.as_deref(), Some("AF-AN"));
        assert_eq!(boundaries[0].points.len(), 3);
        assert_eq!(boundaries[1].name.as_deref(), Some("SO-AN"));
        assert_eq!(boundaries[2].name.as_deref(), Some("SO-AN"));
    }

    #[test]
    fn test_render_uses_orange_lines() {
        let mut layer = layer();
        layer.set_data(&sample());

        let mut context = RenderContext::new();
        layer.render(&mut context).unwrap();

        assert_eq!(context.count_for_layer("plates"), 3);
        for command in context.commands() {
            match command {
                DrawCommand::Polyline { style, .. } => {
                    assert_eq!(style.color, "orange");
                    assert_eq!(style.weight, 2.0);
                }
                other => panic!("unexpected command {:?}", other),
            }
        }
    }

    #[test]
    fn test_bounds() {
        let mut layer = layer();
        layer.set_data(&sample());

        let bounds = layer.bounds().unwrap();
        assert_eq!(bounds.south_west, LatLng::new(-54.85, -0.43));
        assert_eq!(bounds.north_east, LatLng::new(-44.0, 32.5));
    }

    #[test]
    fn test_feature_count_and_options() {
        let mut layer = layer();
        layer.set_data(&sample());

        assert_eq!(layer.feature_count(), 3);
        assert_eq!(layer.options(), serde_json::json!({"color": "orange", "weight": 2.0}));
    }
}
