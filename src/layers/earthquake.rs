use crate::{
    core::geo::LatLngBounds,
    data::geojson::{EarthquakeFeature, GeoJson, GeoJsonFeature, GeoJsonGeometry},
    layers::base::{LayerProperties, LayerTrait, LayerType},
    rendering::context::{RenderContext, StyleConversion},
    style::{marker::style_with_scale, DepthScale, MarkerStyle},
    ui::popup::Popup,
    Result,
};
use serde_json::{Map, Value};

/// A styled earthquake ready to be drawn
#[derive(Debug, Clone, PartialEq)]
pub struct CircleMarker {
    pub quake: EarthquakeFeature,
    pub style: MarkerStyle,
    pub popup: Popup,
}

impl CircleMarker {
    pub fn new(quake: EarthquakeFeature, scale: &DepthScale) -> Self {
        let style = style_with_scale(&quake, scale);
        let popup = Popup::for_earthquake(&quake);
        Self { quake, style, popup }
    }
}

/// Overlay of circle markers colored by depth and sized by magnitude
pub struct EarthquakeLayer {
    properties: LayerProperties,
    scale: DepthScale,
    markers: Vec<CircleMarker>,
    skipped: usize,
}

impl EarthquakeLayer {
    pub fn new(id: String, name: String, scale: DepthScale) -> Self {
        Self {
            properties: LayerProperties::new(id, name, LayerType::Marker),
            scale,
            markers: Vec::new(),
            skipped: 0,
        }
    }

    /// Replaces the layer's markers with the earthquakes in `data`.
    ///
    /// Features without a Point geometry are skipped. Returns the number of
    /// markers created.
    pub fn set_data(&mut self, data: &GeoJson) -> usize {
        let features = data.features();
        self.markers = features
            .iter()
            .filter_map(EarthquakeFeature::from_feature)
            .map(|quake| CircleMarker::new(quake, &self.scale))
            .collect();
        self.skipped = features.len() - self.markers.len();

        if self.skipped > 0 {
            log::debug!(
                "{}: skipped {} features without a point geometry",
                self.properties.id,
                self.skipped
            );
        }
        self.markers.len()
    }

    pub fn markers(&self) -> &[CircleMarker] {
        &self.markers
    }

    /// Features dropped by the last `set_data`
    pub fn skipped(&self) -> usize {
        self.skipped
    }

    pub fn scale(&self) -> &DepthScale {
        &self.scale
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    pub fn clear(&mut self) {
        self.markers.clear();
        self.skipped = 0;
    }

    /// The markers as a GeoJSON collection carrying their computed style
    /// and popup content in the properties.
    pub fn to_geojson(&self) -> Result<GeoJson> {
        let features = self
            .markers
            .iter()
            .map(|marker| -> Result<GeoJsonFeature> {
                let mut properties = Map::new();
                properties.insert("mag".to_string(), Value::from(marker.quake.magnitude));
                properties.insert("place".to_string(), Value::from(marker.quake.place.clone()));
                properties.insert("depth".to_string(), Value::from(marker.quake.depth_km));
                properties.insert("style".to_string(), serde_json::to_value(&marker.style)?);
                properties.insert("popup".to_string(), Value::from(marker.popup.content.clone()));

                Ok(GeoJsonFeature {
                    id: None,
                    geometry: Some(GeoJsonGeometry::Point {
                        coordinates: vec![
                            marker.quake.position.lng,
                            marker.quake.position.lat,
                            marker.quake.depth_km,
                        ],
                    }),
                    properties: Some(properties),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(GeoJson::from(features))
    }
}

impl LayerTrait for EarthquakeLayer {
    crate::impl_layer_trait!(EarthquakeLayer, properties);

    fn render(&self, context: &mut RenderContext) -> Result<()> {
        for marker in &self.markers {
            context.draw_circle_marker(
                &self.properties.id,
                marker.quake.position,
                marker.style.with_layer_opacity(self.properties.opacity),
                Some(marker.popup.clone()),
            );
        }
        Ok(())
    }

    fn bounds(&self) -> Option<LatLngBounds> {
        LatLngBounds::from_points(self.markers.iter().map(|m| &m.quake.position))
    }

    fn feature_count(&self) -> usize {
        self.markers.len()
    }

    fn options(&self) -> serde_json::Value {
        serde_json::json!({
            "markers": self.markers.len(),
            "legend": self.scale.buckets().iter().map(|b| b.label()).collect::<Vec<_>>(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLng;
    use crate::rendering::context::DrawCommand;
    use crate::style::{color_for_depth, radius_for_magnitude};

    fn sample() -> GeoJson {
        r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"mag": 2.5, "place": "Shallow"},
                 "geometry": {"type": "Point", "coordinates": [-150.0, 61.0, 5.0]}},
                {"type": "Feature", "properties": {"mag": 5.1, "place": "Deep"},
                 "geometry": {"type": "Point", "coordinates": [142.0, 38.0, 120.0]}},
                {"type": "Feature", "properties": {"mag": 1.0, "place": "No geometry"},
                 "geometry": null}
            ]
        }"#
        .parse()
        .unwrap()
    }

    fn layer() -> EarthquakeLayer {
        EarthquakeLayer::new(
            "earthquakes".to_string(),
            "Earthquakes".to_string(),
            DepthScale::earthquake(),
        )
    }

    #[test]
    fn test_set_data_styles_every_quake() {
        let mut layer = layer();
        assert_eq!(layer.set_data(&sample()), 2);
        assert_eq!(layer.skipped(), 1);

        let shallow = &layer.markers()[0];
        assert_eq!(shallow.style.fill_color, color_for_depth(5.0));
        assert_eq!(shallow.style.radius, radius_for_magnitude(2.5));

        let deep = &layer.markers()[1];
        assert_eq!(deep.style.fill_color, "#FF4500");
        assert!(deep.popup.content.contains("Deep"));
    }

    #[test]
    fn test_render_emits_one_marker_per_quake() {
        let mut layer = layer();
        layer.set_data(&sample());

        let mut context = RenderContext::new();
        layer.render(&mut context).unwrap();

        assert_eq!(context.count_for_layer("earthquakes"), 2);
        match &context.commands()[0] {
            DrawCommand::CircleMarker { center, style, popup, .. } => {
                assert_eq!(*center, LatLng::new(61.0, -150.0));
                assert_eq!(style.radius, 10.0);
                assert!(popup.is_some());
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_bounds_cover_all_markers() {
        let mut layer = layer();
        assert!(layer.bounds().is_none());

        layer.set_data(&sample());
        let bounds = layer.bounds().unwrap();
        assert_eq!(bounds, LatLngBounds::from_coords(38.0, -150.0, 61.0, 142.0));
    }

    #[test]
    fn test_geojson_export_keeps_depth_and_style() {
        let mut layer = layer();
        layer.set_data(&sample());

        let json = serde_json::to_value(layer.to_geojson().unwrap()).unwrap();
        let feature = &json["features"][1];
        assert_eq!(feature["geometry"]["coordinates"][2], 120.0);
        assert_eq!(feature["properties"]["style"]["fillColor"], "#FF4500");
        assert_eq!(feature["properties"]["style"]["radius"], 20.4);
    }

    #[test]
    fn test_feature_count_and_options() {
        let mut layer = layer();
        assert_eq!(layer.feature_count(), 0);

        layer.set_data(&sample());
        assert_eq!(layer.feature_count(), 2);

        let options = layer.options();
        assert_eq!(options["markers"], 2);
        assert_eq!(options["legend"][0], "-10\u{2013}10");
        assert_eq!(options["legend"][5], "90+");
    }
}
