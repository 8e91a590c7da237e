//! The application context: every layer and control of one map, owned in one
//! place and mutated only through `&mut MapContext`.

use crate::{
    constants::{EARTHQUAKES_NAME, TECTONIC_PLATES_NAME},
    core::{config::QuakeMapConfig, geo::LatLngBounds},
    data::geojson::GeoJson,
    layers::{
        base::LayerTrait,
        earthquake::EarthquakeLayer,
        manager::LayerManager,
        plates::TectonicPlateLayer,
        tile::{TileLayer, TileLayerOptions},
    },
    rendering::context::{DrawCommand, RenderContext},
    ui::{controls::LayerControl, legend::Legend},
    Error, Result,
};

pub const EARTHQUAKE_LAYER_ID: &str = "earthquakes";
pub const PLATES_LAYER_ID: &str = "tectonic-plates";

/// Overlays fed by a remote GeoJSON source
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    Earthquakes,
    TectonicPlates,
}

impl OverlayKind {
    pub fn layer_id(&self) -> &'static str {
        match self {
            OverlayKind::Earthquakes => EARTHQUAKE_LAYER_ID,
            OverlayKind::TectonicPlates => PLATES_LAYER_ID,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            OverlayKind::Earthquakes => EARTHQUAKES_NAME,
            OverlayKind::TectonicPlates => TECTONIC_PLATES_NAME,
        }
    }
}

impl std::fmt::Display for OverlayKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

pub struct MapContext {
    config: QuakeMapConfig,
    layers: LayerManager,
    legend: Legend,
    control: LayerControl,
}

impl MapContext {
    /// Builds the map from a validated configuration: base layers with the
    /// first one selected, and both overlays empty and hidden until their
    /// data arrives.
    pub fn new(config: QuakeMapConfig) -> Result<Self> {
        config.validate()?;
        let scale = config.legend.depth_scale()?;

        let mut layers = LayerManager::new();
        let mut control = LayerControl::new(config.layer_control.clone());

        for (i, base) in config.base_layers.iter().enumerate() {
            let id = format!("base-{}", i);
            layers.add_layer(Box::new(TileLayer::with_options(
                id.clone(),
                base.name.clone(),
                TileLayerOptions::from(base),
            )))?;
            control.add_base_layer(base.name.clone(), id);
        }

        let mut earthquakes = EarthquakeLayer::new(
            EARTHQUAKE_LAYER_ID.to_string(),
            EARTHQUAKES_NAME.to_string(),
            scale.clone(),
        );
        earthquakes.set_visible(false);
        layers.add_layer(Box::new(earthquakes))?;
        control.add_overlay(EARTHQUAKES_NAME, EARTHQUAKE_LAYER_ID);

        let mut plates = TectonicPlateLayer::new(
            PLATES_LAYER_ID.to_string(),
            TECTONIC_PLATES_NAME.to_string(),
            config.overlays.plate_style.clone(),
        );
        plates.set_visible(false);
        layers.add_layer(Box::new(plates))?;
        control.add_overlay(TECTONIC_PLATES_NAME, PLATES_LAYER_ID);

        control.select_base_layer(&mut layers, &config.base_layers[0].name)?;

        let legend = Legend::new(&scale, config.legend.position);

        Ok(Self {
            config,
            layers,
            legend,
            control,
        })
    }

    pub fn config(&self) -> &QuakeMapConfig {
        &self.config
    }

    pub fn layers(&self) -> &LayerManager {
        &self.layers
    }

    pub fn legend(&self) -> &Legend {
        &self.legend
    }

    pub fn layer_control(&self) -> &LayerControl {
        &self.control
    }

    /// Loads fetched data into an overlay and shows it if configured to.
    /// Returns the number of features the layer now holds.
    pub fn apply_feed(&mut self, kind: OverlayKind, data: &GeoJson) -> Result<usize> {
        match kind {
            OverlayKind::Earthquakes => self.apply_earthquakes(data),
            OverlayKind::TectonicPlates => self.apply_plates(data),
        }
    }

    pub fn apply_earthquakes(&mut self, data: &GeoJson) -> Result<usize> {
        let show = self.config.overlays.show_earthquakes;
        let layer = self.layer_mut::<EarthquakeLayer>(EARTHQUAKE_LAYER_ID)?;
        let count = layer.set_data(data);
        layer.set_visible(show);
        log::info!("{}: {} markers", EARTHQUAKES_NAME, count);
        Ok(count)
    }

    pub fn apply_plates(&mut self, data: &GeoJson) -> Result<usize> {
        let show = self.config.overlays.show_plates;
        let layer = self.layer_mut::<TectonicPlateLayer>(PLATES_LAYER_ID)?;
        let count = layer.set_data(data);
        layer.set_visible(show);
        log::info!("{}: {} boundaries", TECTONIC_PLATES_NAME, count);
        Ok(count)
    }

    pub fn select_base_layer(&mut self, name: &str) -> Result<()> {
        self.control.select_base_layer(&mut self.layers, name)
    }

    pub fn set_overlay_visible(&mut self, name: &str, visible: bool) -> Result<()> {
        self.control
            .set_overlay_visible(&mut self.layers, name, visible)
    }

    pub fn selected_base_layer(&self) -> Option<&str> {
        self.control.selected_base_layer(&self.layers)
    }

    pub fn earthquakes(&self) -> Option<&EarthquakeLayer> {
        self.layers.layer_as(EARTHQUAKE_LAYER_ID)
    }

    pub fn plates(&self) -> Option<&TectonicPlateLayer> {
        self.layers.layer_as(PLATES_LAYER_ID)
    }

    /// Extent of all loaded overlay data
    pub fn data_bounds(&self) -> Option<LatLngBounds> {
        [EARTHQUAKE_LAYER_ID, PLATES_LAYER_ID]
            .iter()
            .filter_map(|id| self.layers.get_layer(id).and_then(|l| l.bounds()))
            .reduce(|a, b| a.union(&b))
    }

    /// Styled earthquakes as GeoJSON
    pub fn export_earthquakes(&self) -> Result<GeoJson> {
        self.earthquakes()
            .ok_or_else(|| Error::Layer(format!("layer '{}' is missing", EARTHQUAKE_LAYER_ID)))?
            .to_geojson()
    }

    /// Sets the initial view, draws the visible layers bottom first, then
    /// the legend and the layer-selection control.
    pub fn render(&self, context: &mut RenderContext) -> Result<()> {
        context.set_view(self.config.view.center, self.config.view.zoom);
        self.layers.render(context)?;
        context.push(DrawCommand::Legend(self.legend.clone()));
        context.push(DrawCommand::LayerControl(self.control.state(&self.layers)));
        Ok(())
    }

    fn layer_mut<T: 'static>(&mut self, layer_id: &str) -> Result<&mut T> {
        self.layers
            .layer_as_mut::<T>(layer_id)
            .ok_or_else(|| Error::Layer(format!("layer '{}' is missing", layer_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::{BASIC_MAP_NAME, STREET_MAP_NAME};
    use crate::core::geo::LatLng;

    fn quakes() -> GeoJson {
        r#"{"type": "FeatureCollection", "features": [
            {"type": "Feature", "properties": {"mag": 3.0, "place": "A"},
             "geometry": {"type": "Point", "coordinates": [10.0, 20.0, 5.0]}}
        ]}"#
        .parse()
        .unwrap()
    }

    fn plates() -> GeoJson {
        r#"{"type": "FeatureCollection", "features": [
            {"type": "Feature", "properties": {"Name": "AF-AN"},
             "geometry": {"type": "LineString", "coordinates": [[0.0, -50.0], [1.0, -51.0]]}}
        ]}"#
        .parse()
        .unwrap()
    }

    #[test]
    fn test_new_context_layout() {
        let context = MapContext::new(QuakeMapConfig::default()).unwrap();

        assert_eq!(context.layers().len(), 4);
        assert_eq!(context.selected_base_layer(), Some(BASIC_MAP_NAME));
        assert!(!context.layers().get_layer(EARTHQUAKE_LAYER_ID).unwrap().is_visible());
        assert!(context.earthquakes().unwrap().is_empty());
        assert!(context.data_bounds().is_none());
    }

    #[test]
    fn test_earthquakes_shown_once_loaded_plates_stay_hidden() {
        let mut context = MapContext::new(QuakeMapConfig::default()).unwrap();

        assert_eq!(context.apply_feed(OverlayKind::Earthquakes, &quakes()).unwrap(), 1);
        assert_eq!(context.apply_feed(OverlayKind::TectonicPlates, &plates()).unwrap(), 1);

        let state = context.layer_control().state(context.layers());
        assert_eq!(
            state.overlays,
            vec![
                (EARTHQUAKES_NAME.to_string(), true),
                (TECTONIC_PLATES_NAME.to_string(), false)
            ]
        );

        context.set_overlay_visible(TECTONIC_PLATES_NAME, true).unwrap();
        assert!(context.plates().unwrap().is_visible());
    }

    #[test]
    fn test_render_order() {
        let mut context = MapContext::new(QuakeMapConfig::default()).unwrap();
        context.apply_earthquakes(&quakes()).unwrap();
        context.apply_plates(&plates()).unwrap();
        context.set_overlay_visible(TECTONIC_PLATES_NAME, true).unwrap();
        context.select_base_layer(STREET_MAP_NAME).unwrap();

        let mut render = RenderContext::new();
        context.render(&mut render).unwrap();

        let kinds: Vec<&str> = render
            .commands()
            .iter()
            .map(|c| match c {
                DrawCommand::View { .. } => "view",
                DrawCommand::TileLayer { .. } => "tile",
                DrawCommand::Polyline { .. } => "polyline",
                DrawCommand::CircleMarker { .. } => "marker",
                DrawCommand::Legend(_) => "legend",
                DrawCommand::LayerControl(_) => "control",
            })
            .collect();
        assert_eq!(kinds, vec!["view", "tile", "polyline", "marker", "legend", "control"]);
        assert_eq!(
            render.commands()[0],
            DrawCommand::View {
                center: LatLng::new(20.0, 0.0),
                zoom: 2.0
            }
        );
        assert_eq!(render.count_for_layer("base-1"), 1);
        assert_eq!(render.count_for_layer("base-0"), 0);
    }

    #[test]
    fn test_data_bounds_and_export() {
        let mut context = MapContext::new(QuakeMapConfig::default()).unwrap();
        context.apply_earthquakes(&quakes()).unwrap();
        context.apply_plates(&plates()).unwrap();

        let bounds = context.data_bounds().unwrap();
        assert_eq!(bounds, LatLngBounds::from_coords(-51.0, 0.0, 20.0, 10.0));

        let exported = context.export_earthquakes().unwrap();
        assert_eq!(exported.features().len(), 1);
    }

    #[test]
    fn test_configured_view_is_rendered_first() {
        let config = QuakeMapConfig::from_json_str(r#"{"view": {"center": {"lat": 35.0, "lng": 139.0}, "zoom": 7}}"#)
            .unwrap();
        let context = MapContext::new(config).unwrap();

        let mut render = RenderContext::new();
        context.render(&mut render).unwrap();

        let json = serde_json::to_value(render.commands()).unwrap();
        assert_eq!(json[0]["kind"], "view");
        assert_eq!(json[0]["zoom"], 7.0);
        assert_eq!(json[0]["center"]["lat"], 35.0);
        assert_eq!(json[0]["center"]["lng"], 139.0);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let config = QuakeMapConfig {
            base_layers: vec![],
            ..QuakeMapConfig::default()
        };
        assert!(matches!(MapContext::new(config), Err(Error::InvalidConfig(_))));
    }
}
