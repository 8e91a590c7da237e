use crate::{layers::base::LayerTrait, rendering::context::RenderContext, Error, Result};

use crate::prelude::HashMap;

/// Owns the map's base layers and overlays and draws them bottom to top.
pub struct LayerManager {
    layers: HashMap<String, Box<dyn LayerTrait>>,
    /// Layer IDs sorted by z-index; equal z-indices keep insertion order
    render_order: Vec<String>,
}

impl LayerManager {
    pub fn new() -> Self {
        Self {
            layers: HashMap::default(),
            render_order: Vec::new(),
        }
    }

    /// Registers a layer above every layer with the same or a lower z-index.
    /// Fails if the ID is taken.
    pub fn add_layer(&mut self, layer: Box<dyn LayerTrait>) -> Result<()> {
        let layer_id = layer.id().to_string();
        if self.layers.contains_key(&layer_id) {
            return Err(Error::Layer(format!("layer '{}' already exists", layer_id)));
        }

        let z_index = layer.z_index();
        let slot = self
            .render_order
            .partition_point(|id| self.z_index_of(id) <= z_index);

        log::debug!("adding {} layer '{}' at z {}", layer.layer_type(), layer_id, z_index);
        self.layers.insert(layer_id.clone(), layer);
        self.render_order.insert(slot, layer_id);
        Ok(())
    }

    pub fn remove_layer(&mut self, layer_id: &str) -> Option<Box<dyn LayerTrait>> {
        self.render_order.retain(|id| id != layer_id);
        self.layers.remove(layer_id)
    }

    pub fn get_layer(&self, layer_id: &str) -> Option<&dyn LayerTrait> {
        self.layers.get(layer_id).map(|l| l.as_ref())
    }

    /// The layer with this ID, if it is a `T`
    pub fn layer_as<T: 'static>(&self, layer_id: &str) -> Option<&T> {
        self.layers
            .get(layer_id)
            .and_then(|l| l.as_any().downcast_ref::<T>())
    }

    pub fn layer_as_mut<T: 'static>(&mut self, layer_id: &str) -> Option<&mut T> {
        self.layers
            .get_mut(layer_id)
            .and_then(|l| l.as_any_mut().downcast_mut::<T>())
    }

    pub fn with_layer_mut<F, R>(&mut self, layer_id: &str, f: F) -> Option<R>
    where
        F: FnOnce(&mut dyn LayerTrait) -> R,
    {
        self.layers.get_mut(layer_id).map(|layer| f(layer.as_mut()))
    }

    /// Layer IDs, bottom first
    pub fn list_layers(&self) -> Vec<String> {
        self.render_order.clone()
    }

    /// Layers, bottom first
    pub fn layers(&self) -> Vec<&dyn LayerTrait> {
        self.render_order
            .iter()
            .filter_map(|id| self.layers.get(id).map(|l| l.as_ref()))
            .collect()
    }

    /// Renders all visible layers, bottom first
    pub fn render(&self, context: &mut RenderContext) -> Result<()> {
        for layer in self.layers() {
            if layer.is_visible() {
                layer.render(context)?;
            }
        }
        Ok(())
    }

    /// Every layer's options keyed by ID
    pub fn options_by_id(&self) -> serde_json::Map<String, serde_json::Value> {
        self.layers()
            .into_iter()
            .map(|layer| (layer.id().to_string(), layer.options()))
            .collect()
    }

    /// Re-sorts after z-indices were changed in place
    pub fn update_render_order(&mut self) {
        let mut order = std::mem::take(&mut self.render_order);
        order.sort_by_key(|id| self.z_index_of(id));
        self.render_order = order;
    }

    fn z_index_of(&self, layer_id: &str) -> i32 {
        self.layers.get(layer_id).map_or(0, |l| l.z_index())
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

impl Default for LayerManager {
    fn default() -> Self {
        Self::new()
    }
}
