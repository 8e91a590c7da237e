use crate::{
    core::config::LayerControlConfig,
    layers::manager::LayerManager,
    ui::elements::Position,
    Error, Result,
};
use serde::Serialize;

/// A named entry of the layer-selection control
#[derive(Debug, Clone, PartialEq)]
pub struct LayerEntry {
    pub name: String,
    pub layer_id: String,
}

/// What the control shows: one radio per base layer, one checkbox per overlay
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayerControlState {
    pub position: Position,
    pub collapsed: bool,
    /// `(name, selected)` in insertion order
    pub base_layers: Vec<(String, bool)>,
    /// `(name, checked)` in insertion order
    pub overlays: Vec<(String, bool)>,
}

/// Layer-selection control.
///
/// Switching is applied to the layers' visibility in a [`LayerManager`]: base
/// layers are exclusive, overlays toggle independently.
#[derive(Debug, Clone)]
pub struct LayerControl {
    config: LayerControlConfig,
    base_layers: Vec<LayerEntry>,
    overlays: Vec<LayerEntry>,
}

impl LayerControl {
    pub fn new(config: LayerControlConfig) -> Self {
        Self {
            config,
            base_layers: Vec::new(),
            overlays: Vec::new(),
        }
    }

    pub fn add_base_layer(&mut self, name: impl Into<String>, layer_id: impl Into<String>) {
        self.base_layers.push(LayerEntry {
            name: name.into(),
            layer_id: layer_id.into(),
        });
    }

    pub fn add_overlay(&mut self, name: impl Into<String>, layer_id: impl Into<String>) {
        self.overlays.push(LayerEntry {
            name: name.into(),
            layer_id: layer_id.into(),
        });
    }

    pub fn base_layers(&self) -> &[LayerEntry] {
        &self.base_layers
    }

    pub fn overlays(&self) -> &[LayerEntry] {
        &self.overlays
    }

    /// Shows the named base layer and hides every other one
    pub fn select_base_layer(&self, layers: &mut LayerManager, name: &str) -> Result<()> {
        if !self.base_layers.iter().any(|entry| entry.name == name) {
            return Err(Error::Layer(format!("unknown base layer '{}'", name)));
        }

        for entry in &self.base_layers {
            let selected = entry.name == name;
            layers.with_layer_mut(&entry.layer_id, |layer| layer.set_visible(selected));
        }
        log::debug!("base layer switched to {}", name);
        Ok(())
    }

    /// Checks or unchecks the named overlay
    pub fn set_overlay_visible(
        &self,
        layers: &mut LayerManager,
        name: &str,
        visible: bool,
    ) -> Result<()> {
        let entry = self
            .overlays
            .iter()
            .find(|entry| entry.name == name)
            .ok_or_else(|| Error::Layer(format!("unknown overlay '{}'", name)))?;

        layers
            .with_layer_mut(&entry.layer_id, |layer| layer.set_visible(visible))
            .ok_or_else(|| Error::Layer(format!("overlay layer '{}' is missing", entry.layer_id)))
    }

    /// Name of the base layer currently shown
    pub fn selected_base_layer(&self, layers: &LayerManager) -> Option<&str> {
        self.base_layers
            .iter()
            .find(|entry| is_visible(layers, &entry.layer_id))
            .map(|entry| entry.name.as_str())
    }

    pub fn state(&self, layers: &LayerManager) -> LayerControlState {
        let flags = |entries: &[LayerEntry]| -> Vec<(String, bool)> {
            entries
                .iter()
                .map(|entry| (entry.name.clone(), is_visible(layers, &entry.layer_id)))
                .collect()
        };

        LayerControlState {
            position: self.config.position,
            collapsed: self.config.collapsed,
            base_layers: flags(&self.base_layers),
            overlays: flags(&self.overlays),
        }
    }
}

fn is_visible(layers: &LayerManager, layer_id: &str) -> bool {
    layers
        .get_layer(layer_id)
        .map(|layer| layer.is_visible())
        .unwrap_or(false)
}
