//! Display list handed to the map widget.
//!
//! Layers and controls never draw anything themselves. They append
//! [`DrawCommand`]s to a [`RenderContext`] and the widget replays them in
//! order, bottom layer first.

use crate::{
    core::geo::LatLng,
    style::{LineStyle, MarkerStyle},
    ui::{controls::LayerControlState, legend::Legend, popup::Popup},
};
use serde::Serialize;

/// Scales a style's opacities by the owning layer's opacity
pub trait StyleConversion {
    fn with_layer_opacity(&self, opacity: f32) -> Self;
}

impl StyleConversion for MarkerStyle {
    fn with_layer_opacity(&self, opacity: f32) -> Self {
        let opacity = f64::from(opacity);
        Self {
            fill_opacity: self.fill_opacity * opacity,
            stroke_opacity: self.stroke_opacity * opacity,
            ..self.clone()
        }
    }
}

impl StyleConversion for LineStyle {
    fn with_layer_opacity(&self, opacity: f32) -> Self {
        Self {
            opacity: self.opacity * f64::from(opacity),
            ..self.clone()
        }
    }
}

/// One drawing instruction for the widget
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DrawCommand {
    /// Initial center and zoom of the map
    View {
        center: LatLng,
        zoom: f64,
    },
    TileLayer {
        layer_id: String,
        url_template: String,
        subdomains: Vec<String>,
        attribution: String,
        opacity: f32,
    },
    CircleMarker {
        layer_id: String,
        center: LatLng,
        style: MarkerStyle,
        popup: Option<Popup>,
    },
    Polyline {
        layer_id: String,
        points: Vec<LatLng>,
        style: LineStyle,
    },
    Legend(Legend),
    LayerControl(LayerControlState),
}

/// Ordered list of draw commands for one rendering pass
#[derive(Debug, Default, Clone, Serialize)]
pub struct RenderContext {
    commands: Vec<DrawCommand>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DrawCommand) {
        self.commands.push(command);
    }

    pub fn set_view(&mut self, center: LatLng, zoom: f64) {
        self.push(DrawCommand::View { center, zoom });
    }

    pub fn draw_circle_marker(
        &mut self,
        layer_id: &str,
        center: LatLng,
        style: MarkerStyle,
        popup: Option<Popup>,
    ) {
        self.push(DrawCommand::CircleMarker {
            layer_id: layer_id.to_string(),
            center,
            style,
            popup,
        });
    }

    pub fn draw_polyline(&mut self, layer_id: &str, points: Vec<LatLng>, style: LineStyle) {
        self.push(DrawCommand::Polyline {
            layer_id: layer_id.to_string(),
            points,
            style,
        });
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Number of commands emitted by one layer
    pub fn count_for_layer(&self, id: &str) -> usize {
        self.commands
            .iter()
            .filter(|command| match command {
                DrawCommand::TileLayer { layer_id, .. }
                | DrawCommand::CircleMarker { layer_id, .. }
                | DrawCommand::Polyline { layer_id, .. } => layer_id == id,
                DrawCommand::View { .. }
                | DrawCommand::Legend(_)
                | DrawCommand::LayerControl(_) => false,
            })
            .count()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }
}
