//! Shared trait abstractions
//!
//! Layers of every kind go through [`LayerOperations`], so the layer manager
//! and the layer-selection control can treat tiles, markers and lines alike.

use crate::{
    core::geo::LatLngBounds, layers::base::LayerType, rendering::context::RenderContext, Result,
};

/// Common layer operations
pub trait LayerOperations: Send + Sync {
    /// Unique layer ID
    fn id(&self) -> &str;

    /// Display name, as listed by the layer-selection control
    fn name(&self) -> &str;

    fn layer_type(&self) -> LayerType;

    fn is_visible(&self) -> bool;

    fn set_visible(&mut self, visible: bool);

    fn opacity(&self) -> f32;

    fn set_opacity(&mut self, opacity: f32);

    fn z_index(&self) -> i32;

    fn set_z_index(&mut self, z_index: i32);

    /// Emit this layer's draw commands
    fn render(&self, context: &mut RenderContext) -> Result<()>;

    /// Geographic extent of the layer's data, if it has any
    fn bounds(&self) -> Option<LatLngBounds> {
        None
    }

    /// Number of data features currently held
    fn feature_count(&self) -> usize {
        0
    }

    /// Layer options as JSON, in the shape a widget would receive them
    fn options(&self) -> serde_json::Value;

    fn as_any(&self) -> &dyn std::any::Any;
    fn as_any_mut(&mut self) -> &mut dyn std::any::Any;
}
