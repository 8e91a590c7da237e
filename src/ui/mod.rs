pub mod controls;
pub mod elements;
pub mod legend;
pub mod popup;

pub use controls::{LayerControl, LayerControlState, LayerEntry};
pub use elements::Position;
pub use legend::{Legend, LegendEntry};
pub use popup::Popup;
