//! Marker styling and depth bucketing.
//!
//! Everything here is a pure function of its input: the same depth always
//! yields the same color, and the legend is built from the very table that
//! colors the markers.

pub mod depth;
pub mod marker;

pub use depth::{color_for_depth, legend_buckets, DepthBucket, DepthScale};
pub use marker::{radius_for_magnitude, style_for, LineStyle, MarkerStyle};
