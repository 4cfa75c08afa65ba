//! Dynamic point and line geometry.
//!
//! [`DynamicBuffer`] owns growable CPU-side attribute arrays and reconciles
//! them once per frame with a [`GeometryResource`]. [`DynamicPoints`] and
//! [`DynamicLines`] fix the vertex layout; [`VisDebug`] pairs them for
//! debug drawing.

/// Growable, version-tracked element storage.
pub mod dynamic_buffer;
/// Line segments.
pub mod lines;
/// Point clouds.
pub mod points;
/// The render-resource seam and its CPU implementation.
pub mod resource;
/// Debug-draw bundle.
pub mod vis_debug;

pub use dynamic_buffer::{DynamicBuffer, DEFAULT_CAPACITY};
pub use lines::{DynamicLines, LINE_LAYOUT};
pub use points::{
    DynamicPoints, DEFAULT_POINT_COLOR, DEFAULT_POINT_SIZE, POINT_LAYOUT,
};
pub use resource::{
    AttributeArray, AttributeLayout, GeometryResource, HostGeometry,
};
pub use vis_debug::VisDebug;
