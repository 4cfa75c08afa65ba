//! GPU-side render resources.
//!
//! [`GpuGeometry`] backs dynamic points and lines with wgpu vertex
//! buffers; the free functions describe those buffers to a pipeline.

/// wgpu vertex buffers implementing the geometry resource seam.
pub mod geometry;

pub use geometry::{array_stride, vertex_attribute, vertex_format, GpuGeometry};
