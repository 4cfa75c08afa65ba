//! Dynamic line segments: two vertices per segment.

use super::dynamic_buffer::{DynamicBuffer, DEFAULT_CAPACITY};
use super::resource::{AttributeLayout, GeometryResource};
use crate::math::Vec3;
use crate::util::color::Color;

/// Vertex attributes of a line endpoint: position, RGBA color.
pub const LINE_LAYOUT: [AttributeLayout; 2] = [
    AttributeLayout::new("position", 3),
    AttributeLayout::new("color", 4),
];

/// Growable set of line segments with per-endpoint colors.
///
/// Draw ranges are in vertices, so `n` segments draw `[0, 2n)`.
#[derive(Debug)]
pub struct DynamicLines<R> {
    buffer: DynamicBuffer<R>,
}

impl<R: GeometryResource> DynamicLines<R> {
    /// Default capacity and growth step.
    pub fn new(resource: R) -> Self {
        Self::with_capacity(DEFAULT_CAPACITY, DEFAULT_CAPACITY, resource)
    }

    /// Initial capacity and growth step in segments.
    pub fn with_capacity(
        capacity: usize,
        increment: usize,
        resource: R,
    ) -> Self {
        let buffer =
            DynamicBuffer::new(&LINE_LAYOUT, 2, capacity, increment, resource);
        Self { buffer }
    }

    /// Append a segment from `a` to `b`, shading from `color_a` to
    /// `color_b`.
    pub fn add(
        &mut self,
        a: impl Into<Vec3>,
        b: impl Into<Vec3>,
        color_a: impl Into<Color>,
        color_b: impl Into<Color>,
    ) -> &mut Self {
        let (a, b) = (a.into(), b.into());
        let (ca, cb) = (color_a.into(), color_b.into());
        let positions = [a.x, a.y, a.z, b.x, b.y, b.z];
        let colors = [ca.r, ca.g, ca.b, ca.a, cb.r, cb.g, cb.b, cb.a];
        let _ = self.buffer.push(&[&positions, &colors]);
        self
    }

    /// Append a single-colored segment.
    pub fn add_solid(
        &mut self,
        a: impl Into<Vec3>,
        b: impl Into<Vec3>,
        color: impl Into<Color>,
    ) -> &mut Self {
        let color = color.into();
        self.add(a, b, color, color)
    }

    /// Drop all segments.
    pub fn reset(&mut self) -> &mut Self {
        let _ = self.buffer.reset();
        self
    }

    /// Reconcile with the resource.
    pub fn sync(&mut self) -> &mut Self {
        let _ = self.buffer.sync();
        self
    }

    /// Active segments.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether there are no active segments.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Allocated segments.
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Whether segments changed since the last sync.
    pub fn is_dirty(&self) -> bool {
        self.buffer.is_dirty()
    }

    /// Underlying buffer.
    pub fn buffer(&self) -> &DynamicBuffer<R> {
        &self.buffer
    }

    /// Underlying buffer, mutably.
    pub fn buffer_mut(&mut self) -> &mut DynamicBuffer<R> {
        &mut self.buffer
    }

    /// The render resource.
    pub fn resource(&self) -> &R {
        self.buffer.resource()
    }

    /// The render resource, mutably.
    pub fn resource_mut(&mut self) -> &mut R {
        self.buffer.resource_mut()
    }
}
