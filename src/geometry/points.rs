//! Dynamic point cloud: one vertex per point.

use super::dynamic_buffer::{DynamicBuffer, DEFAULT_CAPACITY};
use super::resource::{AttributeLayout, GeometryResource};
use crate::math::Vec3;
use crate::util::color::Color;

/// Vertex attributes of a point: position, RGBA color, size.
pub const POINT_LAYOUT: [AttributeLayout; 3] = [
    AttributeLayout::new("position", 3),
    AttributeLayout::new("color", 4),
    AttributeLayout::new("size", 1),
];

/// Default point color (`#00ff00`).
pub const DEFAULT_POINT_COLOR: Color = Color::GREEN;

/// Default point size.
pub const DEFAULT_POINT_SIZE: f32 = 0.2;

/// Growable set of colored, sized points.
#[derive(Debug)]
pub struct DynamicPoints<R> {
    buffer: DynamicBuffer<R>,
}

impl<R: GeometryResource> DynamicPoints<R> {
    /// Default capacity and growth step.
    pub fn new(resource: R) -> Self {
        Self::with_capacity(DEFAULT_CAPACITY, DEFAULT_CAPACITY, resource)
    }

    /// Initial capacity and growth step in points.
    pub fn with_capacity(
        capacity: usize,
        increment: usize,
        resource: R,
    ) -> Self {
        let buffer =
            DynamicBuffer::new(&POINT_LAYOUT, 1, capacity, increment, resource);
        Self { buffer }
    }

    /// Append a point.
    pub fn add(
        &mut self,
        position: impl Into<Vec3>,
        color: impl Into<Color>,
        size: f32,
    ) -> &mut Self {
        let position = position.into().to_array();
        let color = color.into().to_array();
        let _ = self.buffer.push(&[&position, &color, &[size]]);
        self
    }

    /// Append a point with the default color and size.
    pub fn add_default(&mut self, position: impl Into<Vec3>) -> &mut Self {
        self.add(position, DEFAULT_POINT_COLOR, DEFAULT_POINT_SIZE)
    }

    /// Drop all points; see [`DynamicBuffer::reset`].
    pub fn reset(&mut self) -> &mut Self {
        let _ = self.buffer.reset();
        self
    }

    /// Reconcile with the resource; see [`DynamicBuffer::sync`].
    pub fn sync(&mut self) -> &mut Self {
        let _ = self.buffer.sync();
        self
    }

    /// Active points.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Whether there are no active points.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Allocated points.
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Whether points changed since the last sync.
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
