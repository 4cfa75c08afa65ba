//! Growable, version-tracked vertex storage reconciled with a
//! [`GeometryResource`].
//!
//! The CPU side grows in fixed steps and never shrinks. The resource is
//! only reallocated when the CPU capacity outgrew it; otherwise `sync`
//! pushes just the elements written since the previous sync.

use std::ops::Range;

use super::resource::{AttributeArray, AttributeLayout, GeometryResource};
use crate::error::GfxError;

/// Elements allocated up front and added per growth step.
pub const DEFAULT_CAPACITY: usize = 20;

/// Dynamic element buffer.
///
/// An element is `vertices_per_element` consecutive vertices (1 for points,
/// 2 for line segments). Every mutation bumps a version counter; the
/// buffer is dirty while that version differs from the last synced one.
#[derive(Debug)]
pub struct DynamicBuffer<R> {
    attributes: Vec<AttributeArray>,
    vertices_per_element: usize,
    capacity: usize,
    count: usize,
    increment: usize,
    version: u64,
    synced_version: u64,
    // First element written since the last sync.
    dirty_start: usize,
    resource: R,
}

impl<R: GeometryResource> DynamicBuffer<R> {
    /// Allocate `capacity` elements and perform the initial (empty) rebuild
    /// of `resource`. Zero capacity or increment is raised to 1.
    pub fn new(
        layout: &[AttributeLayout],
        vertices_per_element: usize,
        capacity: usize,
        increment: usize,
        mut resource: R,
    ) -> Self {
        let vertices_per_element = vertices_per_element.max(1);
        let capacity = capacity.max(1);
        let vertices = capacity * vertices_per_element;
        let attributes: Vec<_> = layout
            .iter()
            .map(|&l| AttributeArray::zeroed(l, vertices))
            .collect();
        resource.rebuild(&attributes, vertices, 0..0);

        Self {
            attributes,
            vertices_per_element,
            capacity,
            count: 0,
            increment: increment.max(1),
            version: 0,
            synced_version: 0,
            dirty_start: 0,
            resource,
        }
    }

    /// Append one element.
    ///
    /// `values[i]` carries attribute `i` for every vertex of the element,
    /// i.e. `width × vertices_per_element` floats. Grows by the increment
    /// when full. A malformed element is logged and dropped; see
    /// [`Self::try_push`].
    pub fn push(&mut self, values: &[&[f32]]) -> &mut Self {
        match self.check_element(values) {
            Ok(()) => self.write_element(values),
            Err(e) => log::error!("{e}"),
        }
        self
    }

    /// Append one element, or fail without touching the buffer when
    /// `values` does not match the layout.
    pub fn try_push(
        &mut self,
        values: &[&[f32]],
    ) -> Result<&mut Self, GfxError> {
        self.check_element(values)?;
        self.write_element(values);
        Ok(self)
    }

    fn check_element(&self, values: &[&[f32]]) -> Result<(), GfxError> {
        if values.len() != self.attributes.len() {
            return Err(GfxError::ElementShape(format!(
                "expected {} attributes, got {}",
                self.attributes.len(),
                values.len()
            )));
        }
        for (attr, src) in self.attributes.iter().zip(values) {
            let len = attr.width * self.vertices_per_element;
            if src.len() != len {
                return Err(GfxError::ElementShape(format!(
                    "attribute '{}' expects {len} floats, got {}",
                    attr.name,
                    src.len()
                )));
            }
        }
        Ok(())
    }

    fn write_element(&mut self, values: &[&[f32]]) {
        if self.count == self.capacity {
            self.grow();
        }

        let first = self.count * self.vertices_per_element;
        for (attr, src) in self.attributes.iter_mut().zip(values) {
            let start = first * attr.width;
            attr.data[start..start + src.len()].copy_from_slice(src);
        }

        self.dirty_start = self.dirty_start.min(self.count);
        self.count += 1;
        self.version += 1;
    }

    fn grow(&mut self) {
        let capacity = self.capacity + self.increment;
        log::debug!(
            "dynamic buffer growing {} -> {capacity} elements",
            self.capacity
        );
        for attr in &mut self.attributes {
            let floats = capacity * self.vertices_per_element * attr.width;
            attr.data.resize(floats, 0.0);
        }
        self.capacity = capacity;
    }

    /// Drop all elements. The resource's draw range is cleared right away;
    /// backing data and dirtiness are left alone.
    pub fn reset(&mut self) -> &mut Self {
        self.count = 0;
        self.resource.set_draw_range(0..0);
        self
    }

    /// Reconcile the resource with the CPU data. No-op when clean.
    pub fn sync(&mut self) -> &mut Self {
        if !self.is_dirty() {
            return self;
        }

        let vpe = self.vertices_per_element;
        let vertex_capacity = self.capacity * vpe;
        let draw_range = 0..self.count * vpe;

        if self.resource.capacity() < vertex_capacity {
            log::debug!(
                "resizing geometry resource: {} -> {vertex_capacity} vertices",
                self.resource.capacity()
            );
            self.resource
                .rebuild(&self.attributes, vertex_capacity, draw_range);
        } else {
            let written = self.written_vertices();
            if written.is_empty() {
                self.resource.set_draw_range(draw_range);
            } else {
                self.resource.update(&self.attributes, written, draw_range);
            }
        }

        self.synced_version = self.version;
        self.dirty_start = self.count;
        self
    }

    /// Vertex range written since the last sync.
    fn written_vertices(&self) -> Range<usize> {
        let vpe = self.vertices_per_element;
        self.dirty_start.min(self.count) * vpe..self.count * vpe
    }

    /// Active element count.
    pub fn len(&self) -> usize {
        self.count
    }

    /// Whether no elements are active.
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Allocated elements on the CPU side.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Elements added per growth step.
    pub fn increment(&self) -> usize {
        self.increment
    }

    /// Change the growth step (minimum 1).
    pub fn set_increment(&mut self, increment: usize) {
        self.increment = increment.max(1);
    }

    /// Vertices per element.
    pub fn vertices_per_element(&self) -> usize {
        self.vertices_per_element
    }

    /// Mutation counter.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Whether CPU data changed since the last sync.
    pub fn is_dirty(&self) -> bool {
        self.version != self.synced_version
    }

    /// Active vertices of one attribute.
    pub fn attribute(&self, name: &str) -> Option<&[f32]> {
        let active = 0..self.count * self.vertices_per_element;
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.slice(active))
    }

    /// The render resource.
    pub fn resource(&self) -> &R {
        &self.resource
    }

    /// The render resource, mutably.
    pub fn resource_mut(&mut self) -> &mut R {
        &mut self.resource
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::resource::HostGeometry;

    const LAYOUT: [AttributeLayout; 2] = [
        AttributeLayout::new("value", 1),
        AttributeLayout::new("pair", 2),
    ];

    fn buffer(
        capacity: usize,
        increment: usize,
    ) -> DynamicBuffer<HostGeometry> {
        let host = HostGeometry::new();
        DynamicBuffer::new(&LAYOUT, 1, capacity, increment, host)
    }

    #[allow(clippy::cast_precision_loss)]
    fn push_n(buf: &mut DynamicBuffer<HostGeometry>, n: usize) {
        for i in 0..n {
            let v = i as f32;
            let _ = buf.push(&[&[v], &[v, -v]]);
        }
    }

    #[test]
    fn test_new_is_clean_and_rebuilt() {
        let buf = buffer(4, 4);
        assert!(!buf.is_dirty());
        assert!(buf.is_empty());
        assert_eq!(buf.resource().generation(), 1);
        assert_eq!(buf.resource().capacity(), 4);
        assert_eq!(buf.resource().draw_range(), 0..0);
    }

    #[test]
    fn test_push_marks_dirty_and_sync_clears() {
        let mut buf = buffer(4, 4);
        let _ = buf.push(&[&[1.0], &[2.0, 3.0]]);
        assert!(buf.is_dirty());
        assert_eq!(buf.version(), 1);
        let _ = buf.sync();
        assert!(!buf.is_dirty());
        assert_eq!(buf.resource().draw_range(), 0..1);
        assert_eq!(buf.resource().vertex("pair", 0), Some(&[2.0, 3.0][..]));
    }

    #[test]
    fn test_growth_keeps_low_range() {
        let mut buf = buffer(2, 3);
        push_n(&mut buf, 3);
        assert_eq!(buf.capacity(), 5);
        assert_eq!(buf.attribute("value"), Some(&[0.0, 1.0, 2.0][..]));

        let _ = buf.sync();
        assert_eq!(buf.resource().generation(), 2);
        assert_eq!(buf.resource().capacity(), 5);
        let pairs = [0.0, -0.0, 1.0, -1.0, 2.0, -2.0];
        assert_eq!(buf.resource().drawn("pair"), Some(&pairs[..]));
    }

    #[test]
    fn test_sync_pushes_only_new_elements() {
        let mut buf = buffer(8, 8);
        push_n(&mut buf, 2);
        let _ = buf.sync();
        let _ = buf.push(&[&[7.0], &[7.0, 7.0]]);
        assert_eq!(buf.written_vertices(), 2..3);
        let _ = buf.sync();
        assert_eq!(buf.resource().updates(), 2);
        assert_eq!(buf.resource().generation(), 1);
        assert_eq!(buf.resource().drawn("value"), Some(&[0.0, 1.0, 7.0][..]));
    }

    #[test]
    fn test_reset_keeps_dirtiness_and_clears_draw_range() {
        let mut buf = buffer(4, 4);
        push_n(&mut buf, 3);
        let _ = buf.sync();
        assert_eq!(buf.resource().draw_range(), 0..3);

        let _ = buf.reset();
        assert!(!buf.is_dirty());
        assert_eq!(buf.len(), 0);
        assert_eq!(buf.resource().draw_range(), 0..0);

        // Clean, so sync does not touch the resource.
        let _ = buf.sync();
        assert_eq!(buf.resource().updates(), 1);
    }

    #[test]
    fn test_reset_while_dirty_then_sync() {
        let mut buf = buffer(4, 4);
        push_n(&mut buf, 2);
        let _ = buf.reset();
        assert!(buf.is_dirty());
        let _ = buf.sync();
        assert!(!buf.is_dirty());
        assert_eq!(buf.resource().draw_range(), 0..0);
        assert_eq!(buf.resource().updates(), 0);
    }

    #[test]
    fn test_rewrites_after_reset_overwrite_from_zero() {
        let mut buf = buffer(4, 4);
        push_n(&mut buf, 3);
        let _ = buf.sync();
        let _ = buf.reset();
        let _ = buf.push(&[&[42.0], &[0.0, 0.0]]);
        let _ = buf.sync();
        assert_eq!(buf.resource().generation(), 1);
        assert_eq!(buf.resource().drawn("value"), Some(&[42.0][..]));
    }

    #[test]
    fn test_zero_sizes_are_clamped() {
        let mut buf = buffer(0, 0);
        assert_eq!(buf.capacity(), 1);
        assert_eq!(buf.increment(), 1);
        push_n(&mut buf, 3);
        assert_eq!(buf.capacity(), 3);
        buf.set_increment(0);
        assert_eq!(buf.increment(), 1);
    }

    #[test]
    fn test_malformed_push_is_dropped() {
        let mut buf = buffer(4, 4);
        push_n(&mut buf, 1);
        let _ = buf.sync();

        let _ = buf.push(&[&[1.0]]);
        let _ = buf.push(&[&[1.0], &[2.0]]);
        let _ = buf.push(&[&[1.0, 1.0], &[2.0, 3.0]]);
        assert_eq!(buf.len(), 1);
        assert_eq!(buf.version(), 1);
        assert!(!buf.is_dirty());

        let err = buf.try_push(&[&[1.0], &[2.0]]).unwrap_err();
        assert!(matches!(err, GfxError::ElementShape(_)));
        assert!(err.to_string().contains("'pair'"), "{err}");
        assert_eq!(buf.attribute("value"), Some(&[0.0][..]));
    }

    #[test]
    fn test_try_push_appends_valid_element() {
        let mut buf = buffer(1, 1);
        push_n(&mut buf, 1);
        let _ = buf.try_push(&[&[5.0], &[6.0, 7.0]]).unwrap().sync();
        assert_eq!(buf.capacity(), 2);
        assert_eq!(buf.resource().vertex("pair", 1), Some(&[6.0, 7.0][..]));
    }
}
