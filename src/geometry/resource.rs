//! The render-resource seam.
//!
//! A [`GeometryResource`] is whatever the renderer draws from: GPU vertex
//! buffers in production ([`crate::gpu::GpuGeometry`]), a CPU mirror in
//! tests and headless runs ([`HostGeometry`]). All sizes and ranges at this
//! seam are in vertices.

use std::ops::Range;

/// Name and per-vertex float width of one vertex attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeLayout {
    /// Attribute name (`"position"`, `"color"`, ...).
    pub name: &'static str,
    /// Floats per vertex.
    pub width: usize,
}

impl AttributeLayout {
    /// Layout entry.
    pub const fn new(name: &'static str, width: usize) -> Self {
        Self { name, width }
    }
}

/// Flat backing storage for one vertex attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributeArray {
    /// Attribute name.
    pub name: &'static str,
    /// Floats per vertex.
    pub width: usize,
    /// `capacity × width` floats.
    pub data: Vec<f32>,
}

impl AttributeArray {
    /// Zero-filled array holding `vertices` vertices.
    pub fn zeroed(layout: AttributeLayout, vertices: usize) -> Self {
        Self {
            name: layout.name,
            width: layout.width,
            data: vec![0.0; vertices * layout.width],
        }
    }

    /// Number of vertices the array can hold.
    pub fn vertices(&self) -> usize {
        if self.width == 0 {
            0
        } else {
            self.data.len() / self.width
        }
    }

    /// Floats covering `vertices`.
    pub fn slice(&self, vertices: Range<usize>) -> &[f32] {
        &self.data[vertices.start * self.width..vertices.end * self.width]
    }
}

/// Something a renderer draws vertex data from.
pub trait GeometryResource {
    /// Allocated size in vertices.
    fn capacity(&self) -> usize;

    /// Reallocate every attribute at `capacity` vertices from the full
    /// backing arrays and set the draw range.
    fn rebuild(
        &mut self,
        attributes: &[AttributeArray],
        capacity: usize,
        draw_range: Range<usize>,
    );

    /// Push `vertices` of each attribute into the existing allocation and
    /// set the draw range. `vertices` never exceeds [`Self::capacity`].
    fn update(
        &mut self,
        attributes: &[AttributeArray],
        vertices: Range<usize>,
        draw_range: Range<usize>,
    );

    /// Change only the vertex range the renderer reads.
    fn set_draw_range(&mut self, range: Range<usize>);

    /// Current draw range.
    fn draw_range(&self) -> Range<usize>;
}

/// CPU-side [`GeometryResource`].
///
/// Keeps a copy of everything pushed to it, plus counters that tell
/// reallocations apart from in-place updates.
#[derive(Debug, Clone, Default)]
pub struct HostGeometry {
    attributes: Vec<AttributeArray>,
    capacity: usize,
    draw_range: Range<usize>,
    generation: u64,
    updates: u64,
}

impl HostGeometry {
    /// Empty resource; the owning buffer performs the first rebuild.
    pub fn new() -> Self {
        Self::default()
    }

    /// Bumped on every rebuild. Stable across in-place updates.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of in-place updates since construction.
    pub fn updates(&self) -> u64 {
        self.updates
    }

    /// Mirrored data of one attribute, full capacity.
    pub fn attribute(&self, name: &str) -> Option<&[f32]> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.data.as_slice())
    }

    /// Mirrored data of one attribute over the draw range.
    pub fn drawn(&self, name: &str) -> Option<&[f32]> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.slice(self.draw_range.clone()))
    }

    /// One vertex of one attribute.
    pub fn vertex(&self, name: &str, index: usize) -> Option<&[f32]> {
        let attr = self.attributes.iter().find(|a| a.name == name)?;
        attr.data.get(index * attr.width..(index + 1) * attr.width)
    }
}

impl GeometryResource for HostGeometry {
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn rebuild(
        &mut self,
        attributes: &[AttributeArray],
        capacity: usize,
        draw_range: Range<usize>,
    ) {
        self.attributes = attributes
            .iter()
            .map(|a| {
                let mut copy = a.clone();
                copy.data.resize(capacity * a.width, 0.0);
                copy
            })
            .collect();
        self.capacity = capacity;
        self.draw_range = draw_range;
        self.generation += 1;
    }

    fn update(
        &mut self,
        attributes: &[AttributeArray],
        vertices: Range<usize>,
        draw_range: Range<usize>,
    ) {
        for (dst, src) in self.attributes.iter_mut().zip(attributes) {
            let span = vertices.start * src.width..vertices.end * src.width;
            dst.data[span.clone()].copy_from_slice(&src.data[span]);
        }
        self.draw_range = draw_range;
        self.updates += 1;
    }

    fn set_draw_range(&mut self, range: Range<usize>) {
        self.draw_range = range;
    }

    fn draw_range(&self) -> Range<usize> {
        self.draw_range.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn arrays(values: &[f32]) -> Vec<AttributeArray> {
        vec![AttributeArray {
            name: "value",
            width: 1,
            data: values.to_vec(),
        }]
    }

    #[test]
    fn test_rebuild_bumps_generation() {
        let mut host = HostGeometry::new();
        assert_eq!(host.generation(), 0);
        host.rebuild(&arrays(&[1.0, 2.0, 0.0]), 3, 0..2);
        assert_eq!(host.generation(), 1);
        assert_eq!(host.capacity(), 3);
        assert_eq!(host.drawn("value"), Some(&[1.0, 2.0][..]));
    }

    #[test]
    fn test_update_copies_only_range() {
        let mut host = HostGeometry::new();
        host.rebuild(&arrays(&[0.0; 4]), 4, 0..0);
        host.update(&arrays(&[9.0, 8.0, 7.0, 6.0]), 1..3, 0..3);
        assert_eq!(host.generation(), 1);
        assert_eq!(host.updates(), 1);
        assert_eq!(host.attribute("value"), Some(&[0.0, 8.0, 7.0, 0.0][..]));
        assert_eq!(host.draw_range(), 0..3);
    }

    #[test]
    fn test_vertex_lookup() {
        let mut host = HostGeometry::new();
        let attrs = vec![AttributeArray {
            name: "position",
            width: 3,
            data: vec![1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
        }];
        host.rebuild(&attrs, 2, 0..2);
        assert_eq!(host.vertex("position", 1), Some(&[4.0, 5.0, 6.0][..]));
        assert_eq!(host.vertex("position", 2), None);
        assert_eq!(host.vertex("color", 0), None);
    }
}
