//! wgpu-backed [`GeometryResource`]: one vertex buffer per attribute.
//!
//! A rebuild replaces every buffer with a freshly initialized one sized to
//! the new capacity, which invalidates anything bound to the old buffers.
//! Updates write only the dirty byte range through the queue.

use std::ops::Range;

use wgpu::util::DeviceExt;

use crate::geometry::{AttributeArray, GeometryResource};

const F32_SIZE: usize = size_of::<f32>();

/// GPU vertex buffers for one dynamic geometry.
pub struct GpuGeometry {
    device: wgpu::Device,
    queue: wgpu::Queue,
    label: String,
    buffers: Vec<wgpu::Buffer>,
    widths: Vec<usize>,
    capacity: usize,
    draw_range: Range<usize>,
    generation: u64,
}

impl GpuGeometry {
    /// Empty resource; buffers are created on the first rebuild.
    pub fn new(
        device: &wgpu::Device,
        queue: &wgpu::Queue,
        label: &str,
    ) -> Self {
        Self {
            device: device.clone(),
            queue: queue.clone(),
            label: label.to_owned(),
            buffers: Vec::new(),
            widths: Vec::new(),
            capacity: 0,
            draw_range: 0..0,
            generation: 0,
        }
    }

    /// Vertex buffers in attribute order.
    pub fn buffers(&self) -> &[wgpu::Buffer] {
        &self.buffers
    }

    /// Bumped whenever the buffers are replaced; bind groups built against
    /// an older generation are stale.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Bind every attribute buffer and draw the current range.
    pub fn draw(&self, pass: &mut wgpu::RenderPass<'_>) {
        if self.draw_range.is_empty() {
            return;
        }
        for (slot, buffer) in (0_u32..).zip(&self.buffers) {
            pass.set_vertex_buffer(slot, buffer.slice(..));
        }
        let start = u32::try_from(self.draw_range.start).unwrap_or(u32::MAX);
        let end = u32::try_from(self.draw_range.end).unwrap_or(u32::MAX);
        pass.draw(start..end, 0..1);
    }
}

impl GeometryResource for GpuGeometry {
    fn capacity(&self) -> usize {
        self.capacity
    }

    fn rebuild(
        &mut self,
        attributes: &[AttributeArray],
        capacity: usize,
        draw_range: Range<usize>,
    ) {
        let usage = wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST;
        self.buffers = attributes
            .iter()
            .map(|attr| {
                let mut data = attr.data.clone();
                data.resize(capacity * attr.width, 0.0);
                self.device
                    .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                        label: Some(&format!("{} {}", self.label, attr.name)),
                        contents: bytemuck::cast_slice(&data),
                        usage,
                    })
            })
            .collect();
        self.widths = attributes.iter().map(|a| a.width).collect();
        self.capacity = capacity;
        self.draw_range = draw_range;
        self.generation += 1;
        log::debug!(
            "GpuGeometry '{}' reallocated: {capacity} vertices x {} attributes",
            self.label,
            self.buffers.len()
        );
    }

    fn update(
        &mut self,
        attributes: &[AttributeArray],
        vertices: Range<usize>,
        draw_range: Range<usize>,
    ) {
        let targets = self.buffers.iter().zip(&self.widths);
        for ((buffer, &width), attr) in targets.zip(attributes) {
            let floats = vertices.start * width..vertices.end * width;
            let offset = (floats.start * F32_SIZE) as u64;
            let bytes = bytemuck::cast_slice(&attr.data[floats]);
            self.queue.write_buffer(buffer, offset, bytes);
        }
        self.draw_range = draw_range;
    }

    fn set_draw_range(&mut self, range: Range<usize>) {
        self.draw_range = range;
    }

    fn draw_range(&self) -> Range<usize> {
        self.draw_range.clone()
    }
}

/// Vertex format for an attribute of `width` floats.
pub fn vertex_format(width: usize) -> Option<wgpu::VertexFormat> {
    match width {
        1 => Some(wgpu::VertexFormat::Float32),
        2 => Some(wgpu::VertexFormat::Float32x2),
        3 => Some(wgpu::VertexFormat::Float32x3),
        4 => Some(wgpu::VertexFormat::Float32x4),
        _ => None,
    }
}

/// Per-buffer vertex attribute for shader `location`; each attribute lives
/// in its own buffer at offset 0.
pub fn vertex_attribute(
    location: u32,
    width: usize,
) -> Option<wgpu::VertexAttribute> {
    Some(wgpu::VertexAttribute {
        format: vertex_format(width)?,
        offset: 0,
        shader_location: location,
    })
}

/// Byte stride of one vertex of a `width`-float attribute.
pub fn array_stride(width: usize) -> wgpu::BufferAddress {
    (width * F32_SIZE) as wgpu::BufferAddress
}
