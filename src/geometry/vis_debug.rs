//! Debug drawing: one point cloud and one line set, reset and synced
//! together.

use super::lines::DynamicLines;
use super::points::DynamicPoints;
use super::resource::{GeometryResource, HostGeometry};
use crate::math::Vec3;
use crate::options::Options;
use crate::util::color::Color;

/// Points + lines pair for per-frame debug geometry.
///
/// Typical use is `reset()` at the start of a frame, any number of
/// `point`/`line` calls, then `sync()` before rendering.
#[derive(Debug)]
pub struct VisDebug<R> {
    /// Debug points.
    pub points: DynamicPoints<R>,
    /// Debug line segments.
    pub lines: DynamicLines<R>,
    color: Color,
    point_size: f32,
    use_depth: bool,
}

impl<R: GeometryResource> VisDebug<R> {
    /// Build from two resources, sized and styled by `options`.
    pub fn new(points: R, lines: R, options: &Options) -> Self {
        let buffers = &options.buffers;
        Self {
            points: DynamicPoints::with_capacity(
                buffers.point_capacity,
                buffers.grow_step,
                points,
            ),
            lines: DynamicLines::with_capacity(
                buffers.line_capacity,
                buffers.grow_step,
                lines,
            ),
            color: options.debug.color,
            point_size: options.debug.point_size,
            use_depth: options.debug.use_depth,
        }
    }

    /// Point with the default debug color and size.
    pub fn point(&mut self, position: impl Into<Vec3>) -> &mut Self {
        let _ = self.points.add(position, self.color, self.point_size);
        self
    }

    /// Segment in the default debug color.
    pub fn line(
        &mut self,
        a: impl Into<Vec3>,
        b: impl Into<Vec3>,
    ) -> &mut Self {
        let _ = self.lines.add_solid(a, b, self.color);
        self
    }

    /// Axis gizmo: segments of length `size` along X, Y and Z from
    /// `origin`, colored red, green and blue.
    pub fn axes(&mut self, origin: impl Into<Vec3>, size: f32) -> &mut Self {
        let origin = origin.into();
        let axes = [
            (Vec3::X, Color::RED),
            (Vec3::Y, Color::GREEN),
            (Vec3::Z, Color::BLUE),
        ];
        for (axis, color) in axes {
            let tip = Vec3::from_scale_then_add(size, axis, origin);
            let _ = self.lines.add_solid(origin, tip, color);
        }
        self
    }

    /// Reset both buffers.
    pub fn reset(&mut self) -> &mut Self {
        let _ = self.points.reset();
        let _ = self.lines.reset();
        self
    }

    /// Sync both buffers.
    pub fn sync(&mut self) -> &mut Self {
        let _ = self.points.sync();
        let _ = self.lines.sync();
        self
    }

    /// Whether the renderer should depth-test debug geometry.
    pub fn use_depth(&self) -> bool {
        self.use_depth
    }

    /// Default color of `point` and `line`.
    pub fn color(&self) -> Color {
        self.color
    }
}

impl VisDebug<HostGeometry> {
    /// CPU-backed instance, for headless runs and tests.
    pub fn host(options: &Options) -> Self {
        Self::new(HostGeometry::new(), HostGeometry::new(), options)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcuts_use_option_defaults() {
        let mut options = Options::default();
        options.debug.color = Color::YELLOW;
        options.debug.point_size = 0.5;
        let mut dbg = VisDebug::host(&options);
        let _ = dbg.point(Vec3::ONE).line(Vec3::ZERO, Vec3::X).sync();

        let points = dbg.points.resource();
        let yellow = Color::YELLOW.to_array();
        assert_eq!(points.vertex("color", 0), Some(&yellow[..]));
        assert_eq!(points.vertex("size", 0), Some(&[0.5][..]));
        assert_eq!(dbg.lines.resource().draw_range(), 0..2);
    }

    #[test]
    fn test_capacities_from_options() {
        let mut options = Options::default();
        options.buffers.point_capacity = 4;
        options.buffers.line_capacity = 8;
        options.buffers.grow_step = 2;
        let mut dbg = VisDebug::host(&options);
        assert_eq!(dbg.points.capacity(), 4);
        assert_eq!(dbg.lines.capacity(), 8);

        for _ in 0..5 {
            let _ = dbg.point(Vec3::ZERO);
        }
        assert_eq!(dbg.points.capacity(), 6);
    }

    #[test]
    fn test_shared_reset_and_sync() {
        let mut dbg = VisDebug::host(&Options::default());
        let _ = dbg.axes(Vec3::ZERO, 2.0).point(Vec3::ZERO).sync();
        assert_eq!(dbg.lines.resource().draw_range(), 0..6);
        let tip = dbg.lines.resource().vertex("position", 5);
        assert_eq!(tip, Some(&[0.0, 0.0, 2.0][..]));
        assert!(!dbg.points.is_dirty() && !dbg.lines.is_dirty());

        let _ = dbg.reset();
        assert_eq!(dbg.points.resource().draw_range(), 0..0);
        assert_eq!(dbg.lines.resource().draw_range(), 0..0);
        assert!(dbg.use_depth());
    }
}
