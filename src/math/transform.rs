//! Position / rotation / scale with SRT composition.
//!
//! A [`Transform`] stores no parent or child links. Hierarchies are
//! composed explicitly: `parent.mul(child)` walks down the tree,
//! `child.pmul(parent)` walks up.

use serde::{Deserialize, Serialize};

use super::{Quat, Vec3};

/// Local-space pose of a node.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Transform {
    /// Translation.
    pub position: Vec3,
    /// Orientation (expected unit length).
    pub rotation: Quat,
    /// Per-axis scale.
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    /// No translation, rotation or scaling.
    pub const IDENTITY: Self = Self {
        position: Vec3::ZERO,
        rotation: Quat::IDENTITY,
        scale: Vec3::ONE,
    };

    /// Transform from its three parts.
    #[inline]
    pub const fn new(position: Vec3, rotation: Quat, scale: Vec3) -> Self {
        Self {
            position,
            rotation,
            scale,
        }
    }

    /// Pure translation.
    #[inline]
    pub const fn from_position(position: Vec3) -> Self {
        Self::new(position, Quat::IDENTITY, Vec3::ONE)
    }

    /// Pure rotation.
    #[inline]
    pub const fn from_rotation(rotation: Quat) -> Self {
        Self::new(Vec3::ZERO, rotation, Vec3::ONE)
    }

    /// Treat `self` as the parent and fold `child` into it (parent → child).
    ///
    /// `position += rotation · (scale ⊙ child.position)`, then
    /// `scale ⊙= child.scale`, then `rotation = rotation · child.rotation`.
    pub fn mul(&mut self, child: Transform) -> &mut Self {
        let offset =
            Vec3::from_mul(self.scale, child.position).rotated(self.rotation);
        let _ = self.position.add(offset);
        let _ = self.scale.mul(child.scale);
        let _ = self.rotation.mul(child.rotation);
        self
    }

    /// Treat `self` as the child and apply `parent` on top (child → parent).
    ///
    /// The rotation is pre-multiplied:
    /// `rotation = parent.rotation · rotation`.
    pub fn pmul(&mut self, parent: Transform) -> &mut Self {
        let _ = self
            .position
            .mul(parent.scale)
            .quat_transform(parent.rotation)
            .add(parent.position);
        let _ = self.scale.mul(parent.scale);
        let _ = self.rotation.pmul(parent.rotation);
        self
    }

    /// `parent * child` without touching either input.
    pub fn from_mul(parent: Transform, child: Transform) -> Self {
        let mut out = parent;
        let _ = out.mul(child);
        out
    }

    /// Inverse transform.
    ///
    /// A zero scale component inverts to infinity; nothing guards against
    /// it.
    pub fn from_invert(t: Transform) -> Self {
        let rotation = t.rotation.inverse();
        let scale = t.scale.recip();
        let mut position = t.position;
        let _ = position.negate().mul(scale).quat_transform(rotation);
        Self::new(position, rotation, scale)
    }

    /// Inverse copy (see [`Transform::from_invert`]).
    #[inline]
    pub fn inverse(self) -> Self {
        Self::from_invert(self)
    }

    /// Map a local point into the parent space: scale, rotate, translate.
    pub fn transform_vec3(&self, v: Vec3) -> Vec3 {
        let mut out = Vec3::from_mul(v, self.scale);
        let _ = out.quat_transform(self.rotation).add(self.position);
        out
    }

    /// Rotate and scale a direction, ignoring translation.
    pub fn transform_direction(&self, v: Vec3) -> Vec3 {
        Vec3::from_mul(v, self.scale).rotated(self.rotation)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    const EPS: f32 = 1e-4;

    fn approx_v(a: Vec3, b: Vec3) -> bool {
        (a.x - b.x).abs() < EPS
            && (a.y - b.y).abs() < EPS
            && (a.z - b.z).abs() < EPS
    }

    fn assert_identity(t: &Transform) {
        assert!(approx_v(t.position, Vec3::ZERO), "position {:?}", t.position);
        assert!(approx_v(t.scale, Vec3::ONE), "scale {:?}", t.scale);
        let q = t.rotation;
        assert!(
            q.x.abs() < EPS
                && q.y.abs() < EPS
                && q.z.abs() < EPS
                && (q.w - 1.0).abs() < EPS,
            "rotation {q:?}"
        );
    }

    fn sample() -> Transform {
        Transform::new(
            Vec3::new(1.0, -2.0, 3.5),
            Quat::from_axis_angle(Vec3::new(0.2, 1.0, -0.4).normalized(), 0.9),
            Vec3::new(2.0, 0.5, 1.5),
        )
    }

    #[test]
    fn test_invert_then_mul_is_identity() {
        let t = sample();
        let mut inv = Transform::from_invert(t);
        let _ = inv.mul(t);
        assert_identity(&inv);
    }

    #[test]
    fn test_inverse_undoes_point_transform() {
        // Exact only for uniform scale; non-uniform scale and rotation do not
        // commute.
        let s = sample();
        let t = Transform::new(s.position, s.rotation, Vec3::splat(2.5));
        let p = Vec3::new(0.3, 0.7, -1.2);
        let back = t.inverse().transform_vec3(t.transform_vec3(p));
        assert!(approx_v(back, p), "got {back:?}");
    }

    #[test]
    fn test_zero_scale_inverts_to_infinity() {
        let scale = Vec3::new(0.0, 1.0, 1.0);
        let t = Transform::new(Vec3::ONE, Quat::IDENTITY, scale);
        assert!(t.inverse().scale.x.is_infinite());
    }

    #[test]
    fn test_mul_srt_order() {
        let parent = Transform::new(
            Vec3::new(10.0, 0.0, 0.0),
            Quat::from_axis_angle(Vec3::Y, FRAC_PI_2),
            Vec3::splat(2.0),
        );
        let child = Transform::from_position(Vec3::new(0.0, 0.0, 1.0));

        let world = Transform::from_mul(parent, child);
        // scale (0,0,2), rotate about Y to (2,0,0), translate.
        assert!(approx_v(world.position, Vec3::new(12.0, 0.0, 0.0)));
        assert!(approx_v(world.scale, Vec3::splat(2.0)));
        assert_eq!(world.rotation, parent.rotation);
    }

    #[test]
    fn test_pmul_matches_from_mul() {
        let parent = sample();
        let child = Transform::new(
            Vec3::new(-0.5, 0.25, 2.0),
            Quat::from_axis_angle(Vec3::X, 0.3),
            Vec3::ONE,
        );

        let expected = Transform::from_mul(parent, child);
        let mut up = child;
        let _ = up.pmul(parent);

        assert!(approx_v(up.position, expected.position));
        assert!(approx_v(up.scale, expected.scale));
        assert!(up.rotation.dot(expected.rotation) > 1.0 - EPS);
    }

    #[test]
    fn test_transform_vec3_matches_composition() {
        let t = sample();
        let p = Vec3::new(1.0, 2.0, 3.0);
        let child = Transform::from_position(p);
        let via_child = Transform::from_mul(t, child).position;
        assert!(approx_v(t.transform_vec3(p), via_child));
    }

    #[test]
    fn test_hierarchy_chain() {
        let root = Transform::from_position(Vec3::new(0.0, 1.0, 0.0));
        let arm = Transform::new(
            Vec3::new(1.0, 0.0, 0.0),
            Quat::from_axis_angle(Vec3::Z, FRAC_PI_2),
            Vec3::ONE,
        );
        let hand = Transform::from_position(Vec3::new(1.0, 0.0, 0.0));

        let mut world = root;
        let _ = world.mul(arm).mul(hand);
        // The arm's quarter turn about Z sends the hand's +X offset to +Y.
        assert!(approx_v(world.position, Vec3::new(1.0, 2.0, 0.0)));
    }

    #[test]
    fn test_default_is_identity() {
        assert_identity(&Transform::default());
        assert_eq!(Transform::default().transform_vec3(Vec3::ONE), Vec3::ONE);
    }

    #[test]
    fn test_random_inverse_round_trip() {
        use rand::Rng;

        let mut rng = rand::rng();
        for _ in 0..100 {
            let axis = Vec3::new(
                rng.random_range(-1.0..1.0),
                rng.random_range(-1.0..1.0),
                rng.random_range(1.0..2.0),
            )
            .normalized();
            let t = Transform::new(
                Vec3::new(
                    rng.random_range(-5.0..5.0),
                    rng.random_range(-5.0..5.0),
                    rng.random_range(-5.0..5.0),
                ),
                Quat::from_axis_angle(axis, rng.random_range(-3.0..3.0)),
                Vec3::splat(rng.random_range(0.5..3.0)),
            );
            let mut round = Transform::from_invert(t);
            let _ = round.mul(t);
            assert_identity(&round);

            let p = Vec3::new(rng.random_range(-4.0..4.0), 1.0, -2.0);
            let back = t.inverse().transform_vec3(t.transform_vec3(p));
            assert!(approx_v(back, p));
        }
    }
}
