//! Three-component `f32` vector.
//!
//! In-place methods (`add`, `sub`, `mul`, `scale`, `norm`, `negate`,
//! `quat_transform`) mutate and return `&mut Self` so calls chain:
//! `v.mul(scale).quat_transform(rot).add(pos)`. Value-returning helpers
//! (`cross`, `from_mul`, `rotated`, ...) leave their inputs untouched.
//! Operator overloads (`+`, `-`, `*`, `/`) are implemented as well.

use serde::{Deserialize, Serialize};

use super::Quat;

/// Offset applied to a forward vector that is parallel to `up` before the
/// basis is rebuilt.
const PARALLEL_NUDGE: f32 = 0.0001;

/// A 3D vector / point.
#[repr(C)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Default,
    Serialize,
    Deserialize,
    bytemuck::Pod,
    bytemuck::Zeroable,
)]
pub struct Vec3 {
    /// X component.
    pub x: f32,
    /// Y component.
    pub y: f32,
    /// Z component.
    pub z: f32,
}

impl Vec3 {
    /// `(0, 0, 0)`.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);
    /// `(1, 1, 1)`.
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);
    /// Unit X axis.
    pub const X: Self = Self::new(1.0, 0.0, 0.0);
    /// Unit Y axis.
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);
    /// Unit Z axis.
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Vector from components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Vector with all three components set to `v`.
    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v, v)
    }

    /// Components as `[x, y, z]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 3] {
        [self.x, self.y, self.z]
    }

    /// Euclidean length.
    #[inline]
    pub fn len(self) -> f32 {
        self.len_sq().sqrt()
    }

    /// Squared length.
    #[inline]
    pub fn len_sq(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// True when every component is finite.
    #[inline]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    // -- In-place operations ------------------------------------------------

    /// `self += v`.
    #[inline]
    pub fn add(&mut self, v: Vec3) -> &mut Self {
        self.x += v.x;
        self.y += v.y;
        self.z += v.z;
        self
    }

    /// `self -= v`.
    #[inline]
    pub fn sub(&mut self, v: Vec3) -> &mut Self {
        self.x -= v.x;
        self.y -= v.y;
        self.z -= v.z;
        self
    }

    /// Component-wise `self *= v`.
    #[inline]
    pub fn mul(&mut self, v: Vec3) -> &mut Self {
        self.x *= v.x;
        self.y *= v.y;
        self.z *= v.z;
        self
    }

    /// `self *= s`.
    #[inline]
    pub fn scale(&mut self, s: f32) -> &mut Self {
        self.x *= s;
        self.y *= s;
        self.z *= s;
        self
    }

    /// Normalize to unit length. A zero-length vector is left as is.
    pub fn norm(&mut self) -> &mut Self {
        let mag = self.len();
        if mag == 0.0 {
            return self;
        }
        self.scale(1.0 / mag)
    }

    /// Flip the sign of every component.
    #[inline]
    pub fn negate(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
        self
    }

    /// Rotate by quaternion `q` without building a matrix:
    /// `v + 2w(q × v) + 2 q × (q × v)`.
    pub fn quat_transform(&mut self, q: Quat) -> &mut Self {
        let (qx, qy, qz, qw) = (q.x, q.y, q.z, q.w);
        let (vx, vy, vz) = (self.x, self.y, self.z);

        let x1 = qy * vz - qz * vy;
        let y1 = qz * vx - qx * vz;
        let z1 = qx * vy - qy * vx;

        let x2 = qw * x1 + qy * z1 - qz * y1;
        let y2 = qw * y1 + qz * x1 - qx * z1;
        let z2 = qw * z1 + qx * y1 - qy * x1;

        self.x = vx + 2.0 * x2;
        self.y = vy + 2.0 * y2;
        self.z = vz + 2.0 * z2;
        self
    }

    // -- Value-returning operations -----------------------------------------

    /// Unit-length copy (zero stays zero).
    #[inline]
    pub fn normalized(mut self) -> Self {
        let _ = self.norm();
        self
    }

    /// Copy rotated by `q`.
    #[inline]
    pub fn rotated(mut self, q: Quat) -> Self {
        let _ = self.quat_transform(q);
        self
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, b: Vec3) -> f32 {
        self.x * b.x + self.y * b.y + self.z * b.z
    }

    /// Cross product `self × b`.
    #[inline]
    pub fn cross(self, b: Vec3) -> Self {
        Self::new(
            self.y * b.z - self.z * b.y,
            self.z * b.x - self.x * b.z,
            self.x * b.y - self.y * b.x,
        )
    }

    /// Distance between two points.
    #[inline]
    pub fn dist(a: Vec3, b: Vec3) -> f32 {
        Self::dist_sq(a, b).sqrt()
    }

    /// Squared distance between two points.
    #[inline]
    pub fn dist_sq(a: Vec3, b: Vec3) -> f32 {
        let (dx, dy, dz) = (a.x - b.x, a.y - b.y, a.z - b.z);
        dx * dx + dy * dy + dz * dz
    }

    /// Component-wise product `a ⊙ b`.
    #[inline]
    pub fn from_mul(a: Vec3, b: Vec3) -> Self {
        Self::new(a.x * b.x, a.y * b.y, a.z * b.z)
    }

    /// Component-wise reciprocal. Zero components become infinite.
    #[inline]
    pub fn recip(self) -> Self {
        Self::new(1.0 / self.x, 1.0 / self.y, 1.0 / self.z)
    }

    /// Linear interpolation, `t = 0` gives `a`.
    #[inline]
    pub fn lerp(a: Vec3, b: Vec3, t: f32) -> Self {
        let ti = 1.0 - t;
        Self::new(
            a.x * ti + b.x * t,
            a.y * ti + b.y * t,
            a.z * ti + b.z * t,
        )
    }

    /// `v * s + a`, the usual "step along a direction" helper.
    #[inline]
    pub fn from_scale_then_add(s: f32, v: Vec3, a: Vec3) -> Self {
        Self::new(v.x * s + a.x, v.y * s + a.y, v.z * s + a.z)
    }

    /// Unit direction from polar angle `x` (from +Y) and azimuth `y`
    /// (from +Z toward +X).
    pub fn from_spherical(x: f32, y: f32) -> Self {
        let (sx, cx) = x.sin_cos();
        let (sy, cy) = y.sin_cos();
        Self::new(sy * sx, cx, cy * sx)
    }

    /// Right-handed orthonormal basis `[x, y, z]` with `z` along `forward`
    /// and `y` as close to `up` as possible.
    ///
    /// When `forward` and `up` are parallel, `forward` is nudged along the
    /// axis where `up` is smallest and the basis rebuilt, so a valid basis
    /// always comes back. A zero `up` is treated as world Y.
    pub fn orthogonal(forward: Vec3, up: Vec3) -> [Vec3; 3] {
        let up = if up.len_sq() == 0.0 { Self::Y } else { up };
        let mut z_axis = forward;
        let mut x_axis = up.cross(z_axis);

        if x_axis.len_sq() == 0.0 {
            let _ = z_axis.norm();
            let (ax, ay, az) = (up.x.abs(), up.y.abs(), up.z.abs());
            if ax <= ay && ax <= az {
                z_axis.x += PARALLEL_NUDGE;
            } else if ay <= az {
                z_axis.y += PARALLEL_NUDGE;
            } else {
                z_axis.z += PARALLEL_NUDGE;
            }
            let _ = z_axis.norm();
            x_axis = up.cross(z_axis);
        }

        let _ = x_axis.norm();
        let _ = z_axis.norm();
        let y_axis = z_axis.cross(x_axis).normalized();
        [x_axis, y_axis, z_axis]
    }
}

impl From<[f32; 3]> for Vec3 {
    #[inline]
    fn from(v: [f32; 3]) -> Self {
        Self::new(v[0], v[1], v[2])
    }
}

impl From<(f32, f32, f32)> for Vec3 {
    #[inline]
    fn from((x, y, z): (f32, f32, f32)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Vec3> for [f32; 3] {
    #[inline]
    fn from(v: Vec3) -> Self {
        v.to_array()
    }
}

impl From<glam::Vec3> for Vec3 {
    #[inline]
    fn from(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vec3> for glam::Vec3 {
    #[inline]
    fn from(v: Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn approx(a: Vec3, b: Vec3, eps: f32) -> bool {
        (a.x - b.x).abs() < eps
            && (a.y - b.y).abs() < eps
            && (a.z - b.z).abs() < eps
    }

    fn assert_orthonormal(basis: [Vec3; 3], eps: f32) {
        for axis in basis {
            assert!(axis.is_finite(), "non-finite axis {axis:?}");
            assert!((axis.len() - 1.0).abs() < eps, "axis {axis:?} not unit");
        }
        assert!(basis[0].dot(basis[1]).abs() < eps);
        assert!(basis[1].dot(basis[2]).abs() < eps);
        assert!(basis[0].dot(basis[2]).abs() < eps);
        // Right-handed: x × y = z
        assert!(approx(basis[0].cross(basis[1]), basis[2], eps));
    }

    #[test]
    fn test_chained_in_place_ops() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        let _ = v
            .add(Vec3::ONE)
            .mul(Vec3::new(2.0, 1.0, 0.5))
            .scale(2.0)
            .sub(Vec3::X);
        assert_eq!(v, Vec3::new(7.0, 6.0, 4.0));

        let _ = v.negate();
        assert_eq!(v, Vec3::new(-7.0, -6.0, -4.0));
    }

    #[test]
    fn test_norm_zero_is_noop() {
        let mut v = Vec3::ZERO;
        let _ = v.norm();
        assert_eq!(v, Vec3::ZERO);

        let mut v = Vec3::new(3.0, 0.0, 4.0);
        let _ = v.norm();
        assert!(approx(v, Vec3::new(0.6, 0.0, 0.8), EPS));
    }

    #[test]
    fn test_dot_cross_dist() {
        assert_eq!(Vec3::X.dot(Vec3::Y), 0.0);
        assert_eq!(Vec3::X.cross(Vec3::Y), Vec3::Z);
        assert_eq!(Vec3::Y.cross(Vec3::X), Vec3::new(0.0, 0.0, -1.0));
        assert_eq!(Vec3::dist(Vec3::ZERO, Vec3::new(3.0, 4.0, 0.0)), 5.0);
        assert_eq!(Vec3::dist_sq(Vec3::ONE, Vec3::new(2.0, 3.0, 1.0)), 5.0);
    }

    #[test]
    fn test_quat_transform_quarter_turn() {
        let q = Quat::from_axis_angle(Vec3::Y, std::f32::consts::FRAC_PI_2);
        let v = Vec3::Z.rotated(q);
        assert!(approx(v, Vec3::X, EPS), "got {v:?}");

        let v = Vec3::X.rotated(Quat::IDENTITY);
        assert_eq!(v, Vec3::X);
    }

    #[test]
    fn test_quat_transform_preserves_length() {
        let axis = Vec3::new(1.0, 1.0, 0.0).normalized();
        let q = Quat::from_axis_angle(axis, 1.3);
        let v = Vec3::new(0.3, -2.0, 5.0);
        assert!((v.rotated(q).len() - v.len()).abs() < 1e-4);
    }

    #[test]
    fn test_orthogonal_regular_basis() {
        let basis = Vec3::orthogonal(Vec3::Z, Vec3::Y);
        assert!(approx(basis[0], Vec3::X, EPS));
        assert!(approx(basis[1], Vec3::Y, EPS));
        assert!(approx(basis[2], Vec3::Z, EPS));

        let basis = Vec3::orthogonal(Vec3::new(1.0, 0.5, -2.0), Vec3::Y);
        assert_orthonormal(basis, EPS);
    }

    #[test]
    fn test_orthogonal_parallel_inputs() {
        for (fwd, up) in [
            (Vec3::Y, Vec3::Y),
            (Vec3::new(0.0, -3.0, 0.0), Vec3::Y),
            (Vec3::Z, Vec3::Z),
            (Vec3::new(0.0, 0.0, -1.0), Vec3::Z),
            (Vec3::X, Vec3::new(2.0, 0.0, 0.0)),
            (Vec3::new(0.6, 0.8, 0.0), Vec3::new(0.6, 0.8, 0.0)),
        ] {
            let basis = Vec3::orthogonal(fwd, up);
            assert_orthonormal(basis, 1e-3);
        }
    }

    #[test]
    fn test_orthogonal_zero_up_falls_back() {
        let basis = Vec3::orthogonal(Vec3::Z, Vec3::ZERO);
        assert_orthonormal(basis, EPS);
    }

    #[test]
    fn test_conversions() {
        let v: Vec3 = [1.0, 2.0, 3.0].into();
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
        let v: Vec3 = (4.0, 5.0, 6.0).into();
        assert_eq!(<[f32; 3]>::from(v), [4.0, 5.0, 6.0]);
        let g: glam::Vec3 = v.into();
        assert_eq!(Vec3::from(g), v);
    }

    #[test]
    fn test_from_spherical() {
        assert!(approx(Vec3::from_spherical(0.0, 0.0), Vec3::Y, EPS));
        let v = Vec3::from_spherical(std::f32::consts::FRAC_PI_2, 0.0);
        assert!(approx(v, Vec3::Z, EPS));
        let v = Vec3::from_spherical(1.0, 2.0);
        assert!((v.len() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_lerp_and_recip() {
        let v = Vec3::lerp(Vec3::ZERO, Vec3::new(2.0, 4.0, 6.0), 0.5);
        assert_eq!(v, Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(Vec3::new(2.0, 4.0, 0.5).recip(), Vec3::new(0.5, 0.25, 2.0));
        assert!(Vec3::new(0.0, 1.0, 1.0).recip().x.is_infinite());
    }
}
