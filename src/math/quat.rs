//! Rotation quaternion.
//!
//! Unit length is a soft invariant on [`Quat`]: `mul`, `pmul` and `invert`
//! never renormalize, so callers accumulating many products (or blending
//! with anything other than [`Quat::nblend`]) call [`Quat::norm`] when
//! drift matters. [`UnitQuat`] is the hard-invariant alternative, only
//! constructible through a normalizing factory.

use serde::{Deserialize, Serialize};

use super::{EulerOrder, Vec3};

/// `dot(a, b)` beyond which two directions count as identical (or, negated,
/// opposite) in [`Quat::from_swing`].
const SWING_PARALLEL_DOT: f32 = 0.999_999;
/// Below this distance from `|dot| = 1`, [`Quat::slerp`] falls back to a
/// linear blend to avoid dividing by a vanishing sine.
const SLERP_LINEAR_THRESHOLD: f32 = 0.000_001;

/// Quaternion `(x, y, z, w)` with `w` as the scalar part.
#[repr(C)]
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Serialize,
    Deserialize,
    bytemuck::Pod,
    bytemuck::Zeroable,
)]
pub struct Quat {
    /// X of the vector part.
    pub x: f32,
    /// Y of the vector part.
    pub y: f32,
    /// Z of the vector part.
    pub z: f32,
    /// Scalar part.
    pub w: f32,
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quat {
    /// No rotation.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);
    /// All components zero. Produced by inverting a zero quaternion.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Quaternion from raw components (not normalized).
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Components as `[x, y, z, w]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Vector part.
    #[inline]
    pub const fn xyz(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// 4D dot product.
    #[inline]
    pub fn dot(self, b: Quat) -> f32 {
        self.x * b.x + self.y * b.y + self.z * b.z + self.w * b.w
    }

    /// Squared length.
    #[inline]
    pub fn len_sq(self) -> f32 {
        self.dot(self)
    }

    /// True when `| |q| - 1 | <= eps`.
    #[inline]
    pub fn is_normalized(self, eps: f32) -> bool {
        (self.len_sq().sqrt() - 1.0).abs() <= eps
    }

    /// Hamilton product `a * b` (`b` is applied first).
    #[inline]
    pub fn from_mul(a: Quat, b: Quat) -> Self {
        Self::new(
            a.x * b.w + a.w * b.x + a.y * b.z - a.z * b.y,
            a.y * b.w + a.w * b.y + a.z * b.x - a.x * b.z,
            a.z * b.w + a.w * b.z + a.x * b.y - a.y * b.x,
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
        )
    }

    /// Inverse: conjugate over squared length. The zero quaternion maps to
    /// [`Quat::ZERO`].
    pub fn from_invert(q: Quat) -> Self {
        let d = q.len_sq();
        if d == 0.0 {
            return Self::ZERO;
        }
        let inv = 1.0 / d;
        Self::new(-q.x * inv, -q.y * inv, -q.z * inv, q.w * inv)
    }

    // -- In-place operations ------------------------------------------------

    /// `self = self * a`: keeps the existing orientation and composes `a`
    /// in its local frame.
    #[inline]
    pub fn mul(&mut self, a: Quat) -> &mut Self {
        *self = Self::from_mul(*self, a);
        self
    }

    /// `self = a * self`.
    #[inline]
    pub fn pmul(&mut self, a: Quat) -> &mut Self {
        *self = Self::from_mul(a, *self);
        self
    }

    /// `self = a⁻¹ * self`, the usual world → local conversion.
    #[inline]
    pub fn pmul_invert(&mut self, a: Quat) -> &mut Self {
        *self = Self::from_mul(Self::from_invert(a), *self);
        self
    }

    /// Normalize to unit length. Zero stays zero.
    pub fn norm(&mut self) -> &mut Self {
        let len = self.len_sq();
        if len > 0.0 {
            let inv = 1.0 / len.sqrt();
            self.x *= inv;
            self.y *= inv;
            self.z *= inv;
            self.w *= inv;
        }
        self
    }

    /// Replace with the inverse (see [`Quat::from_invert`]).
    #[inline]
    pub fn invert(&mut self) -> &mut Self {
        *self = Self::from_invert(*self);
        self
    }

    /// Negate every component (same rotation, opposite hemisphere).
    #[inline]
    pub fn negate(&mut self) -> &mut Self {
        self.x = -self.x;
        self.y = -self.y;
        self.z = -self.z;
        self.w = -self.w;
        self
    }

    /// Negate when `self` sits in the opposite hemisphere of `chk`.
    ///
    /// Call before blending neighbouring animation samples; a sign flip
    /// between them otherwise shows up as a visible pop.
    #[inline]
    pub fn dot_negate(&mut self, chk: Quat) -> &mut Self {
        if self.dot(chk) < 0.0 {
            let _ = self.negate();
        }
        self
    }

    // -- Value-returning operations -----------------------------------------

    /// Unit-length copy.
    #[inline]
    pub fn normalized(mut self) -> Self {
        let _ = self.norm();
        self
    }

    /// Inverse copy.
    #[inline]
    pub fn inverse(self) -> Self {
        Self::from_invert(self)
    }

    /// Rotate a vector.
    #[inline]
    pub fn rotate(self, v: Vec3) -> Vec3 {
        v.rotated(self)
    }

    // -- Constructors -------------------------------------------------------

    /// Rotation of `rad` radians about `axis` (expected unit length).
    pub fn from_axis_angle(axis: Vec3, rad: f32) -> Self {
        let (s, c) = (rad * 0.5).sin_cos();
        Self::new(axis.x * s, axis.y * s, axis.z * s, c)
    }

    /// Rotation whose local Z looks along `forward` with Y toward `up`.
    pub fn from_look(forward: Vec3, up: Vec3) -> Self {
        let [x_axis, y_axis, z_axis] = Vec3::orthogonal(forward, up);
        Self::from_axes(x_axis, y_axis, z_axis)
    }

    /// Rotation from an orthonormal basis (the columns of a 3×3 matrix).
    ///
    /// Shoemake's conversion: the trace branch when `w` dominates, otherwise
    /// the branch of the largest diagonal entry, so the divisor never
    /// approaches zero.
    pub fn from_axes(x_axis: Vec3, y_axis: Vec3, z_axis: Vec3) -> Self {
        // Column-major: m[col * 3 + row]
        let m = [
            x_axis.x, x_axis.y, x_axis.z, y_axis.x, y_axis.y, y_axis.z,
            z_axis.x, z_axis.y, z_axis.z,
        ];
        let trace = m[0] + m[4] + m[8];

        if trace > 0.0 {
            let root = (trace + 1.0).sqrt(); // 2w
            let r = 0.5 / root; // 1 / 4w
            return Self::new(
                (m[5] - m[7]) * r,
                (m[6] - m[2]) * r,
                (m[1] - m[3]) * r,
                0.5 * root,
            );
        }

        let mut i = 0;
        if m[4] > m[0] {
            i = 1;
        }
        if m[8] > m[i * 3 + i] {
            i = 2;
        }
        let j = (i + 1) % 3;
        let k = (i + 2) % 3;

        let root = (m[i * 3 + i] - m[j * 3 + j] - m[k * 3 + k] + 1.0).sqrt();
        let r = 0.5 / root;
        let mut v = [0.0_f32; 3];
        v[i] = 0.5 * root;
        v[j] = (m[j * 3 + i] + m[i * 3 + j]) * r;
        v[k] = (m[k * 3 + i] + m[i * 3 + k]) * r;
        let w = (m[j * 3 + k] - m[k * 3 + j]) * r;
        Self::new(v[0], v[1], v[2], w)
    }

    /// Shortest-arc rotation taking direction `a` onto direction `b` (both
    /// expected unit length).
    ///
    /// Opposite directions have no unique arc; a half turn about an axis
    /// perpendicular to `a` is returned.
    pub fn from_swing(a: Vec3, b: Vec3) -> Self {
        let d = a.dot(b);

        if d < -SWING_PARALLEL_DOT {
            let mut axis = Vec3::new(-1.0, 0.0, 0.0).cross(a);
            if axis.len() < 0.000_001 {
                axis = Vec3::Y.cross(a);
            }
            let _ = axis.norm();
            return Self::from_axis_angle(axis, std::f32::consts::PI);
        }

        if d > SWING_PARALLEL_DOT {
            return Self::IDENTITY;
        }

        let v = a.cross(b);
        Self::new(v.x, v.y, v.z, 1.0 + d).normalized()
    }

    /// Rotation from Euler angles (radians) applied in `order`.
    pub fn from_euler_order(x: f32, y: f32, z: f32, order: EulerOrder) -> Self {
        let (s1, c1) = (x * 0.5).sin_cos();
        let (s2, c2) = (y * 0.5).sin_cos();
        let (s3, c3) = (z * 0.5).sin_cos();

        let q = match order {
            EulerOrder::Xyz => Self::new(
                s1 * c2 * c3 + c1 * s2 * s3,
                c1 * s2 * c3 - s1 * c2 * s3,
                c1 * c2 * s3 + s1 * s2 * c3,
                c1 * c2 * c3 - s1 * s2 * s3,
            ),
            EulerOrder::Yxz => Self::new(
                s1 * c2 * c3 + c1 * s2 * s3,
                c1 * s2 * c3 - s1 * c2 * s3,
                c1 * c2 * s3 - s1 * s2 * c3,
                c1 * c2 * c3 + s1 * s2 * s3,
            ),
            EulerOrder::Zxy => Self::new(
                s1 * c2 * c3 - c1 * s2 * s3,
                c1 * s2 * c3 + s1 * c2 * s3,
                c1 * c2 * s3 + s1 * s2 * c3,
                c1 * c2 * c3 - s1 * s2 * s3,
            ),
            EulerOrder::Zyx => Self::new(
                s1 * c2 * c3 - c1 * s2 * s3,
                c1 * s2 * c3 + s1 * c2 * s3,
                c1 * c2 * s3 - s1 * s2 * c3,
                c1 * c2 * c3 + s1 * s2 * s3,
            ),
            EulerOrder::Yzx => Self::new(
                s1 * c2 * c3 + c1 * s2 * s3,
                c1 * s2 * c3 + s1 * c2 * s3,
                c1 * c2 * s3 - s1 * s2 * c3,
                c1 * c2 * c3 - s1 * s2 * s3,
            ),
            EulerOrder::Xzy => Self::new(
                s1 * c2 * c3 - c1 * s2 * s3,
                c1 * s2 * c3 - s1 * c2 * s3,
                c1 * c2 * s3 + s1 * s2 * c3,
                c1 * c2 * c3 + s1 * s2 * s3,
            ),
        };
        q.normalized()
    }

    /// Euler angles in the default [`EulerOrder::Yxz`] order.
    #[inline]
    pub fn from_euler(x: f32, y: f32, z: f32) -> Self {
        Self::from_euler_order(x, y, z, EulerOrder::default())
    }

    // -- Interpolation ------------------------------------------------------

    /// Spherical interpolation along the shorter arc.
    ///
    /// Nearly identical inputs use a linear blend. The result is not
    /// renormalized.
    pub fn slerp(a: Quat, b: Quat, t: f32) -> Self {
        let mut b = b;
        let mut cosom = a.dot(b);
        if cosom < 0.0 {
            cosom = -cosom;
            let _ = b.negate();
        }

        let (scale0, scale1) = if (1.0 - cosom) > SLERP_LINEAR_THRESHOLD {
            let omega = cosom.acos();
            let sinom = omega.sin();
            (((1.0 - t) * omega).sin() / sinom, (t * omega).sin() / sinom)
        } else {
            (1.0 - t, t)
        };

        Self::new(
            scale0 * a.x + scale1 * b.x,
            scale0 * a.y + scale1 * b.y,
            scale0 * a.z + scale1 * b.z,
            scale0 * a.w + scale1 * b.w,
        )
    }

    /// Hemisphere-corrected linear blend, renormalized. Cheaper than
    /// [`Quat::slerp`] for per-frame blending.
    pub fn nblend(a: Quat, b: Quat, t: f32) -> Self {
        let ti = 1.0 - t;
        let s = if a.dot(b) < 0.0 { -t } else { t };
        Self::new(
            ti * a.x + s * b.x,
            ti * a.y + s * b.y,
            ti * a.z + s * b.z,
            ti * a.w + s * b.w,
        )
        .normalized()
    }
}

impl From<[f32; 4]> for Quat {
    #[inline]
    fn from(q: [f32; 4]) -> Self {
        Self::new(q[0], q[1], q[2], q[3])
    }
}

impl From<Quat> for [f32; 4] {
    #[inline]
    fn from(q: Quat) -> Self {
        q.to_array()
    }
}

impl From<glam::Quat> for Quat {
    #[inline]
    fn from(q: glam::Quat) -> Self {
        Self::new(q.x, q.y, q.z, q.w)
    }
}

impl From<Quat> for glam::Quat {
    #[inline]
    fn from(q: Quat) -> Self {
        Self::from_xyzw(q.x, q.y, q.z, q.w)
    }
}

/// A quaternion that is unit length by construction.
///
/// Every constructor normalizes, and composition renormalizes, so the
/// value never drifts. Convert to [`Quat`] for the in-place API.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(into = "Quat")]
pub struct UnitQuat(Quat);

impl UnitQuat {
    /// No rotation.
    pub const IDENTITY: Self = Self(Quat::IDENTITY);

    /// Normalize `q`. `None` for the zero quaternion or non-finite input.
    pub fn new(q: Quat) -> Option<Self> {
        let len_sq = q.len_sq();
        if len_sq == 0.0 || !len_sq.is_finite() {
            return None;
        }
        Some(Self(q.normalized()))
    }

    /// Rotation of `rad` radians about `axis` (normalized here).
    /// `None` for a zero axis.
    pub fn from_axis_angle(axis: Vec3, rad: f32) -> Option<Self> {
        if axis.len_sq() == 0.0 {
            return None;
        }
        Self::new(Quat::from_axis_angle(axis.normalized(), rad))
    }

    /// The wrapped quaternion.
    #[inline]
    pub const fn get(self) -> Quat {
        self.0
    }

    /// `self * other`, renormalized.
    #[inline]
    pub fn then(self, other: UnitQuat) -> Self {
        Self(Quat::from_mul(self.0, other.0).normalized())
    }

    /// Inverse rotation (the conjugate for unit quaternions).
    #[inline]
    pub fn inverse(self) -> Self {
        let q = self.0;
        Self(Quat::new(-q.x, -q.y, -q.z, q.w))
    }

    /// Spherical interpolation, renormalized.
    #[inline]
    pub fn slerp(a: UnitQuat, b: UnitQuat, t: f32) -> Self {
        Self(Quat::slerp(a.0, b.0, t).normalized())
    }

    /// Rotate a vector.
    #[inline]
    pub fn rotate(self, v: Vec3) -> Vec3 {
        v.rotated(self.0)
    }
}

impl From<UnitQuat> for Quat {
    #[inline]
    fn from(q: UnitQuat) -> Self {
        q.0
    }
}
