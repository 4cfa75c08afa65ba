//! Operator overloads for the math types.
//!
//! Kept apart from the type definitions: `std::ops::Add` and friends are
//! only imported here, so elsewhere `v.add(w)` always resolves to the
//! in-place inherent method rather than the by-value trait method.

use std::ops::{Add, AddAssign, Div, Mul, MulAssign, Neg, Sub, SubAssign};

use super::{Quat, Transform, Vec3};

impl Add for Vec3 {
    type Output = Vec3;

    #[inline]
    fn add(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Vec3 {
    type Output = Vec3;

    #[inline]
    fn sub(self, rhs: Vec3) -> Vec3 {
        Vec3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl Mul<f32> for Vec3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl Mul<Vec3> for f32 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs * self
    }
}

/// Component-wise product.
impl Mul for Vec3 {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        Vec3::from_mul(self, rhs)
    }
}

impl Div<f32> for Vec3 {
    type Output = Vec3;

    #[inline]
    fn div(self, rhs: f32) -> Vec3 {
        Vec3::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl Neg for Vec3 {
    type Output = Vec3;

    #[inline]
    fn neg(self) -> Vec3 {
        Vec3::new(-self.x, -self.y, -self.z)
    }
}

impl AddAssign for Vec3 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec3) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec3 {
    #[inline]
    fn sub_assign(&mut self, rhs: Vec3) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Vec3 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

/// Hamilton product; the right operand is applied first.
impl Mul for Quat {
    type Output = Quat;

    #[inline]
    fn mul(self, rhs: Quat) -> Quat {
        Quat::from_mul(self, rhs)
    }
}

impl MulAssign for Quat {
    #[inline]
    fn mul_assign(&mut self, rhs: Quat) {
        *self = Quat::from_mul(*self, rhs);
    }
}

/// Rotate a vector.
impl Mul<Vec3> for Quat {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        rhs.rotated(self)
    }
}

impl Neg for Quat {
    type Output = Quat;

    #[inline]
    fn neg(self) -> Quat {
        Quat::new(-self.x, -self.y, -self.z, -self.w)
    }
}

/// `parent * child`.
impl Mul for Transform {
    type Output = Transform;

    #[inline]
    fn mul(self, rhs: Transform) -> Transform {
        Transform::from_mul(self, rhs)
    }
}

/// Transform a point.
impl Mul<Vec3> for Transform {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.transform_vec3(rhs)
    }
}

#[cfg(test)]
mod tests {
    use std::f32::consts::FRAC_PI_2;

    use super::*;

    #[test]
    fn test_vec3_operators() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(0.5, 0.5, 0.5);
        assert_eq!(a + b, Vec3::new(1.5, 2.5, 3.5));
        assert_eq!(a - b, Vec3::new(0.5, 1.5, 2.5));
        assert_eq!(a * 2.0, Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, a * 2.0);
        assert_eq!(a * b, Vec3::new(0.5, 1.0, 1.5));
        assert_eq!(a / 2.0, Vec3::new(0.5, 1.0, 1.5));
        assert_eq!(-a, Vec3::new(-1.0, -2.0, -3.0));

        let mut c = a;
        c += b;
        c -= a;
        c *= 4.0;
        assert_eq!(c, Vec3::splat(2.0));
    }

    #[test]
    fn test_operator_and_in_place_agree() {
        let mut v = Vec3::new(1.0, 2.0, 3.0);
        let w = v + Vec3::ONE;
        // Inherent in-place method still wins when called on a place.
        let _ = Vec3::add(&mut v, Vec3::ONE);
        assert_eq!(v, w);
    }

    #[test]
    fn test_quat_and_transform_operators() {
        let q = Quat::from_axis_angle(Vec3::Y, FRAC_PI_2);
        let v = q * Vec3::Z;
        assert!((v.x - 1.0).abs() < 1e-5);

        let qq = q * q;
        let mut m = q;
        m *= q;
        assert_eq!(qq, m);
        assert_eq!((-q).dot(q), -q.dot(q));

        let parent = Transform::from_position(Vec3::X);
        let child = Transform::from_position(Vec3::Y);
        assert_eq!((parent * child).position, Vec3::new(1.0, 1.0, 0.0));
        assert_eq!(parent * Vec3::Z, Vec3::new(1.0, 0.0, 1.0));
    }
}
