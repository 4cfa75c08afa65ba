//! Rigid-transform algebra.
//!
//! Plain `Copy` value types with explicit fixed-size storage. Arrays,
//! tuples and `glam` types convert in through `From`, which is the only
//! conversion path at API boundaries.

/// Easing curves.
pub mod easing;
/// Euler axis orders.
pub mod euler;
/// Shaping curves (steps, remaps, bells).
pub mod gradient;
/// Scalar interpolation helpers.
pub mod lerp;
mod ops;
/// Rotation quaternions.
pub mod quat;
/// Hierarchical position / rotation / scale.
pub mod transform;
/// 3-component vectors.
pub mod vec3;

pub use easing::Easing;
pub use euler::EulerOrder;
pub use quat::{Quat, UnitQuat};
pub use transform::Transform;
pub use vec3::Vec3;
