//! Shaping curves over a unit parameter.
//!
//! Most functions take `t` in `0..=1`. The clamped smooth steps live in
//! [`super::lerp`]; these are the unclamped and shaped variants.

use std::f32::consts::{PI, TAU};

/// 0 below `edge`, 1 at or above it.
#[inline]
pub fn step(edge: f32, x: f32) -> f32 {
    if x < edge {
        0.0
    } else {
        1.0
    }
}

/// Unclamped smooth step: starts and ends slowly.
#[inline]
pub fn smooth_t_step(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// Polynomial smooth minimum; `k` is the blend width, 0 gives a hard min.
pub fn smooth_min(a: f32, b: f32, k: f32) -> f32 {
    if k == 0.0 {
        return a.min(b);
    }
    let h = (k - (a - b).abs()).max(0.0) / k;
    a.min(b) - h * h * h * k * (1.0 / 6.0)
}

/// Perlin fade curve, `6t^5 - 15t^4 + 10t^3`.
#[inline]
pub fn fade(t: f32) -> f32 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Remap `0..1` to `-1..1`.
#[inline]
pub fn remap_n01(t: f32) -> f32 {
    t * 2.0 - 1.0
}

/// Remap `0..1` to `0..1..0`.
#[inline]
pub fn remap_010(t: f32) -> f32 {
    1.0 - (2.0 * t - 1.0).abs()
}

fn fract(x: f32) -> f32 {
    x - x.floor()
}

/// 1D value noise in `0..1`, smoothly interpolated between integer
/// lattice points.
pub fn noise(x: f32) -> f32 {
    let i = x.floor();
    let f = fract(x);
    let t = f * f * (3.0 - 2.0 * f);
    fract(i.sin() * 1e4) * (1.0 - t) + fract((i + 1.0).sin() * 1e4) * t
}

/// Bounce envelope; `jump` sets the bounce count, `offset` lifts the
/// envelope (6 and 1 are typical).
pub fn bouncy(t: f32, jump: f32, offset: f32) -> f32 {
    let rad = TAU * t;
    (offset + rad.sin()) / 2.0 * (jump * rad).sin()
}

/// Smooth ease that overshoots 1 before settling. `n` shapes the start,
/// `k` the overshoot (2 and 2 are typical).
pub fn over_shoot(t: f32, n: f32, k: f32) -> f32 {
    let t = smooth_t_step(t);
    let a = n * t * t;
    let b = 1.0 - k * (t - 1.0).powi(2);
    a * (1.0 - t) + b * t
}

/// Normalized tunable sigmoid over `-1..1`.
///
/// `k = 0` is linear, positive `k` flattens the curve around 0, negative
/// `k` flattens it near -1 and 1. Maps -1, 0 and 1 to themselves for
/// `k != 1`.
pub fn sigmoid(t: f32, k: f32) -> f32 {
    (t - k * t) / (k - 2.0 * k * t.abs() + 1.0)
}

/// `(4x(1 - x))^k`: 0 at both ends, 1 at the middle.
#[inline]
pub fn parabola(x: f32, k: f32) -> f32 {
    (4.0 * x * (1.0 - x)).powf(k)
}

/// Sine bell: 0 at both ends, 1 at `t = 0.5`.
#[inline]
pub fn bell_curve(t: f32) -> f32 {
    ((2.0 * PI * (t - 0.25)).sin() + 1.0) * 0.5
}

/// Beta-distribution bell; larger `a` narrows it (1.5, 2, 4, 9).
#[inline]
pub fn beta_dist_curve(t: f32, a: f32) -> f32 {
    4.0_f32.powf(a) * (t * (1.0 - t)).powf(a)
}
