//! Scalar interpolation and remapping helpers.

use std::f32::consts::PI;

/// Linear interpolation.
#[inline]
pub fn linear(a: f32, b: f32, t: f32) -> f32 {
    a * (1.0 - t) + b * t
}

/// Exponential interpolation: halfway between 2 and 8 is 4, not 5.
/// Both ends must be positive.
#[inline]
pub fn eerp(a: f32, b: f32, t: f32) -> f32 {
    a.powf(1.0 - t) * b.powf(t)
}

/// Circular lerp over degrees, crossing the 0/360 seam the short way.
pub fn clerp(start: f32, end: f32, t: f32) -> f32 {
    const MIN: f32 = 0.0;
    const MAX: f32 = 360.0;
    let half = ((MAX - MIN) / 2.0).abs();
    let es = end - start;

    if es < -half {
        start + ((MAX - start) + end) * t
    } else if es > half {
        start - ((MAX - end) + start) * t
    } else {
        start + es * t
    }
}

/// Cosine-eased interpolation.
#[inline]
pub fn cosine(a: f32, b: f32, t: f32) -> f32 {
    let t2 = (1.0 - (t * PI).cos()) / 2.0;
    a * (1.0 - t2) + b * t2
}

/// Cubic (smooth-step weighted) interpolation between two values.
#[inline]
pub fn cubic(a: f32, b: f32, t: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    a * (2.0 * t3 - 3.0 * t2 + 1.0) + b * (3.0 * t2 - 2.0 * t3)
}

/// Cubic spline through `b` and `c`, shaped by neighbours `a` and `d`.
pub fn cubic_spline(a: f32, b: f32, c: f32, d: f32, t: f32) -> f32 {
    let t2 = t * t;
    let a0 = d - c - a + b;
    let a1 = a - b - a0;
    let a2 = c - a;
    a0 * t * t2 + a1 * t2 + a2 * t + b
}

/// Catmull-Rom spline through `b` and `c`.
pub fn cubic_smooth(a: f32, b: f32, c: f32, d: f32, t: f32) -> f32 {
    let t2 = t * t;
    let a0 = -0.5 * a + 1.5 * b - 1.5 * c + 0.5 * d;
    let a1 = a - 2.5 * b + 2.0 * c - 0.5 * d;
    let a2 = -0.5 * a + 0.5 * c;
    a0 * t * t2 + a1 * t2 + a2 * t + b
}

/// Hermite spline through `b` and `c`.
///
/// `tension`: 1 is tight, 0 normal, -1 loose. `bias`: 0 is even, positive
/// leans toward the first segment, negative toward the last.
pub fn hermite(
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    t: f32,
    tension: f32,
    bias: f32,
) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;
    let bt_pn = (1.0 + bias) * (1.0 - tension) / 2.0;
    let bt_np = (1.0 - bias) * (1.0 - tension) / 2.0;
    let m0 = (b - a) * bt_pn + (c - b) * bt_np;
    let m1 = (c - b) * bt_pn + (d - c) * bt_np;
    let a0 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let a1 = t3 - 2.0 * t2 + t;
    let a2 = t3 - t2;
    let a3 = -2.0 * t3 + 3.0 * t2;
    a0 * b + a1 * m0 + a2 * m1 + a3 * c
}

/// Where `v` sits between `min` and `max` (inverse lerp, unclamped).
#[inline]
pub fn fnorm(min: f32, max: f32, v: f32) -> f32 {
    (v - min) / (max - min)
}

/// Hermite smooth step of `v` across `[min, max]`, clamped to `[0, 1]`.
pub fn smooth_step(min: f32, max: f32, v: f32) -> f32 {
    let v = fnorm(min, max, v).clamp(0.0, 1.0);
    v * v * (3.0 - 2.0 * v)
}

/// Ken Perlin's smoother step across `[min, max]`.
pub fn smoother_step(min: f32, max: f32, v: f32) -> f32 {
    if v <= min {
        return 0.0;
    }
    if v >= max {
        return 1.0;
    }
    let v = fnorm(min, max, v);
    v * v * v * (v * (v * 6.0 - 15.0) + 10.0)
}
