//! Easing curves for tweening poses and debug animations.
//!
//! Every curve maps `[0, 1]` onto a curve that starts at 0 and ends at 1
//! (elastic and back curves overshoot in between).

use std::f32::consts::PI;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Easing function variants.
#[derive(
    Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// No easing.
    #[default]
    Linear,
    /// Quadratic, slow start.
    QuadIn,
    /// Quadratic, slow end.
    QuadOut,
    /// Quadratic, slow start and end.
    QuadInOut,
    /// Cubic, slow start.
    CubicIn,
    /// Cubic, slow end.
    CubicOut,
    /// Cubic, slow start and end.
    CubicInOut,
    /// Quartic, slow start.
    QuartIn,
    /// Quartic, slow end.
    QuartOut,
    /// Quartic, slow start and end.
    QuartInOut,
    /// Quintic, slow start.
    QuintIn,
    /// Quintic, slow end.
    QuintOut,
    /// Quintic, slow start and end.
    QuintInOut,
    /// Sine, slow start.
    SineIn,
    /// Sine, slow end.
    SineOut,
    /// Sine, slow start and end.
    SineInOut,
    /// Exponential, slow start.
    ExpIn,
    /// Exponential, slow end.
    ExpOut,
    /// Exponential, slow start and end.
    ExpInOut,
    /// Circular, slow start.
    CircIn,
    /// Circular, slow end.
    CircOut,
    /// Circular, slow start and end.
    CircInOut,
    /// Spring wind-up at the start.
    ElasticIn,
    /// Spring overshoot at the end.
    ElasticOut,
    /// Spring at both ends.
    ElasticInOut,
    /// Pull back before moving.
    BackIn,
    /// Overshoot then settle.
    BackOut,
    /// Pull back and overshoot.
    BackInOut,
    /// Bounces at the start.
    BounceIn,
    /// Bounces at the end.
    BounceOut,
    /// Bounces at both ends.
    BounceInOut,
    /// Cubic Hermite with configurable control points:
    /// `c1·3t(1-t)² + c2·3(1-t)t² + t³`.
    CubicHermite {
        /// First control value.
        c1: f32,
        /// Second control value.
        c2: f32,
    },
}

const BACK_S: f32 = 1.70158;

impl Easing {
    /// Evaluate at `t`, clamped to `[0, 1]`.
    pub fn evaluate(self, t: f32) -> f32 {
        let k = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => k,
            Self::QuadIn => k * k,
            Self::QuadOut => k * (2.0 - k),
            Self::QuadInOut => in_out(k, |k| k * k),
            Self::CubicIn => k * k * k,
            Self::CubicOut => out_from_in(k, |k| k * k * k),
            Self::CubicInOut => in_out(k, |k| k * k * k),
            Self::QuartIn => k.powi(4),
            Self::QuartOut => out_from_in(k, |k| k.powi(4)),
            Self::QuartInOut => in_out(k, |k| k.powi(4)),
            Self::QuintIn => k.powi(5),
            Self::QuintOut => out_from_in(k, |k| k.powi(5)),
            Self::QuintInOut => in_out(k, |k| k.powi(5)),
            Self::SineIn => 1.0 - (k * PI / 2.0).cos(),
            Self::SineOut => (k * PI / 2.0).sin(),
            Self::SineInOut => 0.5 * (1.0 - (PI * k).cos()),
            Self::ExpIn => exp_in(k),
            Self::ExpOut => out_from_in(k, exp_in),
            Self::ExpInOut => in_out(k, exp_in),
            Self::CircIn => 1.0 - (1.0 - k * k).sqrt(),
            Self::CircOut => out_from_in(k, |k| 1.0 - (1.0 - k * k).sqrt()),
            Self::CircInOut => in_out(k, |k| 1.0 - (1.0 - k * k).sqrt()),
            Self::ElasticIn => elastic_in(k),
            Self::ElasticOut => out_from_in(k, elastic_in),
            Self::ElasticInOut => in_out(k, elastic_in),
            Self::BackIn => k * k * ((BACK_S + 1.0) * k - BACK_S),
            Self::BackOut => {
                let k = k - 1.0;
                k * k * ((BACK_S + 1.0) * k + BACK_S) + 1.0
            }
            Self::BackInOut => {
                let s = BACK_S * 1.525;
                let k = k * 2.0;
                if k < 1.0 {
                    0.5 * (k * k * ((s + 1.0) * k - s))
                } else {
                    let k = k - 2.0;
                    0.5 * (k * k * ((s + 1.0) * k + s) + 2.0)
                }
            }
            Self::BounceIn => 1.0 - bounce_out(1.0 - k),
            Self::BounceOut => bounce_out(k),
            Self::BounceInOut => {
                if k < 0.5 {
                    (1.0 - bounce_out(1.0 - k * 2.0)) * 0.5
                } else {
                    bounce_out(k * 2.0 - 1.0) * 0.5 + 0.5
                }
            }
            Self::CubicHermite { c1, c2 } => {
                let omt = 1.0 - k;
                c1 * 3.0 * k * omt * omt + c2 * 3.0 * omt * k * k + k * k * k
            }
        }
    }
}

/// Mirror an ease-in curve into its ease-out counterpart.
#[inline]
fn out_from_in(k: f32, f: impl Fn(f32) -> f32) -> f32 {
    1.0 - f(1.0 - k)
}

/// Ease-in over the first half, mirrored ease-out over the second.
#[inline]
fn in_out(k: f32, f: impl Fn(f32) -> f32) -> f32 {
    if k < 0.5 {
        0.5 * f(k * 2.0)
    } else {
        1.0 - 0.5 * f((1.0 - k) * 2.0)
    }
}

fn exp_in(k: f32) -> f32 {
    if k == 0.0 {
        0.0
    } else {
        1024.0_f32.powf(k - 1.0)
    }
}

fn elastic_in(k: f32) -> f32 {
    if k == 0.0 || k == 1.0 {
        return k;
    }
    -(2.0_f32.powf(10.0 * (k - 1.0))) * ((k - 1.1) * 5.0 * PI).sin()
}

fn bounce_out(k: f32) -> f32 {
    if k < 1.0 / 2.75 {
        7.5625 * k * k
    } else if k < 2.0 / 2.75 {
        let k = k - 1.5 / 2.75;
        7.5625 * k * k + 0.75
    } else if k < 2.5 / 2.75 {
        let k = k - 2.25 / 2.75;
        7.5625 * k * k + 0.9375
    } else {
        let k = k - 2.625 / 2.75;
        7.5625 * k * k + 0.984_375
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Easing; 31] = [
        Easing::Linear,
        Easing::QuadIn,
        Easing::QuadOut,
        Easing::QuadInOut,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
        Easing::QuartIn,
        Easing::QuartOut,
        Easing::QuartInOut,
        Easing::QuintIn,
        Easing::QuintOut,
        Easing::QuintInOut,
        Easing::SineIn,
        Easing::SineOut,
        Easing::SineInOut,
        Easing::ExpIn,
        Easing::ExpOut,
        Easing::ExpInOut,
        Easing::CircIn,
        Easing::CircOut,
        Easing::CircInOut,
        Easing::ElasticIn,
        Easing::ElasticOut,
        Easing::ElasticInOut,
        Easing::BackIn,
        Easing::BackOut,
        Easing::BackInOut,
        Easing::BounceIn,
        Easing::BounceOut,
        Easing::BounceInOut,
    ];

    #[test]
    fn test_endpoints() {
        for easing in ALL {
            // exp curves only approach 0 / 1 to within 2^-10
            assert!(easing.evaluate(0.0).abs() < 1e-3, "{easing:?} at 0");
            let end = easing.evaluate(1.0);
            assert!((end - 1.0).abs() < 1e-3, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_in_out_midpoint() {
        for easing in [
            Easing::QuadInOut,
            Easing::CubicInOut,
            Easing::QuartInOut,
            Easing::SineInOut,
            Easing::CircInOut,
            Easing::BounceInOut,
        ] {
            assert!((easing.evaluate(0.5) - 0.5).abs() < 1e-5, "{easing:?}");
        }
    }

    #[test]
    fn test_quadratic_values() {
        assert_eq!(Easing::QuadIn.evaluate(0.5), 0.25);
        assert_eq!(Easing::QuadOut.evaluate(0.5), 0.75);
    }

    #[test]
    fn test_input_clamping() {
        assert_eq!(Easing::Linear.evaluate(-0.5), 0.0);
        assert_eq!(Easing::Linear.evaluate(1.5), 1.0);
    }

    #[test]
    fn test_back_overshoots() {
        assert!(Easing::BackIn.evaluate(0.2) < 0.0);
        assert!(Easing::BackOut.evaluate(0.8) > 1.0);
    }

    #[test]
    fn test_cubic_hermite_ease_out_shape() {
        let hermite = Easing::CubicHermite { c1: 0.33, c2: 1.0 };
        assert_eq!(hermite.evaluate(0.0), 0.0);
        assert!((hermite.evaluate(1.0) - 1.0).abs() < 1e-6);
        assert!(hermite.evaluate(0.25) > 0.25);
    }
}
