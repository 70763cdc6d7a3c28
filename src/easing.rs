//! Easing curves mapping normalized progress to an output intensity.
//!
//! Every curve is a plain `fn(f64) -> f64`. Inputs are meaningful in `[0, 1]`;
//! anything outside that range is extrapolated by the formula.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

const BACK_OVERSHOOT: f64 = 1.70158;

pub fn linear(x: f64) -> f64 {
    x
}

pub fn in_out_quad(x: f64) -> f64 {
    if x < 0.5 {
        2.0 * x * x
    } else {
        -1.0 + (4.0 - 2.0 * x) * x
    }
}

pub fn in_out_cubic(x: f64) -> f64 {
    if x < 0.5 {
        4.0 * x * x * x
    } else {
        0.5 * ((2.0 * x - 2.0).powi(3) + 2.0)
    }
}

pub fn in_out_quartic(x: f64) -> f64 {
    if x < 0.5 {
        8.0 * x.powi(4)
    } else {
        -0.5 * ((2.0 * x - 2.0).powi(4) - 2.0)
    }
}

/// Overshoots above 1 shortly before settling.
pub fn out_back(x: f64) -> f64 {
    let s = BACK_OVERSHOOT;
    let t = x - 1.0;
    t * t * ((s + 1.0) * t + s) + 1.0
}

/// Sine-shaped overshoot, larger than [`out_back`].
pub fn out_back2(x: f64) -> f64 {
    let u = 1.0 - x;
    1.0 - (u * u * u - u * (u * PI).sin())
}

/// Damped oscillation around 1. The endpoints are returned exactly.
pub fn out_elastic(x: f64) -> f64 {
    if x == 0.0 {
        return 0.0;
    }
    if x == 1.0 {
        return 1.0;
    }
    (-6.5 * PI * (x + 1.0)).sin() * 2f64.powf(-10.0 * x) + 1.0
}

pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Named easing curve, selectable from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Easing {
    #[default]
    #[serde(rename = "linear")]
    Linear,
    #[serde(rename = "in-out-quad")]
    InOutQuad,
    #[serde(rename = "in-out-cubic")]
    InOutCubic,
    #[serde(rename = "in-out-quartic")]
    InOutQuartic,
    #[serde(rename = "out-back")]
    OutBack,
    #[serde(rename = "out-back-2")]
    OutBack2,
    #[serde(rename = "out-elastic")]
    OutElastic,
}

impl Easing {
    pub const ALL: [Easing; 7] = [
        Easing::Linear,
        Easing::InOutQuad,
        Easing::InOutCubic,
        Easing::InOutQuartic,
        Easing::OutBack,
        Easing::OutBack2,
        Easing::OutElastic,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::InOutQuad => "in-out-quad",
            Easing::InOutCubic => "in-out-cubic",
            Easing::InOutQuartic => "in-out-quartic",
            Easing::OutBack => "out-back",
            Easing::OutBack2 => "out-back-2",
            Easing::OutElastic => "out-elastic",
        }
    }

    pub fn as_fn(self) -> fn(f64) -> f64 {
        match self {
            Easing::Linear => linear,
            Easing::InOutQuad => in_out_quad,
            Easing::InOutCubic => in_out_cubic,
            Easing::InOutQuartic => in_out_quartic,
            Easing::OutBack => out_back,
            Easing::OutBack2 => out_back2,
            Easing::OutElastic => out_elastic,
        }
    }

    pub fn apply(self, x: f64) -> f64 {
        (self.as_fn())(x)
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown easing curve `{0}`")]
pub struct UnknownEasing(pub String);

impl FromStr for Easing {
    type Err = UnknownEasing;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Easing::ALL
            .into_iter()
            .find(|e| e.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| UnknownEasing(wanted.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_exact() {
        for f in [linear, in_out_quad, in_out_cubic, in_out_quartic, out_elastic] {
            assert_eq!(f(0.0), 0.0);
            assert_eq!(f(1.0), 1.0);
        }
    }

    #[test]
    fn test_back_curves_end_at_one() {
        assert_eq!(out_back(1.0), 1.0);
        assert_eq!(out_back2(1.0), 1.0);

        // The start is whatever the closed form gives, not a forced zero.
        let s = BACK_OVERSHOOT;
        assert_eq!(out_back(0.0), ((s + 1.0) * -1.0 + s) + 1.0);
        assert_eq!(out_back2(0.0), 1.0 - (1.0 - PI.sin()));
        assert!(out_back(0.0).abs() < 1e-12);
        assert!(out_back2(0.0).abs() < 1e-12);
    }

    #[test]
    fn test_midpoint_continuity() {
        assert_eq!(in_out_cubic(0.5), 0.5);
        assert_eq!(in_out_quartic(0.5), 0.5);
        assert_eq!(in_out_quad(0.5), 0.5);

        let below = 0.5 - 1e-9;
        assert!((in_out_cubic(below) - 0.5).abs() < 1e-6);
        assert!((in_out_quartic(below) - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_overshoot() {
        let peak = |f: fn(f64) -> f64| {
            (0..=100)
                .map(|i| f(i as f64 / 100.0))
                .fold(f64::MIN, f64::max)
        };
        let back = peak(out_back);
        let back2 = peak(out_back2);
        assert!(back > 1.0, "out_back peak {back}");
        assert!(back2 > back, "out_back2 peak {back2} vs {back}");
        assert!(peak(out_elastic) > 1.0);
    }

    #[test]
    fn test_elastic_is_finite() {
        for i in 0..=1000 {
            let y = out_elastic(i as f64 / 1000.0);
            assert!(y.is_finite());
        }
    }

    #[test]
    fn test_deterministic() {
        for easing in Easing::ALL {
            for i in 0..=20 {
                let x = i as f64 / 20.0;
                assert_eq!(easing.apply(x).to_bits(), easing.apply(x).to_bits());
            }
        }
    }

    #[test]
    fn test_names_round_trip() {
        for easing in Easing::ALL {
            assert_eq!(easing.name().parse::<Easing>(), Ok(easing));
        }
        assert_eq!("OUT-Elastic".parse::<Easing>(), Ok(Easing::OutElastic));
        assert!("bounce".parse::<Easing>().is_err());
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(10.0, 20.0, 0.0), 10.0);
        assert_eq!(lerp(10.0, 20.0, 1.0), 20.0);
        assert_eq!(lerp(10.0, 20.0, 0.5), 15.0);
        assert!(lerp(0.0, 10.0, 1.1) > 10.0);
    }
}
