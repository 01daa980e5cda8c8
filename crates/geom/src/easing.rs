//! A catalog of named easing functions.
//!
//! Each easing remaps a progress value `p ∈ [0, 1]` and anchors at `ease(0) = 0` and
//! `ease(1) = 1`. The `back` and `elastic` families overshoot transiently and the `bounce`
//! family oscillates, the others are monotonic.
//!
//! Easings are selected by name, using the usual `<family><In|Out|InOut>` naming scheme:
//!
//! ```
//! use flora_geom::Easing;
//!
//! let ease: Easing = "cubicInOut".parse().unwrap();
//! assert_eq!(ease, Easing::CubicInOut);
//! assert_eq!(ease.ease(1.0f32), 1.0);
//!
//! assert!("cubicInAndOut".parse::<Easing>().is_err());
//! ```

use crate::scalar::{Float, Scalar};

use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use thiserror::Error;

/// Returned when parsing the name of an easing that is not in the catalog.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
#[error("Unknown easing function {name:?}.")]
pub struct UnknownEasing {
    pub name: String,
}

/// A named easing function.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(rename_all = "camelCase"))]
pub enum Easing {
    Linear,
    QuadIn,
    QuadOut,
    QuadInOut,
    CubicIn,
    CubicOut,
    CubicInOut,
    QuartIn,
    QuartOut,
    QuartInOut,
    QuintIn,
    QuintOut,
    QuintInOut,
    SineIn,
    SineOut,
    SineInOut,
    CircIn,
    CircOut,
    CircInOut,
    ExpoIn,
    ExpoOut,
    ExpoInOut,
    BackIn,
    BackOut,
    BackInOut,
    ElasticIn,
    ElasticOut,
    ElasticInOut,
    BounceIn,
    BounceOut,
    BounceInOut,
}

impl Easing {
    /// Every easing in the catalog.
    pub const ALL: [Easing; 31] = [
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
        Easing::CircIn,
        Easing::CircOut,
        Easing::CircInOut,
        Easing::ExpoIn,
        Easing::ExpoOut,
        Easing::ExpoInOut,
        Easing::BackIn,
        Easing::BackOut,
        Easing::BackInOut,
        Easing::ElasticIn,
        Easing::ElasticOut,
        Easing::ElasticInOut,
        Easing::BounceIn,
        Easing::BounceOut,
        Easing::BounceInOut,
    ];

    /// The catalog name of this easing.
    pub fn name(self) -> &'static str {
        match self {
            Easing::Linear => "linear",
            Easing::QuadIn => "quadIn",
            Easing::QuadOut => "quadOut",
            Easing::QuadInOut => "quadInOut",
            Easing::CubicIn => "cubicIn",
            Easing::CubicOut => "cubicOut",
            Easing::CubicInOut => "cubicInOut",
            Easing::QuartIn => "quartIn",
            Easing::QuartOut => "quartOut",
            Easing::QuartInOut => "quartInOut",
            Easing::QuintIn => "quintIn",
            Easing::QuintOut => "quintOut",
            Easing::QuintInOut => "quintInOut",
            Easing::SineIn => "sineIn",
            Easing::SineOut => "sineOut",
            Easing::SineInOut => "sineInOut",
            Easing::CircIn => "circIn",
            Easing::CircOut => "circOut",
            Easing::CircInOut => "circInOut",
            Easing::ExpoIn => "expoIn",
            Easing::ExpoOut => "expoOut",
            Easing::ExpoInOut => "expoInOut",
            Easing::BackIn => "backIn",
            Easing::BackOut => "backOut",
            Easing::BackInOut => "backInOut",
            Easing::ElasticIn => "elasticIn",
            Easing::ElasticOut => "elasticOut",
            Easing::ElasticInOut => "elasticInOut",
            Easing::BounceIn => "bounceIn",
            Easing::BounceOut => "bounceOut",
            Easing::BounceInOut => "bounceInOut",
        }
    }

    /// Looks an easing up by name.
    pub fn from_name(name: &str) -> Result<Self, UnknownEasing> {
        Easing::ALL
            .iter()
            .copied()
            .find(|e| e.name() == name)
            .ok_or_else(|| UnknownEasing {
                name: name.to_string(),
            })
    }

    /// Whether the easing never decreases over `[0, 1]`.
    ///
    /// False for the overshooting `back` and `elastic` families and for `bounce`.
    pub fn is_monotonic(self) -> bool {
        !matches!(
            self,
            Easing::BackIn
                | Easing::BackOut
                | Easing::BackInOut
                | Easing::ElasticIn
                | Easing::ElasticOut
                | Easing::ElasticInOut
                | Easing::BounceIn
                | Easing::BounceOut
                | Easing::BounceInOut
        )
    }

    /// Applies the easing to `p`, expected to be in `[0, 1]`.
    pub fn ease<S: Scalar>(self, p: S) -> S {
        let t = p;
        match self {
            Easing::Linear => t,

            Easing::QuadIn => t * t,
            Easing::QuadOut => -t * (t - S::TWO),
            Easing::QuadInOut => {
                if t < S::HALF {
                    S::TWO * t * t
                } else {
                    let f = S::TWO * t - S::ONE;
                    -S::HALF * (f * (f - S::TWO) - S::ONE)
                }
            }

            Easing::CubicIn => t * t * t,
            Easing::CubicOut => {
                let f = t - S::ONE;
                f * f * f + S::ONE
            }
            Easing::CubicInOut => {
                if t < S::HALF {
                    S::FOUR * t * t * t
                } else {
                    let f = S::TWO * t - S::TWO;
                    S::HALF * f * f * f + S::ONE
                }
            }

            Easing::QuartIn => t.powi(4),
            Easing::QuartOut => S::ONE - (t - S::ONE).powi(4),
            Easing::QuartInOut => {
                if t < S::HALF {
                    S::value(8.0) * t.powi(4)
                } else {
                    S::ONE - S::value(8.0) * (t - S::ONE).powi(4)
                }
            }

            Easing::QuintIn => t.powi(5),
            Easing::QuintOut => (t - S::ONE).powi(5) + S::ONE,
            Easing::QuintInOut => {
                if t < S::HALF {
                    S::value(16.0) * t.powi(5)
                } else {
                    let f = S::TWO * t - S::TWO;
                    S::HALF * f.powi(5) + S::ONE
                }
            }

            Easing::SineIn => {
                let v = Float::cos(t * S::FRAC_PI_2());
                if v.abs() < S::EPSILON {
                    S::ONE
                } else {
                    S::ONE - v
                }
            }
            Easing::SineOut => Float::sin(t * S::FRAC_PI_2()),
            Easing::SineInOut => -S::HALF * (Float::cos(S::PI() * t) - S::ONE),

            Easing::CircIn => S::ONE - (S::ONE - t * t).max(S::ZERO).sqrt(),
            Easing::CircOut => {
                let f = t - S::ONE;
                (S::ONE - f * f).max(S::ZERO).sqrt()
            }
            Easing::CircInOut => {
                let f = S::TWO * t;
                if f < S::ONE {
                    -S::HALF * ((S::ONE - f * f).max(S::ZERO).sqrt() - S::ONE)
                } else {
                    let f = f - S::TWO;
                    S::HALF * ((S::ONE - f * f).max(S::ZERO).sqrt() + S::ONE)
                }
            }

            Easing::ExpoIn => {
                if t == S::ZERO {
                    S::ZERO
                } else {
                    (S::TEN * (t - S::ONE)).exp2()
                }
            }
            Easing::ExpoOut => {
                if t == S::ONE {
                    S::ONE
                } else {
                    S::ONE - (-S::TEN * t).exp2()
                }
            }
            Easing::ExpoInOut => {
                if t == S::ZERO || t == S::ONE {
                    t
                } else if t < S::HALF {
                    S::HALF * (S::value(20.0) * t - S::TEN).exp2()
                } else {
                    S::ONE - S::HALF * (S::TEN - S::value(20.0) * t).exp2()
                }
            }

            Easing::BackIn => {
                let s = S::value(BACK_OVERSHOOT);
                t * t * ((s + S::ONE) * t - s)
            }
            Easing::BackOut => {
                let s = S::value(BACK_OVERSHOOT);
                let f = t - S::ONE;
                f * f * ((s + S::ONE) * f + s) + S::ONE
            }
            Easing::BackInOut => {
                let s = S::value(BACK_OVERSHOOT * 1.525);
                let f = S::TWO * t;
                if f < S::ONE {
                    S::HALF * (f * f * ((s + S::ONE) * f - s))
                } else {
                    let f = f - S::TWO;
                    S::HALF * (f * f * ((s + S::ONE) * f + s) + S::TWO)
                }
            }

            Easing::ElasticIn => {
                Float::sin(S::value(13.0) * S::FRAC_PI_2() * t) * (S::TEN * (t - S::ONE)).exp2()
            }
            Easing::ElasticOut => {
                Float::sin(-S::value(13.0) * S::FRAC_PI_2() * (t + S::ONE)) * (-S::TEN * t).exp2()
                    + S::ONE
            }
            Easing::ElasticInOut => {
                let f = S::TWO * t;
                if t < S::HALF {
                    S::HALF
                        * Float::sin(S::value(13.0) * S::FRAC_PI_2() * f)
                        * (S::TEN * (f - S::ONE)).exp2()
                } else {
                    S::HALF
                        * (Float::sin(-S::value(13.0) * S::FRAC_PI_2() * f)
                            * (-S::TEN * (f - S::ONE)).exp2()
                            + S::TWO)
                }
            }

            Easing::BounceIn => S::ONE - bounce_out(S::ONE - t),
            Easing::BounceOut => bounce_out(t),
            Easing::BounceInOut => {
                if t < S::HALF {
                    S::HALF * (S::ONE - bounce_out(S::ONE - S::TWO * t))
                } else {
                    S::HALF * bounce_out(S::TWO * t - S::ONE) + S::HALF
                }
            }
        }
    }
}

const BACK_OVERSHOOT: f32 = 1.70158;

fn bounce_out<S: Scalar>(t: S) -> S {
    let a = S::value(4.0 / 11.0);
    let b = S::value(8.0 / 11.0);
    let c = S::value(9.0 / 10.0);

    let t2 = t * t;
    if t < a {
        S::value(7.5625) * t2
    } else if t < b {
        S::value(9.075) * t2 - S::value(9.9) * t + S::value(3.4)
    } else if t < c {
        S::value(4356.0 / 361.0) * t2 - S::value(35442.0 / 1805.0) * t + S::value(16061.0 / 1805.0)
    } else {
        S::value(10.8) * t2 - S::value(20.52) * t + S::value(10.72)
    }
}

impl FromStr for Easing {
    type Err = UnknownEasing;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Easing::from_name(s)
    }
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Default for Easing {
    fn default() -> Self {
        Easing::Linear
    }
}

#[test]
fn anchors() {
    for easing in Easing::ALL.iter() {
        let start = easing.ease(0.0f64);
        let end = easing.ease(1.0f64);
        assert!(start.abs() < 1e-3, "{} at 0: {}", easing, start);
        assert!((end - 1.0).abs() < 1e-3, "{} at 1: {}", easing, end);

        let start = easing.ease(0.0f32);
        let end = easing.ease(1.0f32);
        assert!(start.abs() < 1e-3, "{} at 0: {}", easing, start);
        assert!((end - 1.0).abs() < 1e-3, "{} at 1: {}", easing, end);
    }
}

#[test]
fn monotonic_halves() {
    let steps = 200;
    for easing in Easing::ALL.iter().filter(|e| e.is_monotonic()) {
        // Each half separately, then the whole range.
        for &(lo, hi) in &[(0.0, 0.5), (0.5, 1.0), (0.0, 1.0)] {
            let mut prev = easing.ease(lo);
            for i in 1..=steps {
                let p = lo + (hi - lo) * (i as f64 / steps as f64);
                let v = easing.ease(p);
                assert!(v + 1e-9 >= prev, "{} decreases at {}: {} < {}", easing, p, v, prev);
                prev = v;
            }
        }
    }
}

#[test]
fn in_out_are_continuous_at_midpoint() {
    for easing in Easing::ALL.iter().filter(|e| e.name().ends_with("InOut")) {
        let below = easing.ease(0.5 - 1e-7f64);
        let above = easing.ease(0.5f64);
        assert!((below - above).abs() < 1e-3, "{}: {} vs {}", easing, below, above);
    }
}

#[test]
fn names_round_trip() {
    for easing in Easing::ALL.iter() {
        assert_eq!(easing.name().parse::<Easing>(), Ok(*easing));
    }
}

#[test]
fn unknown_name() {
    let err = "quadratic".parse::<Easing>().unwrap_err();
    assert_eq!(err.name, "quadratic");
    assert!("".parse::<Easing>().is_err());
    assert!("QuadIn".parse::<Easing>().is_err());
}

#[test]
fn known_values() {
    assert_eq!(Easing::QuadIn.ease(0.5f32), 0.25);
    assert_eq!(Easing::QuadOut.ease(0.5f32), 0.75);
    assert_eq!(Easing::CubicIn.ease(0.5f32), 0.125);
    assert_eq!(Easing::Linear.ease(0.3f32), 0.3);
    assert!((Easing::SineInOut.ease(0.5f64) - 0.5).abs() < 1e-9);
    assert!(Easing::BackIn.ease(0.2f64) < 0.0);
    assert!(Easing::BackOut.ease(0.8f64) > 1.0);
}
