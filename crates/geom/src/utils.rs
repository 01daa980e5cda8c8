//! Scalar and vector helpers shared by the curve and layout code.

use crate::scalar::Scalar;
use crate::{vector, Vector};

/// Linear interpolation between `a` and `b`.
///
/// Written as `a * (1 - t) + b * t` so that `t = 0` yields exactly `a` and
/// `t = 1` yields exactly `b`.
#[inline]
pub fn lerp<S: Scalar>(a: S, b: S, t: S) -> S {
    a * (S::ONE - t) + b * t
}

/// Linearly maps `value` from the range `[in_start, in_end]` to `[out_start, out_end]`.
///
/// Ranges may be reversed. The input range endpoints map exactly onto the output range
/// endpoints. When the input range is empty the result is `out_start` instead of NaN.
///
/// No clamping is applied: values outside of the input range extrapolate.
pub fn remap<S: Scalar>(value: S, in_start: S, in_end: S, out_start: S, out_end: S) -> S {
    let span = in_end - in_start;
    if span == S::ZERO {
        return out_start;
    }

    lerp(out_start, out_end, (value - in_start) / span)
}

/// Rotates a vector around the origin.
///
/// With y pointing down, positive angles rotate clockwise on screen.
#[inline]
pub fn rotate<S: Scalar>(v: Vector<S>, angle: S) -> Vector<S> {
    let (sin, cos) = angle.sin_cos();
    vector(v.x * cos - v.y * sin, v.x * sin + v.y * cos)
}

#[test]
fn remap_endpoints() {
    assert_eq!(remap(0.0f32, 0.0, 1.0, 0.2, 0.8), 0.2);
    assert_eq!(remap(1.0f32, 0.0, 1.0, 0.2, 0.8), 0.8);
    assert_eq!(remap(0.3f32, 0.3, 0.7, 1.0, 0.5), 1.0);
    assert_eq!(remap(0.7f32, 0.3, 0.7, 1.0, 0.5), 0.5);
    assert!((remap(0.5f32, 0.0, 1.0, 0.0, 10.0) - 5.0).abs() < 1e-6);
}

#[test]
fn remap_empty_range() {
    let v = remap(0.4f32, 0.4, 0.4, 1.0, 0.5);
    assert_eq!(v, 1.0);
    assert!(!v.is_nan());
}

#[test]
fn rotate_quarter_turn() {
    let v = rotate(vector(-1.0f32, 0.0), core::f32::consts::FRAC_PI_2);
    assert!(v.x.abs() < 1e-6);
    assert!((v.y + 1.0).abs() < 1e-6);
}
