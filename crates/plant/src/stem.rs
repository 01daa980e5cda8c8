//! Stem curves and the queries decorations are placed with.

use crate::geom::utils::remap;
use crate::geom::QuadraticBezierSegment;
use crate::math::{point, Point, Vector};

use rand::Rng;

/// A stem is a single quadratic bézier curve going from the plant's origin to its tip.
pub type Stem = QuadraticBezierSegment<f32>;

/// Range of the random horizontal offset of the tip, relative to the plant height.
pub const MAX_RELATIVE_X_OFFSET: f32 = 0.5;

/// Control point offsets of vertical and of maximally offset stems, relative to the plant height.
const CTRL_Y_OFFSET_STRAIGHT: f32 = 0.5;
const CTRL_Y_OFFSET_BENT: f32 = 0.1;

/// A point on a stem with the direction decorations grow towards.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ParametricSample {
    pub progress: f32,
    pub position: Point,
    /// Unit normal, or zero on a stem that collapses to a point.
    pub normal: Vector,
    /// Direction of the normal in radians.
    pub normal_angle: f32,
}

/// Evaluates the stem at `progress`, clamped to `[0, 1]`.
pub fn sample(stem: &Stem, progress: f32) -> ParametricSample {
    let t = progress.max(0.0).min(1.0);
    let normal = stem.normal(t);
    ParametricSample {
        progress: t,
        position: stem.sample(t),
        normal,
        normal_angle: normal.y.atan2(normal.x),
    }
}

/// Builds an upward stem of the given height.
///
/// The tip is offset horizontally by `bend * height`. The control point sits straight
/// above the origin, `curve * height` below the tip.
pub fn stem_from_offsets(origin: Point, height: f32, bend: f32, curve: f32) -> Stem {
    let to = point(origin.x + bend * height, origin.y - height);
    let ctrl = point(origin.x, to.y + curve * height);

    QuadraticBezierSegment {
        from: origin,
        ctrl,
        to,
    }
}

/// Control point offset matching a horizontal offset.
///
/// Stems that lean further bend more, vertical stems stay straight.
pub fn curve_for_bend(bend: f32) -> f32 {
    remap(
        bend.abs(),
        0.0,
        MAX_RELATIVE_X_OFFSET,
        CTRL_Y_OFFSET_STRAIGHT,
        CTRL_Y_OFFSET_BENT,
    )
}

/// Builds a stem with a random horizontal offset.
pub fn random_stem<R: Rng + ?Sized>(origin: Point, height: f32, rng: &mut R) -> Stem {
    let bend = rng.random_range(-MAX_RELATIVE_X_OFFSET..=MAX_RELATIVE_X_OFFSET);
    log::trace!("random stem bend {}", bend);

    stem_from_offsets(origin, height, bend, curve_for_bend(bend))
}

#[test]
fn vertical_stem() {
    let stem = stem_from_offsets(point(0.0, 0.0), 100.0, 0.0, 0.5);
    assert_eq!(stem.ctrl, point(0.0, -50.0));
    assert_eq!(stem.to, point(0.0, -100.0));

    let s = sample(&stem, 0.5);
    assert_eq!(s.position, point(0.0, -50.0));
    // Growing upwards, the normal points to the right.
    assert!((s.normal.x - 1.0).abs() < 1e-6);
    assert!(s.normal.y.abs() < 1e-6);
    assert!(s.normal_angle.abs() < 1e-6);
}

#[test]
fn endpoints_are_exact() {
    let stem = stem_from_offsets(point(12.5, 300.0), 80.0, 0.3, curve_for_bend(0.3));
    assert_eq!(sample(&stem, 0.0).position, stem.from);
    assert_eq!(sample(&stem, 1.0).position, stem.to);
}

#[test]
fn bend_controls_curvature() {
    assert_eq!(curve_for_bend(0.0), 0.5);
    assert_eq!(curve_for_bend(-0.5), 0.1);
    assert_eq!(curve_for_bend(0.5), 0.1);

    let stem = stem_from_offsets(point(0.0, 0.0), 100.0, 0.5, curve_for_bend(0.5));
    assert_eq!(stem.to, point(50.0, -100.0));
    assert!((stem.ctrl.y - -90.0).abs() < 1e-4);
    assert_eq!(stem.ctrl.x, 0.0);
}

#[test]
fn degenerate_stem() {
    let stem = stem_from_offsets(point(5.0, 5.0), 0.0, 0.0, 0.5);
    let s = sample(&stem, 0.5);
    assert_eq!(s.position, point(5.0, 5.0));
    assert_eq!(s.normal, Vector::zero());
    assert_eq!(s.normal_angle, 0.0);
    assert!(!s.normal_angle.is_nan());
}

#[test]
fn random_stems_stay_in_range() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let mut rng = StdRng::seed_from_u64(3);
    for _ in 0..100 {
        let stem = random_stem(point(0.0, 0.0), 100.0, &mut rng);
        assert!(stem.to.x >= -50.0 && stem.to.x <= 50.0);
        assert_eq!(stem.to.y, -100.0);
        assert!(stem.ctrl.y >= -90.0 - 1e-3 && stem.ctrl.y <= -50.0 + 1e-3);
    }
}
