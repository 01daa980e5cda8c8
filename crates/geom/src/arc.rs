//! Circular arcs.

use crate::scalar::{Float, Scalar};
use crate::{point, vector, Point, QuadraticBezierSegment};

/// A circular arc, described by a center, a radius and an angular range.
///
/// Angles are in radians, measured from the positive x axis. With y pointing
/// down a positive sweep goes clockwise on screen, like a canvas `arc` call.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Arc<S> {
    pub center: Point<S>,
    pub radius: S,
    pub start_angle: S,
    pub sweep_angle: S,
}

impl<S: Scalar> Arc<S> {
    /// Where the arc starts.
    pub fn from(&self) -> Point<S> {
        self.point_at_angle(self.start_angle)
    }

    /// Approximates the arc with quadratic bézier curves, each covering at most an
    /// eighth of a turn.
    ///
    /// The sweep is clamped to a full turn.
    pub fn for_each_quadratic_bezier<F>(&self, cb: &mut F)
    where
        F: FnMut(&QuadraticBezierSegment<S>),
    {
        let full_turn = S::TWO * S::PI();
        let sweep = self.sweep_angle.max(-full_turn).min(full_turn);
        if sweep == S::ZERO {
            return;
        }

        let pieces = (sweep.abs() / S::FRAC_PI_4() - S::EPSILON).ceil().max(S::ONE);
        let n = pieces.to_u32().unwrap_or(1);
        let step = sweep / pieces;

        // A control point at this distance makes the piece tangent to the circle at
        // both ends.
        let ctrl_distance = self.radius / (step * S::HALF).cos();

        let mut from = self.from();
        for i in 0..n {
            let start = self.start_angle + step * S::value(i as f32);
            let end = if i + 1 == n {
                self.start_angle + sweep
            } else {
                start + step
            };
            let (sin, cos) = Float::sin_cos(start + step * S::HALF);
            let ctrl = self.center + vector(cos, sin) * ctrl_distance;
            let to = self.point_at_angle(end);

            cb(&QuadraticBezierSegment { from, ctrl, to });
            from = to;
        }
    }

    fn point_at_angle(&self, angle: S) -> Point<S> {
        let (sin, cos) = Float::sin_cos(angle);
        point(
            self.center.x + self.radius * cos,
            self.center.y + self.radius * sin,
        )
    }
}

#[test]
fn circle_in_eight_pieces() {
    let arc = Arc {
        center: point(0.0f32, 0.0),
        radius: 10.0,
        start_angle: 0.0,
        sweep_angle: 2.0 * core::f32::consts::PI,
    };
    let mut count = 0;
    let mut last = arc.from();
    arc.for_each_quadratic_bezier(&mut |curve| {
        assert_eq!(curve.from, last);
        // The middle of each piece stays close to the circle.
        let mid = curve.sample(0.5);
        assert!(((mid - point(0.0, 0.0)).length() - 10.0).abs() < 0.1);
        last = curve.to;
        count += 1;
    });

    assert_eq!(count, 8);
    assert!((last - point(10.0, 0.0)).length() < 1e-4);
}

#[test]
fn negative_sweep() {
    let arc = Arc {
        center: point(0.0f32, 0.0),
        radius: 1.0,
        start_angle: 0.0,
        sweep_angle: -core::f32::consts::FRAC_PI_2,
    };

    let mut pieces = std::vec::Vec::new();
    arc.for_each_quadratic_bezier(&mut |curve| pieces.push(*curve));

    assert_eq!(pieces.len(), 2);
    let end = pieces[1].to;
    assert!(end.x.abs() < 1e-5);
    assert!((end.y + 1.0).abs() < 1e-5);
}

#[test]
fn empty_sweep() {
    let arc = Arc {
        center: point(0.0f32, 0.0),
        radius: 1.0,
        start_angle: 1.0,
        sweep_angle: 0.0,
    };

    let mut count = 0;
    arc.for_each_quadratic_bezier(&mut |_| count += 1);
    assert_eq!(count, 0);
}
