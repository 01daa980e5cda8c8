use crate::scalar::{Float, Scalar};
use crate::{point, vector, Box2D, Point, Transform, Vector};

/// A quadratic bézier curve: `from`, one control point and `to`.
///
/// ```∀ t ∈ [0..1],  P(t) = (1 - t)² * from + 2 * (1 - t) * t * ctrl + t² * to```
///
/// Plant stems, branches, leaf outlines and petal lobes are all made of these.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct QuadraticBezierSegment<S> {
    pub from: Point<S>,
    pub ctrl: Point<S>,
    pub to: Point<S>,
}

impl<S: Scalar> QuadraticBezierSegment<S> {
    /// Point at progress `t`.
    ///
    /// `sample(0.0)` is exactly `from` and `sample(1.0)` is exactly `to`.
    pub fn sample(&self, t: S) -> Point<S> {
        let u = S::ONE - t;
        let (a, b, c) = (u * u, S::TWO * u * t, t * t);

        point(
            self.from.x * a + self.ctrl.x * b + self.to.x * c,
            self.from.y * a + self.ctrl.y * b + self.to.y * c,
        )
    }

    /// First derivative at `t`: `2(1 - t)(ctrl - from) + 2t(to - ctrl)`.
    pub fn derivative(&self, t: S) -> Vector<S> {
        let towards_ctrl = self.ctrl - self.from;
        let towards_to = self.to - self.ctrl;

        (towards_ctrl * (S::ONE - t) + towards_to * t) * S::TWO
    }

    /// Unit tangent at `t`.
    ///
    /// Where the derivative vanishes (at `t = 0` when `ctrl == from`, for example)
    /// the chord from `from` to `to` gives the direction. A curve collapsed onto a
    /// single point has a zero tangent.
    pub fn tangent(&self, t: S) -> Vector<S> {
        let candidates = [self.derivative(t), self.to - self.from];
        for v in &candidates {
            let len = v.length();
            if len > S::EPSILON {
                return *v / len;
            }
        }

        vector(S::ZERO, S::ZERO)
    }

    /// Unit normal at `t`: the tangent turned a quarter turn, `(-tangent.y, tangent.x)`.
    ///
    /// With y pointing down, a stem growing upwards has its normal pointing towards +x.
    pub fn normal(&self, t: S) -> Vector<S> {
        let tangent = self.tangent(t);
        // Subtracting from zero keeps the zero vector positive so that its angle is zero.
        vector(S::ZERO - tangent.y, tangent.x)
    }

    /// Direction of the normal at `t`, in radians. Zero on degenerate curves.
    pub fn normal_angle(&self, t: S) -> S {
        let n = self.normal(t);
        n.y.atan2(n.x)
    }

    pub fn transformed(&self, transform: &Transform<S>) -> Self {
        QuadraticBezierSegment {
            from: transform.transform_point(self.from),
            ctrl: transform.transform_point(self.ctrl),
            to: transform.transform_point(self.to),
        }
    }

    /// Points of a polyline that stays within `tolerance` of the curve, `from` excluded.
    ///
    /// The last point is exactly `to`.
    pub fn flattened(&self, tolerance: S) -> Flattened<S> {
        // A uniform n-piece polyline is within |from - 2 ctrl + to| / (4 n²) of the curve.
        let bend = (self.from - self.ctrl) + (self.to - self.ctrl);
        let pieces = (bend.length() / (S::FOUR * tolerance)).sqrt().ceil();

        Flattened {
            curve: *self,
            count: pieces.to_u32().unwrap_or(1).max(1),
            i: 0,
        }
    }

    /// The smallest rectangle containing the curve.
    pub fn bounding_box(&self) -> Box2D<S> {
        let mut min = self.from.min(self.to);
        let mut max = self.from.max(self.to);

        let extrema = [
            extremum(self.from.x, self.ctrl.x, self.to.x),
            extremum(self.from.y, self.ctrl.y, self.to.y),
        ];
        for t in extrema.iter().flatten() {
            let p = self.sample(*t);
            min = min.min(p);
            max = max.max(p);
        }

        Box2D { min, max }
    }
}

// Parameter in ]0, 1[ where one coordinate of the curve turns around, if any.
fn extremum<S: Scalar>(from: S, ctrl: S, to: S) -> Option<S> {
    let div = from - S::TWO * ctrl + to;
    if div == S::ZERO {
        return None;
    }

    let t = (from - ctrl) / div;
    if t > S::ZERO && t < S::ONE {
        Some(t)
    } else {
        None
    }
}

/// Iterator returned by [`QuadraticBezierSegment::flattened`].
#[derive(Clone, Debug)]
pub struct Flattened<S> {
    curve: QuadraticBezierSegment<S>,
    count: u32,
    i: u32,
}

impl<S: Scalar> Iterator for Flattened<S> {
    type Item = Point<S>;

    fn next(&mut self) -> Option<Point<S>> {
        if self.i >= self.count {
            return None;
        }

        self.i += 1;
        if self.i == self.count {
            return Some(self.curve.to);
        }

        let t = S::value(self.i as f32) / S::value(self.count as f32);
        Some(self.curve.sample(t))
    }
}

#[cfg(test)]
fn vertical_stem() -> QuadraticBezierSegment<f32> {
    QuadraticBezierSegment {
        from: point(0.0, 0.0),
        ctrl: point(0.0, -50.0),
        to: point(0.0, -100.0),
    }
}

#[test]
fn endpoints_are_exact() {
    let curves = [
        vertical_stem(),
        QuadraticBezierSegment {
            from: point(12.3, 45.6),
            ctrl: point(-7.1, 0.25),
            to: point(101.7, -33.3),
        },
    ];

    for c in &curves {
        assert_eq!(c.sample(0.0), c.from);
        assert_eq!(c.sample(1.0), c.to);
    }
}

#[test]
fn sample_midpoint() {
    let c = QuadraticBezierSegment {
        from: point(0.0f32, 0.0),
        ctrl: point(1.0, 1.0),
        to: point(2.0, 0.0),
    };

    assert_eq!(c.sample(0.5), point(1.0, 0.5));
}

#[test]
fn normal_of_vertical_stem() {
    let stem = vertical_stem();

    for &t in &[0.0, 0.25, 0.5, 1.0] {
        let n = stem.normal(t);
        assert!((n.x - 1.0).abs() < 1e-6, "{:?}", n);
        assert!(n.y.abs() < 1e-6, "{:?}", n);
        assert!(stem.normal_angle(t).abs() < 1e-6);
    }
}

#[test]
fn normal_is_unit_length() {
    let c = QuadraticBezierSegment {
        from: point(0.0f32, 0.0),
        ctrl: point(80.0, -20.0),
        to: point(30.0, -120.0),
    };

    for i in 0..=10 {
        let t = i as f32 / 10.0;
        let n = c.normal(t);
        assert!((n.length() - 1.0).abs() < 1e-5);
        // Perpendicular to the derivative.
        assert!(n.dot(c.derivative(t)).abs() < 1e-3);
    }
}

#[test]
fn degenerate_normals() {
    // Vanishing derivative at t = 0, falls back to the chord.
    let c = QuadraticBezierSegment {
        from: point(0.0f32, 0.0),
        ctrl: point(0.0, 0.0),
        to: point(10.0, 0.0),
    };
    let n = c.normal(0.0);
    assert!((n.y - 1.0).abs() < 1e-6);

    // A curve with from == to == ctrl has no direction at all.
    let p = QuadraticBezierSegment {
        from: point(5.0f32, 5.0),
        ctrl: point(5.0, 5.0),
        to: point(5.0, 5.0),
    };
    for &t in &[0.0, 0.5, 1.0] {
        assert_eq!(p.normal(t), vector(0.0, 0.0));
        assert_eq!(p.normal_angle(t), 0.0);
    }

    // A loop where from == to is still well defined away from the tip.
    let l = QuadraticBezierSegment {
        from: point(0.0f32, 0.0),
        ctrl: point(10.0, -10.0),
        to: point(0.0, 0.0),
    };
    assert_eq!(l.sample(1.0), point(0.0, 0.0));
    assert!(!l.normal_angle(0.5).is_nan());
}

#[test]
fn flattening_ends_at_to() {
    let c = QuadraticBezierSegment {
        from: point(0.0f32, 0.0),
        ctrl: point(50.0, 100.0),
        to: point(100.0, 0.0),
    };

    let points: std::vec::Vec<Point<f32>> = c.flattened(0.1).collect();
    assert!(points.len() > 1);
    assert_eq!(points.last(), Some(&c.to));

    // Every point is on the curve.
    for (i, p) in points.iter().enumerate() {
        let t = (i + 1) as f32 / points.len() as f32;
        assert!((*p - c.sample(t)).length() < 1e-3);
    }
}

#[test]
fn flattening_a_straight_stem() {
    assert_eq!(vertical_stem().flattened(0.01).count(), 1);
}

#[test]
fn bounding_box_of_a_bent_branch() {
    let branch = QuadraticBezierSegment {
        from: point(0.0f32, 0.0),
        ctrl: point(10.0, 0.0),
        to: point(10.0, -10.0),
    };
    let r = branch.bounding_box();
    assert_eq!(r.min, point(0.0, -10.0));
    assert_eq!(r.max, point(10.0, 0.0));

    let arch = QuadraticBezierSegment {
        from: point(0.0f32, 0.0),
        ctrl: point(1.0, 2.0),
        to: point(2.0, 0.0),
    };
    let r = arch.bounding_box();
    assert_eq!(r.min, point(0.0, 0.0));
    assert!((r.max.y - 1.0).abs() < 1e-6);
}
