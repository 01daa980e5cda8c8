//! Whether a point is inside a path.

use crate::geom::QuadraticBezierSegment;
use crate::math::Point;
use crate::path::{FillRule, PathEvent};

/// Returns whether the point is inside the path.
///
/// Sub-paths are implicitly closed, as when filling. Curves are approximated with
/// polylines that stay within `tolerance` of them.
pub fn hit_test_path<Iter>(point: &Point, path: Iter, fill_rule: FillRule, tolerance: f32) -> bool
where
    Iter: IntoIterator<Item = PathEvent>,
{
    fill_rule.contains(winding_number(point, path, tolerance))
}

/// Sum of the signed crossings of a horizontal ray going from the point towards -x.
///
/// Edges going down (+y) count for one, edges going up for minus one. An edge
/// crosses the ray when the point's y is in `[min_y, max_y[`, so that a vertex
/// shared by two edges is only counted once.
pub fn winding_number<Iter>(point: &Point, path: Iter, tolerance: f32) -> i32
where
    Iter: IntoIterator<Item = PathEvent>,
{
    let mut winding = 0;
    for event in path {
        match event {
            PathEvent::Begin { .. } => {}
            PathEvent::Line { from, to } => {
                winding += crossing(point, from, to);
            }
            PathEvent::Quadratic { from, ctrl, to } => {
                // Curves entirely above or below the ray can't cross it.
                let above = from.y > point.y && ctrl.y > point.y && to.y > point.y;
                let below = from.y < point.y && ctrl.y < point.y && to.y < point.y;
                if above || below {
                    continue;
                }

                let mut previous = from;
                for next in (QuadraticBezierSegment { from, ctrl, to }).flattened(tolerance) {
                    winding += crossing(point, previous, next);
                    previous = next;
                }
            }
            PathEvent::End { last, first, .. } => {
                winding += crossing(point, last, first);
            }
        }
    }

    winding
}

fn crossing(point: &Point, from: Point, to: Point) -> i32 {
    let sign = if from.y <= point.y && point.y < to.y {
        1
    } else if to.y <= point.y && point.y < from.y {
        -1
    } else {
        return 0;
    };

    let x = from.x + (point.y - from.y) / (to.y - from.y) * (to.x - from.x);
    if x > point.x {
        return 0;
    }

    sign
}

#[cfg(test)]
use crate::math::point;
#[cfg(test)]
use crate::path::Path;

#[cfg(test)]
fn polygon(points: &[Point]) -> Path {
    let mut builder = Path::builder();
    builder.begin(points[0]);
    for p in &points[1..] {
        builder.line_to(*p);
    }
    builder.close();
    builder.build()
}

#[test]
fn square_with_a_hole() {
    let mut builder = Path::builder();
    for ring in &[
        [point(0.0, 0.0), point(1.0, 0.0), point(1.0, 1.0), point(0.0, 1.0)],
        [point(0.25, 0.25), point(0.75, 0.25), point(0.75, 0.75), point(0.2, 0.75)],
    ] {
        builder.begin(ring[0]);
        for p in &ring[1..] {
            builder.line_to(*p);
        }
        builder.close();
    }
    let path = builder.build();
    let inside = |x: f32, y: f32, rule: FillRule| hit_test_path(&point(x, y), &path, rule, 0.1);

    for &(x, y) in &[(-1.0, 0.5), (2.0, 0.5), (2.0, 0.0), (0.5, -1.0), (0.5, 2.0)] {
        assert!(!inside(x, y, FillRule::EvenOdd));
        assert!(!inside(x, y, FillRule::NonZero));
    }

    // Both rings turn the same way.
    assert!(!inside(0.5, 0.5, FillRule::EvenOdd));
    assert!(inside(0.5, 0.5, FillRule::NonZero));
    assert!(inside(0.1, 0.5, FillRule::EvenOdd));
    assert!(inside(0.8, 0.5, FillRule::EvenOdd));
}

#[test]
fn ray_through_a_vertex() {
    let path = polygon(&[
        point(-10.0, 10.0),
        point(10.0, 10.0),
        point(10.0, 5.0),
        point(10.0, -10.0),
        point(-10.0, -10.0),
    ]);

    // The ray from (15, 5) passes through the vertex at (10, 5).
    assert!(!hit_test_path(&point(15.0, 5.0), &path, FillRule::NonZero, 0.1));
    assert!(!hit_test_path(&point(-15.0, 5.0), &path, FillRule::NonZero, 0.1));
    assert!(hit_test_path(&point(0.0, 5.0), &path, FillRule::NonZero, 0.1));
}

#[test]
fn open_sub_paths_are_filled() {
    let mut builder = Path::builder();
    builder.begin(point(0.0, 0.0));
    builder.line_to(point(4.0, 0.0));
    builder.line_to(point(4.0, 4.0));
    builder.line_to(point(0.0, 4.0));
    let path = builder.build();

    assert!(hit_test_path(&point(2.0, 2.0), &path, FillRule::NonZero, 0.1));
}

#[test]
fn leaf_shaped_lens() {
    let mut builder = Path::builder();
    builder.begin(point(0.0, 0.0));
    builder.quadratic_bezier_to(point(5.0, 4.0), point(10.0, 0.0));
    builder.quadratic_bezier_to(point(5.0, -4.0), point(0.0, 0.0));
    builder.close();
    let path = builder.build();

    assert!(hit_test_path(&point(5.0, 1.5), &path, FillRule::NonZero, 0.01));
    assert!(hit_test_path(&point(5.0, -1.5), &path, FillRule::NonZero, 0.01));
    // Inside the control polygon but outside the curve.
    assert!(!hit_test_path(&point(5.0, 2.5), &path, FillRule::NonZero, 0.01));
}

#[test]
fn staircase_is_counted_once() {
    let path = polygon(&[
        point(0.0, 0.0),
        point(0.0, 1.0),
        point(1.0, 1.0),
        point(1.0, 2.0),
        point(1.0, 3.0),
        point(3.0, 3.0),
        point(3.0, 0.0),
    ]);

    assert_eq!(winding_number(&point(2.0, 1.0), &path, 0.1), 1);
    assert_eq!(winding_number(&point(2.0, 2.0), &path, 0.1), 1);
}
