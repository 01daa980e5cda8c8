//! Bounding boxes of paths.

use crate::geom::QuadraticBezierSegment;
use crate::math::{Box2D, Point};
use crate::path::PathEvent;

/// The smallest axis-aligned rectangle containing the path. Empty paths yield
/// `Box2D::zero()`.
pub fn bounding_box<Iter>(path: Iter) -> Box2D
where
    Iter: IntoIterator<Item = PathEvent>,
{
    let mut bounds: Option<Box2D> = None;
    let mut include = |min: Point, max: Point| {
        bounds = Some(match bounds {
            Some(b) => Box2D::new(b.min.min(min), b.max.max(max)),
            None => Box2D::new(min, max),
        });
    };

    for event in path {
        match event {
            PathEvent::Begin { at } => include(at, at),
            PathEvent::Line { to, .. } => include(to, to),
            PathEvent::Quadratic { from, ctrl, to } => {
                let curve = QuadraticBezierSegment { from, ctrl, to }.bounding_box();
                include(curve.min, curve.max);
            }
            PathEvent::End { .. } => {}
        }
    }

    bounds.unwrap_or_else(Box2D::zero)
}

#[test]
fn curve_inside_its_control_points() {
    use crate::math::point;
    use crate::path::Path;

    let mut builder = Path::builder();
    builder.begin(point(-10.0, -3.0));
    builder.line_to(point(0.0, -12.0));
    builder.quadratic_bezier_to(point(3.0, 4.0), point(5.0, 3.0));
    builder.close();
    let r = bounding_box(&builder.build());

    assert_eq!(r.min, point(-10.0, -12.0));
    assert_eq!(r.max.x, 5.0);
    // The curve never reaches its control point.
    assert!(r.max.y < 4.0);
    assert!(r.max.y >= 3.0);
}

#[test]
fn empty_bounding_box() {
    let path = crate::path::Path::new();
    assert_eq!(bounding_box(&path), Box2D::zero());
}
