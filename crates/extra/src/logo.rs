//! The monogram silhouette that plants are scattered into.

use crate::math::Size;
use crate::parser::{parse_svg_path, ParseError};
use crate::path::Path;

/// Path data of the monogram, in a `MONOGRAM_VIEW_BOX` coordinate space.
pub const MONOGRAM_PATH: &str = "M88 37.8 69.075 26.5V4L12 37.8v45L31.025 94 50.05 82.8 31.025 71.5V49L50.05 60.3 69.075 49v22.5L50.05 82.8 69.075 94 88 82.8V47.71z";

/// Size of the view box the monogram is defined in. Its origin is at zero.
pub const MONOGRAM_VIEW_BOX: Size = Size::new(100.0, 100.0);

pub fn build_monogram_path() -> Result<Path, ParseError> {
    parse_svg_path(MONOGRAM_PATH)
}

#[cfg(test)]
use crate::math::point;
#[cfg(test)]
use crate::path::PathEvent;

#[test]
fn monogram_is_a_single_closed_polygon() {
    let path = build_monogram_path().unwrap();
    let events: Vec<PathEvent> = path.iter().collect();

    assert_eq!(events.len(), 17);
    assert_eq!(
        events[0],
        PathEvent::Begin {
            at: point(88.0, 37.8)
        }
    );
    assert!(events[1..16].iter().all(|e| matches!(e, PathEvent::Line { .. })));
    assert_eq!(
        events[16],
        PathEvent::End {
            last: point(88.0, 47.71),
            first: point(88.0, 37.8),
            close: true
        }
    );
}

#[test]
fn monogram_fits_its_view_box() {
    use flora_algorithms::aabb::bounding_box;

    let path = build_monogram_path().unwrap();
    let aabb = bounding_box(&path);

    assert_eq!(aabb.min, point(12.0, 4.0));
    assert_eq!(aabb.max, point(88.0, 94.0));
    assert!(aabb.max.x <= MONOGRAM_VIEW_BOX.width);
    assert!(aabb.max.y <= MONOGRAM_VIEW_BOX.height);
}

#[test]
fn monogram_has_a_notch() {
    use crate::path::FillRule;
    use flora_algorithms::hit_test::hit_test_path;

    let path = build_monogram_path().unwrap();
    let inside = |x: f32, y: f32| hit_test_path(&point(x, y), &path, FillRule::NonZero, 0.01);

    assert!(inside(20.0, 60.0));
    assert!(inside(50.0, 40.0));
    assert!(!inside(50.0, 75.0));
    assert!(!inside(5.0, 50.0));
    assert!(!inside(95.0, 50.0));
}
