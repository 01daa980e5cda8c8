//! Fitting a view box into a surface.

use crate::math::{Box2D, Size, Transform};

/// Maps a view box of the given size, with its origin at zero, into `dst`: scaled
/// uniformly as much as possible without overflowing and centered, like the CSS
/// `object-fit: contain`.
///
/// An empty view box is only moved to the center of `dst`.
pub fn contain(view_box: Size, dst: &Box2D) -> Transform {
    let scale = if view_box.width > 0.0 && view_box.height > 0.0 {
        f32::min(dst.width() / view_box.width, dst.height() / view_box.height)
    } else {
        1.0
    };

    let center = dst.center();
    Transform::scale(scale, scale).then_translate(
        center.to_vector() - view_box.to_vector() * (scale * 0.5),
    )
}

#[cfg(test)]
use crate::math::{point, size};

#[test]
fn square_in_landscape_surface() {
    // A square view box in a wide surface is letterboxed horizontally.
    let t = contain(size(100.0, 100.0), &Box2D::new(point(0.0, 0.0), point(800.0, 400.0)));

    assert_eq!(t.transform_point(point(0.0, 0.0)), point(200.0, 0.0));
    assert_eq!(t.transform_point(point(100.0, 100.0)), point(600.0, 400.0));
    assert_eq!(t.transform_point(point(50.0, 50.0)), point(400.0, 200.0));
}

#[test]
fn wide_view_box_in_portrait_surface() {
    let t = contain(size(200.0, 100.0), &Box2D::new(point(10.0, 10.0), point(110.0, 310.0)));

    assert_eq!(t.transform_point(point(0.0, 0.0)), point(10.0, 135.0));
    assert_eq!(t.transform_point(point(200.0, 100.0)), point(110.0, 185.0));
}

#[test]
fn empty_view_box_is_centered() {
    let t = contain(size(0.0, 0.0), &Box2D::new(point(0.0, 0.0), point(10.0, 10.0)));
    assert_eq!(t.transform_point(point(0.0, 0.0)), point(5.0, 5.0));
}
