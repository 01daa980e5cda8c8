//! Random points inside a path.
//!
//! Candidates are drawn uniformly in a rectangle and only the ones that pass the
//! hit test are kept (rejection sampling). The number of accepted points is
//! therefore proportional to the area covered by the path.

use crate::hit_test::hit_test_path;
use crate::math::{point, Box2D, Point};
use crate::path::{FillRule, Path};

use rand::Rng;

/// Parameters of a scatter pass.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ScatterOptions {
    /// Number of candidates, not the number of accepted points.
    pub candidates: usize,
    pub fill_rule: FillRule,
    /// Maximum distance between curves and their flattened approximation during hit tests.
    pub tolerance: f32,
}

impl ScatterOptions {
    pub const DEFAULT_TOLERANCE: f32 = 0.01;

    pub fn new(candidates: usize) -> Self {
        ScatterOptions {
            candidates,
            fill_rule: FillRule::NonZero,
            tolerance: Self::DEFAULT_TOLERANCE,
        }
    }
}

impl Default for ScatterOptions {
    fn default() -> Self {
        ScatterOptions::new(0)
    }
}

/// Draws a point uniformly in a rectangle. Empty rectangles yield their `min` corner.
pub fn random_point_in<R: Rng + ?Sized>(area: &Box2D, rng: &mut R) -> Point {
    let w = area.width().max(0.0);
    let h = area.height().max(0.0);
    point(
        area.min.x + rng.random::<f32>() * w,
        area.min.y + rng.random::<f32>() * h,
    )
}

/// Returns the candidates drawn in `area` that fall inside `path`, in drawing order.
pub fn scatter_in_path<R: Rng + ?Sized>(
    path: &Path,
    area: &Box2D,
    options: &ScatterOptions,
    rng: &mut R,
) -> Vec<Point> {
    let mut points = Vec::new();
    for _ in 0..options.candidates {
        let candidate = random_point_in(area, rng);
        if hit_test_path(&candidate, path, options.fill_rule, options.tolerance) {
            points.push(candidate);
        }
    }

    points
}

#[cfg(test)]
fn square(min: f32, max: f32) -> Path {
    let mut builder = Path::builder();
    builder.begin(point(min, min));
    builder.line_to(point(max, min));
    builder.line_to(point(max, max));
    builder.line_to(point(min, max));
    builder.close();
    builder.build()
}

#[test]
fn points_are_inside() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let path = square(25.0, 75.0);
    let area = Box2D {
        min: point(0.0, 0.0),
        max: point(100.0, 100.0),
    };
    let mut rng = StdRng::seed_from_u64(7);

    let points = scatter_in_path(&path, &area, &ScatterOptions::new(2000), &mut rng);

    for p in &points {
        assert!(p.x >= 25.0 && p.x <= 75.0);
        assert!(p.y >= 25.0 && p.y <= 75.0);
    }

    // The square covers a quarter of the area.
    assert!(points.len() > 400 && points.len() < 600, "{}", points.len());
}

#[test]
fn same_seed_same_points() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let path = square(0.0, 50.0);
    let area = Box2D {
        min: point(0.0, 0.0),
        max: point(100.0, 100.0),
    };
    let options = ScatterOptions::new(100);

    let a = scatter_in_path(&path, &area, &options, &mut StdRng::seed_from_u64(1));
    let b = scatter_in_path(&path, &area, &options, &mut StdRng::seed_from_u64(1));
    assert_eq!(a, b);
}

#[test]
fn no_candidates() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let path = square(0.0, 1.0);
    let area = Box2D {
        min: point(0.0, 0.0),
        max: point(1.0, 1.0),
    };
    let points = scatter_in_path(
        &path,
        &area,
        &ScatterOptions::default(),
        &mut StdRng::seed_from_u64(0),
    );
    assert!(points.is_empty());
}

#[test]
fn empty_area() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let area = Box2D {
        min: point(3.0, 4.0),
        max: point(3.0, 4.0),
    };
    let p = random_point_in(&area, &mut StdRng::seed_from_u64(0));
    assert_eq!(p, point(3.0, 4.0));
}
