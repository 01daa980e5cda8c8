//! Frames: a background and plants scattered inside a silhouette.
//!
//! Candidate positions are drawn uniformly in the silhouette's view box and the ones
//! that fall inside the silhouette become plant origins. The view box is fitted into
//! the surface ("contain"), so the garden keeps its proportions and stays centered.

use flora_algorithms::fit::contain;
use flora_algorithms::scatter::{scatter_in_path, ScatterOptions};
use flora_extra::logo::{build_monogram_path, MONOGRAM_VIEW_BOX};
use flora_extra::parser::ParseError;

use crate::error::ConfigError;
use crate::math::{point, Box2D, Point, Size};
use crate::palette::Palette;
use crate::params::PlantParameters;
use crate::path::{Path, Surface};
use crate::plant::Plant;
use crate::resolve::Resolver;

use rand::Rng;

/// Paints the whole surface with the background color of the palette.
pub fn clear_background<S: Surface + ?Sized>(surface: &mut S, palette: &Palette) {
    surface.clear(palette.background);
}

/// Where a single plant is shown on its own: centered, a quarter of the height above
/// the bottom edge.
pub fn single_plant_origin(surface_size: Size) -> Point {
    point(
        surface_size.width * 0.5,
        surface_size.height - surface_size.height * 0.25,
    )
}

/// Clears the surface and draws one plant.
pub fn draw_single_plant<S, R>(
    surface: &mut S,
    surface_size: Size,
    params: &PlantParameters,
    palette: &Palette,
    resolver: &mut R,
) -> Result<(), ConfigError>
where
    S: Surface + ?Sized,
    R: Resolver + ?Sized,
{
    let plant = Plant::build(
        params,
        single_plant_origin(surface_size),
        surface_size.height,
        resolver,
    )?;

    clear_background(surface, palette);
    plant.draw(surface, palette);

    Ok(())
}

/// A silhouette plants are scattered into.
#[derive(Clone, Debug, PartialEq)]
pub struct Garden {
    silhouette: Path,
    view_box: Size,
}

impl Garden {
    /// `silhouette` is expressed in a view box of the given size, with its origin at zero.
    pub fn new(silhouette: Path, view_box: Size) -> Self {
        Garden {
            silhouette,
            view_box,
        }
    }

    /// The built-in monogram.
    pub fn monogram() -> Result<Self, ParseError> {
        Ok(Garden::new(build_monogram_path()?, MONOGRAM_VIEW_BOX))
    }

    pub fn silhouette(&self) -> &Path {
        &self.silhouette
    }

    pub fn view_box(&self) -> Size {
        self.view_box
    }

    /// Draws `candidates` random positions and returns the ones inside the silhouette,
    /// in surface coordinates.
    pub fn origins<R: Rng + ?Sized>(
        &self,
        surface_size: Size,
        candidates: u32,
        rng: &mut R,
    ) -> Vec<Point> {
        let area = Box2D {
            min: point(0.0, 0.0),
            max: point(self.view_box.width, self.view_box.height),
        };
        let accepted = scatter_in_path(
            &self.silhouette,
            &area,
            &ScatterOptions::new(candidates as usize),
            rng,
        );

        let transform = contain(
            self.view_box,
            &Box2D {
                min: point(0.0, 0.0),
                max: point(surface_size.width, surface_size.height),
            },
        );

        log::debug!(
            "{} of {} candidates inside the silhouette",
            accepted.len(),
            candidates
        );

        accepted
            .into_iter()
            .map(|p| transform.transform_point(p))
            .collect()
    }

    /// Clears the surface and draws a plant at every origin found in the silhouette.
    ///
    /// The candidate count comes from `params.count`. Returns the number of plants.
    pub fn draw<S, Rs, R>(
        &self,
        surface: &mut S,
        surface_size: Size,
        params: &PlantParameters,
        palette: &Palette,
        resolver: &mut Rs,
        rng: &mut R,
    ) -> Result<usize, ConfigError>
    where
        S: Surface + ?Sized,
        Rs: Resolver + ?Sized,
        R: Rng + ?Sized,
    {
        params.validate()?;

        let origins = self.origins(surface_size, params.count, rng);

        clear_background(surface, palette);
        for origin in &origins {
            let plant = Plant::build(params, *origin, surface_size.height, resolver)?;
            plant.draw(surface, palette);
        }

        Ok(origins.len())
    }
}

#[cfg(test)]
use crate::math::size;
#[cfg(test)]
use crate::path::{Instruction, Recording};
#[cfg(test)]
use crate::resolve::{Fixed, Randomized};
#[cfg(test)]
use rand::{rngs::StdRng, SeedableRng};

#[test]
fn single_plant_frame() {
    let palette = Palette::default();
    let params = PlantParameters::default();
    let mut surface = Recording::new();

    draw_single_plant(
        &mut surface,
        size(800.0, 400.0),
        &params,
        &palette,
        &mut Fixed,
    )
    .unwrap();

    let instructions = surface.instructions();
    assert_eq!(instructions[0], Instruction::Clear(palette.background));
    assert!(instructions.contains(&Instruction::MoveTo(point(400.0, 300.0))));
}

#[test]
fn origins_are_inside_the_fitted_monogram() {
    use flora_algorithms::hit_test::hit_test_path;

    let garden = Garden::monogram().unwrap();
    let surface_size = size(800.0, 400.0);
    let mut rng = StdRng::seed_from_u64(5);

    let origins = garden.origins(surface_size, 500, &mut rng);
    assert!(!origins.is_empty());
    assert!(origins.len() < 500);

    // The 100x100 view box becomes 400x400, centered horizontally.
    let inverse = contain(
        garden.view_box(),
        &Box2D {
            min: point(0.0, 0.0),
            max: point(800.0, 400.0),
        },
    )
    .inverse()
    .unwrap();

    for origin in &origins {
        assert!(origin.x >= 200.0 && origin.x <= 600.0);
        assert!(origin.y >= 0.0 && origin.y <= 400.0);
        let p = inverse.transform_point(*origin);
        assert!(hit_test_path(
            &p,
            garden.silhouette(),
            crate::path::FillRule::NonZero,
            0.01
        ));
    }
}

#[test]
fn garden_frame() {
    let _ = env_logger::builder().is_test(true).try_init();

    let garden = Garden::monogram().unwrap();
    let palette = Palette::default();
    let mut params = PlantParameters::default();
    params.count = 50;

    let mut surface = Recording::new();
    let mut resolver = Randomized::new(StdRng::seed_from_u64(1));
    let mut rng = StdRng::seed_from_u64(2);

    let plants = garden
        .draw(
            &mut surface,
            size(300.0, 300.0),
            &params,
            &palette,
            &mut resolver,
            &mut rng,
        )
        .unwrap();

    assert!(plants > 0);
    assert_eq!(
        surface.instructions()[0],
        Instruction::Clear(palette.background)
    );
    let stems = surface
        .instructions()
        .iter()
        .filter(|i| **i == Instruction::SetStrokeStyle(palette.stem))
        .count();
    assert!(stems >= plants);
}

#[test]
fn invalid_garden_parameters() {
    let garden = Garden::monogram().unwrap();
    let mut params = PlantParameters::default();
    params.size = 500.0;

    let mut surface = Recording::new();
    let result = garden.draw(
        &mut surface,
        size(100.0, 100.0),
        &params,
        &Palette::default(),
        &mut Fixed,
        &mut StdRng::seed_from_u64(0),
    );

    assert_eq!(result, Err(ConfigError::InvalidPlantSize(500.0)));
    // Nothing is drawn when the parameters are rejected.
    assert!(surface.is_empty());
}
