//! Turning parameters into a concrete plant.
//!
//! Deterministic and randomized plants only differ in how the stem and the flower
//! are chosen. Both go through a [`Resolver`] so that everything downstream (node
//! distribution, drawing) is shared.

use crate::error::ConfigError;
use crate::flower::{random_flower, FlowerSpec};
use crate::math::Point;
use crate::nodes::{avoid_flower, place_nodes, Distribution, NodeLayout, NodePlacement};
use crate::params::PlantParameters;
use crate::stem::{random_stem, stem_from_offsets, Stem};

use rand::Rng;

/// Everything needed to draw one plant.
#[derive(Clone, Debug, PartialEq)]
pub struct ResolvedPlant {
    pub stem: Stem,
    /// Plant height in surface units.
    pub height: f32,
    /// In ascending progress order.
    pub nodes: Vec<NodePlacement>,
    pub flower: Option<FlowerSpec>,
}

/// A strategy producing concrete plants from parameters.
pub trait Resolver {
    /// Resolves a plant growing from `origin`, `height` units tall.
    ///
    /// Fails if the parameters do not validate.
    fn resolve(
        &mut self,
        params: &PlantParameters,
        origin: Point,
        height: f32,
    ) -> Result<ResolvedPlant, ConfigError>;
}

impl<'l, R: Resolver + ?Sized> Resolver for &'l mut R {
    fn resolve(
        &mut self,
        params: &PlantParameters,
        origin: Point,
        height: f32,
    ) -> Result<ResolvedPlant, ConfigError> {
        (**self).resolve(params, origin, height)
    }
}

/// Takes every value from the parameters.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct Fixed;

impl Resolver for Fixed {
    fn resolve(
        &mut self,
        params: &PlantParameters,
        origin: Point,
        height: f32,
    ) -> Result<ResolvedPlant, ConfigError> {
        params.validate()?;

        let stem = stem_from_offsets(origin, height, params.stem.bend, params.stem.curve);
        let flower = params.flower.as_ref().map(FlowerSpec::from);

        Ok(assemble(params, stem, height, flower))
    }
}

/// Draws the stem and the flower at random, takes the nodes from the parameters.
#[derive(Clone, Debug)]
pub struct Randomized<R> {
    rng: R,
}

impl<R: Rng> Randomized<R> {
    pub fn new(rng: R) -> Self {
        Randomized { rng }
    }

    pub fn rng(&mut self) -> &mut R {
        &mut self.rng
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> Resolver for Randomized<R> {
    fn resolve(
        &mut self,
        params: &PlantParameters,
        origin: Point,
        height: f32,
    ) -> Result<ResolvedPlant, ConfigError> {
        params.validate()?;

        let stem = random_stem(origin, height, &mut self.rng);
        let flower = random_flower(&mut self.rng);

        Ok(assemble(params, stem, height, flower))
    }
}

fn assemble(
    params: &PlantParameters,
    stem: Stem,
    height: f32,
    flower: Option<FlowerSpec>,
) -> ResolvedPlant {
    let nodes = &params.nodes;

    let progress_to = match &flower {
        Some(flower) => avoid_flower(nodes.progress_from, nodes.progress_to, flower.petal_size),
        None => nodes.progress_to,
    };

    // The taper midpoint is placed within the shortened range.
    let layout = NodeLayout {
        kind: nodes.kind,
        distribution: Distribution {
            count: nodes.count,
            progress_from: nodes.progress_from,
            progress_to,
            size_mod_pos: nodes.size_mod_pos,
            ease: nodes.size_ease,
        },
        root_size: nodes.size * height,
        angle: nodes.angle,
        leaf_thickness: params.leaves.thickness,
        leaf_shape: params.leaves.shape,
    };

    ResolvedPlant {
        stem,
        height,
        nodes: place_nodes(&layout),
        flower,
    }
}

#[cfg(test)]
use crate::math::point;

#[test]
fn fixed_is_deterministic() {
    let params = PlantParameters::default();
    let a = Fixed.resolve(&params, point(10.0, 200.0), 100.0).unwrap();
    let b = Fixed.resolve(&params, point(10.0, 200.0), 100.0).unwrap();
    assert_eq!(a, b);

    assert_eq!(a.stem.from, point(10.0, 200.0));
    assert_eq!(a.stem.to, point(10.0, 100.0));
    assert_eq!(a.flower, Some(FlowerSpec::from(&params.flower.unwrap())));
    // Five segments, six positions, mirrored.
    assert_eq!(a.nodes.len(), 12);
    // The flower pushes the last nodes down to 1 - 0.16 * 1.5.
    let last = a.nodes[11].progress();
    assert!((last - 0.76).abs() < 1e-5, "{}", last);
}

#[test]
fn without_flower_nodes_reach_the_tip() {
    let mut params = PlantParameters::default();
    params.flower = None;
    params.nodes.count = 4;
    let plant = Fixed.resolve(&params, point(0.0, 0.0), 100.0).unwrap();
    assert_eq!(plant.nodes.last().map(|n| n.progress()), Some(1.0));
    // The middle position gets full size nodes, a quarter of the plant height.
    let largest = plant.nodes.iter().map(|n| n.size()).fold(0.0, f32::max);
    assert_eq!(largest, 25.0);
}

#[test]
fn taper_peaks_within_the_range_left_by_the_flower() {
    let mut params = PlantParameters::default();
    params.nodes.count = 4;
    let plant = Fixed.resolve(&params, point(0.0, 0.0), 100.0).unwrap();

    // Petals of size 0.16 end the range at 0.76, the peak is half way to it.
    assert_eq!(plant.nodes.len(), 10);
    assert!((plant.nodes[4].progress() - 0.38).abs() < 1e-5);
    assert_eq!(plant.nodes[4].size(), 25.0);
    assert_eq!(plant.nodes[5].size(), 25.0);
    assert!(plant.nodes[9].size() < 25.0);
}

#[test]
fn invalid_parameters_fail() {
    let mut params = PlantParameters::default();
    params.nodes.progress_from = 0.9;
    params.nodes.progress_to = 0.1;

    assert!(Fixed.resolve(&params, point(0.0, 0.0), 100.0).is_err());

    use rand::rngs::StdRng;
    use rand::SeedableRng;
    let mut randomized = Randomized::new(StdRng::seed_from_u64(0));
    assert_eq!(
        randomized.resolve(&params, point(0.0, 0.0), 100.0),
        Err(ConfigError::InvertedProgressRange { from: 0.9, to: 0.1 })
    );
}

#[test]
fn randomized_with_a_seed() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let params = PlantParameters::default();
    let mut a = Randomized::new(StdRng::seed_from_u64(42));
    let mut b = Randomized::new(StdRng::seed_from_u64(42));

    let mut flowers = 0;
    for _ in 0..50 {
        let pa = a.resolve(&params, point(0.0, 0.0), 100.0).unwrap();
        let pb = b.resolve(&params, point(0.0, 0.0), 100.0).unwrap();
        assert_eq!(pa, pb);

        assert_eq!(pa.stem.to.y, -100.0);
        assert!(pa.stem.to.x.abs() <= 50.0);

        match pa.flower {
            Some(flower) => {
                flowers += 1;
                let bound = 1.0 - flower.petal_size * 1.5;
                assert!(pa.nodes.iter().all(|n| n.progress() <= bound + 1e-5));
            }
            None => {
                assert_eq!(pa.nodes.last().map(|n| n.progress()), Some(1.0));
            }
        }
    }

    assert!(flowers > 0 && flowers < 50);
}
