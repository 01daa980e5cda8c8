//! Flower heads.

use std::f32::consts::PI;

use crate::params::FlowerParameters;

use rand::Rng;

/// Probability for a randomized plant to have no flower.
pub const NO_FLOWER_CHANCE: f32 = 0.5;

pub const MIN_PETAL_COUNT: u32 = 5;
pub const MAX_PETAL_COUNT: u32 = 11;
pub const MIN_PETAL_SIZE: f32 = 0.1;
pub const MAX_PETAL_SIZE: f32 = 0.15;
pub const MIN_PISTIL_RATIO: f32 = 0.12;
pub const MAX_PISTIL_RATIO: f32 = 0.32;

/// A flower head at the tip of the stem.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct FlowerSpec {
    /// Rotation of the whole head, in radians.
    pub angle: f32,
    pub petal_count: u32,
    /// Petal length relative to the plant height.
    pub petal_size: f32,
    /// Pistil radius relative to the petal length.
    pub pistil_ratio: f32,
}

impl FlowerSpec {
    /// Petal length in surface units.
    pub fn petal_length(&self, plant_height: f32) -> f32 {
        plant_height * self.petal_size
    }
}

impl From<&FlowerParameters> for FlowerSpec {
    fn from(params: &FlowerParameters) -> Self {
        FlowerSpec {
            angle: params.angle,
            petal_count: params.petals.count,
            petal_size: params.petals.size,
            pistil_ratio: params.petals.shape,
        }
    }
}

/// Draws a flower head, or no flower at all half of the time.
pub fn random_flower<R: Rng + ?Sized>(rng: &mut R) -> Option<FlowerSpec> {
    if rng.random::<f32>() < NO_FLOWER_CHANCE {
        return None;
    }

    Some(FlowerSpec {
        angle: rng.random::<f32>() * PI,
        petal_count: rng.random_range(MIN_PETAL_COUNT..=MAX_PETAL_COUNT),
        petal_size: rng.random_range(MIN_PETAL_SIZE..MAX_PETAL_SIZE),
        pistil_ratio: rng.random_range(MIN_PISTIL_RATIO..MAX_PISTIL_RATIO),
    })
}

#[test]
fn from_parameters() {
    let spec = FlowerSpec::from(&FlowerParameters::default());
    assert_eq!(spec.petal_count, 9);
    assert_eq!(spec.petal_size, 0.16);
    assert_eq!(spec.pistil_ratio, 0.21);
    assert_eq!(spec.angle, 0.0);
    assert!((spec.petal_length(100.0) - 16.0).abs() < 1e-5);
}

#[test]
fn random_flowers() {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    let mut rng = StdRng::seed_from_u64(11);
    let mut with_flower = 0;
    for _ in 0..1000 {
        if let Some(flower) = random_flower(&mut rng) {
            with_flower += 1;
            assert!(flower.angle >= 0.0 && flower.angle <= PI);
            assert!(flower.petal_count >= 5 && flower.petal_count <= 11);
            assert!(flower.petal_size >= 0.1 && flower.petal_size < 0.15);
            assert!(flower.pistil_ratio >= 0.12 && flower.pistil_ratio < 0.32);
        }
    }

    assert!(with_flower > 400 && with_flower < 600, "{}", with_flower);
}
