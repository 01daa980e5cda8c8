//! Assembling and drawing a whole plant.

use crate::compose::{draw_flower, draw_node, draw_stem};
use crate::error::ConfigError;
use crate::math::Point;
use crate::palette::Palette;
use crate::params::PlantParameters;
use crate::path::Surface;
use crate::resolve::{ResolvedPlant, Resolver};
use crate::stem::{sample, ParametricSample};

/// Height of a plant on a surface, from its size in percent of the surface height.
pub fn plant_height(surface_height: f32, size_percent: f32) -> f32 {
    surface_height * size_percent / 100.0
}

/// A resolved plant, ready to be drawn any number of times.
#[derive(Clone, Debug, PartialEq)]
pub struct Plant {
    resolved: ResolvedPlant,
}

impl Plant {
    pub fn new(resolved: ResolvedPlant) -> Self {
        Plant { resolved }
    }

    /// Resolves a plant growing from `origin` on a surface of the given height.
    pub fn build<R: Resolver + ?Sized>(
        params: &PlantParameters,
        origin: Point,
        surface_height: f32,
        resolver: &mut R,
    ) -> Result<Self, ConfigError> {
        let height = plant_height(surface_height, params.size);
        let resolved = resolver.resolve(params, origin, height)?;

        log::debug!(
            "Plant at {:?}: height {}, {} nodes, flower: {}",
            origin,
            height,
            resolved.nodes.len(),
            resolved.flower.is_some()
        );

        Ok(Plant { resolved })
    }

    pub fn resolved(&self) -> &ResolvedPlant {
        &self.resolved
    }

    pub fn into_resolved(self) -> ResolvedPlant {
        self.resolved
    }

    /// Stem samples at every node, in node order.
    pub fn node_samples(&self) -> Vec<ParametricSample> {
        self.resolved
            .nodes
            .iter()
            .map(|node| sample(&self.resolved.stem, node.progress()))
            .collect()
    }

    /// Draws the stem, then the nodes, then the flower on top.
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S, palette: &Palette) {
        let plant = &self.resolved;

        surface.save();

        draw_stem(surface, &plant.stem, palette);

        for node in &plant.nodes {
            draw_node(surface, &plant.stem, node, palette);
        }

        if let Some(flower) = &plant.flower {
            draw_flower(
                surface,
                plant.stem.to,
                flower.angle,
                flower.petal_count,
                flower.petal_length(plant.height),
                flower.pistil_ratio,
                palette,
            );
        }

        surface.restore();
    }
}

#[cfg(test)]
use crate::math::point;
#[cfg(test)]
use crate::path::{Instruction, Recording, ShapeCollector, Style};
#[cfg(test)]
use crate::resolve::Fixed;

#[cfg(test)]
fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn single_node_full_size() {
    init_logger();

    let mut params = PlantParameters::default();
    params.size = 50.0;
    params.flower = None;
    params.nodes.count = 1;
    params.nodes.progress_from = 1.0;
    params.nodes.progress_to = 1.0;

    let plant = Plant::build(&params, point(0.0, 0.0), 200.0, &mut Fixed).unwrap();
    let resolved = plant.resolved();

    assert_eq!(resolved.height, 100.0);
    assert_eq!(resolved.stem.to, point(0.0, -100.0));
    assert_eq!(resolved.stem.ctrl, point(0.0, -50.0));
    assert_eq!(resolved.nodes.len(), 2);
    for node in &resolved.nodes {
        assert_eq!(node.progress(), 1.0);
        assert_eq!(node.size(), 25.0);
    }
    for s in plant.node_samples() {
        assert_eq!(s.position, point(0.0, -100.0));
    }
}

#[test]
fn draw_order() {
    init_logger();

    let palette = Palette::default();
    let params = PlantParameters::default();
    let plant = Plant::build(&params, point(300.0, 500.0), 1000.0, &mut Fixed).unwrap();

    let mut surface = ShapeCollector::new();
    plant.draw(&mut surface, &palette);
    let shapes = surface.shapes();

    // Stem, 12 branches, 9 petals and the pistil.
    assert_eq!(shapes.len(), 1 + 12 + 9 + 1);
    assert_eq!(
        shapes[0].style,
        Style::Stroke {
            color: palette.stem,
            width: 1.0
        }
    );
    assert!(shapes[1..13]
        .iter()
        .all(|s| matches!(s.style, Style::Stroke { color, .. } if color == palette.stem)));
    assert!(shapes[13..22]
        .iter()
        .all(|s| s.style == Style::Fill(palette.petal)));
    assert_eq!(shapes[22].style, Style::Fill(palette.pistil));

    // Petals start at the tip of the stem.
    assert_eq!(
        shapes[13].path.first_endpoint(),
        Some(plant.resolved().stem.to)
    );
    assert_eq!(surface.depth(), 0);
}

#[test]
fn leaves_and_berries() {
    use crate::nodes::NodeKind;

    init_logger();

    let palette = Palette::default();
    let mut params = PlantParameters::default();
    params.flower = None;

    params.nodes.kind = NodeKind::Leaf;
    let plant = Plant::build(&params, point(0.0, 0.0), 100.0, &mut Fixed).unwrap();
    let mut surface = Recording::new();
    plant.draw(&mut surface, &palette);
    // The stem stroke and one fill per leaf.
    assert_eq!(surface.paint_count(), 1 + 12);

    params.nodes.kind = NodeKind::Berry;
    let plant = Plant::build(&params, point(0.0, 0.0), 100.0, &mut Fixed).unwrap();
    let mut surface = Recording::new();
    plant.draw(&mut surface, &palette);
    // The stem stroke, then a fill and a stroke per berry.
    assert_eq!(surface.paint_count(), 1 + 6 * 2);
    assert_eq!(
        surface
            .instructions()
            .iter()
            .filter(|i| matches!(i, Instruction::Arc(..)))
            .count(),
        6
    );
}

#[test]
fn zero_size_plant_draws_only_degenerate_stem() {
    init_logger();

    let mut params = PlantParameters::default();
    params.size = 0.0;
    let plant = Plant::build(&params, point(5.0, 5.0), 100.0, &mut Fixed).unwrap();

    let mut surface = Recording::new();
    plant.draw(&mut surface, &Palette::default());

    assert_eq!(surface.paint_count(), 1);
    for s in plant.node_samples() {
        assert!(!s.normal_angle.is_nan());
    }
}
