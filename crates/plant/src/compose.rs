//! Drawing routines for each part of a plant.
//!
//! Every shape is described in a local frame: the surface is translated to the
//! shape's anchor and rotated to its orientation, the outline is built around the
//! origin, then the transform is restored. Shapes of zero or negative size draw
//! nothing.

use std::f32::consts::PI;

use crate::geom::utils::rotate;
use crate::math::{point, vector, Angle, Point};
use crate::nodes::{berry_center, NodePlacement, Side};
use crate::palette::Palette;
use crate::path::Surface;
use crate::stem::{sample, Stem};

/// Strokes the stem curve.
pub fn draw_stem<S: Surface + ?Sized>(surface: &mut S, stem: &Stem, palette: &Palette) {
    surface.set_stroke_style(palette.stem);
    surface.begin_path();
    surface.move_to(stem.from);
    surface.quadratic_curve_to(stem.ctrl, stem.to);
    surface.stroke();
}

/// A single curve bending away from the stem towards `(±size, -size)` in the local frame,
/// `+` on the right side.
pub fn draw_branch<S: Surface + ?Sized>(
    surface: &mut S,
    position: Point,
    angle: f32,
    size: f32,
    side: Side,
    palette: &Palette,
) {
    if size.is_nan() || size <= 0.0 {
        return;
    }

    let x = match side {
        Side::Right => size,
        Side::Left => -size,
    };

    surface.save();
    surface.set_stroke_style(palette.stem);
    surface.set_fill_style(palette.stem);
    surface.translate(position.to_vector());
    surface.rotate(Angle::radians(angle));

    surface.begin_path();
    surface.move_to(point(0.0, 0.0));
    surface.quadratic_curve_to(point(x, 0.0), point(x, -size));
    surface.stroke();

    surface.restore();
}

/// A lens from the local origin to `(size, 0)` and back.
///
/// `shape` places the widest part along the leaf and `thickness` is its width.
pub fn draw_leaf<S: Surface + ?Sized>(
    surface: &mut S,
    position: Point,
    angle: f32,
    size: f32,
    shape: f32,
    thickness: f32,
    palette: &Palette,
) {
    if size.is_nan() || size <= 0.0 {
        return;
    }

    let half_thickness = thickness * 0.5;

    surface.save();
    surface.set_stroke_style(palette.stem);
    surface.set_fill_style(palette.stem);
    surface.translate(position.to_vector());
    surface.rotate(Angle::radians(angle));

    surface.begin_path();
    surface.move_to(point(0.0, 0.0));
    surface.quadratic_curve_to(point(size * shape, half_thickness), point(size, 0.0));
    surface.quadratic_curve_to(point(size * shape, -half_thickness), point(0.0, 0.0));
    surface.fill();

    surface.restore();
}

/// A filled disc with an outline.
pub fn draw_berry<S: Surface + ?Sized>(
    surface: &mut S,
    center: Point,
    radius: f32,
    line_width: f32,
    palette: &Palette,
) {
    if radius.is_nan() || radius <= 0.0 {
        return;
    }

    surface.save();
    surface.translate(center.to_vector());

    surface.begin_path();
    surface.arc(point(0.0, 0.0), radius, 0.0, 2.0 * PI);
    surface.set_fill_style(palette.berry);
    surface.fill();
    surface.set_line_width(line_width);
    surface.set_stroke_style(palette.stem);
    surface.stroke();

    surface.restore();
}

/// Petals fanned around the center, with the pistil on top.
///
/// `size` is the petal length and the pistil radius is `size * pistil_ratio`. Each
/// petal spans `2π / petal_count`: it leaves the center, reaches the pistil edge, bulges
/// out to its tip at distance `size` and comes back.
pub fn draw_flower<S: Surface + ?Sized>(
    surface: &mut S,
    position: Point,
    angle: f32,
    petal_count: u32,
    size: f32,
    pistil_ratio: f32,
    palette: &Palette,
) {
    if petal_count == 0 || size.is_nan() || size <= 0.0 {
        return;
    }

    let increment = 2.0 * PI / petal_count as f32;
    let base = size * pistil_ratio;

    surface.save();
    surface.translate(position.to_vector());
    surface.rotate(Angle::radians(angle));
    surface.set_fill_style(palette.petal);

    for i in 0..petal_count {
        let a = i as f32 * increment;

        let base_a = rotate(vector(-base, 0.0), a).to_point();
        let base_b = rotate(vector(-base, 0.0), a + increment).to_point();
        let ctrl_a = rotate(vector(-size, 0.0), a).to_point();
        let ctrl_b = rotate(vector(-size, 0.0), a + increment).to_point();
        let tip = rotate(vector(-size, 0.0), a + increment * 0.5).to_point();

        surface.begin_path();
        surface.move_to(point(0.0, 0.0));
        surface.line_to(base_a);
        surface.quadratic_curve_to(ctrl_a, tip);
        surface.quadratic_curve_to(ctrl_b, base_b);
        surface.line_to(point(0.0, 0.0));
        surface.fill();
    }

    if base > 0.0 {
        surface.set_fill_style(palette.pistil);
        surface.begin_path();
        surface.arc(point(0.0, 0.0), base, 0.0, 2.0 * PI);
        surface.fill();
    }

    surface.restore();
}

/// Draws a node at its position along the stem.
pub fn draw_node<S: Surface + ?Sized>(
    surface: &mut S,
    stem: &Stem,
    node: &NodePlacement,
    palette: &Palette,
) {
    let at = sample(stem, node.progress());
    let angle = node.orientation(&at);

    match node {
        NodePlacement::Branch(branch) => {
            draw_branch(surface, at.position, angle, branch.size, branch.side, palette);
        }
        NodePlacement::Leaf(leaf) => {
            draw_leaf(
                surface,
                at.position,
                angle,
                leaf.size,
                leaf.shape,
                leaf.thickness,
                palette,
            );
        }
        NodePlacement::Berry(berry) => {
            let center = berry_center(berry, &at);
            draw_berry(surface, center, berry.size, berry.line_width, palette);
        }
    }
}

#[cfg(test)]
use crate::path::{Instruction, Recording};

#[cfg(test)]
fn count(surface: &Recording, f: impl Fn(&Instruction) -> bool) -> usize {
    surface.instructions().iter().filter(|i| f(i)).count()
}

#[test]
fn flower_head() {
    let palette = Palette::default();
    let mut surface = Recording::new();

    draw_flower(&mut surface, point(0.0, 0.0), 0.0, 6, 10.0, 0.5, &palette);

    let fills = count(&surface, |i| *i == Instruction::Fill);
    assert_eq!(fills, 7);

    let arcs: Vec<_> = surface
        .instructions()
        .iter()
        .filter_map(|i| match i {
            Instruction::Arc(arc) => Some(*arc),
            _ => None,
        })
        .collect();
    assert_eq!(arcs.len(), 1);
    assert_eq!(arcs[0].radius, 5.0);
    assert_eq!(arcs[0].sweep_angle, 2.0 * PI);

    // The tips are evenly spread, a sixth of a turn apart.
    let tips: Vec<Point> = surface
        .instructions()
        .iter()
        .filter_map(|i| match i {
            Instruction::QuadraticCurveTo { to, .. } => Some(*to),
            _ => None,
        })
        .step_by(2)
        .collect();
    assert_eq!(tips.len(), 6);
    for (i, tip) in tips.iter().enumerate() {
        let expected = (i as f32 + 0.5) * PI / 3.0;
        let v = rotate(vector(-10.0, 0.0), expected);
        assert!((tip.x - v.x).abs() < 1e-4 && (tip.y - v.y).abs() < 1e-4);
        assert!((tip.to_vector().length() - 10.0).abs() < 1e-4);
    }

    // Colors: petals first, then the pistil.
    let styles: Vec<_> = surface
        .instructions()
        .iter()
        .filter_map(|i| match i {
            Instruction::SetFillStyle(c) => Some(*c),
            _ => None,
        })
        .collect();
    assert_eq!(styles, vec![palette.petal, palette.pistil]);
}

#[test]
fn flower_fills_in_world_space() {
    use crate::path::{ShapeCollector, Style};

    let palette = Palette::default();
    let mut surface = ShapeCollector::new();
    draw_flower(&mut surface, point(100.0, 50.0), 0.0, 5, 10.0, 0.2, &palette);

    let shapes = surface.shapes();
    assert_eq!(shapes.len(), 6);
    assert!(shapes[..5]
        .iter()
        .all(|s| s.style == Style::Fill(palette.petal)));
    assert_eq!(shapes[5].style, Style::Fill(palette.pistil));
    assert_eq!(shapes[0].path.first_endpoint(), Some(point(100.0, 50.0)));
    assert_eq!(surface.depth(), 0);
}

#[test]
fn degenerate_flowers_draw_nothing() {
    let palette = Palette::default();
    let mut surface = Recording::new();

    draw_flower(&mut surface, point(0.0, 0.0), 0.0, 0, 10.0, 0.5, &palette);
    draw_flower(&mut surface, point(0.0, 0.0), 0.0, 6, 0.0, 0.5, &palette);
    draw_flower(&mut surface, point(0.0, 0.0), 0.0, 6, -3.0, 0.5, &palette);
    draw_flower(&mut surface, point(0.0, 0.0), 0.0, 6, f32::NAN, 0.5, &palette);

    assert!(surface.is_empty());
}

#[test]
fn leaf_outline() {
    let palette = Palette::default();
    let mut surface = Recording::new();

    draw_leaf(&mut surface, point(3.0, 4.0), 0.5, 10.0, 0.5, 4.0, &palette);

    assert_eq!(
        surface.instructions(),
        &[
            Instruction::Save,
            Instruction::SetStrokeStyle(palette.stem),
            Instruction::SetFillStyle(palette.stem),
            Instruction::Translate(vector(3.0, 4.0)),
            Instruction::Rotate(Angle::radians(0.5)),
            Instruction::BeginPath,
            Instruction::MoveTo(point(0.0, 0.0)),
            Instruction::QuadraticCurveTo {
                ctrl: point(5.0, 2.0),
                to: point(10.0, 0.0)
            },
            Instruction::QuadraticCurveTo {
                ctrl: point(5.0, -2.0),
                to: point(0.0, 0.0)
            },
            Instruction::Fill,
            Instruction::Restore,
        ][..]
    );
}

#[test]
fn mirrored_branch_curves() {
    let palette = Palette::default();

    let mut right = Recording::new();
    draw_branch(&mut right, point(0.0, 0.0), 0.0, 8.0, Side::Right, &palette);
    let mut left = Recording::new();
    draw_branch(&mut left, point(0.0, 0.0), 0.0, 8.0, Side::Left, &palette);

    assert!(right.instructions().contains(&Instruction::QuadraticCurveTo {
        ctrl: point(8.0, 0.0),
        to: point(8.0, -8.0)
    }));
    assert!(left.instructions().contains(&Instruction::QuadraticCurveTo {
        ctrl: point(-8.0, 0.0),
        to: point(-8.0, -8.0)
    }));
    assert_eq!(count(&right, |i| *i == Instruction::Stroke), 1);
}

#[test]
fn berry_fill_and_outline() {
    use crate::path::{ShapeCollector, Style};

    let palette = Palette::default();
    let mut surface = ShapeCollector::new();
    draw_berry(&mut surface, point(20.0, 20.0), 4.0, 1.0, &palette);

    let shapes = surface.shapes();
    assert_eq!(shapes.len(), 2);
    assert_eq!(shapes[0].style, Style::Fill(palette.berry));
    assert_eq!(
        shapes[1].style,
        Style::Stroke {
            color: palette.stem,
            width: 1.0
        }
    );
    assert_eq!(shapes[0].path, shapes[1].path);

    let mut empty = Recording::new();
    draw_berry(&mut empty, point(0.0, 0.0), 0.0, 1.0, &palette);
    assert!(empty.is_empty());
}

#[test]
fn node_on_a_vertical_stem() {
    use crate::nodes::LeafPlacement;
    use crate::stem::stem_from_offsets;

    let palette = Palette::default();
    let stem = stem_from_offsets(point(0.0, 0.0), 100.0, 0.0, 0.5);
    let leaf = NodePlacement::Leaf(LeafPlacement {
        progress: 0.5,
        size: 10.0,
        angle: 0.0,
        side: Side::Left,
        thickness: 4.0,
        shape: 0.5,
    });

    let mut surface = Recording::new();
    draw_node(&mut surface, &stem, &leaf, &palette);

    assert!(surface
        .instructions()
        .contains(&Instruction::Translate(vector(0.0, -50.0))));
    // The normal points right, so the left leaf is turned around.
    assert!(surface
        .instructions()
        .contains(&Instruction::Rotate(Angle::radians(-PI))));
}
