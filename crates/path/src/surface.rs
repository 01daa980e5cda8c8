//! A canvas-like drawing interface.
//!
//! Plants are drawn with a small set of retained-mode-free calls: a transform stack
//! (`save`, `restore`, `translate`, `rotate`), path construction (`begin_path`,
//! `move_to`, `line_to`, `quadratic_curve_to`, `arc`, `close_path`), styles and
//! `fill`/`stroke`. Every call is described by an [`Instruction`], and implementors
//! only have to provide [`Surface::apply`].
//!
//! Two surfaces are provided: [`Recording`](../recording/struct.Recording.html) keeps
//! the instructions as they are issued, and
//! [`ShapeCollector`](../collector/struct.ShapeCollector.html) resolves them into
//! world-space filled and stroked paths.

use crate::color::Color;
use crate::geom::Arc;
use crate::math::{Angle, Point, Vector};

/// One drawing call.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Instruction {
    /// Pushes the current transform and styles.
    Save,
    /// Pops the transform and styles pushed by the matching `Save`.
    Restore,
    Translate(Vector),
    Rotate(Angle),
    /// Discards the current path.
    BeginPath,
    MoveTo(Point),
    LineTo(Point),
    QuadraticCurveTo {
        ctrl: Point,
        to: Point,
    },
    /// A circular arc. The current point is connected to the start of the arc.
    Arc(Arc<f32>),
    ClosePath,
    SetFillStyle(Color),
    SetStrokeStyle(Color),
    SetLineWidth(f32),
    /// Fills the current path with the fill style.
    Fill,
    /// Strokes the current path with the stroke style and line width.
    Stroke,
    /// Paints the whole surface, ignoring the transform.
    Clear(Color),
}

/// A 2D drawing surface.
pub trait Surface {
    fn apply(&mut self, instruction: Instruction);

    fn save(&mut self) {
        self.apply(Instruction::Save);
    }

    fn restore(&mut self) {
        self.apply(Instruction::Restore);
    }

    fn translate(&mut self, v: Vector) {
        self.apply(Instruction::Translate(v));
    }

    /// Rotates the coordinate frame. With y pointing down positive angles are clockwise.
    fn rotate(&mut self, angle: Angle) {
        self.apply(Instruction::Rotate(angle));
    }

    fn begin_path(&mut self) {
        self.apply(Instruction::BeginPath);
    }

    fn move_to(&mut self, to: Point) {
        self.apply(Instruction::MoveTo(to));
    }

    fn line_to(&mut self, to: Point) {
        self.apply(Instruction::LineTo(to));
    }

    fn quadratic_curve_to(&mut self, ctrl: Point, to: Point) {
        self.apply(Instruction::QuadraticCurveTo { ctrl, to });
    }

    /// Adds a clockwise arc from `start_angle` to `end_angle`, like the canvas call
    /// of the same name.
    fn arc(&mut self, center: Point, radius: f32, start_angle: f32, end_angle: f32) {
        self.apply(Instruction::Arc(Arc {
            center,
            radius,
            start_angle,
            sweep_angle: end_angle - start_angle,
        }));
    }

    fn close_path(&mut self) {
        self.apply(Instruction::ClosePath);
    }

    fn set_fill_style(&mut self, color: Color) {
        self.apply(Instruction::SetFillStyle(color));
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.apply(Instruction::SetStrokeStyle(color));
    }

    fn set_line_width(&mut self, width: f32) {
        self.apply(Instruction::SetLineWidth(width));
    }

    fn fill(&mut self) {
        self.apply(Instruction::Fill);
    }

    fn stroke(&mut self) {
        self.apply(Instruction::Stroke);
    }

    fn clear(&mut self, color: Color) {
        self.apply(Instruction::Clear(color));
    }
}

// Automatically implement Surface for all &mut Surface.
impl<'l, S: Surface + ?Sized> Surface for &'l mut S {
    #[inline]
    fn apply(&mut self, instruction: Instruction) {
        (**self).apply(instruction);
    }
}

#[test]
fn arc_from_angles() {
    use crate::math::point;
    use crate::Recording;

    let mut rec = Recording::new();
    rec.arc(point(1.0, 2.0), 3.0, 0.5, 2.5);
    match rec.instructions()[0] {
        Instruction::Arc(arc) => {
            assert_eq!(arc.center, point(1.0, 2.0));
            assert_eq!(arc.radius, 3.0);
            assert_eq!(arc.start_angle, 0.5);
            assert_eq!(arc.sweep_angle, 2.0);
        }
        ref other => panic!("unexpected {:?}", other),
    }
}
