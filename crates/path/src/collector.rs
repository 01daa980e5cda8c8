//! A surface that resolves drawing calls into world-space shapes.

use crate::color::Color;
use crate::geom::Arc;
use crate::math::{Point, Transform};
use crate::path::{Builder, Path};
use crate::surface::{Instruction, Surface};

/// How a shape is painted.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum Style {
    Fill(Color),
    Stroke { color: Color, width: f32 },
}

/// A painted path, in world coordinates.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Shape {
    pub path: Path,
    pub style: Style,
}

#[derive(Copy, Clone, Debug, PartialEq)]
struct State {
    transform: Transform,
    fill: Color,
    stroke: Color,
    line_width: f32,
}

impl Default for State {
    fn default() -> Self {
        State {
            transform: Transform::identity(),
            fill: Color::new(0, 0, 0),
            stroke: Color::new(0, 0, 0),
            line_width: 1.0,
        }
    }
}

/// Applies the transform stack to every point and produces one [`Shape`] per
/// `fill` or `stroke` call.
///
/// Points are transformed by the transform that is current when they are added,
/// so a path can span several `translate`/`rotate` calls.
#[derive(Clone, Debug, Default)]
pub struct ShapeCollector {
    state: State,
    stack: Vec<State>,
    path: Builder,
    background: Option<Color>,
    shapes: Vec<Shape>,
}

impl ShapeCollector {
    pub fn new() -> Self {
        ShapeCollector::default()
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// The color of the last `clear`, if any.
    pub fn background(&self) -> Option<Color> {
        self.background
    }

    /// Depth of the transform stack. Zero when every `save` has been matched.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    fn to_world(&self, p: Point) -> Point {
        self.state.transform.transform_point(p)
    }

    // Like a canvas arc: connected to the current point when there is one.
    fn add_arc(&mut self, arc: &Arc<f32>) {
        let start = self.to_world(arc.from());
        match self.path.current_position() {
            Some(current) if (start - current).square_length() > 1e-8 => {
                self.path.line_to(start);
            }
            Some(_) => {}
            None => self.path.begin(start),
        }

        let transform = self.state.transform;
        let path = &mut self.path;
        arc.for_each_quadratic_bezier(&mut |curve| {
            let curve = curve.transformed(&transform);
            path.quadratic_bezier_to(curve.ctrl, curve.to);
        });
    }

    fn paint(&mut self, style: Style) {
        if self.path.is_empty() {
            return;
        }
        let path = self.path.clone().build();
        self.shapes.push(Shape { path, style });
    }
}

impl Surface for ShapeCollector {
    fn apply(&mut self, instruction: Instruction) {
        match instruction {
            Instruction::Save => {
                self.stack.push(self.state);
            }
            Instruction::Restore => {
                // Like a canvas, an unbalanced restore is ignored.
                if let Some(state) = self.stack.pop() {
                    self.state = state;
                }
            }
            Instruction::Translate(v) => {
                self.state.transform = self.state.transform.pre_translate(v);
            }
            Instruction::Rotate(angle) => {
                self.state.transform = self.state.transform.pre_rotate(angle);
            }
            Instruction::BeginPath => {
                self.path = Builder::new();
            }
            Instruction::MoveTo(to) => {
                let to = self.to_world(to);
                self.path.begin(to);
            }
            Instruction::LineTo(to) => {
                let to = self.to_world(to);
                self.path.line_to(to);
            }
            Instruction::QuadraticCurveTo { ctrl, to } => {
                let ctrl = self.to_world(ctrl);
                let to = self.to_world(to);
                self.path.quadratic_bezier_to(ctrl, to);
            }
            Instruction::Arc(arc) => {
                self.add_arc(&arc);
            }
            Instruction::ClosePath => {
                self.path.close();
            }
            Instruction::SetFillStyle(color) => {
                self.state.fill = color;
            }
            Instruction::SetStrokeStyle(color) => {
                self.state.stroke = color;
            }
            Instruction::SetLineWidth(width) => {
                // Invalid widths are ignored, as on a canvas.
                if width.is_finite() && width > 0.0 {
                    self.state.line_width = width;
                }
            }
            Instruction::Fill => {
                let color = self.state.fill;
                self.paint(Style::Fill(color));
            }
            Instruction::Stroke => {
                let style = Style::Stroke {
                    color: self.state.stroke,
                    width: self.state.line_width,
                };
                self.paint(style);
            }
            Instruction::Clear(color) => {
                self.shapes.clear();
                self.background = Some(color);
            }
        }
    }
}

#[cfg(test)]
use crate::math::{point, vector, Angle};
#[cfg(test)]
use crate::PathEvent;

#[cfg(test)]
fn approx(a: Point, b: Point) -> bool {
    (a - b).length() < 1e-4
}

#[test]
fn translate_then_rotate() {
    let mut c = ShapeCollector::new();
    c.translate(vector(10.0, 0.0));
    c.rotate(Angle::radians(core::f32::consts::FRAC_PI_2));
    c.begin_path();
    c.move_to(point(0.0, 0.0));
    c.line_to(point(1.0, 0.0));
    c.stroke();

    let shapes = c.shapes();
    assert_eq!(shapes.len(), 1);
    let events: Vec<PathEvent> = shapes[0].path.iter().collect();
    match events[1] {
        PathEvent::Line { from, to } => {
            assert!(approx(from, point(10.0, 0.0)));
            // A quarter turn maps +x onto +y.
            assert!(approx(to, point(10.0, 1.0)));
        }
        ref other => panic!("unexpected {:?}", other),
    }
}

#[test]
fn save_restore_styles_and_transform() {
    let red = Color::new(255, 0, 0);
    let mut c = ShapeCollector::new();
    c.set_fill_style(red);
    c.save();
    c.translate(vector(5.0, 5.0));
    c.set_fill_style(Color::new(0, 255, 0));
    assert_eq!(c.depth(), 1);
    c.restore();
    assert_eq!(c.depth(), 0);

    c.begin_path();
    c.move_to(point(0.0, 0.0));
    c.line_to(point(1.0, 0.0));
    c.line_to(point(1.0, 1.0));
    c.fill();

    assert_eq!(c.shapes()[0].style, Style::Fill(red));
    assert_eq!(c.shapes()[0].path.first_endpoint(), Some(point(0.0, 0.0)));
}

#[test]
fn stroke_width() {
    let mut c = ShapeCollector::new();
    c.set_line_width(2.5);
    c.set_line_width(-1.0);
    c.begin_path();
    c.move_to(point(0.0, 0.0));
    c.line_to(point(1.0, 0.0));
    c.stroke();

    match c.shapes()[0].style {
        Style::Stroke { width, .. } => assert_eq!(width, 2.5),
        _ => panic!(),
    }
}

#[test]
fn full_circle_arc() {
    let mut c = ShapeCollector::new();
    c.translate(vector(3.0, 4.0));
    c.begin_path();
    c.arc(point(0.0, 0.0), 2.0, 0.0, 2.0 * core::f32::consts::PI);
    c.fill();

    let path = &c.shapes()[0].path;
    let mut quadratics = 0;
    for evt in path {
        if let PathEvent::Quadratic { to, .. } = evt {
            assert!(((to - point(3.0, 4.0)).length() - 2.0).abs() < 1e-4);
            quadratics += 1;
        }
    }
    assert_eq!(quadratics, 8);
    assert!(approx(path.first_endpoint().unwrap(), point(5.0, 4.0)));
}

#[test]
fn line_after_close_starts_at_first_point() {
    let mut c = ShapeCollector::new();
    c.begin_path();
    c.move_to(point(0.0, 0.0));
    c.line_to(point(2.0, 0.0));
    c.close_path();
    c.line_to(point(0.0, 2.0));
    c.stroke();

    let events: Vec<PathEvent> = c.shapes()[0].path.iter().collect();
    assert_eq!(
        events[3],
        PathEvent::Begin {
            at: point(0.0, 0.0)
        }
    );
}

#[test]
fn empty_paths_are_not_painted() {
    let mut c = ShapeCollector::new();
    c.begin_path();
    c.fill();
    c.stroke();
    assert!(c.shapes().is_empty());
}

#[test]
fn clear_discards_shapes() {
    let mut c = ShapeCollector::new();
    c.begin_path();
    c.move_to(point(0.0, 0.0));
    c.line_to(point(1.0, 0.0));
    c.stroke();
    c.clear(Color::new(1, 2, 3));

    assert!(c.shapes().is_empty());
    assert_eq!(c.background(), Some(Color::new(1, 2, 3)));
}
