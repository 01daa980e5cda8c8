//! Export collected shapes as an SVG document.
//!
//! ```
//! use flora_extra::math::{point, size};
//! use flora_extra::path::{Color, ShapeCollector, Surface};
//! use flora_extra::svg::to_svg_document;
//!
//! let mut surface = ShapeCollector::new();
//! surface.clear(Color::new(255, 255, 255));
//! surface.begin_path();
//! surface.move_to(point(0.0, 0.0));
//! surface.line_to(point(10.0, 5.0));
//! surface.stroke();
//!
//! let svg = to_svg_document(size(20.0, 10.0), surface.background(), surface.shapes());
//! assert!(svg.contains("d=\"M 0 0 L 10 5\""));
//! ```

use std::fmt::{self, Write};

use crate::math::Size;
use crate::path::color::to_hex;
use crate::path::{Color, Path, PathEvent, Shape, Style};

/// Writes the path in SVG path-data syntax, for example `M 0 0 Q 1 2 3 4 Z`.
pub fn write_path_data<W: Write>(output: &mut W, path: &Path) -> fmt::Result {
    let mut separator = "";
    for evt in path.iter() {
        match evt {
            PathEvent::Begin { at } => {
                write!(output, "{}M {} {}", separator, at.x, at.y)?;
            }
            PathEvent::Line { to, .. } => {
                write!(output, "{}L {} {}", separator, to.x, to.y)?;
            }
            PathEvent::Quadratic { ctrl, to, .. } => {
                write!(output, "{}Q {} {} {} {}", separator, ctrl.x, ctrl.y, to.x, to.y)?;
            }
            PathEvent::End { close: true, .. } => {
                write!(output, "{}Z", separator)?;
            }
            PathEvent::End { close: false, .. } => {}
        }
        separator = " ";
    }

    Ok(())
}

pub fn path_data(path: &Path) -> String {
    let mut output = String::new();
    // Writing into a String does not fail.
    let _ = write_path_data(&mut output, path);
    output
}

/// Writes a standalone SVG document containing the shapes, in painting order.
pub fn write_svg_document<W: Write>(
    output: &mut W,
    size: Size,
    background: Option<Color>,
    shapes: &[Shape],
) -> fmt::Result {
    writeln!(
        output,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
        w = size.width,
        h = size.height,
    )?;

    if let Some(color) = background {
        writeln!(
            output,
            "  <rect width=\"100%\" height=\"100%\" fill=\"{}\"/>",
            to_hex(color)
        )?;
    }

    for shape in shapes {
        write!(output, "  <path d=\"")?;
        write_path_data(output, &shape.path)?;
        match shape.style {
            Style::Fill(color) => {
                writeln!(output, "\" fill=\"{}\"/>", to_hex(color))?;
            }
            Style::Stroke { color, width } => {
                writeln!(
                    output,
                    "\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\"/>",
                    to_hex(color),
                    width
                )?;
            }
        }
    }

    writeln!(output, "</svg>")
}

pub fn to_svg_document(size: Size, background: Option<Color>, shapes: &[Shape]) -> String {
    let mut output = String::new();
    let _ = write_svg_document(&mut output, size, background, shapes);
    output
}

#[cfg(test)]
use crate::math::{point, size};

#[test]
fn quadratic_path_data() {
    let mut builder = Path::builder();
    builder.begin(point(0.0, 0.0));
    builder.quadratic_bezier_to(point(1.0, 2.0), point(3.0, 4.5));
    builder.close();
    let path = builder.build();

    assert_eq!(path_data(&path), "M 0 0 Q 1 2 3 4.5 Z");
}

#[test]
fn several_sub_paths() {
    let mut builder = Path::builder();
    builder.begin(point(0.0, 0.0));
    builder.line_to(point(1.0, 0.0));
    builder.end(false);
    builder.begin(point(5.0, 5.0));
    builder.line_to(point(6.0, 5.0));
    builder.end(true);
    let path = builder.build();

    assert_eq!(path_data(&path), "M 0 0 L 1 0 M 5 5 L 6 5 Z");
    assert_eq!(path_data(&Path::new()), "");
}

#[test]
fn document_with_fill_and_stroke() {
    let mut builder = Path::builder();
    builder.begin(point(0.0, 0.0));
    builder.line_to(point(10.0, 0.0));
    builder.line_to(point(10.0, 10.0));
    builder.close();
    let triangle = builder.build();

    let shapes = [
        Shape {
            path: triangle.clone(),
            style: Style::Fill(Color::new(255, 0, 0)),
        },
        Shape {
            path: triangle,
            style: Style::Stroke {
                color: Color::new(0, 0, 255),
                width: 2.0,
            },
        },
    ];

    let svg = to_svg_document(size(64.0, 32.0), Some(Color::new(0, 0, 0)), &shapes);
    let lines: Vec<&str> = svg.lines().collect();

    assert_eq!(
        lines[0],
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"64\" height=\"32\" viewBox=\"0 0 64 32\">"
    );
    assert_eq!(lines[1], "  <rect width=\"100%\" height=\"100%\" fill=\"#000000\"/>");
    assert_eq!(
        lines[2],
        "  <path d=\"M 0 0 L 10 0 L 10 10 Z\" fill=\"#ff0000\"/>"
    );
    assert_eq!(
        lines[3],
        "  <path d=\"M 0 0 L 10 0 L 10 10 Z\" fill=\"none\" stroke=\"#0000ff\" stroke-width=\"2\"/>"
    );
    assert_eq!(lines[4], "</svg>");
    assert_eq!(lines.len(), 5);
}

#[test]
fn document_without_background() {
    let svg = to_svg_document(size(1.0, 1.0), None, &[]);
    assert!(!svg.contains("<rect"));
    assert_eq!(svg.lines().count(), 2);
}
