//! A parser for the subset of the SVG path syntax made of lines and quadratic curves.
//!
//! The supported commands are `M`, `L`, `H`, `V`, `Q`, `T` and `Z`, in their absolute
//! (upper case) and relative (lower case) forms. As in SVG, coordinates can be
//! separated by whitespace or commas, a command letter can be omitted when it repeats,
//! and the coordinates that follow a move-to are line-tos.
//!
//! ```
//! use flora_extra::parser::parse_svg_path;
//!
//! let path = parse_svg_path("M 0 0 10 0 10 10 Z").unwrap();
//! // Begin, two lines and a closing End.
//! assert_eq!(path.iter().count(), 4);
//! ```

use crate::path::math::{point, Point, Vector};
use crate::path::{Builder, Path};

use std::iter::Peekable;
use std::str::Chars;

use thiserror::Error;

/// Lines and columns start at 1.
#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ParseError {
    #[error("Line {line} Column {column}: Expected number, got {src:?}.")]
    Number { src: String, line: u32, column: u32 },
    #[error("Line {line} Column {column}: Invalid command {command:?}.")]
    Command { command: char, line: u32, column: u32 },
    #[error("Line {line} Column {column}: Expected move-to command, got {command:?}.")]
    MissingMoveTo { command: char, line: u32, column: u32 },
}

/// Parses SVG path data into a `Path`.
pub fn parse_svg_path(src: &str) -> Result<Path, ParseError> {
    let mut parser = Parser {
        cursor: Cursor::new(src),
        builder: Path::builder(),
        current: point(0.0, 0.0),
        start: point(0.0, 0.0),
        last_ctrl: None,
    };
    parser.run()?;

    Ok(parser.builder.build())
}

// Characters and their position.
struct Cursor<'l> {
    chars: Peekable<Chars<'l>>,
    line: u32,
    column: u32,
}

impl<'l> Cursor<'l> {
    fn new(src: &'l str) -> Self {
        Cursor {
            chars: src.chars().peekable(),
            line: 1,
            column: 1,
        }
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().copied()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.chars.next()?;
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }

        Some(c)
    }

    fn skip_separators(&mut self) {
        while let Some(c) = self.peek() {
            if !c.is_whitespace() && c != ',' {
                break;
            }
            self.bump();
        }
    }

    fn take_digits(&mut self, text: &mut String) -> usize {
        let mut count = 0;
        while let Some(c) = self.peek() {
            if !c.is_ascii_digit() {
                break;
            }
            text.push(c);
            self.bump();
            count += 1;
        }

        count
    }

    fn take_sign(&mut self, text: &mut String) {
        if let Some(c) = self.peek() {
            if c == '-' || c == '+' {
                text.push(c);
                self.bump();
            }
        }
    }

    // sign? digits? ('.' digits?)? (('e' | 'E') sign? digits)?
    // "0.6.5" reads as 0.6 followed by .5, like in SVG.
    fn number(&mut self) -> Result<f32, ParseError> {
        self.skip_separators();
        let (line, column) = (self.line, self.column);

        let mut text = String::new();
        self.take_sign(&mut text);
        let mut digits = self.take_digits(&mut text);
        if self.peek() == Some('.') {
            text.push('.');
            self.bump();
            digits += self.take_digits(&mut text);
        }

        let mut valid = digits > 0;
        if valid {
            if let Some(e) = self.peek().filter(|c| *c == 'e' || *c == 'E') {
                text.push(e);
                self.bump();
                self.take_sign(&mut text);
                valid = self.take_digits(&mut text) > 0;
            }
        }

        match text.parse::<f32>() {
            Ok(value) if valid => Ok(value),
            _ => Err(ParseError::Number {
                src: text,
                line,
                column,
            }),
        }
    }
}

struct Parser<'l> {
    cursor: Cursor<'l>,
    builder: Builder,
    current: Point,
    // First point of the current sub-path.
    start: Point,
    // Control point of the previous command if it was a curve, for `T`.
    last_ctrl: Option<Point>,
}

impl<'l> Parser<'l> {
    fn run(&mut self) -> Result<(), ParseError> {
        let mut previous: Option<char> = None;
        loop {
            self.cursor.skip_separators();
            let (line, column) = (self.cursor.line, self.cursor.column);
            let next = match self.cursor.peek() {
                Some(c) => c,
                None => return Ok(()),
            };

            let command = if next.is_ascii_alphabetic() {
                self.cursor.bump();
                next
            } else {
                match previous {
                    // Coordinates after a move-to are line-tos.
                    Some('M') => 'L',
                    Some('m') => 'l',
                    Some(c) if c != 'Z' && c != 'z' => c,
                    _ => {
                        return Err(ParseError::Command {
                            command: next,
                            line,
                            column,
                        })
                    }
                }
            };

            if previous.is_none() && "LlHhVvQqTtZz".contains(command) {
                return Err(ParseError::MissingMoveTo {
                    command,
                    line,
                    column,
                });
            }

            self.command(command, line, column)?;
            previous = Some(command);
        }
    }

    fn command(&mut self, command: char, line: u32, column: u32) -> Result<(), ParseError> {
        let relative = command.is_ascii_lowercase();
        let mut ctrl = None;

        match command.to_ascii_uppercase() {
            'M' => {
                let to = self.point(relative)?;
                self.builder.begin(to);
                self.start = to;
                self.current = to;
            }
            'L' => {
                let to = self.point(relative)?;
                self.line_to(to);
            }
            'H' => {
                let x = self.cursor.number()?;
                let x = if relative { self.current.x + x } else { x };
                self.line_to(point(x, self.current.y));
            }
            'V' => {
                let y = self.cursor.number()?;
                let y = if relative { self.current.y + y } else { y };
                self.line_to(point(self.current.x, y));
            }
            'Q' => {
                let c = self.point(relative)?;
                let to = self.point(relative)?;
                self.quadratic_to(c, to);
                ctrl = Some(c);
            }
            'T' => {
                // The control point mirrors the previous one around the current point.
                let c = match self.last_ctrl {
                    Some(previous) => self.current + (self.current - previous),
                    None => self.current,
                };
                let to = self.point(relative)?;
                self.quadratic_to(c, to);
                ctrl = Some(c);
            }
            'Z' => {
                self.builder.close();
                self.current = self.start;
            }
            _ => {
                return Err(ParseError::Command {
                    command,
                    line,
                    column,
                });
            }
        }

        self.last_ctrl = ctrl;

        Ok(())
    }

    fn point(&mut self, relative: bool) -> Result<Point, ParseError> {
        let x = self.cursor.number()?;
        let y = self.cursor.number()?;
        let offset = if relative {
            self.current.to_vector()
        } else {
            Vector::zero()
        };

        Ok(point(x, y) + offset)
    }

    fn line_to(&mut self, to: Point) {
        self.builder.line_to(to);
        self.current = to;
    }

    fn quadratic_to(&mut self, ctrl: Point, to: Point) {
        self.builder.quadratic_bezier_to(ctrl, to);
        self.current = to;
    }
}

#[cfg(test)]
use crate::path::PathEvent;

#[cfg(test)]
fn events(src: &str) -> Vec<PathEvent> {
    parse_svg_path(src).unwrap().iter().collect()
}

#[test]
fn empty() {
    assert!(parse_svg_path("").unwrap().is_empty());
    assert!(parse_svg_path(" \n, ").unwrap().is_empty());
}

#[test]
fn simple_square() {
    let events = events("M 0 0 L 1 0 L 1 1 L 0 1 Z");
    assert_eq!(events.len(), 6);
    assert_eq!(
        events[5],
        PathEvent::End {
            last: point(0.0, 1.0),
            first: point(0.0, 0.0),
            close: true
        }
    );
}

#[test]
fn implicit_polyline() {
    let events = events("M0 0 1 1,2 2 3 3");
    let lines = events
        .iter()
        .filter(|e| matches!(e, PathEvent::Line { .. }))
        .count();
    assert_eq!(lines, 3);
}

#[test]
fn relative_and_axis_aligned() {
    let events = events("m 10 10 h 5 v 5 H 0 V 0 l 1 2");
    let ends: Vec<Point> = events
        .iter()
        .filter_map(|e| match e {
            PathEvent::Line { to, .. } => Some(*to),
            _ => None,
        })
        .collect();

    assert_eq!(
        ends,
        vec![
            point(15.0, 10.0),
            point(15.0, 15.0),
            point(0.0, 15.0),
            point(0.0, 0.0),
            point(1.0, 2.0),
        ]
    );
}

#[test]
fn quadratic_and_smooth() {
    let events = events("M 0 0 Q 1 1 2 0 T 4 0 t 2 0");
    assert_eq!(
        events[2],
        PathEvent::Quadratic {
            from: point(2.0, 0.0),
            ctrl: point(3.0, -1.0),
            to: point(4.0, 0.0)
        }
    );
    assert_eq!(
        events[3],
        PathEvent::Quadratic {
            from: point(4.0, 0.0),
            ctrl: point(5.0, 1.0),
            to: point(6.0, 0.0)
        }
    );
}

#[test]
fn smooth_without_a_previous_curve() {
    let events = events("M 0 0 L 2 0 T 4 2");
    assert_eq!(
        events[2],
        PathEvent::Quadratic {
            from: point(2.0, 0.0),
            ctrl: point(2.0, 0.0),
            to: point(4.0, 2.0)
        }
    );
}

#[test]
fn drawing_after_close_starts_at_the_sub_path_start() {
    let events = events("M 1 1 L 5 1 L 5 5 Z l 0 3");
    assert_eq!(events[4], PathEvent::Begin { at: point(1.0, 1.0) });
    assert_eq!(
        events[5],
        PathEvent::Line {
            from: point(1.0, 1.0),
            to: point(1.0, 4.0)
        }
    );
}

#[test]
fn invalid_command() {
    assert_eq!(
        parse_svg_path("M 0 0 x 0 0"),
        Err(ParseError::Command {
            command: 'x',
            line: 1,
            column: 7
        })
    );

    assert_eq!(
        parse_svg_path("M 0 0\n  L 1 2 x 3 4"),
        Err(ParseError::Command {
            command: 'x',
            line: 2,
            column: 9
        })
    );
}

#[test]
fn cubic_curves_are_not_supported() {
    match parse_svg_path("M 0 0 C 1 1 2 2 3 3") {
        Err(ParseError::Command { command: 'C', .. }) => {}
        other => panic!("{:?}", other),
    }
}

#[test]
fn numbers_without_separators() {
    // Equivalent to "M 0.6 0.5".
    assert_eq!(
        events("M 0.6.5"),
        vec![
            PathEvent::Begin { at: point(0.6, 0.5) },
            PathEvent::End {
                last: point(0.6, 0.5),
                first: point(0.6, 0.5),
                close: false
            },
        ]
    );
    assert_eq!(events("M-1-2")[0], PathEvent::Begin { at: point(-1.0, -2.0) });
}

#[test]
fn scientific_notation() {
    let path = parse_svg_path("M 1e-2 -1E3").unwrap();
    assert_eq!(path.first_endpoint(), Some(point(0.01, -1000.0)));
}

#[test]
fn bad_numbers() {
    let bad_number = |src: &str| matches!(parse_svg_path(src), Err(ParseError::Number { .. }));

    assert!(bad_number("M 0 --1"));
    assert!(bad_number("M 0 1ee2"));
    assert!(bad_number("M 0 1e--1"));
    assert!(bad_number("M 0 *2"));
    assert!(bad_number("M 0 e"));
    assert!(bad_number("M 0 1e"));
    assert!(bad_number("M 0 ."));
    assert!(bad_number("M 0 0 L 1"));
}

#[test]
fn number_error_position() {
    assert_eq!(
        parse_svg_path("M 0 0\nL 1 -x"),
        Err(ParseError::Number {
            src: "-".to_string(),
            line: 2,
            column: 5
        })
    );
}

#[test]
fn must_start_with_a_move_to() {
    match parse_svg_path("L 1 1") {
        Err(ParseError::MissingMoveTo { command: 'L', .. }) => {}
        other => panic!("{:?}", other),
    }
    match parse_svg_path("  z") {
        Err(ParseError::MissingMoveTo { command: 'z', .. }) => {}
        other => panic!("{:?}", other),
    }
    match parse_svg_path("1 2") {
        Err(ParseError::Command { command: '1', .. }) => {}
        other => panic!("{:?}", other),
    }
}
