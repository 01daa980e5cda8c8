//! Outlines made of lines and quadratic curves.

use crate::math::Point;

/// One step along a path.
///
/// Every sub-path is a `Begin`, any number of edges, and an `End` that says whether
/// the sub-path was closed. `End` also carries the first point so that consumers
/// filling the shape can close it implicitly.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum PathEvent {
    Begin { at: Point },
    Line { from: Point, to: Point },
    Quadratic { from: Point, ctrl: Point, to: Point },
    End { last: Point, first: Point, close: bool },
}

/// A sequence of sub-paths, stored as the events that describe them.
///
/// ```
/// use flora_path::{Path, PathEvent};
/// use flora_path::math::point;
///
/// let mut builder = Path::builder();
/// builder.begin(point(0.0, 0.0));
/// builder.quadratic_bezier_to(point(5.0, 4.0), point(10.0, 0.0));
/// builder.close();
/// let leaf = builder.build();
///
/// assert_eq!(leaf.iter().count(), 3);
/// assert!(matches!(leaf.iter().last(), Some(PathEvent::End { close: true, .. })));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Path {
    events: Vec<PathEvent>,
}

pub type Iter<'l> = core::iter::Copied<core::slice::Iter<'l, PathEvent>>;

impl Path {
    pub fn new() -> Self {
        Path { events: Vec::new() }
    }

    pub fn builder() -> Builder {
        Builder::new()
    }

    pub fn iter(&self) -> Iter {
        self.events.iter().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Where the first sub-path begins.
    pub fn first_endpoint(&self) -> Option<Point> {
        match self.events.first() {
            Some(PathEvent::Begin { at }) => Some(*at),
            _ => None,
        }
    }
}

impl<'l> IntoIterator for &'l Path {
    type Item = PathEvent;
    type IntoIter = Iter<'l>;

    fn into_iter(self) -> Iter<'l> {
        self.iter()
    }
}

/// Builds a [`Path`] one point at a time, the way a canvas builds its current path.
///
/// Edges added while no sub-path is open start a new one: at the first point of the
/// sub-path that was just closed, or at the edge's own end point if there is none.
#[derive(Clone, Debug, Default)]
pub struct Builder {
    events: Vec<PathEvent>,
    first: Point,
    current: Option<Point>,
    open: bool,
}

impl Builder {
    pub fn new() -> Self {
        Builder::default()
    }

    /// Starts a sub-path, ending the open one if any.
    pub fn begin(&mut self, at: Point) {
        self.end(false);
        self.events.push(PathEvent::Begin { at });
        self.first = at;
        self.current = Some(at);
        self.open = true;
    }

    pub fn line_to(&mut self, to: Point) {
        let from = self.reopen(to);
        self.events.push(PathEvent::Line { from, to });
        self.current = Some(to);
    }

    pub fn quadratic_bezier_to(&mut self, ctrl: Point, to: Point) {
        let from = self.reopen(to);
        self.events.push(PathEvent::Quadratic { from, ctrl, to });
        self.current = Some(to);
    }

    /// Ends the open sub-path. Does nothing if there is none.
    pub fn end(&mut self, close: bool) {
        if !self.open {
            return;
        }

        let last = self.current.unwrap_or(self.first);
        self.events.push(PathEvent::End {
            last,
            first: self.first,
            close,
        });
        self.open = false;
        if close {
            self.current = Some(self.first);
        }
    }

    pub fn close(&mut self) {
        self.end(true);
    }

    /// The end of the last edge, or `None` before anything was added.
    pub fn current_position(&self) -> Option<Point> {
        self.current
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Ends the open sub-path, if any, and returns the path.
    pub fn build(mut self) -> Path {
        self.end(false);
        Path {
            events: self.events,
        }
    }

    fn reopen(&mut self, default: Point) -> Point {
        if !self.open {
            let at = self.current.unwrap_or(default);
            self.begin(at);
        }

        self.current.unwrap_or(default)
    }
}

#[cfg(test)]
use crate::math::point;

#[test]
fn two_sub_paths() {
    let mut p = Path::builder();
    p.begin(point(0.0, 0.0));
    p.line_to(point(1.0, 0.0));
    p.quadratic_bezier_to(point(2.0, 0.0), point(2.0, 1.0));
    p.close();
    p.begin(point(10.0, 0.0));
    p.line_to(point(11.0, 0.0));
    let path = p.build();

    let events: Vec<PathEvent> = path.iter().collect();
    assert_eq!(
        events,
        vec![
            PathEvent::Begin { at: point(0.0, 0.0) },
            PathEvent::Line { from: point(0.0, 0.0), to: point(1.0, 0.0) },
            PathEvent::Quadratic {
                from: point(1.0, 0.0),
                ctrl: point(2.0, 0.0),
                to: point(2.0, 1.0)
            },
            PathEvent::End { last: point(2.0, 1.0), first: point(0.0, 0.0), close: true },
            PathEvent::Begin { at: point(10.0, 0.0) },
            PathEvent::Line { from: point(10.0, 0.0), to: point(11.0, 0.0) },
            PathEvent::End { last: point(11.0, 0.0), first: point(10.0, 0.0), close: false },
        ]
    );
    assert_eq!(path.first_endpoint(), Some(point(0.0, 0.0)));
}

#[test]
fn empty_path() {
    let path = Path::builder().build();
    assert!(path.is_empty());
    assert_eq!(path.iter().next(), None);
    assert_eq!(path.first_endpoint(), None);
}

#[test]
fn edge_after_close_restarts_at_first_point() {
    let mut p = Path::builder();
    p.begin(point(0.0, 0.0));
    p.line_to(point(2.0, 0.0));
    p.close();
    p.line_to(point(0.0, 2.0));
    let events: Vec<PathEvent> = p.build().iter().collect();

    assert_eq!(events[3], PathEvent::Begin { at: point(0.0, 0.0) });
    assert_eq!(
        events[4],
        PathEvent::Line { from: point(0.0, 0.0), to: point(0.0, 2.0) }
    );
}

#[test]
fn edge_without_begin_starts_at_its_end() {
    let mut p = Path::builder();
    assert_eq!(p.current_position(), None);
    p.line_to(point(3.0, 4.0));
    assert_eq!(p.current_position(), Some(point(3.0, 4.0)));

    let path = p.build();
    assert_eq!(path.first_endpoint(), Some(point(3.0, 4.0)));
    assert_eq!(path.iter().count(), 3);
}
