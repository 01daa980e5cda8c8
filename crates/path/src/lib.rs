#![deny(bare_trait_objects)]

//! Paths and drawing surfaces (vector graphics).
//!
//! Plants are not drawn into paths directly but against a
//! [`Surface`](surface/trait.Surface.html): a canvas-like sequence of instructions
//! with a transform stack and fill/stroke styles. The
//! [`ShapeCollector`](collector/struct.ShapeCollector.html) surface turns those
//! instructions back into world-space [`Path`](path/struct.Path.html)s.
//!
//! This crate is reexported in [flora](../flora/index.html).
//!
//! # Examples
//!
//! Recording what a drawing routine does:
//!
//! ```
//! use flora_path::math::{point, vector, Angle};
//! use flora_path::{Instruction, Recording, Surface};
//!
//! let mut surface = Recording::new();
//! surface.save();
//! surface.translate(vector(10.0, 10.0));
//! surface.rotate(Angle::radians(0.5));
//! surface.begin_path();
//! surface.move_to(point(0.0, 0.0));
//! surface.line_to(point(5.0, 0.0));
//! surface.stroke();
//! surface.restore();
//!
//! assert_eq!(surface.instructions().len(), 8);
//! assert_eq!(surface.instructions()[0], Instruction::Save);
//! ```

pub use flora_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod collector;
pub mod color;
pub mod path;
pub mod recording;
pub mod surface;

#[doc(inline)]
pub use crate::collector::{Shape, ShapeCollector, Style};
#[doc(inline)]
pub use crate::color::{Color, ColorError};
#[doc(inline)]
pub use crate::path::{Builder, Path, PathEvent};
#[doc(inline)]
pub use crate::recording::Recording;
#[doc(inline)]
pub use crate::surface::{Instruction, Surface};

pub mod math {
    //! The `f32` euclid types every flora crate works with.

    use crate::geom::euclid::{self, default};

    pub type Point = default::Point2D<f32>;
    pub type Vector = default::Vector2D<f32>;
    pub type Size = default::Size2D<f32>;
    pub type Box2D = default::Box2D<f32>;
    pub type Transform = default::Transform2D<f32>;
    /// An angle in radians.
    pub type Angle = euclid::Angle<f32>;

    #[inline]
    pub fn point(x: f32, y: f32) -> Point {
        Point::new(x, y)
    }

    #[inline]
    pub fn vector(x: f32, y: f32) -> Vector {
        Vector::new(x, y)
    }

    #[inline]
    pub fn size(width: f32, height: f32) -> Size {
        Size::new(width, height)
    }
}

/// Which winding numbers count as inside a shape.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum FillRule {
    EvenOdd,
    NonZero,
}

impl FillRule {
    pub fn contains(self, winding_number: i32) -> bool {
        match self {
            FillRule::EvenOdd => winding_number % 2 != 0,
            FillRule::NonZero => winding_number != 0,
        }
    }
}

impl Default for FillRule {
    fn default() -> Self {
        FillRule::NonZero
    }
}
