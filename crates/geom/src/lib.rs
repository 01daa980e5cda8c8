#![deny(bare_trait_objects)]
#![allow(clippy::excessive_precision)]
#![no_std]

//! Curves and easing functions for procedural plant drawings, on top of euclid.
//!
//! This crate is reexported in [flora](../flora/index.html).
//!
//! A stem is a single [`QuadraticBezierSegment`]. Decorations are attached at a
//! *progress* value `t ∈ [0, 1]` and oriented along the curve's normal at `t`.
//! Their sizes are tapered with one of the named [`Easing`] functions, and round
//! shapes (berries, pistils) are drawn as [`Arc`]s approximated with quadratic
//! curves.
//!
//! ```
//! use flora_geom::{point, QuadraticBezierSegment};
//!
//! let stem = QuadraticBezierSegment {
//!     from: point(0.0f32, 0.0),
//!     ctrl: point(0.0, -50.0),
//!     to: point(0.0, -100.0),
//! };
//!
//! assert_eq!(stem.sample(1.0), point(0.0, -100.0));
//! // The stem goes up, its normal points towards +x.
//! let n = stem.normal(0.5);
//! assert!((n.x - 1.0).abs() < 1e-6);
//! ```

#[cfg(any(test, feature = "std"))]
extern crate std;

extern crate alloc;

pub use euclid;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod arc;
pub mod easing;
pub mod quadratic_bezier;
mod scalar;
pub mod utils;

#[doc(inline)]
pub use crate::arc::Arc;
#[doc(inline)]
pub use crate::easing::Easing;
#[doc(inline)]
pub use crate::quadratic_bezier::QuadraticBezierSegment;
pub use crate::scalar::Scalar;

pub type Point<S> = euclid::default::Point2D<S>;
pub type Vector<S> = euclid::default::Vector2D<S>;
pub type Box2D<S> = euclid::default::Box2D<S>;
pub type Transform<S> = euclid::default::Transform2D<S>;

#[inline]
pub fn point<S>(x: S, y: S) -> Point<S> {
    Point::new(x, y)
}

#[inline]
pub fn vector<S>(x: S, y: S) -> Vector<S> {
    Vector::new(x, y)
}
