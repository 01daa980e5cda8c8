#![deny(bare_trait_objects)]
#![allow(clippy::float_cmp)]

//! Path algorithms used to lay plants out.
//!
//! This crate is reexported in [flora](../flora/index.html).

pub extern crate flora_path as path;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod aabb;
pub mod fit;
pub mod hit_test;
pub mod scatter;

pub use crate::path::geom;
pub use crate::path::math;
