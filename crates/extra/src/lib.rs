#![deny(bare_trait_objects)]

//! Optional utilities around flora paths: an SVG path-data parser, the built-in
//! monogram silhouette and SVG export of collected shapes.
//!
//! This crate is reexported in [flora](../flora/index.html).

pub extern crate flora_path as path;

pub use crate::path::geom::euclid;
pub use crate::path::math;

pub mod logo;
pub mod parser;
pub mod svg;
