#![deny(bare_trait_objects)]
#![allow(clippy::float_cmp)]

//! Procedural plants.
//!
//! A plant is a quadratic stem with decorations ("nodes") distributed along it and an
//! optional flower head at its tip. Building one goes through three steps:
//!
//! - a [`Resolver`](resolve/trait.Resolver.html) turns [`PlantParameters`](params/struct.PlantParameters.html)
//!   into a concrete [`ResolvedPlant`](resolve/struct.ResolvedPlant.html), either deterministically
//!   or by drawing values from an injected random number generator,
//! - the node distribution computes where the decorations go and how big they are,
//! - the shape composers issue drawing calls against a [`Surface`](../flora_path/surface/trait.Surface.html).
//!
//! This crate is reexported in [flora](../flora/index.html).
//!
//! # Examples
//!
//! ```
//! use flora_plant::math::point;
//! use flora_plant::path::Recording;
//! use flora_plant::{Fixed, Palette, Plant, PlantParameters};
//!
//! let params = PlantParameters::default();
//! let plant = Plant::build(&params, point(400.0, 600.0), 800.0, &mut Fixed).unwrap();
//!
//! let mut surface = Recording::new();
//! plant.draw(&mut surface, &Palette::default());
//!
//! // The stem, five segments worth of mirrored branches and a flower.
//! assert!(surface.paint_count() > 12);
//! ```

pub extern crate flora_path as path;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

pub mod compose;
mod error;
pub mod flower;
pub mod nodes;
pub mod palette;
pub mod params;
pub mod plant;
pub mod resolve;
pub mod scene;
pub mod stem;

pub use crate::path::geom;
pub use crate::path::math;

#[doc(inline)]
pub use crate::error::ConfigError;
#[doc(inline)]
pub use crate::flower::FlowerSpec;
#[doc(inline)]
pub use crate::nodes::{NodeKind, NodePlacement, Side};
#[doc(inline)]
pub use crate::palette::Palette;
#[doc(inline)]
pub use crate::params::PlantParameters;
#[doc(inline)]
pub use crate::plant::Plant;
#[doc(inline)]
pub use crate::resolve::{Fixed, Randomized, ResolvedPlant, Resolver};
#[doc(inline)]
pub use crate::scene::Garden;
#[doc(inline)]
pub use crate::stem::{ParametricSample, Stem};
