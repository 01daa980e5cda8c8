#![deny(bare_trait_objects)]

//! Procedural plant and flower illustrations.
//!
//! # Crates
//!
//! This meta-crate (`flora`) reexports the following sub-crates for convenience:
//!
//! * **flora_plant** - Parameters, node distribution, shape composers and plant assembly.
//! * **flora_path** - Paths, path builders and drawing surfaces.
//! * **flora_algorithms** - Hit testing, bounding boxes, fitting and scattering.
//! * **flora_geom** - Quadratic bézier curves, arcs and easing functions.
//! * **flora_extra** - SVG path parsing, the monogram silhouette and SVG export.
//!
//! Each `flora_<name>` crate is reexported as a `<name>` module in `flora`. For example:
//!
//! ```ignore
//! extern crate flora_plant;
//! use flora_plant::Plant;
//! ```
//!
//! Is equivalent to:
//!
//! ```ignore
//! extern crate flora;
//! use flora::plant::Plant;
//! ```
//!
//! # Feature flags
//!
//! serialization using serde can be enabled on each crate using the
//! `serialization` feature flag (disabled by default).
//!
//! # Examples
//!
//! ## Drawing a plant
//!
//! A plant is drawn against a [`Surface`](path/surface/trait.Surface.html). The
//! [`ShapeCollector`](path/collector/struct.ShapeCollector.html) surface turns the
//! drawing calls into filled and stroked paths, which can then be exported:
//!
//! ```
//! use flora::math::size;
//! use flora::path::ShapeCollector;
//! use flora::plant::{scene, Fixed, Palette, PlantParameters};
//!
//! let params = PlantParameters::default();
//! let palette = Palette::default();
//! let mut surface = ShapeCollector::new();
//!
//! scene::draw_single_plant(&mut surface, size(640.0, 480.0), &params, &palette, &mut Fixed)
//!     .unwrap();
//!
//! let svg = flora::extra::svg::to_svg_document(
//!     size(640.0, 480.0),
//!     surface.background(),
//!     surface.shapes(),
//! );
//! assert!(svg.starts_with("<svg"));
//! ```
//!
//! ## Scattering plants in a silhouette
//!
//! ```
//! use flora::math::size;
//! use flora::path::Recording;
//! use flora::plant::{Garden, Palette, PlantParameters, Randomized};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let garden = Garden::monogram().unwrap();
//! let mut params = PlantParameters::default();
//! params.count = 100;
//!
//! let mut surface = Recording::new();
//! let mut resolver = Randomized::new(StdRng::seed_from_u64(1));
//! let plants = garden
//!     .draw(
//!         &mut surface,
//!         size(800.0, 600.0),
//!         &params,
//!         &Palette::default(),
//!         &mut resolver,
//!         &mut StdRng::seed_from_u64(2),
//!     )
//!     .unwrap();
//!
//! println!("{} plants", plants);
//! ```

pub extern crate flora_algorithms;
pub extern crate flora_extra;
pub extern crate flora_plant;

pub use flora_algorithms as algorithms;
pub use flora_extra as extra;
pub use flora_plant as plant;
pub use plant::geom;
pub use plant::path;

pub use path::math;
