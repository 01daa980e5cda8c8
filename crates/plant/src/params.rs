//! The tunable knobs of a plant.
//!
//! `PlantParameters` is an immutable snapshot: whoever owns the controls builds a new
//! value and requests a redraw with it. Defaults match the initial state of the
//! control panel.

use crate::error::ConfigError;
use crate::geom::Easing;
use crate::nodes::NodeKind;

/// Shape of the stem when it is not randomized.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct StemParameters {
    /// Horizontal offset of the tip, relative to the plant height. Typically in `[-0.5, 0.5]`.
    pub bend: f32,
    /// Distance between the control point and the tip, relative to the plant height.
    ///
    /// `0.5` puts the control point halfway up a vertical stem.
    pub curve: f32,
}

impl Default for StemParameters {
    fn default() -> Self {
        StemParameters {
            bend: 0.0,
            curve: 0.5,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serialization", serde(rename_all = "camelCase"))]
pub struct NodeParameters {
    #[cfg_attr(feature = "serialization", serde(rename = "type"))]
    pub kind: NodeKind,
    pub count: u32,
    /// Extra rotation of the nodes, in radians.
    pub angle: f32,
    /// Size of the nodes relative to the plant height, before tapering.
    pub size: f32,
    pub size_ease: Easing,
    /// Where the nodes are the largest, relative to the progress range.
    pub size_mod_pos: f32,
    pub progress_from: f32,
    pub progress_to: f32,
}

impl Default for NodeParameters {
    fn default() -> Self {
        NodeParameters {
            kind: NodeKind::Branch,
            count: 5,
            angle: 0.0,
            size: 0.25,
            size_ease: Easing::QuadIn,
            size_mod_pos: 0.5,
            progress_from: 0.0,
            progress_to: 1.0,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LeafParameters {
    /// Position of the widest part of the leaf along its length, in `[0, 1]`.
    pub shape: f32,
    /// Width of the leaf relative to its length.
    pub thickness: f32,
}

impl Default for LeafParameters {
    fn default() -> Self {
        LeafParameters {
            shape: 0.5,
            thickness: 0.41,
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct PetalParameters {
    pub count: u32,
    /// Petal length relative to the plant height.
    pub size: f32,
    /// Pistil radius relative to the petal length.
    pub shape: f32,
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct FlowerParameters {
    /// Rotation of the flower head, in radians.
    #[cfg_attr(feature = "serialization", serde(default))]
    pub angle: f32,
    pub petals: PetalParameters,
}

impl Default for FlowerParameters {
    fn default() -> Self {
        FlowerParameters {
            angle: 0.0,
            petals: PetalParameters {
                count: 9,
                size: 0.16,
                shape: 0.21,
            },
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct PlantParameters {
    /// Number of candidate positions when scattering plants in a silhouette.
    pub count: u32,
    /// Plant height as a percentage of the surface height.
    pub size: f32,
    pub stem: StemParameters,
    pub nodes: NodeParameters,
    pub leaves: LeafParameters,
    /// `None` for plants without a flower head.
    pub flower: Option<FlowerParameters>,
}

impl Default for PlantParameters {
    fn default() -> Self {
        PlantParameters {
            count: 2000,
            size: 30.0,
            stem: StemParameters::default(),
            nodes: NodeParameters::default(),
            leaves: LeafParameters::default(),
            flower: Some(FlowerParameters::default()),
        }
    }
}

fn finite(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ConfigError::NonFinite { field })
    }
}

fn progress(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    let value = finite(field, value)?;
    if !(0.0..=1.0).contains(&value) {
        return Err(ConfigError::ProgressOutOfRange { field, value });
    }

    Ok(value)
}

fn non_negative(field: &'static str, value: f32) -> Result<f32, ConfigError> {
    let value = finite(field, value)?;
    if value < 0.0 {
        return Err(ConfigError::NegativeSize { field, value });
    }

    Ok(value)
}

impl PlantParameters {
    /// Checks every parameter, failing on the first invalid one.
    ///
    /// Zero sizes and empty progress ranges are valid: they produce nothing or
    /// degenerate shapes rather than errors.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = finite("size", self.size)?;
        if !(0.0..=100.0).contains(&size) {
            return Err(ConfigError::InvalidPlantSize(size));
        }

        finite("stem.bend", self.stem.bend)?;
        finite("stem.curve", self.stem.curve)?;

        self.nodes.validate()?;

        non_negative("leaves.shape", self.leaves.shape)?;
        non_negative("leaves.thickness", self.leaves.thickness)?;

        if let Some(flower) = &self.flower {
            finite("flower.angle", flower.angle)?;
            non_negative("flower.petals.size", flower.petals.size)?;
            non_negative("flower.petals.shape", flower.petals.shape)?;
        }

        Ok(())
    }
}

impl NodeParameters {
    pub fn validate(&self) -> Result<(), ConfigError> {
        finite("nodes.angle", self.angle)?;
        non_negative("nodes.size", self.size)?;
        progress("nodes.sizeModPos", self.size_mod_pos)?;
        let from = progress("nodes.progressFrom", self.progress_from)?;
        let to = progress("nodes.progressTo", self.progress_to)?;
        if from > to {
            return Err(ConfigError::InvertedProgressRange { from, to });
        }

        Ok(())
    }
}

/// Looks an easing up by name (`"quadIn"`, `"elasticInOut"`, ...).
pub fn easing_by_name(name: &str) -> Result<Easing, ConfigError> {
    Ok(Easing::from_name(name)?)
}

#[test]
fn defaults_are_valid() {
    let params = PlantParameters::default();
    assert_eq!(params.validate(), Ok(()));
    assert_eq!(params.nodes.size_ease, Easing::QuadIn);
    assert_eq!(params.nodes.kind, NodeKind::Branch);
    assert_eq!(params.flower.map(|f| f.petals.count), Some(9));
}

#[test]
fn inverted_progress_range() {
    let mut params = PlantParameters::default();
    params.nodes.progress_from = 0.8;
    params.nodes.progress_to = 0.2;
    assert_eq!(
        params.validate(),
        Err(ConfigError::InvertedProgressRange { from: 0.8, to: 0.2 })
    );

    // Empty ranges are fine.
    params.nodes.progress_to = 0.8;
    assert_eq!(params.validate(), Ok(()));
}

#[test]
fn out_of_range_values() {
    let mut params = PlantParameters::default();
    params.nodes.size_mod_pos = 1.5;
    assert_eq!(
        params.validate(),
        Err(ConfigError::ProgressOutOfRange {
            field: "nodes.sizeModPos",
            value: 1.5
        })
    );

    let mut params = PlantParameters::default();
    params.size = -1.0;
    assert_eq!(params.validate(), Err(ConfigError::InvalidPlantSize(-1.0)));

    let mut params = PlantParameters::default();
    params.leaves.thickness = -0.1;
    assert_eq!(
        params.validate(),
        Err(ConfigError::NegativeSize {
            field: "leaves.thickness",
            value: -0.1
        })
    );
}

#[test]
fn non_finite_values() {
    let mut params = PlantParameters::default();
    params.nodes.angle = f32::NAN;
    assert_eq!(
        params.validate(),
        Err(ConfigError::NonFinite {
            field: "nodes.angle"
        })
    );

    let mut params = PlantParameters::default();
    params.flower = Some(FlowerParameters {
        angle: f32::INFINITY,
        ..FlowerParameters::default()
    });
    assert_eq!(
        params.validate(),
        Err(ConfigError::NonFinite {
            field: "flower.angle"
        })
    );

    // Without a flower its parameters are not checked.
    params.flower = None;
    assert_eq!(params.validate(), Ok(()));
}

#[test]
fn unknown_easing_name() {
    assert_eq!(easing_by_name("sineInOut"), Ok(Easing::SineInOut));
    match easing_by_name("wobbly") {
        Err(ConfigError::UnknownEasing(e)) => assert_eq!(e.name, "wobbly"),
        other => panic!("{:?}", other),
    }
}
