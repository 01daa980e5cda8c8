use crate::geom::easing::UnknownEasing;

use thiserror::Error;

/// An invalid plant configuration.
///
/// Reported before any geometry is computed, so that bad parameters never turn into
/// NaN coordinates.
#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq)]
pub enum ConfigError {
    #[error(transparent)]
    UnknownEasing(#[from] UnknownEasing),
    #[error("Progress range is inverted: from {from} to {to}.")]
    InvertedProgressRange { from: f32, to: f32 },
    #[error("{field} must be within [0, 1], got {value}.")]
    ProgressOutOfRange { field: &'static str, value: f32 },
    #[error("{field} is not a finite number.")]
    NonFinite { field: &'static str },
    #[error("{field} must not be negative, got {value}.")]
    NegativeSize { field: &'static str, value: f32 },
    #[error("Plant size must be a percentage within [0, 100], got {0}.")]
    InvalidPlantSize(f32),
}
