//! Spatial-subsystem error type.

use thiserror::Error;

/// Errors produced by `fr-spatial`.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("zone {0:?} has no geometry")]
    UnknownZone(String),

    #[error("zone {0:?} is defined twice")]
    DuplicateZone(String),

    #[error("invalid polygon for zone {zone:?}: {reason}")]
    InvalidPolygon { zone: String, reason: String },

    #[error("no point found inside zone {zone:?} after {attempts} attempts")]
    SamplingFailed { zone: String, attempts: u32 },
}

pub type SpatialResult<T> = Result<T, SpatialError>;
