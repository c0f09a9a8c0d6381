use fr_behavior::BehaviorError;
use fr_spatial::SpatialError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    /// Structural input failure; the simulation cannot be built.
    #[error("simulation setup failed: {0}")]
    Setup(String),

    #[error("behavior configuration: {0}")]
    Behavior(#[from] BehaviorError),

    #[error("spatial error: {0}")]
    Spatial(#[from] SpatialError),
}

pub type SimResult<T> = Result<T, SimError>;
