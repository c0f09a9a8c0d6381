use thiserror::Error;

#[derive(Debug, Error)]
pub enum HazardError {
    #[error("hazard timeline parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type HazardResult<T> = Result<T, HazardError>;
