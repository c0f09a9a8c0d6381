//! Survey-loading error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SurveyError {
    /// No header contains the required column fragment.
    #[error("survey has no column matching {0:?}")]
    MissingColumn(&'static str),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SurveyResult<T> = Result<T, SurveyError>;
