//! Framework error type.
//!
//! Raised when parsing core value types from text; currently only the
//! scenario name. Sub-crates define their own error enums.

use thiserror::Error;

/// The top-level error type for `fr-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum FrError {
    #[error("unknown scenario {0:?}")]
    UnknownScenario(String),
}

/// Shorthand result type for all `fr-*` crates.
pub type FrResult<T> = Result<T, FrError>;
