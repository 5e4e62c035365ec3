//! Error types for pairing-core.

use thiserror::Error;

/// Result type alias using PairError.
pub type Result<T> = std::result::Result<T, PairError>;

/// Errors raised while validating pair input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PairError {
    #[error("term must not be empty")]
    EmptyTerm,

    #[error("match must not be empty")]
    EmptyMatch,

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("a pair needs a concrete category, not \"all\"")]
    CategoryRequired,
}
