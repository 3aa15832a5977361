use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("document payload must be an object, got {0}")]
    NotAnObject(&'static str),

    #[error("document id must not be empty")]
    EmptyId,
}

/// Result alias for type operations.
pub type TypeResult<T> = Result<T, TypeError>;
