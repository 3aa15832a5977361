/// Errors from helpers layered over a [`MultiLoadResult`](crate::MultiLoadResult).
///
/// The aggregate's own construction and accessors are infallible.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ResultError {
    /// The request id list and the result slots disagree in length.
    #[error("requested {requested} ids but result has {results} slots")]
    LengthMismatch { requested: usize, results: usize },
}

/// Result alias for aggregate helpers.
pub type ResultResult<T> = Result<T, ResultError>;
