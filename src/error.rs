use thiserror::Error;

/// Errors raised when validating a k-NN configuration against a training set.
///
/// Both variants are configuration errors, not per-point data errors: they are
/// detected before any scan work begins and abort the whole classification run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KnnError {
    /// `k` must be greater than zero.
    #[error("k must be greater than zero")]
    InvalidK,

    /// `k` exceeds the number of available training points.
    #[error("k = {k} exceeds the {available} available training points")]
    InsufficientTrainingData { k: usize, available: usize },
}

/// Result type for k-NN operations.
pub type Result<T> = std::result::Result<T, KnnError>;
