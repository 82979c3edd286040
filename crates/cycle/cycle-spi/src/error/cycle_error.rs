//! Cycle decomposition error types

use thiserror::Error;

/// Errors that can occur during trend/cycle decomposition and cycle statistics
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CycleError {
    /// Malformed input: too-short series, non-positive smoothing parameter, etc.
    #[error("Invalid argument '{name}': {reason}")]
    InvalidArgument { name: String, reason: String },

    /// The linear system was singular or the solve produced non-finite values
    #[error("Numerical failure: {0}")]
    NumericalFailure(String),

    /// Two series do not share enough timestamps to be compared
    #[error("Misaligned series: {shared} shared timestamps, need at least {required}")]
    MisalignedSeries { shared: usize, required: usize },
}

impl CycleError {
    /// Shorthand for [`CycleError::InvalidArgument`].
    pub fn invalid(name: &str, reason: impl Into<String>) -> Self {
        CycleError::InvalidArgument {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}
