//! Error module containing error types and result aliases

mod cycle_error;

pub use cycle_error::CycleError;

/// Result type for decomposition and cycle statistics
pub type Result<T> = std::result::Result<T, CycleError>;
