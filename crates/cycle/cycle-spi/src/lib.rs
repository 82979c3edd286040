//! Cycle Service Provider Interface
//!
//! Defines the time series model, the error taxonomy, and the traits for
//! trend/cycle filters and cycle statistics.

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{CycleStatistic, TrendFilter};
pub use error::{CycleError, Result};
pub use model::{DecompositionResult, TimeSeries};
