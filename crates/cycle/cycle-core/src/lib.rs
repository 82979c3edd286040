//! Cycle Core
//!
//! Core implementations for Hodrick-Prescott trend/cycle decomposition,
//! the banded solver behind it, and cyclical statistics.

pub mod alignment;
pub mod banded;
pub mod comparison;
pub mod hp_filter;
pub mod statistics;

// Re-export SPI types for implementations
pub use cycle_spi::{
    CycleError, CycleStatistic, DecompositionResult, Result, TimeSeries, TrendFilter,
};

// Re-export main types
pub use alignment::{align, AlignedPair};
pub use banded::{solve_pentadiagonal, LdlFactor, PentadiagonalSystem};
pub use comparison::CycleComparison;
pub use hp_filter::{decompose, decompose_many, HodrickPrescott};
pub use statistics::{
    correlation, cycle_volatility, cycle_volatility_with, percent_deviation, StdDevKind,
    Volatility,
};
