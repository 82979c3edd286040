//! Cycle Consumer API
//!
//! Consumer configurations and builder APIs for business-cycle analysis.
//!
//! This crate provides:
//! - Configuration types for filtering and cycle statistics
//! - Smoothing-parameter conventions per observation frequency
//! - Re-exports from SPI and core for convenience

pub mod config;
pub mod frequency;

pub use config::{AnalysisConfig, FilterConfig, FilterConfigBuilder, StatisticsConfig};
pub use frequency::Frequency;

// Re-export from core
pub use cycle_core::{
    align, alignment, banded, comparison, correlation, cycle_volatility, cycle_volatility_with,
    decompose, decompose_many, hp_filter, percent_deviation, statistics, AlignedPair,
    CycleComparison, HodrickPrescott, PentadiagonalSystem, StdDevKind, Volatility,
};

// Re-export traits and model from SPI
pub use cycle_spi::{
    CycleError, CycleStatistic, DecompositionResult, Result, TimeSeries, TrendFilter,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{AnalysisConfig, FilterConfig, FilterConfigBuilder, Frequency, StatisticsConfig};
    pub use cycle_core::{
        correlation, cycle_volatility, cycle_volatility_with, decompose, decompose_many,
        percent_deviation, CycleComparison, HodrickPrescott, StdDevKind, Volatility,
    };
    pub use cycle_spi::{
        CycleError, CycleStatistic, DecompositionResult, Result, TimeSeries, TrendFilter,
    };
}
