//! Cycle Facade
//!
//! High-level API for business-cycle analysis. Re-exports all public types
//! from the cycle stack for convenient usage.

// Re-export everything from API (which includes SPI and core)
pub use cycle_api::*;

// Explicit re-exports for documentation
pub use cycle_api::prelude;

// Re-export core modules for direct access
pub use cycle_core::{alignment, banded, comparison, hp_filter, statistics};

// Re-export SPI traits
pub use cycle_spi::{CycleStatistic, TrendFilter};
