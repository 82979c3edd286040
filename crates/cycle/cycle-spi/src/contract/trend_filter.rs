//! Trait for trend/cycle filters

use crate::error::Result;
use crate::model::{DecompositionResult, TimeSeries};

/// Trait for filters that split a series into an additive trend and cycle
pub trait TrendFilter: Send + Sync {
    /// Human-readable filter name
    fn name(&self) -> &str;

    /// Smoothing parameter controlling trend rigidity
    fn lambda(&self) -> f64;

    /// Decompose `series` into trend and cycle without mutating it
    fn decompose(&self, series: &TimeSeries) -> Result<DecompositionResult>;
}
