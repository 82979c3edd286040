//! Trait for scalar statistics computed on a cycle series

use crate::error::Result;
use crate::model::TimeSeries;

/// Trait for a scalar summary of a single cycle series
pub trait CycleStatistic: Send + Sync {
    /// Statistic name used in reports
    fn name(&self) -> &str;

    /// Compute the statistic over the values of `cycle`
    fn compute(&self, cycle: &TimeSeries) -> Result<f64>;
}
