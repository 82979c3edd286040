//! Decomposition result model

use crate::error::{CycleError, Result};
use crate::model::TimeSeries;
use serde::{Deserialize, Serialize};

/// Trend and cycle components of a filtered series.
///
/// Both components carry the timestamps of the input and satisfy
/// `trend[t] + cycle[t] == original[t]` up to rounding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDecomposition")]
pub struct DecompositionResult {
    trend: TimeSeries,
    cycle: TimeSeries,
    lambda: f64,
}

#[derive(Deserialize)]
struct RawDecomposition {
    trend: TimeSeries,
    cycle: TimeSeries,
    lambda: f64,
}

impl TryFrom<RawDecomposition> for DecompositionResult {
    type Error = CycleError;

    fn try_from(raw: RawDecomposition) -> Result<Self> {
        DecompositionResult::new(raw.trend, raw.cycle, raw.lambda)
    }
}

impl DecompositionResult {
    /// Pair a trend with its cycle. The two must share timestamps and
    /// `lambda` must be finite and positive.
    pub fn new(trend: TimeSeries, cycle: TimeSeries, lambda: f64) -> Result<Self> {
        if !lambda.is_finite() || lambda <= 0.0 {
            return Err(CycleError::invalid(
                "lambda",
                format!("must be finite and positive, got {}", lambda),
            ));
        }
        if trend.timestamps() != cycle.timestamps() {
            return Err(CycleError::invalid(
                "cycle",
                "trend and cycle must share the same timestamps",
            ));
        }
        Ok(Self {
            trend,
            cycle,
            lambda,
        })
    }

    pub fn trend(&self) -> &TimeSeries {
        &self.trend
    }

    pub fn cycle(&self) -> &TimeSeries {
        &self.cycle
    }

    /// Smoothing parameter the decomposition was computed with
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    pub fn len(&self) -> usize {
        self.trend.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trend.is_empty()
    }

    /// Rebuild the original series as `trend + cycle`.
    pub fn reconstruct(&self) -> Result<TimeSeries> {
        let values = self
            .trend
            .values()
            .iter()
            .zip(self.cycle.values())
            .map(|(t, c)| t + c)
            .collect();
        self.trend.with_values(values)
    }

    pub fn into_parts(self) -> (TimeSeries, TimeSeries) {
        (self.trend, self.cycle)
    }
}
