//! Time series model

use crate::error::{CycleError, Result};
use serde::{Deserialize, Serialize};

/// An ordered sequence of `(timestamp, value)` observations.
///
/// Timestamps are strictly increasing and values are finite. Both are fixed
/// at construction; every transformation returns a new series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTimeSeries")]
pub struct TimeSeries {
    timestamps: Vec<i64>,
    values: Vec<f64>,
}

/// Unvalidated wire shape of a [`TimeSeries`].
#[derive(Deserialize)]
struct RawTimeSeries {
    timestamps: Vec<i64>,
    values: Vec<f64>,
}

impl TryFrom<RawTimeSeries> for TimeSeries {
    type Error = CycleError;

    fn try_from(raw: RawTimeSeries) -> Result<Self> {
        TimeSeries::new(raw.timestamps, raw.values)
    }
}

impl TimeSeries {
    /// Create a series from parallel timestamp and value vectors.
    ///
    /// Fails with `InvalidArgument` when the lengths differ, a timestamp does
    /// not strictly increase, or a value is NaN or infinite.
    pub fn new(timestamps: Vec<i64>, values: Vec<f64>) -> Result<Self> {
        if timestamps.len() != values.len() {
            return Err(CycleError::invalid(
                "values",
                format!(
                    "length {} does not match {} timestamps",
                    values.len(),
                    timestamps.len()
                ),
            ));
        }

        if let Some(i) = timestamps.windows(2).position(|w| w[1] <= w[0]) {
            return Err(CycleError::invalid(
                "timestamps",
                format!(
                    "must be strictly increasing, got {} followed by {}",
                    timestamps[i],
                    timestamps[i + 1]
                ),
            ));
        }

        check_finite(&values)?;

        Ok(Self { timestamps, values })
    }

    /// Create a series indexed by `0..n`.
    pub fn from_values(values: Vec<f64>) -> Result<Self> {
        let timestamps = (0..values.len() as i64).collect();
        Self::new(timestamps, values)
    }

    /// Create a series sharing this series' timestamps but carrying `values`.
    pub fn with_values(&self, values: Vec<f64>) -> Result<Self> {
        if values.len() != self.values.len() {
            return Err(CycleError::invalid(
                "values",
                format!(
                    "length {} does not match {} timestamps",
                    values.len(),
                    self.timestamps.len()
                ),
            ));
        }
        check_finite(&values)?;

        Ok(Self {
            timestamps: self.timestamps.clone(),
            values,
        })
    }

    /// Natural-log transform of every value.
    ///
    /// GDP levels are usually logged before filtering so that the cycle reads
    /// as a proportional deviation from trend.
    pub fn ln(&self) -> Result<Self> {
        if let Some((ts, v)) = self.iter().find(|(_, v)| *v <= 0.0) {
            return Err(CycleError::invalid(
                "values",
                format!("log transform needs positive values, got {} at {}", v, ts),
            ));
        }
        self.with_values(self.values.iter().map(|v| v.ln()).collect())
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn timestamps(&self) -> &[i64] {
        &self.timestamps
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterate over `(timestamp, value)` pairs in time order.
    pub fn iter(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.timestamps.iter().copied().zip(self.values.iter().copied())
    }

    /// Value observed at `timestamp`, if any.
    pub fn value_at(&self, timestamp: i64) -> Option<f64> {
        self.timestamps
            .binary_search(&timestamp)
            .ok()
            .map(|i| self.values[i])
    }
}

fn check_finite(values: &[f64]) -> Result<()> {
    match values.iter().position(|v| !v.is_finite()) {
        Some(i) => Err(CycleError::invalid(
            "values",
            format!("non-finite value {} at position {}", values[i], i),
        )),
        None => Ok(()),
    }
}
