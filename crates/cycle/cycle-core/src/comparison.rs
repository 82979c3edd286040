//! Two-series business-cycle comparison
//!
//! Summarises how two filtered series move: the volatility of each cycle,
//! their ratio, and how closely the cycles co-move over the shared sample.

use crate::alignment::align;
use crate::statistics::{cycle_volatility_with, pearson, percent_deviation, StdDevKind};
use cycle_spi::{CycleError, DecompositionResult, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Volatility and co-movement of two cycle components
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleComparison {
    pub left_label: String,
    pub right_label: String,
    /// Standard deviation of the left cycle over its full sample
    pub left_volatility: f64,
    /// Standard deviation of the right cycle over its full sample
    pub right_volatility: f64,
    /// `left_volatility / right_volatility`
    pub relative_volatility: f64,
    /// Pearson correlation over the shared timestamps
    pub correlation: f64,
    /// Number of shared timestamps
    pub observations: usize,
}

impl CycleComparison {
    /// Compare the cycles of two decompositions.
    pub fn compare(
        left_label: &str,
        left: &DecompositionResult,
        right_label: &str,
        right: &DecompositionResult,
        kind: StdDevKind,
    ) -> Result<Self> {
        let left_volatility = cycle_volatility_with(left.cycle(), kind)?;
        let right_volatility = cycle_volatility_with(right.cycle(), kind)?;
        if right_volatility == 0.0 {
            return Err(CycleError::NumericalFailure(format!(
                "'{}' cycle has zero volatility",
                right_label
            )));
        }

        let pair = align(left.cycle(), right.cycle())?;
        let correlation = pearson(pair.left(), pair.right())?;

        debug!(
            left = left_label,
            right = right_label,
            observations = pair.len(),
            correlation,
            "cycle comparison"
        );

        Ok(Self {
            left_label: left_label.to_string(),
            right_label: right_label.to_string(),
            left_volatility,
            right_volatility,
            relative_volatility: left_volatility / right_volatility,
            correlation,
            observations: pair.len(),
        })
    }

    /// Left volatility in percent, for cycles of log series
    pub fn left_volatility_percent(&self) -> f64 {
        percent_deviation(self.left_volatility)
    }

    /// Right volatility in percent, for cycles of log series
    pub fn right_volatility_percent(&self) -> f64 {
        percent_deviation(self.right_volatility)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hp_filter::decompose;
    use cycle_spi::TimeSeries;

    fn economy(start: i64, n: usize, amplitude: f64, phase: f64) -> TimeSeries {
        let timestamps = (start..start + n as i64).collect();
        let values = (0..n)
            .map(|i| {
                let t = (start + i as i64) as f64;
                10.0 + 0.006 * t + amplitude * (t * 0.35 + phase).sin()
            })
            .collect();
        TimeSeries::new(timestamps, values).unwrap()
    }

    #[test]
    fn test_synchronised_cycles() {
        let uk = decompose(&economy(0, 100, 0.02, 0.0), 1600.0).unwrap();
        let jp = decompose(&economy(0, 100, 0.01, 0.0), 1600.0).unwrap();

        let cmp = CycleComparison::compare("UK", &uk, "Japan", &jp, StdDevKind::Sample).unwrap();
        assert_eq!(cmp.left_label, "UK");
        assert_eq!(cmp.right_label, "Japan");
        assert_eq!(cmp.observations, 100);
        assert!(cmp.correlation > 0.99, "correlation {}", cmp.correlation);
        // Same shape, twice the amplitude
        assert!((cmp.relative_volatility - 2.0).abs() < 0.05);
        assert!((cmp.left_volatility_percent() - cmp.left_volatility * 100.0).abs() < 1e-12);
    }

    #[test]
    fn test_opposite_phase_cycles() {
        let a = decompose(&economy(0, 80, 0.02, 0.0), 1600.0).unwrap();
        let b = decompose(&economy(0, 80, 0.02, std::f64::consts::PI), 1600.0).unwrap();
        let cmp = CycleComparison::compare("A", &a, "B", &b, StdDevKind::Population).unwrap();
        assert!(cmp.correlation < -0.99);
    }

    #[test]
    fn test_partial_overlap_counts_shared_points() {
        let a = decompose(&economy(0, 60, 0.02, 0.0), 1600.0).unwrap();
        let b = decompose(&economy(40, 60, 0.02, 0.0), 1600.0).unwrap();
        let cmp = CycleComparison::compare("A", &a, "B", &b, StdDevKind::Sample).unwrap();
        assert_eq!(cmp.observations, 20);
    }

    #[test]
    fn test_disjoint_samples_fail() {
        let a = decompose(&economy(0, 10, 0.02, 0.0), 1600.0).unwrap();
        let b = decompose(&economy(100, 10, 0.02, 0.0), 1600.0).unwrap();
        let result = CycleComparison::compare("A", &a, "B", &b, StdDevKind::Sample);
        assert!(matches!(result, Err(CycleError::MisalignedSeries { .. })));
    }

    #[test]
    fn test_zero_volatility_reference_fails() {
        let a = decompose(&economy(0, 10, 0.02, 0.0), 1600.0).unwrap();
        let trend = TimeSeries::from_values(vec![1.0; 10]).unwrap();
        let cycle = TimeSeries::from_values(vec![0.0; 10]).unwrap();
        let b = DecompositionResult::new(trend, cycle, 1600.0).unwrap();
        let result = CycleComparison::compare("A", &a, "flat", &b, StdDevKind::Sample);
        assert!(matches!(result, Err(CycleError::NumericalFailure(_))));
    }
}
