//! Hodrick-Prescott trend/cycle decomposition
//!
//! The trend τ minimises
//!
//! ```text
//! Σ (y_t − τ_t)² + λ · Σ [(τ_{t+1} − τ_t) − (τ_t − τ_{t−1})]²
//! ```
//!
//! which is the linear system `(I + λ·DᵀD) τ = y`. The cycle is `y − τ`.

use crate::banded::PentadiagonalSystem;
use cycle_spi::{CycleError, DecompositionResult, Result, TimeSeries, TrendFilter};
use tracing::{debug, warn};

/// Fewest observations for which the second-difference operator exists
pub const MIN_OBSERVATIONS: usize = 3;

/// Hodrick-Prescott filter with a fixed smoothing parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HodrickPrescott {
    lambda: f64,
}

impl HodrickPrescott {
    /// Create a new Hodrick-Prescott filter
    ///
    /// # Arguments
    /// * `lambda` - Smoothing parameter, finite and positive
    ///   - Annual data: 6.25 (Ravn-Uhlig) or 100
    ///   - Quarterly data: 1600
    ///   - Monthly data: 129600 (Ravn-Uhlig) or 14400
    pub fn new(lambda: f64) -> Result<Self> {
        validate_lambda(lambda)?;
        Ok(Self { lambda })
    }

    /// Trend component of a raw slice
    pub fn trend(&self, data: &[f64]) -> Result<Vec<f64>> {
        check_length(data.len())?;
        hp_trend(data, self.lambda)
    }
}

impl TrendFilter for HodrickPrescott {
    fn name(&self) -> &str {
        "Hodrick-Prescott"
    }

    fn lambda(&self) -> f64 {
        self.lambda
    }

    fn decompose(&self, series: &TimeSeries) -> Result<DecompositionResult> {
        decompose(series, self.lambda)
    }
}

/// Split `series` into HP trend and cycle at smoothing parameter `lambda`.
///
/// Fails with `InvalidArgument` for fewer than 3 observations or a lambda
/// that is not finite and positive, and with `NumericalFailure` if the solve
/// breaks down.
pub fn decompose(series: &TimeSeries, lambda: f64) -> Result<DecompositionResult> {
    validate_lambda(lambda)?;
    check_length(series.len())?;

    debug!(n = series.len(), lambda, "hp filter decomposition");

    let trend = hp_trend(series.values(), lambda)?;
    let cycle: Vec<f64> = series
        .values()
        .iter()
        .zip(&trend)
        .map(|(y, t)| y - t)
        .collect();

    DecompositionResult::new(series.with_values(trend)?, series.with_values(cycle)?, lambda)
}

/// Decompose `series` once per smoothing parameter, in the order given.
pub fn decompose_many(series: &TimeSeries, lambdas: &[f64]) -> Result<Vec<DecompositionResult>> {
    lambdas
        .iter()
        .map(|&lambda| decompose(series, lambda))
        .collect()
}

/// Reject smoothing parameters that are zero, negative, NaN or infinite.
pub fn validate_lambda(lambda: f64) -> Result<()> {
    if !lambda.is_finite() || lambda <= 0.0 {
        return Err(CycleError::invalid(
            "lambda",
            format!("must be finite and positive, got {}", lambda),
        ));
    }
    Ok(())
}

fn check_length(n: usize) -> Result<()> {
    if n < MIN_OBSERVATIONS {
        return Err(CycleError::invalid(
            "series",
            format!(
                "need at least {} observations, got {}",
                MIN_OBSERVATIONS, n
            ),
        ));
    }
    Ok(())
}

fn hp_trend(data: &[f64], lambda: f64) -> Result<Vec<f64>> {
    PentadiagonalSystem::hp_penalty(data.len(), lambda)
        .factor()
        .and_then(|factor| factor.solve(data))
        .map_err(|err| {
            warn!(n = data.len(), lambda, error = %err, "hp filter solve failed");
            err
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::{DMatrix, DVector};

    fn series(values: &[f64]) -> TimeSeries {
        TimeSeries::from_values(values.to_vec()).unwrap()
    }

    /// Log-GDP-like quarterly series: linear growth, a slow cycle and noise
    fn log_gdp(n: usize) -> Vec<f64> {
        (0..n)
            .map(|i| {
                let t = i as f64;
                11.0 + 0.005 * t + 0.02 * (t * 0.2).sin() + 0.003 * ((i * 7) % 5) as f64
            })
            .collect()
    }

    fn dense_trend(data: &[f64], lambda: f64) -> Vec<f64> {
        let n = data.len();
        let mut d = DMatrix::<f64>::zeros(n - 2, n);
        for k in 0..n - 2 {
            d[(k, k)] = 1.0;
            d[(k, k + 1)] = -2.0;
            d[(k, k + 2)] = 1.0;
        }
        let a = DMatrix::<f64>::identity(n, n) + d.transpose() * &d * lambda;
        a.lu()
            .solve(&DVector::from_column_slice(data))
            .unwrap()
            .iter()
            .copied()
            .collect()
    }

    #[test]
    fn test_three_point_closed_form() {
        // (I + DᵀD) τ = [1, 4, 2] has the exact solution [12, 18, 19] / 7
        let result = decompose(&series(&[1.0, 4.0, 2.0]), 1.0).unwrap();
        let expected = [12.0 / 7.0, 18.0 / 7.0, 19.0 / 7.0];
        for (t, e) in result.trend().values().iter().zip(expected.iter()) {
            assert!((t - e).abs() < 1e-12, "{} vs {}", t, e);
        }
    }

    #[test]
    fn test_components_sum_to_original() {
        let data = log_gdp(120);
        let input = series(&data);
        for lambda in [1.0, 10.0, 100.0, 1600.0, 129_600.0] {
            let result = decompose(&input, lambda).unwrap();
            for ((t, c), y) in result
                .trend()
                .values()
                .iter()
                .zip(result.cycle().values())
                .zip(&data)
            {
                assert!((t + c - y).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_matches_dense_solve() {
        let data = log_gdp(200);
        let input = series(&data);
        for lambda in [1.0, 10.0, 100.0, 1600.0, 129_600.0] {
            let banded = decompose(&input, lambda).unwrap();
            let dense = dense_trend(&data, lambda);
            for (a, b) in banded.trend().values().iter().zip(&dense) {
                assert!(
                    (a - b).abs() <= 1e-9 * b.abs().max(1.0),
                    "lambda {}: {} vs {}",
                    lambda,
                    a,
                    b
                );
            }
        }
    }

    #[test]
    fn test_linear_series_has_zero_cycle() {
        let result = decompose(&series(&[1.0, 2.0, 3.0, 4.0, 5.0]), 1600.0).unwrap();
        for c in result.cycle().values() {
            assert!(c.abs() < 1e-6);
        }
    }

    #[test]
    fn test_alternating_series_trend_tracks_mean() {
        let data = [1.0, 3.0, 1.0, 3.0, 1.0, 3.0];
        let result = decompose(&series(&data), 1.0).unwrap();
        let trend = result.trend().values();

        // Interior points sit close to the mean of 2.0
        for t in &trend[1..5] {
            assert!((t - 2.0).abs() < 0.1, "trend {}", t);
        }
        for t in trend {
            assert!((t - 2.0).abs() < 0.6);
        }
        // Most of the oscillation lands in the cycle
        for c in result.cycle().values() {
            assert!(c.abs() > 0.4, "cycle {}", c);
        }
    }

    #[test]
    fn test_trend_preserves_mean() {
        let data = log_gdp(60);
        let mean = data.iter().sum::<f64>() / data.len() as f64;
        for lambda in [0.5, 100.0, 1600.0] {
            let trend = HodrickPrescott::new(lambda).unwrap().trend(&data).unwrap();
            let trend_mean = trend.iter().sum::<f64>() / trend.len() as f64;
            assert!((trend_mean - mean).abs() < 1e-9);
        }
    }

    #[test]
    fn test_small_lambda_trend_follows_data() {
        let data = log_gdp(50);
        let result = decompose(&series(&data), 1e-8).unwrap();
        for (t, y) in result.trend().values().iter().zip(&data) {
            assert!((t - y).abs() < 1e-6);
        }
    }

    #[test]
    fn test_large_lambda_trend_is_linear_fit() {
        let data: Vec<f64> = (0..40)
            .map(|i| 2.0 + 0.5 * i as f64 + ((i * 13) % 7) as f64 / 7.0 - 0.5)
            .collect();
        let result = decompose(&series(&data), 1e9).unwrap();

        // Ordinary least squares line through (i, y_i)
        let n = data.len() as f64;
        let x_mean = (n - 1.0) / 2.0;
        let y_mean = data.iter().sum::<f64>() / n;
        let sxy: f64 = data
            .iter()
            .enumerate()
            .map(|(i, y)| (i as f64 - x_mean) * (y - y_mean))
            .sum();
        let sxx: f64 = (0..data.len()).map(|i| (i as f64 - x_mean).powi(2)).sum();
        let slope = sxy / sxx;

        for (i, t) in result.trend().values().iter().enumerate() {
            let fitted = y_mean + slope * (i as f64 - x_mean);
            assert!((t - fitted).abs() < 1e-3, "{}: {} vs {}", i, t, fitted);
        }
    }

    #[test]
    fn test_smoother_trend_with_larger_lambda() {
        let data = log_gdp(80);
        let roughness = |lambda: f64| -> f64 {
            let trend = HodrickPrescott::new(lambda).unwrap().trend(&data).unwrap();
            trend
                .windows(3)
                .map(|w| (w[2] - 2.0 * w[1] + w[0]).powi(2))
                .sum()
        };
        assert!(roughness(10.0) > roughness(100.0));
        assert!(roughness(100.0) > roughness(1600.0));
    }

    #[test]
    fn test_preserves_timestamps() {
        let input = TimeSeries::new(vec![10, 20, 30, 40], vec![1.0, 2.5, 2.0, 4.0]).unwrap();
        let result = decompose(&input, 100.0).unwrap();
        assert_eq!(result.trend().timestamps(), input.timestamps());
        assert_eq!(result.cycle().timestamps(), input.timestamps());
        assert_eq!(result.lambda(), 100.0);
    }

    #[test]
    fn test_short_series_rejected() {
        for data in [vec![], vec![1.0], vec![1.0, 2.0]] {
            let result = decompose(&series(&data), 1600.0);
            assert!(matches!(result, Err(CycleError::InvalidArgument { .. })));
        }
    }

    #[test]
    fn test_invalid_lambda_rejected() {
        let input = series(&[1.0, 2.0, 3.0, 4.0]);
        for lambda in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = decompose(&input, lambda);
            assert!(
                matches!(result, Err(CycleError::InvalidArgument { ref name, .. }) if name == "lambda"),
                "lambda {} accepted",
                lambda
            );
        }
        assert!(HodrickPrescott::new(0.0).is_err());
    }

    #[test]
    fn test_decompose_many_keeps_order() {
        let input = series(&log_gdp(30));
        let results = decompose_many(&input, &[10.0, 100.0, 1600.0]).unwrap();
        let lambdas: Vec<f64> = results.iter().map(|r| r.lambda()).collect();
        assert_eq!(lambdas, vec![10.0, 100.0, 1600.0]);
    }

    #[test]
    fn test_decompose_many_fails_on_bad_lambda() {
        let input = series(&log_gdp(30));
        assert!(decompose_many(&input, &[10.0, -5.0]).is_err());
    }

    #[test]
    fn test_trend_filter_impl() {
        let filter = HodrickPrescott::new(1600.0).unwrap();
        assert_eq!(filter.name(), "Hodrick-Prescott");
        assert_eq!(filter.lambda(), 1600.0);

        let input = series(&log_gdp(20));
        let via_trait = filter.decompose(&input).unwrap();
        let direct = decompose(&input, 1600.0).unwrap();
        assert_eq!(via_trait, direct);
    }

    #[test]
    fn test_raw_trend_rejects_short_slice() {
        let filter = HodrickPrescott::new(10.0).unwrap();
        assert!(filter.trend(&[1.0, 2.0]).is_err());
    }
}
