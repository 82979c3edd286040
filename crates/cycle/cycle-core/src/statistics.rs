//! Cyclical statistics
//!
//! Volatility and cross-series correlation of cycle components. Values are
//! taken as given: a cycle computed from log levels reads as a proportional
//! deviation, and [`percent_deviation`] turns its standard deviation into
//! percent. The core never applies that scaling on its own.

use crate::alignment::align;
use cycle_spi::{CycleError, CycleStatistic, Result, TimeSeries};
use serde::{Deserialize, Serialize};

/// Denominator used for the standard deviation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StdDevKind {
    /// Divide by n
    #[default]
    Population,
    /// Divide by n - 1 (pandas `Series.std()` default)
    Sample,
}

impl StdDevKind {
    fn ddof(self) -> usize {
        match self {
            StdDevKind::Population => 0,
            StdDevKind::Sample => 1,
        }
    }
}

/// Standard deviation of the cycle values (population convention).
///
/// Population is the default because the reference volatility of
/// `[0.01, -0.01, 0.02, -0.02]` is 1.58%, which is the ddof 0 value. Use
/// [`cycle_volatility_with`] and [`StdDevKind::Sample`] for the pandas result.
pub fn cycle_volatility(cycle: &TimeSeries) -> Result<f64> {
    cycle_volatility_with(cycle, StdDevKind::default())
}

/// Standard deviation of the cycle values with an explicit convention.
pub fn cycle_volatility_with(cycle: &TimeSeries, kind: StdDevKind) -> Result<f64> {
    std_dev(cycle.values(), kind)
}

/// Scale a standard deviation of log values to percent.
pub fn percent_deviation(std_dev: f64) -> f64 {
    std_dev * 100.0
}

/// Pearson correlation of two cycles over their shared timestamps.
///
/// Fails with `MisalignedSeries` when fewer than two timestamps are shared
/// and with `NumericalFailure` when either side is constant on that window.
pub fn correlation(a: &TimeSeries, b: &TimeSeries) -> Result<f64> {
    let pair = align(a, b)?;
    pearson(pair.left(), pair.right())
}

pub(crate) fn std_dev(values: &[f64], kind: StdDevKind) -> Result<f64> {
    let n = values.len();
    let required = kind.ddof() + 1;
    if n < required {
        return Err(CycleError::invalid(
            "cycle",
            format!(
                "{:?} standard deviation needs at least {} values, got {}",
                kind, required, n
            ),
        ));
    }

    // Work on values scaled into [-1, 1] so sums neither overflow nor underflow
    let scale = max_abs(values);
    if scale == 0.0 {
        return Ok(0.0);
    }

    let mean = values.iter().map(|v| v / scale).sum::<f64>() / n as f64;
    let ss: f64 = values.iter().map(|v| (v / scale - mean).powi(2)).sum();
    let std = scale * (ss / (n - kind.ddof()) as f64).sqrt();
    if !std.is_finite() {
        return Err(CycleError::NumericalFailure(format!(
            "standard deviation overflowed for {} values",
            n
        )));
    }
    Ok(std)
}

pub(crate) fn pearson(x: &[f64], y: &[f64]) -> Result<f64> {
    if is_constant(x) || is_constant(y) {
        return Err(CycleError::NumericalFailure(
            "correlation undefined for a constant series".to_string(),
        ));
    }

    // Correlation is scale invariant
    let (kx, ky) = (max_abs(x), max_abs(y));
    let n = x.len() as f64;
    let mx = x.iter().map(|a| a / kx).sum::<f64>() / n;
    let my = y.iter().map(|b| b / ky).sum::<f64>() / n;

    let (mut sxy, mut sxx, mut syy) = (0.0f64, 0.0f64, 0.0f64);
    for (a, b) in x.iter().zip(y) {
        let (dx, dy) = (a / kx - mx, b / ky - my);
        sxy += dx * dy;
        sxx += dx * dx;
        syy += dy * dy;
    }

    let denom = sxx.sqrt() * syy.sqrt();
    if !(denom.is_finite() && denom > 0.0) {
        return Err(CycleError::NumericalFailure(format!(
            "degenerate variance in correlation (sxx = {}, syy = {})",
            sxx, syy
        )));
    }

    Ok((sxy / denom).clamp(-1.0, 1.0))
}

fn max_abs(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |m: f64, v| m.max(v.abs()))
}

fn is_constant(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[0] == w[1])
}

/// Cycle standard deviation as a pluggable [`CycleStatistic`]
#[derive(Debug, Clone, Copy, Default)]
pub struct Volatility {
    kind: StdDevKind,
}

impl Volatility {
    pub fn new(kind: StdDevKind) -> Self {
        Self { kind }
    }
}

impl CycleStatistic for Volatility {
    fn name(&self) -> &str {
        "volatility"
    }

    fn compute(&self, cycle: &TimeSeries) -> Result<f64> {
        cycle_volatility_with(cycle, self.kind)
    }
}
