//! Decomposition and statistics configuration types.

use crate::frequency::Frequency;
use cycle_core::{
    cycle_volatility_with, decompose, decompose_many, percent_deviation, CycleComparison,
    CycleError, DecompositionResult, HodrickPrescott, Result, StdDevKind, TimeSeries,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Configuration for HP filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Smoothing parameters, one decomposition per entry
    pub lambdas: Vec<f64>,
    /// Take the natural log of the input before filtering
    #[serde(default)]
    pub log_transform: bool,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            lambdas: vec![Frequency::Quarterly.recommended_lambda()],
            log_transform: false,
        }
    }
}

impl FilterConfig {
    /// Single smoothing parameter, no log transform.
    pub fn new(lambda: f64) -> Self {
        Self {
            lambdas: vec![lambda],
            log_transform: false,
        }
    }

    /// Conventional smoothing parameter for data sampled at `frequency`.
    pub fn for_frequency(frequency: Frequency) -> Self {
        Self::new(frequency.recommended_lambda())
    }

    /// Check that at least one lambda is set and every lambda is valid.
    pub fn validate(&self) -> Result<()> {
        if self.lambdas.is_empty() {
            return Err(CycleError::invalid(
                "lambdas",
                "no smoothing parameter configured",
            ));
        }
        self.filters().map(|_| ())
    }

    /// One filter per configured lambda.
    pub fn filters(&self) -> Result<Vec<HodrickPrescott>> {
        self.lambdas.iter().map(|&l| HodrickPrescott::new(l)).collect()
    }

    /// The first configured lambda, used where a single decomposition is needed.
    pub fn primary_lambda(&self) -> Result<f64> {
        self.lambdas
            .first()
            .copied()
            .ok_or_else(|| CycleError::invalid("lambdas", "no smoothing parameter configured"))
    }

    /// Apply the configured input transform.
    pub fn prepare(&self, series: &TimeSeries) -> Result<TimeSeries> {
        if self.log_transform {
            series.ln()
        } else {
            Ok(series.clone())
        }
    }

    /// Prepare `series` and decompose it at every configured lambda.
    pub fn run(&self, series: &TimeSeries) -> Result<Vec<DecompositionResult>> {
        self.validate()?;
        let input = self.prepare(series)?;
        debug!(
            n = input.len(),
            lambdas = self.lambdas.len(),
            log_transform = self.log_transform,
            "running filter config"
        );
        decompose_many(&input, &self.lambdas)
    }
}

/// Builder for FilterConfig.
#[derive(Debug, Default)]
pub struct FilterConfigBuilder {
    lambdas: Vec<f64>,
    frequency: Option<Frequency>,
    log_transform: bool,
}

impl FilterConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a smoothing parameter.
    pub fn lambda(mut self, lambda: f64) -> Self {
        self.lambdas.push(lambda);
        self
    }

    /// Add several smoothing parameters.
    pub fn lambdas(mut self, lambdas: &[f64]) -> Self {
        self.lambdas.extend_from_slice(lambdas);
        self
    }

    /// Use the recommended lambda for `frequency` when none is set explicitly.
    pub fn frequency(mut self, frequency: Frequency) -> Self {
        self.frequency = Some(frequency);
        self
    }

    /// Log-transform input before filtering.
    pub fn log_transform(mut self, enabled: bool) -> Self {
        self.log_transform = enabled;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> Result<FilterConfig> {
        let lambdas = match (self.lambdas.is_empty(), self.frequency) {
            (false, _) => self.lambdas,
            (true, Some(frequency)) => vec![frequency.recommended_lambda()],
            (true, None) => {
                return Err(CycleError::invalid(
                    "lambda",
                    "set a smoothing parameter or a frequency",
                ))
            }
        };

        let config = FilterConfig {
            lambdas,
            log_transform: self.log_transform,
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration for cycle statistics.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct StatisticsConfig {
    /// Standard deviation convention
    #[serde(default)]
    pub std_dev: StdDevKind,
    /// Report volatility in percent (for cycles of log series).
    ///
    /// Applies to [`StatisticsConfig::volatility`] only. A [`CycleComparison`]
    /// always holds raw values and exposes percent through its `*_percent`
    /// accessors.
    #[serde(default)]
    pub percent: bool,
}

impl StatisticsConfig {
    /// Cycle volatility under this configuration.
    pub fn volatility(&self, cycle: &TimeSeries) -> Result<f64> {
        let std = cycle_volatility_with(cycle, self.std_dev)?;
        Ok(if self.percent {
            percent_deviation(std)
        } else {
            std
        })
    }
}

/// Full analysis configuration: how to filter and how to summarise.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AnalysisConfig {
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub statistics: StatisticsConfig,
}

impl AnalysisConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| CycleError::invalid("config", e.to_string()))?;
        config.filter.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| CycleError::invalid("config", e.to_string()))
    }

    /// Filter two series at the primary lambda and compare their cycles.
    ///
    /// Uses `statistics.std_dev`. Volatilities in the result are raw, whatever
    /// `statistics.percent` says.
    pub fn compare_series(
        &self,
        left_label: &str,
        left: &TimeSeries,
        right_label: &str,
        right: &TimeSeries,
    ) -> Result<CycleComparison> {
        let lambda = self.filter.primary_lambda()?;
        let left = decompose(&self.filter.prepare(left)?, lambda)?;
        let right = decompose(&self.filter.prepare(right)?, lambda)?;
        CycleComparison::compare(left_label, &left, right_label, &right, self.statistics.std_dev)
    }
}
