//! Observation frequency and the conventional smoothing parameters for it.

use serde::{Deserialize, Serialize};

/// Sampling frequency of an economic time series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    /// One observation per year
    Annual,
    /// Four observations per year
    Quarterly,
    /// Twelve observations per year
    Monthly,
}

/// Benchmark lambda for quarterly data (Hodrick & Prescott, 1997)
pub const QUARTERLY_LAMBDA: f64 = 1600.0;

impl Frequency {
    pub fn periods_per_year(&self) -> u32 {
        match self {
            Frequency::Annual => 1,
            Frequency::Quarterly => 4,
            Frequency::Monthly => 12,
        }
    }

    /// Ravn-Uhlig (2002) rule: lambda scales with the fourth power of the
    /// frequency relative to quarterly. Annual 6.25, monthly 129600.
    pub fn ravn_uhlig_lambda(&self) -> f64 {
        QUARTERLY_LAMBDA * self.relative_to_quarterly().powi(4)
    }

    /// Square rule from the original Hodrick-Prescott paper. Annual 100,
    /// monthly 14400.
    pub fn hodrick_prescott_lambda(&self) -> f64 {
        QUARTERLY_LAMBDA * self.relative_to_quarterly().powi(2)
    }

    /// Default smoothing parameter (Ravn-Uhlig)
    pub fn recommended_lambda(&self) -> f64 {
        self.ravn_uhlig_lambda()
    }

    fn relative_to_quarterly(&self) -> f64 {
        self.periods_per_year() as f64 / 4.0
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Frequency::Annual => "Annual",
            Frequency::Quarterly => "Quarterly",
            Frequency::Monthly => "Monthly",
        };
        write!(f, "{}", s)
    }
}
