//! Contract module containing trait definitions for decomposition and statistics

mod cycle_statistic;
mod trend_filter;

pub use cycle_statistic::CycleStatistic;
pub use trend_filter::TrendFilter;
