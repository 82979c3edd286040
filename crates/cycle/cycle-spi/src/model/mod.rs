//! Model module containing data structures

mod decomposition_result;
mod time_series;

pub use decomposition_result::DecompositionResult;
pub use time_series::TimeSeries;
