//! # lookback
//!
//! Recursive moving-average forecasts and lookback/forecast windowing for
//! time series.
//!
//! - [`models::MovingAverage`] rolls a fixed lookback window forward, feeding
//!   each forecast back in as if it were observed (simple mean or a
//!   geometrically weighted sum).
//! - [`core::Dataset`] slices 1-D or 2-D data into aligned input/target
//!   windows for supervised learning and splits tables into features and
//!   targets.
//!
//! Non-fatal conditions (truncated input, suspicious `alpha`) are reported
//! through [`tracing`]; install a subscriber to see them.

pub mod core;
pub mod error;
pub mod models;

pub use error::{ForecastError, Result};

pub mod prelude {
    pub use crate::core::{ColumnSelection, Dataset, SeriesOptions, Target, WindowPairs, XySplit};
    pub use crate::error::{ForecastError, Result};
    pub use crate::models::{AverageMethod, ExponentialConfig, MovingAverage};
}
