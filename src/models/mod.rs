//! Forecasting models.

mod buffer;
mod moving_average;

pub use buffer::LookbackBuffer;
pub use moving_average::{AverageMethod, ExponentialConfig, MovingAverage};
