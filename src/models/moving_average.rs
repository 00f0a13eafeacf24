//! Recursive moving-average forecasters.
//!
//! This module provides:
//! - `MovingAverage::simple`: each step forecasts the plain mean of the lookback window
//! - `MovingAverage::exponential`: each step forecasts a geometrically weighted sum
//!
//! Both variants are recursive. Every forecast is pushed back into the
//! lookback window (evicting the oldest value), so later steps treat earlier
//! forecasts as observed data.

use tracing::{debug, warn};

use crate::error::{ForecastError, Result};
use crate::models::buffer::LookbackBuffer;

/// Configuration for the exponentially weighted recurrence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExponentialConfig {
    /// Level coefficient. Documented domain is (0, 1) but it is not enforced.
    pub alpha: f64,
}

impl Default for ExponentialConfig {
    fn default() -> Self {
        Self { alpha: 0.5 }
    }
}

/// Recurrence used to produce each forecast step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AverageMethod {
    /// Arithmetic mean of the lookback window.
    #[default]
    Simple,
    /// Dot product of the lookback window with `alpha / 2^(k+1)` weights.
    Exponential(ExponentialConfig),
}

/// Moving-average forecaster over a fixed lookback window.
///
/// # Example
/// ```
/// use lookback::models::MovingAverage;
///
/// let model = MovingAverage::new(4, 5, &[12.0, 7.0, 27.0, 34.0]).unwrap();
///
/// let forecast = model.simple();
/// assert_eq!(forecast.len(), 5);
/// assert_eq!(forecast[0], 20.0);
/// assert_eq!(forecast[1], 22.0);
///
/// let forecast = model.exponential(0.5);
/// assert_eq!(forecast[0], 6.625);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MovingAverage {
    n_lookback: usize,
    n_forecast: usize,
    /// The last `n_lookback` observations, oldest first.
    series: Vec<f64>,
    /// Length of the input when it had to be truncated.
    truncated_from: Option<usize>,
}

impl MovingAverage {
    /// Create a forecaster from the most recent observations.
    ///
    /// A series longer than `n_lookback` is truncated to its last
    /// `n_lookback` values with a warning. A shorter series is rejected.
    ///
    /// # Errors
    /// - `InvalidParameter` if `n_lookback` or `n_forecast` is zero
    /// - `InsufficientData` if `series.len() < n_lookback`
    pub fn new(n_lookback: usize, n_forecast: usize, series: &[f64]) -> Result<Self> {
        if n_lookback == 0 {
            return Err(ForecastError::InvalidParameter(
                "n_lookback must be positive".to_string(),
            ));
        }
        if n_forecast == 0 {
            return Err(ForecastError::InvalidParameter(
                "n_forecast must be positive".to_string(),
            ));
        }

        let (series, truncated_from) = Self::check_series(n_lookback, series)?;

        Ok(Self {
            n_lookback,
            n_forecast,
            series,
            truncated_from,
        })
    }

    fn check_series(n_lookback: usize, series: &[f64]) -> Result<(Vec<f64>, Option<usize>)> {
        let len = series.len();

        if len < n_lookback {
            return Err(ForecastError::InsufficientData {
                needed: n_lookback,
                got: len,
            });
        }

        if len > n_lookback {
            warn!(
                series_len = len,
                n_lookback,
                "series length {} exceeds lookback of {} periods, keeping the last {}",
                len,
                n_lookback,
                n_lookback
            );
            return Ok((series[len - n_lookback..].to_vec(), Some(len)));
        }

        Ok((series.to_vec(), None))
    }

    /// Number of observations in the lookback window.
    pub fn n_lookback(&self) -> usize {
        self.n_lookback
    }

    /// Number of steps produced per forecast call.
    pub fn n_forecast(&self) -> usize {
        self.n_forecast
    }

    /// The validated lookback window, oldest first.
    pub fn series(&self) -> &[f64] {
        &self.series
    }

    /// Original input length if the series was truncated at construction.
    pub fn truncated_from(&self) -> Option<usize> {
        self.truncated_from
    }

    pub fn name(&self) -> &str {
        "MovingAverage"
    }

    /// Weight vector for the exponential recurrence.
    ///
    /// `weights[k] = alpha / 2^(k+1)` where `k = 0` pairs with the oldest
    /// slot of the lookback window. The weights are not normalized.
    pub fn exponential_weights(n_lookback: usize, alpha: f64) -> Vec<f64> {
        let mut divisor = 1.0;
        (0..n_lookback)
            .map(|_| {
                divisor *= 2.0;
                alpha / divisor
            })
            .collect()
    }

    /// Simple moving-average forecast.
    ///
    /// Each step is the arithmetic mean of the current window.
    pub fn simple(&self) -> Vec<f64> {
        self.forecast(AverageMethod::Simple)
    }

    /// Exponentially weighted forecast with level coefficient `alpha`.
    ///
    /// `alpha` is expected in (0, 1). Values outside that range are logged
    /// and still fed through the recurrence unchanged.
    pub fn exponential(&self, alpha: f64) -> Vec<f64> {
        self.forecast(AverageMethod::Exponential(ExponentialConfig { alpha }))
    }

    /// Run the recurrence selected by `method` for `n_forecast` steps.
    pub fn forecast(&self, method: AverageMethod) -> Vec<f64> {
        let buffer = LookbackBuffer::new(&self.series);

        let forecast = match method {
            AverageMethod::Simple => self.roll(buffer, |window| window.mean()),
            AverageMethod::Exponential(config) => {
                if !(config.alpha > 0.0 && config.alpha < 1.0) {
                    warn!(
                        alpha = config.alpha,
                        "alpha outside (0, 1), exponential forecast may be meaningless"
                    );
                }
                let weights = Self::exponential_weights(self.n_lookback, config.alpha);
                self.roll(buffer, |window| window.weighted_sum(&weights))
            }
        };

        debug!(
            method = ?method,
            n_lookback = self.n_lookback,
            n_forecast = self.n_forecast,
            "moving average forecast complete"
        );

        forecast
    }

    fn roll<F>(&self, mut buffer: LookbackBuffer, step: F) -> Vec<f64>
    where
        F: Fn(&LookbackBuffer) -> f64,
    {
        let mut forecast = Vec::with_capacity(self.n_forecast);

        for _ in 0..self.n_forecast {
            let next = step(&buffer);
            buffer.push(next);
            debug_assert_eq!(buffer.len(), self.n_lookback);
            forecast.push(next);
        }

        forecast
    }
}
