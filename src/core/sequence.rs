//! Lookback/forecast window pairs for supervised learning.
//!
//! Each window pair couples `n_lookback` consecutive rows (the model input)
//! with the `n_forecast` rows that follow them (the model target).

use ndarray::{s, Array2, Array3, ArrayD, ArrayViewD, Axis, Ix2};
use tracing::debug;

use crate::core::dataset::{ColumnSelection, Dataset};
use crate::error::Result;

/// Options for [`Dataset::create_series`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeriesOptions {
    /// Require 1-D data and return squeezed `(n, window)` blocks.
    pub univariate: bool,
    /// Target column(s) for multivariate data. Ignored when univariate.
    pub target: ColumnSelection,
}

impl Default for SeriesOptions {
    fn default() -> Self {
        Self {
            univariate: true,
            target: ColumnSelection::Single(-1),
        }
    }
}

impl SeriesOptions {
    pub fn univariate() -> Self {
        Self::default()
    }

    /// Multivariate windows targeting the last column.
    pub fn multivariate() -> Self {
        Self {
            univariate: false,
            ..Self::default()
        }
    }

    pub fn with_target(mut self, target: impl Into<ColumnSelection>) -> Self {
        self.target = target.into();
        self
    }
}

/// Aligned input and target windows.
///
/// Axis 0 of both blocks is the window index, in increasing offset order.
///
/// | layout | `inputs` | `targets` |
/// |---|---|---|
/// | univariate | `(n, n_lookback)` | `(n, n_forecast)` |
/// | multivariate, single target | `(n, n_lookback, ncols)` | `(n, n_forecast)` |
/// | multivariate, target range | `(n, n_lookback, ncols)` | `(n, n_forecast, k)` |
#[derive(Debug, Clone, PartialEq)]
pub struct WindowPairs {
    pub inputs: ArrayD<f64>,
    pub targets: ArrayD<f64>,
}

impl WindowPairs {
    /// Number of window pairs.
    pub fn len(&self) -> usize {
        self.inputs.shape()[0]
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over `(input, target)` views.
    pub fn iter(&self) -> impl Iterator<Item = (ArrayViewD<'_, f64>, ArrayViewD<'_, f64>)> {
        self.inputs
            .axis_iter(Axis(0))
            .zip(self.targets.axis_iter(Axis(0)))
    }

    /// Typed `(inputs, targets)` matrices for univariate windows.
    ///
    /// Returns `None` when either block is not 2-D.
    pub fn into_univariate(self) -> Option<(Array2<f64>, Array2<f64>)> {
        let inputs = self.inputs.into_dimensionality::<Ix2>().ok()?;
        let targets = self.targets.into_dimensionality::<Ix2>().ok()?;
        Some((inputs, targets))
    }
}

/// Number of window pairs for a series of `len` rows.
///
/// Returns 0 when the combined window width does not fit in `usize`.
pub fn window_count(len: usize, n_lookback: usize, n_forecast: usize) -> usize {
    match n_lookback.checked_add(n_forecast) {
        Some(0) => len.saturating_add(1),
        Some(width) => len.saturating_sub(width - 1),
        None => 0,
    }
}

/// Length of a window axis followed by `inner` elements per step.
///
/// ndarray rejects shapes whose non-zero axes multiply past `isize::MAX`, even
/// with zero rows. Any window that actually fits in the data is below the cap.
fn axis_len(width: usize, inner: usize) -> usize {
    width.min(isize::MAX as usize / inner.max(1))
}

impl Dataset {
    /// Slice the data into lookback/forecast window pairs.
    ///
    /// Offsets run from `n_lookback` to `nrows - n_forecast` inclusive, giving
    /// `max(0, nrows - n_lookback - n_forecast + 1)` pairs. Too few rows
    /// yields empty blocks rather than an error. A window axis too wide for
    /// ndarray to represent is capped in those empty blocks.
    ///
    /// # Errors
    /// - `ShapeMismatch` if `options.univariate` is set on 2-D data
    /// - `InvalidParameter` if the target selection is out of range
    ///
    /// # Example
    /// ```
    /// use lookback::core::{Dataset, SeriesOptions};
    ///
    /// let data = Dataset::from((0..10).map(f64::from).collect::<Vec<_>>());
    /// let pairs = data.create_series(3, 2, &SeriesOptions::default()).unwrap();
    ///
    /// assert_eq!(pairs.len(), 6);
    /// assert_eq!(pairs.inputs.shape(), &[6, 3]);
    /// assert_eq!(pairs.targets.shape(), &[6, 2]);
    /// ```
    pub fn create_series(
        &self,
        n_lookback: usize,
        n_forecast: usize,
        options: &SeriesOptions,
    ) -> Result<WindowPairs> {
        let count = window_count(self.nrows(), n_lookback, n_forecast);

        let pairs = if options.univariate {
            self.univariate_windows(n_lookback, n_forecast, count)?
        } else {
            self.multivariate_windows(n_lookback, n_forecast, count, options.target)?
        };

        debug!(
            rows = self.nrows(),
            n_lookback,
            n_forecast,
            windows = pairs.len(),
            "created window pairs"
        );

        Ok(pairs)
    }

    fn univariate_windows(
        &self,
        n_lookback: usize,
        n_forecast: usize,
        count: usize,
    ) -> Result<WindowPairs> {
        let series = self.series_view()?;

        let mut inputs = Array2::zeros((count, axis_len(n_lookback, 1)));
        let mut targets = Array2::zeros((count, axis_len(n_forecast, 1)));

        for (w, idx) in (n_lookback..n_lookback + count).enumerate() {
            inputs
                .row_mut(w)
                .assign(&series.slice(s![idx - n_lookback..idx]));
            targets
                .row_mut(w)
                .assign(&series.slice(s![idx..idx + n_forecast]));
        }

        Ok(WindowPairs {
            inputs: inputs.into_dyn(),
            targets: targets.into_dyn(),
        })
    }

    fn multivariate_windows(
        &self,
        n_lookback: usize,
        n_forecast: usize,
        count: usize,
        target: ColumnSelection,
    ) -> Result<WindowPairs> {
        let table = self.table_view()?;
        let ncols = table.ncols();

        let mut inputs = Array3::zeros((count, axis_len(n_lookback, ncols), ncols));
        for (w, idx) in (n_lookback..n_lookback + count).enumerate() {
            inputs
                .index_axis_mut(Axis(0), w)
                .assign(&table.slice(s![idx - n_lookback..idx, ..]));
        }

        let targets = match target {
            ColumnSelection::Single(index) => {
                let column = table.column(ColumnSelection::resolve_single(index, ncols)?);
                let mut targets = Array2::zeros((count, axis_len(n_forecast, 1)));
                for (w, idx) in (n_lookback..n_lookback + count).enumerate() {
                    targets
                        .row_mut(w)
                        .assign(&column.slice(s![idx..idx + n_forecast]));
                }
                targets.into_dyn()
            }
            ColumnSelection::Range(start, end) => {
                ColumnSelection::check_range(start, end, ncols)?;
                let block = table.slice(s![.., start..end]);
                let width = end - start;
                let mut targets = Array3::zeros((count, axis_len(n_forecast, width), width));
                for (w, idx) in (n_lookback..n_lookback + count).enumerate() {
                    targets
                        .index_axis_mut(Axis(0), w)
                        .assign(&block.slice(s![idx..idx + n_forecast, ..]));
                }
                targets.into_dyn()
            }
        };

        Ok(WindowPairs {
            inputs: inputs.into_dyn(),
            targets,
        })
    }
}
