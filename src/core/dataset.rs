//! Dataset container for windowing and feature/target splitting.
//!
//! A [`Dataset`] wraps a 1-D or 2-D `f64` array. Rows are time steps and
//! columns are features; a 1-D array is a single-feature series.

use ndarray::{s, Array1, Array2, ArrayD, ArrayView2, Axis, Ix1, Ix2};

use crate::error::{ForecastError, Result};

/// Column selector used for targets.
///
/// `Single` accepts negative indices counted from the last column, so the
/// default `Single(-1)` selects the last column. `Range(start, end)` is
/// half-open; `Range(s, s)` selects no columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnSelection {
    Single(isize),
    Range(usize, usize),
}

impl Default for ColumnSelection {
    fn default() -> Self {
        Self::Single(-1)
    }
}

impl From<isize> for ColumnSelection {
    fn from(index: isize) -> Self {
        Self::Single(index)
    }
}

impl From<(usize, usize)> for ColumnSelection {
    fn from((start, end): (usize, usize)) -> Self {
        Self::Range(start, end)
    }
}

impl From<std::ops::Range<usize>> for ColumnSelection {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self::Range(range.start, range.end)
    }
}

impl ColumnSelection {
    /// Resolve a `Single` index against `ncols` columns.
    pub(crate) fn resolve_single(index: isize, ncols: usize) -> Result<usize> {
        let resolved = if index < 0 {
            ncols.checked_sub(index.unsigned_abs())
        } else {
            Some(index as usize).filter(|&i| i < ncols)
        };

        resolved.ok_or_else(|| {
            ForecastError::InvalidParameter(format!(
                "column index {} out of range for {} columns",
                index, ncols
            ))
        })
    }

    /// Validate a `Range` against `ncols` columns.
    pub(crate) fn check_range(start: usize, end: usize, ncols: usize) -> Result<()> {
        if start > end || end > ncols {
            return Err(ForecastError::InvalidParameter(format!(
                "column range {}..{} invalid for {} columns",
                start, end, ncols
            )));
        }
        Ok(())
    }

    /// Column indices selected out of `ncols`, in ascending order.
    pub fn indices(&self, ncols: usize) -> Result<Vec<usize>> {
        match *self {
            Self::Single(index) => Ok(vec![Self::resolve_single(index, ncols)?]),
            Self::Range(start, end) => {
                Self::check_range(start, end, ncols)?;
                Ok((start..end).collect())
            }
        }
    }
}

/// Target block produced by [`Dataset::create_xy`].
#[derive(Debug, Clone, PartialEq)]
pub enum Target {
    /// A single column, selected with `ColumnSelection::Single`.
    Column(Array1<f64>),
    /// Several adjacent columns, selected with `ColumnSelection::Range`.
    Block(Array2<f64>),
}

impl Target {
    /// Number of target columns.
    pub fn ncols(&self) -> usize {
        match self {
            Self::Column(_) => 1,
            Self::Block(block) => block.ncols(),
        }
    }

    /// View the target as a 2-D block (a column target gains a unit axis).
    pub fn as_block(&self) -> ArrayView2<'_, f64> {
        match self {
            Self::Column(column) => column.view().insert_axis(Axis(1)),
            Self::Block(block) => block.view(),
        }
    }
}

/// Features and target split out of a 2-D dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct XySplit {
    /// Remaining columns in their original order.
    pub features: Array2<f64>,
    pub target: Target,
}

/// Read-only 1-D or 2-D numeric dataset.
///
/// # Example
/// ```
/// use lookback::core::{ColumnSelection, Dataset, Target};
///
/// let data = Dataset::from_rows(vec![
///     vec![1.0, 10.0, 100.0],
///     vec![2.0, 20.0, 200.0],
/// ])
/// .unwrap();
///
/// let split = data.create_xy(ColumnSelection::Single(1)).unwrap();
/// assert_eq!(split.features.ncols(), 2);
/// assert!(matches!(split.target, Target::Column(_)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    data: ArrayD<f64>,
}

impl Dataset {
    /// Wrap an array of rank 1 or 2.
    ///
    /// # Errors
    /// `UnconvertibleData` for scalars and arrays of rank above 2.
    pub fn new(data: ArrayD<f64>) -> Result<Self> {
        match data.ndim() {
            1 | 2 => Ok(Self { data }),
            ndim => Err(ForecastError::UnconvertibleData(format!(
                "{}-dimensional array, expected 1 or 2 dimensions",
                ndim
            ))),
        }
    }

    /// Build a 2-D dataset from records (one inner vector per time step).
    ///
    /// No records at all gives an empty 1-D series, since there is no row to
    /// fix the column count.
    ///
    /// # Errors
    /// `UnconvertibleData` if the rows have different lengths.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        if rows.is_empty() {
            return Ok(Self::from(Vec::<f64>::new()));
        }

        let nrows = rows.len();
        let ncols = rows.first().map(Vec::len).unwrap_or(0);

        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != ncols) {
            return Err(ForecastError::UnconvertibleData(format!(
                "ragged rows: row {} has {} values, expected {}",
                i,
                row.len(),
                ncols
            )));
        }

        let flat: Vec<f64> = rows.into_iter().flatten().collect();
        let data = Array2::from_shape_vec((nrows, ncols), flat)
            .map_err(|e| ForecastError::UnconvertibleData(e.to_string()))?;

        Ok(Self {
            data: data.into_dyn(),
        })
    }

    /// Build a 2-D dataset from feature columns.
    ///
    /// # Errors
    /// `UnconvertibleData` if the columns have different lengths.
    pub fn from_columns(columns: Vec<Vec<f64>>) -> Result<Self> {
        let ncols = columns.len();
        let nrows = columns.first().map(Vec::len).unwrap_or(0);

        if let Some((i, col)) = columns.iter().enumerate().find(|(_, c)| c.len() != nrows) {
            return Err(ForecastError::UnconvertibleData(format!(
                "ragged columns: column {} has {} values, expected {}",
                i,
                col.len(),
                nrows
            )));
        }

        let data = Array2::from_shape_fn((nrows, ncols), |(r, c)| columns[c][r]);
        Ok(Self {
            data: data.into_dyn(),
        })
    }

    /// Number of array dimensions (1 or 2).
    pub fn ndim(&self) -> usize {
        self.data.ndim()
    }

    /// Number of time steps.
    pub fn nrows(&self) -> usize {
        self.data.shape()[0]
    }

    /// Number of features; 1 for a 1-D series.
    pub fn ncols(&self) -> usize {
        if self.data.ndim() == 1 {
            1
        } else {
            self.data.shape()[1]
        }
    }

    /// Whether the data is strictly one-dimensional.
    pub fn is_univariate(&self) -> bool {
        self.data.ndim() == 1
    }

    pub fn view(&self) -> ndarray::ArrayViewD<'_, f64> {
        self.data.view()
    }

    /// The data as a strict 1-D view.
    pub(crate) fn series_view(&self) -> Result<ndarray::ArrayView1<'_, f64>> {
        self.data
            .view()
            .into_dimensionality::<Ix1>()
            .map_err(|_| ForecastError::ShapeMismatch {
                expected: 1,
                got: self.data.ndim(),
            })
    }

    /// The data as a 2-D table; a 1-D series becomes a single column.
    pub(crate) fn table_view(&self) -> Result<ArrayView2<'_, f64>> {
        if let Ok(series) = self.series_view() {
            return Ok(series.insert_axis(Axis(1)));
        }
        self.data
            .view()
            .into_dimensionality::<Ix2>()
            .map_err(|_| ForecastError::ShapeMismatch {
                expected: 2,
                got: self.data.ndim(),
            })
    }

    /// Split a 2-D dataset into a feature block and a target block.
    ///
    /// `Single(i)` takes one column (negative `i` counts from the end) as a
    /// 1-D target. `Range(start, end)` takes columns `[start, end)` as a 2-D
    /// target. The features are the remaining columns in original order.
    ///
    /// # Errors
    /// - `ShapeMismatch` if the dataset is 1-D
    /// - `InvalidParameter` if the selection is out of range or inverted
    pub fn create_xy(&self, y_index: impl Into<ColumnSelection>) -> Result<XySplit> {
        if self.data.ndim() != 2 {
            return Err(ForecastError::ShapeMismatch {
                expected: 2,
                got: self.data.ndim(),
            });
        }

        let table = self.table_view()?;
        let ncols = table.ncols();
        let selection = y_index.into();
        let removed = selection.indices(ncols)?;

        let target = match selection {
            ColumnSelection::Single(_) => Target::Column(table.column(removed[0]).to_owned()),
            ColumnSelection::Range(start, end) => {
                Target::Block(table.slice(s![.., start..end]).to_owned())
            }
        };

        // Drop from the highest index down so earlier removals don't shift later ones.
        let mut kept: Vec<usize> = (0..ncols).collect();
        for &idx in removed.iter().rev() {
            kept.remove(idx);
        }
        let features = table.select(Axis(1), &kept);

        Ok(XySplit { features, target })
    }
}

impl From<Vec<f64>> for Dataset {
    fn from(values: Vec<f64>) -> Self {
        Self {
            data: Array1::from(values).into_dyn(),
        }
    }
}

impl From<&[f64]> for Dataset {
    fn from(values: &[f64]) -> Self {
        Self::from(values.to_vec())
    }
}

impl From<Array1<f64>> for Dataset {
    fn from(values: Array1<f64>) -> Self {
        Self {
            data: values.into_dyn(),
        }
    }
}

impl From<Array2<f64>> for Dataset {
    fn from(values: Array2<f64>) -> Self {
        Self {
            data: values.into_dyn(),
        }
    }
}

impl TryFrom<ArrayD<f64>> for Dataset {
    type Error = ForecastError;

    fn try_from(values: ArrayD<f64>) -> Result<Self> {
        Self::new(values)
    }
}

impl TryFrom<Vec<Vec<f64>>> for Dataset {
    type Error = ForecastError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(rows)
    }
}
