//! Core data structures for windowing time series.

mod dataset;
mod sequence;

pub use dataset::{ColumnSelection, Dataset, Target, XySplit};
pub use sequence::{window_count, SeriesOptions, WindowPairs};
