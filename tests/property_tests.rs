//! Property-based tests for the forecasters and the windowing transform.
//!
//! These tests verify invariants that should hold for all valid inputs,
//! using randomly generated series.

use lookback::core::{ColumnSelection, Dataset, SeriesOptions};
use lookback::models::{LookbackBuffer, MovingAverage};
use ndarray::{Array2, Axis};
use proptest::prelude::*;

/// Strategy for finite series values of a given length range.
fn values_strategy(min_len: usize, max_len: usize) -> impl Strategy<Value = Vec<f64>> {
    (min_len..max_len).prop_flat_map(|len| prop::collection::vec(-1000.0..1000.0_f64, len))
}

/// Lookback no longer than the generated series.
fn series_and_lookback() -> impl Strategy<Value = (Vec<f64>, usize)> {
    values_strategy(1, 60).prop_flat_map(|values| {
        let len = values.len();
        (Just(values), 1..=len)
    })
}

// =============================================================================
// Property: forecast length matches the horizon
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn forecast_length_matches_horizon(
        (values, n_lookback) in series_and_lookback(),
        n_forecast in 1usize..30,
        alpha in 0.01..0.99_f64,
    ) {
        let model = MovingAverage::new(n_lookback, n_forecast, &values).unwrap();
        prop_assert_eq!(model.simple().len(), n_forecast);
        prop_assert_eq!(model.exponential(alpha).len(), n_forecast);
    }

    #[test]
    fn truncation_keeps_tail(
        (values, n_lookback) in series_and_lookback(),
    ) {
        let model = MovingAverage::new(n_lookback, 1, &values).unwrap();
        prop_assert_eq!(model.series(), &values[values.len() - n_lookback..]);

        let expected = if values.len() > n_lookback { Some(values.len()) } else { None };
        prop_assert_eq!(model.truncated_from(), expected);
    }

    #[test]
    fn short_series_always_fails(
        values in values_strategy(0, 20),
        extra in 1usize..10,
    ) {
        let n_lookback = values.len() + extra;
        prop_assert!(MovingAverage::new(n_lookback, 3, &values).is_err());
    }

    #[test]
    fn simple_forecast_stays_within_input_range(
        (values, n_lookback) in series_and_lookback(),
        n_forecast in 1usize..30,
    ) {
        let model = MovingAverage::new(n_lookback, n_forecast, &values).unwrap();
        let lo = model.series().iter().copied().fold(f64::INFINITY, f64::min);
        let hi = model.series().iter().copied().fold(f64::NEG_INFINITY, f64::max);

        for value in model.simple() {
            prop_assert!(value >= lo - 1e-9 && value <= hi + 1e-9);
        }
    }

    #[test]
    fn buffer_length_is_invariant(
        values in values_strategy(0, 40),
        pushes in prop::collection::vec(-10.0..10.0_f64, 0..50),
    ) {
        let mut buffer = LookbackBuffer::new(&values);
        for value in pushes {
            buffer.push(value);
            prop_assert_eq!(buffer.len(), values.len());
        }
    }
}

// =============================================================================
// Property: windowing counts and splits
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn window_pair_count(
        len in 0usize..80,
        n_lookback in 1usize..20,
        n_forecast in 1usize..20,
    ) {
        let data = Dataset::from(vec![0.0; len]);
        let pairs = data.create_series(n_lookback, n_forecast, &SeriesOptions::default()).unwrap();

        let expected = (len as i64 - n_lookback as i64 - n_forecast as i64 + 1).max(0) as usize;
        prop_assert_eq!(pairs.len(), expected);
        prop_assert_eq!(pairs.targets.shape()[0], expected);
        prop_assert_eq!(pairs.inputs.shape(), &[expected, n_lookback][..]);
        prop_assert_eq!(pairs.targets.shape(), &[expected, n_forecast][..]);
    }

    #[test]
    fn xy_split_preserves_every_column(
        nrows in 1usize..12,
        ncols in 2usize..8,
        pick in 0usize..8,
    ) {
        let target = pick % ncols;
        let table = Array2::from_shape_fn((nrows, ncols), |(i, j)| (i * 100 + j) as f64);
        let data = Dataset::from(table.clone());

        let split = data.create_xy(ColumnSelection::Single(target as isize)).unwrap();
        prop_assert_eq!(split.features.ncols() + split.target.ncols(), ncols);

        let mut features = split.features.axis_iter(Axis(1));
        for j in 0..ncols {
            let column = if j == target {
                split.target.as_block().column(0).to_owned()
            } else {
                features.next().unwrap().to_owned()
            };
            prop_assert_eq!(column, table.column(j).to_owned());
        }
    }
}
