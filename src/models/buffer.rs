//! Fixed-capacity FIFO buffer used by the recursive forecasters.

use std::collections::VecDeque;

/// A fixed-length window of the most recent observations.
///
/// Every [`push`](LookbackBuffer::push) appends the new value and evicts the
/// oldest one, so the length never changes after construction. A buffer built
/// from an empty slice has zero capacity and stays empty.
#[derive(Debug, Clone, PartialEq)]
pub struct LookbackBuffer {
    values: VecDeque<f64>,
}

impl LookbackBuffer {
    /// Create a buffer holding a copy of `values`, oldest first.
    pub fn new(values: &[f64]) -> Self {
        Self {
            values: values.iter().copied().collect(),
        }
    }

    /// Number of slots in the buffer.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Append `value` and return the evicted oldest value.
    ///
    /// With zero capacity `value` itself is evicted straight away.
    pub fn push(&mut self, value: f64) -> Option<f64> {
        if self.values.is_empty() {
            return Some(value);
        }
        let evicted = self.values.pop_front();
        self.values.push_back(value);
        evicted
    }

    /// Arithmetic mean of the buffered values.
    pub fn mean(&self) -> f64 {
        self.values.iter().sum::<f64>() / self.values.len() as f64
    }

    /// Dot product with `weights`, index 0 pairing with the oldest slot.
    pub fn weighted_sum(&self, weights: &[f64]) -> f64 {
        debug_assert_eq!(weights.len(), self.values.len());
        self.values
            .iter()
            .zip(weights)
            .map(|(v, w)| v * w)
            .sum()
    }

    /// Iterate from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &f64> {
        self.values.iter()
    }

    /// Copy the buffer out, oldest first.
    pub fn to_vec(&self) -> Vec<f64> {
        self.values.iter().copied().collect()
    }
}
