//! Array engine: statistics, sort and search over a randomly indexed sequence

use crate::error::{EngineError, Result};
use crate::sequence::{compensated_sum, position_of};

/// Random-access working sequence
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArrayEngine {
    values: Vec<f64>,
}

impl ArrayEngine {
    pub fn new(values: Vec<f64>) -> Self {
        Self { values }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Sum of all elements
    ///
    /// An empty array is `Empty`, never a sum of 0.0.
    pub fn sum(&self) -> Result<f64> {
        if self.values.is_empty() {
            return Err(EngineError::Empty);
        }
        Ok(compensated_sum(&self.values))
    }

    /// Arithmetic mean
    pub fn average(&self) -> Result<f64> {
        let sum = self.sum()?;
        Ok(sum / self.values.len() as f64)
    }

    /// Smallest element under `f64::total_cmp`
    pub fn min(&self) -> Result<f64> {
        self.values
            .iter()
            .copied()
            .min_by(f64::total_cmp)
            .ok_or(EngineError::Empty)
    }

    /// Largest element under `f64::total_cmp`
    pub fn max(&self) -> Result<f64> {
        self.values
            .iter()
            .copied()
            .max_by(f64::total_cmp)
            .ok_or(EngineError::Empty)
    }

    /// Stable ascending sort, in place
    ///
    /// Irreversible for the rest of the session; index-based operations see
    /// the new order.
    pub fn sort_ascending(&mut self) -> &[f64] {
        self.values.sort_by(f64::total_cmp);
        &self.values
    }

    /// First index holding exactly `target`
    pub fn search(&self, target: f64) -> Result<usize> {
        position_of(&self.values, target).ok_or(EngineError::NotFound { value: target })
    }

    pub fn display(&self) -> &[f64] {
        &self.values
    }
}
