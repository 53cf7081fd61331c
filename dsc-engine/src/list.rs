//! List engine: positional insert/remove with O(1) access at both ends

use crate::error::{EngineError, Result};
use crate::sequence::{checked_position, position_of};
use std::collections::VecDeque;

/// Positionally addressed working sequence
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListEngine {
    values: VecDeque<f64>,
}

impl ListEngine {
    pub fn new(values: Vec<f64>) -> Self {
        Self {
            values: values.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn add_first(&mut self, value: f64) {
        self.values.push_front(value);
    }

    pub fn add_last(&mut self, value: f64) {
        self.values.push_back(value);
    }

    /// Insert so that `value` ends up at `position`
    ///
    /// Valid range is `0..=len`; `position == len` appends. Out of range leaves
    /// the list unchanged.
    pub fn add_at(&mut self, position: i64, value: f64) -> Result<usize> {
        let index = checked_position(position, self.values.len(), true)?;
        self.values.insert(index, value);
        Ok(index)
    }

    pub fn remove_first(&mut self) -> Result<f64> {
        self.values.pop_front().ok_or(EngineError::Empty)
    }

    pub fn remove_last(&mut self) -> Result<f64> {
        self.values.pop_back().ok_or(EngineError::Empty)
    }

    /// Remove and return the element at `position`
    ///
    /// An empty list is reported as `Empty` before the position is checked.
    pub fn remove_at(&mut self, position: i64) -> Result<f64> {
        if self.values.is_empty() {
            return Err(EngineError::Empty);
        }
        let index = checked_position(position, self.values.len(), false)?;
        self.values.remove(index).ok_or(EngineError::InvalidPosition {
            position,
            len: self.values.len(),
        })
    }

    /// First index holding exactly `target`
    pub fn search(&self, target: f64) -> Result<usize> {
        position_of(&self.values, target).ok_or(EngineError::NotFound { value: target })
    }

    /// Front-to-back copy of the list
    pub fn display(&self) -> Vec<f64> {
        self.values.iter().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(values: &[f64]) -> ListEngine {
        ListEngine::new(values.to_vec())
    }

    #[test]
    fn test_add_at_then_remove_at_scenario() {
        let mut list = list(&[1.0, 2.0, 3.0]);
        assert_eq!(list.add_at(1, 9.0), Ok(1));
        assert_eq!(list.display(), vec![1.0, 9.0, 2.0, 3.0]);

        assert_eq!(list.remove_at(1), Ok(9.0));
        assert_eq!(list.display(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_add_at_end_appends() {
        let mut list = list(&[1.0, 2.0]);
        assert_eq!(list.add_at(2, 3.0), Ok(2));
        assert_eq!(list.display(), vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_add_at_into_empty() {
        let mut list = list(&[]);
        assert_eq!(list.add_at(0, 4.0), Ok(0));
        assert_eq!(list.display(), vec![4.0]);
    }

    #[test]
    fn test_add_at_out_of_range_leaves_list_unchanged() {
        let mut list = list(&[1.0, 2.0]);
        assert_eq!(
            list.add_at(3, 9.0),
            Err(EngineError::InvalidPosition { position: 3, len: 2 })
        );
        assert_eq!(
            list.add_at(-1, 9.0),
            Err(EngineError::InvalidPosition { position: -1, len: 2 })
        );
        assert_eq!(list.display(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_ends() {
        let mut list = list(&[2.0]);
        list.add_first(1.0);
        list.add_last(3.0);
        assert_eq!(list.display(), vec![1.0, 2.0, 3.0]);

        assert_eq!(list.remove_first(), Ok(1.0));
        assert_eq!(list.remove_last(), Ok(3.0));
        assert_eq!(list.remove_last(), Ok(2.0));
        assert_eq!(list.remove_first(), Err(EngineError::Empty));
        assert_eq!(list.remove_last(), Err(EngineError::Empty));
    }

    #[test]
    fn test_remove_at_empty_reports_empty_first() {
        let mut list = list(&[]);
        assert_eq!(list.remove_at(0), Err(EngineError::Empty));
        assert_eq!(list.remove_at(-5), Err(EngineError::Empty));
    }

    #[test]
    fn test_remove_at_out_of_range() {
        let mut list = list(&[1.0, 2.0, 3.0]);
        assert_eq!(
            list.remove_at(3),
            Err(EngineError::InvalidPosition { position: 3, len: 3 })
        );
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_search() {
        let list = list(&[5.0, 5.0, 2.0]);
        assert_eq!(list.search(5.0), Ok(0));
        assert_eq!(list.search(7.0), Err(EngineError::NotFound { value: 7.0 }));
    }
}
