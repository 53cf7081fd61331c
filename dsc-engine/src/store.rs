//! Value store: the numbers collected at program start
//!
//! Sessions are seeded from a copy of the store; mutating a session never
//! touches the store. Only calculator results are appended to it.

use crate::error::{EngineError, Result};
use crate::sequence::checked_position;
use tracing::debug;

/// Canonical ordered sequence of collected values
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValueStore {
    values: Vec<f64>,
}

impl ValueStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `values` in order
    pub fn from_values(values: Vec<f64>) -> Self {
        Self { values }
    }

    /// Stored values in entry order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Owned copy used to seed a new session
    pub fn snapshot(&self) -> Vec<f64> {
        self.values.clone()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Append a value (calculator results)
    pub fn push(&mut self, value: f64) {
        self.values.push(value);
        debug!("Value store: appended {} ({} values)", value, self.values.len());
    }

    /// Value at a signed index
    pub fn get(&self, index: i64) -> Result<f64> {
        let index = checked_position(index, self.values.len(), false)?;
        Ok(self.values[index])
    }

    /// Two operands picked by index
    ///
    /// Requires at least two stored values; both indices are validated.
    pub fn pick_pair(&self, first: i64, second: i64) -> Result<(f64, f64)> {
        if self.values.len() < 2 {
            return Err(EngineError::NotEnoughValues {
                needed: 2,
                available: self.values.len(),
            });
        }
        Ok((self.get(first)?, self.get(second)?))
    }
}

impl From<Vec<f64>> for ValueStore {
    fn from(values: Vec<f64>) -> Self {
        Self::from_values(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_is_independent_copy() {
        let store = ValueStore::from_values(vec![1.0, 2.0]);
        let mut snapshot = store.snapshot();
        snapshot.push(3.0);
        assert_eq!(store.values(), &[1.0, 2.0]);
    }

    #[test]
    fn test_push_appends() {
        let mut store = ValueStore::new();
        assert!(store.is_empty());
        store.push(4.5);
        assert_eq!(store.len(), 1);
        assert_eq!(store.values(), &[4.5]);
    }

    #[test]
    fn test_get_validates_index() {
        let store = ValueStore::from(vec![7.0, 8.0]);
        assert_eq!(store.get(1), Ok(8.0));
        assert_eq!(store.get(2), Err(EngineError::InvalidPosition { position: 2, len: 2 }));
        assert_eq!(store.get(-1), Err(EngineError::InvalidPosition { position: -1, len: 2 }));
    }

    #[test]
    fn test_pick_pair() {
        let store = ValueStore::from(vec![7.0, 8.0, 9.0]);
        assert_eq!(store.pick_pair(2, 0), Ok((9.0, 7.0)));
        assert_eq!(store.pick_pair(1, 1), Ok((8.0, 8.0)));
        assert!(matches!(store.pick_pair(0, 3), Err(EngineError::InvalidPosition { .. })));
    }

    #[test]
    fn test_pick_pair_needs_two_values() {
        let store = ValueStore::from(vec![7.0]);
        assert_eq!(
            store.pick_pair(0, 0),
            Err(EngineError::NotEnoughValues { needed: 2, available: 1 })
        );
    }
}
