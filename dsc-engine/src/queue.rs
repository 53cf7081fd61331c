//! Queue engine: FIFO access plus bulk front removal and rotation
//!
//! Backed by a ring buffer, so enqueue at the back and dequeue at the front
//! are amortised O(1).

use crate::error::{EngineError, Result};
use std::collections::VecDeque;
use tracing::debug;

/// Result of a bulk front removal
#[derive(Debug, Clone, PartialEq)]
pub struct Shrink {
    /// Count asked for (may be zero or negative)
    pub requested: i64,

    /// Removed values, front to back
    pub removed: Vec<f64>,

    /// Queue emptied before `requested` removals completed
    pub exhausted: bool,
}

impl Shrink {
    /// Number of elements actually removed
    pub fn count(&self) -> usize {
        self.removed.len()
    }
}

/// Result of a rotation request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// Fewer than two elements; queue untouched
    TooSmall { requested: i64 },

    /// Queue rotated by `effective` dequeue-then-enqueue steps
    Rotated { requested: i64, effective: usize },
}

/// FIFO working sequence
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueueEngine {
    values: VecDeque<f64>,
}

impl QueueEngine {
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

    /// Append to the back
    pub fn enqueue(&mut self, value: f64) {
        self.values.push_back(value);
    }

    /// Remove and return the front
    pub fn dequeue(&mut self) -> Result<f64> {
        self.values.pop_front().ok_or(EngineError::Empty)
    }

    /// Front element, left in place
    pub fn peek(&self) -> Result<f64> {
        self.values.front().copied().ok_or(EngineError::Empty)
    }

    /// Remove up to `count` elements from the front
    ///
    /// `count <= 0` is a no-op. Stops early once the queue is empty.
    pub fn shrink(&mut self, count: i64) -> Shrink {
        if count <= 0 {
            return Shrink {
                requested: count,
                removed: Vec::new(),
                exhausted: false,
            };
        }

        let available = self.values.len();
        let take = usize::try_from(count).map_or(available, |n| n.min(available));
        let removed: Vec<f64> = self.values.drain(..take).collect();
        let exhausted = (take as u64) < count as u64;

        debug!("Shrunk queue by {} of {} requested", removed.len(), count);
        Shrink {
            requested: count,
            removed,
            exhausted,
        }
    }

    /// Rotate front-to-back by `offset` positions
    ///
    /// The offset is folded into `[0, len)` with a Euclidean remainder, so
    /// `rotate(k)` and `rotate(k + m * len)` always agree and a negative
    /// offset rotates backward. Queues with fewer than two elements are left
    /// unchanged.
    pub fn rotate(&mut self, offset: i64) -> Rotation {
        let len = self.values.len();
        if len < 2 {
            return Rotation::TooSmall { requested: offset };
        }

        // len fits in i64: a VecDeque never holds more than isize::MAX elements
        let effective = offset.rem_euclid(len as i64) as usize;
        self.values.rotate_left(effective);

        debug!("Rotated queue by {} (effective {})", offset, effective);
        Rotation::Rotated {
            requested: offset,
            effective,
        }
    }

    /// Front-to-back copy of the queue
    pub fn display(&self) -> Vec<f64> {
        self.values.iter().copied().collect()
    }
}
