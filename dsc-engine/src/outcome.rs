//! Structured results returned by the engines
//!
//! Rendering is the caller's job; these types only carry data. They serialize
//! with an `outcome` tag for machine-readable output.

use serde::{Deserialize, Serialize};

/// Which aggregate a `Outcome::Stat` holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatKind {
    Sum,
    Average,
    Min,
    Max,
}

impl std::fmt::Display for StatKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatKind::Sum => write!(f, "sum"),
            StatKind::Average => write!(f, "average"),
            StatKind::Min => write!(f, "min"),
            StatKind::Max => write!(f, "max"),
        }
    }
}

/// End of the sequence a removal was addressed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Front,
    Back,
}

/// Successful engine result
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum Outcome {
    /// Aggregate over the whole sequence
    Stat { kind: StatKind, value: f64 },

    /// First index holding `value`
    Found { value: f64, index: usize },

    /// Read-only view of the sequence
    Snapshot { values: Vec<f64> },

    /// Sequence after an in-place ascending sort
    Sorted { values: Vec<f64> },

    /// `value` now sits at `position`; `values` is the sequence afterwards
    Added {
        value: f64,
        position: usize,
        values: Vec<f64>,
    },

    /// `value` was taken from `position`; `values` is the sequence afterwards
    ///
    /// `side` is set when the command named an end rather than a position.
    Removed {
        value: f64,
        position: usize,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        side: Option<Side>,
        values: Vec<f64>,
    },

    /// Front of the queue, left in place
    Front { value: f64 },

    /// Bulk front removal
    Shrunk {
        requested: i64,
        removed: Vec<f64>,
        exhausted: bool,
        values: Vec<f64>,
    },

    /// Queue rotated by `effective` dequeue/enqueue steps
    Rotated {
        requested: i64,
        effective: usize,
        values: Vec<f64>,
    },

    /// Queue with fewer than two elements; left unchanged
    TooSmallToRotate { requested: i64, values: Vec<f64> },
}
