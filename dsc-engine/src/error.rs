//! Error types for dsc-engine
//!
//! Every variant is an expected, recoverable outcome of normal use. None of
//! them corrupts or discards the working sequence.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Recoverable engine error
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "error", rename_all = "snake_case")]
pub enum EngineError {
    /// Operation needs at least one element but the sequence has none
    #[error("sequence is empty")]
    Empty,

    /// Index outside the operation's valid range
    #[error("invalid position {position} for sequence of length {len}")]
    InvalidPosition { position: i64, len: usize },

    /// Search target absent
    #[error("{value} not found")]
    NotFound { value: f64 },

    /// Calculator division with a zero divisor
    #[error("division by zero is not allowed")]
    DivisionByZero,

    /// Picking operands from a store that holds too few values
    #[error("not enough stored values ({available}) to select {needed}")]
    NotEnoughValues { needed: usize, available: usize },

    /// Command sent to a session after it returned to the menu
    #[error("session has been terminated")]
    SessionTerminated,
}

/// Convenience Result type using EngineError
pub type Result<T> = std::result::Result<T, EngineError>;
