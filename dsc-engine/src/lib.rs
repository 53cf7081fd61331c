//! # DSC Engine Library (dsc-engine)
//!
//! Pure in-memory engines over an ordered sequence of `f64` values.
//!
//! **Purpose:** Inspect and mutate a working sequence under one of three
//! access disciplines (random-access array, positional list, FIFO queue with
//! rotation), plus a two-number calculator over the collected values.
//!
//! **Architecture:** Each engine owns its sequence and returns structured
//! results (`Outcome`) or recoverable errors (`EngineError`). Engines never
//! print or prompt; rendering belongs to the caller. A `Session` wraps one
//! engine with an Active/Terminated lifecycle.

pub mod array;
pub mod calculator;
pub mod command;
pub mod error;
pub mod list;
pub mod outcome;
pub mod queue;
mod sequence;
pub mod session;
pub mod store;

pub use array::ArrayEngine;
pub use calculator::{Calculation, Operator, UnknownOperator, OPERATORS};
pub use command::{ArrayCommand, CommandParseError, ListCommand, QueueCommand};
pub use error::{EngineError, Result};
pub use list::ListEngine;
pub use outcome::{Outcome, Side, StatKind};
pub use queue::{QueueEngine, Rotation, Shrink};
pub use session::{Engine, Session, Structure, UnknownStructure};
pub use store::ValueStore;
