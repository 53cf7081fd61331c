//! Engine sessions
//!
//! A session owns one engine (and so one working sequence) from creation until
//! the caller returns to the menu. Two states only:
//! - **Active**: accepting operations
//! - **Terminated**: sequence discarded; every operation is rejected
//!
//! No engine error moves a session out of Active.

use crate::array::ArrayEngine;
use crate::command::{ArrayCommand, CommandParseError, ListCommand, QueueCommand};
use crate::error::{EngineError, Result};
use crate::list::ListEngine;
use crate::outcome::{Outcome, Side, StatKind};
use crate::queue::{QueueEngine, Rotation};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

/// Access discipline of an engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Structure {
    Array,
    List,
    Queue,
}

impl Structure {
    /// Human-facing name used in menus
    pub fn title(self) -> &'static str {
        match self {
            Structure::Array => "Array",
            Structure::List => "Linked List",
            Structure::Queue => "Queue",
        }
    }
}

impl fmt::Display for Structure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Structure::Array => write!(f, "array"),
            Structure::List => write!(f, "list"),
            Structure::Queue => write!(f, "queue"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown structure '{0}' (expected array, list or queue)")]
pub struct UnknownStructure(pub String);

impl FromStr for Structure {
    type Err = UnknownStructure;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "array" => Ok(Structure::Array),
            "list" | "linked-list" | "linkedlist" => Ok(Structure::List),
            "queue" => Ok(Structure::Queue),
            other => Err(UnknownStructure(other.to_string())),
        }
    }
}

/// Capability set of one engine, as driven by a session
///
/// Engines share no hierarchy; each brings its own command type.
pub trait Engine: Sized {
    type Command: FromStr<Err = CommandParseError> + fmt::Debug + Copy;

    const STRUCTURE: Structure;

    fn from_values(values: Vec<f64>) -> Self;

    fn execute(&mut self, command: Self::Command) -> Result<Outcome>;

    /// Front-to-back copy of the working sequence
    fn snapshot(&self) -> Vec<f64>;
}

impl Engine for ArrayEngine {
    type Command = ArrayCommand;

    const STRUCTURE: Structure = Structure::Array;

    fn from_values(values: Vec<f64>) -> Self {
        ArrayEngine::new(values)
    }

    fn execute(&mut self, command: ArrayCommand) -> Result<Outcome> {
        let outcome = match command {
            ArrayCommand::Display => Outcome::Snapshot {
                values: self.display().to_vec(),
            },
            ArrayCommand::Sum => Outcome::Stat {
                kind: StatKind::Sum,
                value: self.sum()?,
            },
            ArrayCommand::Average => Outcome::Stat {
                kind: StatKind::Average,
                value: self.average()?,
            },
            ArrayCommand::Min => Outcome::Stat {
                kind: StatKind::Min,
                value: self.min()?,
            },
            ArrayCommand::Max => Outcome::Stat {
                kind: StatKind::Max,
                value: self.max()?,
            },
            ArrayCommand::Sort => Outcome::Sorted {
                values: self.sort_ascending().to_vec(),
            },
            ArrayCommand::Search(value) => Outcome::Found {
                value,
                index: self.search(value)?,
            },
        };
        Ok(outcome)
    }

    fn snapshot(&self) -> Vec<f64> {
        self.display().to_vec()
    }
}

impl Engine for ListEngine {
    type Command = ListCommand;

    const STRUCTURE: Structure = Structure::List;

    fn from_values(values: Vec<f64>) -> Self {
        ListEngine::new(values)
    }

    fn execute(&mut self, command: ListCommand) -> Result<Outcome> {
        let outcome = match command {
            ListCommand::Display => Outcome::Snapshot {
                values: self.display(),
            },
            ListCommand::AddFirst(value) => {
                self.add_first(value);
                Outcome::Added {
                    value,
                    position: 0,
                    values: self.display(),
                }
            }
            ListCommand::AddLast(value) => {
                self.add_last(value);
                Outcome::Added {
                    value,
                    position: self.len() - 1,
                    values: self.display(),
                }
            }
            ListCommand::AddAt { position, value } => {
                let position = self.add_at(position, value)?;
                Outcome::Added {
                    value,
                    position,
                    values: self.display(),
                }
            }
            ListCommand::RemoveFirst => {
                let value = self.remove_first()?;
                Outcome::Removed {
                    value,
                    position: 0,
                    side: Some(Side::Front),
                    values: self.display(),
                }
            }
            ListCommand::RemoveLast => {
                let value = self.remove_last()?;
                Outcome::Removed {
                    value,
                    position: self.len(),
                    side: Some(Side::Back),
                    values: self.display(),
                }
            }
            ListCommand::RemoveAt(position) => {
                let value = self.remove_at(position)?;
                Outcome::Removed {
                    value,
                    // remove_at succeeded, so position is a valid non-negative index
                    position: position as usize,
                    side: None,
                    values: self.display(),
                }
            }
            ListCommand::Search(value) => Outcome::Found {
                value,
                index: self.search(value)?,
            },
        };
        Ok(outcome)
    }

    fn snapshot(&self) -> Vec<f64> {
        self.display()
    }
}

impl Engine for QueueEngine {
    type Command = QueueCommand;

    const STRUCTURE: Structure = Structure::Queue;

    fn from_values(values: Vec<f64>) -> Self {
        QueueEngine::new(values)
    }

    fn execute(&mut self, command: QueueCommand) -> Result<Outcome> {
        let outcome = match command {
            QueueCommand::Display => Outcome::Snapshot {
                values: self.display(),
            },
            QueueCommand::Enqueue(value) => {
                self.enqueue(value);
                Outcome::Added {
                    value,
                    position: self.len() - 1,
                    values: self.display(),
                }
            }
            QueueCommand::Dequeue => {
                let value = self.dequeue()?;
                Outcome::Removed {
                    value,
                    position: 0,
                    side: Some(Side::Front),
                    values: self.display(),
                }
            }
            QueueCommand::Peek => Outcome::Front {
                value: self.peek()?,
            },
            QueueCommand::Shrink(count) => {
                let shrink = self.shrink(count);
                Outcome::Shrunk {
                    requested: shrink.requested,
                    removed: shrink.removed,
                    exhausted: shrink.exhausted,
                    values: self.display(),
                }
            }
            QueueCommand::Rotate(offset) => match self.rotate(offset) {
                Rotation::TooSmall { requested } => Outcome::TooSmallToRotate {
                    requested,
                    values: self.display(),
                },
                Rotation::Rotated {
                    requested,
                    effective,
                } => Outcome::Rotated {
                    requested,
                    effective,
                    values: self.display(),
                },
            },
        };
        Ok(outcome)
    }

    fn snapshot(&self) -> Vec<f64> {
        self.display()
    }
}

/// Exclusive ownership period of one engine over its working sequence
#[derive(Debug)]
pub struct Session<E: Engine> {
    id: Uuid,
    engine: Option<E>,
}

impl<E: Engine> Session<E> {
    /// Start an Active session over a copy of the seed values
    pub fn start(values: Vec<f64>) -> Self {
        let id = Uuid::new_v4();
        info!(
            session = %id,
            structure = %E::STRUCTURE,
            "Session started with {} values",
            values.len()
        );
        Self {
            id,
            engine: Some(E::from_values(values)),
        }
    }

    /// Identifier used for log correlation
    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn structure(&self) -> Structure {
        E::STRUCTURE
    }

    /// Active until `terminate`
    pub fn is_active(&self) -> bool {
        self.engine.is_some()
    }

    /// Run one command against the engine
    ///
    /// Engine errors leave the session Active and the sequence intact.
    pub fn execute(&mut self, command: E::Command) -> Result<Outcome> {
        let engine = self.engine.as_mut().ok_or(EngineError::SessionTerminated)?;
        let result = engine.execute(command);

        match &result {
            Ok(_) => debug!(session = %self.id, ?command, "Command executed"),
            Err(e) => debug!(session = %self.id, ?command, "Command rejected: {}", e),
        }
        result
    }

    /// Parse a textual command for this session's engine
    pub fn parse(&self, input: &str) -> std::result::Result<E::Command, CommandParseError> {
        input.parse::<E::Command>()
    }

    /// Current working sequence
    pub fn snapshot(&self) -> Result<Vec<f64>> {
        self.engine
            .as_ref()
            .map(E::snapshot)
            .ok_or(EngineError::SessionTerminated)
    }

    /// Return to menu: discard the working sequence
    ///
    /// Returns false if the session was already Terminated.
    pub fn terminate(&mut self) -> bool {
        match self.engine.take() {
            Some(engine) => {
                info!(
                    session = %self.id,
                    structure = %E::STRUCTURE,
                    "Session terminated, discarding {} values",
                    engine.snapshot().len()
                );
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structure_parse_and_display() {
        assert_eq!("Queue".parse::<Structure>(), Ok(Structure::Queue));
        assert_eq!("linked-list".parse::<Structure>(), Ok(Structure::List));
        assert!("stack".parse::<Structure>().is_err());
        assert_eq!(Structure::Array.to_string(), "array");
        assert_eq!(Structure::List.title(), "Linked List");
    }

    #[test]
    fn test_session_starts_active() {
        let session: Session<ArrayEngine> = Session::start(vec![3.0, 1.0, 2.0]);
        assert!(session.is_active());
        assert_eq!(session.structure(), Structure::Array);
        assert_eq!(session.snapshot(), Ok(vec![3.0, 1.0, 2.0]));
    }

    #[test]
    fn test_errors_keep_session_active() {
        let mut session: Session<QueueEngine> = Session::start(vec![]);
        assert_eq!(session.execute(QueueCommand::Dequeue), Err(EngineError::Empty));
        assert_eq!(session.execute(QueueCommand::Peek), Err(EngineError::Empty));
        assert!(session.is_active());

        let outcome = session.execute(QueueCommand::Enqueue(1.0)).unwrap();
        assert_eq!(
            outcome,
            Outcome::Added { value: 1.0, position: 0, values: vec![1.0] }
        );
    }

    #[test]
    fn test_terminated_session_rejects_commands() {
        let mut session: Session<ListEngine> = Session::start(vec![1.0]);
        assert!(session.terminate());
        assert!(!session.is_active());

        assert_eq!(
            session.execute(ListCommand::Display),
            Err(EngineError::SessionTerminated)
        );
        assert_eq!(session.snapshot(), Err(EngineError::SessionTerminated));
        assert!(!session.terminate());
    }

    #[test]
    fn test_sessions_do_not_share_sequences() {
        let seed = vec![1.0, 2.0];
        let mut a: Session<QueueEngine> = Session::start(seed.clone());
        let b: Session<QueueEngine> = Session::start(seed.clone());

        a.execute(QueueCommand::Dequeue).unwrap();
        assert_eq!(a.snapshot(), Ok(vec![2.0]));
        assert_eq!(b.snapshot(), Ok(seed));
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_parse_uses_engine_grammar() {
        let session: Session<ListEngine> = Session::start(vec![]);
        assert_eq!(
            session.parse("add-at 0 4"),
            Ok(ListCommand::AddAt { position: 0, value: 4.0 })
        );
        assert!(session.parse("rotate 1").is_err());
    }

    #[test]
    fn test_list_outcome_positions() {
        let mut session: Session<ListEngine> = Session::start(vec![1.0, 2.0, 3.0]);
        assert_eq!(
            session.execute(ListCommand::RemoveLast),
            Ok(Outcome::Removed {
                value: 3.0,
                position: 2,
                side: Some(Side::Back),
                values: vec![1.0, 2.0],
            })
        );
        assert_eq!(
            session.execute(ListCommand::AddLast(7.0)),
            Ok(Outcome::Added { value: 7.0, position: 2, values: vec![1.0, 2.0, 7.0] })
        );
    }
}
