//! Textual command ingress
//!
//! A command is an operation name followed by typed arguments, separated by
//! whitespace. Names are case-insensitive; `_` and `-` are interchangeable.
//!
//! | Engine | Commands |
//! |--------|----------|
//! | array  | `display`, `sum`, `average`, `min`, `max`, `sort`, `search <x>` |
//! | list   | `display`, `add-first <x>`, `add-last <x>`, `add-at <pos> <x>`, `remove-first`, `remove-last`, `remove-at <pos>`, `search <x>` |
//! | queue  | `display`, `enqueue <x>`, `dequeue`, `peek`, `shrink <n>`, `rotate <k>` |

use std::str::FromStr;
use thiserror::Error;

/// Command text that could not be turned into a command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandParseError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}'")]
    Unknown(String),

    #[error("'{command}' expects {expected} argument(s), got {got}")]
    Arity {
        command: String,
        expected: usize,
        got: usize,
    },

    #[error("invalid {kind} '{token}'")]
    InvalidArgument { kind: &'static str, token: String },
}

/// Array engine operations
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ArrayCommand {
    Display,
    Sum,
    Average,
    Min,
    Max,
    Sort,
    Search(f64),
}

/// List engine operations; positions are signed so bad input stays representable
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ListCommand {
    Display,
    AddFirst(f64),
    AddLast(f64),
    AddAt { position: i64, value: f64 },
    RemoveFirst,
    RemoveLast,
    RemoveAt(i64),
    Search(f64),
}

/// Queue engine operations
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum QueueCommand {
    Display,
    Enqueue(f64),
    Dequeue,
    Peek,
    Shrink(i64),
    Rotate(i64),
}

/// Operation name plus its arguments, with arity checking
struct Tokens<'a> {
    name: String,
    args: Vec<&'a str>,
}

impl<'a> Tokens<'a> {
    fn split(input: &'a str) -> Result<Self, CommandParseError> {
        let mut parts = input.split_whitespace();
        let name = parts
            .next()
            .ok_or(CommandParseError::Empty)?
            .to_ascii_lowercase()
            .replace('_', "-");
        Ok(Self {
            name,
            args: parts.collect(),
        })
    }

    fn expect(&self, expected: usize) -> Result<(), CommandParseError> {
        if self.args.len() == expected {
            Ok(())
        } else {
            Err(CommandParseError::Arity {
                command: self.name.clone(),
                expected,
                got: self.args.len(),
            })
        }
    }

    fn unknown(&self) -> CommandParseError {
        CommandParseError::Unknown(self.name.clone())
    }

    fn value(&self, index: usize) -> Result<f64, CommandParseError> {
        parse_value(self.args[index])
    }

    fn integer(&self, index: usize) -> Result<i64, CommandParseError> {
        parse_integer(self.args[index])
    }
}

/// Parse a sequence value; NaN is rejected, infinities are allowed
pub fn parse_value(token: &str) -> Result<f64, CommandParseError> {
    match token.trim().parse::<f64>() {
        Ok(value) if !value.is_nan() => Ok(value),
        _ => Err(CommandParseError::InvalidArgument {
            kind: "value",
            token: token.to_string(),
        }),
    }
}

/// Parse an index or count
pub fn parse_integer(token: &str) -> Result<i64, CommandParseError> {
    token
        .trim()
        .parse::<i64>()
        .map_err(|_| CommandParseError::InvalidArgument {
            kind: "integer",
            token: token.to_string(),
        })
}

impl FromStr for ArrayCommand {
    type Err = CommandParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let tokens = Tokens::split(input)?;
        let command = match tokens.name.as_str() {
            "display" | "show" => {
                tokens.expect(0)?;
                ArrayCommand::Display
            }
            "sum" => {
                tokens.expect(0)?;
                ArrayCommand::Sum
            }
            "average" | "avg" | "mean" => {
                tokens.expect(0)?;
                ArrayCommand::Average
            }
            "min" => {
                tokens.expect(0)?;
                ArrayCommand::Min
            }
            "max" => {
                tokens.expect(0)?;
                ArrayCommand::Max
            }
            "sort" => {
                tokens.expect(0)?;
                ArrayCommand::Sort
            }
            "search" => {
                tokens.expect(1)?;
                ArrayCommand::Search(tokens.value(0)?)
            }
            _ => return Err(tokens.unknown()),
        };
        Ok(command)
    }
}

impl FromStr for ListCommand {
    type Err = CommandParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let tokens = Tokens::split(input)?;
        let command = match tokens.name.as_str() {
            "display" | "show" => {
                tokens.expect(0)?;
                ListCommand::Display
            }
            "add-first" => {
                tokens.expect(1)?;
                ListCommand::AddFirst(tokens.value(0)?)
            }
            "add-last" => {
                tokens.expect(1)?;
                ListCommand::AddLast(tokens.value(0)?)
            }
            "add-at" => {
                tokens.expect(2)?;
                ListCommand::AddAt {
                    position: tokens.integer(0)?,
                    value: tokens.value(1)?,
                }
            }
            "remove-first" => {
                tokens.expect(0)?;
                ListCommand::RemoveFirst
            }
            "remove-last" => {
                tokens.expect(0)?;
                ListCommand::RemoveLast
            }
            "remove-at" => {
                tokens.expect(1)?;
                ListCommand::RemoveAt(tokens.integer(0)?)
            }
            "search" => {
                tokens.expect(1)?;
                ListCommand::Search(tokens.value(0)?)
            }
            _ => return Err(tokens.unknown()),
        };
        Ok(command)
    }
}

impl FromStr for QueueCommand {
    type Err = CommandParseError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let tokens = Tokens::split(input)?;
        let command = match tokens.name.as_str() {
            "display" | "show" => {
                tokens.expect(0)?;
                QueueCommand::Display
            }
            "enqueue" | "offer" => {
                tokens.expect(1)?;
                QueueCommand::Enqueue(tokens.value(0)?)
            }
            "dequeue" | "poll" => {
                tokens.expect(0)?;
                QueueCommand::Dequeue
            }
            "peek" => {
                tokens.expect(0)?;
                QueueCommand::Peek
            }
            "shrink" => {
                tokens.expect(1)?;
                QueueCommand::Shrink(tokens.integer(0)?)
            }
            "rotate" => {
                tokens.expect(1)?;
                QueueCommand::Rotate(tokens.integer(0)?)
            }
            _ => return Err(tokens.unknown()),
        };
        Ok(command)
    }
}
