//! Text rendering of engine results
//!
//! Values print in their shortest round-trip form with a trailing `.0` for
//! whole numbers (`3.0`, `0.1`, `1e20`); sequences print as `[1.0, 2.0]`.

use dsc_engine::{Calculation, EngineError, Outcome, Side, StatKind, Structure};

/// Formats outcomes and errors for the console
#[derive(Debug, Clone)]
pub struct Renderer {
    average_decimals: usize,
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new(2)
    }
}

/// Short label used in result lines ("List", not "Linked List")
fn label(structure: Structure) -> &'static str {
    match structure {
        Structure::Array => "Array",
        Structure::List => "List",
        Structure::Queue => "Queue",
    }
}

pub fn value(v: f64) -> String {
    format!("{:?}", v)
}

pub fn sequence(values: &[f64]) -> String {
    format!("{:?}", values)
}

impl Renderer {
    pub fn new(average_decimals: usize) -> Self {
        Self { average_decimals }
    }

    /// Current contents, e.g. `Current Queue: [1.0, 2.0]`
    pub fn current(&self, structure: Structure, values: &[f64]) -> String {
        format!("Current {}: {}", label(structure), sequence(values))
    }

    pub fn outcome(&self, structure: Structure, outcome: &Outcome) -> String {
        let name = label(structure);
        match outcome {
            Outcome::Stat { kind, value: v } => match kind {
                StatKind::Sum => format!("Sum of elements: {}", value(*v)),
                StatKind::Average => format!(
                    "Average of elements: {:.prec$}",
                    v,
                    prec = self.average_decimals
                ),
                StatKind::Min => format!("Minimum element: {}", value(*v)),
                StatKind::Max => format!("Maximum element: {}", value(*v)),
            },
            Outcome::Found { value: v, index } => {
                format!("{} found at index: {}", value(*v), index)
            }
            Outcome::Snapshot { values } => format!("{}: {}", name, sequence(values)),
            Outcome::Sorted { values } => format!("{} sorted: {}", name, sequence(values)),
            Outcome::Added { values, .. } => {
                let verb = if structure == Structure::Queue { "enqueued" } else { "added" };
                format!("Element {}. {}", verb, self.current(structure, values))
            }
            Outcome::Removed {
                value: v,
                position,
                side,
                values,
            } => {
                let head = match (structure, side) {
                    (Structure::Queue, _) => format!("Dequeued: {}", value(*v)),
                    (_, Some(Side::Front)) => format!("Removed from start: {}", value(*v)),
                    (_, Some(Side::Back)) => format!("Removed from end: {}", value(*v)),
                    (_, None) => format!("Removed from position {}: {}", position, value(*v)),
                };
                format!("{}\n{}", head, self.current(structure, values))
            }
            Outcome::Front { value: v } => format!("Front element (peek): {}", value(*v)),
            Outcome::Shrunk {
                requested,
                removed,
                exhausted,
                values,
            } => self.shrunk(*requested, removed, *exhausted, values),
            Outcome::Rotated {
                requested, values, ..
            } => format!(
                "{} rotated by {} positions. New {}: {}",
                name,
                requested,
                name,
                sequence(values)
            ),
            Outcome::TooSmallToRotate { .. } => {
                format!("{} is too small to rotate effectively.", name)
            }
        }
    }

    fn shrunk(&self, requested: i64, removed: &[f64], exhausted: bool, values: &[f64]) -> String {
        if requested <= 0 {
            return "No elements removed.".to_string();
        }
        if removed.is_empty() {
            return "Queue is empty, nothing to shrink.".to_string();
        }

        let mut lines: Vec<String> = removed.iter().map(|v| format!("Removed: {}", value(*v))).collect();
        if exhausted {
            lines.push("Queue became empty. Cannot remove more elements.".to_string());
        }
        lines.push(format!("{} element(s) removed.", removed.len()));
        lines.push(format!("Remaining elements: {}", sequence(values)));
        lines.join("\n")
    }

    pub fn error(&self, structure: Structure, error: &EngineError) -> String {
        let name = label(structure);
        match error {
            EngineError::Empty => format!("{} is empty.", name),
            EngineError::InvalidPosition { position, len } => {
                format!("Invalid position: {} ({} has {} element(s)).", position, name, len)
            }
            EngineError::NotFound { value: v } => {
                format!("{} not found in the {}.", value(*v), name.to_lowercase())
            }
            other => self.plain_error(other),
        }
    }

    /// Errors that do not concern a particular structure
    pub fn plain_error(&self, error: &EngineError) -> String {
        match error {
            EngineError::DivisionByZero => "Error: Division by zero is not allowed.".to_string(),
            EngineError::NotEnoughValues { available, .. } => format!(
                "Not enough initial numbers ({}) to select from. Please enter new numbers or go back.",
                available
            ),
            EngineError::InvalidPosition { .. } => "Invalid indices. Please try again.".to_string(),
            other => format!("Error: {}", other),
        }
    }

    pub fn calculation(&self, calc: &Calculation) -> String {
        format!(
            "{} {} {} = {}",
            value(calc.lhs),
            calc.operator.symbol(),
            value(calc.rhs),
            value(calc.result)
        )
    }
}
