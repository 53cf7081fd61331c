//! Two-number calculator over collected or freshly entered operands

use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

/// Binary arithmetic operator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

/// Every operator, in menu order
pub const OPERATORS: [Operator; 4] = [
    Operator::Add,
    Operator::Subtract,
    Operator::Multiply,
    Operator::Divide,
];

impl Operator {
    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Operator::Add => "Addition",
            Operator::Subtract => "Subtraction",
            Operator::Multiply => "Multiplication",
            Operator::Divide => "Division",
        }
    }

    /// Apply to two operands
    ///
    /// Division by exactly zero is an error rather than an infinity.
    pub fn apply(self, lhs: f64, rhs: f64) -> Result<Calculation> {
        let result = match self {
            Operator::Add => lhs + rhs,
            Operator::Subtract => lhs - rhs,
            Operator::Multiply => lhs * rhs,
            Operator::Divide => {
                if rhs == 0.0 {
                    return Err(EngineError::DivisionByZero);
                }
                lhs / rhs
            }
        };

        Ok(Calculation {
            lhs,
            operator: self,
            rhs,
            result,
        })
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown operator '{0}'")]
pub struct UnknownOperator(pub String);

impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "+" | "add" => Ok(Operator::Add),
            "-" | "sub" | "subtract" => Ok(Operator::Subtract),
            "*" | "x" | "mul" | "multiply" => Ok(Operator::Multiply),
            "/" | "div" | "divide" => Ok(Operator::Divide),
            other => Err(UnknownOperator(other.to_string())),
        }
    }
}

/// A completed calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub lhs: f64,
    pub operator: Operator,
    pub rhs: f64,
    pub result: f64,
}
