use crate::utils::error::Result;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Owned copy of the operand stack, ordered top-first.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StackSnapshot(Vec<f64>);

impl StackSnapshot {
    /// Builds a snapshot from storage kept bottom-to-top.
    pub(crate) fn from_bottom_up(stack: &[f64]) -> Self {
        Self(stack.iter().rev().copied().collect())
    }

    pub fn top(&self) -> Option<f64> {
        self.0.first().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.0
    }
}

impl From<Vec<f64>> for StackSnapshot {
    /// The vector is taken as already top-first.
    fn from(values: Vec<f64>) -> Self {
        Self(values)
    }
}

impl<'a> IntoIterator for &'a StackSnapshot {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Full observable state of a calculator at one point in time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorState {
    pub accumulator: f64,
    pub stack: StackSnapshot,
}

impl CalculatorState {
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for CalculatorState {
    /// Bottom entry first, numbered from 1, so the top sits right above the
    /// accumulator line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let depth = self.stack.len();
        for (i, value) in self.stack.iter().enumerate().rev() {
            writeln!(f, "{}: {}", depth - i, value)?;
        }
        write!(f, "acc: {}", self.accumulator)
    }
}

/// Binary operations: the left operand comes from the stack, the right one
/// is the accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }

    /// Plain IEEE 754 arithmetic; divisor checks belong to the caller.
    pub fn evaluate(self, left: f64, right: f64) -> f64 {
        match self {
            BinaryOp::Add => left + right,
            BinaryOp::Sub => left - right,
            BinaryOp::Mul => left * right,
            BinaryOp::Div => left / right,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BinaryOp::Add => "add",
            BinaryOp::Sub => "sub",
            BinaryOp::Mul => "mul",
            BinaryOp::Div => "div",
        };
        f.write_str(name)
    }
}
