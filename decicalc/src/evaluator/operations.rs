//! The four decimal operations
//!
//! Addition, subtraction and multiplication are exact. Division rounds to
//! [`DIVISION_PRECISION`] significant digits when the quotient does not
//! terminate. Operands and results are bounded by
//! [`MAX_EXPONENT`](super::decimal::MAX_EXPONENT).

use super::decimal::{self, in_range, DIVISION_PRECISION};
use crate::EvaluationError;
use bigdecimal::BigDecimal;
use num_traits::Zero;
use std::fmt;
use std::str::FromStr;

/// A supported arithmetic operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    /// Apply the operation to two decimals.
    ///
    /// Division by any zero (`0`, `0.0`, `-0`) is rejected. An operand or a
    /// result whose exponent exceeds `MAX_EXPONENT` is an overflow.
    pub fn apply(self, left: &BigDecimal, right: &BigDecimal) -> Result<BigDecimal, EvaluationError> {
        if self == Operation::Divide && right.is_zero() {
            return Err(EvaluationError::DivisionByZero);
        }
        if !in_range(left) || !in_range(right) {
            return Err(EvaluationError::Overflow(self));
        }

        let result = match self {
            Operation::Add => left + right,
            Operation::Subtract => left - right,
            Operation::Multiply => left * right,
            Operation::Divide => decimal::divide(left, right, DIVISION_PRECISION),
        };

        if in_range(&result) {
            Ok(result)
        } else {
            Err(EvaluationError::Overflow(self))
        }
    }
}

impl FromStr for Operation {
    type Err = EvaluationError;

    /// Parse an operation name, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.to_lowercase();
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str() == lowered)
            .ok_or_else(|| EvaluationError::InvalidOperation(s.to_string()))
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
