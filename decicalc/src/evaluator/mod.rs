//! Arithmetic evaluator
//!
//! Pure functions from two operands and an operation name to a decimal
//! result or a list of client-facing error messages.

pub mod decimal;
pub mod operands;
pub mod operations;

pub use decimal::format_decimal;
pub use operands::parse_operand;
pub use operations::Operation;

use crate::{EvaluationError, HandlerError, HandlerResult};
use bigdecimal::BigDecimal;
use serde_json::Value;
use tracing::debug;

/// Ordered, human-readable error messages. Empty means success.
pub type ErrorList = Vec<String>;

/// Evaluate `num1 <operation> num2`.
///
/// Operands are parsed before the operation is looked at, so a bad operand
/// is reported as invalid input even when the operation is also unknown.
pub fn evaluate(
    num1: &Value,
    num2: &Value,
    operation: &str,
) -> Result<BigDecimal, EvaluationError> {
    let (left, right) = match (parse_operand(num1), parse_operand(num2)) {
        (Some(left), Some(right)) => (left, right),
        _ => return Err(EvaluationError::InvalidInput),
    };

    let operation: Operation = operation.parse()?;
    operation.apply(&left, &right)
}

/// Evaluate and split the outcome into an optional result and an error list.
///
/// Client errors land in the list. Faults such as overflow are returned as
/// `Err` for the dispatcher to turn into a 500.
pub fn calculate(
    num1: &Value,
    num2: &Value,
    operation: &str,
) -> HandlerResult<(Option<BigDecimal>, ErrorList)> {
    match evaluate(num1, num2, operation) {
        Ok(result) => Ok((Some(result), Vec::new())),
        Err(err) if err.is_fault() => Err(HandlerError::Arithmetic(err)),
        Err(err) => {
            debug!("Calculation rejected: {}", err);
            Ok((None, vec![err.to_string()]))
        }
    }
}
