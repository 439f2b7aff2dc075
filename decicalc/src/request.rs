//! The three calculator inputs, as the client sent them.

use crate::error::{HandlerError, RejectError};
use crate::evaluator::parse_operand;
use crate::HandlerResult;
use num_traits::Zero;
use serde_json::Value;
use std::fmt;

/// Name of a calculator input, in the order they are reported
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Num1,
    Num2,
    Operation,
}

impl Field {
    pub const ALL: [Field; 3] = [Field::Num1, Field::Num2, Field::Operation];

    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Num1 => "num1",
            Field::Num2 => "num2",
            Field::Operation => "operation",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A calculation request extracted from the transport
///
/// Values are kept exactly as supplied so error responses can echo them back
/// uncoerced. Absent inputs are `Value::Null`.
#[derive(Debug, Clone, PartialEq)]
pub struct CalculationRequest {
    pub num1: Value,
    pub num2: Value,
    pub operation: Value,
}

impl CalculationRequest {
    pub fn new(num1: impl Into<Value>, num2: impl Into<Value>, operation: impl Into<Value>) -> Self {
        Self {
            num1: num1.into(),
            num2: num2.into(),
            operation: operation.into(),
        }
    }

    /// Build a request from a JSON object, taking `num1`, `num2` and `operation`.
    ///
    /// A body that is any other JSON value (an array, a string, a number) is a
    /// fault, not a client error.
    pub fn from_json(body: &Value) -> HandlerResult<Self> {
        let object = body
            .as_object()
            .ok_or_else(|| HandlerError::BodyNotObject(json_type(body)))?;

        let field = |field: Field| object.get(field.as_str()).cloned().unwrap_or(Value::Null);
        Ok(Self {
            num1: field(Field::Num1),
            num2: field(Field::Num2),
            operation: field(Field::Operation),
        })
    }

    pub fn get(&self, field: Field) -> &Value {
        match field {
            Field::Num1 => &self.num1,
            Field::Num2 => &self.num2,
            Field::Operation => &self.operation,
        }
    }

    /// Inputs that are absent or empty, in reporting order.
    ///
    /// Emptiness follows JSON truthiness: `null`, `""`, `0`, `false`, `[]` and
    /// `{}` all count as missing.
    pub fn missing_fields(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| !is_truthy(self.get(*field)))
            .collect()
    }

    pub fn validate(&self) -> Result<(), RejectError> {
        let missing = self.missing_fields();
        if missing.is_empty() {
            Ok(())
        } else {
            Err(RejectError::MissingInputs(missing))
        }
    }

    /// The operation lower-cased
    ///
    /// Only meaningful once [`validate`](Self::validate) passed. A present
    /// operation that is not a string (`5`, `["add"]`) is a fault.
    pub fn operation_name(&self) -> HandlerResult<String> {
        match &self.operation {
            Value::String(s) => Ok(s.to_lowercase()),
            other => Err(HandlerError::NonStringOperation(other.to_string())),
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(_) => parse_operand(value).map_or(true, |n| !n.is_zero()),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
