use crate::evaluator::Operation;
use crate::request::Field;
use thiserror::Error;

/// A request rejected before any arithmetic is attempted
///
/// The `Display` text is the message returned to the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectError {
    #[error("Invalid request context.")]
    InvalidContext,

    #[error("Missing query parameters: num1, num2, operation are required for GET requests.")]
    MissingQueryParameters,

    #[error("Missing request body for POST requests.")]
    MissingBody,

    #[error("Invalid JSON format in request body.")]
    InvalidJson,

    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    #[error("Missing required input(s): {}", join_fields(.0))]
    MissingInputs(Vec<Field>),
}

impl RejectError {
    /// HTTP status code the rejection maps to
    pub fn status_code(&self) -> u16 {
        match self {
            RejectError::UnsupportedMethod(_) => 405,
            _ => 400,
        }
    }
}

fn join_fields(fields: &[Field]) -> String {
    fields
        .iter()
        .map(|field| field.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// A calculation that could not produce a value
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    #[error("Invalid input: num1 and num2 must be valid numbers.")]
    InvalidInput,

    #[error("Division by zero is not allowed.")]
    DivisionByZero,

    #[error("Invalid operation: '{0}'. Supported operations are add, subtract, multiply, divide.")]
    InvalidOperation(String),

    /// An operand or the result has an exponent beyond `±999999`
    #[error("Result of {0} is out of decimal range")]
    Overflow(Operation),
}

impl EvaluationError {
    /// Whether this error is a server-side fault rather than bad client input
    pub fn is_fault(&self) -> bool {
        matches!(self, EvaluationError::Overflow(_))
    }
}

/// Faults that end the pipeline with a 500 response
///
/// Details are logged, never sent to the client.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("Malformed request event: {0}")]
    MalformedEvent(#[source] serde_json::Error),

    /// The POST body is valid JSON but not an object
    #[error("Request body is a JSON {0}, expected an object")]
    BodyNotObject(&'static str),

    /// The operation is present but not a string
    #[error("Operation must be a string, got {0}")]
    NonStringOperation(String),

    #[error("Arithmetic fault: {0}")]
    Arithmetic(#[source] EvaluationError),

    #[error("Failed to encode response body: {0}")]
    Encode(#[source] serde_json::Error),
}
