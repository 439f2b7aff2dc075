//! # decicalc
//!
//! **A decimal calculator behind an HTTP gateway**
//!
//! decicalc turns an API-gateway style HTTP event into a calculation over two
//! decimal operands and answers with a JSON response. Arithmetic is performed
//! on [`bigdecimal::BigDecimal`], so `0.1 + 0.2` is `0.3` and never
//! `0.30000000000000004`, and operands of any length keep every digit.
//!
//! ## Quick Start
//!
//! ```rust
//! use decicalc::{handle, RequestEvent};
//!
//! let event = RequestEvent::new("POST")
//!     .with_body(r#"{"num1": "10", "num2": "4", "operation": "divide"}"#);
//!
//! let response = handle(&event);
//! assert_eq!(response.status_code, 200);
//! assert_eq!(
//!     response.body,
//!     r#"{"num1":"10","num2":"4","operation":"divide","result":"2.5"}"#
//! );
//! ```
//!
//! ## Pipeline
//!
//! A request flows through four stages:
//!
//! 1. [`adapter`] reads the method and pulls `num1`, `num2` and `operation`
//!    out of the query string (GET) or JSON body (POST). OPTIONS requests
//!    short-circuit as CORS preflight.
//! 2. [`request`] checks that all three inputs are present.
//! 3. [`evaluator`] parses the operands and applies the operation.
//! 4. [`response`] renders the outcome as an [`HttpResponse`].
//!
//! [`handler`] wraps the pipeline and turns any [`HandlerError`] into a
//! generic 500 response.

pub mod adapter;
pub mod error;
pub mod evaluator;
pub mod event;
pub mod handler;
pub mod request;
pub mod response;

pub use adapter::{extract, Extracted};
pub use error::{EvaluationError, HandlerError, RejectError};
pub use evaluator::{calculate, evaluate, format_decimal, parse_operand, ErrorList, Operation};
pub use event::{HttpDetails, RequestContext, RequestEvent};
pub use handler::{handle, handle_value};
pub use request::{CalculationRequest, Field};
pub use response::HttpResponse;

/// Result type for the request pipeline
pub type HandlerResult<T> = Result<T, HandlerError>;
