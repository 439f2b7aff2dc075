use crate::evaluator::format_decimal;
use crate::request::CalculationRequest;
use crate::{HandlerError, HandlerResult};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub const ALLOW_ORIGIN: &str = "Access-Control-Allow-Origin";
pub const ALLOW_HEADERS: &str = "Access-Control-Allow-Headers";
pub const ALLOW_METHODS: &str = "Access-Control-Allow-Methods";

const INTERNAL_ERROR_BODY: &str = r#"{"error":"Internal server error occurred."}"#;

/// Response handed back to the gateway
///
/// `body` is already JSON-encoded (or empty for preflight). Every response
/// carries permissive CORS headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HttpResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

#[derive(Debug, Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

#[derive(Debug, Serialize)]
struct InputEcho<'a> {
    num1: &'a Value,
    num2: &'a Value,
    operation: &'a Value,
}

#[derive(Debug, Serialize)]
struct FailureBody<'a> {
    error: String,
    input: InputEcho<'a>,
}

/// Decimal results travel as strings so no precision is lost in JSON
#[derive(Debug, Serialize)]
struct SuccessBody<'a> {
    num1: &'a Value,
    num2: &'a Value,
    operation: String,
    result: String,
}

pub fn cors_headers() -> BTreeMap<String, String> {
    [ALLOW_ORIGIN, ALLOW_HEADERS, ALLOW_METHODS]
        .into_iter()
        .map(|name| (name.to_string(), "*".to_string()))
        .collect()
}

impl HttpResponse {
    /// 200 with an empty body, answering a CORS preflight
    pub fn preflight() -> Self {
        Self {
            status_code: 200,
            headers: cors_headers(),
            body: String::new(),
        }
    }

    /// Serialize `payload` as the body
    pub fn json<T: Serialize>(status_code: u16, payload: &T) -> HandlerResult<Self> {
        let body = serde_json::to_string(payload).map_err(HandlerError::Encode)?;
        Ok(Self {
            status_code,
            headers: cors_headers(),
            body,
        })
    }

    /// `{"error": message}` with the given status
    pub fn error(status_code: u16, message: &str) -> HandlerResult<Self> {
        Self::json(status_code, &ErrorBody { error: message })
    }

    /// Generic 500. Infallible so the fault boundary always has an answer.
    pub fn internal_error() -> Self {
        Self {
            status_code: 500,
            headers: cors_headers(),
            body: INTERNAL_ERROR_BODY.to_string(),
        }
    }

    /// Parse the body back into JSON. `None` for an empty body.
    pub fn json_body(&self) -> Option<Value> {
        if self.body.is_empty() {
            return None;
        }
        serde_json::from_str(&self.body).ok()
    }
}

/// Render an evaluation outcome.
///
/// A non-empty `errors` list becomes a 400 that echoes the original input.
/// Otherwise the result is returned with `operation`, the normalized name.
pub fn format(
    request: &CalculationRequest,
    operation: &str,
    result: Option<&BigDecimal>,
    errors: &[String],
) -> HandlerResult<HttpResponse> {
    match result {
        Some(value) if errors.is_empty() => HttpResponse::json(
            200,
            &SuccessBody {
                num1: &request.num1,
                num2: &request.num2,
                operation: operation.to_string(),
                result: format_decimal(value),
            },
        ),
        _ => HttpResponse::json(
            400,
            &FailureBody {
                error: errors.join("; "),
                input: InputEcho {
                    num1: &request.num1,
                    num2: &request.num2,
                    operation: &request.operation,
                },
            },
        ),
    }
}
