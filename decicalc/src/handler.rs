//! Top-level dispatcher
//!
//! Runs adapter, validation, evaluator and formatter as one
//! `HandlerResult` pipeline. Every `HandlerError` is logged and answered
//! with a generic 500; everything else is a classified 4xx or a 200.

use crate::adapter::{self, Extracted};
use crate::event::RequestEvent;
use crate::response::{self, HttpResponse};
use crate::evaluator::{self, format_decimal};
use crate::{HandlerError, HandlerResult, RejectError};
use serde_json::Value;
use tracing::{debug, error, info};

/// Handle one gateway event
pub fn handle(event: &RequestEvent) -> HttpResponse {
    debug!("Received event: {:?}", event);
    dispatch(event).unwrap_or_else(internal_error)
}

/// Handle a raw JSON event.
///
/// An event that does not have the expected shape (for example a numeric
/// `body`) is a fault and yields a 500.
pub fn handle_value(event: Value) -> HttpResponse {
    match serde_json::from_value::<RequestEvent>(event) {
        Ok(event) => handle(&event),
        Err(e) => internal_error(HandlerError::MalformedEvent(e)),
    }
}

fn dispatch(event: &RequestEvent) -> HandlerResult<HttpResponse> {
    let request = match adapter::extract(event)? {
        Ok(Extracted::Preflight) => return Ok(HttpResponse::preflight()),
        Ok(Extracted::Calculation(request)) => request,
        Err(reject) => return rejected(&reject),
    };

    if let Err(reject) = request.validate() {
        return rejected(&reject);
    }

    let operation = request.operation_name()?;
    let (result, errors) = evaluator::calculate(&request.num1, &request.num2, &operation)?;

    if let Some(value) = &result {
        info!("Calculated {} = {}", operation, format_decimal(value));
    }

    response::format(&request, &operation, result.as_ref(), &errors)
}

fn rejected(reject: &RejectError) -> HandlerResult<HttpResponse> {
    info!("Rejected request: {}", reject);
    HttpResponse::error(reject.status_code(), &reject.to_string())
}

fn internal_error(err: HandlerError) -> HttpResponse {
    error!("Internal server error: {}", err);
    HttpResponse::internal_error()
}
