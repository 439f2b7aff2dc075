//! Request adapter
//!
//! Normalizes a gateway event into a [`CalculationRequest`], whatever the
//! transport: query string for GET, JSON body for POST. OPTIONS is answered
//! as a CORS preflight without looking at the rest of the event.
//!
//! Like [`calculate`](crate::calculate), the outer `Result` carries faults
//! and the inner one the client-facing outcome.

use crate::event::RequestEvent;
use crate::request::{CalculationRequest, Field};
use crate::{HandlerResult, RejectError};
use serde_json::Value;

/// What the adapter made of an event
#[derive(Debug, Clone, PartialEq)]
pub enum Extracted {
    /// CORS preflight, answered with an empty 200
    Preflight,
    /// Inputs to evaluate. Presence is not checked yet.
    Calculation(CalculationRequest),
}

pub fn extract(event: &RequestEvent) -> HandlerResult<Result<Extracted, RejectError>> {
    let method = match event.method() {
        Some(method) => method.to_uppercase(),
        None => return Ok(Err(RejectError::InvalidContext)),
    };

    let extracted = match method.as_str() {
        "OPTIONS" => Ok(Extracted::Preflight),
        "GET" => from_query(event).map(Extracted::Calculation),
        "POST" => from_body(event)?.map(Extracted::Calculation),
        _ => Err(RejectError::UnsupportedMethod(method)),
    };
    Ok(extracted)
}

fn from_query(event: &RequestEvent) -> Result<CalculationRequest, RejectError> {
    let params = event
        .query_string_parameters
        .as_ref()
        .filter(|params| !params.is_empty())
        .ok_or(RejectError::MissingQueryParameters)?;

    let param = |field: Field| {
        params
            .get(field.as_str())
            .map_or(Value::Null, |value| Value::String(value.clone()))
    };

    Ok(CalculationRequest {
        num1: param(Field::Num1),
        num2: param(Field::Num2),
        operation: param(Field::Operation),
    })
}

fn from_body(event: &RequestEvent) -> HandlerResult<Result<CalculationRequest, RejectError>> {
    let body = match event.body.as_deref().filter(|body| !body.is_empty()) {
        Some(body) => body,
        None => return Ok(Err(RejectError::MissingBody)),
    };

    match serde_json::from_str::<Value>(body) {
        Ok(json) => CalculationRequest::from_json(&json).map(Ok),
        Err(_) => Ok(Err(RejectError::InvalidJson)),
    }
}
