//! The API-gateway HTTP event the handler consumes.
//!
//! Only the fields the calculator reads are modelled. Anything else a gateway
//! sends along (headers, raw path, cookies) is ignored on deserialization.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One HTTP request as delivered by the gateway
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEvent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_context: Option<RequestContext>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_string_parameters: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestContext {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub http: Option<HttpDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
}

impl RequestEvent {
    /// Create an event for the given HTTP method with no query string or body
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            request_context: Some(RequestContext {
                http: Some(HttpDetails {
                    method: Some(method.into()),
                }),
            }),
            query_string_parameters: None,
            body: None,
        }
    }

    /// Add a query-string parameter
    pub fn with_query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query_string_parameters
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Set the raw request body
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// The HTTP method, if the request context carries one
    pub fn method(&self) -> Option<&str> {
        self.request_context
            .as_ref()?
            .http
            .as_ref()?
            .method
            .as_deref()
    }
}
