//! HTTP server data structures.

use std::sync::Arc;

use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::dns::DnsResolver;
use crate::info::DomainInfoResolver;

/// Shared state for the HTTP server
#[derive(Clone)]
pub struct AppState {
    pub dns: Arc<DnsResolver>,
    pub info: Arc<DomainInfoResolver>,
}

/// Query string of `/dns/{hostname}`
#[derive(Debug, Default, Deserialize)]
pub struct DnsParams {
    /// Comma-separated nameserver hostnames
    #[serde(default)]
    pub ns: String,
    /// Comma-separated nameserver IP addresses
    #[serde(default)]
    pub ip: String,
    #[serde(default)]
    pub deep: String,
}

/// Query string of `/info/{domain}`
#[derive(Debug, Default, Deserialize)]
pub struct InfoParams {
    #[serde(default, rename = "type")]
    pub lookup_type: String,
    #[serde(default)]
    pub source: String,
}

/// JSON body returned with every failure
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub errors: Vec<String>,
}

/// Pretty-printed JSON response
pub(crate) fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Response {
    match serde_json::to_string_pretty(body) {
        Ok(text) => (status, [(CONTENT_TYPE, "application/json")], text).into_response(),
        Err(e) => {
            log::error!("Failed to encode response: {e}");
            (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()).into_response()
        }
    }
}

/// HTTP 500 with one entry per error line
pub(crate) fn error_response(errors: Vec<String>) -> Response {
    json_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        &ErrorResponse {
            kind: "error",
            errors,
        },
    )
}

/// Splits a comma-separated parameter, trimming items and dropping empty ones.
pub(crate) fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Boolean literals as accepted by the `deep` parameter.
pub(crate) fn parse_bool(value: &str) -> Option<bool> {
    match value {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}
