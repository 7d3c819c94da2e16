//! Domain info handler.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;

use super::super::types::{error_response, json_response, AppState, InfoParams};
use crate::info::{LookupSource, LookupType};

/// Registration data for the registrable domain of `domain`
pub async fn info_handler(
    State(state): State<AppState>,
    Path(domain): Path<String>,
    Query(params): Query<InfoParams>,
) -> Response {
    let lookup_type = LookupType::parse(&params.lookup_type).unwrap_or_else(|_| {
        log::warn!("Unknown lookup type {:?}, using auto", params.lookup_type);
        LookupType::Auto
    });
    let lookup_source = LookupSource::parse(&params.source).unwrap_or_else(|_| {
        log::warn!("Unknown lookup source {:?}, using auto", params.source);
        LookupSource::Auto
    });

    match state.info.resolve(&domain, lookup_type, lookup_source).await {
        Ok(info) => json_response(StatusCode::OK, &info),
        Err(e) => {
            log::warn!("Info lookup for {domain} failed: {}", e.lines().join("; "));
            error_response(e.lines())
        }
    }
}
