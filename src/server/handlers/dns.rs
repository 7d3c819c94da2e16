//! DNS records handler.

use std::net::IpAddr;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::Response;

use super::super::types::{error_response, json_response, parse_bool, split_list, AppState, DnsParams};

const NS_OR_IP: &str = "you must provide `ns`es or `ip`s, but not both";

/// Records for `hostname` from the nameservers named in `ns` or `ip`
pub async fn dns_handler(
    State(state): State<AppState>,
    Path(hostname): Path<String>,
    Query(params): Query<DnsParams>,
) -> Response {
    let nameservers = split_list(&params.ns);
    let ips = split_list(&params.ip);
    let deep = parse_bool(&params.deep).unwrap_or(false);

    if nameservers.is_empty() == ips.is_empty() {
        return error_response(vec![NS_OR_IP.to_string()]);
    }

    let result = if ips.is_empty() {
        state
            .dns
            .resolve_via_nameservers(&hostname, &nameservers, deep)
            .await
    } else {
        let mut addresses = Vec::with_capacity(ips.len());
        for ip in &ips {
            match ip.parse::<IpAddr>() {
                Ok(address) => addresses.push(address),
                Err(e) => return error_response(vec![format!("invalid ip `{ip}`: {e}")]),
            }
        }
        state
            .dns
            .resolve_via_addresses(&hostname, &addresses, deep)
            .await
    };

    match result {
        Ok(records) => json_response(StatusCode::OK, &records),
        Err(e) => {
            log::warn!("DNS lookup for {hostname} failed: {}", e.lines().join("; "));
            error_response(e.lines())
        }
    }
}
