//! HTTP client initialization.
//!
//! This module provides the function to initialize the HTTP client used for
//! RDAP lookups.

use std::net::IpAddr;
use std::time::Duration;

use reqwest::ClientBuilder;

use crate::config::DEFAULT_USER_AGENT;

/// Initializes the HTTP client for RDAP requests.
///
/// Creates a `reqwest::Client` configured with:
/// - A fixed User-Agent identifying this service
/// - The configured request timeout
/// - Redirect following enabled (RDAP servers commonly redirect between
///   bootstrap and authoritative endpoints)
/// - An optional local address all connections are bound to
///
/// # Errors
///
/// Returns a `reqwest::Error` if client creation fails.
pub fn init_client(
    timeout: Duration,
    source_ip: Option<IpAddr>,
) -> Result<reqwest::Client, reqwest::Error> {
    ClientBuilder::new()
        .timeout(timeout)
        .user_agent(DEFAULT_USER_AGENT)
        .local_address(source_ip)
        .build()
}
