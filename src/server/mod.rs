//! HTTP server.
//!
//! Provides two endpoints:
//! - `/dns/{hostname}?ns=..|ip=..&deep=..` - records straight from the nameservers
//! - `/info/{domain}?type=..&source=..` - registration data via RDAP/WHOIS
//!
//! Successful lookups answer 200 with pretty-printed JSON; failures answer 500
//! with `{"type": "error", "errors": [...]}`.

mod handlers;
mod types;

use std::net::SocketAddr;

use axum::routing::get;
use axum::Router;

use handlers::{dns_handler, info_handler};
pub use types::{AppState, DnsParams, ErrorResponse, InfoParams};

/// Builds the application router
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/dns/{hostname}", get(dns_handler))
        .route("/info/{domain}", get(info_handler))
        .with_state(state)
}

/// Binds `addr` and serves the router until the listener fails
pub async fn start_server(addr: SocketAddr, state: AppState) -> Result<(), anyhow::Error> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind server to {}: {}", addr, e))?;

    log::info!("Listening on http://{}/", addr);
    log::info!("  - DNS: http://{}/dns/{{hostname}}?ns=...", addr);
    log::info!("  - Info: http://{}/info/{{domain}}", addr);

    axum::serve(listener, router(state))
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
