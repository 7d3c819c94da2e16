//! domain_inspector library: DNS records and registration data for a domain
//!
//! This library answers two questions about a domain name:
//! - Which records do its nameservers publish? `DnsResolver` asks the
//!   authoritative servers directly for A, AAAA, CNAME, TXT, MX, SOA, DS and
//!   DNSKEY records.
//! - Who registered it and when does it expire? `DomainInfoResolver` asks the
//!   registry over RDAP or WHOIS and follows the registry's pointer to the
//!   registrar.
//!
//! Both are also served over HTTP by [`run_server`].
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use std::time::Duration;
//!
//! use domain_inspector::dns::{DnsResolver, UdpExchange};
//! use domain_inspector::initialization::init_resolver;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dns = DnsResolver::new(
//!     Arc::new(UdpExchange::new(Duration::from_secs(2), None)),
//!     Arc::new(init_resolver(Duration::from_secs(2))?),
//! );
//!
//! let records = dns
//!     .resolve_via_nameservers("example.com", &["a.iana-servers.net".to_string()], false)
//!     .await?;
//! for (server, records) in &records {
//!     println!("{server}: {} records", records.len());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

pub mod config;
pub mod dns;
mod domain;
pub mod error_handling;
pub mod info;
pub mod initialization;
mod net;
pub mod rdap;
pub mod server;
pub mod whois;

// Re-export public API
pub use config::{Config, LogFormat, LogLevel};
pub use dns::{DnsRecord, DnsResolver, RecordMap};
pub use domain::canonicalize;
pub use error_handling::{DnsError, InfoError};
pub use info::{DomainInfo, DomainInfoResolver, LookupSource, LookupType};
pub use run::{build_state, run_server};

// Internal run module (wires the collaborators together and serves them)
mod run {
    use std::sync::Arc;

    use anyhow::{Context, Result};
    use log::info;

    use crate::config::Config;
    use crate::dns::{DnsResolver, UdpExchange};
    use crate::error_handling::InitializationError;
    use crate::info::DomainInfoResolver;
    use crate::initialization::{init_client, init_resolver};
    use crate::rdap::HttpRdapClient;
    use crate::server::{start_server, AppState};
    use crate::whois::TcpWhoisClient;

    /// Builds both resolvers with their production collaborators.
    ///
    /// # Errors
    ///
    /// Returns an `InitializationError` if the hostname resolver or the HTTP
    /// client cannot be created.
    pub fn build_state(config: &Config) -> Result<AppState, InitializationError> {
        let hosts = init_resolver(config.dns_timeout())?;
        let transport = UdpExchange::new(config.dns_timeout(), config.source_ip);
        let dns = DnsResolver::new(Arc::new(transport), Arc::new(hosts));

        let client = init_client(config.http_timeout(), config.source_ip)?;
        let rdap = HttpRdapClient::new(client, config.rdap_bootstrap_url.clone());
        let whois = TcpWhoisClient::new(config.whois_timeout(), config.source_ip);
        let info = DomainInfoResolver::new(Arc::new(rdap), Arc::new(whois));

        Ok(AppState {
            dns: Arc::new(dns),
            info: Arc::new(info),
        })
    }

    /// Validates `config`, builds the resolvers and serves HTTP until the
    /// listener fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, a shared resource
    /// cannot be initialized, or the server cannot bind or stops serving.
    pub async fn run_server(config: Config) -> Result<()> {
        config.validate().context("Invalid configuration")?;

        let state = build_state(&config).context("Failed to initialize resolvers")?;
        match config.source_ip {
            Some(ip) => info!("Outbound connections bound to {ip}"),
            None => info!("Outbound connections use the OS-chosen source address"),
        }

        start_server(config.listen_addr, state).await
    }
}
