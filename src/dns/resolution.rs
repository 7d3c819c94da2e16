//! Nameserver hostname resolution.
//!
//! Nameserver hostnames are turned into addresses through the system
//! resolver; only the resulting IPv4 addresses are queried.

use std::net::IpAddr;

use async_trait::async_trait;
use hickory_resolver::TokioResolver;

/// Resolves a hostname to its addresses.
#[async_trait]
pub trait HostLookup: Send + Sync {
    async fn lookup(&self, host: &str) -> anyhow::Result<Vec<IpAddr>>;
}

#[async_trait]
impl HostLookup for TokioResolver {
    async fn lookup(&self, host: &str) -> anyhow::Result<Vec<IpAddr>> {
        let response = self.lookup_ip(host).await?;
        Ok(response.iter().collect())
    }
}

/// Resolves each nameserver hostname in order and collects the IPv4 addresses.
///
/// # Arguments
///
/// * `hosts` - The hostname lookup used for each nameserver
/// * `nameservers` - Nameserver hostnames, e.g. `ns1.example.com`
///
/// # Returns
///
/// Every IPv4 address found, in nameserver order. Lookup failures are logged
/// and skipped; IPv6 addresses are discarded. The result may be empty.
pub async fn resolve_nameserver_addresses(
    hosts: &dyn HostLookup,
    nameservers: &[String],
) -> Vec<IpAddr> {
    let mut addresses = Vec::new();
    for nameserver in nameservers {
        match hosts.lookup(nameserver).await {
            Ok(found) => {
                log::debug!("Nameserver {nameserver} resolved to {found:?}");
                addresses.extend(found.into_iter().filter(IpAddr::is_ipv4));
            }
            Err(e) => {
                log::debug!("Failed to resolve nameserver {nameserver}: {e}");
            }
        }
    }
    addresses
}
