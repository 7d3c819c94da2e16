//! Multi-record resolution against authoritative nameservers.

use std::collections::BTreeMap;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;

use futures::future::join_all;
use hickory_resolver::proto::rr::{Name, Record, RecordType};
use rand::seq::SliceRandom;

use super::records::{sort_and_compact, to_dns_record};
use super::resolution::{resolve_nameserver_addresses, HostLookup};
use super::transport::{build_query, DnsExchange};
use super::types::{DnsRecord, RecordMap};
use crate::config::DNS_PORT;
use crate::error_handling::DnsError;

/// Record types asked of every nameserver address.
pub const RECORD_TYPES: [RecordType; 8] = [
    RecordType::A,
    RecordType::AAAA,
    RecordType::CNAME,
    RecordType::TXT,
    RecordType::MX,
    RecordType::SOA,
    RecordType::DS,
    RecordType::DNSKEY,
];

/// Collects records for a hostname directly from its nameservers.
///
/// Holds no per-request state; one instance serves concurrent requests.
#[derive(Clone)]
pub struct DnsResolver {
    transport: Arc<dyn DnsExchange>,
    hosts: Arc<dyn HostLookup>,
}

impl DnsResolver {
    pub fn new(transport: Arc<dyn DnsExchange>, hosts: Arc<dyn HostLookup>) -> Self {
        Self { transport, hosts }
    }

    /// Resolves `nameservers` to IPv4 addresses, then queries them.
    ///
    /// # Errors
    ///
    /// Returns `DnsError::NoAddresses` if no nameserver yields an IPv4
    /// address; otherwise whatever [`resolve_via_addresses`] returns.
    ///
    /// [`resolve_via_addresses`]: DnsResolver::resolve_via_addresses
    pub async fn resolve_via_nameservers(
        &self,
        hostname: &str,
        nameservers: &[String],
        deep: bool,
    ) -> Result<RecordMap, DnsError> {
        let addresses = resolve_nameserver_addresses(self.hosts.as_ref(), nameservers).await;
        if addresses.is_empty() {
            return Err(DnsError::NoAddresses);
        }
        self.resolve_via_addresses(hostname, &addresses, deep).await
    }

    /// Queries `addresses` for every type in [`RECORD_TYPES`].
    ///
    /// In shallow mode (`deep == false`) the addresses are tried one at a time
    /// in random order and the first address that answers every query wins.
    /// If none does, or in deep mode, every address is queried and reported.
    ///
    /// # Errors
    ///
    /// In full mode any failed address yields `DnsError::AllAddressesFailed`,
    /// which still carries the map (failed addresses map to an empty list).
    pub async fn resolve_via_addresses(
        &self,
        hostname: &str,
        addresses: &[IpAddr],
        deep: bool,
    ) -> Result<RecordMap, DnsError> {
        let name = query_name(hostname)?;

        if !deep {
            let mut order = addresses.to_vec();
            order.shuffle(&mut rand::rng());
            for address in order {
                match self.query_address(&name, address).await {
                    Ok(records) => return Ok(BTreeMap::from([(address.to_string(), records)])),
                    Err(e) => log::debug!("Nameserver {address} failed for {hostname}: {e}"),
                }
            }
            log::info!(
                "No nameserver fully answered for {hostname}, querying all {} addresses",
                addresses.len()
            );
        }

        let mut records = RecordMap::new();
        let mut errors = Vec::new();
        for &address in addresses {
            match self.query_address(&name, address).await {
                Ok(found) => {
                    records.insert(address.to_string(), found);
                }
                Err(e) => {
                    records.insert(address.to_string(), Vec::new());
                    errors.push(e);
                }
            }
        }

        if errors.is_empty() {
            Ok(records)
        } else {
            Err(DnsError::AllAddressesFailed { records, errors })
        }
    }

    /// Queries one address for all record types concurrently.
    ///
    /// All sub-queries are awaited before any answer is looked at; a single
    /// failure discards the address's answers entirely.
    async fn query_address(&self, name: &Name, address: IpAddr) -> Result<Vec<DnsRecord>, DnsError> {
        let server = SocketAddr::new(address, DNS_PORT);
        let outcomes = join_all(
            RECORD_TYPES
                .iter()
                .map(|&record_type| self.query_type(name, record_type, server)),
        )
        .await;

        let (answers, failures): (Vec<_>, Vec<_>) = outcomes.into_iter().partition(Result::is_ok);
        if !failures.is_empty() {
            return Err(DnsError::AddressQuery {
                address,
                errors: failures.into_iter().filter_map(Result::err).collect(),
            });
        }

        let zone = name.to_string();
        let mut records: Vec<DnsRecord> = answers
            .into_iter()
            .filter_map(Result::ok)
            .flatten()
            .map(|record| to_dns_record(&record, &zone))
            .collect();
        sort_and_compact(&mut records);
        Ok(records)
    }

    async fn query_type(
        &self,
        name: &Name,
        record_type: RecordType,
        server: SocketAddr,
    ) -> Result<Vec<Record>, DnsError> {
        let query = build_query(name, record_type);
        let response = self
            .transport
            .exchange(&query, server)
            .await
            .map_err(|source| DnsError::RecordQuery {
                record_type,
                source,
            })?;
        log::debug!(
            "{record_type} query for {name} to {server}: {} answer(s), {}",
            response.answers().len(),
            response.response_code()
        );
        Ok(response.answers().to_vec())
    }
}

/// Parses `hostname` as a fully-qualified query name.
fn query_name(hostname: &str) -> Result<Name, DnsError> {
    let invalid = |reason: String| DnsError::InvalidHostname {
        hostname: hostname.to_string(),
        reason,
    };
    if hostname.trim().is_empty() {
        return Err(invalid("empty name".to_string()));
    }
    let mut name = Name::from_str(hostname).map_err(|e| invalid(e.to_string()))?;
    name.set_fqdn(true);
    Ok(name)
}
