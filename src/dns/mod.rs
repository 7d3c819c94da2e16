//! Authoritative DNS record collection.
//!
//! This module queries a domain's nameservers directly (never a recursive
//! resolver) for a fixed set of record types:
//! - Address records (A, AAAA) and aliases (CNAME)
//! - Text (TXT) and mail exchanger (MX) records
//! - Zone authority (SOA)
//! - DNSSEC delegation and key material (DS, DNSKEY)
//!
//! Each nameserver address either answers every record type or contributes
//! nothing: a partially-answered address is treated as failed.

mod records;
mod resolution;
mod resolver;
mod transport;
mod types;

// Re-export public API
pub use resolution::{resolve_nameserver_addresses, HostLookup};
pub use resolver::{DnsResolver, RECORD_TYPES};
pub use transport::{build_query, DnsExchange, UdpExchange};
pub use types::{DnsRecord, RecordMap};
