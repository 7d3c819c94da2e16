//! DNS result types.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single answer record, flattened for presentation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DnsRecord {
    /// Owner name relative to the queried hostname; `@` for the apex.
    pub name: String,
    /// Record type mnemonic, e.g. `A` or `DNSKEY`.
    #[serde(rename = "type")]
    pub record_type: String,
    /// Human-readable rendering of the record data.
    pub data: String,
    pub ttl: u32,
}

/// Records keyed by the textual IP address of the nameserver that served them.
pub type RecordMap = BTreeMap<String, Vec<DnsRecord>>;
