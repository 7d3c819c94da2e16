//! WHOIS data structures.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// A raw WHOIS answer and the server that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WhoisResponse {
    pub body: String,
    /// Hostname of the WHOIS server that answered.
    pub host: String,
}

/// Structured view of a free-text WHOIS response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WhoisRecord {
    /// `None` when the response carried no domain fields at all.
    pub domain: Option<WhoisDomain>,
    pub registrar: Option<WhoisContact>,
    pub registrant: Option<WhoisContact>,
}

/// Domain section of a WHOIS response.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WhoisDomain {
    /// Domain name as written by the server
    pub name: Option<String>,
    /// WHOIS server of the sponsoring registrar, if the server names one
    pub whois_server: Option<String>,
    /// Status tokens (e.g., "clientTransferProhibited"), first occurrence order
    pub statuses: Vec<String>,
    /// Lowercased nameserver hostnames without trailing dot
    pub nameservers: Vec<String>,
    pub created: Option<DateTime<Utc>>,
    pub updated: Option<DateTime<Utc>>,
    pub expires: Option<DateTime<Utc>>,
    pub dnssec: bool,
}

/// A contact block (registrar or registrant).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WhoisContact {
    pub name: Option<String>,
    pub organization: Option<String>,
}

/// Why a WHOIS response could not be turned into a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WhoisParseError {
    #[error("empty WHOIS response")]
    Empty,

    #[error("domain is not registered")]
    NotFound,

    #[error("WHOIS query rate limit exceeded")]
    RateLimited,
}

/// WHOIS transport failures.
#[derive(Error, Debug)]
pub enum WhoisClientError {
    #[error("{host}: {source}")]
    Io {
        host: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{host}: i/o timeout")]
    Timeout { host: String },

    #[error("no WHOIS server known for `.{tld}`")]
    NoServer { tld: String },

    #[error("`{0}` cannot be sent as a WHOIS query")]
    InvalidQuery(String),
}
