//! Error type definitions.

use std::net::{IpAddr, SocketAddr};

use hickory_resolver::proto::rr::RecordType;
use hickory_resolver::proto::ProtoError;
use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use thiserror::Error;

use super::join_errors;
use crate::dns::RecordMap;
use crate::whois::WhoisParseError;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// Error initializing the hostname resolver.
    #[error("DNS resolver initialization error: {0}")]
    DnsResolverError(String),
}

/// A single DNS exchange that did not produce a usable response.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Socket-level failure.
    #[error("{server}: {source}")]
    Io {
        server: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The query could not be encoded or the response could not be decoded.
    #[error("{server}: malformed DNS message: {source}")]
    Proto {
        server: SocketAddr,
        #[source]
        source: ProtoError,
    },

    /// No response within the transport timeout.
    #[error("{server}: i/o timeout")]
    Timeout { server: SocketAddr },
}

/// Failures of the DNS resolver.
#[derive(Error, Debug)]
pub enum DnsError {
    /// None of the nameserver hostnames resolved to an IPv4 address.
    #[error("failed to get ip for nameservers")]
    NoAddresses,

    /// The queried hostname is not a valid DNS name.
    #[error("`{hostname}` is not a valid DNS name: {reason}")]
    InvalidHostname { hostname: String, reason: String },

    /// One of the per-type sub-queries failed.
    #[error("{record_type} query to {source}")]
    RecordQuery {
        record_type: RecordType,
        #[source]
        source: TransportError,
    },

    /// Every sub-query failure of one address.
    #[error("{}", join_errors(.errors))]
    AddressQuery {
        address: IpAddr,
        errors: Vec<DnsError>,
    },

    /// One or more addresses failed in a full query.
    ///
    /// `records` still holds one entry per queried address; failed
    /// addresses map to an empty list.
    #[error("{}", join_errors(.errors))]
    AllAddressesFailed {
        records: RecordMap,
        errors: Vec<DnsError>,
    },
}

/// Failures of the domain info resolver.
#[derive(Error, Debug)]
pub enum InfoError {
    /// The input does not reduce to a registrable domain.
    #[error("invalid domain `{domain}`: {reason}")]
    InvalidDomain { domain: String, reason: String },

    /// The registry service could not be queried.
    #[error("failed to get registry {protocol}\n{reason}")]
    RegistryQuery {
        protocol: &'static str,
        reason: String,
    },

    /// The registrar service could not be queried (explicit registrar source only).
    #[error("failed to get registrar {protocol}\n{reason}")]
    RegistrarQuery {
        protocol: &'static str,
        reason: String,
    },

    /// An RDAP event carried a date that is not RFC3339.
    #[error("failed to parse `{action}` event date `{date}`\n{source}")]
    EventParse {
        action: String,
        date: String,
        #[source]
        source: chrono::ParseError,
    },

    /// A WHOIS response could not be parsed.
    #[error("failed to parse {level} WHOIS response\n{source}")]
    Parse {
        level: &'static str,
        #[source]
        source: WhoisParseError,
    },

    /// The parsed WHOIS response has no domain section.
    #[error("no domain in parsed WHOIS response")]
    MissingDomain,
}

impl InfoError {
    /// Splits the message into the lines the HTTP layer reports.
    pub fn lines(&self) -> Vec<String> {
        self.to_string().split('\n').map(str::to_string).collect()
    }
}

impl DnsError {
    /// Splits the message into the lines the HTTP layer reports.
    pub fn lines(&self) -> Vec<String> {
        self.to_string().split('\n').map(str::to_string).collect()
    }
}
