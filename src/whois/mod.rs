//! WHOIS lookups.
//!
//! This module provides:
//! - A TCP port-43 client that finds a TLD's registry server through the
//!   IANA root server
//! - A free-text parser producing a structured `WhoisRecord`
//! - A tolerant multi-format date parser

mod client;
mod parse;
mod types;

// Re-export public API
pub use client::{TcpWhoisClient, WhoisClient};
pub use parse::parse_whois;
pub use types::{
    WhoisClientError, WhoisContact, WhoisDomain, WhoisParseError, WhoisRecord, WhoisResponse,
};
