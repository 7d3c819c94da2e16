//! RDAP lookups.
//!
//! This module provides:
//! - Serde models of the RDAP objects a domain lookup reads
//! - An HTTP client that finds the registry service through the IANA
//!   bootstrap registry and can follow a registrar link verbatim

mod client;
mod types;

// Re-export public API
pub use client::{HttpRdapClient, RdapClient, RdapClientError};
pub use types::{
    PublicId, RdapDomain, RdapEntity, RdapErrorBody, RdapEvent, RdapLink, RdapNameserver,
    RdapResponse, SecureDns,
};
