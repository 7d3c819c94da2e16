//! Error handling.
//!
//! This module provides the error types of both resolution engines and of
//! service start-up:
//! - `DnsError` / `TransportError` for the DNS resolver
//! - `InfoError` for the domain info resolver
//! - `InitializationError` for shared resource setup
//!
//! Aggregate errors render one underlying failure per line so the HTTP layer
//! can hand them out as a list.

mod types;

// Re-export public API
pub use types::{DnsError, InfoError, InitializationError, TransportError};

/// Renders a list of errors one per line, nested aggregates flattened.
pub(crate) fn join_errors<E: std::fmt::Display>(errors: &[E]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
