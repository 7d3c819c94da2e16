//! Domain registration lookups.
//!
//! `DomainInfoResolver` answers "who registered this domain and when does it
//! expire" by asking the TLD registry over RDAP or WHOIS and, unless told not
//! to, following the registry's pointer to the registrar's own service. The
//! two protocol paths live in their own files; both produce a `DomainInfo`.

mod rdap;
mod resolver;
mod types;
mod whois;

// Re-export public API
pub use resolver::DomainInfoResolver;
pub use types::{DomainInfo, LookupSource, LookupType};

#[cfg(test)]
mod tests;
