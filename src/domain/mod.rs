//! Domain canonicalization.
//!
//! Reduces an arbitrary hostname to the unit under which it is registered
//! (effective TLD + 1) using the Public Suffix List compiled into `psl`.

use psl::{List, Psl};
use url::Host;

use crate::error_handling::InfoError;

/// Reduces `domain` to its registrable domain.
///
/// The input is trimmed, a trailing root dot is dropped, and the name is
/// IDNA-normalized (ASCII lowercase, punycode for non-ASCII labels) before the
/// Public Suffix List is consulted.
///
/// # Errors
///
/// Returns `InfoError::InvalidDomain` if the input is not a hostname, is an IP
/// address, has fewer than two labels, is itself a public suffix, or ends in a
/// suffix no Public Suffix List rule knows about.
///
/// # Examples
///
/// ```
/// use domain_inspector::canonicalize;
///
/// assert_eq!(canonicalize("www.EXAMPLE.com").unwrap(), "example.com");
/// assert!(canonicalize("com").is_err());
/// ```
pub fn canonicalize(domain: &str) -> Result<String, InfoError> {
    let invalid = |reason: &str| InfoError::InvalidDomain {
        domain: domain.to_string(),
        reason: reason.to_string(),
    };

    let trimmed = domain.trim().trim_end_matches('.');
    let host = match Host::parse(trimmed) {
        Ok(Host::Domain(host)) => host,
        Ok(Host::Ipv4(_)) | Ok(Host::Ipv6(_)) => {
            return Err(invalid("IP addresses do not have registrable domains"))
        }
        Err(e) => return Err(invalid(&e.to_string())),
    };

    let labels: Vec<&str> = host.split('.').collect();
    if labels.iter().any(|label| label.is_empty()) {
        return Err(invalid("empty label"));
    }
    if labels.len() < 2 {
        return Err(invalid("domain is too short"));
    }

    let registrable = List
        .domain(host.as_bytes())
        .ok_or_else(|| invalid("domain is a public suffix"))?;
    if !registrable.suffix().is_known() {
        return Err(invalid("no public suffix rule matches"));
    }

    Ok(String::from_utf8_lossy(registrable.as_bytes()).into_owned())
}
