//! Domain info orchestration.

use std::sync::Arc;

use super::types::{DomainInfo, LookupSource, LookupType};
use crate::domain::canonicalize;
use crate::error_handling::InfoError;
use crate::rdap::RdapClient;
use crate::whois::WhoisClient;

/// Resolves registration data through RDAP and WHOIS.
///
/// Holds no per-request state; one instance serves concurrent requests.
#[derive(Clone)]
pub struct DomainInfoResolver {
    pub(super) rdap: Arc<dyn RdapClient>,
    pub(super) whois: Arc<dyn WhoisClient>,
}

impl DomainInfoResolver {
    pub fn new(rdap: Arc<dyn RdapClient>, whois: Arc<dyn WhoisClient>) -> Self {
        Self { rdap, whois }
    }

    /// Looks up registration data for the registrable domain of `domain`.
    ///
    /// # Arguments
    ///
    /// * `domain` - Any hostname; it is reduced to its registrable domain first
    /// * `lookup_type` - RDAP only, WHOIS only, or RDAP with WHOIS fallback
    /// * `lookup_source` - Whether to escalate to the registrar's service
    ///
    /// # Errors
    ///
    /// `InfoError::InvalidDomain` if `domain` has no registrable domain,
    /// otherwise the error of the last protocol attempted.
    pub async fn resolve(
        &self,
        domain: &str,
        lookup_type: LookupType,
        lookup_source: LookupSource,
    ) -> Result<DomainInfo, InfoError> {
        let domain = canonicalize(domain)?;
        log::debug!("Resolving {domain} (type {lookup_type}, source {lookup_source})");

        match lookup_type {
            LookupType::Rdap => self.rdap_info(&domain, lookup_source).await,
            LookupType::Whois => self.whois_info(&domain, lookup_source).await,
            LookupType::Auto => match self.rdap_info(&domain, lookup_source).await {
                Ok(info) => Ok(info),
                Err(e) => {
                    log::info!(
                        "RDAP lookup for {domain} failed, falling back to WHOIS: {}",
                        e.lines().join("; ")
                    );
                    self.whois_info(&domain, lookup_source).await
                }
            },
        }
    }
}
