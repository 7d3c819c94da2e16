//! WHOIS path of the domain info resolver.

use super::resolver::DomainInfoResolver;
use super::types::{DomainInfo, LookupSource};
use crate::error_handling::InfoError;
use crate::whois::{parse_whois, WhoisRecord};

impl DomainInfoResolver {
    pub(super) async fn whois_info(
        &self,
        domain: &str,
        lookup_source: LookupSource,
    ) -> Result<DomainInfo, InfoError> {
        let response =
            self.whois
                .fetch(domain, None)
                .await
                .map_err(|e| InfoError::RegistryQuery {
                    protocol: "WHOIS",
                    reason: e.to_string(),
                })?;
        let registry = parse_whois(&response.body).map_err(|source| InfoError::Parse {
            level: "registry",
            source,
        })?;

        let registrar_record = match registrar_server(&registry, &response.host) {
            Some(host) if lookup_source != LookupSource::Registry => {
                self.whois_registrar(domain, &host, lookup_source).await?
            }
            _ => None,
        };
        let (working, host) = match &registrar_record {
            Some((record, host)) => (record, host),
            None => (&registry, &response.host),
        };

        let section = working.domain.as_ref().ok_or(InfoError::MissingDomain)?;

        Ok(DomainInfo {
            source: format!("WHOIS ({host})"),
            domain: domain.to_string(),
            registrar: registry
                .registrar
                .as_ref()
                .and_then(|registrar| registrar.name.clone())
                .unwrap_or_default(),
            statuses: section.statuses.clone(),
            nameservers: section.nameservers.clone(),
            create_date: section.created,
            update_date: section.updated,
            registry_expiration_date: registry.domain.as_ref().and_then(|d| d.expires),
            registrar_expiration_date: registrar_record
                .as_ref()
                .and(section.expires),
            registrant_name: working
                .registrant
                .as_ref()
                .and_then(|r| r.name.clone().or_else(|| r.organization.clone())),
            dnssec: section.dnssec,
        })
    }

    /// Queries the registrar WHOIS server `host`.
    ///
    /// `Ok(None)` means "keep the registry record".
    async fn whois_registrar(
        &self,
        domain: &str,
        host: &str,
        lookup_source: LookupSource,
    ) -> Result<Option<(WhoisRecord, String)>, InfoError> {
        let strict = lookup_source == LookupSource::Registrar;

        let response = match self.whois.fetch(domain, Some(host)).await {
            Ok(response) => response,
            Err(e) if strict => {
                return Err(InfoError::RegistrarQuery {
                    protocol: "WHOIS",
                    reason: e.to_string(),
                })
            }
            Err(e) => {
                log::warn!("Registrar WHOIS {host} failed for {domain}, keeping registry data: {e}");
                return Ok(None);
            }
        };

        match parse_whois(&response.body) {
            Ok(record) => Ok(Some((record, response.host))),
            Err(source) if strict => Err(InfoError::Parse {
                level: "registrar",
                source,
            }),
            Err(e) => {
                log::warn!("Registrar WHOIS {host} answer for {domain} unparseable, keeping registry data: {e}");
                Ok(None)
            }
        }
    }
}

/// The registrar WHOIS server named by `registry`, unless it is `answered_by`.
fn registrar_server(registry: &WhoisRecord, answered_by: &str) -> Option<String> {
    let named = registry.domain.as_ref()?.whois_server.as_deref()?;
    let host = named.trim_matches(|c: char| c == '/' || c.is_whitespace());
    if host.is_empty() || host.eq_ignore_ascii_case(answered_by) {
        return None;
    }
    Some(host.to_string())
}
