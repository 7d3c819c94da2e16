//! RDAP path of the domain info resolver.

use chrono::{DateTime, Utc};

use super::resolver::DomainInfoResolver;
use super::types::{DomainInfo, LookupSource};
use crate::error_handling::InfoError;
use crate::rdap::{RdapDomain, RdapErrorBody, RdapEvent, RdapResponse};

impl DomainInfoResolver {
    pub(super) async fn rdap_info(
        &self,
        domain: &str,
        lookup_source: LookupSource,
    ) -> Result<DomainInfo, InfoError> {
        let registry = self
            .rdap
            .query(domain)
            .await
            .map_err(|e| InfoError::RegistryQuery {
                protocol: "RDAP",
                reason: e.to_string(),
            })?;

        let registrar = registry
            .domain
            .entity_with_role("registrar")
            .map(|entity| {
                let name = entity.display_name().unwrap_or_default();
                match entity.iana_registrar_id() {
                    Some(id) => format!("{name} (IANA {id})"),
                    None => name,
                }
            })
            .unwrap_or_default();

        let registrar_record = if lookup_source == LookupSource::Registry {
            None
        } else {
            self.rdap_registrar(domain, &registry.domain, lookup_source)
                .await?
        };
        let working = registrar_record.as_ref().unwrap_or(&registry);

        let mut create_date = None;
        let mut update_date = None;
        let mut registrar_expiration_date = None;
        for event in &working.domain.events {
            let date = event_date(event)?;
            match event.event_action.as_str() {
                "registration" => create_date = Some(date),
                "last changed" => update_date = Some(date),
                "expiration" if registrar_record.is_some() => {
                    registrar_expiration_date = Some(date)
                }
                _ => {}
            }
        }

        let mut registry_expiration_date = None;
        for event in &registry.domain.events {
            let date = event_date(event)?;
            if event.event_action == "expiration" {
                registry_expiration_date = Some(date);
            }
        }

        Ok(DomainInfo {
            source: format!("RDAP ({})", working.url),
            domain: domain.to_string(),
            registrar,
            statuses: working.domain.status.clone(),
            nameservers: working
                .domain
                .nameservers
                .iter()
                .filter_map(|ns| ns.ldh_name.clone())
                .collect(),
            create_date,
            update_date,
            registry_expiration_date,
            registrar_expiration_date,
            registrant_name: working
                .domain
                .entity_with_role("registrant")
                .and_then(|entity| entity.display_name().or_else(|| entity.organization())),
            dnssec: registry.domain.delegation_signed(),
        })
    }

    /// Follows the registry record's registrar link.
    ///
    /// `Ok(None)` means "keep the registry record": there is no link, or the
    /// registrar failed and `lookup_source` tolerates that.
    async fn rdap_registrar(
        &self,
        domain: &str,
        registry: &RdapDomain,
        lookup_source: LookupSource,
    ) -> Result<Option<RdapResponse>, InfoError> {
        let Some(link) = registry.registrar_link() else {
            log::debug!("Registry RDAP for {domain} has no registrar link");
            return Ok(None);
        };

        match self.rdap.raw_query(&link.href, domain).await {
            Ok(response) => Ok(Some(response)),
            Err(e) if lookup_source == LookupSource::Registrar => Err(InfoError::RegistrarQuery {
                protocol: "RDAP",
                reason: e
                    .rdap_error()
                    .map(RdapErrorBody::summary)
                    .filter(|summary| !summary.is_empty())
                    .unwrap_or_else(|| e.to_string()),
            }),
            Err(e) => {
                log::warn!("Registrar RDAP for {domain} failed, keeping registry data: {e}");
                Ok(None)
            }
        }
    }
}

fn event_date(event: &RdapEvent) -> Result<DateTime<Utc>, InfoError> {
    DateTime::parse_from_rfc3339(&event.event_date)
        .map(|date| date.with_timezone(&Utc))
        .map_err(|source| InfoError::EventParse {
            action: event.event_action.clone(),
            date: event.event_date.clone(),
            source,
        })
}
