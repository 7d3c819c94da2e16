//! Domain info resolver tests.
//!
//! RDAP and WHOIS are replaced with in-memory fakes that record every call.

use super::*;
use crate::error_handling::InfoError;
use crate::rdap::{RdapClient, RdapClientError, RdapDomain, RdapErrorBody, RdapResponse};
use crate::whois::{WhoisClient, WhoisClientError, WhoisParseError, WhoisResponse};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use serde_json::json;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::{Arc, Mutex};
use strum::IntoEnumIterator;

const REGISTRY_URL: &str = "https://rdap.registry.example/domain/example.com";
const REGISTRAR_URL: &str = "https://rdap.registrar.example/domain/example.com";
const REGISTRY_WHOIS: &str = "whois.registry.example";
const REGISTRAR_WHOIS: &str = "whois.registrar.example";

#[derive(Default)]
struct FakeRdap {
    registry: Option<RdapDomain>,
    /// `Err` carries the RDAP error object returned with an HTTP 404.
    registrar: Option<Result<RdapDomain, Option<RdapErrorBody>>>,
    calls: Mutex<Vec<String>>,
}

impl FakeRdap {
    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl RdapClient for FakeRdap {
    async fn query(&self, domain: &str) -> Result<RdapResponse, RdapClientError> {
        self.calls.lock().unwrap().push(format!("query {domain}"));
        self.registry
            .clone()
            .map(|domain| RdapResponse {
                domain,
                url: REGISTRY_URL.to_string(),
            })
            .ok_or_else(|| RdapClientError::NoService {
                domain: domain.to_string(),
            })
    }

    async fn raw_query(&self, url: &str, domain: &str) -> Result<RdapResponse, RdapClientError> {
        self.calls.lock().unwrap().push(format!("raw {url}"));
        match &self.registrar {
            Some(Ok(record)) => Ok(RdapResponse {
                domain: record.clone(),
                url: url.to_string(),
            }),
            Some(Err(body)) => Err(RdapClientError::Status {
                url: url.to_string(),
                status: 404,
                body: body.clone(),
            }),
            None => Err(RdapClientError::NoService {
                domain: domain.to_string(),
            }),
        }
    }
}

/// Bodies keyed by host override (`None` = registry discovery).
#[derive(Default)]
struct FakeWhois {
    bodies: HashMap<Option<String>, String>,
    calls: Mutex<Vec<(String, Option<String>)>>,
}

impl FakeWhois {
    fn registry(mut self, body: &str) -> Self {
        self.bodies.insert(None, body.to_string());
        self
    }

    fn server(mut self, host: &str, body: &str) -> Self {
        self.bodies.insert(Some(host.to_string()), body.to_string());
        self
    }

    fn calls(&self) -> Vec<(String, Option<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl WhoisClient for FakeWhois {
    async fn fetch(
        &self,
        query: &str,
        host: Option<&str>,
    ) -> Result<WhoisResponse, WhoisClientError> {
        let key = host.map(str::to_string);
        self.calls
            .lock()
            .unwrap()
            .push((query.to_string(), key.clone()));
        let host = host.unwrap_or(REGISTRY_WHOIS).to_string();
        match self.bodies.get(&key) {
            Some(body) => Ok(WhoisResponse {
                body: body.clone(),
                host,
            }),
            None => Err(WhoisClientError::Timeout { host }),
        }
    }
}

fn date(y: i32, m: u32, d: u32) -> Option<chrono::DateTime<Utc>> {
    Some(Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap())
}

fn registry_rdap() -> RdapDomain {
    serde_json::from_value(json!({
        "objectClassName": "domain",
        "ldhName": "EXAMPLE.COM",
        "status": ["client transfer prohibited"],
        "entities": [{
            "roles": ["registrar"],
            "publicIds": [{"type": "IANA Registrar ID", "identifier": "376"}],
            "vcardArray": ["vcard", [["fn", {}, "text", "Example Registrar, Inc."]]]
        }],
        "events": [
            {"eventAction": "registration", "eventDate": "1995-08-14T00:00:00Z"},
            {"eventAction": "last changed", "eventDate": "2024-08-14T00:00:00Z"},
            {"eventAction": "expiration", "eventDate": "2025-08-13T00:00:00Z"}
        ],
        "links": [{"rel": "related", "href": REGISTRAR_URL, "type": "application/rdap+json"}],
        "nameservers": [{"ldhName": "A.IANA-SERVERS.NET"}, {"ldhName": "B.IANA-SERVERS.NET"}],
        "secureDNS": {"delegationSigned": true}
    }))
    .unwrap()
}

fn registrar_rdap() -> RdapDomain {
    serde_json::from_value(json!({
        "objectClassName": "domain",
        "ldhName": "example.com",
        "status": ["client transfer prohibited", "client update prohibited"],
        "entities": [{
            "roles": ["registrant"],
            "vcardArray": ["vcard", [["fn", {}, "text", "Example Holder"]]]
        }],
        "events": [
            {"eventAction": "registration", "eventDate": "1995-08-15T00:00:00Z"},
            {"eventAction": "expiration", "eventDate": "2026-08-13T00:00:00Z"}
        ],
        "nameservers": [{"ldhName": "ns1.registrar.example"}]
    }))
    .unwrap()
}

fn resolver(rdap: &Arc<FakeRdap>, whois: &Arc<FakeWhois>) -> DomainInfoResolver {
    DomainInfoResolver::new(rdap.clone(), whois.clone())
}

fn rdap_only(rdap: FakeRdap) -> (Arc<FakeRdap>, Arc<FakeWhois>) {
    (Arc::new(rdap), Arc::new(FakeWhois::default()))
}

const REGISTRY_WHOIS_BODY: &str = "Domain Name: EXAMPLE.COM
Registrar WHOIS Server: whois.registrar.example/
Registrar: Example Registrar, Inc.
Creation Date: 1995-08-14T00:00:00Z
Updated Date: 2024-08-14T00:00:00Z
Registry Expiry Date: 2025-08-13T00:00:00Z
Domain Status: clientTransferProhibited https://icann.org/epp#clientTransferProhibited
Name Server: A.IANA-SERVERS.NET
DNSSEC: signedDelegation
";

const REGISTRAR_WHOIS_BODY: &str = "Domain Name: example.com
Registrar: Some Reseller
Creation Date: 1995-08-15T00:00:00Z
Registrar Registration Expiration Date: 2026-08-13T00:00:00Z
Domain Status: clientTransferProhibited
Domain Status: clientUpdateProhibited
Name Server: ns1.registrar.example
Registrant Name: REDACTED FOR PRIVACY
DNSSEC: unsigned
";

// ---------------------------------------------------------------- RDAP path

#[tokio::test]
async fn test_rdap_registry_only() {
    let (rdap, whois) = rdap_only(FakeRdap {
        registry: Some(registry_rdap()),
        registrar: Some(Ok(registrar_rdap())),
        ..Default::default()
    });

    let info = resolver(&rdap, &whois)
        .resolve("www.EXAMPLE.com", LookupType::Rdap, LookupSource::Registry)
        .await
        .unwrap();

    assert_eq!(
        info,
        DomainInfo {
            source: format!("RDAP ({REGISTRY_URL})"),
            domain: "example.com".to_string(),
            registrar: "Example Registrar, Inc. (IANA 376)".to_string(),
            statuses: vec!["client transfer prohibited".to_string()],
            nameservers: vec![
                "A.IANA-SERVERS.NET".to_string(),
                "B.IANA-SERVERS.NET".to_string()
            ],
            create_date: date(1995, 8, 14),
            update_date: date(2024, 8, 14),
            registry_expiration_date: date(2025, 8, 13),
            registrar_expiration_date: None,
            registrant_name: None,
            dnssec: true,
        }
    );
    assert_eq!(rdap.calls(), vec!["query example.com"]);
}

#[tokio::test]
async fn test_rdap_escalates_to_registrar() {
    let (rdap, whois) = rdap_only(FakeRdap {
        registry: Some(registry_rdap()),
        registrar: Some(Ok(registrar_rdap())),
        ..Default::default()
    });

    let info = resolver(&rdap, &whois)
        .resolve("example.com", LookupType::Rdap, LookupSource::Auto)
        .await
        .unwrap();

    assert_eq!(info.source, format!("RDAP ({REGISTRAR_URL})"));
    // Registrar name and DNSSEC stay registry-level
    assert_eq!(info.registrar, "Example Registrar, Inc. (IANA 376)");
    assert!(info.dnssec);
    assert_eq!(info.statuses.len(), 2);
    assert_eq!(info.nameservers, vec!["ns1.registrar.example"]);
    assert_eq!(info.create_date, date(1995, 8, 15));
    assert_eq!(info.update_date, None);
    assert_eq!(info.registry_expiration_date, date(2025, 8, 13));
    assert_eq!(info.registrar_expiration_date, date(2026, 8, 13));
    assert_eq!(info.registrant_name.as_deref(), Some("Example Holder"));
    assert_eq!(
        rdap.calls(),
        vec!["query example.com".to_string(), format!("raw {REGISTRAR_URL}")]
    );
}

#[tokio::test]
async fn test_rdap_auto_source_tolerates_registrar_failure() {
    let (rdap, whois) = rdap_only(FakeRdap {
        registry: Some(registry_rdap()),
        registrar: None,
        ..Default::default()
    });

    let info = resolver(&rdap, &whois)
        .resolve("example.com", LookupType::Auto, LookupSource::Auto)
        .await
        .unwrap();

    assert_eq!(info.source, format!("RDAP ({REGISTRY_URL})"));
    assert_eq!(info.registrar_expiration_date, None);
    assert_eq!(info.registry_expiration_date, date(2025, 8, 13));
    assert!(whois.calls().is_empty());
}

#[tokio::test]
async fn test_rdap_registrar_source_fails_with_error_body() {
    let (rdap, whois) = rdap_only(FakeRdap {
        registry: Some(registry_rdap()),
        registrar: Some(Err(Some(RdapErrorBody {
            error_code: Some(404),
            title: Some("Not Found".to_string()),
            description: vec!["no such domain".to_string()],
        }))),
        ..Default::default()
    });

    let err = resolver(&rdap, &whois)
        .resolve("example.com", LookupType::Rdap, LookupSource::Registrar)
        .await
        .unwrap_err();

    assert!(matches!(err, InfoError::RegistrarQuery { protocol: "RDAP", .. }));
    assert_eq!(
        err.lines(),
        vec!["failed to get registrar RDAP", "Not Found;no such domain"]
    );
}

#[tokio::test]
async fn test_rdap_registrar_source_fails_without_error_body() {
    let (rdap, whois) = rdap_only(FakeRdap {
        registry: Some(registry_rdap()),
        registrar: Some(Err(None)),
        ..Default::default()
    });

    let err = resolver(&rdap, &whois)
        .resolve("example.com", LookupType::Rdap, LookupSource::Registrar)
        .await
        .unwrap_err();
    assert_eq!(
        err.lines(),
        vec![
            "failed to get registrar RDAP".to_string(),
            format!("{REGISTRAR_URL} returned HTTP 404")
        ]
    );
}

#[tokio::test]
async fn test_rdap_registrar_source_without_link_uses_registry() {
    let mut registry = registry_rdap();
    registry.links.clear();
    let (rdap, whois) = rdap_only(FakeRdap {
        registry: Some(registry),
        ..Default::default()
    });

    let info = resolver(&rdap, &whois)
        .resolve("example.com", LookupType::Rdap, LookupSource::Registrar)
        .await
        .unwrap();
    assert_eq!(info.source, format!("RDAP ({REGISTRY_URL})"));
    assert_eq!(rdap.calls().len(), 1);
}

#[tokio::test]
async fn test_rdap_malformed_event_date() {
    let mut registry = registry_rdap();
    registry.events[1].event_date = "14/08/2024".to_string();
    let (rdap, whois) = rdap_only(FakeRdap {
        registry: Some(registry),
        ..Default::default()
    });

    let err = resolver(&rdap, &whois)
        .resolve("example.com", LookupType::Rdap, LookupSource::Registry)
        .await
        .unwrap_err();
    match err {
        InfoError::EventParse { action, date, .. } => {
            assert_eq!(action, "last changed");
            assert_eq!(date, "14/08/2024");
        }
        other => panic!("expected EventParse, got {other:?}"),
    }
}

#[tokio::test]
async fn test_rdap_registrant_org_fallback_and_bare_registrar() {
    let registry: RdapDomain = serde_json::from_value(json!({
        "objectClassName": "domain",
        "entities": [
            {
                "roles": ["registrar"],
                "vcardArray": ["vcard", [["fn", {}, "text", "Bare Registrar"]]]
            },
            {
                "roles": ["registrant"],
                "vcardArray": ["vcard", [["fn", {}, "text", ""], ["org", {}, "text", "Holder Org"]]]
            }
        ]
    }))
    .unwrap();
    let (rdap, whois) = rdap_only(FakeRdap {
        registry: Some(registry),
        ..Default::default()
    });

    let info = resolver(&rdap, &whois)
        .resolve("example.com", LookupType::Rdap, LookupSource::Registry)
        .await
        .unwrap();
    assert_eq!(info.registrar, "Bare Registrar");
    assert_eq!(info.registrant_name.as_deref(), Some("Holder Org"));
    assert!(!info.dnssec);
    assert_eq!(info.create_date, None);
}

#[tokio::test]
async fn test_rdap_only_does_not_fall_back() {
    let rdap = Arc::new(FakeRdap::default());
    let whois = Arc::new(FakeWhois::default().registry(REGISTRY_WHOIS_BODY));

    let err = resolver(&rdap, &whois)
        .resolve("example.com", LookupType::Rdap, LookupSource::Auto)
        .await
        .unwrap_err();
    assert!(matches!(err, InfoError::RegistryQuery { protocol: "RDAP", .. }));
    assert_eq!(err.lines()[0], "failed to get registry RDAP");
    assert!(whois.calls().is_empty());
}

// ---------------------------------------------------------------- dispatch

#[tokio::test]
async fn test_auto_returns_rdap_without_whois() {
    let rdap = Arc::new(FakeRdap {
        registry: Some(registry_rdap()),
        ..Default::default()
    });
    let whois = Arc::new(FakeWhois::default().registry(REGISTRY_WHOIS_BODY));

    let info = resolver(&rdap, &whois)
        .resolve("example.com", LookupType::Auto, LookupSource::Registry)
        .await
        .unwrap();
    assert!(info.source.starts_with("RDAP"));
    assert!(whois.calls().is_empty());
}

#[tokio::test]
async fn test_auto_falls_back_to_whois() {
    let rdap = Arc::new(FakeRdap::default());
    let whois = Arc::new(FakeWhois::default().registry(REGISTRY_WHOIS_BODY));

    let info = resolver(&rdap, &whois)
        .resolve("example.com", LookupType::Auto, LookupSource::Registry)
        .await
        .unwrap();
    assert_eq!(info.source, format!("WHOIS ({REGISTRY_WHOIS})"));
    assert_eq!(rdap.calls(), vec!["query example.com"]);
}

#[tokio::test]
async fn test_auto_reports_only_last_error() {
    let rdap = Arc::new(FakeRdap::default());
    let whois = Arc::new(FakeWhois::default());

    let err = resolver(&rdap, &whois)
        .resolve("example.com", LookupType::Auto, LookupSource::Auto)
        .await
        .unwrap_err();
    assert_eq!(
        err.lines(),
        vec![
            "failed to get registry WHOIS".to_string(),
            format!("{REGISTRY_WHOIS}: i/o timeout")
        ]
    );
}

#[tokio::test]
async fn test_invalid_domain_makes_no_calls() {
    let rdap = Arc::new(FakeRdap::default());
    let whois = Arc::new(FakeWhois::default());

    let err = resolver(&rdap, &whois)
        .resolve("com", LookupType::Auto, LookupSource::Auto)
        .await
        .unwrap_err();
    assert!(matches!(err, InfoError::InvalidDomain { .. }));
    assert!(rdap.calls().is_empty());
    assert!(whois.calls().is_empty());
}

// ---------------------------------------------------------------- WHOIS path

#[tokio::test]
async fn test_whois_registry_only() {
    let rdap = Arc::new(FakeRdap::default());
    let whois = Arc::new(
        FakeWhois::default()
            .registry(REGISTRY_WHOIS_BODY)
            .server(REGISTRAR_WHOIS, REGISTRAR_WHOIS_BODY),
    );

    let info = resolver(&rdap, &whois)
        .resolve("example.com", LookupType::Whois, LookupSource::Registry)
        .await
        .unwrap();

    assert_eq!(
        info,
        DomainInfo {
            source: format!("WHOIS ({REGISTRY_WHOIS})"),
            domain: "example.com".to_string(),
            registrar: "Example Registrar, Inc.".to_string(),
            statuses: vec!["clientTransferProhibited".to_string()],
            nameservers: vec!["a.iana-servers.net".to_string()],
            create_date: date(1995, 8, 14),
            update_date: date(2024, 8, 14),
            registry_expiration_date: date(2025, 8, 13),
            registrar_expiration_date: None,
            registrant_name: None,
            dnssec: true,
        }
    );
    assert_eq!(whois.calls(), vec![("example.com".to_string(), None)]);
}

#[tokio::test]
async fn test_whois_escalates_to_registrar() {
    let rdap = Arc::new(FakeRdap::default());
    let whois = Arc::new(
        FakeWhois::default()
            .registry(REGISTRY_WHOIS_BODY)
            .server(REGISTRAR_WHOIS, REGISTRAR_WHOIS_BODY),
    );

    let info = resolver(&rdap, &whois)
        .resolve("example.com", LookupType::Whois, LookupSource::Auto)
        .await
        .unwrap();

    assert_eq!(info.source, format!("WHOIS ({REGISTRAR_WHOIS})"));
    // Registrar name always comes from the registry answer
    assert_eq!(info.registrar, "Example Registrar, Inc.");
    assert_eq!(
        info.statuses,
        vec!["clientTransferProhibited", "clientUpdateProhibited"]
    );
    assert_eq!(info.nameservers, vec!["ns1.registrar.example"]);
    assert_eq!(info.create_date, date(1995, 8, 15));
    assert_eq!(info.registry_expiration_date, date(2025, 8, 13));
    assert_eq!(info.registrar_expiration_date, date(2026, 8, 13));
    assert_eq!(info.registrant_name.as_deref(), Some("REDACTED FOR PRIVACY"));
    assert!(!info.dnssec);
    // Trailing slash trimmed from the named server
    assert_eq!(
        whois.calls()[1],
        ("example.com".to_string(), Some(REGISTRAR_WHOIS.to_string()))
    );
}

#[tokio::test]
async fn test_whois_auto_source_tolerates_registrar_failure() {
    let rdap = Arc::new(FakeRdap::default());
    let whois = Arc::new(FakeWhois::default().registry(REGISTRY_WHOIS_BODY));

    let info = resolver(&rdap, &whois)
        .resolve("example.com", LookupType::Whois, LookupSource::Auto)
        .await
        .unwrap();
    assert_eq!(info.source, format!("WHOIS ({REGISTRY_WHOIS})"));
    assert_eq!(info.registrar_expiration_date, None);
    assert_eq!(whois.calls().len(), 2);
}

#[tokio::test]
async fn test_whois_auto_source_tolerates_unparseable_registrar() {
    let rdap = Arc::new(FakeRdap::default());
    let whois = Arc::new(
        FakeWhois::default()
            .registry(REGISTRY_WHOIS_BODY)
            .server(REGISTRAR_WHOIS, "   \n"),
    );

    let info = resolver(&rdap, &whois)
        .resolve("example.com", LookupType::Whois, LookupSource::Auto)
        .await
        .unwrap();
    assert_eq!(info.source, format!("WHOIS ({REGISTRY_WHOIS})"));
}

#[tokio::test]
async fn test_whois_registrar_source_transport_failure() {
    let rdap = Arc::new(FakeRdap::default());
    let whois = Arc::new(FakeWhois::default().registry(REGISTRY_WHOIS_BODY));

    let err = resolver(&rdap, &whois)
        .resolve("example.com", LookupType::Whois, LookupSource::Registrar)
        .await
        .unwrap_err();
    assert!(matches!(err, InfoError::RegistrarQuery { protocol: "WHOIS", .. }));
    assert_eq!(
        err.lines(),
        vec![
            "failed to get registrar WHOIS".to_string(),
            format!("{REGISTRAR_WHOIS}: i/o timeout")
        ]
    );
}

#[tokio::test]
async fn test_whois_registrar_source_parse_failure() {
    let rdap = Arc::new(FakeRdap::default());
    let whois = Arc::new(
        FakeWhois::default()
            .registry(REGISTRY_WHOIS_BODY)
            .server(REGISTRAR_WHOIS, "No match for \"EXAMPLE.COM\"."),
    );

    let err = resolver(&rdap, &whois)
        .resolve("example.com", LookupType::Whois, LookupSource::Registrar)
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        InfoError::Parse {
            level: "registrar",
            source: WhoisParseError::NotFound
        }
    ));
}

#[tokio::test]
async fn test_whois_skips_escalation_to_same_host() {
    let body = REGISTRY_WHOIS_BODY.replace("whois.registrar.example/", "WHOIS.REGISTRY.EXAMPLE");
    let rdap = Arc::new(FakeRdap::default());
    let whois = Arc::new(FakeWhois::default().registry(&body));

    let info = resolver(&rdap, &whois)
        .resolve("example.com", LookupType::Whois, LookupSource::Registrar)
        .await
        .unwrap();
    assert_eq!(info.source, format!("WHOIS ({REGISTRY_WHOIS})"));
    assert_eq!(whois.calls().len(), 1);
}

#[tokio::test]
async fn test_whois_registry_parse_failure() {
    let rdap = Arc::new(FakeRdap::default());
    let whois = Arc::new(FakeWhois::default().registry("No match for \"EXAMPLE.COM\"."));

    let err = resolver(&rdap, &whois)
        .resolve("example.com", LookupType::Whois, LookupSource::Auto)
        .await
        .unwrap_err();
    assert_eq!(
        err.lines(),
        vec!["failed to parse registry WHOIS response", "domain is not registered"]
    );
}

#[tokio::test]
async fn test_whois_missing_domain_section() {
    let rdap = Arc::new(FakeRdap::default());
    let whois = Arc::new(FakeWhois::default().registry("% nothing useful\nremarks: hello\n"));

    let err = resolver(&rdap, &whois)
        .resolve("example.com", LookupType::Whois, LookupSource::Auto)
        .await
        .unwrap_err();
    assert!(matches!(err, InfoError::MissingDomain));
    assert_eq!(err.lines(), vec!["no domain in parsed WHOIS response"]);
}

// ---------------------------------------------------------------- types

#[test]
fn test_lookup_type_parse() {
    assert_eq!(LookupType::parse("").unwrap(), LookupType::Auto);
    assert_eq!(LookupType::parse("  ").unwrap(), LookupType::Auto);
    assert_eq!(LookupType::parse("RDAP").unwrap(), LookupType::Rdap);
    assert_eq!(LookupType::parse(" whois ").unwrap(), LookupType::Whois);
    assert!(LookupType::parse("finger").is_err());
}

#[test]
fn test_lookup_source_parse() {
    assert_eq!(LookupSource::parse("").unwrap(), LookupSource::Auto);
    assert_eq!(LookupSource::parse("Registry").unwrap(), LookupSource::Registry);
    assert_eq!(
        LookupSource::parse("REGISTRAR").unwrap(),
        LookupSource::Registrar
    );
    assert!(LookupSource::parse("reseller").is_err());
}

#[test]
fn test_selectors_display_round_trip() {
    for lookup_type in LookupType::iter() {
        assert_eq!(
            LookupType::from_str(&lookup_type.to_string()).unwrap(),
            lookup_type
        );
    }
    for source in LookupSource::iter() {
        assert_eq!(LookupSource::from_str(&source.to_string()).unwrap(), source);
    }
    assert_eq!(LookupSource::Registrar.to_string(), "registrar");
}

#[test]
fn test_domain_info_json_shape() {
    let info = DomainInfo {
        source: "WHOIS (whois.registry.example)".to_string(),
        domain: "example.com".to_string(),
        create_date: date(1995, 8, 14),
        ..Default::default()
    };
    let value = serde_json::to_value(&info).unwrap();
    assert_eq!(
        value,
        json!({
            "source": "WHOIS (whois.registry.example)",
            "domain": "example.com",
            "registrar": "",
            "statuses": [],
            "nameservers": [],
            "createDate": "1995-08-14T00:00:00Z",
            "updateDate": null,
            "registryExpirationDate": null,
            "registrarExpirationDate": null,
            "registrantName": null,
            "dnssec": false
        })
    );
}
