//! RDAP response objects (RFC 9083), reduced to what domain lookups read.

use serde::Deserialize;
use serde_json::Value;

/// A domain object.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RdapDomain {
    #[serde(default)]
    pub object_class_name: String,
    pub ldh_name: Option<String>,
    #[serde(default)]
    pub status: Vec<String>,
    #[serde(default)]
    pub entities: Vec<RdapEntity>,
    #[serde(default)]
    pub events: Vec<RdapEvent>,
    #[serde(default)]
    pub links: Vec<RdapLink>,
    #[serde(default)]
    pub nameservers: Vec<RdapNameserver>,
    #[serde(rename = "secureDNS")]
    pub secure_dns: Option<SecureDns>,
}

impl RdapDomain {
    /// First entity carrying `role`.
    pub fn entity_with_role(&self, role: &str) -> Option<&RdapEntity> {
        self.entities
            .iter()
            .find(|entity| entity.roles.iter().any(|r| r.eq_ignore_ascii_case(role)))
    }

    /// The link to the registrar's own RDAP record.
    ///
    /// Among `related` links one typed `application/rdap+json` is preferred;
    /// otherwise the first `related` link is used.
    pub fn registrar_link(&self) -> Option<&RdapLink> {
        let mut related = self
            .links
            .iter()
            .filter(|link| link.rel.as_deref() == Some("related"));
        let first = related.clone().next();
        related
            .find(|link| link.media_type.as_deref() == Some("application/rdap+json"))
            .or(first)
    }

    pub fn delegation_signed(&self) -> bool {
        self.secure_dns
            .as_ref()
            .and_then(|dns| dns.delegation_signed)
            .unwrap_or(false)
    }
}

/// An entity (registrar, registrant, contact...).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RdapEntity {
    pub handle: Option<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    /// jCard (RFC 7095): `["vcard", [[name, params, type, value...], ...]]`
    pub vcard_array: Option<Value>,
    #[serde(default)]
    pub public_ids: Vec<PublicId>,
    #[serde(default)]
    pub entities: Vec<RdapEntity>,
}

impl RdapEntity {
    /// First value of the vCard property `name`, if non-empty.
    ///
    /// Structured values (arrays) yield their first string component.
    pub fn vcard_value(&self, name: &str) -> Option<String> {
        let properties = self.vcard_array.as_ref()?.get(1)?.as_array()?;
        let property = properties.iter().find(|property| {
            property
                .get(0)
                .and_then(Value::as_str)
                .is_some_and(|n| n.eq_ignore_ascii_case(name))
        })?;

        let value = match property.get(3)? {
            Value::String(s) => s.clone(),
            Value::Array(parts) => parts.iter().find_map(Value::as_str)?.to_string(),
            _ => return None,
        };
        (!value.is_empty()).then_some(value)
    }

    /// Formatted name (`fn`).
    pub fn display_name(&self) -> Option<String> {
        self.vcard_value("fn")
    }

    pub fn organization(&self) -> Option<String> {
        self.vcard_value("org")
    }

    /// The IANA registrar ID from the entity's public identifiers.
    pub fn iana_registrar_id(&self) -> Option<u32> {
        self.public_ids
            .iter()
            .find(|id| id.id_type.eq_ignore_ascii_case("iana registrar id"))
            .and_then(|id| id.identifier.trim().parse().ok())
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PublicId {
    #[serde(rename = "type")]
    pub id_type: String,
    pub identifier: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RdapEvent {
    pub event_action: String,
    pub event_date: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RdapLink {
    pub rel: Option<String>,
    pub href: String,
    #[serde(rename = "type")]
    pub media_type: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RdapNameserver {
    pub ldh_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecureDns {
    pub delegation_signed: Option<bool>,
}

/// Error object returned with non-2xx RDAP responses.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RdapErrorBody {
    pub error_code: Option<u16>,
    pub title: Option<String>,
    #[serde(default)]
    pub description: Vec<String>,
}

impl RdapErrorBody {
    /// Title followed by the description lines, `;`-separated.
    pub fn summary(&self) -> String {
        self.title
            .iter()
            .chain(self.description.iter())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(";")
    }
}

/// A domain object together with the URL that served it.
#[derive(Debug, Clone, PartialEq)]
pub struct RdapResponse {
    pub domain: RdapDomain,
    pub url: String,
}
