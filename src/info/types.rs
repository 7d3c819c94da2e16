//! Domain info result and lookup selectors.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString};

/// Registration data for one registrable domain.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainInfo {
    /// Which service answered, e.g. `RDAP (https://...)` or `WHOIS (host)`.
    pub source: String,
    pub domain: String,
    /// Registrar display name, with `(IANA <id>)` when the id is known.
    pub registrar: String,
    pub statuses: Vec<String>,
    pub nameservers: Vec<String>,
    pub create_date: Option<DateTime<Utc>>,
    pub update_date: Option<DateTime<Utc>>,
    pub registry_expiration_date: Option<DateTime<Utc>>,
    /// Only set when a registrar-level record was obtained.
    pub registrar_expiration_date: Option<DateTime<Utc>>,
    pub registrant_name: Option<String>,
    pub dnssec: bool,
}

/// Which protocol(s) to try.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LookupType {
    /// RDAP, then WHOIS if RDAP fails.
    #[default]
    Auto,
    Rdap,
    Whois,
}

/// Whether to escalate to the registrar's own service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum LookupSource {
    /// Escalate, but keep registry data if the registrar fails.
    #[default]
    Auto,
    /// Never escalate.
    Registry,
    /// Escalate; registrar failure is an error.
    Registrar,
}

impl LookupType {
    /// Case-insensitive parse; blank input is `Auto`.
    pub fn parse(value: &str) -> Result<Self, strum::ParseError> {
        parse_selector(value)
    }
}

impl LookupSource {
    /// Case-insensitive parse; blank input is `Auto`.
    pub fn parse(value: &str) -> Result<Self, strum::ParseError> {
        parse_selector(value)
    }
}

fn parse_selector<T>(value: &str) -> Result<T, strum::ParseError>
where
    T: Default + std::str::FromStr<Err = strum::ParseError>,
{
    let value = value.trim();
    if value.is_empty() {
        Ok(T::default())
    } else {
        value.parse()
    }
}
