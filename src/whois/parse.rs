//! Free-text WHOIS parsing.
//!
//! WHOIS has no fixed schema. Responses are read as `key: value` lines and
//! the keys matched case-insensitively against the spellings used by the
//! common registry and registrar formats. A key with an empty value opens a
//! section whose following lines (up to a blank line) are values of that key,
//! which covers the indented layout some registries use.

use std::sync::LazyLock;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use regex::Regex;

use super::types::{WhoisContact, WhoisDomain, WhoisParseError, WhoisRecord};

static FIELD_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([A-Za-z][A-Za-z0-9 ./()_-]*?)\s*:\s*(.*?)\s*$")
        .expect("field line pattern is valid")
});

const DOMAIN_NAME: &[&str] = &["domain name", "domain"];
const WHOIS_SERVER: &[&str] = &["registrar whois server", "whois server"];
const REGISTRAR: &[&str] = &["registrar", "registrar name", "sponsoring registrar"];
const REGISTRANT_NAME: &[&str] = &["registrant name", "registrant"];
const REGISTRANT_ORG: &[&str] = &["registrant organization", "registrant organisation"];
const STATUS: &[&str] = &["domain status", "status", "state"];
const NAMESERVER: &[&str] = &["name server", "name servers", "nameserver", "nameservers", "nserver"];
const CREATED: &[&str] = &[
    "creation date",
    "created date",
    "created",
    "created on",
    "registered on",
    "registration date",
    "registration time",
];
const UPDATED: &[&str] = &["updated date", "last updated", "last updated on", "last modified", "changed"];
const EXPIRES: &[&str] = &[
    "registry expiry date",
    "registrar registration expiration date",
    "expiration date",
    "expiry date",
    "expires",
    "expires on",
    "expiration time",
    "paid-till",
];
const DNSSEC: &[&str] = &["dnssec"];

const NOT_FOUND_MARKERS: &[&str] = &[
    "no match for",
    "not found",
    "no data found",
    "no entries found",
    "no object found",
    "status: free",
    "status: available",
    "is available for registration",
];
const RATE_LIMIT_MARKERS: &[&str] = &[
    "rate limit",
    "limit exceeded",
    "too many requests",
    "query rate",
    "try again later",
];

/// `key: value` pairs in document order, keys lowercased.
struct Fields(Vec<(String, String)>);

impl Fields {
    fn collect(text: &str) -> Self {
        let mut fields = Vec::new();
        let mut section: Option<String> = None;

        for line in text.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                section = None;
                continue;
            }
            if trimmed.starts_with('%') || trimmed.starts_with('#') || trimmed.starts_with(">>>") {
                continue;
            }
            // URLs and timestamps contain colons too; only a leading key counts
            match FIELD_LINE.captures(line).filter(|caps| !caps[2].starts_with("//")) {
                Some(caps) => {
                    let key = caps[1].to_ascii_lowercase();
                    let value = caps[2].to_string();
                    if value.is_empty() {
                        section = Some(key);
                    } else {
                        fields.push((key, value));
                    }
                }
                None => {
                    if let Some(key) = &section {
                        fields.push((key.clone(), trimmed.to_string()));
                    }
                }
            }
        }

        Self(fields)
    }

    fn all<'a>(&'a self, keys: &'a [&'a str]) -> impl Iterator<Item = &'a str> + 'a {
        self.0
            .iter()
            .filter(move |(key, _)| keys.contains(&key.as_str()))
            .map(|(_, value)| value.as_str())
    }

    /// First value under any of `keys`, trying the keys in order.
    fn first(&self, keys: &[&str]) -> Option<String> {
        keys.iter()
            .find_map(|key| self.all(std::slice::from_ref(key)).next())
            .map(str::to_string)
    }
}

/// Parses a WHOIS response into a `WhoisRecord`.
///
/// # Errors
///
/// Returns `WhoisParseError::Empty` for a blank response, and `NotFound` /
/// `RateLimited` when the response carries no domain data but does carry one
/// of the usual "no such domain" or "slow down" notices.
pub fn parse_whois(text: &str) -> Result<WhoisRecord, WhoisParseError> {
    if text.trim().is_empty() {
        return Err(WhoisParseError::Empty);
    }

    let fields = Fields::collect(text);
    let domain = parse_domain(&fields);

    if domain.is_none() {
        let lower = text.to_lowercase();
        if RATE_LIMIT_MARKERS.iter().any(|m| lower.contains(m)) {
            return Err(WhoisParseError::RateLimited);
        }
        if NOT_FOUND_MARKERS.iter().any(|m| lower.contains(m)) {
            return Err(WhoisParseError::NotFound);
        }
    }

    let registrar = fields.first(REGISTRAR).map(|name| WhoisContact {
        name: Some(name),
        organization: None,
    });
    let registrant = contact(fields.first(REGISTRANT_NAME), fields.first(REGISTRANT_ORG));

    Ok(WhoisRecord {
        domain,
        registrar,
        registrant,
    })
}

fn parse_domain(fields: &Fields) -> Option<WhoisDomain> {
    let domain = WhoisDomain {
        name: fields.first(DOMAIN_NAME).map(|name| name.to_lowercase()),
        whois_server: fields.first(WHOIS_SERVER),
        statuses: dedup(fields.all(STATUS).filter_map(|v| v.split_whitespace().next())),
        nameservers: dedup(fields.all(NAMESERVER).filter_map(|v| {
            v.split_whitespace()
                .next()
                .map(|ns| ns.trim_end_matches('.').to_lowercase())
        })),
        created: fields.first(CREATED).as_deref().and_then(parse_date_string),
        updated: fields.first(UPDATED).as_deref().and_then(parse_date_string),
        expires: fields.first(EXPIRES).as_deref().and_then(parse_date_string),
        dnssec: fields.first(DNSSEC).is_some_and(|v| {
            let v = v.to_ascii_lowercase();
            v.starts_with("signed") || v == "yes"
        }),
    };

    let has_data = domain.name.is_some()
        || !domain.nameservers.is_empty()
        || domain.created.is_some()
        || domain.expires.is_some();
    has_data.then_some(domain)
}

fn contact(name: Option<String>, organization: Option<String>) -> Option<WhoisContact> {
    (name.is_some() || organization.is_some()).then_some(WhoisContact { name, organization })
}

fn dedup<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut out: Vec<String> = Vec::new();
    for value in values {
        let value = value.into();
        if !value.is_empty() && !out.contains(&value) {
            out.push(value);
        }
    }
    out
}

/// Finds the next WHOIS server in a referral answer (`whois:` or `refer:`).
pub(crate) fn referral_server(text: &str) -> Option<String> {
    let fields = Fields::collect(text);
    fields
        .first(&["whois", "refer"])
        .map(|host| host.trim_matches(|c: char| c == '/' || c.is_whitespace()).to_string())
        .filter(|host| !host.is_empty())
}

/// Attempts to parse a date string in various formats
pub(crate) fn parse_date_string(date_str: &str) -> Option<DateTime<Utc>> {
    let date_str = date_str.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return Some(dt.with_timezone(&Utc));
    }

    // Try common WHOIS date formats
    let formats = [
        "%Y-%m-%dT%H:%M:%S%.fZ",
        "%Y-%m-%dT%H:%M:%SZ",
        "%Y-%m-%dT%H:%M:%S%z",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d",
        "%Y.%m.%d",
        "%d-%b-%Y",
        "%d/%m/%Y",
    ];

    for format in &formats {
        if let Ok(dt) = DateTime::parse_from_str(date_str, format) {
            return Some(dt.with_timezone(&Utc));
        }
        if let Ok(naive_dt) = NaiveDateTime::parse_from_str(date_str, format) {
            return Some(naive_dt.and_utc());
        }
        if let Ok(naive_date) = NaiveDate::parse_from_str(date_str, format) {
            return Some(naive_date.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }

    // "2024-01-15 10:30:45 UTC", "2024-01-15 (YYYY-MM-DD)" and friends
    let head = date_str.split_whitespace().next()?;
    (head != date_str).then(|| parse_date_string(head)).flatten()
}
