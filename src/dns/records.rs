//! Conversion of wire records into presentation records.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use hickory_resolver::proto::dnssec::rdata::DNSSECRData;
use hickory_resolver::proto::dnssec::PublicKey;
use hickory_resolver::proto::rr::{RData, Record};

use super::types::DnsRecord;

/// Converts a wire record into a `DnsRecord` named relative to `zone`.
///
/// `zone` is the fully-qualified queried hostname (with trailing dot).
pub(crate) fn to_dns_record(record: &Record, zone: &str) -> DnsRecord {
    DnsRecord {
        name: relative_owner(&record.name().to_string(), zone),
        record_type: record.record_type().to_string(),
        data: format_rdata(record),
        ttl: record.ttl(),
    }
}

/// Strips `zone` from the end of `owner`, case-insensitively.
///
/// An owner equal to the zone becomes `@`. Anything left keeps its separating
/// dot (`www.` for `www.example.com.`); owners outside the zone are returned
/// unchanged.
pub(crate) fn relative_owner(owner: &str, zone: &str) -> String {
    let split = owner.len().checked_sub(zone.len());
    let relative = match split {
        Some(at) if owner.is_char_boundary(at) && owner[at..].eq_ignore_ascii_case(zone) => {
            &owner[..at]
        }
        _ => owner,
    };

    if relative.is_empty() {
        "@".to_string()
    } else {
        relative.to_string()
    }
}

/// Renders record data the way a zone file reader expects to see it.
pub(crate) fn format_rdata(record: &Record) -> String {
    match record.data() {
        RData::A(a) => a.0.to_string(),
        RData::AAAA(aaaa) => aaaa.0.to_string(),
        RData::CNAME(cname) => cname.0.to_string(),
        RData::TXT(txt) => txt
            .iter()
            .map(|chunk| escape_txt(chunk))
            .collect::<Vec<_>>()
            .join(", "),
        RData::MX(mx) => format!("{} (priority {})", mx.exchange(), mx.preference()),
        RData::SOA(soa) => format!(
            "{} {} {} {} {} {} {}",
            soa.mname(),
            soa.rname(),
            soa.serial(),
            soa.refresh() as u32,
            soa.retry() as u32,
            soa.expire() as u32,
            soa.minimum()
        ),
        RData::DNSSEC(DNSSECRData::DS(ds)) => format!(
            "{} {} {} {}",
            ds.key_tag(),
            u8::from(ds.algorithm()),
            u8::from(ds.digest_type()),
            hex::encode_upper(ds.digest())
        ),
        RData::DNSSEC(DNSSECRData::DNSKEY(key)) => format!(
            "{} 3 {} {}",
            key.flags(),
            u8::from(key.public_key().algorithm()),
            STANDARD.encode(key.public_key().public_bytes())
        ),
        _ => record.data().to_string(),
    }
}

/// Presentation form of one TXT character-string.
///
/// Printable ASCII passes through, `"` and `\\` are backslash-escaped and every
/// other byte becomes `\DDD` (decimal), so the bytes can be recovered exactly.
pub(crate) fn escape_txt(chunk: &[u8]) -> String {
    let mut out = String::with_capacity(chunk.len());
    for &byte in chunk {
        match byte {
            b'"' | b'\\' => {
                out.push('\\');
                out.push(char::from(byte));
            }
            0x20..=0x7e => out.push(char::from(byte)),
            _ => out.push_str(&format!("\\{byte:03}")),
        }
    }
    out
}

/// Orders records by type then data, dropping adjacent exact duplicates.
///
/// The sort is stable, so records that tie on (type, data) keep their arrival
/// order and are only dropped when the whole record repeats back to back.
pub(crate) fn sort_and_compact(records: &mut Vec<DnsRecord>) {
    records.sort_by(|a, b| {
        a.record_type
            .cmp(&b.record_type)
            .then_with(|| a.data.cmp(&b.data))
    });
    records.dedup();
}
