//! Configuration constants.
//!
//! Protocol parameters, default endpoints and the default timeouts used when
//! no explicit configuration is given.

/// Port nameservers are queried on.
pub const DNS_PORT: u16 = 53;

/// EDNS0 UDP payload size advertised on every query.
pub const EDNS_BUFFER_SIZE: u16 = 4096;

/// Largest datagram we are prepared to receive.
pub const MAX_UDP_RESPONSE_SIZE: usize = 65_535;

/// Default per-exchange DNS timeout in seconds.
///
/// This is the transport's own bound; nothing above it adds another one.
pub const DNS_TIMEOUT_SECS: u64 = 2;

/// Default WHOIS exchange timeout in seconds (connect + query + read).
pub const WHOIS_TIMEOUT_SECS: u64 = 10;

/// Default RDAP HTTP request timeout in seconds.
pub const HTTP_TIMEOUT_SECS: u64 = 15;

/// WHOIS protocol port.
pub const WHOIS_PORT: u16 = 43;

/// Root WHOIS referral server used to find a TLD's registry server.
pub const IANA_WHOIS_HOST: &str = "whois.iana.org";

/// IANA RDAP bootstrap registry for DNS.
pub const RDAP_BOOTSTRAP_URL: &str = "https://data.iana.org/rdap/dns.json";

/// Media type requested from RDAP servers.
pub const RDAP_ACCEPT: &str = "application/rdap+json, application/json;q=0.9";

/// Upper bound on a WHOIS response body (1MB).
pub const MAX_WHOIS_RESPONSE_SIZE: u64 = 1024 * 1024;

/// Default listen address for the HTTP surface.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3333";

/// User-Agent sent to RDAP servers.
pub const DEFAULT_USER_AGENT: &str = concat!("domain_inspector/", env!("CARGO_PKG_VERSION"));
