//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration. Every option falls back to an environment variable.

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use clap::{Parser, ValueEnum};
use thiserror::Error;

use crate::config::constants::{
    DEFAULT_LISTEN_ADDR, DNS_TIMEOUT_SECS, HTTP_TIMEOUT_SECS, RDAP_BOOTSTRAP_URL,
    WHOIS_TIMEOUT_SECS,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// A configuration value that failed validation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid value for `{field}`: {message}")]
pub struct ConfigValidationError {
    /// Name of the offending field
    pub field: &'static str,
    /// What is wrong with it
    pub message: String,
}

/// Service configuration.
///
/// # Examples
///
/// ```bash
/// # Defaults: listen on 0.0.0.0:3333
/// domain_inspector
///
/// # Pin outbound traffic to one local address and log verbosely
/// SOURCE_IP=192.0.2.7 VERBOSE=true domain_inspector --listen-addr 127.0.0.1:8080
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "domain_inspector",
    about = "Serves DNS records and registration data for a domain over HTTP."
)]
pub struct Config {
    /// Address the HTTP server listens on
    #[arg(long, env = "LISTEN_ADDR", default_value = DEFAULT_LISTEN_ADDR)]
    pub listen_addr: SocketAddr,

    /// Local address outbound DNS, WHOIS and RDAP connections are bound to
    #[arg(long, env = "SOURCE_IP")]
    pub source_ip: Option<IpAddr>,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, env = "LOG_LEVEL", value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, env = "LOG_FORMAT", value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Log every RDAP/WHOIS exchange (raises the log level to at least debug)
    #[arg(long, env = "VERBOSE")]
    pub verbose: bool,

    /// Per-exchange DNS timeout in seconds
    #[arg(long, env = "DNS_TIMEOUT_SECONDS", default_value_t = DNS_TIMEOUT_SECS)]
    pub dns_timeout_seconds: u64,

    /// WHOIS exchange timeout in seconds
    #[arg(long, env = "WHOIS_TIMEOUT_SECONDS", default_value_t = WHOIS_TIMEOUT_SECS)]
    pub whois_timeout_seconds: u64,

    /// RDAP request timeout in seconds
    #[arg(long, env = "HTTP_TIMEOUT_SECONDS", default_value_t = HTTP_TIMEOUT_SECS)]
    pub http_timeout_seconds: u64,

    /// IANA RDAP bootstrap registry URL
    #[arg(long, env = "RDAP_BOOTSTRAP_URL", default_value = RDAP_BOOTSTRAP_URL)]
    pub rdap_bootstrap_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN_ADDR
                .parse()
                .unwrap_or_else(|_| SocketAddr::from(([0, 0, 0, 0], 3333))),
            source_ip: None,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            verbose: false,
            dns_timeout_seconds: DNS_TIMEOUT_SECS,
            whois_timeout_seconds: WHOIS_TIMEOUT_SECS,
            http_timeout_seconds: HTTP_TIMEOUT_SECS,
            rdap_bootstrap_url: RDAP_BOOTSTRAP_URL.to_string(),
        }
    }
}

impl Config {
    /// Checks the values clap cannot check on its own.
    ///
    /// # Errors
    ///
    /// Returns the first invalid field found.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        for (field, value) in [
            ("dns_timeout_seconds", self.dns_timeout_seconds),
            ("whois_timeout_seconds", self.whois_timeout_seconds),
            ("http_timeout_seconds", self.http_timeout_seconds),
        ] {
            if value == 0 {
                return Err(ConfigValidationError {
                    field,
                    message: "must be greater than 0".to_string(),
                });
            }
        }

        if url::Url::parse(&self.rdap_bootstrap_url).is_err() {
            return Err(ConfigValidationError {
                field: "rdap_bootstrap_url",
                message: format!("`{}` is not an absolute URL", self.rdap_bootstrap_url),
            });
        }

        Ok(())
    }

    /// Effective log level once `verbose` is taken into account.
    pub fn effective_log_level(&self) -> log::LevelFilter {
        let level = log::LevelFilter::from(self.log_level.clone());
        if self.verbose {
            level.max(log::LevelFilter::Debug)
        } else {
            level
        }
    }

    pub fn dns_timeout(&self) -> Duration {
        Duration::from_secs(self.dns_timeout_seconds)
    }

    pub fn whois_timeout(&self) -> Duration {
        Duration::from_secs(self.whois_timeout_seconds)
    }

    pub fn http_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout_seconds)
    }
}
