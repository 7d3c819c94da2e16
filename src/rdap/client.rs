//! RDAP over HTTPS with IANA bootstrap discovery (RFC 9224).

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::header::ACCEPT;
use serde::Deserialize;
use thiserror::Error;
use tokio::sync::OnceCell;
use url::Url;

use super::types::{RdapDomain, RdapErrorBody, RdapResponse};
use crate::config::RDAP_ACCEPT;

/// RDAP transport and protocol failures.
#[derive(Error, Debug)]
pub enum RdapClientError {
    #[error("RDAP bootstrap from {url} failed: {reason}")]
    Bootstrap { url: String, reason: String },

    #[error("no RDAP service known for `{domain}`")]
    NoService { domain: String },

    #[error("invalid RDAP URL `{url}`: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("request to {url} failed: {source}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status {
        url: String,
        status: u16,
        body: Option<RdapErrorBody>,
    },

    #[error("{url} returned a `{object_class}` object, not a domain")]
    NotDomain { url: String, object_class: String },
}

impl RdapClientError {
    /// The RDAP error object the server sent, if any.
    pub fn rdap_error(&self) -> Option<&RdapErrorBody> {
        match self {
            RdapClientError::Status { body, .. } => body.as_ref(),
            _ => None,
        }
    }
}

/// Fetches RDAP domain objects.
#[async_trait]
pub trait RdapClient: Send + Sync {
    /// Looks `domain` up at the registry RDAP service for its TLD.
    async fn query(&self, domain: &str) -> Result<RdapResponse, RdapClientError>;

    /// Fetches exactly `url`; `domain` is informational.
    async fn raw_query(&self, url: &str, domain: &str) -> Result<RdapResponse, RdapClientError>;
}

/// IANA bootstrap file: `services` is a list of `[[tlds...], [base urls...]]`.
#[derive(Debug, Deserialize)]
pub(crate) struct BootstrapFile {
    services: Vec<(Vec<String>, Vec<String>)>,
}

/// Bootstrap registry: lowercased TLD (or suffix) → preferred base URL.
#[derive(Debug, Default)]
pub(crate) struct Bootstrap {
    services: HashMap<String, String>,
}

impl Bootstrap {
    pub(crate) fn from_file(file: BootstrapFile) -> Self {
        let mut services = HashMap::new();
        for (suffixes, urls) in file.services {
            let preferred = urls
                .iter()
                .find(|url| url.starts_with("https://"))
                .or_else(|| urls.first());
            let Some(base) = preferred else { continue };
            for suffix in suffixes {
                services.insert(suffix.to_ascii_lowercase(), base.clone());
            }
        }
        Self { services }
    }

    /// Base URL serving `domain`, by longest matching label suffix.
    pub(crate) fn base_url(&self, domain: &str) -> Option<&str> {
        let domain = domain.trim_end_matches('.').to_ascii_lowercase();
        let labels: Vec<&str> = domain.split('.').collect();
        (0..labels.len())
            .map(|i| labels[i..].join("."))
            .find_map(|suffix| self.services.get(&suffix))
            .map(String::as_str)
    }
}

/// reqwest-backed RDAP client.
#[derive(Debug)]
pub struct HttpRdapClient {
    client: reqwest::Client,
    bootstrap_url: String,
    bootstrap: OnceCell<Bootstrap>,
}

impl HttpRdapClient {
    pub fn new(client: reqwest::Client, bootstrap_url: impl Into<String>) -> Self {
        Self {
            client,
            bootstrap_url: bootstrap_url.into(),
            bootstrap: OnceCell::new(),
        }
    }

    async fn bootstrap(&self) -> Result<&Bootstrap, RdapClientError> {
        self.bootstrap
            .get_or_try_init(|| async {
                let failed = |reason: String| RdapClientError::Bootstrap {
                    url: self.bootstrap_url.clone(),
                    reason,
                };
                log::debug!("Fetching RDAP bootstrap from {}", self.bootstrap_url);
                let response = self
                    .client
                    .get(&self.bootstrap_url)
                    .send()
                    .await
                    .and_then(reqwest::Response::error_for_status)
                    .map_err(|e| failed(e.to_string()))?;
                let file: BootstrapFile = response.json().await.map_err(|e| failed(e.to_string()))?;
                let bootstrap = Bootstrap::from_file(file);
                log::debug!("RDAP bootstrap knows {} suffixes", bootstrap.services.len());
                Ok(bootstrap)
            })
            .await
    }

    async fn fetch(&self, url: Url) -> Result<RdapResponse, RdapClientError> {
        let url_text = url.to_string();
        log::debug!("RDAP GET {url_text}");

        let response = self
            .client
            .get(url)
            .header(ACCEPT, RDAP_ACCEPT)
            .send()
            .await
            .map_err(|source| RdapClientError::Http {
                url: url_text.clone(),
                source,
            })?;

        let status = response.status();
        log::debug!("RDAP {url_text} answered {status}");
        if !status.is_success() {
            let body = response.json::<RdapErrorBody>().await.ok();
            return Err(RdapClientError::Status {
                url: url_text,
                status: status.as_u16(),
                body,
            });
        }

        let domain: RdapDomain = response
            .json()
            .await
            .map_err(|source| RdapClientError::Http {
                url: url_text.clone(),
                source,
            })?;
        if !domain.object_class_name.eq_ignore_ascii_case("domain") {
            return Err(RdapClientError::NotDomain {
                url: url_text,
                object_class: domain.object_class_name,
            });
        }

        Ok(RdapResponse {
            domain,
            url: url_text,
        })
    }
}

#[async_trait]
impl RdapClient for HttpRdapClient {
    async fn query(&self, domain: &str) -> Result<RdapResponse, RdapClientError> {
        let base = self
            .bootstrap()
            .await?
            .base_url(domain)
            .ok_or_else(|| RdapClientError::NoService {
                domain: domain.to_string(),
            })?;

        // Base URLs end in '/' per RFC 9224, but not every entry honours it
        let base = if base.ends_with('/') {
            base.to_string()
        } else {
            format!("{base}/")
        };
        let url = Url::parse(&base)
            .and_then(|base| base.join(&format!("domain/{domain}")))
            .map_err(|source| RdapClientError::InvalidUrl { url: base, source })?;

        self.fetch(url).await
    }

    async fn raw_query(&self, url: &str, domain: &str) -> Result<RdapResponse, RdapClientError> {
        log::debug!("RDAP raw query for {domain}");
        let parsed = Url::parse(url).map_err(|source| RdapClientError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;
        self.fetch(parsed).await
    }
}
