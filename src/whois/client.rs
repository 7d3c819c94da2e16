//! WHOIS over TCP port 43.

use std::collections::HashMap;
use std::io;
use std::net::IpAddr;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{lookup_host, TcpStream};
use tokio::sync::Mutex;

use super::parse::referral_server;
use super::types::{WhoisClientError, WhoisResponse};
use crate::config::{IANA_WHOIS_HOST, MAX_WHOIS_RESPONSE_SIZE, WHOIS_PORT};
use crate::net;

/// Fetches raw WHOIS text.
#[async_trait]
pub trait WhoisClient: Send + Sync {
    /// Queries `host` for `query`, or the registry server for the query's TLD
    /// when no host is given.
    async fn fetch(&self, query: &str, host: Option<&str>)
        -> Result<WhoisResponse, WhoisClientError>;
}

/// Plain TCP WHOIS client with IANA referral discovery.
///
/// Registry servers discovered through the root server are remembered per
/// TLD for the life of the client.
#[derive(Debug)]
pub struct TcpWhoisClient {
    timeout: Duration,
    source_ip: Option<IpAddr>,
    port: u16,
    root_host: String,
    referrals: Mutex<HashMap<String, String>>,
}

impl TcpWhoisClient {
    pub fn new(timeout: Duration, source_ip: Option<IpAddr>) -> Self {
        Self {
            timeout,
            source_ip,
            port: WHOIS_PORT,
            root_host: IANA_WHOIS_HOST.to_string(),
            referrals: Mutex::new(HashMap::new()),
        }
    }

    /// Uses `root_host` instead of the IANA server for referral discovery.
    pub fn with_root_host(mut self, root_host: impl Into<String>) -> Self {
        self.root_host = root_host.into();
        self
    }

    /// Connects to `port` instead of 43 on every server.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    async fn registry_server(&self, query: &str) -> Result<String, WhoisClientError> {
        let tld = query
            .trim_end_matches('.')
            .rsplit('.')
            .next()
            .filter(|tld| !tld.is_empty())
            .ok_or_else(|| WhoisClientError::InvalidQuery(query.to_string()))?
            .to_ascii_lowercase();

        if let Some(host) = self.referrals.lock().await.get(&tld) {
            return Ok(host.clone());
        }

        let root_host = self.root_host.clone();
        let body = self.exchange(&root_host, &tld).await?;
        let host = referral_server(&body).ok_or_else(|| WhoisClientError::NoServer {
            tld: tld.clone(),
        })?;
        log::debug!("WHOIS server for .{tld} is {host}");

        self.referrals.lock().await.insert(tld, host.clone());
        Ok(host)
    }

    async fn exchange(&self, host: &str, query: &str) -> Result<String, WhoisClientError> {
        let exchange = async {
            let mut stream = self.connect(host).await?;
            stream.write_all(format!("{query}\r\n").as_bytes()).await?;

            let mut body = Vec::new();
            stream
                .take(MAX_WHOIS_RESPONSE_SIZE)
                .read_to_end(&mut body)
                .await?;
            Ok::<_, io::Error>(body)
        };

        let body = tokio::time::timeout(self.timeout, exchange)
            .await
            .map_err(|_| WhoisClientError::Timeout {
                host: host.to_string(),
            })?
            .map_err(|source| WhoisClientError::Io {
                host: host.to_string(),
                source,
            })?;

        log::debug!("WHOIS {host} answered {query} with {} bytes", body.len());
        Ok(String::from_utf8_lossy(&body).into_owned())
    }

    async fn connect(&self, host: &str) -> io::Result<TcpStream> {
        let mut last_error = None;
        for address in lookup_host((host, self.port)).await? {
            match net::connect_tcp(address, self.source_ip).await {
                Ok(stream) => return Ok(stream),
                Err(e) => {
                    log::debug!("WHOIS connect to {address} failed: {e}");
                    last_error = Some(e);
                }
            }
        }
        Err(last_error.unwrap_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, format!("no addresses for {host}"))
        }))
    }
}

#[async_trait]
impl WhoisClient for TcpWhoisClient {
    async fn fetch(
        &self,
        query: &str,
        host: Option<&str>,
    ) -> Result<WhoisResponse, WhoisClientError> {
        let host = match host {
            Some(host) => host.to_string(),
            None => self.registry_server(query).await?,
        };
        let body = self.exchange(&host, query).await?;
        Ok(WhoisResponse { body, host })
    }
}
