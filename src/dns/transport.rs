//! Raw DNS message exchange with a single server.
//!
//! Queries go out over UDP with an EDNS0 OPT record advertising a large
//! buffer and the DNSSEC OK bit. A truncated reply is retried once over TCP.

use std::io;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use async_trait::async_trait;
use hickory_resolver::proto::op::{Edns, Message, MessageType, OpCode, Query};
use hickory_resolver::proto::rr::{Name, RecordType};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::UdpSocket;

use crate::config::{EDNS_BUFFER_SIZE, MAX_UDP_RESPONSE_SIZE};
use crate::error_handling::TransportError;
use crate::net;

/// Sends one query to one server and returns its reply.
#[async_trait]
pub trait DnsExchange: Send + Sync {
    async fn exchange(&self, query: &Message, server: SocketAddr)
        -> Result<Message, TransportError>;
}

/// Builds a recursion-desired query for `name`/`record_type` with EDNS0
/// (4096-byte payload, DNSSEC OK) and a random message ID.
pub fn build_query(name: &Name, record_type: RecordType) -> Message {
    let mut message = Message::new();
    message
        .set_id(rand::random::<u16>())
        .set_message_type(MessageType::Query)
        .set_op_code(OpCode::Query)
        .set_recursion_desired(true)
        .add_query(Query::query(name.clone(), record_type));

    let mut edns = Edns::new();
    edns.set_max_payload(EDNS_BUFFER_SIZE);
    edns.set_dnssec_ok(true);
    message.set_edns(edns);

    message
}

/// UDP exchange with TCP fallback on truncation.
#[derive(Debug, Clone)]
pub struct UdpExchange {
    timeout: Duration,
    source_ip: Option<IpAddr>,
}

impl UdpExchange {
    /// Creates an exchange bounding each attempt by `timeout` and binding
    /// outbound sockets to `source_ip` when given.
    pub fn new(timeout: Duration, source_ip: Option<IpAddr>) -> Self {
        Self { timeout, source_ip }
    }

    async fn exchange_tcp(
        &self,
        wire: &[u8],
        id: u16,
        server: SocketAddr,
    ) -> Result<Message, TransportError> {
        let io_error = |source: io::Error| TransportError::Io { server, source };

        let exchange = async {
            let mut stream = net::connect_tcp(server, self.source_ip).await?;
            let len = u16::try_from(wire.len())
                .map_err(|_| io::Error::new(io::ErrorKind::InvalidInput, "query too large"))?;
            stream.write_all(&len.to_be_bytes()).await?;
            stream.write_all(wire).await?;

            let len = stream.read_u16().await?;
            let mut buf = vec![0u8; usize::from(len)];
            stream.read_exact(&mut buf).await?;
            Ok::<_, io::Error>(buf)
        };
        let buf = tokio::time::timeout(self.timeout, exchange)
            .await
            .map_err(|_| TransportError::Timeout { server })?
            .map_err(io_error)?;

        let response =
            Message::from_vec(&buf).map_err(|source| TransportError::Proto { server, source })?;
        if response.id() != id {
            return Err(io_error(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("response id {} does not match query id {id}", response.id()),
            )));
        }
        Ok(response)
    }
}

#[async_trait]
impl DnsExchange for UdpExchange {
    async fn exchange(
        &self,
        query: &Message,
        server: SocketAddr,
    ) -> Result<Message, TransportError> {
        let io_error = |source: io::Error| TransportError::Io { server, source };
        let wire = query
            .to_vec()
            .map_err(|source| TransportError::Proto { server, source })?;

        let socket = net::bind_udp(server, self.source_ip)
            .await
            .map_err(io_error)?;
        socket.send(&wire).await.map_err(io_error)?;

        // One deadline for the whole wait, stray replies included
        let response =
            tokio::time::timeout(self.timeout, receive_reply(&socket, query.id(), server))
                .await
                .map_err(|_| TransportError::Timeout { server })??;

        if response.truncated() {
            log::debug!("Truncated reply from {server}, retrying over TCP");
            return self.exchange_tcp(&wire, query.id(), server).await;
        }
        Ok(response)
    }
}

/// Reads datagrams until one carries `id`, skipping replies to other queries.
async fn receive_reply(
    socket: &UdpSocket,
    id: u16,
    server: SocketAddr,
) -> Result<Message, TransportError> {
    let mut buf = vec![0u8; MAX_UDP_RESPONSE_SIZE];
    loop {
        let len = socket
            .recv(&mut buf)
            .await
            .map_err(|source| TransportError::Io { server, source })?;
        let response = Message::from_vec(&buf[..len])
            .map_err(|source| TransportError::Proto { server, source })?;
        if response.id() == id {
            return Ok(response);
        }
        log::debug!(
            "Ignoring DNS reply from {server} with id {} (expected {id})",
            response.id()
        );
    }
}
