//! Outbound socket helpers.
//!
//! Every outbound DNS and WHOIS connection goes through here so that an
//! optional source IP applies uniformly. A source IP of the other address
//! family than the peer is ignored and the OS picks the local address.

use std::io;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr, SocketAddr};

use tokio::net::{TcpSocket, TcpStream, UdpSocket};

/// Local address to bind before talking to `peer`.
pub(crate) fn local_bind_addr(peer: SocketAddr, source_ip: Option<IpAddr>) -> SocketAddr {
    match source_ip {
        Some(ip) if ip.is_ipv4() == peer.is_ipv4() => SocketAddr::new(ip, 0),
        _ if peer.is_ipv4() => SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), 0),
        _ => SocketAddr::new(IpAddr::V6(Ipv6Addr::UNSPECIFIED), 0),
    }
}

/// Binds a UDP socket suitable for exchanging datagrams with `peer`.
pub(crate) async fn bind_udp(peer: SocketAddr, source_ip: Option<IpAddr>) -> io::Result<UdpSocket> {
    let socket = UdpSocket::bind(local_bind_addr(peer, source_ip)).await?;
    socket.connect(peer).await?;
    Ok(socket)
}

/// Opens a TCP connection to `peer`.
pub(crate) async fn connect_tcp(peer: SocketAddr, source_ip: Option<IpAddr>) -> io::Result<TcpStream> {
    let socket = if peer.is_ipv4() {
        TcpSocket::new_v4()?
    } else {
        TcpSocket::new_v6()?
    };
    if source_ip.is_some() {
        socket.bind(local_bind_addr(peer, source_ip))?;
    }
    socket.connect(peer).await
}
