//! UDP transport for SA-MP queries
//!
//! Each exchange binds its own ephemeral socket, sends the request once and
//! races the first inbound datagram against a timer. The socket and timer
//! are dropped when the exchange returns, whichever way it ends.

use async_trait::async_trait;
use samp_query_application::ports::{QueryTransport, TransportResponse};
use samp_query_domain::protocol::check_magic;
use samp_query_domain::QueryError;
use std::net::{IpAddr, Ipv4Addr, SocketAddrV4};
use std::time::{Duration, Instant};
use tokio::net::UdpSocket;
use tracing::{debug, warn};

/// Largest payload a single UDP datagram can carry over IPv4
const MAX_DATAGRAM_SIZE: usize = 65_507;

/// SA-MP query over UDP
#[derive(Debug, Clone, Copy, Default)]
pub struct UdpTransport;

impl UdpTransport {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl QueryTransport for UdpTransport {
    async fn exchange(
        &self,
        server: SocketAddrV4,
        request: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, QueryError> {
        // Bind to ephemeral port (0 = OS assigns)
        let socket = UdpSocket::bind(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 0))
            .await
            .map_err(|e| QueryError::Io(format!("Failed to bind UDP socket: {}", e)))?;

        let started = Instant::now();

        let bytes_sent = socket.send_to(request, server).await.map_err(|e| {
            QueryError::Io(format!("Failed to send UDP query to {}: {}", server, e))
        })?;

        debug!(server = %server, bytes_sent, "UDP query sent");

        let mut recv_buf = vec![0u8; MAX_DATAGRAM_SIZE];

        let (bytes_received, from_addr) = tokio::select! {
            result = socket.recv_from(&mut recv_buf) => result.map_err(|e| {
                QueryError::Io(format!("Failed to receive UDP response from {}: {}", server, e))
            })?,
            _ = tokio::time::sleep(timeout) => {
                debug!(
                    server = %server,
                    timeout_ms = timeout.as_millis() as u64,
                    "UDP query timed out"
                );
                return Err(QueryError::Timeout { elapsed: started.elapsed() });
            }
        };

        let round_trip = started.elapsed();

        if from_addr.ip() != IpAddr::V4(*server.ip()) {
            warn!(
                expected = %server,
                received_from = %from_addr,
                "UDP response from unexpected source"
            );
        }

        recv_buf.truncate(bytes_received);
        check_magic(&recv_buf)?;

        debug!(
            server = %server,
            bytes_received,
            round_trip_ms = round_trip.as_millis() as u64,
            "UDP response received"
        );

        Ok(TransportResponse {
            bytes: recv_buf,
            round_trip,
        })
    }
}
