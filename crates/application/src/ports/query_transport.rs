use async_trait::async_trait;
use samp_query_domain::QueryError;
use std::net::SocketAddrV4;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    /// Time between the request leaving and the reply arriving.
    pub round_trip: Duration,
}

/// A single request/response exchange.
///
/// Implementations send `request` exactly once and wait at most `timeout`
/// for one datagram. They must fail with `QueryError::Timeout` when the
/// deadline passes so that the retry controller can tell it apart from
/// fatal errors.
#[async_trait]
pub trait QueryTransport: Send + Sync {
    async fn exchange(
        &self,
        server: SocketAddrV4,
        request: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, QueryError>;
}
