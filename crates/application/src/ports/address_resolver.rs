use async_trait::async_trait;
use samp_query_domain::QueryError;
use std::net::Ipv4Addr;

#[async_trait]
pub trait AddressResolver: Send + Sync {
    /// Maps a hostname or IPv4 literal to a single IPv4 address. Failures
    /// are reported as `QueryError::Resolution`.
    async fn resolve_ipv4(&self, host: &str) -> Result<Ipv4Addr, QueryError>;
}
