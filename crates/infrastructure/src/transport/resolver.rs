use async_trait::async_trait;
use samp_query_application::ports::AddressResolver;
use samp_query_domain::QueryError;
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;
use tracing::debug;

/// Resolves hostnames through the operating system, keeping the first IPv4
/// address returned.
#[derive(Debug, Clone)]
pub struct SystemResolver {
    timeout: Duration,
}

impl SystemResolver {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }
}

#[async_trait]
impl AddressResolver for SystemResolver {
    async fn resolve_ipv4(&self, host: &str) -> Result<Ipv4Addr, QueryError> {
        if let Ok(addr) = host.parse::<Ipv4Addr>() {
            return Ok(addr);
        }

        let resolution_error = |reason: String| QueryError::Resolution {
            host: host.to_string(),
            reason,
        };

        let addrs = tokio::time::timeout(self.timeout, tokio::net::lookup_host((host, 0)))
            .await
            .map_err(|_| {
                resolution_error(format!(
                    "lookup timed out after {} ms",
                    self.timeout.as_millis()
                ))
            })?
            .map_err(|e| resolution_error(e.to_string()))?;

        let addr = addrs
            .filter_map(|addr| match addr {
                SocketAddr::V4(v4) => Some(*v4.ip()),
                SocketAddr::V6(_) => None,
            })
            .next()
            .ok_or_else(|| resolution_error("no IPv4 address found".to_string()))?;

        debug!(host, resolved = %addr, "Hostname resolved");
        Ok(addr)
    }
}
