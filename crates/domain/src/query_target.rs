use crate::QueryError;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Host (name or IPv4 literal) and UDP port of a game server.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryTarget {
    host: Arc<str>,
    port: u16,
}

impl QueryTarget {
    /// Fails with `InvalidConfiguration` unless `port` is in 1..=65535.
    pub fn new(host: impl Into<Arc<str>>, port: u32) -> Result<Self, QueryError> {
        let host = host.into();
        if host.trim().is_empty() {
            return Err(QueryError::InvalidConfiguration(
                "Host cannot be empty".to_string(),
            ));
        }

        let port = u16::try_from(port)
            .ok()
            .filter(|p| *p != 0)
            .ok_or_else(|| {
                QueryError::InvalidConfiguration(format!(
                    "Port {} is outside the range 1-65535",
                    port
                ))
            })?;

        Ok(Self { host, port })
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl fmt::Display for QueryTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

impl FromStr for QueryTarget {
    type Err = QueryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (host, port_str) = s.rsplit_once(':').ok_or_else(|| {
            QueryError::InvalidConfiguration(format!("Expected host:port, got '{}'", s))
        })?;

        let port = port_str.parse::<u32>().map_err(|_| {
            QueryError::InvalidConfiguration(format!("Invalid port '{}'", port_str))
        })?;

        Self::new(host, port)
    }
}
