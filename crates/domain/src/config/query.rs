use crate::{QueryOptions, DEFAULT_ATTEMPTS, DEFAULT_TIMEOUT};
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct QueryConfig {
    #[serde(default = "default_attempts")]
    pub attempts: u32,

    /// Per-attempt timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Hostname lookup timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub resolve_timeout_ms: u64,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            attempts: default_attempts(),
            timeout_ms: default_timeout_ms(),
            resolve_timeout_ms: default_timeout_ms(),
        }
    }
}

impl QueryConfig {
    pub fn options(&self) -> QueryOptions {
        QueryOptions::new()
            .with_attempts(self.attempts)
            .with_timeout(Duration::from_millis(self.timeout_ms))
    }

    pub fn resolve_timeout(&self) -> Duration {
        Duration::from_millis(self.resolve_timeout_ms)
    }
}

fn default_attempts() -> u32 {
    DEFAULT_ATTEMPTS
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT.as_millis() as u64
}
