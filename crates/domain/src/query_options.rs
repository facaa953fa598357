use crate::QueryError;
use std::time::Duration;

pub const DEFAULT_ATTEMPTS: u32 = 1;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Per-call or per-client query settings. Unset fields fall back to the
/// client defaults, then to [`DEFAULT_ATTEMPTS`] and [`DEFAULT_TIMEOUT`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct QueryOptions {
    pub attempts: Option<u32>,
    pub timeout: Option<Duration>,
}

/// Fully resolved settings for one logical query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectiveOptions {
    pub attempts: u32,
    pub timeout: Duration,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attempts(mut self, attempts: u32) -> Self {
        self.attempts = Some(attempts);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Fields set on `self` win over those in `defaults`.
    pub fn or(self, defaults: QueryOptions) -> Self {
        Self {
            attempts: self.attempts.or(defaults.attempts),
            timeout: self.timeout.or(defaults.timeout),
        }
    }

    pub fn resolve(&self) -> Result<EffectiveOptions, QueryError> {
        let attempts = self.attempts.unwrap_or(DEFAULT_ATTEMPTS);
        if attempts == 0 {
            return Err(QueryError::InvalidConfiguration(
                "Attempt count must be a positive integer".to_string(),
            ));
        }

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(QueryError::InvalidConfiguration(
                "Timeout must be greater than zero".to_string(),
            ));
        }

        Ok(EffectiveOptions { attempts, timeout })
    }
}
