use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Failed to resolve {host}: {reason}")]
    Resolution { host: String, reason: String },

    #[error("Query timed out after {} ms", .elapsed.as_millis())]
    Timeout { elapsed: Duration },

    /// Every configured attempt timed out. Holds the elapsed time of each
    /// attempt in the order they were made.
    #[error("Query timed out on all {} attempts", .attempts.len())]
    TimeoutsExhausted { attempts: Vec<Duration> },

    #[error("Malformed response: {reason}")]
    MalformedResponse { reason: String, buffer: Vec<u8> },

    #[error("I/O error: {0}")]
    Io(String),
}

impl QueryError {
    pub fn malformed(reason: impl Into<String>, buffer: &[u8]) -> Self {
        Self::MalformedResponse {
            reason: reason.into(),
            buffer: buffer.to_vec(),
        }
    }

    /// True for both a single attempt timeout and an exhausted retry budget.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout { .. } | Self::TimeoutsExhausted { .. })
    }

    /// The raw datagram that failed validation, if any.
    pub fn response_buffer(&self) -> Option<&[u8]> {
        match self {
            Self::MalformedResponse { buffer, .. } => Some(buffer),
            _ => None,
        }
    }
}
