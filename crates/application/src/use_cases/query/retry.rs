use crate::ports::{QueryTransport, TransportResponse};
use samp_query_domain::{QueryError, QueryOptions};
use std::net::SocketAddrV4;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

#[derive(Debug)]
pub struct RetryOutcome {
    pub response: TransportResponse,
    /// Elapsed time of every attempt that timed out before the one that
    /// succeeded.
    pub timeouts: Vec<Duration>,
}

/// Repeats a transport exchange while it times out, up to the attempt budget.
///
/// Only `QueryError::Timeout` is retried. Any other error ends the call on
/// its first occurrence.
pub struct RetryController {
    transport: Arc<dyn QueryTransport>,
}

impl RetryController {
    pub fn new(transport: Arc<dyn QueryTransport>) -> Self {
        Self { transport }
    }

    pub async fn run(
        &self,
        server: SocketAddrV4,
        request: &[u8],
        options: &QueryOptions,
    ) -> Result<RetryOutcome, QueryError> {
        let effective = options.resolve()?;
        let mut timeouts = Vec::new();

        for attempt in 1..=effective.attempts {
            match self
                .transport
                .exchange(server, request, effective.timeout)
                .await
            {
                Ok(response) => {
                    debug!(
                        server = %server,
                        attempt,
                        bytes = response.bytes.len(),
                        "Query answered"
                    );
                    return Ok(RetryOutcome { response, timeouts });
                }
                Err(QueryError::Timeout { elapsed }) => {
                    debug!(
                        server = %server,
                        attempt,
                        max_attempts = effective.attempts,
                        elapsed_ms = elapsed.as_millis() as u64,
                        "Query attempt timed out"
                    );
                    timeouts.push(elapsed);
                }
                Err(e) => return Err(e),
            }
        }

        warn!(
            server = %server,
            attempts = timeouts.len(),
            "Query timed out on every attempt"
        );

        match timeouts.as_slice() {
            [elapsed] => Err(QueryError::Timeout { elapsed: *elapsed }),
            _ => Err(QueryError::TimeoutsExhausted { attempts: timeouts }),
        }
    }
}
