use samp_query_application::use_cases::QueryClient;
use samp_query_domain::{Config, QueryTarget};
use samp_query_infrastructure::transport::{SystemResolver, UdpTransport};
use std::sync::Arc;
use tracing::debug;

pub struct QueryServices {
    pub client: QueryClient,
}

impl QueryServices {
    pub fn new(config: &Config, target: QueryTarget) -> Self {
        debug!(
            attempts = config.query.attempts,
            timeout_ms = config.query.timeout_ms,
            "Initializing query client"
        );

        let resolver = Arc::new(SystemResolver::new(config.query.resolve_timeout()));
        let transport = Arc::new(UdpTransport::new());

        let client =
            QueryClient::new(target, resolver, transport).with_defaults(config.query_options());

        Self { client }
    }
}
