use super::RetryController;
use crate::ports::{AddressResolver, QueryTransport};
use samp_query_domain::protocol::encode_request;
use samp_query_domain::{
    ClientListQuery, ClientRecord, DetailedClientListQuery, DetailedClientRecord, InfoQuery,
    PingQuery, Query, QueryError, QueryOptions, QueryTarget, RuleMap, RulesQuery, ServerInfo,
    ServerStatus,
};
use std::net::SocketAddrV4;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Entry point for querying one game server.
///
/// The hostname is resolved again on every call, and each call runs its own
/// retry loop with fresh sockets, so concurrent calls on one client do not
/// interact.
pub struct QueryClient {
    target: QueryTarget,
    defaults: QueryOptions,
    resolver: Arc<dyn AddressResolver>,
    retry: RetryController,
}

impl QueryClient {
    pub fn new(
        target: QueryTarget,
        resolver: Arc<dyn AddressResolver>,
        transport: Arc<dyn QueryTransport>,
    ) -> Self {
        Self {
            target,
            defaults: QueryOptions::default(),
            resolver,
            retry: RetryController::new(transport),
        }
    }

    /// Client-level defaults, used for any field a call leaves unset.
    pub fn with_defaults(mut self, defaults: QueryOptions) -> Self {
        self.defaults = defaults;
        self
    }

    pub fn target(&self) -> &QueryTarget {
        &self.target
    }

    pub async fn get_info(&self, options: QueryOptions) -> Result<ServerInfo, QueryError> {
        self.execute(&InfoQuery, options).await
    }

    pub async fn get_rules(&self, options: QueryOptions) -> Result<RuleMap, QueryError> {
        self.execute(&RulesQuery, options).await
    }

    pub async fn get_client_list(
        &self,
        options: QueryOptions,
    ) -> Result<Vec<ClientRecord>, QueryError> {
        self.execute(&ClientListQuery, options).await
    }

    pub async fn get_detailed_client_list(
        &self,
        options: QueryOptions,
    ) -> Result<Vec<DetailedClientRecord>, QueryError> {
        self.execute(&DetailedClientListQuery, options).await
    }

    /// Round-trip latency in milliseconds. Always a single attempt,
    /// whatever `options.attempts` says.
    pub async fn ping(&self, options: QueryOptions) -> Result<u64, QueryError> {
        let query = PingQuery::new(fastrand::u32(..).to_le_bytes());
        let options = options.with_attempts(1);

        let ((), round_trip) = self.exchange(&query, options).await?;
        Ok(round_trip.as_millis() as u64)
    }

    /// Info and rules, plus the detailed player list when the server is
    /// small enough to send one.
    pub async fn fetch_status(&self, options: QueryOptions) -> Result<ServerStatus, QueryError> {
        let info = self.get_info(options).await?;
        let rules = self.get_rules(options).await?;

        let clients = if ServerStatus::should_list_clients(&info) {
            self.get_detailed_client_list(options).await?
        } else {
            debug!(
                server = %self.target,
                players = info.players,
                "Skipping player list"
            );
            Vec::new()
        };

        Ok(ServerStatus {
            info,
            rules,
            clients,
        })
    }

    pub async fn execute<Q: Query>(
        &self,
        query: &Q,
        options: QueryOptions,
    ) -> Result<Q::Output, QueryError> {
        self.exchange(query, options)
            .await
            .map(|(output, _)| output)
    }

    async fn exchange<Q: Query>(
        &self,
        query: &Q,
        options: QueryOptions,
    ) -> Result<(Q::Output, Duration), QueryError> {
        let options = options.or(self.defaults);
        options.resolve()?;

        let addr = self.resolver.resolve_ipv4(self.target.host()).await?;
        let server = SocketAddrV4::new(addr, self.target.port());

        let request = encode_request(addr, self.target.port(), query.opcode(), query.payload());

        debug!(
            host = self.target.host(),
            server = %server,
            opcode = %query.opcode(),
            "Sending query"
        );

        let outcome = self.retry.run(server, &request, &options).await?;

        let output = query.decode(&outcome.response.bytes)?;
        Ok((output, outcome.response.round_trip))
    }
}
