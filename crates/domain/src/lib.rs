//! SA-MP Query Domain Layer
pub mod config;
pub mod errors;
pub mod protocol;
pub mod query_options;
pub mod query_target;
pub mod server_status;

pub use config::{CliOverrides, Config, ConfigError};
pub use errors::QueryError;
pub use protocol::{
    ClientListQuery, DetailedClientListQuery, InfoQuery, Opcode, PingNonce, PingQuery, Query,
    RulesQuery,
};
pub use query_options::{EffectiveOptions, QueryOptions, DEFAULT_ATTEMPTS, DEFAULT_TIMEOUT};
pub use query_target::QueryTarget;
pub use server_status::{ClientRecord, DetailedClientRecord, RuleMap, ServerInfo, ServerStatus};
