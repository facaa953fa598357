mod address_resolver;
mod query_transport;

pub use address_resolver::AddressResolver;
pub use query_transport::{QueryTransport, TransportResponse};
