pub mod resolver;
pub mod udp;

pub use resolver::SystemResolver;
pub use udp::UdpTransport;
