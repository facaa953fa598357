//! SA-MP query wire protocol.
//!
//! Every datagram, in both directions, starts with the same 11-byte header:
//! the ASCII tag `SAMP`, the server IPv4 address (network order), the server
//! port (little-endian) and a one-byte opcode. Responses echo the header and
//! append an opcode-specific payload.

pub mod decoder;
pub mod opcode;
pub mod packet;
pub mod query;
mod reader;

pub use decoder::{
    check_header, check_magic, decode_client_list, decode_detailed_client_list, decode_info,
    decode_rules, verify_ping_echo,
};
pub use opcode::Opcode;
pub use packet::{encode_request, HEADER_LEN, MAGIC, OPCODE_OFFSET};
pub use query::{
    ClientListQuery, DetailedClientListQuery, InfoQuery, PingNonce, PingQuery, Query, RulesQuery,
};
