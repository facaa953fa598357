use super::Opcode;
use std::net::Ipv4Addr;

pub const MAGIC: [u8; 4] = *b"SAMP";

/// Offset of the opcode byte; the payload starts right after it.
pub const OPCODE_OFFSET: usize = 10;

pub const HEADER_LEN: usize = OPCODE_OFFSET + 1;

/// Builds a request datagram. `payload` is empty for every opcode except
/// ping, which carries its 4-byte nonce.
pub fn encode_request(addr: Ipv4Addr, port: u16, opcode: Opcode, payload: &[u8]) -> Vec<u8> {
    let mut packet = Vec::with_capacity(HEADER_LEN + payload.len());
    packet.extend_from_slice(&MAGIC);
    packet.extend_from_slice(&addr.octets());
    packet.extend_from_slice(&port.to_le_bytes());
    packet.push(opcode.as_byte());
    packet.extend_from_slice(payload);
    packet
}
