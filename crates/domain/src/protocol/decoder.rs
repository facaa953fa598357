use super::reader::PacketReader;
use super::{Opcode, HEADER_LEN, MAGIC, OPCODE_OFFSET};
use crate::{ClientRecord, DetailedClientRecord, QueryError, RuleMap, ServerInfo};

const NONCE_LEN: usize = 4;

/// Rejects any datagram that does not start with the `SAMP` tag.
pub fn check_magic(buf: &[u8]) -> Result<(), QueryError> {
    if buf.len() < MAGIC.len() || buf[..MAGIC.len()] != MAGIC {
        return Err(QueryError::malformed(
            format!(
                "Expected magic tag {} but got {}",
                hex(&MAGIC),
                hex(&buf[..buf.len().min(MAGIC.len())])
            ),
            buf,
        ));
    }
    Ok(())
}

/// Validates the magic tag and the opcode byte. The echoed address and
/// port are not checked.
pub fn check_header(buf: &[u8], expected: Opcode) -> Result<(), QueryError> {
    check_magic(buf)?;

    if buf.len() < HEADER_LEN {
        return Err(QueryError::malformed(
            format!(
                "Response is {} bytes, shorter than the {}-byte header",
                buf.len(),
                HEADER_LEN
            ),
            buf,
        ));
    }

    let actual = buf[OPCODE_OFFSET];
    if actual != expected.as_byte() {
        return Err(QueryError::malformed(
            format!("Expected opcode {} but got 0x{:02x}", expected, actual),
            buf,
        ));
    }
    Ok(())
}

fn payload_reader(buf: &[u8], expected: Opcode) -> Result<PacketReader<'_>, QueryError> {
    check_header(buf, expected)?;
    Ok(PacketReader::new(buf, HEADER_LEN))
}

pub fn decode_info(buf: &[u8]) -> Result<ServerInfo, QueryError> {
    let mut reader = payload_reader(buf, Opcode::Info)?;

    Ok(ServerInfo {
        passworded: reader.read_bool("password flag")?,
        players: reader.read_u16("player count")?,
        max_players: reader.read_u16("max players")?,
        hostname: reader.read_long_string("hostname")?,
        gamemode: reader.read_long_string("gamemode")?,
        language: reader.read_long_string("language")?,
    })
}

/// Duplicate rule names keep the value of their last occurrence.
pub fn decode_rules(buf: &[u8]) -> Result<RuleMap, QueryError> {
    let mut reader = payload_reader(buf, Opcode::Rules)?;
    let count = reader.read_u16("rule count")?;

    let mut rules = RuleMap::new();
    for _ in 0..count {
        let name = reader.read_short_string("rule name")?;
        let value = reader.read_short_string("rule value")?;
        rules.insert(name, value);
    }
    Ok(rules)
}

pub fn decode_client_list(buf: &[u8]) -> Result<Vec<ClientRecord>, QueryError> {
    let mut reader = payload_reader(buf, Opcode::ClientList)?;
    let count = reader.read_u16("client count")?;

    let mut clients = Vec::with_capacity(count as usize);
    for _ in 0..count {
        clients.push(ClientRecord {
            nickname: reader.read_short_string("nickname")?,
            score: reader.read_i32("score")?,
        });
    }
    Ok(clients)
}

pub fn decode_detailed_client_list(buf: &[u8]) -> Result<Vec<DetailedClientRecord>, QueryError> {
    let mut reader = payload_reader(buf, Opcode::DetailedClientList)?;
    let count = reader.read_u16("client count")?;

    let mut clients = Vec::with_capacity(count as usize);
    for _ in 0..count {
        clients.push(DetailedClientRecord {
            id: reader.read_u8("player id")?,
            nickname: reader.read_short_string("nickname")?,
            score: reader.read_i32("score")?,
            ping: reader.read_i32("ping")?,
        });
    }
    Ok(clients)
}

/// Checks that a ping reply echoes the nonce that was sent.
pub fn verify_ping_echo(buf: &[u8], sent: &[u8; NONCE_LEN]) -> Result<(), QueryError> {
    let mut reader = payload_reader(buf, Opcode::Ping)?;
    let received = reader.take(NONCE_LEN, "ping nonce")?;

    if received != sent {
        return Err(QueryError::malformed(
            format!(
                "Ping payload mismatch: sent {}, received {}",
                hex(sent),
                hex(received)
            ),
            buf,
        ));
    }
    Ok(())
}

fn hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}
