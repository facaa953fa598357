use super::{decoder, Opcode};
use crate::{ClientRecord, DetailedClientRecord, QueryError, RuleMap, ServerInfo};

pub type PingNonce = [u8; 4];

/// One request kind: the opcode it sends, any payload after the opcode,
/// and how its reply is decoded.
pub trait Query: Send + Sync {
    type Output: Send;

    fn opcode(&self) -> Opcode;

    fn payload(&self) -> &[u8] {
        &[]
    }

    fn decode(&self, response: &[u8]) -> Result<Self::Output, QueryError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InfoQuery;

#[derive(Debug, Clone, Copy, Default)]
pub struct RulesQuery;

#[derive(Debug, Clone, Copy, Default)]
pub struct ClientListQuery;

#[derive(Debug, Clone, Copy, Default)]
pub struct DetailedClientListQuery;

/// Liveness probe. The server must echo `nonce` back verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PingQuery {
    pub nonce: PingNonce,
}

impl PingQuery {
    pub fn new(nonce: PingNonce) -> Self {
        Self { nonce }
    }
}

impl Query for InfoQuery {
    type Output = ServerInfo;

    fn opcode(&self) -> Opcode {
        Opcode::Info
    }

    fn decode(&self, response: &[u8]) -> Result<ServerInfo, QueryError> {
        decoder::decode_info(response)
    }
}

impl Query for RulesQuery {
    type Output = RuleMap;

    fn opcode(&self) -> Opcode {
        Opcode::Rules
    }

    fn decode(&self, response: &[u8]) -> Result<RuleMap, QueryError> {
        decoder::decode_rules(response)
    }
}

impl Query for ClientListQuery {
    type Output = Vec<ClientRecord>;

    fn opcode(&self) -> Opcode {
        Opcode::ClientList
    }

    fn decode(&self, response: &[u8]) -> Result<Vec<ClientRecord>, QueryError> {
        decoder::decode_client_list(response)
    }
}

impl Query for DetailedClientListQuery {
    type Output = Vec<DetailedClientRecord>;

    fn opcode(&self) -> Opcode {
        Opcode::DetailedClientList
    }

    fn decode(&self, response: &[u8]) -> Result<Vec<DetailedClientRecord>, QueryError> {
        decoder::decode_detailed_client_list(response)
    }
}

impl Query for PingQuery {
    type Output = ();

    fn opcode(&self) -> Opcode {
        Opcode::Ping
    }

    fn payload(&self) -> &[u8] {
        &self.nonce
    }

    fn decode(&self, response: &[u8]) -> Result<(), QueryError> {
        decoder::verify_ping_echo(response, &self.nonce)
    }
}
