use serde::Serialize;
use std::collections::BTreeMap;

/// Server rules (console variables) keyed by name. Duplicate names in a
/// response collapse to the last value received.
pub type RuleMap = BTreeMap<String, String>;

/// Reply to the `i` query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerInfo {
    pub passworded: bool,
    pub players: u16,
    pub max_players: u16,
    pub hostname: String,
    pub gamemode: String,
    pub language: String,
}

/// One entry of the `c` query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientRecord {
    pub nickname: String,
    pub score: i32,
}

/// One entry of the `d` query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailedClientRecord {
    pub id: u8,
    pub nickname: String,
    pub score: i32,
    /// Milliseconds, as reported by the server.
    pub ping: i32,
}

/// Combined info, rules and player roster of one server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ServerStatus {
    pub info: ServerInfo,
    pub rules: RuleMap,
    pub clients: Vec<DetailedClientRecord>,
}

impl ServerStatus {
    /// Servers stop answering player-list queries above this many players.
    pub const MAX_LISTED_PLAYERS: u16 = 100;

    pub fn should_list_clients(info: &ServerInfo) -> bool {
        info.players > 0 && info.players <= Self::MAX_LISTED_PLAYERS
    }
}
