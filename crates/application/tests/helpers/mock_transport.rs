#![allow(dead_code)]

use async_trait::async_trait;
use samp_query_application::ports::{AddressResolver, QueryTransport, TransportResponse};
use samp_query_domain::protocol::{Opcode, HEADER_LEN, MAGIC, OPCODE_OFFSET};
use samp_query_domain::QueryError;
use std::collections::VecDeque;
use std::net::{Ipv4Addr, SocketAddrV4};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

pub enum Scripted {
    Reply(Vec<u8>),
    /// Builds the reply from the request, e.g. to echo a ping nonce.
    Echo(fn(&[u8]) -> Vec<u8>),
    Fail(QueryError),
}

pub struct SentRequest {
    pub server: SocketAddrV4,
    pub bytes: Vec<u8>,
    pub timeout: Duration,
}

/// Plays back a fixed script of outcomes, one per `exchange` call.
pub struct MockTransport {
    script: Mutex<VecDeque<Scripted>>,
    sent: Mutex<Vec<SentRequest>>,
}

impl MockTransport {
    pub fn new(script: Vec<Scripted>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            sent: Mutex::new(Vec::new()),
        }
    }

    pub fn timeouts_then(count: usize, reply: Vec<u8>) -> Self {
        let mut script: Vec<Scripted> = (0..count).map(|_| timeout_step()).collect();
        script.push(Scripted::Reply(reply));
        Self::new(script)
    }

    pub fn call_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }

    pub fn last_request(&self) -> Option<Vec<u8>> {
        self.sent.lock().unwrap().last().map(|r| r.bytes.clone())
    }

    pub fn requests(&self) -> Vec<Vec<u8>> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.bytes.clone())
            .collect()
    }

    pub fn servers(&self) -> Vec<SocketAddrV4> {
        self.sent.lock().unwrap().iter().map(|r| r.server).collect()
    }

    pub fn timeouts(&self) -> Vec<Duration> {
        self.sent
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.timeout)
            .collect()
    }
}

#[async_trait]
impl QueryTransport for MockTransport {
    async fn exchange(
        &self,
        server: SocketAddrV4,
        request: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, QueryError> {
        self.sent.lock().unwrap().push(SentRequest {
            server,
            bytes: request.to_vec(),
            timeout,
        });

        let step = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(timeout_step);

        match step {
            Scripted::Reply(bytes) => Ok(TransportResponse {
                bytes,
                round_trip: Duration::from_millis(12),
            }),
            Scripted::Echo(build) => Ok(TransportResponse {
                bytes: build(request),
                round_trip: Duration::from_millis(12),
            }),
            Scripted::Fail(err) => Err(err),
        }
    }
}

pub fn timeout_step() -> Scripted {
    Scripted::Fail(QueryError::Timeout {
        elapsed: Duration::from_millis(100),
    })
}

pub struct MockResolver {
    result: Result<Ipv4Addr, QueryError>,
    calls: AtomicUsize,
}

impl MockResolver {
    pub fn returning(addr: Ipv4Addr) -> Self {
        Self {
            result: Ok(addr),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing(host: &str) -> Self {
        Self {
            result: Err(QueryError::Resolution {
                host: host.to_string(),
                reason: "no such host".to_string(),
            }),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AddressResolver for MockResolver {
    async fn resolve_ipv4(&self, _host: &str) -> Result<Ipv4Addr, QueryError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

/// Response header for `opcode` followed by `payload`.
pub fn response(opcode: Opcode, payload: &[u8]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(HEADER_LEN + payload.len());
    bytes.extend_from_slice(&MAGIC);
    bytes.extend_from_slice(&[127, 0, 0, 1, 0x61, 0x1e]);
    bytes.push(opcode.as_byte());
    bytes.extend_from_slice(payload);
    bytes
}

pub fn info_response(players: u16, hostname: &str) -> Vec<u8> {
    let mut payload = vec![0u8];
    payload.extend_from_slice(&players.to_le_bytes());
    payload.extend_from_slice(&500u16.to_le_bytes());
    for text in [hostname, "Roleplay", "English"] {
        payload.extend_from_slice(&(text.len() as u32).to_le_bytes());
        payload.extend_from_slice(text.as_bytes());
    }
    response(Opcode::Info, &payload)
}

pub fn rules_response(rules: &[(&str, &str)]) -> Vec<u8> {
    let mut payload = (rules.len() as u16).to_le_bytes().to_vec();
    for (name, value) in rules {
        payload.push(name.len() as u8);
        payload.extend_from_slice(name.as_bytes());
        payload.push(value.len() as u8);
        payload.extend_from_slice(value.as_bytes());
    }
    response(Opcode::Rules, &payload)
}

pub fn detailed_response(players: &[(u8, &str, i32, i32)]) -> Vec<u8> {
    let mut payload = (players.len() as u16).to_le_bytes().to_vec();
    for (id, nickname, score, ping) in players {
        payload.push(*id);
        payload.push(nickname.len() as u8);
        payload.extend_from_slice(nickname.as_bytes());
        payload.extend_from_slice(&score.to_le_bytes());
        payload.extend_from_slice(&ping.to_le_bytes());
    }
    response(Opcode::DetailedClientList, &payload)
}

/// Ping reply that echoes the nonce of `request`.
pub fn echo_ping(request: &[u8]) -> Vec<u8> {
    response(Opcode::Ping, &request[OPCODE_OFFSET + 1..])
}

/// Ping reply with a nonce the client never sent.
pub fn wrong_ping(request: &[u8]) -> Vec<u8> {
    let nonce: Vec<u8> = request[OPCODE_OFFSET + 1..].iter().map(|b| !b).collect();
    response(Opcode::Ping, &nonce)
}
