#![allow(dead_code)]
use std::net::{SocketAddr, SocketAddrV4};
use std::sync::{Arc, Mutex};
use tokio::net::UdpSocket;
use tokio::sync::oneshot;

/// Decides the reply to the `n`-th request (0-based). `None` stays silent.
pub type Responder = Box<dyn Fn(&[u8], usize) -> Option<Vec<u8>> + Send + Sync>;

/// Loopback SA-MP server answering from a canned player roster.
pub struct MockSampServer {
    addr: SocketAddrV4,
    peers: Arc<Mutex<Vec<SocketAddr>>>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockSampServer {
    pub async fn start(responder: Responder) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = match socket.local_addr()? {
            SocketAddr::V4(addr) => addr,
            other => panic!("Expected IPv4 address, got {}", other),
        };

        let peers = Arc::new(Mutex::new(Vec::new()));
        let seen = peers.clone();
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        tokio::spawn(async move {
            let mut buf = vec![0u8; 2048];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => {
                        break;
                    }
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            let index = {
                                let mut seen = seen.lock().unwrap();
                                seen.push(peer);
                                seen.len() - 1
                            };
                            if let Some(reply) = responder(&buf[..len], index) {
                                let _ = socket.send_to(&reply, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            peers,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    /// Answers every request from the canned roster.
    pub async fn standard() -> Self {
        Self::start(Box::new(|request: &[u8], _: usize| {
            Some(standard_reply(request))
        }))
        .await
        .unwrap()
    }

    /// Ignores the first `dropped` requests, then answers normally.
    pub async fn dropping_first(dropped: usize) -> Self {
        Self::start(Box::new(move |request: &[u8], index: usize| {
            (index >= dropped).then(|| standard_reply(request))
        }))
        .await
        .unwrap()
    }

    pub async fn silent() -> Self {
        Self::start(Box::new(|_: &[u8], _: usize| -> Option<Vec<u8>> { None }))
            .await
            .unwrap()
    }

    pub fn addr(&self) -> SocketAddrV4 {
        self.addr
    }

    pub fn request_count(&self) -> usize {
        self.peers.lock().unwrap().len()
    }

    pub fn peers(&self) -> Vec<SocketAddr> {
        self.peers.lock().unwrap().clone()
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockSampServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

/// Echoes the 11-byte request header and appends the payload for its opcode.
pub fn standard_reply(request: &[u8]) -> Vec<u8> {
    if request.len() < 11 {
        return vec![];
    }

    let mut reply = request[..11].to_vec();

    match request[10] {
        b'i' => {
            reply.push(1);
            reply.extend_from_slice(&2u16.to_le_bytes());
            reply.extend_from_slice(&50u16.to_le_bytes());
            for text in ["Mock Server", "Deathmatch", "English"] {
                reply.extend_from_slice(&(text.len() as u32).to_le_bytes());
                reply.extend_from_slice(text.as_bytes());
            }
        }
        b'r' => {
            let rules = [("lagcomp", "On"), ("mapname", "San Andreas")];
            reply.extend_from_slice(&(rules.len() as u16).to_le_bytes());
            for (name, value) in rules {
                push_short(&mut reply, name);
                push_short(&mut reply, value);
            }
        }
        b'c' => {
            reply.extend_from_slice(&2u16.to_le_bytes());
            for (nickname, score) in [("Carl", 10i32), ("Ryder", 5)] {
                push_short(&mut reply, nickname);
                reply.extend_from_slice(&score.to_le_bytes());
            }
        }
        b'd' => {
            reply.extend_from_slice(&2u16.to_le_bytes());
            for (id, nickname, score, ping) in [(0u8, "Carl", 10i32, 30i32), (1, "Ryder", 5, 45)] {
                reply.push(id);
                push_short(&mut reply, nickname);
                reply.extend_from_slice(&score.to_le_bytes());
                reply.extend_from_slice(&ping.to_le_bytes());
            }
        }
        b'p' => reply.extend_from_slice(&request[11..]),
        _ => {}
    }

    reply
}

fn push_short(buf: &mut Vec<u8>, text: &str) {
    buf.push(text.len() as u8);
    buf.extend_from_slice(text.as_bytes());
}
