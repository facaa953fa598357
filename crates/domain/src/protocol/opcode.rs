use std::fmt;

/// Query kind, sent as a single ASCII byte at [`super::OPCODE_OFFSET`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Opcode {
    Info,
    Rules,
    ClientList,
    DetailedClientList,
    Ping,
}

impl Opcode {
    pub const fn as_byte(self) -> u8 {
        match self {
            Self::Info => b'i',
            Self::Rules => b'r',
            Self::ClientList => b'c',
            Self::DetailedClientList => b'd',
            Self::Ping => b'p',
        }
    }

    pub fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'i' => Some(Self::Info),
            b'r' => Some(Self::Rules),
            b'c' => Some(Self::ClientList),
            b'd' => Some(Self::DetailedClientList),
            b'p' => Some(Self::Ping),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Rules => "rules",
            Self::ClientList => "client-list",
            Self::DetailedClientList => "detailed-client-list",
            Self::Ping => "ping",
        }
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ('{}')", self.as_str(), self.as_byte() as char)
    }
}
