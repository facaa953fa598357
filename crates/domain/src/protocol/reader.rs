use crate::QueryError;

/// Bounds-checked little-endian cursor over a response datagram.
///
/// Every read fails with `MalformedResponse` (carrying the whole datagram)
/// instead of slicing past the end.
pub(crate) struct PacketReader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> PacketReader<'a> {
    pub(crate) fn new(buf: &'a [u8], pos: usize) -> Self {
        Self { buf, pos }
    }

    pub(crate) fn take(&mut self, len: usize, field: &str) -> Result<&'a [u8], QueryError> {
        let end = self
            .pos
            .checked_add(len)
            .filter(|end| *end <= self.buf.len())
            .ok_or_else(|| {
                QueryError::malformed(
                    format!(
                        "{} needs {} bytes at offset {}, only {} left",
                        field,
                        len,
                        self.pos,
                        self.buf.len().saturating_sub(self.pos)
                    ),
                    self.buf,
                )
            })?;

        let buf = self.buf;
        let bytes = &buf[self.pos..end];
        self.pos = end;
        Ok(bytes)
    }

    fn take_array<const N: usize>(&mut self, field: &str) -> Result<[u8; N], QueryError> {
        let bytes = self.take(N, field)?;
        let mut out = [0u8; N];
        out.copy_from_slice(bytes);
        Ok(out)
    }

    pub(crate) fn read_u8(&mut self, field: &str) -> Result<u8, QueryError> {
        Ok(self.take_array::<1>(field)?[0])
    }

    pub(crate) fn read_bool(&mut self, field: &str) -> Result<bool, QueryError> {
        Ok(self.read_u8(field)? != 0)
    }

    pub(crate) fn read_u16(&mut self, field: &str) -> Result<u16, QueryError> {
        Ok(u16::from_le_bytes(self.take_array(field)?))
    }

    pub(crate) fn read_u32(&mut self, field: &str) -> Result<u32, QueryError> {
        Ok(u32::from_le_bytes(self.take_array(field)?))
    }

    pub(crate) fn read_i32(&mut self, field: &str) -> Result<i32, QueryError> {
        Ok(i32::from_le_bytes(self.take_array(field)?))
    }

    /// String prefixed by a one-byte length.
    pub(crate) fn read_short_string(&mut self, field: &str) -> Result<String, QueryError> {
        let len = self.read_u8(field)? as usize;
        self.take(len, field).map(latin1)
    }

    /// String prefixed by a four-byte little-endian length.
    pub(crate) fn read_long_string(&mut self, field: &str) -> Result<String, QueryError> {
        let len = self.read_u32(field)?;
        let len = usize::try_from(len)
            .map_err(|_| QueryError::malformed(format!("{} length overflow", field), self.buf))?;
        self.take(len, field).map(latin1)
    }
}

/// Single-byte text: each byte is the code point of the same value.
fn latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}
