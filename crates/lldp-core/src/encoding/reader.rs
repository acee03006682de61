use crate::types::MacAddr;
use crate::DecodeError;

/// Cursor over a borrowed byte slice.
///
/// Every read is bounds-checked and advances the cursor only on success, so a
/// failed read leaves the position where it was.
#[derive(Debug, Clone, Copy)]
pub struct Reader<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub const fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub const fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    pub fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    pub fn peek_u8(&self) -> Result<u8, DecodeError> {
        self.buf
            .get(self.pos)
            .copied()
            .ok_or(DecodeError::UnexpectedEof)
    }

    pub fn read_u8(&mut self) -> Result<u8, DecodeError> {
        let byte = self.peek_u8()?;
        self.pos += 1;
        Ok(byte)
    }

    pub fn read_exact(&mut self, len: usize) -> Result<&'a [u8], DecodeError> {
        if self.remaining() < len {
            return Err(DecodeError::UnexpectedEof);
        }
        let start = self.pos;
        self.pos += len;
        Ok(&self.buf[start..start + len])
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N], DecodeError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_exact(N)?);
        Ok(out)
    }

    /// Consumes and returns everything left.
    pub fn read_rest(&mut self) -> &'a [u8] {
        let start = self.pos.min(self.buf.len());
        self.pos = self.buf.len();
        &self.buf[start..]
    }

    pub fn read_be_u16(&mut self) -> Result<u16, DecodeError> {
        Ok(u16::from_be_bytes(self.read_array()?))
    }

    pub fn read_be_u32(&mut self) -> Result<u32, DecodeError> {
        Ok(u32::from_be_bytes(self.read_array()?))
    }

    pub fn read_mac(&mut self) -> Result<MacAddr, DecodeError> {
        self.read_array().map(MacAddr)
    }

    /// Reads a one-byte length and that many bytes after it.
    pub fn read_len_prefixed(&mut self) -> Result<&'a [u8], DecodeError> {
        let mut r = *self;
        let len = usize::from(r.read_u8()?);
        let data = r.read_exact(len)?;
        *self = r;
        Ok(data)
    }

    /// Fails with [`DecodeError::InvalidLength`] if any bytes are left.
    pub fn finish(&self) -> Result<(), DecodeError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(DecodeError::InvalidLength)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Reader;
    use crate::DecodeError;

    #[test]
    fn reader_reads_big_endian_fields() {
        let mut r = Reader::new(&[0x00, 0x3c, 0xde, 0xad, 0xbe, 0xef, 7]);
        assert_eq!(r.read_be_u16().unwrap(), 60);
        assert_eq!(r.read_be_u32().unwrap(), 0xdead_beef);
        assert_eq!(r.position(), 6);
        assert_eq!(r.read_rest(), &[7]);
        assert!(r.is_empty());
        assert_eq!(r.read_rest(), &[] as &[u8]);
    }

    #[test]
    fn failed_read_keeps_position() {
        let mut r = Reader::new(&[1, 2, 3]);
        assert_eq!(r.read_u8().unwrap(), 1);
        assert_eq!(r.read_array::<4>().unwrap_err(), DecodeError::UnexpectedEof);
        assert_eq!(r.position(), 1);
        assert_eq!(r.read_array::<2>().unwrap(), [2, 3]);
    }

    #[test]
    fn len_prefixed_field_is_all_or_nothing() {
        let mut r = Reader::new(&[0x02, 0x2B, 0x06, 0x03, 0xAA]);
        assert_eq!(r.read_len_prefixed().unwrap(), &[0x2B, 0x06]);
        assert_eq!(r.read_len_prefixed().unwrap_err(), DecodeError::UnexpectedEof);
        assert_eq!(r.position(), 3);
        assert_eq!(r.remaining(), 2);
    }

    #[test]
    fn mac_is_six_octets() {
        let mut r = Reader::new(&[0x01, 0x80, 0xC2, 0x00, 0x00, 0x0E, 0x88]);
        assert_eq!(r.read_mac().unwrap().to_string(), "01:80:c2:00:00:0e");
        assert_eq!(r.read_mac().unwrap_err(), DecodeError::UnexpectedEof);
    }

    #[test]
    fn finish_rejects_trailing_bytes() {
        let mut r = Reader::new(&[1, 2]);
        r.read_u8().unwrap();
        assert_eq!(r.finish().unwrap_err(), DecodeError::InvalidLength);
        r.read_u8().unwrap();
        assert!(r.finish().is_ok());
    }
}
