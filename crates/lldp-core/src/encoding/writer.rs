use crate::encoding::header::{TlvHeader, TLV_HEADER_LEN};
use crate::types::MacAddr;
use crate::EncodeError;

/// Cursor over a caller-owned output buffer.
///
/// A write that does not fit fails with [`EncodeError::BufferTooSmall`] and
/// leaves the cursor where it was.
#[derive(Debug)]
pub struct Writer<'a> {
    buf: &'a mut [u8],
    pos: usize,
}

impl<'a> Writer<'a> {
    pub fn new(buf: &'a mut [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub const fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.buf.len().saturating_sub(self.pos)
    }

    pub fn as_written(&self) -> &[u8] {
        &self.buf[..self.pos]
    }

    pub fn write_all(&mut self, data: &[u8]) -> Result<(), EncodeError> {
        let end = self
            .pos
            .checked_add(data.len())
            .filter(|end| *end <= self.buf.len())
            .ok_or(EncodeError::BufferTooSmall)?;
        self.buf[self.pos..end].copy_from_slice(data);
        self.pos = end;
        Ok(())
    }

    pub fn write_u8(&mut self, value: u8) -> Result<(), EncodeError> {
        self.write_all(&[value])
    }

    pub fn write_be_u16(&mut self, value: u16) -> Result<(), EncodeError> {
        self.write_all(&value.to_be_bytes())
    }

    pub fn write_be_u32(&mut self, value: u32) -> Result<(), EncodeError> {
        self.write_all(&value.to_be_bytes())
    }

    pub fn write_mac(&mut self, mac: MacAddr) -> Result<(), EncodeError> {
        self.write_all(&mac.octets())
    }

    /// Writes a one-byte length followed by `data`.
    pub fn write_len_prefixed(&mut self, data: &[u8]) -> Result<(), EncodeError> {
        let len = u8::try_from(data.len()).map_err(|_| EncodeError::FieldTooLong {
            max: usize::from(u8::MAX),
            actual: data.len(),
        })?;
        if self.remaining() < 1 + data.len() {
            return Err(EncodeError::BufferTooSmall);
        }
        self.write_u8(len)?;
        self.write_all(data)
    }

    /// Writes a TLV header announcing `value_len` bytes, then lets `value`
    /// fill them in.
    ///
    /// The cursor is rewound if `value` fails or writes a different number of
    /// bytes than announced.
    pub fn write_tlv<F>(&mut self, tlv_type: u8, value_len: usize, value: F) -> Result<(), EncodeError>
    where
        F: FnOnce(&mut Self) -> Result<(), EncodeError>,
    {
        let header = TlvHeader::new(tlv_type, value_len)?;
        if self.remaining() < header.encoded_len() {
            return Err(EncodeError::BufferTooSmall);
        }
        let start = self.pos;
        header.encode(self)?;
        let result = match value(self) {
            Ok(()) => {
                let written = self.pos - start - TLV_HEADER_LEN;
                if written == value_len {
                    Ok(())
                } else {
                    Err(EncodeError::LengthMismatch {
                        announced: value_len,
                        written,
                    })
                }
            }
            Err(err) => Err(err),
        };
        if result.is_err() {
            self.pos = start;
        }
        result
    }
}
