use core::fmt;

use crate::encoding::{reader::Reader, writer::Writer};
use crate::tlv::{TlvType, TlvValue};
use crate::{DecodeError, EncodeError};

/// Time To Live TLV (type 3): how many seconds the receiver should keep the
/// sender's information. Zero tells the receiver to discard it immediately.
///
/// Mandatory, and always the third TLV of an LLDPDU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Ttl(u16);

impl Ttl {
    pub const fn new(seconds: u16) -> Self {
        Self(seconds)
    }

    pub const fn seconds(self) -> u16 {
        self.0
    }
}

impl TlvValue for Ttl {
    const TLV_TYPE: TlvType = TlvType::Ttl;

    fn value_len(&self) -> usize {
        2
    }

    fn encode_value(&self, w: &mut Writer<'_>) -> Result<(), EncodeError> {
        w.write_be_u16(self.0)
    }

    fn decode_value(value: &[u8]) -> Result<Self, DecodeError> {
        let mut r = Reader::new(value);
        let seconds = r.read_be_u16()?;
        r.finish()?;
        Ok(Self(seconds))
    }
}

impl fmt::Display for Ttl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} seconds", self.0)
    }
}
