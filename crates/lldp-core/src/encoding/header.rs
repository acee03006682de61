use crate::encoding::{reader::Reader, writer::Writer};
use crate::{DecodeError, EncodeError};

/// Size of a TLV header on the wire.
pub const TLV_HEADER_LEN: usize = 2;
/// Largest type code the 7-bit field can carry.
pub const MAX_TLV_TYPE: u8 = 0x7F;
/// Largest value length the 9-bit field can carry.
pub const MAX_TLV_LENGTH: usize = 0x1FF;

/// The two-byte header in front of every TLV.
///
/// ```text
///  byte 0          byte 1
/// +-------------+-+---------------+
/// | type (7)    |L|  length 7..0  |
/// +-------------+-+---------------+
/// ```
///
/// `L` is bit 8 of the length.
///
/// Built only through [`TlvHeader::new`] or [`TlvHeader::decode`], so both
/// fields are always inside their wire ranges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TlvHeader {
    tlv_type: u8,
    length: u16,
}

impl TlvHeader {
    pub fn new(tlv_type: u8, length: usize) -> Result<Self, EncodeError> {
        if tlv_type > MAX_TLV_TYPE {
            return Err(EncodeError::TypeOutOfRange(tlv_type));
        }
        if length > MAX_TLV_LENGTH {
            return Err(EncodeError::LengthOutOfRange(length));
        }
        Ok(Self {
            tlv_type,
            length: length as u16,
        })
    }

    pub const fn tlv_type(self) -> u8 {
        self.tlv_type
    }

    pub const fn length(self) -> u16 {
        self.length
    }

    const fn to_bytes(self) -> [u8; 2] {
        [
            (self.tlv_type << 1) | ((self.length >> 8) & 0x01) as u8,
            (self.length & 0xFF) as u8,
        ]
    }

    const fn from_bytes(bytes: [u8; 2]) -> Self {
        Self {
            tlv_type: bytes[0] >> 1,
            length: (((bytes[0] & 0x01) as u16) << 8) | bytes[1] as u16,
        }
    }

    pub fn encode(self, w: &mut Writer<'_>) -> Result<(), EncodeError> {
        w.write_all(&self.to_bytes())
    }

    /// Extracts type and length without checking the type against known TLVs.
    pub fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
        Ok(Self::from_bytes(r.read_array()?))
    }

    pub const fn value_len(self) -> usize {
        self.length as usize
    }

    pub const fn encoded_len(self) -> usize {
        TLV_HEADER_LEN + self.length as usize
    }
}

pub fn encode_header(tlv_type: u8, length: usize) -> Result<[u8; 2], EncodeError> {
    Ok(TlvHeader::new(tlv_type, length)?.to_bytes())
}

pub fn decode_header(bytes: &[u8]) -> Result<(u8, u16), DecodeError> {
    let header = TlvHeader::decode(&mut Reader::new(bytes))?;
    Ok((header.tlv_type, header.length))
}
