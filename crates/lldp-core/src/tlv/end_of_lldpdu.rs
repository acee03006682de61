use crate::encoding::writer::Writer;
use crate::tlv::{TlvType, TlvValue};
use crate::{DecodeError, EncodeError};

/// End Of LLDPDU TLV (type 0): two zero bytes terminating the LLDPDU.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct EndOfLldpdu;

impl TlvValue for EndOfLldpdu {
    const TLV_TYPE: TlvType = TlvType::EndOfLldpdu;

    fn value_len(&self) -> usize {
        0
    }

    fn encode_value(&self, _w: &mut Writer<'_>) -> Result<(), EncodeError> {
        Ok(())
    }

    fn decode_value(value: &[u8]) -> Result<Self, DecodeError> {
        if value.is_empty() {
            Ok(Self)
        } else {
            Err(DecodeError::InvalidLength)
        }
    }
}
