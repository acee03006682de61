use core::fmt;

use crate::encoding::{reader::Reader, writer::Writer};
use crate::error::ValueError;
use crate::tlv::{TlvType, TlvValue};
use crate::types::Capabilities;
use crate::{DecodeError, EncodeError};

/// System Capabilities TLV (type 7).
///
/// `enabled` is always a subset of `supported`; both the constructor and the
/// decoder refuse anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SystemCapabilities {
    supported: Capabilities,
    enabled: Capabilities,
}

impl SystemCapabilities {
    pub fn new(supported: Capabilities, enabled: Capabilities) -> Result<Self, ValueError> {
        if !supported.contains(enabled) {
            return Err(ValueError::CapabilityNotSupported {
                supported: supported.bits(),
                enabled: enabled.bits(),
            });
        }
        Ok(Self { supported, enabled })
    }

    pub const fn supported(&self) -> Capabilities {
        self.supported
    }

    pub const fn enabled(&self) -> Capabilities {
        self.enabled
    }

    pub const fn supports(&self, caps: Capabilities) -> bool {
        self.supported.contains(caps)
    }

    pub const fn is_enabled(&self, caps: Capabilities) -> bool {
        self.enabled.contains(caps)
    }
}

impl TlvValue for SystemCapabilities {
    const TLV_TYPE: TlvType = TlvType::SystemCapabilities;

    fn value_len(&self) -> usize {
        4
    }

    fn encode_value(&self, w: &mut Writer<'_>) -> Result<(), EncodeError> {
        w.write_be_u16(self.supported.bits())?;
        w.write_be_u16(self.enabled.bits())
    }

    fn decode_value(value: &[u8]) -> Result<Self, DecodeError> {
        let mut r = Reader::new(value);
        let supported = Capabilities(r.read_be_u16()?);
        let enabled = Capabilities(r.read_be_u16()?);
        r.finish()?;
        Ok(Self::new(supported, enabled)?)
    }
}

impl fmt::Display for SystemCapabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "supported [{}], enabled [{}]", self.supported, self.enabled)
    }
}
