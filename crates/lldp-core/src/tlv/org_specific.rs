use core::fmt;

use crate::encoding::{reader::Reader, writer::Writer};
use crate::error::ValueError;
use crate::tlv::{TlvType, TlvValue};
use crate::{DecodeError, EncodeError};

/// Largest information string that fits after the OUI and subtype.
pub const MAX_ORG_INFO_LEN: usize = 507;

/// Organizationally Specific TLV (type 127).
///
/// The OUI and subtype are carried as-is; the information string is opaque.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct OrganizationallySpecific {
    oui: [u8; 3],
    subtype: u8,
    info: Vec<u8>,
}

impl OrganizationallySpecific {
    pub fn new(oui: [u8; 3], subtype: u8, info: Vec<u8>) -> Result<Self, ValueError> {
        if info.len() > MAX_ORG_INFO_LEN {
            return Err(ValueError::TooLong {
                max: MAX_ORG_INFO_LEN,
                actual: info.len(),
            });
        }
        Ok(Self { oui, subtype, info })
    }

    pub const fn oui(&self) -> [u8; 3] {
        self.oui
    }

    pub const fn subtype(&self) -> u8 {
        self.subtype
    }

    pub fn info(&self) -> &[u8] {
        &self.info
    }
}

impl TlvValue for OrganizationallySpecific {
    const TLV_TYPE: TlvType = TlvType::OrganizationallySpecific;

    fn value_len(&self) -> usize {
        4 + self.info.len()
    }

    fn encode_value(&self, w: &mut Writer<'_>) -> Result<(), EncodeError> {
        w.write_all(&self.oui)?;
        w.write_u8(self.subtype)?;
        w.write_all(&self.info)
    }

    fn decode_value(value: &[u8]) -> Result<Self, DecodeError> {
        let mut r = Reader::new(value);
        let oui = r.read_array()?;
        let subtype = r.read_u8()?;
        Ok(Self::new(oui, subtype, r.read_rest().to_vec())?)
    }
}

impl fmt::Display for OrganizationallySpecific {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "oui {:02x}-{:02x}-{:02x} subtype {} ({} bytes)",
            self.oui[0],
            self.oui[1],
            self.oui[2],
            self.subtype,
            self.info.len()
        )
    }
}
