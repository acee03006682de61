use core::fmt;
use std::net::IpAddr;

use crate::encoding::{reader::Reader, writer::Writer};
use crate::error::ValueError;
use crate::tlv::identifier::{IdKind, IdValue};
use crate::tlv::{TlvType, TlvValue};
use crate::types::MacAddr;
use crate::{DecodeError, EncodeError};

/// How the chassis is identified.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ChassisIdSubtype {
    ChassisComponent = 1,
    InterfaceAlias = 2,
    PortComponent = 3,
    MacAddress = 4,
    NetworkAddress = 5,
    InterfaceName = 6,
    LocallyAssigned = 7,
}

impl ChassisIdSubtype {
    pub const fn from_u8(value: u8) -> Result<Self, DecodeError> {
        match value {
            1 => Ok(Self::ChassisComponent),
            2 => Ok(Self::InterfaceAlias),
            3 => Ok(Self::PortComponent),
            4 => Ok(Self::MacAddress),
            5 => Ok(Self::NetworkAddress),
            6 => Ok(Self::InterfaceName),
            7 => Ok(Self::LocallyAssigned),
            v => Err(DecodeError::InvalidSubtype(v)),
        }
    }

    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    pub(crate) const fn id_kind(self) -> IdKind {
        match self {
            Self::MacAddress => IdKind::Mac,
            Self::NetworkAddress => IdKind::Network,
            _ => IdKind::Text,
        }
    }
}

impl fmt::Display for ChassisIdSubtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ChassisComponent => "chassis component",
            Self::InterfaceAlias => "interface alias",
            Self::PortComponent => "port component",
            Self::MacAddress => "mac",
            Self::NetworkAddress => "network address",
            Self::InterfaceName => "interface name",
            Self::LocallyAssigned => "local",
        })
    }
}

/// Chassis ID TLV (type 1): identifies the device running the LLDP agent.
///
/// Mandatory, and always the first TLV of an LLDPDU.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChassisId {
    subtype: ChassisIdSubtype,
    id: IdValue,
}

impl ChassisId {
    pub fn new(subtype: ChassisIdSubtype, id: IdValue) -> Result<Self, ValueError> {
        id.validate(subtype.id_kind())?;
        Ok(Self { subtype, id })
    }

    pub const fn mac(mac: MacAddr) -> Self {
        Self {
            subtype: ChassisIdSubtype::MacAddress,
            id: IdValue::Mac(mac),
        }
    }

    pub const fn network_address(addr: IpAddr) -> Self {
        Self {
            subtype: ChassisIdSubtype::NetworkAddress,
            id: IdValue::Network(addr),
        }
    }

    /// Builds a chassis ID for any of the text-valued subtypes.
    pub fn text(subtype: ChassisIdSubtype, id: impl Into<String>) -> Result<Self, ValueError> {
        Self::new(subtype, IdValue::Text(id.into()))
    }

    pub const fn subtype(&self) -> ChassisIdSubtype {
        self.subtype
    }

    pub const fn id(&self) -> &IdValue {
        &self.id
    }
}

impl TlvValue for ChassisId {
    const TLV_TYPE: TlvType = TlvType::ChassisId;

    fn value_len(&self) -> usize {
        1 + self.id.len()
    }

    fn encode_value(&self, w: &mut Writer<'_>) -> Result<(), EncodeError> {
        w.write_u8(self.subtype.to_u8())?;
        self.id.encode(w)
    }

    fn decode_value(value: &[u8]) -> Result<Self, DecodeError> {
        let mut r = Reader::new(value);
        let subtype = ChassisIdSubtype::from_u8(r.read_u8()?)?;
        let id = IdValue::decode(subtype.id_kind(), &mut r)?;
        Ok(Self::new(subtype, id)?)
    }
}

impl fmt::Display for ChassisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id, self.subtype)
    }
}
