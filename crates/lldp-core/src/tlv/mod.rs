//! LLDP TLV variants and the type-code dispatcher.
//!
//! Each variant implements [`TlvValue`], which supplies the shared header
//! handling: `encode` writes the 2-byte header followed by the value, and
//! `decode` accepts exactly one TLV (header + value, nothing after it).

mod chassis_id;
mod end_of_lldpdu;
mod identifier;
mod management_address;
mod org_specific;
mod port_id;
mod system_capabilities;
mod text;
mod ttl;

use core::fmt;

use crate::encoding::header::{TlvHeader, TLV_HEADER_LEN};
use crate::encoding::{reader::Reader, writer::Writer};
use crate::{DecodeError, EncodeError};

pub use chassis_id::{ChassisId, ChassisIdSubtype};
pub use end_of_lldpdu::EndOfLldpdu;
pub use identifier::IdValue;
pub use management_address::{InterfaceNumbering, ManagementAddress, MAX_OID_LEN};
pub use org_specific::{OrganizationallySpecific, MAX_ORG_INFO_LEN};
pub use port_id::{PortId, PortIdSubtype};
pub use system_capabilities::SystemCapabilities;
pub use text::{PortDescription, SystemDescription, SystemName, MAX_TEXT_LEN};
pub use ttl::Ttl;

#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TlvType {
    EndOfLldpdu = 0,
    ChassisId = 1,
    PortId = 2,
    Ttl = 3,
    PortDescription = 4,
    SystemName = 5,
    SystemDescription = 6,
    SystemCapabilities = 7,
    ManagementAddress = 8,
    OrganizationallySpecific = 127,
}

impl TlvType {
    /// Reserved codes 9..=126 are rejected like any other unknown code.
    pub const fn from_u8(value: u8) -> Result<Self, DecodeError> {
        match value {
            0 => Ok(Self::EndOfLldpdu),
            1 => Ok(Self::ChassisId),
            2 => Ok(Self::PortId),
            3 => Ok(Self::Ttl),
            4 => Ok(Self::PortDescription),
            5 => Ok(Self::SystemName),
            6 => Ok(Self::SystemDescription),
            7 => Ok(Self::SystemCapabilities),
            8 => Ok(Self::ManagementAddress),
            127 => Ok(Self::OrganizationallySpecific),
            v => Err(DecodeError::UnknownTlvType(v)),
        }
    }

    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    /// Chassis ID, Port ID and TTL must open every LLDPDU.
    pub const fn is_mandatory(self) -> bool {
        matches!(self, Self::ChassisId | Self::PortId | Self::Ttl)
    }
}

impl fmt::Display for TlvType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::EndOfLldpdu => "end of lldpdu",
            Self::ChassisId => "chassis id",
            Self::PortId => "port id",
            Self::Ttl => "ttl",
            Self::PortDescription => "port description",
            Self::SystemName => "system name",
            Self::SystemDescription => "system description",
            Self::SystemCapabilities => "system capabilities",
            Self::ManagementAddress => "management address",
            Self::OrganizationallySpecific => "organizationally specific",
        })
    }
}

/// Encode/decode contract shared by every TLV variant.
///
/// Implementors only describe their value payload; the header is derived from
/// [`TlvValue::TLV_TYPE`] and [`TlvValue::value_len`], so the encoded length
/// can never disagree with the payload.
pub trait TlvValue: Sized {
    const TLV_TYPE: TlvType;

    fn value_len(&self) -> usize;

    fn encode_value(&self, w: &mut Writer<'_>) -> Result<(), EncodeError>;

    /// Decodes a value payload, without the header.
    fn decode_value(value: &[u8]) -> Result<Self, DecodeError>;

    fn encoded_len(&self) -> usize {
        TLV_HEADER_LEN + self.value_len()
    }

    fn encode(&self, w: &mut Writer<'_>) -> Result<(), EncodeError> {
        w.write_tlv(Self::TLV_TYPE.to_u8(), self.value_len(), |w| self.encode_value(w))
    }

    fn to_bytes(&self) -> Result<Vec<u8>, EncodeError> {
        let mut buf = vec![0u8; self.encoded_len()];
        let mut w = Writer::new(&mut buf);
        self.encode(&mut w)?;
        Ok(buf)
    }

    /// Decodes a slice holding exactly one TLV of this type.
    fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        Self::decode_value(split_tlv(bytes, Self::TLV_TYPE)?)
    }
}

/// Checks the header of a single-TLV slice and returns its value payload.
fn split_tlv(bytes: &[u8], expected: TlvType) -> Result<&[u8], DecodeError> {
    let mut r = Reader::new(bytes);
    let header = TlvHeader::decode(&mut r)?;
    if header.tlv_type() != expected.to_u8() {
        return Err(DecodeError::UnexpectedTlvType {
            expected: expected.to_u8(),
            found: header.tlv_type(),
        });
    }
    let value = r.read_exact(header.value_len())?;
    r.finish()?;
    Ok(value)
}

/// One decoded TLV of any supported type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(
    feature = "serde",
    serde(tag = "type", content = "value", rename_all = "snake_case")
)]
pub enum Tlv {
    EndOfLldpdu(EndOfLldpdu),
    ChassisId(ChassisId),
    PortId(PortId),
    Ttl(Ttl),
    PortDescription(PortDescription),
    SystemName(SystemName),
    SystemDescription(SystemDescription),
    SystemCapabilities(SystemCapabilities),
    ManagementAddress(ManagementAddress),
    OrganizationallySpecific(OrganizationallySpecific),
}

macro_rules! dispatch {
    ($tlv:expr, $inner:ident => $body:expr) => {
        match $tlv {
            Tlv::EndOfLldpdu($inner) => $body,
            Tlv::ChassisId($inner) => $body,
            Tlv::PortId($inner) => $body,
            Tlv::Ttl($inner) => $body,
            Tlv::PortDescription($inner) => $body,
            Tlv::SystemName($inner) => $body,
            Tlv::SystemDescription($inner) => $body,
            Tlv::SystemCapabilities($inner) => $body,
            Tlv::ManagementAddress($inner) => $body,
            Tlv::OrganizationallySpecific($inner) => $body,
        }
    };
}

impl Tlv {
    pub const fn tlv_type(&self) -> TlvType {
        match self {
            Self::EndOfLldpdu(_) => TlvType::EndOfLldpdu,
            Self::ChassisId(_) => TlvType::ChassisId,
            Self::PortId(_) => TlvType::PortId,
            Self::Ttl(_) => TlvType::Ttl,
            Self::PortDescription(_) => TlvType::PortDescription,
            Self::SystemName(_) => TlvType::SystemName,
            Self::SystemDescription(_) => TlvType::SystemDescription,
            Self::SystemCapabilities(_) => TlvType::SystemCapabilities,
            Self::ManagementAddress(_) => TlvType::ManagementAddress,
            Self::OrganizationallySpecific(_) => TlvType::OrganizationallySpecific,
        }
    }

    pub fn value_len(&self) -> usize {
        dispatch!(self, v => v.value_len())
    }

    pub fn encoded_len(&self) -> usize {
        TLV_HEADER_LEN + self.value_len()
    }

    pub fn encode(&self, w: &mut Writer<'_>) -> Result<(), EncodeError> {
        dispatch!(self, v => v.encode(w))
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, EncodeError> {
        dispatch!(self, v => v.to_bytes())
    }

    /// Decodes a slice holding exactly one TLV, choosing the variant from the
    /// header's type code.
    pub fn decode(bytes: &[u8]) -> Result<Self, DecodeError> {
        let header = TlvHeader::decode(&mut Reader::new(bytes))?;
        Ok(match TlvType::from_u8(header.tlv_type())? {
            TlvType::EndOfLldpdu => Self::EndOfLldpdu(EndOfLldpdu::decode(bytes)?),
            TlvType::ChassisId => Self::ChassisId(ChassisId::decode(bytes)?),
            TlvType::PortId => Self::PortId(PortId::decode(bytes)?),
            TlvType::Ttl => Self::Ttl(Ttl::decode(bytes)?),
            TlvType::PortDescription => Self::PortDescription(PortDescription::decode(bytes)?),
            TlvType::SystemName => Self::SystemName(SystemName::decode(bytes)?),
            TlvType::SystemDescription => {
                Self::SystemDescription(SystemDescription::decode(bytes)?)
            }
            TlvType::SystemCapabilities => {
                Self::SystemCapabilities(SystemCapabilities::decode(bytes)?)
            }
            TlvType::ManagementAddress => {
                Self::ManagementAddress(ManagementAddress::decode(bytes)?)
            }
            TlvType::OrganizationallySpecific => {
                Self::OrganizationallySpecific(OrganizationallySpecific::decode(bytes)?)
            }
        })
    }
}

impl fmt::Display for Tlv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EndOfLldpdu(_) => f.write_str("End of LLDPDU"),
            Self::ChassisId(v) => write!(f, "Chassis ID: {v}"),
            Self::PortId(v) => write!(f, "Port ID: {v}"),
            Self::Ttl(v) => write!(f, "Time To Live: {v}"),
            Self::PortDescription(v) => write!(f, "Port description: {v}"),
            Self::SystemName(v) => write!(f, "System name: {v}"),
            Self::SystemDescription(v) => write!(f, "System description: {v}"),
            Self::SystemCapabilities(v) => write!(f, "System capabilities: {v}"),
            Self::ManagementAddress(v) => write!(f, "Management address: {v}"),
            Self::OrganizationallySpecific(v) => write!(f, "Organizationally specific: {v}"),
        }
    }
}

macro_rules! impl_from_variant {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Tlv {
                fn from(v: $variant) -> Self {
                    Self::$variant(v)
                }
            }
        )*
    };
}

impl_from_variant!(
    EndOfLldpdu,
    ChassisId,
    PortId,
    Ttl,
    PortDescription,
    SystemName,
    SystemDescription,
    SystemCapabilities,
    ManagementAddress,
    OrganizationallySpecific,
);
