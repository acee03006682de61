use core::fmt;
use std::net::IpAddr;

use crate::encoding::{reader::Reader, writer::Writer};
use crate::error::ValueError;
use crate::tlv::identifier::{IdKind, IdValue};
use crate::tlv::{TlvType, TlvValue};
use crate::types::MacAddr;
use crate::{DecodeError, EncodeError};

/// How the sending port is identified.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PortIdSubtype {
    InterfaceAlias = 1,
    PortComponent = 2,
    MacAddress = 3,
    NetworkAddress = 4,
    InterfaceName = 5,
    AgentCircuitId = 6,
    LocallyAssigned = 7,
}

impl PortIdSubtype {
    pub const fn from_u8(value: u8) -> Result<Self, DecodeError> {
        match value {
            1 => Ok(Self::InterfaceAlias),
            2 => Ok(Self::PortComponent),
            3 => Ok(Self::MacAddress),
            4 => Ok(Self::NetworkAddress),
            5 => Ok(Self::InterfaceName),
            6 => Ok(Self::AgentCircuitId),
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

impl fmt::Display for PortIdSubtype {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::InterfaceAlias => "interface alias",
            Self::PortComponent => "port component",
            Self::MacAddress => "mac",
            Self::NetworkAddress => "network address",
            Self::InterfaceName => "interface name",
            Self::AgentCircuitId => "agent circuit id",
            Self::LocallyAssigned => "local",
        })
    }
}

/// Port ID TLV (type 2): identifies the port the LLDPDU was sent from.
///
/// Mandatory, and always the second TLV of an LLDPDU.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PortId {
    subtype: PortIdSubtype,
    id: IdValue,
}

impl PortId {
    pub fn new(subtype: PortIdSubtype, id: IdValue) -> Result<Self, ValueError> {
        id.validate(subtype.id_kind())?;
        Ok(Self { subtype, id })
    }

    pub const fn mac(mac: MacAddr) -> Self {
        Self {
            subtype: PortIdSubtype::MacAddress,
            id: IdValue::Mac(mac),
        }
    }

    pub const fn network_address(addr: IpAddr) -> Self {
        Self {
            subtype: PortIdSubtype::NetworkAddress,
            id: IdValue::Network(addr),
        }
    }

    pub fn interface_name(name: impl Into<String>) -> Result<Self, ValueError> {
        Self::text(PortIdSubtype::InterfaceName, name)
    }

    pub fn text(subtype: PortIdSubtype, id: impl Into<String>) -> Result<Self, ValueError> {
        Self::new(subtype, IdValue::Text(id.into()))
    }

    pub const fn subtype(&self) -> PortIdSubtype {
        self.subtype
    }

    pub const fn id(&self) -> &IdValue {
        &self.id
    }
}

impl TlvValue for PortId {
    const TLV_TYPE: TlvType = TlvType::PortId;

    fn value_len(&self) -> usize {
        1 + self.id.len()
    }

    fn encode_value(&self, w: &mut Writer<'_>) -> Result<(), EncodeError> {
        w.write_u8(self.subtype.to_u8())?;
        self.id.encode(w)
    }

    fn decode_value(value: &[u8]) -> Result<Self, DecodeError> {
        let mut r = Reader::new(value);
        let subtype = PortIdSubtype::from_u8(r.read_u8()?)?;
        let id = IdValue::decode(subtype.id_kind(), &mut r)?;
        Ok(Self::new(subtype, id)?)
    }
}

impl fmt::Display for PortId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.id, self.subtype)
    }
}

#[cfg(test)]
mod tests {
    use super::{PortId, PortIdSubtype};
    use crate::tlv::{IdValue, TlvValue};
    use crate::types::MacAddr;
    use crate::DecodeError;

    #[test]
    fn interface_name_matches_wire_layout() {
        let tlv = PortId::interface_name("eth0").unwrap();
        assert_eq!(
            tlv.to_bytes().unwrap(),
            vec![0x04, 0x05, 0x05, b'e', b't', b'h', b'0']
        );
        assert_eq!(tlv.subtype(), PortIdSubtype::InterfaceName);
    }

    #[test]
    fn mac_subtype_differs_from_chassis_numbering() {
        let mac = MacAddr([0x02, 0x04, 0xDF, 0x88, 0xA2, 0xB4]);
        let bytes = PortId::mac(mac).to_bytes().unwrap();
        assert_eq!(bytes[2], 3);
        let decoded = PortId::decode(&bytes).unwrap();
        assert_eq!(decoded.id(), &IdValue::Mac(mac));
    }

    #[test]
    fn ipv4_port_roundtrip() {
        let tlv = PortId::network_address("192.0.2.1".parse().unwrap());
        let bytes = tlv.to_bytes().unwrap();
        assert_eq!(bytes, vec![0x04, 0x06, 0x04, 0x01, 192, 0, 2, 1]);
        assert_eq!(PortId::decode(&bytes).unwrap(), tlv);
    }

    #[test]
    fn truncated_network_address_fails() {
        assert_eq!(
            PortId::decode(&[0x04, 0x04, 0x04, 0x01, 192, 0]).unwrap_err(),
            DecodeError::UnexpectedEof
        );
    }

    #[test]
    fn agent_circuit_id_is_text() {
        let tlv = PortId::text(PortIdSubtype::AgentCircuitId, "circuit-7").unwrap();
        let decoded = PortId::decode(&tlv.to_bytes().unwrap()).unwrap();
        assert_eq!(decoded.id(), &IdValue::Text("circuit-7".into()));
    }
}
