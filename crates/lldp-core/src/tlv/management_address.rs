use core::fmt;
use std::net::IpAddr;

use crate::encoding::{reader::Reader, writer::Writer};
use crate::error::ValueError;
use crate::tlv::{TlvType, TlvValue};
use crate::types::address_family::{address_from_octets, address_octets};
use crate::types::AddressFamily;
use crate::{DecodeError, EncodeError};

/// Longest object identifier a Management Address TLV may carry.
pub const MAX_OID_LEN: usize = 128;

/// How the interface number of a management address is assigned.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum InterfaceNumbering {
    Unknown = 1,
    IfIndex = 2,
    SystemPortNumber = 3,
}

impl InterfaceNumbering {
    pub const fn from_u8(value: u8) -> Result<Self, DecodeError> {
        match value {
            1 => Ok(Self::Unknown),
            2 => Ok(Self::IfIndex),
            3 => Ok(Self::SystemPortNumber),
            v => Err(DecodeError::InvalidSubtype(v)),
        }
    }

    pub const fn to_u8(self) -> u8 {
        self as u8
    }
}

impl fmt::Display for InterfaceNumbering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Unknown => "unknown",
            Self::IfIndex => "ifIndex",
            Self::SystemPortNumber => "system port number",
        })
    }
}

/// Management Address TLV (type 8).
///
/// Value layout:
///
/// ```text
/// +-----+--------+---------+-----------+--------------+-----+-------+
/// | len | family | address | numbering | if number BE | len |  OID  |
/// |  1  |   1    |  4/16   |     1     |      4       |  1  | 0-128 |
/// +-----+--------+---------+-----------+--------------+-----+-------+
/// ```
///
/// The first length counts the family byte and the address.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ManagementAddress {
    address: IpAddr,
    numbering: InterfaceNumbering,
    interface_number: u32,
    oid: Vec<u8>,
}

impl ManagementAddress {
    pub fn new(
        address: IpAddr,
        numbering: InterfaceNumbering,
        interface_number: u32,
        oid: Vec<u8>,
    ) -> Result<Self, ValueError> {
        if oid.len() > MAX_OID_LEN {
            return Err(ValueError::TooLong {
                max: MAX_OID_LEN,
                actual: oid.len(),
            });
        }
        Ok(Self {
            address,
            numbering,
            interface_number,
            oid,
        })
    }

    pub const fn address(&self) -> IpAddr {
        self.address
    }

    pub const fn family(&self) -> AddressFamily {
        AddressFamily::of(&self.address)
    }

    pub const fn numbering(&self) -> InterfaceNumbering {
        self.numbering
    }

    pub const fn interface_number(&self) -> u32 {
        self.interface_number
    }

    pub fn oid(&self) -> &[u8] {
        &self.oid
    }

    fn address_string_len(&self) -> usize {
        1 + self.family().address_len()
    }
}

impl TlvValue for ManagementAddress {
    const TLV_TYPE: TlvType = TlvType::ManagementAddress;

    fn value_len(&self) -> usize {
        1 + self.address_string_len() + 1 + 4 + 1 + self.oid.len()
    }

    fn encode_value(&self, w: &mut Writer<'_>) -> Result<(), EncodeError> {
        w.write_u8(self.address_string_len() as u8)?;
        w.write_u8(self.family().to_u8())?;
        w.write_all(&address_octets(&self.address))?;
        w.write_u8(self.numbering.to_u8())?;
        w.write_be_u32(self.interface_number)?;
        w.write_len_prefixed(&self.oid)
    }

    fn decode_value(value: &[u8]) -> Result<Self, DecodeError> {
        let mut r = Reader::new(value);

        let mut addr = Reader::new(r.read_len_prefixed()?);
        if addr.is_empty() {
            return Err(DecodeError::InvalidLength);
        }
        let family = AddressFamily::from_u8(addr.read_u8()?)?;
        let address = address_from_octets(family, addr.read_rest())?;

        let numbering = InterfaceNumbering::from_u8(r.read_u8()?)?;
        let interface_number = r.read_be_u32()?;

        let oid = r.read_len_prefixed()?.to_vec();
        r.finish()?;

        Ok(Self::new(address, numbering, interface_number, oid)?)
    }
}

impl fmt::Display for ManagementAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} {})",
            self.address, self.numbering, self.interface_number
        )?;
        if !self.oid.is_empty() {
            f.write_str(" oid ")?;
            for byte in &self.oid {
                write!(f, "{byte:02x}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{InterfaceNumbering, ManagementAddress};
    use crate::error::ValueError;
    use crate::tlv::TlvValue;
    use crate::DecodeError;
    use proptest::prelude::*;
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

    fn v4() -> ManagementAddress {
        ManagementAddress::new(
            "192.0.2.1".parse().unwrap(),
            InterfaceNumbering::IfIndex,
            3,
            Vec::new(),
        )
        .unwrap()
    }

    #[test]
    fn ipv4_wire_layout() {
        assert_eq!(
            v4().to_bytes().unwrap(),
            vec![
                0x10, 0x0C, // header
                0x05, 0x01, 192, 0, 2, 1, // address string
                0x02, 0x00, 0x00, 0x00, 0x03, // ifIndex 3
                0x00, // no oid
            ]
        );
    }

    #[test]
    fn length_is_derived_from_payload() {
        assert_eq!(v4().value_len(), 12);
        let v6 = ManagementAddress::new(
            IpAddr::V6(Ipv6Addr::LOCALHOST),
            InterfaceNumbering::Unknown,
            0,
            vec![0x2B, 0x06, 0x01],
        )
        .unwrap();
        assert_eq!(v6.value_len(), 27);
        let bytes = v6.to_bytes().unwrap();
        assert_eq!(&bytes[..4], &[0x10, 27, 17, 0x02]);
        assert_eq!(ManagementAddress::decode(&bytes).unwrap(), v6);
    }

    #[test]
    fn oid_limit() {
        let addr = IpAddr::V4(Ipv4Addr::LOCALHOST);
        assert!(ManagementAddress::new(addr, InterfaceNumbering::Unknown, 0, vec![1; 128]).is_ok());
        assert_eq!(
            ManagementAddress::new(addr, InterfaceNumbering::Unknown, 0, vec![1; 129]).unwrap_err(),
            ValueError::TooLong {
                max: 128,
                actual: 129
            }
        );
    }

    #[test]
    fn oid_length_past_end_is_truncation() {
        let mut bytes = v4().to_bytes().unwrap();
        let last = bytes.len() - 1;
        bytes[last] = 4;
        bytes.extend_from_slice(&[1, 2]);
        bytes[1] += 2;
        assert_eq!(
            ManagementAddress::decode(&bytes).unwrap_err(),
            DecodeError::UnexpectedEof
        );
    }

    #[test]
    fn address_length_past_end_is_truncation() {
        assert_eq!(
            ManagementAddress::decode(&[0x10, 0x03, 0x11, 0x02, 0x00]).unwrap_err(),
            DecodeError::UnexpectedEof
        );
    }

    #[test]
    fn address_length_must_match_family() {
        let bytes = [
            0x10, 0x0B, 0x04, 0x01, 192, 0, 2, 0x02, 0, 0, 0, 3, 0x00,
        ];
        assert_eq!(
            ManagementAddress::decode(&bytes).unwrap_err(),
            DecodeError::InvalidLength
        );
    }

    #[test]
    fn trailing_bytes_after_oid_are_rejected() {
        let mut bytes = v4().to_bytes().unwrap();
        bytes.push(0xAA);
        bytes[1] += 1;
        assert_eq!(
            ManagementAddress::decode(&bytes).unwrap_err(),
            DecodeError::InvalidLength
        );
    }

    #[test]
    fn bad_numbering_is_invalid_subtype() {
        let mut bytes = v4().to_bytes().unwrap();
        bytes[8] = 4;
        assert_eq!(
            ManagementAddress::decode(&bytes).unwrap_err(),
            DecodeError::InvalidSubtype(4)
        );
    }

    proptest! {
        #[test]
        fn roundtrip_any_ipv4(octets in any::<[u8; 4]>(), ifn in any::<u32>(),
                              oid in proptest::collection::vec(any::<u8>(), 0..=128)) {
            let tlv = ManagementAddress::new(
                IpAddr::from(octets),
                InterfaceNumbering::SystemPortNumber,
                ifn,
                oid,
            )
            .unwrap();
            let bytes = tlv.to_bytes().unwrap();
            prop_assert_eq!(bytes.len(), tlv.encoded_len());
            prop_assert_eq!(ManagementAddress::decode(&bytes).unwrap(), tlv);
        }
    }
}
