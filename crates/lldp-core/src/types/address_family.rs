use std::net::IpAddr;

use crate::DecodeError;

/// IANA address family numbers understood by this codec.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AddressFamily {
    Ipv4 = 1,
    Ipv6 = 2,
}

impl AddressFamily {
    pub const fn from_u8(value: u8) -> Result<Self, DecodeError> {
        match value {
            1 => Ok(Self::Ipv4),
            2 => Ok(Self::Ipv6),
            v => Err(DecodeError::UnsupportedAddressFamily(v)),
        }
    }

    pub const fn to_u8(self) -> u8 {
        self as u8
    }

    pub const fn of(addr: &IpAddr) -> Self {
        match addr {
            IpAddr::V4(_) => Self::Ipv4,
            IpAddr::V6(_) => Self::Ipv6,
        }
    }

    pub const fn address_len(self) -> usize {
        match self {
            Self::Ipv4 => 4,
            Self::Ipv6 => 16,
        }
    }
}

pub(crate) fn address_octets(addr: &IpAddr) -> Vec<u8> {
    match addr {
        IpAddr::V4(v4) => v4.octets().to_vec(),
        IpAddr::V6(v6) => v6.octets().to_vec(),
    }
}

/// Builds an address from exactly `family.address_len()` bytes.
pub(crate) fn address_from_octets(
    family: AddressFamily,
    bytes: &[u8],
) -> Result<IpAddr, DecodeError> {
    match family {
        AddressFamily::Ipv4 => <[u8; 4]>::try_from(bytes)
            .map(IpAddr::from)
            .map_err(|_| DecodeError::InvalidLength),
        AddressFamily::Ipv6 => <[u8; 16]>::try_from(bytes)
            .map(IpAddr::from)
            .map_err(|_| DecodeError::InvalidLength),
    }
}
