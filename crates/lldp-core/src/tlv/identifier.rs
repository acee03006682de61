use core::fmt;
use std::net::IpAddr;

use crate::encoding::{reader::Reader, writer::Writer};
use crate::error::ValueError;
use crate::types::address_family::{address_from_octets, address_octets};
use crate::types::{AddressFamily, MacAddr};
use crate::{DecodeError, EncodeError};

/// Longest identifier string a Chassis ID or Port ID may carry.
pub(crate) const MAX_ID_LEN: usize = 255;

/// The identifier carried by a Chassis ID or Port ID TLV.
///
/// `Network` is written with a one-byte address family prefix (1 = IPv4,
/// 2 = IPv6) ahead of the packed address.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum IdValue {
    Mac(MacAddr),
    Network(IpAddr),
    Text(String),
}

/// Which [`IdValue`] shape a subtype requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum IdKind {
    Mac,
    Network,
    Text,
}

impl IdValue {
    pub(crate) const fn kind(&self) -> IdKind {
        match self {
            Self::Mac(_) => IdKind::Mac,
            Self::Network(_) => IdKind::Network,
            Self::Text(_) => IdKind::Text,
        }
    }

    pub(crate) fn validate(&self, kind: IdKind) -> Result<(), ValueError> {
        if self.kind() != kind {
            return Err(ValueError::SubtypeMismatch);
        }
        if let Self::Text(text) = self {
            if text.is_empty() {
                return Err(ValueError::Empty);
            }
            if text.len() > MAX_ID_LEN {
                return Err(ValueError::TooLong {
                    max: MAX_ID_LEN,
                    actual: text.len(),
                });
            }
        }
        Ok(())
    }

    pub(crate) fn len(&self) -> usize {
        match self {
            Self::Mac(_) => MacAddr::LEN,
            Self::Network(addr) => 1 + AddressFamily::of(addr).address_len(),
            Self::Text(text) => text.len(),
        }
    }

    pub(crate) fn encode(&self, w: &mut Writer<'_>) -> Result<(), EncodeError> {
        match self {
            Self::Mac(mac) => w.write_mac(*mac),
            Self::Network(addr) => {
                w.write_u8(AddressFamily::of(addr).to_u8())?;
                w.write_all(&address_octets(addr))
            }
            Self::Text(text) => w.write_all(text.as_bytes()),
        }
    }

    /// Consumes the rest of `r` as an identifier of the given shape.
    pub(crate) fn decode(kind: IdKind, r: &mut Reader<'_>) -> Result<Self, DecodeError> {
        let value = match kind {
            IdKind::Mac => Self::Mac(r.read_mac()?),
            IdKind::Network => {
                let family = AddressFamily::from_u8(r.read_u8()?)?;
                let octets = r.read_exact(family.address_len())?;
                Self::Network(address_from_octets(family, octets)?)
            }
            IdKind::Text => {
                let text = core::str::from_utf8(r.read_rest())
                    .map_err(|_| DecodeError::InvalidUtf8)?;
                Self::Text(text.to_string())
            }
        };
        r.finish()?;
        Ok(value)
    }
}

impl fmt::Display for IdValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mac(mac) => write!(f, "{mac}"),
            Self::Network(addr) => write!(f, "{addr}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}
