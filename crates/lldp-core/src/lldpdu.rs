use core::fmt;
use core::iter::FusedIterator;

use crate::encoding::header::TlvHeader;
use crate::encoding::{reader::Reader, writer::Writer};
use crate::error::{AppendError, ParseError};
use crate::tlv::{
    ChassisId, ManagementAddress, PortId, SystemCapabilities, SystemName, Tlv, TlvType, Ttl,
};
use crate::{DecodeError, EncodeError};

/// Largest serialized LLDPDU: the payload of one untagged Ethernet frame.
pub const MAX_LLDPDU_LEN: usize = 1500;

/// An ordered list of TLVs that is valid at every step of its construction.
///
/// [`Lldpdu::append`] is the only way in, and it enforces:
///
/// - Chassis ID, Port ID and TTL sit at positions 0, 1 and 2, once each;
/// - every other TLV, End Of LLDPDU included, follows those three;
/// - nothing follows End Of LLDPDU;
/// - the serialized size never exceeds [`MAX_LLDPDU_LEN`].
///
/// A rejected append leaves the LLDPDU unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Lldpdu {
    tlvs: Vec<Tlv>,
    #[cfg_attr(feature = "serde", serde(skip))]
    encoded_len: usize,
}

impl Lldpdu {
    pub const fn new() -> Self {
        Self {
            tlvs: Vec::new(),
            encoded_len: 0,
        }
    }

    pub fn append(&mut self, tlv: impl Into<Tlv>) -> Result<(), AppendError> {
        let tlv = tlv.into();
        let size = self.check_append(&tlv)?;
        self.tlvs.push(tlv);
        self.encoded_len = size;
        Ok(())
    }

    /// Returns the size the LLDPDU would have after appending `tlv`.
    fn check_append(&self, tlv: &Tlv) -> Result<usize, AppendError> {
        if self.is_terminated() {
            return Err(AppendError::AfterEnd);
        }

        let tlv_type = tlv.tlv_type();
        let position = self.tlvs.len();
        let slot = match tlv_type {
            TlvType::ChassisId => Some(0),
            TlvType::PortId => Some(1),
            TlvType::Ttl => Some(2),
            _ => None,
        };
        match slot {
            Some(_) if self.tlvs.iter().any(|t| t.tlv_type() == tlv_type) => {
                return Err(AppendError::Duplicate(tlv_type));
            }
            Some(slot) if slot != position => {
                return Err(AppendError::Misplaced { tlv_type, position });
            }
            None if position < 3 => return Err(AppendError::MandatoryMissing(tlv_type)),
            _ => {}
        }

        let size = self.encoded_len + tlv.encoded_len();
        if size > MAX_LLDPDU_LEN {
            return Err(AppendError::TooLarge {
                size,
                limit: MAX_LLDPDU_LEN,
            });
        }
        Ok(size)
    }

    fn is_terminated(&self) -> bool {
        matches!(self.tlvs.last(), Some(Tlv::EndOfLldpdu(_)))
    }

    /// True when the LLDPDU opens with Chassis ID, Port ID and TTL and is
    /// closed by End Of LLDPDU.
    pub fn is_complete(&self) -> bool {
        self.tlvs.len() >= 4
            && matches!(self.tlvs[0], Tlv::ChassisId(_))
            && matches!(self.tlvs[1], Tlv::PortId(_))
            && matches!(self.tlvs[2], Tlv::Ttl(_))
            && self.is_terminated()
    }

    pub fn len(&self) -> usize {
        self.tlvs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tlvs.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Tlv> {
        self.tlvs.get(index)
    }

    pub fn iter(&self) -> core::slice::Iter<'_, Tlv> {
        self.tlvs.iter()
    }

    pub fn tlvs(&self) -> &[Tlv] {
        &self.tlvs
    }

    pub fn chassis_id(&self) -> Option<&ChassisId> {
        match self.tlvs.first() {
            Some(Tlv::ChassisId(v)) => Some(v),
            _ => None,
        }
    }

    pub fn port_id(&self) -> Option<&PortId> {
        match self.tlvs.get(1) {
            Some(Tlv::PortId(v)) => Some(v),
            _ => None,
        }
    }

    pub fn ttl(&self) -> Option<Ttl> {
        match self.tlvs.get(2) {
            Some(Tlv::Ttl(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn system_name(&self) -> Option<&SystemName> {
        self.tlvs.iter().find_map(|tlv| match tlv {
            Tlv::SystemName(v) => Some(v),
            _ => None,
        })
    }

    pub fn system_capabilities(&self) -> Option<&SystemCapabilities> {
        self.tlvs.iter().find_map(|tlv| match tlv {
            Tlv::SystemCapabilities(v) => Some(v),
            _ => None,
        })
    }

    pub fn management_addresses(&self) -> impl Iterator<Item = &ManagementAddress> {
        self.tlvs.iter().filter_map(|tlv| match tlv {
            Tlv::ManagementAddress(v) => Some(v),
            _ => None,
        })
    }

    /// Serialized size, always at most [`MAX_LLDPDU_LEN`].
    pub const fn encoded_len(&self) -> usize {
        self.encoded_len
    }

    pub fn encode(&self, w: &mut Writer<'_>) -> Result<(), EncodeError> {
        for tlv in &self.tlvs {
            tlv.encode(w)?;
        }
        Ok(())
    }

    pub fn serialize(&self) -> Result<Vec<u8>, EncodeError> {
        let mut buf = vec![0u8; self.encoded_len];
        let mut w = Writer::new(&mut buf);
        self.encode(&mut w)?;
        Ok(buf)
    }

    /// Rebuilds an LLDPDU from a frame payload.
    ///
    /// Every decoded TLV goes through [`Lldpdu::append`]. Parsing stops at
    /// End Of LLDPDU, so trailing padding is ignored. Running out of input
    /// before End Of LLDPDU is not an error; check [`Lldpdu::is_complete`].
    pub fn parse(payload: &[u8]) -> Result<Self, ParseError> {
        let mut pdu = Self::new();
        for tlv in TlvIter::new(payload) {
            pdu.append(tlv?)?;
        }
        Ok(pdu)
    }
}

impl TryFrom<Vec<Tlv>> for Lldpdu {
    type Error = AppendError;

    fn try_from(tlvs: Vec<Tlv>) -> Result<Self, Self::Error> {
        let mut pdu = Self::new();
        for tlv in tlvs {
            pdu.append(tlv)?;
        }
        Ok(pdu)
    }
}

impl<'a> IntoIterator for &'a Lldpdu {
    type Item = &'a Tlv;
    type IntoIter = core::slice::Iter<'a, Tlv>;

    fn into_iter(self) -> Self::IntoIter {
        self.tlvs.iter()
    }
}

impl fmt::Display for Lldpdu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for tlv in self.tlvs.iter().filter(|t| !matches!(t, Tlv::EndOfLldpdu(_))) {
            if !first {
                f.write_str("\n")?;
            }
            write!(f, "{tlv}")?;
            first = false;
        }
        Ok(())
    }
}

/// Lazily decodes the TLVs of an LLDPDU payload.
///
/// Yields each TLV in wire order and stops after End Of LLDPDU, when the
/// input runs out, or after the first error. The type code is checked before
/// the declared length, so an unknown type is reported as such even when its
/// value is truncated.
#[derive(Debug, Clone)]
pub struct TlvIter<'a> {
    r: Reader<'a>,
    done: bool,
}

impl<'a> TlvIter<'a> {
    pub const fn new(payload: &'a [u8]) -> Self {
        Self {
            r: Reader::new(payload),
            done: false,
        }
    }

    /// Offset of the next TLV within the payload.
    pub const fn position(&self) -> usize {
        self.r.position()
    }

    fn decode_next(&mut self) -> Result<Tlv, DecodeError> {
        let mut peek = self.r;
        let header = TlvHeader::decode(&mut peek)?;
        TlvType::from_u8(header.tlv_type())?;
        let bytes = self.r.read_exact(header.encoded_len())?;
        Tlv::decode(bytes)
    }
}

impl Iterator for TlvIter<'_> {
    type Item = Result<Tlv, DecodeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.r.is_empty() {
            self.done = true;
            return None;
        }
        let item = self.decode_next();
        self.done = matches!(item, Ok(Tlv::EndOfLldpdu(_)) | Err(_));
        Some(item)
    }
}

impl FusedIterator for TlvIter<'_> {}
