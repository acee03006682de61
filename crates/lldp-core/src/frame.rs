use crate::encoding::{reader::Reader, writer::Writer};
use crate::lldpdu::{Lldpdu, MAX_LLDPDU_LEN};
use crate::types::MacAddr;
use crate::{DecodeError, EncodeError};

pub const LLDP_ETHERTYPE: u16 = 0x88CC;

/// Nearest bridge: not forwarded by any bridge. The usual destination.
pub const LLDP_MULTICAST_NEAREST_BRIDGE: MacAddr = MacAddr([0x01, 0x80, 0xC2, 0x00, 0x00, 0x0E]);
/// Nearest non-TPMR bridge.
pub const LLDP_MULTICAST_NEAREST_NON_TPMR_BRIDGE: MacAddr =
    MacAddr([0x01, 0x80, 0xC2, 0x00, 0x00, 0x03]);
/// Nearest customer bridge.
pub const LLDP_MULTICAST_NEAREST_CUSTOMER_BRIDGE: MacAddr =
    MacAddr([0x01, 0x80, 0xC2, 0x00, 0x00, 0x00]);

pub const LLDP_MULTICAST_ADDRESSES: [MacAddr; 3] = [
    LLDP_MULTICAST_NEAREST_BRIDGE,
    LLDP_MULTICAST_NEAREST_NON_TPMR_BRIDGE,
    LLDP_MULTICAST_NEAREST_CUSTOMER_BRIDGE,
];

pub const ETHERNET_HEADER_LEN: usize = 14;
/// Largest untagged frame carrying an LLDPDU, without FCS.
pub const MAX_FRAME_LEN: usize = ETHERNET_HEADER_LEN + MAX_LLDPDU_LEN;

/// Untagged Ethernet II header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EthernetHeader {
    pub destination: MacAddr,
    pub source: MacAddr,
    pub ethertype: u16,
}

impl EthernetHeader {
    pub const fn lldp(destination: MacAddr, source: MacAddr) -> Self {
        Self {
            destination,
            source,
            ethertype: LLDP_ETHERTYPE,
        }
    }

    pub fn encode(&self, w: &mut Writer<'_>) -> Result<(), EncodeError> {
        w.write_mac(self.destination)?;
        w.write_mac(self.source)?;
        w.write_be_u16(self.ethertype)
    }

    pub fn decode(r: &mut Reader<'_>) -> Result<Self, DecodeError> {
        Ok(Self {
            destination: r.read_mac()?,
            source: r.read_mac()?,
            ethertype: r.read_be_u16()?,
        })
    }
}

pub fn is_lldp_destination(mac: MacAddr) -> bool {
    LLDP_MULTICAST_ADDRESSES.contains(&mac)
}

/// Returns the LLDPDU payload of `frame` if it is an LLDP frame that did not
/// come from `local_mac`.
///
/// Anything else, runts included, yields `None`.
pub fn classify(frame: &[u8], local_mac: MacAddr) -> Option<&[u8]> {
    let mut r = Reader::new(frame);
    let header = EthernetHeader::decode(&mut r).ok()?;
    if header.ethertype != LLDP_ETHERTYPE
        || !is_lldp_destination(header.destination)
        || header.source == local_mac
    {
        return None;
    }
    Some(r.read_rest())
}

pub fn encode_frame(
    w: &mut Writer<'_>,
    destination: MacAddr,
    source: MacAddr,
    lldpdu: &Lldpdu,
) -> Result<(), EncodeError> {
    if !is_lldp_destination(destination) {
        return Err(EncodeError::InvalidDestination);
    }
    EthernetHeader::lldp(destination, source).encode(w)?;
    lldpdu.encode(w)
}

pub fn build_frame(
    destination: MacAddr,
    source: MacAddr,
    lldpdu: &Lldpdu,
) -> Result<Vec<u8>, EncodeError> {
    let mut buf = vec![0u8; ETHERNET_HEADER_LEN + lldpdu.encoded_len()];
    let mut w = Writer::new(&mut buf);
    encode_frame(&mut w, destination, source, lldpdu)?;
    Ok(buf)
}
