//! LLDP (IEEE 802.1AB) TLV and LLDPDU encoding and decoding in pure Rust.
//!
//! `lldp-core` turns typed TLV values into wire bytes and back, assembles them
//! into LLDPDUs that are valid at every step of construction, and picks LLDP
//! frames out of raw Ethernet traffic. It performs no I/O and does no logging.
//!
//! # Feature flags
//!
//! - **`serde`** derives `Serialize` on TLV and LLDPDU types.
//!
//! # Example
//!
//! ```
//! use lldp_core::tlv::{ChassisId, EndOfLldpdu, PortId, Ttl};
//! use lldp_core::{Lldpdu, MacAddr};
//!
//! let mut pdu = Lldpdu::new();
//! pdu.append(ChassisId::mac(MacAddr([0x02, 0x04, 0xdf, 0x88, 0xa2, 0xb4]))).unwrap();
//! pdu.append(PortId::interface_name("eth0").unwrap()).unwrap();
//! pdu.append(Ttl::new(60)).unwrap();
//! pdu.append(EndOfLldpdu).unwrap();
//!
//! let bytes = pdu.serialize().unwrap();
//! assert_eq!(Lldpdu::parse(&bytes).unwrap(), pdu);
//! ```

/// Byte cursors and the shared TLV header codec.
pub mod encoding;
/// Error types and their coarse categories.
pub mod error;
/// Ethernet envelope: LLDP frame classification and construction.
pub mod frame;
/// The LLDPDU container and its lazy TLV iterator.
pub mod lldpdu;
/// TLV variants.
pub mod tlv;
/// MAC addresses, address families and capability bitmaps.
pub mod types;

pub use error::{AppendError, DecodeError, EncodeError, ErrorCategory, ParseError, ValueError};
pub use lldpdu::{Lldpdu, TlvIter, MAX_LLDPDU_LEN};
pub use tlv::{Tlv, TlvType, TlvValue};
pub use types::{AddressFamily, Capabilities, MacAddr};
