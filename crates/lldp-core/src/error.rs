use core::fmt;

use crate::tlv::TlvType;

/// Coarse classification of every failure the codec can report.
///
/// Callers that only need to decide between "drop this frame" and "fix the
/// value I am building" can match on this instead of the detailed variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Truncated input, bad lengths, bad UTF-8, unsupported address family.
    Malformed,
    /// A TLV type code outside the defined variant set.
    UnknownType,
    /// An LLDPDU ordering or uniqueness rule was broken.
    Ordering,
    /// Well-formed bytes carrying a contradictory value.
    Semantic,
    /// The LLDPDU would no longer fit in one frame.
    Size,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Malformed => f.write_str("malformed"),
            Self::UnknownType => f.write_str("unknown type"),
            Self::Ordering => f.write_str("ordering"),
            Self::Semantic => f.write_str("semantic"),
            Self::Size => f.write_str("size"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    BufferTooSmall,
    TypeOutOfRange(u8),
    LengthOutOfRange(usize),
    /// A one-byte length prefix cannot count `actual` bytes.
    FieldTooLong { max: usize, actual: usize },
    /// A TLV value wrote a different number of bytes than its header announced.
    LengthMismatch { announced: usize, written: usize },
    InvalidDestination,
}

impl fmt::Display for EncodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BufferTooSmall => f.write_str("buffer too small"),
            Self::TypeOutOfRange(t) => write!(f, "tlv type {t} does not fit in 7 bits"),
            Self::LengthOutOfRange(len) => write!(f, "tlv length {len} does not fit in 9 bits"),
            Self::FieldTooLong { max, actual } => {
                write!(f, "field is {actual} bytes, a length prefix holds at most {max}")
            }
            Self::LengthMismatch { announced, written } => {
                write!(f, "tlv value wrote {written} bytes, header announced {announced}")
            }
            Self::InvalidDestination => f.write_str("destination is not an LLDP multicast address"),
        }
    }
}

impl std::error::Error for EncodeError {}

/// A value rejected by a TLV constructor.
///
/// Decoders build their results through the same constructors, so a decoded
/// TLV that breaks one of these rules surfaces as [`DecodeError::Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueError {
    Empty,
    TooLong { max: usize, actual: usize },
    SubtypeMismatch,
    CapabilityNotSupported { supported: u16, enabled: u16 },
}

impl ValueError {
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::CapabilityNotSupported { .. } => ErrorCategory::Semantic,
            Self::Empty | Self::TooLong { .. } | Self::SubtypeMismatch => ErrorCategory::Malformed,
        }
    }
}

impl fmt::Display for ValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("value must not be empty"),
            Self::TooLong { max, actual } => {
                write!(f, "value is {actual} bytes, at most {max} allowed")
            }
            Self::SubtypeMismatch => f.write_str("value does not match subtype"),
            Self::CapabilityNotSupported { supported, enabled } => write!(
                f,
                "capability not supported: enabled 0x{enabled:04x} is not a subset of supported 0x{supported:04x}"
            ),
        }
    }
}

impl std::error::Error for ValueError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DecodeError {
    UnexpectedEof,
    InvalidLength,
    InvalidUtf8,
    InvalidSubtype(u8),
    UnsupportedAddressFamily(u8),
    UnexpectedTlvType { expected: u8, found: u8 },
    UnknownTlvType(u8),
    Value(ValueError),
}

impl DecodeError {
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownTlvType(_) => ErrorCategory::UnknownType,
            Self::Value(err) => err.category(),
            _ => ErrorCategory::Malformed,
        }
    }
}

impl From<ValueError> for DecodeError {
    fn from(err: ValueError) -> Self {
        Self::Value(err)
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnexpectedEof => f.write_str("unexpected end of input"),
            Self::InvalidLength => f.write_str("invalid length"),
            Self::InvalidUtf8 => f.write_str("invalid utf-8 in text field"),
            Self::InvalidSubtype(v) => write!(f, "invalid subtype {v}"),
            Self::UnsupportedAddressFamily(v) => write!(f, "unsupported address family {v}"),
            Self::UnexpectedTlvType { expected, found } => {
                write!(f, "unexpected tlv type {found}, expected {expected}")
            }
            Self::UnknownTlvType(v) => write!(f, "unknown tlv type {v}"),
            Self::Value(err) => fmt::Display::fmt(err, f),
        }
    }
}

impl std::error::Error for DecodeError {}

/// Why [`Lldpdu::append`](crate::Lldpdu::append) refused a TLV.
///
/// The LLDPDU is left untouched whenever one of these is returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppendError {
    Misplaced { tlv_type: TlvType, position: usize },
    Duplicate(TlvType),
    MandatoryMissing(TlvType),
    AfterEnd,
    TooLarge { size: usize, limit: usize },
}

impl AppendError {
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::TooLarge { .. } => ErrorCategory::Size,
            _ => ErrorCategory::Ordering,
        }
    }
}

impl fmt::Display for AppendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Misplaced { tlv_type, position } => {
                write!(f, "{tlv_type} tlv cannot be placed at position {position}")
            }
            Self::Duplicate(t) => write!(f, "duplicate {t} tlv"),
            Self::MandatoryMissing(t) => {
                write!(f, "{t} tlv requires chassis id, port id and ttl first")
            }
            Self::AfterEnd => f.write_str("lldpdu already terminated"),
            Self::TooLarge { size, limit } => {
                write!(f, "lldpdu would be {size} bytes, limit is {limit}")
            }
        }
    }
}

impl std::error::Error for AppendError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    Decode(DecodeError),
    Append(AppendError),
}

impl ParseError {
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::Decode(err) => err.category(),
            Self::Append(err) => err.category(),
        }
    }
}

impl From<DecodeError> for ParseError {
    fn from(err: DecodeError) -> Self {
        Self::Decode(err)
    }
}

impl From<AppendError> for ParseError {
    fn from(err: AppendError) -> Self {
        Self::Append(err)
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decode(err) => write!(f, "decode error: {err}"),
            Self::Append(err) => write!(f, "append error: {err}"),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Decode(err) => Some(err),
            Self::Append(err) => Some(err),
        }
    }
}
