use core::fmt;

use crate::encoding::writer::Writer;
use crate::error::ValueError;
use crate::tlv::{TlvType, TlvValue};
use crate::{DecodeError, EncodeError};

/// Longest string a Port Description, System Name or System Description may
/// carry.
pub const MAX_TEXT_LEN: usize = 255;

fn check_text(text: &str) -> Result<(), ValueError> {
    if text.len() > MAX_TEXT_LEN {
        return Err(ValueError::TooLong {
            max: MAX_TEXT_LEN,
            actual: text.len(),
        });
    }
    Ok(())
}

macro_rules! text_tlv {
    ($(#[$meta:meta])* $name:ident, $tlv_type:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Default)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize))]
        pub struct $name(String);

        impl $name {
            pub fn new(text: impl Into<String>) -> Result<Self, ValueError> {
                let text = text.into();
                check_text(&text)?;
                Ok(Self(text))
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl TlvValue for $name {
            const TLV_TYPE: TlvType = $tlv_type;

            fn value_len(&self) -> usize {
                self.0.len()
            }

            fn encode_value(&self, w: &mut Writer<'_>) -> Result<(), EncodeError> {
                w.write_all(self.0.as_bytes())
            }

            fn decode_value(value: &[u8]) -> Result<Self, DecodeError> {
                let text = core::str::from_utf8(value).map_err(|_| DecodeError::InvalidUtf8)?;
                Ok(Self::new(text)?)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

text_tlv!(
    /// Port Description TLV (type 4).
    PortDescription,
    TlvType::PortDescription
);
text_tlv!(
    /// System Name TLV (type 5).
    SystemName,
    TlvType::SystemName
);
text_tlv!(
    /// System Description TLV (type 6), usually the OS name and version.
    SystemDescription,
    TlvType::SystemDescription
);

#[cfg(test)]
mod tests {
    use super::{PortDescription, SystemDescription, SystemName};
    use crate::error::ValueError;
    use crate::tlv::TlvValue;
    use crate::DecodeError;

    #[test]
    fn system_name_wire_layout() {
        let tlv = SystemName::new("sw1").unwrap();
        assert_eq!(tlv.to_bytes().unwrap(), vec![0x0A, 0x03, b's', b'w', b'1']);
        assert_eq!(SystemName::decode(&[0x0A, 0x03, b's', b'w', b'1']).unwrap(), tlv);
    }

    #[test]
    fn empty_text_is_allowed() {
        let tlv = PortDescription::new("").unwrap();
        assert_eq!(tlv.to_bytes().unwrap(), vec![0x08, 0x00]);
        assert_eq!(PortDescription::decode(&[0x08, 0x00]).unwrap().as_str(), "");
    }

    #[test]
    fn max_length_text_uses_full_byte() {
        let tlv = SystemDescription::new("d".repeat(255)).unwrap();
        let bytes = tlv.to_bytes().unwrap();
        assert_eq!(&bytes[..2], &[0x0C, 0xFF]);
        assert_eq!(
            SystemDescription::new("d".repeat(256)).unwrap_err(),
            ValueError::TooLong {
                max: 255,
                actual: 256
            }
        );
    }

    #[test]
    fn overlong_text_on_the_wire_is_rejected() {
        let mut bytes = vec![0x0D, 0x00];
        bytes.extend(std::iter::repeat(b'a').take(256));
        assert_eq!(
            SystemDescription::decode(&bytes).unwrap_err(),
            DecodeError::Value(ValueError::TooLong {
                max: 255,
                actual: 256
            })
        );
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        assert_eq!(
            SystemName::decode(&[0x0A, 0x02, 0xC3, 0x28]).unwrap_err(),
            DecodeError::InvalidUtf8
        );
    }
}
