use core::fmt;
use core::str::FromStr;

/// A 48-bit IEEE 802 MAC address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct MacAddr(pub [u8; 6]);

impl MacAddr {
    pub const LEN: usize = 6;

    pub const fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    pub const fn octets(self) -> [u8; 6] {
        self.0
    }

    pub const fn is_multicast(self) -> bool {
        self.0[0] & 0x01 != 0
    }
}

impl From<[u8; 6]> for MacAddr {
    fn from(octets: [u8; 6]) -> Self {
        Self(octets)
    }
}

impl fmt::Display for MacAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c, d, e, g] = self.0;
        write!(f, "{a:02x}:{b:02x}:{c:02x}:{d:02x}:{e:02x}:{g:02x}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMacAddrError(String);

impl fmt::Display for ParseMacAddrError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid mac address '{}'", self.0)
    }
}

impl std::error::Error for ParseMacAddrError {}

impl FromStr for MacAddr {
    type Err = ParseMacAddrError;

    /// Accepts `02:04:df:88:a2:b4` and `02-04-DF-88-A2-B4`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseMacAddrError(s.to_string());
        let mut octets = [0u8; 6];
        let mut parts = s.split(&[':', '-'][..]);
        for octet in &mut octets {
            let part = parts.next().ok_or_else(err)?;
            if part.len() != 2 {
                return Err(err());
            }
            *octet = u8::from_str_radix(part, 16).map_err(|_| err())?;
        }
        if parts.next().is_some() {
            return Err(err());
        }
        Ok(Self(octets))
    }
}

#[cfg(test)]
mod tests {
    use super::MacAddr;

    #[test]
    fn display_and_parse_agree() {
        let mac: MacAddr = "02:04:df:88:a2:b4".parse().unwrap();
        assert_eq!(mac.octets(), [0x02, 0x04, 0xDF, 0x88, 0xA2, 0xB4]);
        assert_eq!(mac.to_string(), "02:04:df:88:a2:b4");
        assert_eq!("02-04-DF-88-A2-B4".parse::<MacAddr>().unwrap(), mac);
    }

    #[test]
    fn rejects_bad_text() {
        assert!("02:04:df:88:a2".parse::<MacAddr>().is_err());
        assert!("02:04:df:88:a2:b4:00".parse::<MacAddr>().is_err());
        assert!("02:04:df:88:a2:zz".parse::<MacAddr>().is_err());
        assert!("2:04:df:88:a2:b4".parse::<MacAddr>().is_err());
    }

    #[test]
    fn multicast_bit() {
        assert!(MacAddr([0x01, 0x80, 0xC2, 0, 0, 0x0E]).is_multicast());
        assert!(!MacAddr([0x02, 0x04, 0xDF, 0x88, 0xA2, 0xB4]).is_multicast());
    }
}
