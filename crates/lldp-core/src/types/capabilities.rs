use core::fmt;

/// A system capabilities bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Capabilities(pub u16);

impl Capabilities {
    pub const OTHER: Self = Self(0x0001);
    pub const REPEATER: Self = Self(0x0002);
    pub const BRIDGE: Self = Self(0x0004);
    pub const WLAN_AP: Self = Self(0x0008);
    pub const ROUTER: Self = Self(0x0010);
    pub const TELEPHONE: Self = Self(0x0020);
    pub const DOCSIS: Self = Self(0x0040);
    pub const STATION_ONLY: Self = Self(0x0080);
    pub const C_VLAN: Self = Self(0x0100);
    pub const S_VLAN: Self = Self(0x0200);
    pub const TWO_PORT_MAC_RELAY: Self = Self(0x0400);

    const NAMES: [(Self, &'static str); 11] = [
        (Self::OTHER, "other"),
        (Self::REPEATER, "repeater"),
        (Self::BRIDGE, "bridge"),
        (Self::WLAN_AP, "wlan-ap"),
        (Self::ROUTER, "router"),
        (Self::TELEPHONE, "telephone"),
        (Self::DOCSIS, "docsis"),
        (Self::STATION_ONLY, "station-only"),
        (Self::C_VLAN, "c-vlan"),
        (Self::S_VLAN, "s-vlan"),
        (Self::TWO_PORT_MAC_RELAY, "two-port-mac-relay"),
    ];

    pub const fn empty() -> Self {
        Self(0)
    }

    pub const fn bits(self) -> u16 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Names of the defined bits that are set. Reserved bits are skipped.
    pub fn names(self) -> impl Iterator<Item = &'static str> {
        Self::NAMES
            .into_iter()
            .filter(move |(cap, _)| self.contains(*cap))
            .map(|(_, name)| name)
    }
}

impl core::ops::BitOr for Capabilities {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl From<u16> for Capabilities {
    fn from(bits: u16) -> Self {
        Self(bits)
    }
}

impl fmt::Display for Capabilities {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("none");
        }
        let mut first = true;
        for name in self.names() {
            if !first {
                f.write_str(",")?;
            }
            f.write_str(name)?;
            first = false;
        }
        if first {
            write!(f, "0x{:04x}", self.0)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::Capabilities;

    #[test]
    fn names_follow_bit_order() {
        let caps = Capabilities::ROUTER | Capabilities::BRIDGE;
        assert_eq!(caps.names().collect::<Vec<_>>(), ["bridge", "router"]);
        assert_eq!(caps.to_string(), "bridge,router");
    }

    #[test]
    fn reserved_only_bitmap_prints_raw() {
        assert_eq!(Capabilities(0x8000).to_string(), "0x8000");
        assert_eq!(Capabilities::empty().to_string(), "none");
    }

    #[test]
    fn contains_checks_every_bit() {
        let caps = Capabilities(0b11);
        assert!(caps.contains(Capabilities(0b01)));
        assert!(!Capabilities(0b01).contains(Capabilities(0b10)));
    }
}
