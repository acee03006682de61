use core::fmt;
use lldp_core::{Lldpdu, MacAddr};

/// An LLDPDU received from another station, with the frame's source address.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Neighbor {
    pub source: MacAddr,
    pub lldpdu: Lldpdu,
}

impl fmt::Display for Neighbor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Neighbor {}", self.source)?;
        for line in self.lldpdu.to_string().lines() {
            write!(f, "\n  {line}")?;
        }
        Ok(())
    }
}
