pub(crate) mod address_family;
mod capabilities;
mod mac_addr;

pub use address_family::AddressFamily;
pub use capabilities::Capabilities;
pub use mac_addr::{MacAddr, ParseMacAddrError};
