#![allow(async_fn_in_trait)]

pub mod capture;
pub mod ethernet;
pub mod memory;
pub mod traits;

pub use capture::CapturingDataLink;
pub use ethernet::EthernetTransport;
pub use memory::MemoryDataLink;
pub use traits::{DataLink, DataLinkError};
