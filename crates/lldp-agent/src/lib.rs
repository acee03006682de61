pub mod agent;
pub mod config;
pub mod error;
pub mod neighbor;

pub use agent::LldpAgent;
pub use config::AgentConfig;
pub use error::AgentError;
pub use lldp_datalink::{DataLink, DataLinkError, EthernetTransport, MemoryDataLink};
pub use neighbor::Neighbor;
