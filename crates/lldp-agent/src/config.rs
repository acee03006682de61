use crate::AgentError;
use lldp_core::frame::{is_lldp_destination, LLDP_MULTICAST_NEAREST_BRIDGE};
use lldp_core::tlv::{
    ChassisId, EndOfLldpdu, InterfaceNumbering, ManagementAddress, PortDescription, PortId,
    SystemCapabilities, SystemDescription, SystemName, Ttl,
};
use lldp_core::{Capabilities, Lldpdu, MacAddr};
use std::net::IpAddr;
use std::time::Duration;

pub const DEFAULT_ANNOUNCE_INTERVAL: Duration = Duration::from_secs(1);
pub const DEFAULT_TTL: u16 = 60;

/// What the agent announces about itself, and how often.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentConfig {
    pub mac_address: MacAddr,
    pub interface_name: String,
    pub announce_interval: Duration,
    /// Seconds neighbors should keep our announcement.
    pub ttl: u16,
    pub destination: MacAddr,
    pub system_name: Option<String>,
    pub system_description: Option<String>,
    pub port_description: Option<String>,
    /// `(supported, enabled)`.
    pub capabilities: Option<(Capabilities, Capabilities)>,
    pub management_addresses: Vec<IpAddr>,
    /// Drop received LLDPDUs that lack End Of LLDPDU or a mandatory TLV.
    pub require_complete: bool,
}

impl AgentConfig {
    pub fn new(mac_address: MacAddr, interface_name: impl Into<String>) -> Self {
        Self {
            mac_address,
            interface_name: interface_name.into(),
            announce_interval: DEFAULT_ANNOUNCE_INTERVAL,
            ttl: DEFAULT_TTL,
            destination: LLDP_MULTICAST_NEAREST_BRIDGE,
            system_name: None,
            system_description: None,
            port_description: None,
            capabilities: None,
            management_addresses: Vec::new(),
            require_complete: true,
        }
    }

    pub fn with_announce_interval(mut self, interval: Duration) -> Self {
        self.announce_interval = interval;
        self
    }

    pub fn with_ttl(mut self, seconds: u16) -> Self {
        self.ttl = seconds;
        self
    }

    pub fn with_destination(mut self, destination: MacAddr) -> Self {
        self.destination = destination;
        self
    }

    pub fn with_system_name(mut self, name: impl Into<String>) -> Self {
        self.system_name = Some(name.into());
        self
    }

    pub fn with_system_description(mut self, description: impl Into<String>) -> Self {
        self.system_description = Some(description.into());
        self
    }

    pub fn with_port_description(mut self, description: impl Into<String>) -> Self {
        self.port_description = Some(description.into());
        self
    }

    pub fn with_capabilities(mut self, supported: Capabilities, enabled: Capabilities) -> Self {
        self.capabilities = Some((supported, enabled));
        self
    }

    pub fn with_management_address(mut self, address: IpAddr) -> Self {
        self.management_addresses.push(address);
        self
    }

    pub fn with_require_complete(mut self, require: bool) -> Self {
        self.require_complete = require;
        self
    }

    pub fn validate(&self) -> Result<(), AgentError> {
        self.build_lldpdu().map(|_| ())
    }

    /// Builds the LLDPDU this configuration announces.
    ///
    /// Optional TLVs follow the mandatory triple in a fixed order: port
    /// description, system name, system description, capabilities, then
    /// management addresses.
    pub(crate) fn build_lldpdu(&self) -> Result<Lldpdu, AgentError> {
        if self.announce_interval.is_zero() {
            return Err(AgentError::Config(
                "announce interval must be greater than zero".to_string(),
            ));
        }
        if !is_lldp_destination(self.destination) {
            return Err(AgentError::Config(format!(
                "{} is not an LLDP multicast address",
                self.destination
            )));
        }

        let mut pdu = Lldpdu::new();
        pdu.append(ChassisId::mac(self.mac_address))?;
        pdu.append(PortId::interface_name(self.interface_name.as_str())?)?;
        pdu.append(Ttl::new(self.ttl))?;
        if let Some(text) = &self.port_description {
            pdu.append(PortDescription::new(text.as_str())?)?;
        }
        if let Some(text) = &self.system_name {
            pdu.append(SystemName::new(text.as_str())?)?;
        }
        if let Some(text) = &self.system_description {
            pdu.append(SystemDescription::new(text.as_str())?)?;
        }
        if let Some((supported, enabled)) = self.capabilities {
            pdu.append(SystemCapabilities::new(supported, enabled)?)?;
        }
        for address in &self.management_addresses {
            pdu.append(ManagementAddress::new(
                *address,
                InterfaceNumbering::Unknown,
                0,
                Vec::new(),
            )?)?;
        }
        pdu.append(EndOfLldpdu)?;
        Ok(pdu)
    }
}
