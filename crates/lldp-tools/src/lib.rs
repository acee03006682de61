use clap::ValueEnum;
use lldp_agent::AgentConfig;
use lldp_core::{Capabilities, MacAddr};
use std::net::IpAddr;
use std::time::Duration;

/// CLI-friendly enum for selecting system capabilities.
///
/// Maps human-readable names to [`Capabilities`] bits for use with clap argument parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CapabilityArg {
    Other,
    Repeater,
    Bridge,
    WlanAp,
    Router,
    Telephone,
    Docsis,
    StationOnly,
    CVlan,
    SVlan,
    TwoPortMacRelay,
}

impl CapabilityArg {
    pub const fn into_capabilities(self) -> Capabilities {
        match self {
            Self::Other => Capabilities::OTHER,
            Self::Repeater => Capabilities::REPEATER,
            Self::Bridge => Capabilities::BRIDGE,
            Self::WlanAp => Capabilities::WLAN_AP,
            Self::Router => Capabilities::ROUTER,
            Self::Telephone => Capabilities::TELEPHONE,
            Self::Docsis => Capabilities::DOCSIS,
            Self::StationOnly => Capabilities::STATION_ONLY,
            Self::CVlan => Capabilities::C_VLAN,
            Self::SVlan => Capabilities::S_VLAN,
            Self::TwoPortMacRelay => Capabilities::TWO_PORT_MAC_RELAY,
        }
    }
}

/// Union of the selected capabilities.
pub fn capabilities_from(args: &[CapabilityArg]) -> Capabilities {
    args.iter()
        .fold(Capabilities::empty(), |acc, cap| acc | cap.into_capabilities())
}

/// Parses hex bytes, ignoring whitespace, `:` separators, an optional `0x`
/// prefix and `#` comments running to end of line.
pub fn parse_hex(input: &str) -> Result<Vec<u8>, String> {
    let mut digits = String::new();
    for line in input.lines() {
        let line = line.split('#').next().unwrap_or_default().trim();
        let line = line.strip_prefix("0x").unwrap_or(line);
        digits.extend(line.chars().filter(|c| !c.is_whitespace() && *c != ':'));
    }
    if !digits.is_ascii() {
        return Err("input contains non-hex characters".to_string());
    }
    if digits.len() % 2 != 0 {
        return Err(format!("odd number of hex digits ({})", digits.len()));
    }
    (0..digits.len())
        .step_by(2)
        .map(|i| {
            let pair = &digits[i..i + 2];
            u8::from_str_radix(pair, 16).map_err(|_| format!("invalid hex byte '{pair}'"))
        })
        .collect()
}

/// clap value parser for MAC addresses.
pub fn parse_mac(input: &str) -> Result<MacAddr, String> {
    input.parse().map_err(|err| format!("{err}"))
}

/// Announcement settings shared by the agent and announce tools.
#[derive(Debug, Clone, clap::Args)]
pub struct AnnounceArgs {
    /// Network interface to send on.
    #[arg(long)]
    pub interface: String,
    /// Seconds between announcements.
    #[arg(long, default_value_t = 1.0)]
    pub interval: f64,
    /// TTL advertised to neighbors, in seconds.
    #[arg(long, default_value_t = 60)]
    pub ttl: u16,
    #[arg(long)]
    pub system_name: Option<String>,
    #[arg(long)]
    pub system_description: Option<String>,
    #[arg(long)]
    pub port_description: Option<String>,
    /// Supported capability; repeat for several.
    #[arg(long = "capability", value_enum)]
    pub capabilities: Vec<CapabilityArg>,
    /// Enabled capability; must also be supported.
    #[arg(long = "enabled", value_enum)]
    pub enabled: Vec<CapabilityArg>,
    #[arg(long = "management-address")]
    pub management_addresses: Vec<IpAddr>,
    /// Destination MAC; one of the three LLDP multicast addresses.
    #[arg(long, value_parser = parse_mac)]
    pub destination: Option<MacAddr>,
}

impl AnnounceArgs {
    pub fn to_config(&self, mac: MacAddr) -> Result<AgentConfig, String> {
        if !self.interval.is_finite() || self.interval <= 0.0 {
            return Err(format!("invalid interval {}", self.interval));
        }
        let mut config = AgentConfig::new(mac, self.interface.as_str())
            .with_announce_interval(Duration::from_secs_f64(self.interval))
            .with_ttl(self.ttl);
        if let Some(destination) = self.destination {
            config = config.with_destination(destination);
        }
        if let Some(name) = &self.system_name {
            config = config.with_system_name(name.as_str());
        }
        if let Some(description) = &self.system_description {
            config = config.with_system_description(description.as_str());
        }
        if let Some(description) = &self.port_description {
            config = config.with_port_description(description.as_str());
        }
        if !self.capabilities.is_empty() || !self.enabled.is_empty() {
            config = config.with_capabilities(
                capabilities_from(&self.capabilities),
                capabilities_from(&self.enabled),
            );
        }
        for address in &self.management_addresses {
            config = config.with_management_address(*address);
        }
        config.validate().map_err(|err| err.to_string())?;
        Ok(config)
    }
}
