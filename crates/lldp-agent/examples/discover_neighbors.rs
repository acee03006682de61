//! Announce once on an interface and print the LLDP neighbors heard within
//! 30 seconds.
//!
//! Usage:
//!   cargo run -p lldp-agent --example discover_neighbors -- eth0
//!
//! Raw sockets usually need root or CAP_NET_RAW.

use lldp_agent::{AgentConfig, EthernetTransport, LldpAgent};
use std::time::{Duration, Instant};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let interface = std::env::args().nth(1).unwrap_or_else(|| "eth0".to_string());
    let transport = EthernetTransport::open(&interface)?;
    let config = AgentConfig::new(transport.mac_address(), interface.clone())
        .with_system_name("lldp-agent example");
    let agent = LldpAgent::new(transport, config)?;

    agent.announce().await?;

    let deadline = Instant::now() + Duration::from_secs(30);
    let mut found = 0usize;
    while let Some(left) = deadline.checked_duration_since(Instant::now()) {
        match agent.recv_neighbor(left).await? {
            Some(neighbor) => {
                println!("{neighbor}\n");
                found += 1;
            }
            None => break,
        }
    }

    if found == 0 {
        println!("No neighbors heard on {interface}.");
    } else {
        println!("Heard {found} announcement(s) on {interface}.");
    }
    Ok(())
}
