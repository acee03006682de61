use clap::Parser;
use lldp_agent::{EthernetTransport, LldpAgent};
use lldp_tools::AnnounceArgs;

#[derive(Parser, Debug)]
#[command(name = "lldp-announce")]
struct Args {
    #[command(flatten)]
    announce: AnnounceArgs,
    /// Number of announcements; 0 sends until interrupted.
    #[arg(long, default_value_t = 1)]
    count: u64,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let transport = EthernetTransport::open(&args.announce.interface)?;
    let config = args.announce.to_config(transport.mac_address())?;
    let interval = config.announce_interval;
    let agent = LldpAgent::new(transport, config)?;

    let mut sent = 0u64;
    loop {
        agent.announce().await?;
        sent += 1;
        println!(
            "sent announcement {sent} on {} ({} bytes)",
            agent.config().interface_name,
            agent.local_lldpdu().encoded_len()
        );
        if args.count != 0 && sent >= args.count {
            break;
        }
        tokio::time::sleep(interval).await;
    }
    Ok(())
}
