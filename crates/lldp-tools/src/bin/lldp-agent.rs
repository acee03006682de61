use clap::Parser;
use lldp_agent::{AgentConfig, DataLink, EthernetTransport, LldpAgent, Neighbor};
use lldp_datalink::CapturingDataLink;
use lldp_tools::AnnounceArgs;
use std::ops::ControlFlow;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lldp-agent")]
struct Args {
    #[command(flatten)]
    announce: AnnounceArgs,
    /// Also write every frame to this PCAP file.
    #[arg(long)]
    capture: Option<PathBuf>,
    #[arg(long)]
    json: bool,
    /// Exit after the first neighbor.
    #[arg(long)]
    once: bool,
    /// Report LLDPDUs without End Of LLDPDU too.
    #[arg(long)]
    allow_incomplete: bool,
}

fn print_neighbor(neighbor: &Neighbor, json: bool) {
    if json {
        match serde_json::to_string(neighbor) {
            Ok(line) => println!("{line}"),
            Err(err) => eprintln!("failed to encode neighbor: {err}"),
        }
    } else {
        println!("{neighbor}");
    }
}

async fn run<D: DataLink>(
    datalink: D,
    config: AgentConfig,
    json: bool,
    once: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let agent = LldpAgent::new(datalink, config)?;
    println!(
        "LLDP agent on {} ({}), announcing every {:?} (Ctrl+C to stop)",
        agent.config().interface_name,
        agent.config().mac_address,
        agent.config().announce_interval
    );
    agent
        .run(|neighbor| {
            print_neighbor(&neighbor, json);
            if once {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        })
        .await?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let transport = EthernetTransport::open(&args.announce.interface)?;
    let config = args
        .announce
        .to_config(transport.mac_address())?
        .with_require_complete(!args.allow_incomplete);

    match &args.capture {
        Some(path) => {
            let capturing = CapturingDataLink::to_file(transport, path)?;
            run(capturing, config, args.json, args.once).await
        }
        None => run(transport, config, args.json, args.once).await,
    }
}
