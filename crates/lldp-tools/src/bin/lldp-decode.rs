use clap::Parser;
use lldp_core::frame::classify;
use lldp_core::{Lldpdu, MacAddr};
use lldp_tools::{parse_hex, parse_mac};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "lldp-decode")]
struct Args {
    /// Hex bytes of an LLDPDU (or of a frame with --frame).
    hex: Option<String>,
    /// Read hex from a file instead; `#` starts a comment.
    #[arg(long, conflicts_with = "hex")]
    file: Option<PathBuf>,
    /// Input is a whole Ethernet frame.
    #[arg(long)]
    frame: bool,
    /// Frames from this address are treated as our own and rejected.
    #[arg(long, value_parser = parse_mac, default_value = "00:00:00:00:00:00")]
    local_mac: MacAddr,
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();

    let text = match (&args.hex, &args.file) {
        (Some(hex), _) => hex.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)?,
        (None, None) => return Err("pass hex bytes or --file".into()),
    };
    let bytes = parse_hex(&text)?;

    let payload = if args.frame {
        classify(&bytes, args.local_mac).ok_or("not an LLDP frame for this station")?
    } else {
        &bytes[..]
    };

    let lldpdu = match Lldpdu::parse(payload) {
        Ok(lldpdu) => lldpdu,
        Err(err) => return Err(format!("{} error: {err}", err.category()).into()),
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&lldpdu)?);
    } else {
        println!("{lldpdu}");
        if !lldpdu.is_complete() {
            println!("(incomplete: {} tlvs, no End Of LLDPDU)", lldpdu.len());
        }
    }
    Ok(())
}
