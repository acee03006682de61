use crate::{DataLink, DataLinkError};
use lldp_core::frame::{LLDP_ETHERTYPE, MAX_FRAME_LEN};
use lldp_core::MacAddr;
use pnet_datalink::{Channel, Config, DataLinkReceiver, DataLinkSender, NetworkInterface};
use std::io;
use std::time::Duration;
use tokio::sync::{mpsc, Mutex};

const CHANNEL_DEPTH: usize = 128;
/// How often the reader thread wakes up to check whether the transport was
/// dropped.
const READ_POLL: Duration = Duration::from_millis(250);

/// Raw Layer-2 transport bound to one network interface.
///
/// Receiving runs on a dedicated thread that forwards LLDP frames (by
/// EtherType) into a channel; other traffic is dropped there.
pub struct EthernetTransport {
    interface_name: String,
    mac: MacAddr,
    sender: Mutex<Box<dyn DataLinkSender>>,
    inbound: Mutex<mpsc::Receiver<Vec<u8>>>,
}

impl EthernetTransport {
    /// Opens a raw channel on the interface called `name`.
    ///
    /// Usually needs `CAP_NET_RAW` or root.
    pub fn open(name: &str) -> Result<Self, DataLinkError> {
        let interface = pnet_datalink::interfaces()
            .into_iter()
            .find(|iface| iface.name == name)
            .ok_or_else(|| DataLinkError::InterfaceNotFound(name.to_string()))?;
        let mac = interface_mac(&interface)?;

        let config = Config {
            read_timeout: Some(READ_POLL),
            ..Default::default()
        };
        let (tx, rx) = match pnet_datalink::channel(&interface, config)? {
            Channel::Ethernet(tx, rx) => (tx, rx),
            _ => return Err(DataLinkError::UnsupportedChannel),
        };

        let (inbound_tx, inbound_rx) = mpsc::channel(CHANNEL_DEPTH);
        let thread_name = format!("lldp-rx-{name}");
        std::thread::Builder::new()
            .name(thread_name)
            .spawn(move || read_loop(rx, inbound_tx))?;

        log::debug!("opened raw channel on {name} ({mac})");
        Ok(Self {
            interface_name: interface.name,
            mac,
            sender: Mutex::new(tx),
            inbound: Mutex::new(inbound_rx),
        })
    }

    pub fn interface_name(&self) -> &str {
        &self.interface_name
    }

    pub fn mac_address(&self) -> MacAddr {
        self.mac
    }
}

fn interface_mac(interface: &NetworkInterface) -> Result<MacAddr, DataLinkError> {
    let mac = interface.mac.ok_or_else(|| {
        DataLinkError::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("interface '{}' has no MAC address", interface.name),
        ))
    })?;
    Ok(MacAddr([mac.0, mac.1, mac.2, mac.3, mac.4, mac.5]))
}

fn is_lldp_ethertype(frame: &[u8]) -> bool {
    frame.len() >= 14 && u16::from_be_bytes([frame[12], frame[13]]) == LLDP_ETHERTYPE
}

fn read_loop(mut rx: Box<dyn DataLinkReceiver>, inbound: mpsc::Sender<Vec<u8>>) {
    loop {
        match rx.next() {
            Ok(frame) => {
                if !is_lldp_ethertype(frame) {
                    continue;
                }
                if inbound.blocking_send(frame.to_vec()).is_err() {
                    break;
                }
            }
            Err(err) if err.kind() == io::ErrorKind::TimedOut => {
                if inbound.is_closed() {
                    break;
                }
            }
            Err(err) => {
                log::warn!("raw socket receive failed: {err}");
                break;
            }
        }
    }
    log::trace!("raw socket reader stopped");
}

impl DataLink for EthernetTransport {
    async fn send(&self, frame: &[u8]) -> Result<(), DataLinkError> {
        if frame.len() > MAX_FRAME_LEN {
            return Err(DataLinkError::FrameTooLarge {
                len: frame.len(),
                max: MAX_FRAME_LEN,
            });
        }
        let mut tx = self.sender.lock().await;
        tx.send_to(frame, None).ok_or(DataLinkError::Closed)??;
        Ok(())
    }

    async fn recv(&self, buf: &mut [u8]) -> Result<usize, DataLinkError> {
        let mut inbound = self.inbound.lock().await;
        let frame = inbound.recv().await.ok_or(DataLinkError::Closed)?;
        if frame.len() > buf.len() {
            return Err(DataLinkError::FrameTooLarge {
                len: frame.len(),
                max: buf.len(),
            });
        }
        buf[..frame.len()].copy_from_slice(&frame);
        Ok(frame.len())
    }
}

#[cfg(test)]
mod tests {
    use super::is_lldp_ethertype;

    #[test]
    fn only_lldp_ethertype_is_forwarded() {
        let mut frame = [0u8; 20];
        frame[12] = 0x88;
        frame[13] = 0xCC;
        assert!(is_lldp_ethertype(&frame));
        frame[13] = 0xCD;
        assert!(!is_lldp_ethertype(&frame));
        assert!(!is_lldp_ethertype(&frame[..13]));
    }
}
