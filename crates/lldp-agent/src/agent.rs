use crate::{AgentConfig, AgentError, Neighbor};
use lldp_core::encoding::reader::Reader;
use lldp_core::frame::{build_frame, classify, EthernetHeader};
use lldp_core::Lldpdu;
use lldp_datalink::DataLink;
use std::ops::ControlFlow;
use std::time::Duration;
use tokio::time::Instant;

/// Receive buffer size; larger than any LLDP frame so oversized frames are
/// read whole and then rejected by parsing.
const RECV_BUF_LEN: usize = 4096;

/// Announces the local station and reports LLDP neighbors.
#[derive(Debug)]
pub struct LldpAgent<D: DataLink> {
    datalink: D,
    config: AgentConfig,
    lldpdu: Lldpdu,
    frame: Vec<u8>,
}

impl<D: DataLink> LldpAgent<D> {
    /// Validates `config` and prepares the announcement frame.
    pub fn new(datalink: D, config: AgentConfig) -> Result<Self, AgentError> {
        let lldpdu = config.build_lldpdu()?;
        let frame = build_frame(config.destination, config.mac_address, &lldpdu)?;
        Ok(Self {
            datalink,
            config,
            lldpdu,
            frame,
        })
    }

    pub fn config(&self) -> &AgentConfig {
        &self.config
    }

    pub fn datalink(&self) -> &D {
        &self.datalink
    }

    /// The LLDPDU sent by [`LldpAgent::announce`].
    pub fn local_lldpdu(&self) -> &Lldpdu {
        &self.lldpdu
    }

    pub async fn announce(&self) -> Result<(), AgentError> {
        self.datalink.send(&self.frame).await?;
        log::trace!(
            "announced {} bytes to {}",
            self.frame.len(),
            self.config.destination
        );
        Ok(())
    }

    /// Waits up to `timeout` for the next valid neighbor announcement.
    ///
    /// Frames that are not LLDP, or whose LLDPDU is rejected, are skipped
    /// without ending the wait. A timeout too large to form a deadline waits
    /// without limit.
    pub async fn recv_neighbor(&self, timeout: Duration) -> Result<Option<Neighbor>, AgentError> {
        let mut buf = vec![0u8; RECV_BUF_LEN];
        let Some(deadline) = Instant::now().checked_add(timeout) else {
            loop {
                let n = self.datalink.recv(&mut buf).await?;
                if let Some(neighbor) = self.accept(&buf[..n]) {
                    return Ok(Some(neighbor));
                }
            }
        };
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                return Ok(None);
            }
            let Some(n) = self.datalink.recv_timeout(&mut buf, remaining).await? else {
                return Ok(None);
            };
            if let Some(neighbor) = self.accept(&buf[..n]) {
                return Ok(Some(neighbor));
            }
        }
    }

    /// Announces every `announce_interval` (starting immediately) and passes
    /// each neighbor to `handler` until it returns [`ControlFlow::Break`].
    ///
    /// Only transport failures end the loop with an error.
    pub async fn run<F>(&self, mut handler: F) -> Result<(), AgentError>
    where
        F: FnMut(Neighbor) -> ControlFlow<()>,
    {
        let mut buf = vec![0u8; RECV_BUF_LEN];
        let mut next_announce = Instant::now();
        loop {
            let now = Instant::now();
            if now >= next_announce {
                self.announce().await?;
                next_announce = now + self.config.announce_interval;
            }

            let wait = next_announce.saturating_duration_since(Instant::now());
            if let Some(n) = self.datalink.recv_timeout(&mut buf, wait).await? {
                if let Some(neighbor) = self.accept(&buf[..n]) {
                    log::debug!("neighbor {} reported", neighbor.source);
                    if handler(neighbor).is_break() {
                        return Ok(());
                    }
                }
            }
        }
    }

    fn accept(&self, frame: &[u8]) -> Option<Neighbor> {
        let Some(payload) = classify(frame, self.config.mac_address) else {
            log::trace!("ignoring {}-byte frame: not LLDP or self-originated", frame.len());
            return None;
        };
        let source = EthernetHeader::decode(&mut Reader::new(frame)).ok()?.source;

        match Lldpdu::parse(payload) {
            Ok(lldpdu) if lldpdu.is_complete() || !self.config.require_complete => {
                Some(Neighbor { source, lldpdu })
            }
            Ok(_) => {
                log::debug!("dropping incomplete LLDPDU from {source}");
                None
            }
            Err(err) => {
                log::debug!(
                    "dropping LLDPDU from {source}: {err} ({})",
                    err.category()
                );
                None
            }
        }
    }
}
