//! PCAP capture via a [`DataLink`](crate::DataLink) wrapper.
//!
//! [`CapturingDataLink`] wraps any transport and records every frame it sends
//! or receives, so a session can be replayed in Wireshark.

use crate::{DataLink, DataLinkError};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use tokio::sync::Mutex;

/// LINKTYPE_ETHERNET: records hold whole Ethernet II frames.
const PCAP_LINK_TYPE_ETHERNET: u32 = 1;
const PCAP_MAGIC: u32 = 0xa1b2c3d4;
const PCAP_VERSION_MAJOR: u16 = 2;
const PCAP_VERSION_MINOR: u16 = 4;
const PCAP_MAX_SNAPLEN: u32 = 65535;
const PCAP_GLOBAL_HEADER_LEN: usize = 24;
const PCAP_RECORD_HEADER_LEN: usize = 16;

struct PcapWriter<W: Write + Send> {
    inner: W,
}

impl<W: Write + Send> PcapWriter<W> {
    fn new(mut inner: W) -> io::Result<Self> {
        let mut header = Vec::with_capacity(PCAP_GLOBAL_HEADER_LEN);
        header.extend_from_slice(&PCAP_MAGIC.to_le_bytes());
        header.extend_from_slice(&PCAP_VERSION_MAJOR.to_le_bytes());
        header.extend_from_slice(&PCAP_VERSION_MINOR.to_le_bytes());
        header.extend_from_slice(&0i32.to_le_bytes()); // thiszone
        header.extend_from_slice(&0u32.to_le_bytes()); // sigfigs
        header.extend_from_slice(&PCAP_MAX_SNAPLEN.to_le_bytes());
        header.extend_from_slice(&PCAP_LINK_TYPE_ETHERNET.to_le_bytes());
        inner.write_all(&header)?;
        inner.flush()?;
        Ok(Self { inner })
    }

    fn write_frame(&mut self, frame: &[u8]) -> io::Result<()> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        let len = frame.len() as u32;

        let mut record = Vec::with_capacity(PCAP_RECORD_HEADER_LEN + frame.len());
        record.extend_from_slice(&(now.as_secs() as u32).to_le_bytes());
        record.extend_from_slice(&now.subsec_micros().to_le_bytes());
        record.extend_from_slice(&len.to_le_bytes()); // incl_len
        record.extend_from_slice(&len.to_le_bytes()); // orig_len
        record.extend_from_slice(frame);
        self.inner.write_all(&record)?;
        self.inner.flush()
    }
}

/// A [`DataLink`] wrapper that writes all frames to a PCAP stream.
///
/// Capture failures are logged and never fail the wrapped operation.
///
/// ```no_run
/// # use lldp_datalink::{CapturingDataLink, EthernetTransport};
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let transport = EthernetTransport::open("eth0")?;
/// let capturing = CapturingDataLink::to_file(transport, "lldp.pcap")?;
/// # Ok(())
/// # }
/// ```
pub struct CapturingDataLink<D: DataLink> {
    inner: D,
    writer: Mutex<PcapWriter<Box<dyn Write + Send>>>,
}

impl<D: DataLink> CapturingDataLink<D> {
    pub fn to_file(inner: D, path: impl AsRef<Path>) -> io::Result<Self> {
        let file = File::create(path)?;
        Self::with_writer(inner, BufWriter::new(file))
    }

    pub fn with_writer(inner: D, writer: impl Write + Send + 'static) -> io::Result<Self> {
        let writer: Box<dyn Write + Send> = Box::new(writer);
        Ok(Self {
            inner,
            writer: Mutex::new(PcapWriter::new(writer)?),
        })
    }

    pub fn inner(&self) -> &D {
        &self.inner
    }

    async fn record(&self, frame: &[u8]) {
        let mut w = self.writer.lock().await;
        if let Err(err) = w.write_frame(frame) {
            log::warn!("failed to write capture record: {err}");
        }
    }
}

impl<D: DataLink> DataLink for CapturingDataLink<D> {
    async fn send(&self, frame: &[u8]) -> Result<(), DataLinkError> {
        self.record(frame).await;
        self.inner.send(frame).await
    }

    async fn recv(&self, buf: &mut [u8]) -> Result<usize, DataLinkError> {
        let n = self.inner.recv(buf).await?;
        self.record(&buf[..n]).await;
        Ok(n)
    }
}
