use std::time::Duration;
use thiserror::Error;

/// Errors that can occur at the data-link layer.
#[derive(Debug, Error)]
pub enum DataLinkError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("frame of {len} bytes exceeds {max}")]
    FrameTooLarge { len: usize, max: usize },
    #[error("interface '{0}' not found")]
    InterfaceNotFound(String),
    #[error("interface does not provide an ethernet channel")]
    UnsupportedChannel,
    #[error("data link closed")]
    Closed,
}

/// Async trait for sending and receiving whole Ethernet frames.
///
/// Implementors include [`EthernetTransport`](crate::EthernetTransport) for a
/// raw interface and [`MemoryDataLink`](crate::MemoryDataLink) for tests.
pub trait DataLink: Send + Sync {
    /// Sends one frame, Ethernet header included.
    async fn send(&self, frame: &[u8]) -> Result<(), DataLinkError>;

    /// Receives one frame into `buf`, returning its length.
    async fn recv(&self, buf: &mut [u8]) -> Result<usize, DataLinkError>;

    /// Like [`DataLink::recv`], but gives up after `timeout` with `Ok(None)`.
    async fn recv_timeout(
        &self,
        buf: &mut [u8],
        timeout: Duration,
    ) -> Result<Option<usize>, DataLinkError> {
        match tokio::time::timeout(timeout, self.recv(buf)).await {
            Ok(result) => result.map(Some),
            Err(_) => Ok(None),
        }
    }
}
