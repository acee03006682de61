use crate::{DataLink, DataLinkError};
use lldp_core::frame::MAX_FRAME_LEN;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex};

const CHANNEL_DEPTH: usize = 128;

/// One end of an in-memory point-to-point link.
///
/// Frames sent on one end arrive, unmodified, at the other.
#[derive(Debug, Clone)]
pub struct MemoryDataLink {
    outbound: mpsc::Sender<Vec<u8>>,
    inbound: Arc<Mutex<mpsc::Receiver<Vec<u8>>>>,
}

impl MemoryDataLink {
    pub fn pair() -> (Self, Self) {
        let (a_tx, a_rx) = mpsc::channel(CHANNEL_DEPTH);
        let (b_tx, b_rx) = mpsc::channel(CHANNEL_DEPTH);
        (
            Self {
                outbound: a_tx,
                inbound: Arc::new(Mutex::new(b_rx)),
            },
            Self {
                outbound: b_tx,
                inbound: Arc::new(Mutex::new(a_rx)),
            },
        )
    }
}

impl DataLink for MemoryDataLink {
    async fn send(&self, frame: &[u8]) -> Result<(), DataLinkError> {
        if frame.len() > MAX_FRAME_LEN {
            return Err(DataLinkError::FrameTooLarge {
                len: frame.len(),
                max: MAX_FRAME_LEN,
            });
        }
        self.outbound
            .send(frame.to_vec())
            .await
            .map_err(|_| DataLinkError::Closed)
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
    use super::MemoryDataLink;
    use crate::{DataLink, DataLinkError};
    use std::time::Duration;

    #[tokio::test]
    async fn frames_cross_the_pair_in_order() {
        let (a, b) = MemoryDataLink::pair();
        a.send(&[1, 2, 3]).await.unwrap();
        a.send(&[4]).await.unwrap();

        let mut buf = [0u8; 16];
        let n = b.recv(&mut buf).await.unwrap();
        assert_eq!(&buf[..n], &[1, 2, 3]);
        let n = b.recv(&mut buf).await.unwrap();
        assert_eq!(&buf[..n], &[4]);
    }

    #[tokio::test]
    async fn recv_timeout_returns_none_when_idle() {
        let (_a, b) = MemoryDataLink::pair();
        let mut buf = [0u8; 16];
        let got = b
            .recv_timeout(&mut buf, Duration::from_millis(10))
            .await
            .unwrap();
        assert_eq!(got, None);
    }

    #[tokio::test]
    async fn dropped_peer_closes_the_link() {
        let (a, b) = MemoryDataLink::pair();
        drop(a);
        let mut buf = [0u8; 16];
        assert!(matches!(b.recv(&mut buf).await, Err(DataLinkError::Closed)));
        assert!(matches!(b.send(&[0]).await, Err(DataLinkError::Closed)));
    }

    #[tokio::test]
    async fn oversized_frames_are_rejected() {
        let (a, b) = MemoryDataLink::pair();
        assert!(matches!(
            a.send(&[0u8; 1515]).await,
            Err(DataLinkError::FrameTooLarge { len: 1515, max: 1514 })
        ));

        a.send(&[0u8; 32]).await.unwrap();
        let mut small = [0u8; 8];
        assert!(matches!(
            b.recv(&mut small).await,
            Err(DataLinkError::FrameTooLarge { len: 32, max: 8 })
        ));
    }
}
