use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};
use tokio::time::{timeout, Duration};

use crate::protocol::Message;
use crate::transport::Transport;

/// One end of an in-process transport. Messages sent on one end arrive, in
/// order, on the other.
pub struct InMemoryTransport {
    tx: UnboundedSender<Message>,
    rx: UnboundedReceiver<Message>,
    recv_timeout: Option<Duration>,
}

impl InMemoryTransport {
    /// Two connected ends.
    pub fn pair() -> (Self, Self) {
        let (tx1, rx1) = unbounded_channel();
        let (tx2, rx2) = unbounded_channel();
        (
            Self {
                tx: tx1,
                rx: rx2,
                recv_timeout: None,
            },
            Self {
                tx: tx2,
                rx: rx1,
                recv_timeout: None,
            },
        )
    }

    /// Fail `recv` when nothing arrives within `limit`.
    pub fn with_timeout(mut self, limit: Duration) -> Self {
        self.recv_timeout = Some(limit);
        self
    }
}

#[async_trait::async_trait]
impl Transport for InMemoryTransport {
    async fn send(&mut self, msg: Message) -> anyhow::Result<()> {
        self.tx
            .send(msg)
            .map_err(|_| anyhow::anyhow!("Channel closed"))
    }

    async fn recv(&mut self) -> anyhow::Result<Message> {
        let msg = match self.recv_timeout {
            Some(limit) => timeout(limit, self.rx.recv())
                .await
                .map_err(|_| anyhow::anyhow!("Receive timed out after {:?}", limit))?,
            None => self.rx.recv().await,
        };
        msg.ok_or_else(|| anyhow::anyhow!("Channel closed"))
    }
}
