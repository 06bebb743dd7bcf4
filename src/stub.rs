use crate::domain::{GamePayload, PutPieceRequest};
use crate::{protocol::GameApi, protocol::Message, transport::Transport};
use anyhow::anyhow;
use tokio::sync::Mutex;

/// Client side of a `Skeleton`: each call is one request/response round
/// trip over the transport.
pub struct Stub<T: Transport> {
    transport: Mutex<T>,
}

impl<T: Transport> Stub<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport: Mutex::new(transport),
        }
    }

    async fn call(&self, request: Message) -> anyhow::Result<Message> {
        let mut transport = self.transport.lock().await;
        transport.send(request).await?;
        match transport.recv().await? {
            Message::Rejected { reason } => Err(anyhow!(reason)),
            reply => Ok(reply),
        }
    }
}

#[async_trait::async_trait]
impl<T: Transport> GameApi for Stub<T> {
    async fn get_game(&self) -> anyhow::Result<GamePayload> {
        match self.call(Message::GetGame).await? {
            Message::Game(payload) => Ok(payload),
            other => Err(anyhow!("Unexpected message {:?}", other)),
        }
    }

    async fn put_piece(&mut self, req: PutPieceRequest) -> anyhow::Result<()> {
        match self.call(Message::PutPiece(req)).await? {
            Message::Accepted => Ok(()),
            other => Err(anyhow!("Unexpected message {:?}", other)),
        }
    }

    async fn reset(&mut self) -> anyhow::Result<()> {
        match self.call(Message::Reset).await? {
            Message::Accepted => Ok(()),
            other => Err(anyhow!("Unexpected message {:?}", other)),
        }
    }
}
