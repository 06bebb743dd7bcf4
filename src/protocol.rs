use crate::domain::{GamePayload, PutPieceRequest};
use serde::{Deserialize, Serialize};

/// Messages exchanged between a game handler and its clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Message {
    /// Request the current game.
    GetGame,
    /// Submit a move.
    PutPiece(PutPieceRequest),
    /// Replace the game with a fresh one.
    Reset,
    /// Response carrying the game.
    Game(GamePayload),
    /// The request was applied.
    Accepted,
    /// The request was refused; `reason` is meant for the user.
    Rejected { reason: String },
}

/// Operations a game handler offers, whether local or behind a transport.
#[async_trait::async_trait]
pub trait GameApi: Send + Sync {
    async fn get_game(&self) -> anyhow::Result<GamePayload>;
    async fn put_piece(&mut self, req: PutPieceRequest) -> anyhow::Result<()>;
    async fn reset(&mut self) -> anyhow::Result<()>;
}
