//! Request handling around a single game.
//!
//! `GameServer` owns the `Game` and publishes every change to a `Hub`;
//! `Skeleton` answers requests arriving on a `Transport` one at a time,
//! which is what keeps mutations of the game serialized.

use anyhow::anyhow;
use log::{info, warn};

use crate::domain::{parse_piece_code, Envelope, GamePayload, PutPieceRequest};
use crate::hub::Hub;
use crate::protocol::{GameApi, Message};
use crate::transport::Transport;
use crate::Game;

pub struct GameServer {
    game: Game,
    hub: Hub,
}

impl GameServer {
    pub fn new(hub: Hub) -> Self {
        Self {
            game: Game::new(),
            hub,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn payload(&self) -> GamePayload {
        GamePayload::from(&self.game)
    }

    fn frame(game: &Game) -> anyhow::Result<Vec<u8>> {
        Ok(Envelope::game(GamePayload::from(game)).encode()?)
    }

    /// Decode and apply a move, then broadcast the new state.
    ///
    /// The game is only replaced once the move is legal and its frame is
    /// encoded, so an `Err` always means nothing changed.
    pub fn submit(&mut self, req: &PutPieceRequest) -> anyhow::Result<()> {
        let piece = parse_piece_code(&req.piece)?;
        let (Ok(row), Ok(col)) = (usize::try_from(req.row), usize::try_from(req.column)) else {
            return Err(anyhow!(
                "position ({}, {}) is outside the board",
                req.row,
                req.column
            ));
        };
        let mut next = self.game.clone();
        next.put_piece(row, col, piece).map_err(|e| anyhow!(e))?;
        let frame = Self::frame(&next)?;
        self.game = next;
        self.hub.enqueue(frame);
        Ok(())
    }

    /// Start over with a fresh game and broadcast it.
    pub fn restart(&mut self) -> anyhow::Result<()> {
        let fresh = Game::new();
        let frame = Self::frame(&fresh)?;
        self.game = fresh;
        info!("game reset");
        self.hub.enqueue(frame);
        Ok(())
    }
}

#[async_trait::async_trait]
impl GameApi for GameServer {
    async fn get_game(&self) -> anyhow::Result<GamePayload> {
        Ok(self.payload())
    }

    async fn put_piece(&mut self, req: PutPieceRequest) -> anyhow::Result<()> {
        self.submit(&req)
    }

    async fn reset(&mut self) -> anyhow::Result<()> {
        self.restart()
    }
}

/// Serves a `GameApi` over a `Transport`.
pub struct Skeleton<E: GameApi, T: Transport> {
    engine: E,
    transport: T,
}

impl<E: GameApi, T: Transport> Skeleton<E, T> {
    pub fn new(engine: E, transport: T) -> Self {
        Self { engine, transport }
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    /// Answer requests until the peer goes away.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        while let Ok(msg) = self.transport.recv().await {
            let result = match msg {
                Message::GetGame => self.engine.get_game().await.map(Message::Game),
                Message::PutPiece(req) => self.engine.put_piece(req).await.map(|_| Message::Accepted),
                Message::Reset => self.engine.reset().await.map(|_| Message::Accepted),
                other => Err(anyhow!("unexpected message {:?}", other)),
            };
            let reply = result.unwrap_or_else(|e| {
                warn!("request rejected: {}", e);
                Message::Rejected {
                    reason: e.to_string(),
                }
            });
            self.transport.send(reply).await?;
        }
        Ok(())
    }
}
