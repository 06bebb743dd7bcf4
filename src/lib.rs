#![cfg_attr(not(feature = "std"), no_std)]

//! Reversi (Othello) rules engine.
//!
//! The engine (`Board`, `Game` and friends) is `no_std + alloc`. With the
//! default `std` feature the crate also carries the glue a server needs:
//! JSON payloads, a request handler, an in-memory transport and a
//! broadcast hub.

extern crate alloc;

mod bitboard;
mod board;
mod common;
mod config;
mod game;
pub mod notation;

#[cfg(feature = "std")]
pub mod domain;
#[cfg(feature = "std")]
pub mod hub;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod protocol;
#[cfg(feature = "std")]
pub mod server;
#[cfg(feature = "std")]
pub mod stub;
#[cfg(feature = "std")]
pub mod transport;

pub use bitboard::{BitBoard, BitBoardError};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use notation::{parse_move, parse_record, replay, NotationError, RecordError};

#[cfg(feature = "std")]
pub use domain::{parse_piece_code, piece_code, Envelope, GamePayload, PieceCodeError, PutPieceRequest};
#[cfg(feature = "std")]
pub use hub::Hub;
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use protocol::{GameApi, Message};
#[cfg(feature = "std")]
pub use server::{GameServer, Skeleton};
#[cfg(feature = "std")]
pub use stub::Stub;
#[cfg(feature = "std")]
pub use transport::{in_memory::InMemoryTransport, Transport};
