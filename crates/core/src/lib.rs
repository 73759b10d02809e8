//! Chess Duel Core Library
//!
//! Rules engine for a two-player chess game that ends when a king is
//! captured. There is no check or checkmate detection, no castling and no
//! promotion.

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod notation;
pub mod pieces;
pub mod snapshot;

pub use board::{Board, Square};
pub use config::GameConfig;
pub use error::{Error, Result};
pub use game::{Game, MoveOutcome};
pub use notation::{parse_notation, MoveIntent};
pub use pieces::{LegalMove, MoveKind, Piece, PieceId, PieceKind, Player, Side};
pub use snapshot::{BoardSnapshot, CapturedView, SquareView};
