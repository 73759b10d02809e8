//! Error types for chess-duel-core

use thiserror::Error;

use crate::board::Square;
use crate::pieces::PieceKind;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid entry: '{0}' is not a recognised move")]
    InvalidNotation(String),

    #[error("There is no piece at {0}.")]
    NoPiece(Square),

    #[error("It is not your turn; the piece at {0} belongs to your opponent.")]
    NotYourTurn(Square),

    #[error("The {kind} at {square} has no legal moves.")]
    NoLegalMoves { kind: PieceKind, square: Square },

    #[error("No piece is selected.")]
    NoSelection,

    #[error("Move is invalid.")]
    IllegalMove,

    #[error(
        "Multiple matching pieces found ({0}). \
         Please be more specific by including the rank or file of the attacking piece."
    )]
    Ambiguous(usize),

    #[error("Game over.")]
    GameOver,

    #[error("Square {0} is already occupied")]
    SquareOccupied(Square),

    #[error("Each player has exactly one king")]
    DuplicateKing,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// True for rejections caused by what the player typed or chose, as
    /// opposed to setup and configuration failures.
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            Error::InvalidNotation(_)
                | Error::NoPiece(_)
                | Error::NotYourTurn(_)
                | Error::NoLegalMoves { .. }
                | Error::NoSelection
                | Error::IllegalMove
                | Error::Ambiguous(_)
                | Error::GameOver
        )
    }
}

pub type Result<T> = std::result::Result<T, Error>;
