//! Piece and player types

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::board::Square;

/// One of the two players.
///
/// Red starts on rows 0-1 and advances towards row 7; Green starts on
/// rows 6-7 and advances towards row 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Red,
    Green,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Red, Side::Green];

    pub fn id(self) -> u8 {
        match self {
            Side::Red => 0,
            Side::Green => 1,
        }
    }

    pub fn opponent(self) -> Side {
        match self {
            Side::Red => Side::Green,
            Side::Green => Side::Red,
        }
    }

    /// Row step of a forward pawn move.
    pub fn direction(self) -> i32 {
        match self {
            Side::Red => 1,
            Side::Green => -1,
        }
    }

    pub fn back_row(self) -> usize {
        match self {
            Side::Red => 0,
            Side::Green => 7,
        }
    }

    pub fn pawn_row(self) -> usize {
        match self {
            Side::Red => 1,
            Side::Green => 6,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Side::Red => "red",
            Side::Green => "green",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Notation letter, always uppercase.
    pub fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'P' => Some(PieceKind::Pawn),
            'N' => Some(PieceKind::Knight),
            'B' => Some(PieceKind::Bishop),
            'R' => Some(PieceKind::Rook),
            'Q' => Some(PieceKind::Queen),
            'K' => Some(PieceKind::King),
            _ => None,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "Pawn",
            PieceKind::Knight => "Knight",
            PieceKind::Bishop => "Bishop",
            PieceKind::Rook => "Rook",
            PieceKind::Queen => "Queen",
            PieceKind::King => "King",
        }
    }
}

impl fmt::Display for PieceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Index of a piece in the game's piece list. Stable for the whole game.
///
/// Only a [`Game`](crate::Game) hands these out:
///
/// ```compile_fail
/// let id = chess_duel_core::PieceId(99);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PieceId(pub(crate) usize);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    id: PieceId,
    kind: PieceKind,
    side: Side,
    square: Option<Square>,
    has_moved: bool,
    two_square_opening_turn: Option<u32>,
}

impl Piece {
    pub fn new(id: PieceId, kind: PieceKind, side: Side, square: Square) -> Self {
        Self {
            id,
            kind,
            side,
            square: Some(square),
            has_moved: false,
            two_square_opening_turn: None,
        }
    }

    pub fn id(&self) -> PieceId {
        self.id
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn side(&self) -> Side {
        self.side
    }

    /// `None` once captured.
    pub fn square(&self) -> Option<Square> {
        self.square
    }

    pub fn is_active(&self) -> bool {
        self.square.is_some()
    }

    pub fn has_moved(&self) -> bool {
        self.has_moved
    }

    /// Turn on which this pawn made its two-square opening, if it has.
    pub fn two_square_opening_turn(&self) -> Option<u32> {
        self.two_square_opening_turn
    }

    pub(crate) fn clear_square(&mut self) {
        self.square = None;
    }

    pub(crate) fn relocate(&mut self, to: Square) {
        self.square = Some(to);
        self.has_moved = true;
    }

    /// Only the first call has any effect.
    pub(crate) fn record_two_square_opening(&mut self, turn: u32) {
        if self.two_square_opening_turn.is_none() {
            self.two_square_opening_turn = Some(turn);
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub side: Side,
    pub name: String,
    pub king: PieceId,
}

impl Player {
    pub fn direction(&self) -> i32 {
        self.side.direction()
    }
}
