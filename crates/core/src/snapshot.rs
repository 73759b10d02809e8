//! Read-only views for renderers and other front ends

use serde::Serialize;

use crate::board::{Square, BOARD_SIZE};
use crate::game::Game;
use crate::pieces::{PieceKind, Side};

/// What stands on one square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SquareView {
    pub letter: char,
    pub kind: PieceKind,
    pub player: u8,
    pub side: Side,
    pub active: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CapturedView {
    pub side: Side,
    pub kinds: Vec<PieceKind>,
}

/// The whole board plus turn state. `squares` is row-major, row 0 first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSnapshot {
    pub squares: Vec<Option<SquareView>>,
    pub current_player: Side,
    pub turn: u32,
    pub winner: Option<Side>,
    pub captured: Vec<CapturedView>,
}

impl BoardSnapshot {
    pub fn at(&self, square: Square) -> Option<SquareView> {
        self.squares[square.row() * BOARD_SIZE + square.col()]
    }
}

impl Game {
    pub fn snapshot(&self) -> BoardSnapshot {
        let squares = Square::all()
            .map(|square| {
                self.occupant(square).map(|piece| SquareView {
                    letter: piece.kind().letter(),
                    kind: piece.kind(),
                    player: piece.side().id(),
                    side: piece.side(),
                    active: piece.is_active(),
                })
            })
            .collect();

        let captured = Side::BOTH
            .into_iter()
            .map(|side| CapturedView {
                side,
                kinds: self.captured(side).iter().map(|p| p.kind()).collect(),
            })
            .collect();

        BoardSnapshot {
            squares,
            current_player: self.current_side(),
            turn: self.turn(),
            winner: self.winner(),
            captured,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_of_starting_position() {
        let snapshot = Game::new().snapshot();
        assert_eq!(snapshot.squares.len(), 64);
        assert_eq!(snapshot.squares.iter().flatten().count(), 32);

        let king = snapshot.at("e8".parse().unwrap()).unwrap();
        assert_eq!(king.letter, 'K');
        assert_eq!(king.player, 0);
        assert!(king.active);
        assert!(snapshot.at("e4".parse().unwrap()).is_none());
        assert_eq!(snapshot.current_player, Side::Green);
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let mut game = Game::new();
        game.play("Nf3").unwrap();
        let json = serde_json::to_value(game.snapshot()).unwrap();

        assert_eq!(json["current_player"], "red");
        assert_eq!(json["turn"], 2);
        assert!(json["winner"].is_null());
        assert_eq!(json["squares"][5 * 8 + 5]["letter"], "N");
        assert_eq!(json["squares"][5 * 8 + 5]["side"], "green");
        assert_eq!(json["captured"][0]["kinds"].as_array().unwrap().len(), 0);
    }
}
