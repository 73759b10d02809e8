//! Square -> occupant index, derived from the piece list

use super::square::{Square, BOARD_SIZE};
use crate::pieces::{Piece, PieceId};

/// Projection of the active pieces onto the 8x8 grid.
///
/// Never patched in place: [`Board::rebuild`] recomputes it from the full
/// piece list after every change.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    cells: [[Option<PieceId>; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Builds the index from every active piece.
    ///
    /// # Panics
    ///
    /// Panics if two active pieces claim the same square.
    pub fn rebuild(pieces: &[Piece]) -> Self {
        let mut board = Board::default();
        for piece in pieces {
            let Some(square) = piece.square() else {
                continue;
            };
            let cell = &mut board.cells[square.row()][square.col()];
            assert!(
                cell.is_none(),
                "two active pieces on {square}: {:?} and {:?}",
                cell,
                piece.id()
            );
            *cell = Some(piece.id());
        }
        board
    }

    /// Occupant at raw coordinates.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is outside `0..8`.
    pub fn occupant_at(&self, row: usize, col: usize) -> Option<PieceId> {
        self.cells[row][col]
    }

    pub fn occupant(&self, square: Square) -> Option<PieceId> {
        self.cells[square.row()][square.col()]
    }

    pub fn is_empty(&self, square: Square) -> bool {
        self.occupant(square).is_none()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::{PieceKind, Side};

    fn piece(id: usize, row: usize, col: usize) -> Piece {
        Piece::new(
            PieceId(id),
            PieceKind::Rook,
            Side::Red,
            Square::new(row, col).unwrap(),
        )
    }

    #[test]
    fn test_rebuild_skips_captured_pieces() {
        let mut captured = piece(1, 3, 3);
        captured.clear_square();
        let pieces = vec![piece(0, 0, 0), captured];

        let board = Board::rebuild(&pieces);
        assert_eq!(board.occupant_at(0, 0), Some(PieceId(0)));
        assert_eq!(board.occupant_at(3, 3), None);
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    #[should_panic]
    fn test_out_of_range_fails_fast() {
        let board = Board::default();
        board.occupant_at(8, 0);
    }

    #[test]
    #[should_panic(expected = "two active pieces")]
    fn test_double_occupancy_is_rejected() {
        Board::rebuild(&[piece(0, 2, 2), piece(1, 2, 2)]);
    }
}
