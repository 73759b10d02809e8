//! Game state, turn alternation and win detection

use std::fmt;
use tracing::{debug, info};

use crate::board::{Board, Square, BOARD_SIZE};
use crate::config::GameConfig;
use crate::error::{Error, Result};
use crate::pieces::{
    self, LegalMove, MoveKind, Piece, PieceId, PieceKind, Player, RuleContext, Side,
};

const STARTING_TURN: u32 = 1;
const KING_COL: usize = 4;

/// Back-rank layout except the king, which every game starts with.
const BACK_RANK: [(usize, PieceKind); 7] = [
    (0, PieceKind::Rook),
    (7, PieceKind::Rook),
    (1, PieceKind::Knight),
    (6, PieceKind::Knight),
    (2, PieceKind::Bishop),
    (5, PieceKind::Bishop),
    (3, PieceKind::Queen),
];

/// A single two-player game.
///
/// Owns every piece ever created. Captured pieces stay in the list with no
/// square, so [`Game::captured`] can report them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    players: [Player; 2],
    pieces: Vec<Piece>,
    board: Board,
    current: Side,
    turn: u32,
    winner: Option<Side>,
    selected: Option<PieceId>,
}

/// Result of an executed move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub side: Side,
    pub player: String,
    pub kind: PieceKind,
    pub played: LegalMove,
    pub captured_kind: Option<PieceKind>,
    pub winner: Option<Side>,
}

impl fmt::Display for MoveOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}'s {} moved from {} to {}",
            self.player, self.kind, self.played.from, self.played.to
        )?;
        match (self.played.kind, self.captured_kind) {
            (MoveKind::EnPassant, _) => write!(f, ", capturing a Pawn en passant.")?,
            (_, Some(kind)) => write!(f, ", capturing a {}.", kind)?,
            _ => write!(f, ".")?,
        }
        if self.winner.is_some() {
            write!(f, " The king has fallen!")?;
        }
        Ok(())
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Standard 32-piece setup with the default configuration.
    pub fn new() -> Self {
        Self::standard(&GameConfig::default())
    }

    pub fn standard(config: &GameConfig) -> Self {
        let mut game = Self::with_kings(config);
        for side in Side::BOTH {
            for col in 0..BOARD_SIZE {
                game.push_piece(PieceKind::Pawn, side, Square::at(side.pawn_row(), col));
            }
            for (col, kind) in BACK_RANK {
                game.push_piece(kind, side, Square::at(side.back_row(), col));
            }
        }
        game.board = Board::rebuild(&game.pieces);
        game
    }

    /// A game holding only the two kings, for building custom positions
    /// with [`Game::add_piece`].
    pub fn with_kings(config: &GameConfig) -> Self {
        let mut pieces = Vec::with_capacity(32);
        let mut players = Side::BOTH.map(|side| Player {
            side,
            name: config.name_of(side).to_string(),
            king: PieceId(0),
        });
        for player in &mut players {
            let id = PieceId(pieces.len());
            let home = Square::at(player.side.back_row(), KING_COL);
            pieces.push(Piece::new(id, PieceKind::King, player.side, home));
            player.king = id;
        }

        let board = Board::rebuild(&pieces);
        Self {
            players,
            pieces,
            board,
            current: config.first_to_move,
            turn: STARTING_TURN,
            winner: None,
            selected: None,
        }
    }

    /// Adds a piece to an unoccupied square. Each side keeps the single king
    /// it was created with.
    pub fn add_piece(&mut self, kind: PieceKind, side: Side, square: Square) -> Result<PieceId> {
        if self.is_over() {
            return Err(Error::GameOver);
        }
        if kind == PieceKind::King {
            return Err(Error::DuplicateKing);
        }
        if !self.board.is_empty(square) {
            return Err(Error::SquareOccupied(square));
        }
        let id = self.push_piece(kind, side, square);
        self.board = Board::rebuild(&self.pieces);
        Ok(id)
    }

    fn push_piece(&mut self, kind: PieceKind, side: Side, square: Square) -> PieceId {
        let id = PieceId(self.pieces.len());
        self.pieces.push(Piece::new(id, kind, side, square));
        id
    }

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    pub fn player(&self, side: Side) -> &Player {
        &self.players[side.id() as usize]
    }

    pub fn current_side(&self) -> Side {
        self.current
    }

    pub fn current_player(&self) -> &Player {
        self.player(self.current)
    }

    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Winner as of the last executed move.
    pub fn winner(&self) -> Option<Side> {
        self.winner
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    pub fn selected(&self) -> Option<PieceId> {
        self.selected
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Every piece ever created, in creation order.
    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn piece(&self, id: PieceId) -> &Piece {
        &self.pieces[id.0]
    }

    pub fn king(&self, side: Side) -> &Piece {
        self.piece(self.player(side).king)
    }

    pub fn occupant(&self, square: Square) -> Option<&Piece> {
        self.rule_context().occupant(square)
    }

    /// Pieces of `side` that have been captured, in creation order.
    pub fn captured(&self, side: Side) -> Vec<&Piece> {
        self.pieces
            .iter()
            .filter(|p| p.side() == side && !p.is_active())
            .collect()
    }

    pub fn rule_context(&self) -> RuleContext<'_> {
        RuleContext {
            board: &self.board,
            pieces: &self.pieces,
            turn: self.turn,
        }
    }

    pub fn validate_move(&self, id: PieceId, to: Square) -> Option<LegalMove> {
        pieces::validate_move(&self.rule_context(), self.piece(id), to)
    }

    pub fn legal_destinations(&self, id: PieceId) -> Vec<LegalMove> {
        pieces::legal_destinations(&self.rule_context(), self.piece(id))
    }

    /// Selects the current player's piece on `square` for a later
    /// [`Game::move_selected_to`].
    pub fn select_piece(&mut self, square: Square) -> Result<PieceId> {
        if self.is_over() {
            return Err(Error::GameOver);
        }
        let piece = self.occupant(square).ok_or(Error::NoPiece(square))?;
        if piece.side() != self.current {
            return Err(Error::NotYourTurn(square));
        }
        let id = piece.id();
        if self.legal_destinations(id).is_empty() {
            return Err(Error::NoLegalMoves {
                kind: piece.kind(),
                square,
            });
        }

        debug!(piece = ?id, %square, side = self.current.as_str(), "piece selected");
        self.selected = Some(id);
        Ok(id)
    }

    /// Abandons a pending selection without touching the position.
    pub fn clear_selection(&mut self) -> Option<PieceId> {
        self.selected.take()
    }

    /// Moves the selected piece. An illegal destination leaves the game and
    /// the selection untouched.
    pub fn move_selected_to(&mut self, to: Square) -> Result<MoveOutcome> {
        if self.is_over() {
            return Err(Error::GameOver);
        }
        let id = self.selected.ok_or(Error::NoSelection)?;
        let Some(legal) = self.validate_move(id, to) else {
            debug!(piece = ?id, %to, "rejected illegal destination");
            return Err(Error::IllegalMove);
        };
        Ok(self.execute(legal))
    }

    /// Applies a validated move: capture first, then relocation, then the
    /// turn passes and the winner is recomputed.
    pub(crate) fn execute(&mut self, legal: LegalMove) -> MoveOutcome {
        let side = self.current;
        let captured_kind = legal.captured.map(|victim| {
            let victim = &mut self.pieces[victim.0];
            victim.clear_square();
            info!(
                captured = %victim.kind(),
                owner = victim.side().as_str(),
                "piece captured"
            );
            victim.kind()
        });

        let mover = &mut self.pieces[legal.piece.0];
        mover.relocate(legal.to);
        if legal.kind == MoveKind::TwoSquareOpening {
            mover.record_two_square_opening(self.turn);
        }
        let kind = mover.kind();

        self.selected = None;
        self.board = Board::rebuild(&self.pieces);
        info!(
            turn = self.turn,
            side = side.as_str(),
            piece = %kind,
            from = %legal.from,
            to = %legal.to,
            "move executed"
        );
        self.turn += 1;
        self.current = side.opponent();
        self.winner = self.check_winner();
        if let Some(winner) = self.winner {
            info!(winner = winner.as_str(), "king captured, game over");
        }

        MoveOutcome {
            side,
            player: self.player(side).name.clone(),
            kind,
            played: legal,
            captured_kind,
            winner: self.winner,
        }
    }

    /// Recomputes the winner from the kings: a side wins once the opposing
    /// king has been captured.
    pub fn check_winner(&self) -> Option<Side> {
        let red_down = !self.king(Side::Red).is_active();
        let green_down = !self.king(Side::Green).is_active();
        debug_assert!(!(red_down && green_down), "both kings captured");
        if red_down {
            Some(Side::Green)
        } else if green_down {
            Some(Side::Red)
        } else {
            None
        }
    }
}
