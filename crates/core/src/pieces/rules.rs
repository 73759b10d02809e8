//! Movement rules, one function per piece kind

use super::types::{Piece, PieceId, PieceKind};
use crate::board::{Board, Square};

/// How a legal move interacts with the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Quiet,
    /// A pawn's first move advancing two rows. Executing it records the
    /// current turn on the pawn.
    TwoSquareOpening,
    Capture,
    /// The captured pawn sits beside the mover, not on the destination.
    EnPassant,
}

/// A destination that passed validation, with whatever it would capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LegalMove {
    pub piece: PieceId,
    pub from: Square,
    pub to: Square,
    pub kind: MoveKind,
    pub captured: Option<PieceId>,
}

/// Read-only view of the position that the rules evaluate against.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub board: &'a Board,
    pub pieces: &'a [Piece],
    pub turn: u32,
}

impl<'a> RuleContext<'a> {
    pub fn occupant(&self, square: Square) -> Option<&'a Piece> {
        self.board.occupant(square).map(|id| &self.pieces[id.0])
    }
}

struct Verdict {
    kind: MoveKind,
    captured: Option<PieceId>,
}

impl Verdict {
    /// Plain move onto `target`, capturing it if present.
    fn onto(target: Option<&Piece>) -> Self {
        match target {
            Some(t) => Verdict {
                kind: MoveKind::Capture,
                captured: Some(t.id()),
            },
            None => Verdict {
                kind: MoveKind::Quiet,
                captured: None,
            },
        }
    }
}

/// Checks whether `piece` may move to `to` in the given position.
///
/// Returns `None` for an illegal move, including moves of captured pieces,
/// null moves and moves onto a square held by the mover's own side. Nothing
/// is mutated; a two-square opening is reported through [`MoveKind`] and
/// recorded only when the move is executed.
pub fn validate_move(ctx: &RuleContext<'_>, piece: &Piece, to: Square) -> Option<LegalMove> {
    let from = piece.square()?;
    if from == to {
        return None;
    }
    let target = ctx.occupant(to);
    if target.is_some_and(|t| t.side() == piece.side()) {
        return None;
    }

    let verdict = match piece.kind() {
        PieceKind::Pawn => pawn_rule(ctx, piece, from, to, target),
        PieceKind::Knight => knight_rule(from, to, target),
        PieceKind::Bishop => diagonal_rule(ctx, from, to, target),
        PieceKind::Rook => line_rule(ctx, from, to, target),
        PieceKind::Queen => {
            line_rule(ctx, from, to, target).or_else(|| diagonal_rule(ctx, from, to, target))
        }
        PieceKind::King => king_rule(from, to, target),
    }?;

    Some(LegalMove {
        piece: piece.id(),
        from,
        to,
        kind: verdict.kind,
        captured: verdict.captured,
    })
}

/// Every square `piece` could legally move to, row by row.
pub fn legal_destinations(ctx: &RuleContext<'_>, piece: &Piece) -> Vec<LegalMove> {
    Square::all()
        .filter_map(|to| validate_move(ctx, piece, to))
        .collect()
}

fn delta(from: Square, to: Square) -> (i32, i32) {
    (
        to.row() as i32 - from.row() as i32,
        to.col() as i32 - from.col() as i32,
    )
}

fn pawn_rule(
    ctx: &RuleContext<'_>,
    pawn: &Piece,
    from: Square,
    to: Square,
    target: Option<&Piece>,
) -> Option<Verdict> {
    let direction = pawn.side().direction();
    let (d_row, d_col) = delta(from, to);

    if d_col == 0 && d_row == direction && target.is_none() {
        return Some(Verdict::onto(None));
    }

    if d_col == 0
        && !pawn.has_moved()
        && pawn.two_square_opening_turn().is_none()
        && d_row == 2 * direction
        && target.is_none()
        && from
            .offset(direction, 0)
            .is_some_and(|passed| ctx.board.is_empty(passed))
    {
        return Some(Verdict {
            kind: MoveKind::TwoSquareOpening,
            captured: None,
        });
    }

    if d_col.abs() != 1 || d_row != direction {
        return None;
    }

    if target.is_some() {
        return Some(Verdict::onto(target));
    }

    let beside = Square::new(from.row(), to.col())?;
    let victim = ctx.occupant(beside)?;
    let just_opened = victim
        .two_square_opening_turn()
        .is_some_and(|opened| opened + 1 == ctx.turn);
    if victim.side() != pawn.side() && victim.kind() == PieceKind::Pawn && just_opened {
        return Some(Verdict {
            kind: MoveKind::EnPassant,
            captured: Some(victim.id()),
        });
    }

    None
}

fn knight_rule(from: Square, to: Square, target: Option<&Piece>) -> Option<Verdict> {
    let (d_row, d_col) = delta(from, to);
    match (d_row.abs(), d_col.abs()) {
        (1, 2) | (2, 1) => Some(Verdict::onto(target)),
        _ => None,
    }
}

fn king_rule(from: Square, to: Square, target: Option<&Piece>) -> Option<Verdict> {
    let (d_row, d_col) = delta(from, to);
    if d_row.abs() <= 1 && d_col.abs() <= 1 {
        Some(Verdict::onto(target))
    } else {
        None
    }
}

fn diagonal_rule(
    ctx: &RuleContext<'_>,
    from: Square,
    to: Square,
    target: Option<&Piece>,
) -> Option<Verdict> {
    let (d_row, d_col) = delta(from, to);
    if d_row == 0 || d_row.abs() != d_col.abs() {
        return None;
    }
    path_is_clear(ctx.board, from, to).then(|| Verdict::onto(target))
}

fn line_rule(
    ctx: &RuleContext<'_>,
    from: Square,
    to: Square,
    target: Option<&Piece>,
) -> Option<Verdict> {
    let (d_row, d_col) = delta(from, to);
    if (d_row == 0) == (d_col == 0) {
        return None;
    }
    path_is_clear(ctx.board, from, to).then(|| Verdict::onto(target))
}

/// Walks from `from` towards `to` one step at a time, stepping by the sign
/// of each delta, and reports whether every square strictly between them is
/// empty. The endpoints are not inspected.
fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    let (d_row, d_col) = delta(from, to);
    let step = (d_row.signum(), d_col.signum());
    debug_assert!(step != (0, 0), "tracing a null move from {from}");

    let mut current = from;
    loop {
        current = match current.offset(step.0, step.1) {
            Some(next) => next,
            None => return false,
        };
        if current == to {
            return true;
        }
        if !board.is_empty(current) {
            return false;
        }
    }
}
