//! Piece model and per-kind movement rules

mod rules;
mod types;

pub use rules::{legal_destinations, validate_move, LegalMove, MoveKind, RuleContext};
pub use types::*;
