//! Turning a move intent into a concrete move for the side to play

use tracing::{debug, warn};

use super::parser::MoveIntent;
use crate::error::{Error, Result};
use crate::game::{Game, MoveOutcome};
use crate::pieces::LegalMove;

impl Game {
    /// Legal moves of the side to play that fit `intent`.
    pub fn candidates(&self, intent: &MoveIntent) -> Vec<LegalMove> {
        let ctx = self.rule_context();
        self.pieces()
            .iter()
            .filter(|p| p.side() == self.current_side() && p.kind() == intent.kind)
            .filter(|p| p.square().is_some_and(|sq| intent.matches_source(sq)))
            .filter_map(|p| crate::pieces::validate_move(&ctx, p, intent.to))
            .collect()
    }

    /// Executes the single move matching `intent`.
    ///
    /// Fails with [`Error::IllegalMove`] when nothing matches and with
    /// [`Error::Ambiguous`] when several pieces could make the move; neither
    /// failure touches the game.
    pub fn resolve(&mut self, intent: &MoveIntent) -> Result<MoveOutcome> {
        if self.is_over() {
            return Err(Error::GameOver);
        }
        let mut found = self.candidates(intent);
        debug!(%intent, candidates = found.len(), "resolving notation");
        match found.len() {
            0 => Err(Error::IllegalMove),
            1 => {
                let legal = found.remove(0);
                Ok(self.execute(legal))
            }
            n => {
                warn!(%intent, candidates = n, "ambiguous move needs a rank or file");
                Err(Error::Ambiguous(n))
            }
        }
    }

    /// Parses and resolves `text` in one step.
    pub fn play(&mut self, text: &str) -> Result<MoveOutcome> {
        let intent: MoveIntent = text.parse()?;
        self.resolve(&intent)
    }
}
