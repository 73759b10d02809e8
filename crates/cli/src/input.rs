//! Parsing of typed commands

use chess_duel_core::board::{Square, BOARD_SIZE};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Quit,
    Help,
    /// Print the board snapshot as JSON.
    Json,
    /// Select the piece on a square, given as `col row`.
    Select(Square),
    /// Anything else is handed to the engine as move notation.
    Notation(String),
}

impl Command {
    /// `None` for blank lines and malformed coordinates.
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        match line.to_ascii_lowercase().as_str() {
            "quit" | "exit" | "q" => return Some(Command::Quit),
            "help" | "?" => return Some(Command::Help),
            "json" => return Some(Command::Json),
            _ => {}
        }
        if line.split_whitespace().count() == 2 {
            return parse_coords(line).map(Command::Select);
        }
        Some(Command::Notation(line.to_string()))
    }
}

/// Accepts an integer in `0..8`.
pub fn validate_coord(text: &str) -> Option<usize> {
    let value: usize = text.trim().parse().ok()?;
    (value < BOARD_SIZE).then_some(value)
}

/// Parses `col row`, both in `0..8`.
pub fn parse_coords(line: &str) -> Option<Square> {
    let mut parts = line.split_whitespace();
    let col = validate_coord(parts.next()?)?;
    let row = validate_coord(parts.next()?)?;
    if parts.next().is_some() {
        return None;
    }
    Square::new(row, col)
}
