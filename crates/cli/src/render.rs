//! Text rendering of a board snapshot

use chess_duel_core::board::{Square, BOARD_SIZE};
use chess_duel_core::{BoardSnapshot, PieceKind, Side, SquareView};
use colored::{ColoredString, Colorize};

const SEPARATOR: &str = "------------------------------------";

fn column_header() -> String {
    let mut header = String::from("   ");
    for col in 0..BOARD_SIZE {
        header.push_str(&format!(" {} ", (b'A' + col as u8) as char));
    }
    header
}

fn tint(text: &str, side: Side) -> ColoredString {
    match side {
        Side::Red => text.red(),
        Side::Green => text.green(),
    }
}

/// Pawns are drawn lowercase so they stand apart from the major pieces.
fn glyph(view: &SquareView) -> char {
    if view.kind == PieceKind::Pawn {
        view.letter.to_ascii_lowercase()
    } else {
        view.letter
    }
}

fn cell(view: Option<SquareView>, dark: bool) -> ColoredString {
    let cell = match view {
        Some(view) => tint(&format!(" {} ", glyph(&view)), view.side),
        None => "   ".white(),
    };
    if dark {
        cell.on_blue()
    } else {
        cell.on_white()
    }
}

pub fn board(snapshot: &BoardSnapshot) -> String {
    let header = column_header();
    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');

    for row in 0..BOARD_SIZE {
        let rank_label = format!(" {} ", BOARD_SIZE - row);
        out.push_str(&rank_label);
        for col in 0..BOARD_SIZE {
            let square = Square::at(row, col);
            let dark = (row + col) % 2 == 1;
            out.push_str(&cell(snapshot.at(square), dark).to_string());
        }
        out.push_str(&rank_label);
        out.push('\n');
    }
    out.push_str(&header);

    for captured in &snapshot.captured {
        if captured.kinds.is_empty() {
            continue;
        }
        out.push('\n');
        for kind in &captured.kinds {
            let letter = if *kind == PieceKind::Pawn {
                'p'
            } else {
                kind.letter()
            };
            out.push_str(&tint(&format!("{} ", letter), captured.side).to_string());
        }
    }
    out.push('\n');
    out.push_str(SEPARATOR);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chess_duel_core::Game;

    #[test]
    fn test_plain_board_layout() {
        colored::control::set_override(false);
        let text = board(&Game::new().snapshot());
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "    A  B  C  D  E  F  G  H ");
        assert_eq!(lines[1], " 8  R  N  B  Q  K  B  N  R  8 ");
        assert_eq!(lines[2], " 7  p  p  p  p  p  p  p  p  7 ");
        assert_eq!(lines[4], " 5                          5 ");
        assert_eq!(lines[8], " 1  R  N  B  Q  K  B  N  R  1 ");
        assert_eq!(lines.last(), Some(&SEPARATOR));
    }

    #[test]
    fn test_captured_pieces_listed() {
        colored::control::set_override(false);
        let mut game = Game::new();
        game.play("Pe4").unwrap();
        game.play("Pd5").unwrap();
        game.play("Pd5").unwrap();

        let text = board(&game.snapshot());
        assert!(text.contains("\np \n"));
    }
}
