//! Short move notation: piece letter, optional source file or rank, target square

use std::fmt;
use std::str::FromStr;

use crate::board::Square;
use crate::error::Error;
use crate::pieces::PieceKind;

/// A parsed move request, not yet checked against any position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveIntent {
    pub kind: PieceKind,
    /// Source row, when a rank disambiguator was given.
    pub from_row: Option<usize>,
    /// Source column, when a file disambiguator was given.
    pub from_col: Option<usize>,
    pub to: Square,
}

impl MoveIntent {
    /// Whether a piece standing on `square` fits the disambiguator.
    pub fn matches_source(&self, square: Square) -> bool {
        self.from_row.map_or(true, |row| row == square.row())
            && self.from_col.map_or(true, |col| col == square.col())
    }
}

/// Parses `Nf3`-style input: three or four characters, case-insensitive.
///
/// Returns `None` for anything else; callers treat that as an invalid entry.
pub fn parse_notation(text: &str) -> Option<MoveIntent> {
    let chars: Vec<char> = text.chars().collect();
    let len = chars.len();
    if !(3..=4).contains(&len) {
        return None;
    }

    let kind = PieceKind::from_letter(chars[0])?;
    let to_col = Square::col_from_file(chars[len - 2])?;
    let to_row = Square::row_from_rank(chars[len - 1])?;
    let to = Square::new(to_row, to_col)?;

    let mut intent = MoveIntent {
        kind,
        from_row: None,
        from_col: None,
        to,
    };
    if len == 4 {
        let hint = chars[1];
        if hint.is_ascii_digit() {
            intent.from_row = Some(Square::row_from_rank(hint)?);
        } else {
            intent.from_col = Some(Square::col_from_file(hint)?);
        }
    }
    Some(intent)
}

impl FromStr for MoveIntent {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_notation(s).ok_or_else(|| Error::InvalidNotation(s.to_string()))
    }
}

impl fmt::Display for MoveIntent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind.letter())?;
        if let Some(file) = self.from_col.and_then(Square::file_of_col) {
            write!(f, "{}", file)?;
        }
        if let Some(rank) = self.from_row.and_then(Square::rank_of_row) {
            write!(f, "{}", rank)?;
        }
        write!(f, "{}", self.to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_move() {
        let intent = parse_notation("Nf3").unwrap();
        assert_eq!(intent.kind, PieceKind::Knight);
        assert_eq!(intent.to, Square::new(5, 5).unwrap());
        assert_eq!(intent.from_row, None);
        assert_eq!(intent.from_col, None);
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!(parse_notation("nF3"), parse_notation("Nf3"));
        assert_eq!(parse_notation("pe4").unwrap().kind, PieceKind::Pawn);
        assert_eq!(parse_notation("QH8").unwrap().to, Square::new(0, 7).unwrap());
    }

    #[test]
    fn test_parse_disambiguators() {
        let by_file = parse_notation("Nbd7").unwrap();
        assert_eq!(by_file.from_col, Some(1));
        assert_eq!(by_file.from_row, None);
        assert_eq!(by_file.to.to_string(), "d7");

        let by_rank = parse_notation("R1a3").unwrap();
        assert_eq!(by_rank.from_row, Some(7));
        assert_eq!(by_rank.from_col, None);
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        for bad in [
            "", "N", "Nf", "Nbd7x", "Xe4", "Ni3", "Ne9", "Ne0", "Nxe3", "N9e3", "N0e3", "e4",
            "Ne3 ",
        ] {
            assert!(parse_notation(bad).is_none(), "{bad:?} should not parse");
        }
        assert!(matches!(
            "Zz9".parse::<MoveIntent>(),
            Err(Error::InvalidNotation(_))
        ));
    }

    #[test]
    fn test_display_uses_canonical_case() {
        assert_eq!(parse_notation("nge3").unwrap().to_string(), "Nge3");
        assert_eq!(parse_notation("r1A3").unwrap().to_string(), "R1a3");

        let off_board = MoveIntent {
            from_col: Some(9),
            from_row: Some(8),
            ..parse_notation("Ne3").unwrap()
        };
        assert_eq!(off_board.to_string(), "Ne3");
    }

    #[test]
    fn test_source_filter() {
        let intent = parse_notation("Nge3").unwrap();
        assert!(intent.matches_source("g2".parse().unwrap()));
        assert!(!intent.matches_source("c2".parse().unwrap()));
        assert!(parse_notation("Ne3")
            .unwrap()
            .matches_source("c2".parse().unwrap()));
    }
}
