//! Board coordinates

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

pub const BOARD_SIZE: usize = 8;

pub(crate) const FILES: &str = "ABCDEFGH";

/// A square on the 8x8 board. Row 0 is rank 8, row 7 is rank 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawSquare")]
pub struct Square {
    row: u8,
    col: u8,
}

/// Unchecked wire form; only reaches [`Square`] through [`Square::new`].
#[derive(Deserialize)]
struct RawSquare {
    row: usize,
    col: usize,
}

impl TryFrom<RawSquare> for Square {
    type Error = String;

    fn try_from(raw: RawSquare) -> Result<Self, Self::Error> {
        Square::new(raw.row, raw.col)
            .ok_or_else(|| format!("square ({}, {}) is off the board", raw.row, raw.col))
    }
}

impl Square {
    /// Returns `None` if either coordinate is outside `0..8`.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// # Panics
    ///
    /// Panics if either coordinate is outside `0..8`.
    pub const fn at(row: usize, col: usize) -> Self {
        assert!(row < BOARD_SIZE && col < BOARD_SIZE, "square off the board");
        Self {
            row: row as u8,
            col: col as u8,
        }
    }

    pub fn row(self) -> usize {
        self.row as usize
    }

    pub fn col(self) -> usize {
        self.col as usize
    }

    /// Steps by a signed row/column delta, staying on the board.
    pub fn offset(self, d_row: i32, d_col: i32) -> Option<Self> {
        let row = self.row as i32 + d_row;
        let col = self.col as i32 + d_col;
        if row < 0 || col < 0 {
            return None;
        }
        Self::new(row as usize, col as usize)
    }

    /// Iterates all 64 squares, row by row.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).filter_map(move |col| Square::new(row, col)))
    }

    /// Row for a rank character `'1'..='8'`.
    pub fn row_from_rank(rank: char) -> Option<usize> {
        let digit = rank.to_digit(10)? as usize;
        if (1..=BOARD_SIZE).contains(&digit) {
            Some(BOARD_SIZE - digit)
        } else {
            None
        }
    }

    /// Column for a file letter, either case.
    pub fn col_from_file(file: char) -> Option<usize> {
        FILES.find(file.to_ascii_uppercase())
    }

    /// Lowercase file letter for a column in `0..8`.
    pub fn file_of_col(col: usize) -> Option<char> {
        FILES
            .chars()
            .nth(col)
            .map(|file| file.to_ascii_lowercase())
    }

    /// Rank number for a row in `0..8`.
    pub fn rank_of_row(row: usize) -> Option<usize> {
        (row < BOARD_SIZE).then(|| BOARD_SIZE - row)
    }

    pub fn rank(self) -> usize {
        BOARD_SIZE - self.row as usize
    }

    pub fn file(self) -> char {
        FILES.as_bytes()[self.col as usize].to_ascii_lowercase() as char
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.file(), self.rank())
    }
}

impl FromStr for Square {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidNotation(s.to_string());
        let mut chars = s.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        let col = Square::col_from_file(file).ok_or_else(invalid)?;
        let row = Square::row_from_rank(rank).ok_or_else(invalid)?;
        Square::new(row, col).ok_or_else(invalid)
    }
}
