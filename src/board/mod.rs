//! Board representation for Gomoku

pub mod board;
pub mod piece;

#[cfg(test)]
mod tests;

// Re-exports
pub use board::{Board, Render};
pub use piece::Piece;

use std::fmt;
use std::str::FromStr;

use crate::error::GameError;

/// Default board size (15x15)
pub const DEFAULT_BOARD_SIZE: usize = 15;
/// Default number of stones in a row needed to win
pub const DEFAULT_WIN_LENGTH: usize = 5;
/// Largest board accepted from settings; labels stay within three columns
pub const MAX_BOARD_SIZE: usize = 99;

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stone {
    #[default]
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
        }
    }

    /// Lowercase color name, as typed by players
    pub fn name(self) -> &'static str {
        match self {
            Stone::Black => "black",
            Stone::White => "white",
        }
    }

    /// Glyph drawn for this color on a text board
    pub fn glyph(self) -> &'static str {
        match self {
            Stone::Black => "●",
            Stone::White => "○",
        }
    }
}

impl fmt::Display for Stone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Parses a color token, ignoring case and surrounding whitespace.
impl FromStr for Stone {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        if token.eq_ignore_ascii_case("black") {
            Ok(Stone::Black)
        } else if token.eq_ignore_ascii_case("white") {
            Ok(Stone::White)
        } else {
            Err(GameError::InvalidColor(s.to_string()))
        }
    }
}

/// Position on the board, 0-indexed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

impl Pos {
    #[inline]
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Translate 1-indexed coordinates into a position on a `size` board.
    ///
    /// Returns `None` when either coordinate falls outside `1..=size`.
    pub fn from_one_based(row: i64, col: i64, size: usize) -> Option<Self> {
        if Self::is_valid(row.saturating_sub(1), col.saturating_sub(1), size) {
            Some(Self::new(row as usize - 1, col as usize - 1))
        } else {
            None
        }
    }

    #[inline]
    pub fn to_index(self, size: usize) -> usize {
        self.row * size + self.col
    }

    #[inline]
    pub fn is_valid(row: i64, col: i64, size: usize) -> bool {
        let size = size as i64;
        row >= 0 && row < size && col >= 0 && col < size
    }

    /// Step by `(dr, dc)`, staying on a `size` board
    #[inline]
    pub fn offset(self, dr: i64, dc: i64, size: usize) -> Option<Pos> {
        let row = self.row as i64 + dr;
        let col = self.col as i64 + dc;
        if Self::is_valid(row, col, size) {
            Some(Pos::new(row as usize, col as usize))
        } else {
            None
        }
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        (self.row, self.col).cmp(&(other.row, other.col))
    }
}
