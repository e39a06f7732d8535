//! Pieces placed on the board

use std::fmt;
use std::str::FromStr;

use super::Stone;
use crate::error::GameError;

/// A black or white piece occupying one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    color: Stone,
}

impl Piece {
    #[inline]
    pub fn new(color: Stone) -> Self {
        Self { color }
    }

    /// Build a piece from a text token such as `" White "`.
    pub fn from_token(token: &str) -> Result<Self, GameError> {
        token.parse::<Stone>().map(Self::new)
    }

    #[inline]
    pub fn color(&self) -> Stone {
        self.color
    }

    /// Canonical glyph for the piece's color
    #[inline]
    pub fn display(&self) -> &'static str {
        self.color.glyph()
    }
}

impl From<Stone> for Piece {
    fn from(color: Stone) -> Self {
        Self::new(color)
    }
}

impl FromStr for Piece {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_token(s)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}
