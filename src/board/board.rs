//! Board structure with turn tracking

use std::fmt;

use tracing::{debug, instrument};

use super::{Piece, Pos, Stone, DEFAULT_BOARD_SIZE, DEFAULT_WIN_LENGTH, MAX_BOARD_SIZE};
use crate::config::GameConfig;
use crate::error::GameError;
use crate::rules::win::{find_winning_line, WinningLine};

/// Game board: a square grid of cells, the player to move and the win length
///
/// Placement does not check whose turn it is. Callers that want strict
/// alternation place `current_player()` and call `switch_player()` after
/// each successful move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    win_length: usize,
    /// Row-major cells, `size * size` long
    cells: Vec<Option<Piece>>,
    current_player: Stone,
}

impl Board {
    /// 15x15 board, five to win, Black to move
    pub fn new() -> Self {
        Self::with_config(DEFAULT_BOARD_SIZE, DEFAULT_WIN_LENGTH, Stone::Black)
    }

    /// Empty board with the given dimensions.
    ///
    /// `size` is trusted here; settings from outside go through
    /// [`Board::from_config`], which enforces `1..=MAX_BOARD_SIZE`.
    pub fn with_config(size: usize, win_length: usize, starting_color: Stone) -> Self {
        Self {
            size,
            win_length,
            cells: vec![None; size * size],
            current_player: starting_color,
        }
    }

    /// Build a board from loaded settings.
    ///
    /// Fails with [`GameError::InvalidSize`] when the board size is zero or
    /// above [`MAX_BOARD_SIZE`], and with [`GameError::InvalidColor`] when
    /// the configured starting color is neither black nor white.
    pub fn from_config(config: &GameConfig) -> Result<Self, GameError> {
        if !(1..=MAX_BOARD_SIZE).contains(&config.board_size) {
            return Err(GameError::InvalidSize {
                size: config.board_size,
                max: MAX_BOARD_SIZE,
            });
        }
        let starting_color = config.starting_color()?;
        Ok(Self::with_config(
            config.board_size,
            config.win_length,
            starting_color,
        ))
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    pub fn win_length(&self) -> usize {
        self.win_length
    }

    /// Get piece at a 0-indexed position (None if empty or off the board)
    #[inline]
    pub fn get(&self, pos: Pos) -> Option<Piece> {
        if pos.row < self.size && pos.col < self.size {
            self.cells[pos.to_index(self.size)]
        } else {
            None
        }
    }

    /// Color of the stone at a 0-indexed position
    #[inline]
    pub fn stone_at(&self, pos: Pos) -> Option<Stone> {
        self.get(pos).map(|piece| piece.color())
    }

    /// Get piece at 1-indexed coordinates
    pub fn piece_at(&self, row: i64, col: i64) -> Result<Option<Piece>, GameError> {
        let pos = self.locate(row, col)?;
        Ok(self.get(pos))
    }

    /// Place a piece of `color` at 1-indexed `(row, col)`.
    ///
    /// The cell is written only when both coordinates are in `1..=size` and
    /// the cell is still empty.
    #[instrument(level = "debug", skip(self))]
    pub fn place(&mut self, color: Stone, row: i64, col: i64) -> Result<(), GameError> {
        let pos = self.locate(row, col)?;
        let cell = &mut self.cells[pos.to_index(self.size)];
        if cell.is_some() {
            return Err(GameError::CellOccupied { row, col });
        }
        *cell = Some(Piece::new(color));
        debug!(%color, row, col, "piece placed");
        Ok(())
    }

    fn locate(&self, row: i64, col: i64) -> Result<Pos, GameError> {
        Pos::from_one_based(row, col, self.size).ok_or(GameError::OutOfBounds {
            row,
            col,
            size: self.size,
        })
    }

    #[inline]
    pub fn current_player(&self) -> Stone {
        self.current_player
    }

    pub fn switch_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Total stones on board
    pub fn stone_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Text view of the grid with 1-indexed labels and the player to move.
    ///
    /// Nothing is formatted until the returned value is displayed, and it
    /// can be displayed any number of times.
    pub fn render(&self) -> Render<'_> {
        Render { board: self }
    }

    /// Check whether `stone` has `win_length` or more in a row anywhere
    pub fn is_winner(&self, stone: Stone) -> bool {
        self.winning_line(stone).is_some()
    }

    /// Check whether the player to move has completed a winning run
    pub fn current_player_is_winner(&self) -> bool {
        let won = self.is_winner(self.current_player);
        if won {
            debug!(color = %self.current_player, "winning run found");
        }
        won
    }

    /// First winning run for `stone`, if any
    pub fn winning_line(&self, stone: Stone) -> Option<WinningLine> {
        find_winning_line(self, stone)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.render().fmt(f)
    }
}

/// Borrowed text rendering of a [`Board`]
#[derive(Debug, Clone, Copy)]
pub struct Render<'a> {
    board: &'a Board,
}

impl fmt::Display for Render<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let size = self.board.size;

        writeln!(f)?;
        for row in 0..size {
            write!(f, "{:>3}|", row + 1)?;
            for col in 0..size {
                match self.board.get(Pos::new(row, col)) {
                    Some(piece) => write!(f, " {} ", piece)?,
                    None => f.write_str(" - ")?,
                }
            }
            writeln!(f)?;
        }

        writeln!(f, "    {}", "___".repeat(size))?;
        f.write_str("   ")?;
        for col in 1..=size {
            write!(f, "{:>3}", col)?;
        }
        writeln!(f)?;
        write!(f, "Current player: {}", self.board.current_player.glyph())
    }
}
