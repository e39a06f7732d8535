//! Game rules for Gomoku
//!
//! Standard free-style rules: the first player with `win_length` or more
//! stones in an unbroken row, column or diagonal wins. Overlines count.

pub mod win;

// Re-exports for convenient access
pub use win::{find_winning_line, has_winning_run, Direction, WinningLine};
