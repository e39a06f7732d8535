//! Gomoku rules engine
//!
//! Free-style Gomoku on a square board:
//! - 15x15 board by default, up to 99x99
//! - Black moves first unless configured otherwise
//! - 5-in-a-row to win by default (overlines allowed), configurable
//!
//! # Architecture
//!
//! - [`board`]: Board, pieces and coordinates
//! - [`rules`]: Win detection over rows, columns and both diagonals
//! - [`config`]: Board settings loaded from TOML
//! - [`console`]: Line-based text front-end
//! - [`ui`]: Hotseat GUI built on egui/eframe
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{Board, Stone};
//!
//! let mut board = Board::new();
//! for col in 1..=5 {
//!     let color = board.current_player();
//!     board.place(color, 1, col).unwrap();
//!     if board.current_player_is_winner() {
//!         println!("{} wins!", color);
//!         break;
//!     }
//!     board.switch_player();
//!     board.place(board.current_player(), 9, col).unwrap();
//!     board.switch_player();
//! }
//! assert_eq!(board.current_player(), Stone::Black);
//! assert!(board.current_player_is_winner());
//! ```
//!
//! `Board::place` accepts any color at any time. Turn order is up to the
//! caller: place `current_player()` and call `switch_player()` after every
//! move that does not win.

pub mod board;
pub mod config;
pub mod console;
pub mod error;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{
    Board, Piece, Pos, Stone, DEFAULT_BOARD_SIZE, DEFAULT_WIN_LENGTH, MAX_BOARD_SIZE,
};
pub use config::GameConfig;
pub use error::{ConfigError, GameError};
