//! Game state management for the Gomoku GUI

use std::time::{Duration, Instant};

use tracing::info;

use crate::config::GameConfig;
use crate::error::GameError;
use crate::rules::WinningLine;
use crate::{Board, Pos, Stone};

/// Finished game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Stone,
    pub winning_line: Option<WinningLine>,
}

/// Why a click was not turned into a move
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveRejected {
    #[error("Game is over")]
    GameOver,

    #[error(transparent)]
    Rules(#[from] GameError),
}

/// Move timer for tracking thinking time
pub struct MoveTimer {
    pub start_time: Option<Instant>,
    pub last_move_duration: Option<Duration>,
}

impl Default for MoveTimer {
    fn default() -> Self {
        Self {
            start_time: Some(Instant::now()),
            last_move_duration: None,
        }
    }
}

impl MoveTimer {
    pub fn start(&mut self) {
        self.start_time = Some(Instant::now());
    }

    /// Record how long the move in progress took
    pub fn stop(&mut self) {
        self.last_move_duration = Some(self.elapsed());
        self.start_time = None;
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.map_or(Duration::ZERO, |t| t.elapsed())
    }
}

/// Hotseat game: both players share the mouse
pub struct GameState {
    pub board: Board,
    pub game_over: Option<GameResult>,
    pub last_move: Option<Pos>,
    pub move_count: usize,
    pub move_timer: MoveTimer,
    pub message: Option<String>,
    config: GameConfig,
}

impl GameState {
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        let board = Board::from_config(&config)?;
        Ok(Self {
            board,
            game_over: None,
            last_move: None,
            move_count: 0,
            move_timer: MoveTimer::default(),
            message: None,
            config,
        })
    }

    pub fn reset(&mut self) {
        // The config was already accepted by `new`
        if let Ok(board) = Board::from_config(&self.config) {
            self.board = board;
        }
        self.game_over = None;
        self.last_move = None;
        self.move_count = 0;
        self.move_timer = MoveTimer::default();
        self.message = None;
    }

    #[inline]
    pub fn current_turn(&self) -> Stone {
        self.board.current_player()
    }

    /// Place the current player's stone at `pos`, then check for a win or
    /// pass the turn.
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), MoveRejected> {
        if self.game_over.is_some() {
            return Err(MoveRejected::GameOver);
        }

        let color = self.current_turn();
        self.board
            .place(color, pos.row as i64 + 1, pos.col as i64 + 1)?;

        self.move_count += 1;
        self.last_move = Some(pos);
        self.move_timer.stop();
        self.message = None;

        if self.board.current_player_is_winner() {
            info!(%color, moves = self.move_count, "game won");
            self.game_over = Some(GameResult {
                winner: color,
                winning_line: self.board.winning_line(color),
            });
            return Ok(());
        }

        self.board.switch_player();
        self.move_timer.start();
        Ok(())
    }
}
