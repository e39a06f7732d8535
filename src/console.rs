//! Text front-end: read `row,col` moves from a line-based input
//!
//! The session always places the color of the player to move, so turn
//! order is enforced here rather than by [`Board::place`].

use std::io::{self, BufRead, Write};

use tracing::{debug, info};

use crate::board::{Board, Stone};

pub const PROMPT: &str = "Input a row then column separated by a comma (q to quit): ";

/// One line of player input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Place { row: i64, col: i64 },
}

/// Malformed player input
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Incorrect input.")]
    WrongFieldCount(usize),

    #[error("Incorrect input.")]
    NotANumber(String),
}

/// Parse `q`/`Q` or `row,col` with optional whitespace around each number.
pub fn parse_command(line: &str) -> Result<Command, InputError> {
    let line = line.trim();
    if line.eq_ignore_ascii_case("q") {
        return Ok(Command::Quit);
    }

    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 2 {
        return Err(InputError::WrongFieldCount(fields.len()));
    }
    let number = |field: &str| {
        field
            .trim()
            .parse::<i64>()
            .map_err(|_| InputError::NotANumber(field.to_string()))
    };
    Ok(Command::Place {
        row: number(fields[0])?,
        col: number(fields[1])?,
    })
}

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Stone),
    /// The player typed `q` or input ran out
    Quit,
}

/// Console game loop over any reader/writer pair
pub struct Session<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Play on `board` until someone wins or the player quits.
    pub fn run(&mut self, board: &mut Board) -> io::Result<Outcome> {
        writeln!(self.output, "{}", board.render())?;

        loop {
            let Some(line) = self.prompt()? else {
                info!("input closed, leaving game");
                return Ok(Outcome::Quit);
            };

            let (row, col) = match parse_command(&line) {
                Ok(Command::Quit) => {
                    info!("player quit");
                    return Ok(Outcome::Quit);
                }
                Ok(Command::Place { row, col }) => (row, col),
                Err(err) => {
                    debug!(input = line.trim(), ?err, "rejected input");
                    writeln!(self.output, "{}\nTry again.", err)?;
                    writeln!(self.output, "{}", board.render())?;
                    continue;
                }
            };

            let color = board.current_player();
            match board.place(color, row, col) {
                Ok(()) if board.current_player_is_winner() => {
                    writeln!(self.output, "{}", board.render())?;
                    writeln!(self.output, "{} wins!", color)?;
                    info!(%color, "game won");
                    return Ok(Outcome::Winner(color));
                }
                Ok(()) => board.switch_player(),
                Err(err) => writeln!(self.output, "{}\nTry again.", err)?,
            }
            writeln!(self.output, "{}", board.render())?;
        }
    }

    /// Print the prompt and read one line; `None` at end of input
    fn prompt(&mut self) -> io::Result<Option<String>> {
        write!(self.output, "{}", PROMPT)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            Ok(None)
        } else {
            Ok(Some(line))
        }
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
