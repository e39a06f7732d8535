//! Win condition checking
//!
//! Every maximal line of the board is walked once per direction while
//! counting consecutive stones of the target color. The count resets on an
//! empty cell or an opponent stone, and the scan stops at the first run that
//! reaches the board's win length. Each call is O(size²).

use crate::board::{Board, Pos, Stone};

/// The four line directions on a square grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Rows, left to right
    Horizontal,
    /// Columns, top to bottom
    Vertical,
    /// Constant `row + col`, bottom-left to top-right
    Diagonal,
    /// Constant `row - col`, top-left to bottom-right
    AntiDiagonal,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::Diagonal,
        Direction::AntiDiagonal,
    ];

    /// Row/column step between consecutive cells of a line
    #[inline]
    pub fn step(self) -> (i64, i64) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::Diagonal => (-1, 1),
            Direction::AntiDiagonal => (1, 1),
        }
    }

    /// First cell of every maximal line in this direction
    ///
    /// Rows and up-diagonals start on the left column, columns and
    /// down-diagonals on the top row. Diagonals also start past the corner:
    /// up-diagonals along the bottom row, down-diagonals down the left column.
    fn line_starts(self, size: usize) -> impl Iterator<Item = Pos> {
        let last = size.saturating_sub(1);
        let edge = (0..size).map(move |i| match self {
            Direction::Horizontal | Direction::Diagonal => Pos::new(i, 0),
            Direction::Vertical | Direction::AntiDiagonal => Pos::new(0, i),
        });
        let extra_end = match self {
            Direction::Horizontal | Direction::Vertical => 1,
            Direction::Diagonal | Direction::AntiDiagonal => size,
        };
        let extra = (1..extra_end).map(move |i| match self {
            Direction::Diagonal => Pos::new(last, i),
            _ => Pos::new(i, 0),
        });
        edge.chain(extra)
    }
}

/// A run of `win_length` same-colored stones
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningLine {
    pub stone: Stone,
    pub direction: Direction,
    /// Cells of the run, in scan order
    pub cells: Vec<Pos>,
}

/// Check if `stone` has a winning run anywhere on the board
pub fn has_winning_run(board: &Board, stone: Stone) -> bool {
    find_winning_line(board, stone).is_some()
}

/// Find the first run of `board.win_length()` stones of `stone`.
///
/// Directions are scanned in [`Direction::ALL`] order and the first run to
/// reach the win length is returned.
pub fn find_winning_line(board: &Board, stone: Stone) -> Option<WinningLine> {
    let win_length = board.win_length();
    if win_length == 0 {
        return None;
    }

    for direction in Direction::ALL {
        for start in direction.line_starts(board.size()) {
            if let Some(cells) = scan_line(board, start, direction, stone, win_length) {
                return Some(WinningLine {
                    stone,
                    direction,
                    cells,
                });
            }
        }
    }
    None
}

/// Walk one line from `start`, returning the first run of `win_length`
fn scan_line(
    board: &Board,
    start: Pos,
    direction: Direction,
    stone: Stone,
    win_length: usize,
) -> Option<Vec<Pos>> {
    let (dr, dc) = direction.step();
    let size = board.size();
    let mut in_a_row = 0usize;
    let mut cursor = Some(start);

    while let Some(pos) = cursor {
        if board.stone_at(pos) == Some(stone) {
            in_a_row += 1;
            if in_a_row == win_length {
                return Some(run_ending_at(pos, dr, dc, win_length));
            }
        } else {
            in_a_row = 0;
        }
        cursor = pos.offset(dr, dc, size);
    }
    None
}

/// Cells of the run of `len` that ends at `end`, in scan order
fn run_ending_at(end: Pos, dr: i64, dc: i64, len: usize) -> Vec<Pos> {
    (0..len as i64)
        .rev()
        .map(|back| {
            Pos::new(
                (end.row as i64 - dr * back) as usize,
                (end.col as i64 - dc * back) as usize,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Place `color` at 0-indexed cells on a fresh 15x15 board
    fn board_with(cells: &[(usize, usize)], color: Stone) -> Board {
        let mut board = Board::new();
        for &(r, c) in cells {
            board.place(color, r as i64 + 1, c as i64 + 1).unwrap();
        }
        board
    }

    #[test]
    fn test_five_in_row_horizontal() {
        let board = board_with(&[(7, 2), (7, 3), (7, 4), (7, 5), (7, 6)], Stone::Black);
        let line = find_winning_line(&board, Stone::Black).unwrap();
        assert_eq!(line.direction, Direction::Horizontal);
        assert_eq!(line.cells.first(), Some(&Pos::new(7, 2)));
        assert_eq!(line.cells.last(), Some(&Pos::new(7, 6)));
        assert!(!has_winning_run(&board, Stone::White));
    }

    #[test]
    fn test_five_in_row_vertical() {
        let board = board_with(&[(2, 7), (3, 7), (4, 7), (5, 7), (6, 7)], Stone::White);
        let line = find_winning_line(&board, Stone::White).unwrap();
        assert_eq!(line.direction, Direction::Vertical);
        assert_eq!(line.cells.len(), 5);
    }

    #[test]
    fn test_five_in_row_diagonal_up() {
        // Constant row + col = 10
        let board = board_with(&[(8, 2), (7, 3), (6, 4), (5, 5), (4, 6)], Stone::Black);
        let line = find_winning_line(&board, Stone::Black).unwrap();
        assert_eq!(line.direction, Direction::Diagonal);
        assert_eq!(line.cells[0], Pos::new(8, 2));
        assert_eq!(line.cells[4], Pos::new(4, 6));
    }

    #[test]
    fn test_five_in_row_diagonal_down() {
        let board = board_with(&[(3, 3), (4, 4), (5, 5), (6, 6), (7, 7)], Stone::White);
        let line = find_winning_line(&board, Stone::White).unwrap();
        assert_eq!(line.direction, Direction::AntiDiagonal);
        assert_eq!(line.cells, (3..8).map(|i| Pos::new(i, i)).collect::<Vec<_>>());
    }

    #[test]
    fn test_four_in_row_not_win() {
        let board = board_with(&[(9, 0), (9, 1), (9, 2), (9, 3)], Stone::Black);
        assert!(!has_winning_run(&board, Stone::Black));
    }

    #[test]
    fn test_run_blocked_by_opponent() {
        let mut board = board_with(&[(0, 0), (0, 1), (0, 2), (0, 3)], Stone::Black);
        board.place(Stone::White, 1, 5).unwrap();
        assert!(!has_winning_run(&board, Stone::Black));
        // A fifth black stone past the blocker does not join the run
        board.place(Stone::Black, 1, 6).unwrap();
        assert!(!has_winning_run(&board, Stone::Black));
    }

    #[test]
    fn test_gap_resets_count() {
        let board = board_with(&[(4, 0), (4, 1), (4, 2), (4, 4), (4, 5)], Stone::Black);
        assert!(!has_winning_run(&board, Stone::Black));
    }

    #[test]
    fn test_six_in_row_also_wins() {
        let board = board_with(&[(9, 0), (9, 1), (9, 2), (9, 3), (9, 4), (9, 5)], Stone::Black);
        assert!(has_winning_run(&board, Stone::Black));
    }

    #[test]
    fn test_corner_diagonals() {
        let last = 14;
        // Down-right diagonal ending in the bottom-right corner
        let board = board_with(&(10..15).map(|i| (i, i)).collect::<Vec<_>>(), Stone::White);
        assert!(has_winning_run(&board, Stone::White));

        // Up-right diagonal ending in the top-right corner
        let cells: Vec<_> = (0..5).map(|i| (4 - i, last - 4 + i)).collect();
        let board = board_with(&cells, Stone::Black);
        let line = find_winning_line(&board, Stone::Black).unwrap();
        assert_eq!(line.direction, Direction::Diagonal);
        assert_eq!(line.cells[4], Pos::new(0, last));

        // Up-right diagonal starting in the bottom-left corner
        let cells: Vec<_> = (0..5).map(|i| (last - i, i)).collect();
        assert!(has_winning_run(&board_with(&cells, Stone::Black), Stone::Black));
    }

    #[test]
    fn test_short_diagonals_in_corners_never_win() {
        // Top-left up-diagonal holds only four cells: (3,0)..(0,3)
        let board = board_with(&[(3, 0), (2, 1), (1, 2), (0, 3)], Stone::Black);
        assert!(!has_winning_run(&board, Stone::Black));
    }

    #[test]
    fn test_custom_win_length() {
        let mut board = Board::with_config(3, 3, Stone::Black);
        for i in 1..=3 {
            board.place(Stone::Black, i, 4 - i).unwrap();
        }
        let line = find_winning_line(&board, Stone::Black).unwrap();
        assert_eq!(line.direction, Direction::Diagonal);
    }

    #[test]
    fn test_win_length_one() {
        let mut board = Board::with_config(4, 1, Stone::White);
        assert!(!has_winning_run(&board, Stone::White));
        board.place(Stone::White, 4, 4).unwrap();
        assert!(has_winning_run(&board, Stone::White));
    }

    #[test]
    fn test_win_length_longer_than_board() {
        let mut board = Board::with_config(3, 5, Stone::Black);
        for col in 1..=3 {
            board.place(Stone::Black, 1, col).unwrap();
        }
        assert!(!has_winning_run(&board, Stone::Black));
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        let board = Board::new();
        assert!(find_winning_line(&board, Stone::Black).is_none());
        assert!(find_winning_line(&board, Stone::White).is_none());
    }

    #[test]
    fn test_line_starts_cover_every_line() {
        let size = 6;
        assert_eq!(Direction::Horizontal.line_starts(size).count(), size);
        assert_eq!(Direction::Vertical.line_starts(size).count(), size);
        assert_eq!(Direction::Diagonal.line_starts(size).count(), 2 * size - 1);
        assert_eq!(Direction::AntiDiagonal.line_starts(size).count(), 2 * size - 1);
        assert_eq!(Direction::Diagonal.line_starts(0).count(), 0);
        assert_eq!(Direction::Horizontal.line_starts(0).count(), 0);
    }

    #[test]
    fn test_line_starts_lie_on_the_edges() {
        let size = 4;
        let up: Vec<Pos> = Direction::Diagonal.line_starts(size).collect();
        assert_eq!(up[..4], [Pos::new(0, 0), Pos::new(1, 0), Pos::new(2, 0), Pos::new(3, 0)]);
        assert_eq!(up[4..], [Pos::new(3, 1), Pos::new(3, 2), Pos::new(3, 3)]);

        let down: Vec<Pos> = Direction::AntiDiagonal.line_starts(size).collect();
        assert_eq!(down[..4], [Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2), Pos::new(0, 3)]);
        assert_eq!(down[4..], [Pos::new(1, 0), Pos::new(2, 0), Pos::new(3, 0)]);

        let cols: Vec<Pos> = Direction::Vertical.line_starts(size).collect();
        assert_eq!(cols, (0..size).map(|c| Pos::new(0, c)).collect::<Vec<_>>());
    }
}
