use super::*;
use crate::config::GameConfig;
use crate::error::GameError;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
}

#[test]
fn test_stone_parse() {
    assert_eq!(" BLACK ".parse::<Stone>(), Ok(Stone::Black));
    assert_eq!("White".parse::<Stone>(), Ok(Stone::White));
    assert_eq!(
        "blue".parse::<Stone>(),
        Err(GameError::InvalidColor("blue".to_string()))
    );
}

#[test]
fn test_pos_from_one_based() {
    assert_eq!(Pos::from_one_based(1, 1, 15), Some(Pos::new(0, 0)));
    assert_eq!(Pos::from_one_based(15, 15, 15), Some(Pos::new(14, 14)));
    assert_eq!(Pos::from_one_based(0, 1, 15), None);
    assert_eq!(Pos::from_one_based(1, 16, 15), None);
    assert_eq!(Pos::from_one_based(i64::MIN, 1, 15), None);
}

#[test]
fn test_pos_ordering() {
    assert!(Pos::new(0, 0) < Pos::new(0, 1));
    assert!(Pos::new(0, 14) < Pos::new(1, 0));
}

#[test]
fn test_new_board_defaults() {
    let board = Board::new();
    assert_eq!(board.size(), DEFAULT_BOARD_SIZE);
    assert_eq!(board.win_length(), DEFAULT_WIN_LENGTH);
    assert_eq!(board.current_player(), Stone::Black);
    assert_eq!(board.stone_count(), 0);
    assert_eq!(board, Board::default());
}

#[test]
fn test_board_from_config() {
    let config = GameConfig {
        board_size: 9,
        win_length: 4,
        starting_color: " white".to_string(),
    };
    let board = Board::from_config(&config).unwrap();
    assert_eq!(board.size(), 9);
    assert_eq!(board.win_length(), 4);
    assert_eq!(board.current_player(), Stone::White);
}

#[test]
fn test_board_from_config_rejects_size() {
    for board_size in [0, MAX_BOARD_SIZE + 1, usize::MAX] {
        let config = GameConfig {
            board_size,
            ..GameConfig::default()
        };
        assert_eq!(
            Board::from_config(&config),
            Err(GameError::InvalidSize {
                size: board_size,
                max: MAX_BOARD_SIZE
            })
        );
    }
}

#[test]
fn test_board_from_config_rejects_color() {
    let config = GameConfig {
        starting_color: "purple".to_string(),
        ..GameConfig::default()
    };
    assert_eq!(
        Board::from_config(&config),
        Err(GameError::InvalidColor("purple".to_string()))
    );
}

#[test]
fn test_place_out_of_bounds() {
    for size in [1usize, 5, 15] {
        let mut board = Board::with_config(size, 5, Stone::Black);
        let n = size as i64;
        let outside = [
            (0, 1),
            (1, 0),
            (-1, 1),
            (1, -3),
            (n + 1, 1),
            (1, n + 1),
            (n + 7, n + 7),
        ];
        for (row, col) in outside {
            assert_eq!(
                board.place(Stone::Black, row, col),
                Err(GameError::OutOfBounds { row, col, size })
            );
        }
        assert_eq!(board.stone_count(), 0);
        assert!(board.place(Stone::Black, n, n).is_ok());
    }
}

#[test]
fn test_place_twice_is_occupied() {
    let mut board = Board::new();
    board.place(Stone::White, 1, 1).unwrap();
    assert_eq!(
        board.place(Stone::Black, 1, 1),
        Err(GameError::CellOccupied { row: 1, col: 1 })
    );
    assert_eq!(board.piece_at(1, 1), Ok(Some(Piece::new(Stone::White))));
    assert_eq!(board.stone_count(), 1);

    // Same color again is also rejected and leaves the cell alone
    assert!(board.place(Stone::White, 1, 1).is_err());
    assert_eq!(board.stone_at(Pos::new(0, 0)), Some(Stone::White));
}

#[test]
fn test_place_ignores_turn() {
    let mut board = Board::new();
    assert_eq!(board.current_player(), Stone::Black);
    board.place(Stone::White, 3, 4).unwrap();
    board.place(Stone::White, 3, 5).unwrap();
    assert_eq!(board.current_player(), Stone::Black);
    assert_eq!(board.get(Pos::new(2, 3)).map(|p| p.color()), Some(Stone::White));
}

#[test]
fn test_piece_at_out_of_bounds() {
    let board = Board::new();
    assert_eq!(board.piece_at(2, 2), Ok(None));
    assert!(matches!(board.piece_at(16, 2), Err(GameError::OutOfBounds { .. })));
    assert_eq!(board.get(Pos::new(20, 0)), None);
}

#[test]
fn test_switch_player_twice_is_identity() {
    for start in [Stone::Black, Stone::White] {
        let mut board = Board::with_config(15, 5, start);
        board.switch_player();
        assert_eq!(board.current_player(), start.opponent());
        board.switch_player();
        assert_eq!(board.current_player(), start);
    }
}

#[test]
fn test_render_small_board() {
    let mut board = Board::with_config(3, 3, Stone::Black);
    board.place(Stone::Black, 1, 1).unwrap();
    board.place(Stone::White, 3, 2).unwrap();
    board.switch_player();

    let expected = concat!(
        "\n",
        "  1| ●  -  - \n",
        "  2| -  -  - \n",
        "  3| -  ○  - \n",
        "    _________\n",
        "     1  2  3\n",
        "Current player: ○",
    );
    assert_eq!(board.render().to_string(), expected);
    // Rendering twice gives the same text and does not touch the board
    assert_eq!(board.render().to_string(), expected);
    assert_eq!(board.to_string(), expected);
    assert_eq!(board.stone_count(), 2);
}

#[test]
fn test_render_default_board_labels() {
    let text = Board::new().render().to_string();
    let lines: Vec<&str> = text.lines().collect();
    // Blank line, 15 rows, rule, labels, current player
    assert_eq!(lines.len(), 19);
    assert_eq!(lines[0], "");
    assert!(lines[1].starts_with("  1|"));
    assert!(lines[15].starts_with(" 15|"));
    assert!(lines[17].ends_with(" 14 15"));
    assert_eq!(lines[18], "Current player: ●");
}

/// Place `color` at each 1-indexed cell without touching the turn
fn play(board: &mut Board, cells: &[(i64, i64)], color: Stone) {
    for &(row, col) in cells {
        board.place(color, row, col).unwrap();
    }
}

#[test]
fn test_direction_symmetry() {
    let runs: [&[(i64, i64)]; 4] = [
        &[(6, 3), (6, 4), (6, 5), (6, 6), (6, 7)],
        &[(3, 6), (4, 6), (5, 6), (6, 6), (7, 6)],
        &[(9, 2), (8, 3), (7, 4), (6, 5), (5, 6)],
        &[(2, 2), (3, 3), (4, 4), (5, 5), (6, 6)],
    ];
    for cells in runs {
        for color in [Stone::Black, Stone::White] {
            let mut board = Board::with_config(15, 5, color);
            play(&mut board, &cells[..4], color);
            assert!(!board.current_player_is_winner(), "four is not a win: {:?}", cells);
            play(&mut board, &cells[4..], color);
            assert!(board.current_player_is_winner(), "missed run: {:?}", cells);
            board.switch_player();
            assert!(!board.current_player_is_winner());
        }
    }
}

#[test]
fn test_no_false_positive_when_blocked() {
    let mut board = Board::new();
    play(&mut board, &[(10, 1), (10, 2), (10, 3), (10, 4)], Stone::Black);
    board.place(Stone::White, 10, 5).unwrap();
    assert!(!board.current_player_is_winner());
    assert!(!board.is_winner(Stone::White));
}

#[test]
fn test_top_row_scenario() {
    let mut board = Board::new();
    let black = [(1, 1), (1, 2), (1, 3), (1, 4), (1, 5)];
    let white = [(9, 9), (10, 12), (3, 14), (15, 1)];

    for (i, &(row, col)) in black.iter().enumerate() {
        let color = board.current_player();
        assert_eq!(color, Stone::Black);
        board.place(color, row, col).unwrap();
        if i == black.len() - 1 {
            break;
        }
        assert!(!board.current_player_is_winner());
        board.switch_player();

        let (row, col) = white[i];
        board.place(board.current_player(), row, col).unwrap();
        assert!(!board.current_player_is_winner());
        board.switch_player();
    }

    assert!(board.current_player_is_winner());
    let line = board.winning_line(Stone::Black).unwrap();
    assert_eq!(line.cells.first(), Some(&Pos::new(0, 0)));
    assert_eq!(line.cells.last(), Some(&Pos::new(0, 4)));
}

#[test]
fn test_diagonal_scenario() {
    let mut board = Board::new();
    play(&mut board, &[(8, 8), (7, 7), (6, 6), (5, 5)], Stone::Black);
    assert!(!board.current_player_is_winner());
    board.place(Stone::Black, 4, 4).unwrap();
    assert!(board.current_player_is_winner());
}

#[test]
fn test_occupied_scenario() {
    let mut board = Board::new();
    let white: Piece = "white".parse().unwrap();
    let black: Piece = "black".parse().unwrap();
    board.place(white.color(), 1, 1).unwrap();
    assert_eq!(
        board.place(black.color(), 1, 1),
        Err(GameError::CellOccupied { row: 1, col: 1 })
    );
    assert_eq!(board.piece_at(1, 1), Ok(Some(white)));
}
