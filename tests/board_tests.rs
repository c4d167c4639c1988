//! Board tests - grid, collision, locking, line detection and compaction

use tilt_tetris::core::{Board, Piece};
use tilt_tetris::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn board() -> Board {
    Board::new(BOARD_WIDTH, BOARD_HEIGHT)
}

#[test]
fn test_board_new_empty() {
    let board = board();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i16 {
        for x in 0..BOARD_WIDTH as i16 {
            assert_eq!(board.get(x, y), Some(Cell::Empty), "({x}, {y})");
        }
    }
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = board();
    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i16, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i16), None);
}

#[test]
fn test_board_set_out_of_bounds() {
    let mut board = board();
    assert!(!board.set(-1, 0, Cell::Filled));
    assert!(!board.set(0, BOARD_HEIGHT as i16, Cell::Filled));
    assert_eq!(board.filled_count(), 0);
}

#[test]
fn test_walls_and_floor_read_as_filled() {
    let board = board();
    assert!(board.is_cell_filled(-1, 5));
    assert!(board.is_cell_filled(BOARD_WIDTH as i16, 5));
    assert!(board.is_cell_filled(3, BOARD_HEIGHT as i16));
    // Above the top row is open air.
    assert!(!board.is_cell_filled(3, -2));
}

#[test]
fn test_horizontal_collision_for_every_kind_and_rotation() {
    let board = board();
    for kind in PieceKind::ALL {
        for rotation in 0..tilt_tetris::core::pieces::rotation_count(kind) {
            let mut piece = Piece::new(kind, 0, 5);
            piece.rotation = rotation;
            assert!(board.collides(&piece, -1, 0), "{kind:?} r{rotation} left");

            let right_x = BOARD_WIDTH as i16 - piece.width() as i16;
            let piece = Piece { x: right_x, ..piece };
            assert!(!board.collides(&piece, 0, 0), "{kind:?} r{rotation} fits");
            assert!(board.collides(&piece, 1, 0), "{kind:?} r{rotation} right");
        }
    }
}

#[test]
fn test_collision_with_locked_cells() {
    let mut board = board();
    board.set(4, 10, Cell::Filled);
    let piece = Piece::new(PieceKind::O, 3, 8);
    assert!(!board.collides(&piece, 0, 0));
    assert!(board.collides(&piece, 0, 1));
    assert!(!board.collides(&piece, -1, 1));
}

#[test]
fn test_lock_changes_only_the_footprint() {
    let mut board = board();
    board.set(0, 19, Cell::Filled);
    let before = board.clone();

    let piece = Piece::new(PieceKind::T, 4, 10);
    assert_eq!(board.lock_piece(&piece), 4);

    let footprint = piece.cells();
    for y in 0..BOARD_HEIGHT as i16 {
        for x in 0..BOARD_WIDTH as i16 {
            if footprint.contains(&(x, y)) {
                assert_eq!(board.get(x, y), Some(Cell::Filled));
            } else {
                assert_eq!(board.get(x, y), before.get(x, y), "({x}, {y})");
            }
        }
    }
}

#[test]
fn test_lock_drops_cells_above_the_top() {
    let mut board = board();
    let piece = Piece::new(PieceKind::I, 0, -2);
    assert_eq!(board.lock_piece(&piece), 2);
    assert_eq!(board.get(0, 0), Some(Cell::Filled));
    assert_eq!(board.get(0, 1), Some(Cell::Filled));
}

#[test]
fn test_clear_full_lines_single_row() {
    let mut board = board();
    board.fill_row(19);
    assert_eq!(board.clear_full_lines().as_slice(), &[19]);
}

#[test]
fn test_clear_full_lines_is_idempotent() {
    let mut board = board();
    assert!(board.clear_full_lines().is_empty());
    assert!(board.clear_full_lines().is_empty());

    board.fill_row(7);
    board.fill_row(12);
    let first = board.clear_full_lines();
    let second = board.clear_full_lines();
    assert_eq!(first, second);
    assert_eq!(first.as_slice(), &[7, 12]);
}

#[test]
fn test_compact_two_rows_shifts_everything_above() {
    let mut board = Board::from_rows(&[
        "#.........",
        ".#........",
        "##########",
        "..#.......",
        "##########",
    ])
    .unwrap();

    let rows = board.clear_full_rows();
    assert_eq!(rows.as_slice(), &[2, 4]);

    let expected = Board::from_rows(&[
        "..........",
        "..........",
        "#.........",
        ".#........",
        "..#.......",
    ])
    .unwrap();
    assert_eq!(board.cells(), expected.cells());
}

#[test]
fn test_top_row_detection() {
    let mut board = board();
    assert!(!board.row_is_game_over());
    board.set(9, 1, Cell::Filled);
    assert!(!board.row_is_game_over());
    board.set(9, 0, Cell::Filled);
    assert!(board.row_is_game_over());
}
