use tilt_tetris::core::{DisplaySurface, GameConfig, GameController, StepResult};
use tilt_tetris::term::{GameView, PixelMatrix};
use tilt_tetris::types::{Cell, PieceKind, COLOR_ACTIVE, COLOR_BACKGROUND, COLOR_BEZEL, COLOR_LOCKED};

fn setup(config: GameConfig) -> (GameController, PixelMatrix, GameView) {
    let game = GameController::new(config, 1).unwrap();
    let matrix = PixelMatrix::for_board(config.width, config.height);
    let view = GameView::new(config.width, config.height, &matrix);
    (game, matrix, view)
}

#[test]
fn term_view_renders_bezel_corners() {
    let (game, mut matrix, view) = setup(GameConfig::default());
    view.render(&game.snapshot(), &mut matrix);

    assert_eq!(matrix.get(10, 5), Some(COLOR_BEZEL));
    assert_eq!(matrix.get(21, 5), Some(COLOR_BEZEL));
    assert_eq!(matrix.get(10, 26), Some(COLOR_BEZEL));
    assert_eq!(matrix.get(21, 26), Some(COLOR_BEZEL));
    assert_eq!(matrix.get(9, 5), Some(COLOR_BACKGROUND));
}

#[test]
fn term_view_draws_active_piece_in_its_own_colour() {
    let (mut game, mut matrix, view) = setup(GameConfig::default());
    assert!(game.spawn_kind(PieceKind::O));
    view.render(&game.snapshot(), &mut matrix);

    // O at anchor (3, 0) on a playfield starting at (11, 6).
    for (x, y) in [(14, 6), (15, 6), (14, 7), (15, 7)] {
        assert_eq!(matrix.get(x, y), Some(COLOR_ACTIVE), "({x}, {y})");
    }
}

#[test]
fn term_view_shows_locked_cells_after_a_drop() {
    let (mut game, mut matrix, view) = setup(GameConfig::default());
    assert!(game.spawn_kind(PieceKind::O));
    while game.step_down() == StepResult::Moved {}
    view.render(&game.snapshot(), &mut matrix);

    for (x, y) in [(14, 24), (15, 24), (14, 25), (15, 25)] {
        assert_eq!(matrix.get(x, y), Some(COLOR_LOCKED), "({x}, {y})");
    }
}

#[test]
fn term_view_handles_small_boards() {
    let (mut game, mut matrix, view) = setup(GameConfig::with_board(6, 8));
    game.board_mut().set(0, 7, Cell::Filled);
    view.render(&game.snapshot(), &mut matrix);

    let origin = view.playfield_origin();
    assert_eq!((origin.x, origin.y), (13, 12));
    assert_eq!(matrix.get(13, 19), Some(COLOR_LOCKED));
    assert_eq!(matrix.get(12, 19), Some(COLOR_BEZEL));
}

#[test]
fn term_view_wipe_blanks_rows() {
    let (mut game, mut matrix, view) = setup(GameConfig::default());
    game.board_mut().set(4, 0, Cell::Filled);
    assert_eq!(game.settle(), StepResult::GameOver);

    view.render(&game.snapshot(), &mut matrix);
    assert_eq!(matrix.get(15, 6), Some(COLOR_LOCKED));
    for frame in game.drain_frames() {
        view.render_frame(&frame, &mut matrix);
        matrix.refresh().unwrap();
    }
    assert!((6..26).all(|y| (11..21).all(|x| matrix.get(x, y) == Some(COLOR_BACKGROUND))));
    assert_eq!(matrix.presented(), 20);
}
