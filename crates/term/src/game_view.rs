//! GameView: lays a game snapshot out on the pixel matrix.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Layout follows the reference panel: playfield centred with a one-pixel
//! bezel, an 8x8 next-piece box on the left and a two-digit score on the
//! right.

use crate::core::{get_shape, paint_frame, paint_playfield, AnimationFrame, GameSnapshot, Origin};
use crate::fb::PixelMatrix;
use crate::types::{PieceKind, COLOR_ACTIVE, COLOR_BACKGROUND, COLOR_BEZEL, COLOR_LOCKED};

const PREVIEW_ORIGIN: Origin = Origin::new(1, 5);
const PREVIEW_SIZE: u16 = 8;
const SCORE_ORIGIN: Origin = Origin::new(23, 6);

const GLYPH_W: u16 = 3;
const GLYPH_H: u16 = 5;
const GLYPH_ADVANCE: u16 = 4;

/// 3x5 digit glyphs, one bitmask per row, most significant bit on the left
const DIGITS: [[u8; GLYPH_H as usize]; 10] = [
    [0b111, 0b101, 0b101, 0b101, 0b111],
    [0b010, 0b010, 0b010, 0b010, 0b010],
    [0b111, 0b001, 0b111, 0b100, 0b111],
    [0b111, 0b001, 0b111, 0b001, 0b111],
    [0b101, 0b101, 0b111, 0b001, 0b001],
    [0b111, 0b100, 0b111, 0b001, 0b111],
    [0b111, 0b100, 0b111, 0b101, 0b111],
    [0b111, 0b001, 0b001, 0b010, 0b010],
    [0b111, 0b101, 0b111, 0b101, 0b111],
    [0b111, 0b101, 0b111, 0b001, 0b111],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameView {
    board_w: u8,
    board_h: u8,
    playfield: Origin,
}

impl GameView {
    /// View for a `board_w` x `board_h` playfield centred on `matrix`.
    pub fn new(board_w: u8, board_h: u8, matrix: &PixelMatrix) -> Self {
        let playfield = Origin::new(
            matrix.width().saturating_sub(board_w as u16) / 2,
            matrix.height().saturating_sub(board_h as u16) / 2,
        );
        Self {
            board_w,
            board_h,
            playfield,
        }
    }

    pub fn playfield_origin(&self) -> Origin {
        self.playfield
    }

    /// Repaint everything from a snapshot.
    pub fn render(&self, snap: &GameSnapshot, matrix: &mut PixelMatrix) {
        matrix.clear(COLOR_BACKGROUND);
        matrix.outline(
            self.playfield.x,
            self.playfield.y,
            self.board_w as u16,
            self.board_h as u16,
            COLOR_BEZEL,
        );
        paint_playfield(matrix, snap, self.playfield);
        self.draw_preview(snap.next, matrix);
        draw_score(snap.display_score, matrix);
    }

    /// Overlay an animation frame on whatever was rendered last.
    pub fn render_frame(&self, frame: &AnimationFrame, matrix: &mut PixelMatrix) {
        paint_frame(matrix, frame, self.board_w, self.playfield);
    }

    fn draw_preview(&self, kind: PieceKind, matrix: &mut PixelMatrix) {
        let Origin { x, y } = PREVIEW_ORIGIN;
        if x + PREVIEW_SIZE > self.playfield.x.saturating_sub(1) {
            // Wide boards leave no room on the left.
            return;
        }
        matrix.fill_rect(x, y, PREVIEW_SIZE, PREVIEW_SIZE, COLOR_BACKGROUND);
        let offset_x = PREVIEW_SIZE / 2;
        let offset_y = PREVIEW_SIZE / 2 - 2;
        for (dx, dy) in get_shape(kind, 0) {
            matrix.set(
                x + offset_x + dx as u16,
                y + offset_y + dy as u16,
                COLOR_ACTIVE,
            );
        }
    }
}

fn draw_score(value: u8, matrix: &mut PixelMatrix) {
    let Origin { x, y } = SCORE_ORIGIN;
    matrix.fill_rect(x, y, GLYPH_ADVANCE + GLYPH_W, GLYPH_H, COLOR_BACKGROUND);
    let value = value % 100;
    draw_digit(value / 10, x, y, matrix);
    draw_digit(value % 10, x + GLYPH_ADVANCE, y, matrix);
}

fn draw_digit(digit: u8, x: u16, y: u16, matrix: &mut PixelMatrix) {
    let Some(rows) = DIGITS.get(digit as usize) else {
        return;
    };
    for (dy, bits) in rows.iter().enumerate() {
        for dx in 0..GLYPH_W {
            if bits & (1 << (GLYPH_W - 1 - dx)) != 0 {
                matrix.set(x + dx, y + dy as u16, COLOR_LOCKED);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, GameController};
    use crate::types::Cell;

    fn setup() -> (GameController, PixelMatrix, GameView) {
        let game = GameController::new(GameConfig::default(), 7).unwrap();
        let matrix = PixelMatrix::for_board(10, 20);
        let view = GameView::new(10, 20, &matrix);
        (game, matrix, view)
    }

    #[test]
    fn playfield_is_centred_with_bezel() {
        let (game, mut matrix, view) = setup();
        assert_eq!(view.playfield_origin(), Origin::new(11, 6));

        view.render(&game.snapshot(), &mut matrix);
        assert_eq!(matrix.get(10, 5), Some(COLOR_BEZEL));
        assert_eq!(matrix.get(21, 26), Some(COLOR_BEZEL));
        assert_eq!(matrix.get(10, 15), Some(COLOR_BEZEL));
        assert_eq!(matrix.get(15, 26), Some(COLOR_BEZEL));
    }

    #[test]
    fn locked_cells_land_inside_bezel() {
        let (mut game, mut matrix, view) = setup();
        game.board_mut().set(0, 19, Cell::Filled);
        view.render(&game.snapshot(), &mut matrix);
        assert_eq!(matrix.get(11, 25), Some(COLOR_LOCKED));
    }

    #[test]
    fn preview_shows_next_kind() {
        let (game, mut matrix, view) = setup();
        view.render(&game.snapshot(), &mut matrix);

        let lit = (0..PREVIEW_SIZE)
            .flat_map(|dy| (0..PREVIEW_SIZE).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| matrix.get(1 + dx, 5 + dy) == Some(COLOR_ACTIVE))
            .count();
        assert_eq!(lit, 4);
    }

    #[test]
    fn score_digits_render() {
        let mut matrix = PixelMatrix::new(32, 32);
        draw_score(10, &mut matrix);
        // "1" is a single centre column.
        assert_eq!(matrix.get(24, 6), Some(COLOR_LOCKED));
        assert_eq!(matrix.get(23, 6), Some(COLOR_BACKGROUND));
        // "0" has a hollow middle.
        assert_eq!(matrix.get(27, 7), Some(COLOR_LOCKED));
        assert_eq!(matrix.get(28, 7), Some(COLOR_BACKGROUND));

        draw_score(7, &mut matrix);
        assert_eq!(matrix.get(24, 6), Some(COLOR_LOCKED));
        assert_eq!(matrix.get(24, 7), Some(COLOR_BACKGROUND));
    }

    #[test]
    fn flash_frame_overlays_rows() {
        let (game, mut matrix, view) = setup();
        view.render(&game.snapshot(), &mut matrix);
        let mut rows = crate::core::FullRows::new();
        rows.push(19);
        let frame = AnimationFrame::FlashRows {
            rows,
            lit: true,
            hold_ms: 250,
        };
        view.render_frame(&frame, &mut matrix);
        assert!((11..21).all(|x| matrix.get(x, 25) == Some(COLOR_BEZEL)));
        assert_eq!(matrix.get(11, 24), Some(COLOR_BACKGROUND));
    }
}
