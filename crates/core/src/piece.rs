//! The live piece: a catalog kind placed on the playfield.

use crate::pieces::{bounding_height, bounding_width, get_shape, next_rotation, PieceShape};
use crate::types::PieceKind;

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: usize,
    pub x: i16,
    pub y: i16,
}

impl Piece {
    pub fn new(kind: PieceKind, x: i16, y: i16) -> Self {
        Self {
            kind,
            rotation: 0,
            x,
            y,
        }
    }

    /// Spawn position for a playfield of `width` columns: centred, top row.
    pub fn spawn(kind: PieceKind, width: u8) -> Self {
        Self::new(kind, spawn_x(width), 0)
    }

    /// Get the shape (mino offsets) for current rotation
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute board coordinates of each mino after translating by `(dx, dy)`
    pub fn cells_at(&self, dx: i16, dy: i16) -> [(i16, i16); 4] {
        self.shape().map(|(ox, oy)| {
            (
                self.x + dx + ox as i16,
                self.y + dy + oy as i16,
            )
        })
    }

    /// Absolute board coordinates of each mino
    pub fn cells(&self) -> [(i16, i16); 4] {
        self.cells_at(0, 0)
    }

    /// Copy of this piece translated by `(dx, dy)`
    pub fn moved(&self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Copy of this piece advanced to its next rotation state
    pub fn rotated(&self) -> Self {
        Self {
            rotation: next_rotation(self.kind, self.rotation),
            ..*self
        }
    }

    pub fn width(&self) -> u8 {
        bounding_width(self.kind, self.rotation)
    }

    pub fn height(&self) -> u8 {
        bounding_height(self.kind, self.rotation)
    }
}

/// Anchor column that centres a 4-wide footprint on the playfield
pub fn spawn_x(width: u8) -> i16 {
    width as i16 / 2 - 2
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_centres_on_default_board() {
        let piece = Piece::spawn(PieceKind::T, 10);
        assert_eq!((piece.x, piece.y, piece.rotation), (3, 0, 0));
    }

    #[test]
    fn cells_follow_anchor() {
        let piece = Piece::new(PieceKind::O, 4, 7);
        assert_eq!(piece.cells(), [(4, 7), (5, 7), (4, 8), (5, 8)]);
        assert_eq!(piece.cells_at(-1, 1)[0], (3, 8));
    }

    #[test]
    fn rotated_does_not_move_anchor() {
        let piece = Piece::new(PieceKind::J, 2, 5).rotated();
        assert_eq!(piece.rotation, 1);
        assert_eq!((piece.x, piece.y), (2, 5));
    }
}
