//! Pieces module - the static piece catalog
//!
//! Every kind maps to an ordered list of rotation states. Kinds whose shape
//! repeats under 180° turns (I, S, Z) carry two states and O carries one, so
//! rotation cycles modulo the per-kind count rather than a fixed four.
//!
//! Offsets are `(dx, dy)` from the piece anchor, with y growing downward.

use crate::types::PieceKind;

/// Offset of a single mino relative to piece anchor
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from piece anchor
pub type PieceShape = [MinoOffset; 4];

/// Widest footprint in the catalog (the horizontal I)
pub const MAX_PIECE_WIDTH: u8 = 4;

/// Tallest footprint in the catalog (the vertical I)
pub const MAX_PIECE_HEIGHT: u8 = 4;

const I_STATES: [PieceShape; 2] = [
    [(0, 0), (0, 1), (0, 2), (0, 3)],
    [(0, 0), (1, 0), (2, 0), (3, 0)],
];

const O_STATES: [PieceShape; 1] = [[(0, 0), (1, 0), (0, 1), (1, 1)]];

const S_STATES: [PieceShape; 2] = [
    [(1, 0), (2, 0), (0, 1), (1, 1)],
    [(0, 0), (0, 1), (1, 1), (1, 2)],
];

const Z_STATES: [PieceShape; 2] = [
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    [(1, 0), (0, 1), (1, 1), (0, 2)],
];

const J_STATES: [PieceShape; 4] = [
    [(0, 0), (0, 1), (1, 1), (2, 1)],
    [(0, 0), (1, 0), (0, 1), (0, 2)],
    [(0, 0), (1, 0), (2, 0), (2, 1)],
    [(1, 0), (1, 1), (0, 2), (1, 2)],
];

const L_STATES: [PieceShape; 4] = [
    [(2, 0), (0, 1), (1, 1), (2, 1)],
    [(0, 0), (0, 1), (0, 2), (1, 2)],
    [(0, 0), (1, 0), (2, 0), (0, 1)],
    [(0, 0), (1, 0), (1, 1), (1, 2)],
];

const T_STATES: [PieceShape; 4] = [
    [(0, 1), (1, 1), (2, 1), (1, 0)],
    [(0, 0), (0, 1), (0, 2), (1, 1)],
    [(0, 0), (1, 0), (2, 0), (1, 1)],
    [(1, 0), (0, 1), (1, 1), (1, 2)],
];

/// All rotation states of a kind, in rotation order
pub fn rotation_states(kind: PieceKind) -> &'static [PieceShape] {
    match kind {
        PieceKind::I => &I_STATES,
        PieceKind::O => &O_STATES,
        PieceKind::T => &T_STATES,
        PieceKind::S => &S_STATES,
        PieceKind::Z => &Z_STATES,
        PieceKind::J => &J_STATES,
        PieceKind::L => &L_STATES,
    }
}

/// Number of distinct rotation states for a kind (1, 2 or 4)
pub fn rotation_count(kind: PieceKind) -> usize {
    rotation_states(kind).len()
}

/// Next rotation index, wrapping modulo the kind's state count
pub fn next_rotation(kind: PieceKind, current: usize) -> usize {
    (current + 1) % rotation_count(kind)
}

/// Get the shape for a kind and rotation index
///
/// Out-of-range indices wrap, so any index a caller holds is usable.
pub fn get_shape(kind: PieceKind, rotation: usize) -> PieceShape {
    let states = rotation_states(kind);
    states[rotation % states.len()]
}

/// Horizontal span of a rotation state, in cells
pub fn bounding_width(kind: PieceKind, rotation: usize) -> u8 {
    span(get_shape(kind, rotation).iter().map(|&(dx, _)| dx))
}

/// Vertical span of a rotation state, in cells
pub fn bounding_height(kind: PieceKind, rotation: usize) -> u8 {
    span(get_shape(kind, rotation).iter().map(|&(_, dy)| dy))
}

fn span(values: impl Iterator<Item = i8> + Clone) -> u8 {
    let min = values.clone().min().unwrap_or(0);
    let max = values.max().unwrap_or(0);
    (max - min + 1) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_counts_match_symmetry() {
        assert_eq!(rotation_count(PieceKind::O), 1);
        assert_eq!(rotation_count(PieceKind::I), 2);
        assert_eq!(rotation_count(PieceKind::S), 2);
        assert_eq!(rotation_count(PieceKind::Z), 2);
        assert_eq!(rotation_count(PieceKind::T), 4);
        assert_eq!(rotation_count(PieceKind::J), 4);
        assert_eq!(rotation_count(PieceKind::L), 4);
    }

    #[test]
    fn every_state_has_four_distinct_cells() {
        for kind in PieceKind::ALL {
            for shape in rotation_states(kind) {
                for (i, a) in shape.iter().enumerate() {
                    for b in &shape[i + 1..] {
                        assert_ne!(a, b, "{:?} repeats a cell", kind);
                    }
                }
            }
        }
    }

    #[test]
    fn next_rotation_wraps() {
        assert_eq!(next_rotation(PieceKind::O, 0), 0);
        assert_eq!(next_rotation(PieceKind::I, 1), 0);
        assert_eq!(next_rotation(PieceKind::T, 3), 0);
        assert_eq!(next_rotation(PieceKind::T, 1), 2);
    }

    #[test]
    fn i_piece_spans() {
        assert_eq!(bounding_width(PieceKind::I, 0), 1);
        assert_eq!(bounding_height(PieceKind::I, 0), 4);
        assert_eq!(bounding_width(PieceKind::I, 1), 4);
        assert_eq!(bounding_height(PieceKind::I, 1), 1);
    }
}
