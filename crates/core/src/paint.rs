//! Paint the playfield onto a [`DisplaySurface`].
//!
//! Only the W x H game area is drawn, offset by `origin`. Bezel, preview box
//! and score readout belong to whoever owns the rest of the surface.

use crate::frames::AnimationFrame;
use crate::io::DisplaySurface;
use crate::snapshot::GameSnapshot;
use crate::types::{COLOR_ACTIVE, COLOR_BACKGROUND, COLOR_BEZEL, COLOR_LOCKED};

/// Top-left pixel of the playfield on the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Origin {
    pub x: u16,
    pub y: u16,
}

impl Origin {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Locked cells plus the live piece. Cells of the piece above row 0 are
/// skipped.
pub fn paint_playfield<S: DisplaySurface>(surface: &mut S, snap: &GameSnapshot, origin: Origin) {
    for y in 0..snap.height {
        for x in 0..snap.width {
            let color = if snap.cell(x, y) {
                COLOR_LOCKED
            } else {
                COLOR_BACKGROUND
            };
            surface.set_cell(origin.x + x as u16, origin.y + y as u16, color);
        }
    }

    if let Some(active) = snap.active {
        for (x, y) in active.cells {
            if x >= 0 && y >= 0 && x < snap.width as i16 && y < snap.height as i16 {
                surface.set_cell(origin.x + x as u16, origin.y + y as u16, COLOR_ACTIVE);
            }
        }
    }
}

/// Overlay one animation frame on top of an already painted playfield.
///
/// `Compacted` paints nothing; the caller repaints the playfield from a fresh
/// snapshot.
pub fn paint_frame<S: DisplaySurface>(
    surface: &mut S,
    frame: &AnimationFrame,
    width: u8,
    origin: Origin,
) {
    match frame {
        AnimationFrame::FlashRows { rows, lit, .. } => {
            let color = if *lit { COLOR_BEZEL } else { COLOR_BACKGROUND };
            for &row in rows {
                paint_row(surface, row as u16, width, color, origin);
            }
        }
        AnimationFrame::WipeRow { row, .. } => {
            paint_row(surface, *row as u16, width, COLOR_BACKGROUND, origin);
        }
        AnimationFrame::Compacted { .. } => {}
    }
}

fn paint_row<S: DisplaySurface>(surface: &mut S, row: u16, width: u8, color: u8, origin: Origin) {
    for x in 0..width as u16 {
        surface.set_cell(origin.x + x, origin.y + row, color);
    }
}
