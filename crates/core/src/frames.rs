//! Animation frame descriptions.
//!
//! The controller never sleeps or paints. Line clears and the game-over wipe
//! are queued as frames; a renderer plays each one for `hold_ms` on the same
//! thread before asking for the next.

use crate::board::FullRows;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimationFrame {
    /// Paint the cleared rows in the flash colour (`lit`) or background
    FlashRows { rows: FullRows, lit: bool, hold_ms: u32 },
    /// Rows have been removed; redraw the compacted board
    Compacted { hold_ms: u32 },
    /// Game over: blank this row and everything below it
    WipeRow { row: u8, hold_ms: u32 },
}

impl AnimationFrame {
    pub fn hold_ms(&self) -> u32 {
        match self {
            AnimationFrame::FlashRows { hold_ms, .. }
            | AnimationFrame::Compacted { hold_ms }
            | AnimationFrame::WipeRow { hold_ms, .. } => *hold_ms,
        }
    }
}

/// Flash sequence for a clear: one lit/dark pair per cleared line, then the
/// compacted board.
pub fn line_clear_frames(rows: &FullRows, flash_ms: u32, out: &mut Vec<AnimationFrame>) {
    for _ in 0..rows.len() {
        for lit in [true, false] {
            out.push(AnimationFrame::FlashRows {
                rows: rows.clone(),
                lit,
                hold_ms: flash_ms,
            });
        }
    }
    out.push(AnimationFrame::Compacted { hold_ms: 0 });
}

/// Bottom-to-top wipe over the whole playfield
pub fn game_over_frames(height: u8, wipe_ms: u32, out: &mut Vec<AnimationFrame>) {
    for row in (0..height).rev() {
        out.push(AnimationFrame::WipeRow {
            row,
            hold_ms: wipe_ms,
        });
    }
}
