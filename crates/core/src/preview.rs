//! Holder for the upcoming piece, read by whatever draws the preview box.

use crate::pieces::{get_shape, PieceShape};
use crate::types::PieceKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NextPiecePreview {
    kind: PieceKind,
}

impl NextPiecePreview {
    pub fn new(kind: PieceKind) -> Self {
        Self { kind }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Replace the upcoming kind, returning the one it displaced
    pub fn replace(&mut self, kind: PieceKind) -> PieceKind {
        std::mem::replace(&mut self.kind, kind)
    }

    /// Footprint shown in the preview (rotation 0)
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, 0)
    }
}
