use crate::board::Board;
use crate::piece::Piece;
use crate::types::{Cell, GamePhase, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: usize,
    pub x: i16,
    pub y: i16,
    pub cells: [(i16, i16); 4],
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
            cells: value.cells(),
        }
    }
}

/// Read-only copy of everything a renderer needs for one frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub width: u8,
    pub height: u8,
    /// Row-major, 1 for filled and 0 for empty
    pub board: Vec<u8>,
    pub active: Option<ActiveSnapshot>,
    pub next: PieceKind,
    pub score: u64,
    pub display_score: u8,
    pub phase: GamePhase,
}

impl GameSnapshot {
    pub fn cell(&self, x: u8, y: u8) -> bool {
        if x >= self.width || y >= self.height {
            return false;
        }
        self.board[y as usize * self.width as usize + x as usize] != 0
    }

    pub fn game_over(&self) -> bool {
        self.phase.is_terminal()
    }
}

impl Board {
    /// Write the board into a flat byte grid (1 = filled)
    pub fn write_u8_grid(&self, out: &mut Vec<u8>) {
        out.clear();
        out.extend(self.cells().iter().map(|c| match c {
            Cell::Filled => 1,
            Cell::Empty => 0,
        }));
    }
}
