//! Board module - the playfield grid
//!
//! The board is a W x H grid where each cell is empty or filled. Only locked
//! pieces live here; the falling piece is tracked by the controller.
//! Uses a flat row-major vector sized once at construction.
//! Coordinates: (x, y) where x grows left to right and y grows top to bottom.
//!
//! Probing rules used by collision:
//! - any x outside `[0, W)` is a wall and counts as filled
//! - any y at or below `H` is the floor and counts as filled
//! - any y above row 0 counts as empty, so pieces may hang over the top edge

use arrayvec::ArrayVec;

use crate::piece::Piece;
use crate::types::{Cell, MAX_BOARD_DIMENSION};

/// Row indices reported by a line scan, ascending
pub type FullRows = ArrayVec<usize, { MAX_BOARD_DIMENSION as usize }>;

/// The playfield
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    width: u8,
    height: u8,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board.
    ///
    /// Dimensions are validated by `GameConfig`; values above
    /// `MAX_BOARD_DIMENSION` are clamped so row scans stay within `FullRows`.
    pub fn new(width: u8, height: u8) -> Self {
        let width = width.min(MAX_BOARD_DIMENSION);
        let height = height.min(MAX_BOARD_DIMENSION);
        Self {
            width,
            height,
            cells: vec![Cell::Empty; width as usize * height as usize],
        }
    }

    #[inline(always)]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= self.width as i16 || y < 0 || y >= self.height as i16 {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Occupancy as seen by collision: walls and floor are filled, the space
    /// above the top row is empty.
    pub fn is_cell_filled(&self, x: i16, y: i16) -> bool {
        if x < 0 || x >= self.width as i16 || y >= self.height as i16 {
            return true;
        }
        if y < 0 {
            return false;
        }
        matches!(self.get(x, y), Some(Cell::Filled))
    }

    /// Would `piece`, translated by `(dx, dy)`, overlap a wall, the floor or
    /// a locked cell?
    pub fn collides(&self, piece: &Piece, dx: i16, dy: i16) -> bool {
        piece
            .cells_at(dx, dy)
            .iter()
            .any(|&(x, y)| self.is_cell_filled(x, y))
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.height as usize {
            return false;
        }
        let start = y * self.width as usize;
        let end = start + self.width as usize;
        self.cells[start..end].iter().all(Cell::is_filled)
    }

    /// Write the piece's footprint into the grid.
    ///
    /// Cells outside the playfield are dropped. Returns how many cells were
    /// written.
    pub fn lock_piece(&mut self, piece: &Piece) -> usize {
        let mut written = 0;
        for (x, y) in piece.cells() {
            if self.set(x, y, Cell::Filled) {
                written += 1;
            }
        }
        written
    }

    /// Scan top to bottom and report every full row, ascending.
    ///
    /// Pure: the grid is untouched so the caller can animate the rows before
    /// calling [`Board::compact_rows`].
    pub fn clear_full_lines(&self) -> FullRows {
        let mut rows = FullRows::new();
        for y in 0..self.height as usize {
            if self.is_row_full(y) {
                rows.push(y);
            }
        }
        rows
    }

    /// Remove the given rows and let everything above fall into the gaps.
    ///
    /// Surviving rows keep their relative order; vacated rows at the top come
    /// back empty. Unknown or duplicate indices are ignored.
    /// Returns the number of rows removed.
    pub fn compact_rows(&mut self, rows: &[usize]) -> usize {
        let width = self.width as usize;
        let height = self.height as usize;
        let mut write_y = height;
        let mut removed = 0;

        // Two-pointer walk from the bottom, copying kept rows downward.
        for read_y in (0..height).rev() {
            if rows.contains(&read_y) {
                removed += 1;
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src_start = read_y * width;
                let dst_start = write_y * width;
                self.cells
                    .copy_within(src_start..src_start + width, dst_start);
            }
        }

        self.cells[..write_y * width].fill(Cell::Empty);
        removed
    }

    /// Detect and compact in one step; returns the rows that were removed.
    pub fn clear_full_rows(&mut self) -> FullRows {
        let rows = self.clear_full_lines();
        if !rows.is_empty() {
            self.compact_rows(&rows);
        }
        rows
    }

    /// True iff any cell of the topmost playable row is filled.
    pub fn row_is_game_over(&self) -> bool {
        let width = self.width as usize;
        self.cells[..width].iter().any(Cell::is_filled)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// One row as a slice
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= self.height as usize {
            return None;
        }
        let start = y * self.width as usize;
        Some(&self.cells[start..start + self.width as usize])
    }

    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_filled()).count()
    }

    /// Fill every cell of a row (scripted setups and tests)
    pub fn fill_row(&mut self, y: usize) {
        if let Some(start) = self.index(0, y as i16) {
            self.cells[start..start + self.width as usize].fill(Cell::Filled);
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Parse a board from text rows, `#` filled and anything else empty.
    ///
    /// The first row is the top of the playfield. Returns `None` if the rows
    /// are ragged or empty.
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first()?.chars().count();
        if width == 0
            || height > MAX_BOARD_DIMENSION as usize
            || width > MAX_BOARD_DIMENSION as usize
            || rows.iter().any(|r| r.chars().count() != width)
        {
            return None;
        }

        let mut board = Board::new(width as u8, height as u8);
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().enumerate() {
                if ch == '#' {
                    board.set(x as i16, y as i16, Cell::Filled);
                }
            }
        }
        Some(board)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(crate::types::BOARD_WIDTH, crate::types::BOARD_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_board_index_calculation() {
        let board = Board::new(10, 20);
        assert_eq!(board.index(0, 0), Some(0));
        assert_eq!(board.index(9, 0), Some(9));
        assert_eq!(board.index(0, 1), Some(10));
        assert_eq!(board.index(9, 19), Some(199));
        assert_eq!(board.index(-1, 0), None);
        assert_eq!(board.index(10, 0), None);
        assert_eq!(board.index(0, 20), None);
    }

    #[test]
    fn test_above_top_is_empty_but_walls_are_not() {
        let board = Board::new(10, 20);
        assert!(!board.is_cell_filled(4, -3));
        assert!(board.is_cell_filled(-1, -3));
        assert!(board.is_cell_filled(10, 5));
        assert!(board.is_cell_filled(4, 20));
    }

    #[test]
    fn test_collides_against_locked_cell() {
        let mut board = Board::new(10, 20);
        board.set(3, 5, Cell::Filled);
        let piece = Piece::new(PieceKind::O, 3, 3);
        assert!(!board.collides(&piece, 0, 0));
        assert!(board.collides(&piece, 0, 1));
        assert!(!board.collides(&piece, 1, 1));
    }

    #[test]
    fn test_lock_drops_cells_above_top() {
        let mut board = Board::new(10, 20);
        let piece = Piece::new(PieceKind::I, 0, -2);
        assert_eq!(board.lock_piece(&piece), 2);
        assert_eq!(board.get(0, 0), Some(Cell::Filled));
        assert_eq!(board.get(0, 1), Some(Cell::Filled));
        assert_eq!(board.filled_count(), 2);
    }

    #[test]
    fn test_compact_non_adjacent_rows() {
        let mut board = Board::from_rows(&[
            "#...", //
            "####", //
            ".#..", //
            "####", //
            "..#.",
        ])
        .unwrap();
        let rows = board.clear_full_lines();
        assert_eq!(rows.as_slice(), &[1, 3]);
        assert_eq!(board.compact_rows(&rows), 2);

        let expected = Board::from_rows(&[
            "....", //
            "....", //
            "#...", //
            ".#..", //
            "..#.",
        ])
        .unwrap();
        assert_eq!(board, expected);
    }

    #[test]
    fn test_row_slices_and_clear() {
        let mut board = Board::new(10, 20);
        board.fill_row(19);
        assert!(board.row(19).unwrap().iter().all(|c| c.is_filled()));
        assert!(board.row(18).unwrap().iter().all(|c| !c.is_filled()));
        assert_eq!(board.row(19).unwrap().len(), 10);
        assert!(board.row(20).is_none());

        board.clear();
        assert_eq!(board.filled_count(), 0);
    }

    #[test]
    fn test_from_rows_rejects_ragged_input() {
        assert!(Board::from_rows(&["##", "#"]).is_none());
        assert!(Board::from_rows(&[]).is_none());
    }
}
