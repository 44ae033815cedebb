//! Board module - manages the game grid
//!
//! The board is a 10x24 grid where each cell can be empty or filled with a
//! piece kind. Uses a flat array for cache locality and zero allocation.
//! Coordinates: x ranges 0..9 (left to right), y grows *upward* with row 0
//! stored as the bottom row.
//!
//! Out-of-range queries degrade to "empty" and out-of-range writes are
//! silent no-ops, so callers never guard bounds separately.

use arrayvec::ArrayVec;

use crate::types::{Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// The game board - 10 columns x 24 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x), bottom row first
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH || y < 0 || y >= BOARD_HEIGHT {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Get cell at position (x, y). Out-of-range reads are empty.
    pub fn get(&self, x: i8, y: i8) -> Cell {
        Self::index(x, y).and_then(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y). Out-of-range writes are dropped, which
    /// lets pieces extend above the visible top while falling in.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) {
        if let Some(idx) = Self::index(x, y) {
            self.cells[idx] = cell;
        }
    }

    /// Whether (x, y) is inside the playfield walls and floor.
    ///
    /// The top is unbounded: pieces may occupy cells above the visible
    /// board while falling in.
    pub fn in_bounds(x: i8, y: i8) -> bool {
        x >= 0 && x < BOARD_WIDTH && y >= 0
    }

    /// Whether a piece cell may occupy (x, y): in bounds and empty
    pub fn space_clear(&self, x: i8, y: i8) -> bool {
        Self::in_bounds(x, y) && self.get(x, y).is_none()
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: i8) -> bool {
        let Some(start) = Self::index(0, y) else {
            return false;
        };
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove row `y` by shifting every row above it down one.
    ///
    /// The vacated top row becomes empty.
    fn remove_row(&mut self, y: i8) {
        let width = BOARD_WIDTH as usize;
        let start = (y as usize) * width;
        self.cells.copy_within(start + width..BOARD_SIZE, start);
        for cell in &mut self.cells[BOARD_SIZE - width..] {
            *cell = None;
        }
    }

    /// Clear all full rows, shifting rows above each down by one.
    ///
    /// Returns the cleared row indices (at most 4: a piece spans at most
    /// 4 rows), in top-to-bottom processing order so the shifts compose.
    pub fn clear_full_rows(&mut self) -> ArrayVec<i8, 4> {
        let mut cleared = ArrayVec::new();
        for y in (0..BOARD_HEIGHT).rev() {
            if self.is_row_full(y) {
                self.remove_row(y);
                // Rows below y are untouched, so the downward scan stays valid.
                let _ = cleared.try_push(y);
            }
        }
        cleared
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Read-only snapshot of the grid for rendering
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 23), Some(239));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 24), None);
    }

    #[test]
    fn test_remove_row_shifts_rows_above_down() {
        let mut board = Board::new();
        for x in 0..BOARD_WIDTH {
            board.set(x, 0, Some(PieceKind::I));
        }
        board.set(3, 1, Some(PieceKind::O));
        board.set(7, 2, Some(PieceKind::J));

        board.remove_row(0);

        assert_eq!(board.get(3, 0), Some(PieceKind::O));
        assert_eq!(board.get(7, 1), Some(PieceKind::J));
        assert_eq!(board.get(7, 2), None);
    }

    #[test]
    fn test_space_clear_top_is_unbounded() {
        let board = Board::new();
        assert!(board.space_clear(4, BOARD_HEIGHT + 5));
        assert!(!board.space_clear(-1, 5));
        assert!(!board.space_clear(BOARD_WIDTH, 5));
        assert!(!board.space_clear(4, -1));
    }
}
