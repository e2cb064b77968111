//! Board module - manages the game grid
//!
//! The board is a grid of optional piece kinds, 10x20 by default but
//! configurable at construction. Storage is a flat row-major `Vec` indexed
//! as `y * columns + x`. Coordinates: x ranges left to right, y top to
//! bottom. Pieces spawn partially above the board, so placement checks
//! permit negative rows while still enforcing column bounds - that
//! asymmetry is deliberate and load-bearing.

use gridfall_types::{Cell, DEFAULT_COLUMNS, DEFAULT_ROWS};

use crate::piece::Piece;

/// Smallest dimension that fits every tetromino footprint
const MIN_DIMENSION: u8 = 4;

/// The game grid: occupancy is the single source of truth for collisions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    columns: u8,
    rows: u8,
    /// Flat cell storage, row-major (y * columns + x)
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board with the given dimensions.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is below 4 (the widest and tallest
    /// tetromino footprint); such a construction is a programming defect.
    pub fn new(columns: u8, rows: u8) -> Self {
        assert!(
            columns >= MIN_DIMENSION && rows >= MIN_DIMENSION,
            "board dimensions {}x{} below minimum {}x{}",
            columns,
            rows,
            MIN_DIMENSION,
            MIN_DIMENSION
        );
        Self {
            columns,
            rows,
            cells: vec![None; columns as usize * rows as usize],
        }
    }

    /// Create an empty board with the standard 10x20 dimensions
    pub fn standard() -> Self {
        Self::new(DEFAULT_COLUMNS, DEFAULT_ROWS)
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline]
    fn index(&self, x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= self.columns as i8 || y < 0 || y >= self.rows as i8 {
            return None;
        }
        Some(y as usize * self.columns as usize + x as usize)
    }

    pub fn columns(&self) -> u8 {
        self.columns
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    /// Get cell at (x, y); `None` if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y); returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if (x, y) is within bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Check whether every block of `piece` may legally rest where it is.
    ///
    /// Columns are checked unconditionally; rows may be negative (above the
    /// visible board) and are then exempt from the occupancy check, but a
    /// row at or past the bottom always fails.
    pub fn is_valid_placement(&self, piece: &Piece) -> bool {
        for (x, y) in piece.blocks() {
            if x < 0 || x >= self.columns as i8 {
                return false;
            }
            if y >= self.rows as i8 {
                return false;
            }
            if y >= 0 && self.is_occupied(x, y) {
                return false;
            }
        }
        true
    }

    /// Write the piece's kind into every in-bounds block it covers.
    /// Out-of-bounds blocks are ignored; validation happens before fixing.
    pub fn fix_piece(&mut self, piece: &Piece) {
        for (x, y) in piece.blocks() {
            self.set(x, y, Some(piece.kind));
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_complete(&self, y: usize) -> bool {
        if y >= self.rows as usize {
            return false;
        }
        let start = y * self.columns as usize;
        let end = start + self.columns as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove row `y`: shift every row above it down by one and insert an
    /// empty row at the top. Uses `copy_within` on the flat storage.
    fn clear_row(&mut self, y: usize) {
        let width = self.columns as usize;
        for row in (1..=y).rev() {
            let src = (row - 1) * width;
            self.cells.copy_within(src..src + width, row * width);
        }
        for cell in &mut self.cells[0..width] {
            *cell = None;
        }
    }

    /// Clear every completed row and return how many were removed.
    ///
    /// Scans bottom-to-top. After removing a row the same index is
    /// re-examined, since the row shifted into it may itself be complete;
    /// this handles cascaded clears in one pass. The count is 0-4 in
    /// standard play but uncapped for nonstandard board heights.
    pub fn clear_completed_lines(&mut self) -> u32 {
        let mut cleared = 0;
        let mut row = self.rows as i32 - 1;
        while row >= 0 {
            if self.is_row_complete(row as usize) {
                self.clear_row(row as usize);
                cleared += 1;
            } else {
                row -= 1;
            }
        }
        cleared
    }

    /// True once any cell of the topmost row is occupied; checked after a
    /// piece is fixed (and its lines cleared) to end the game.
    pub fn is_overflowed(&self) -> bool {
        self.cells[0..self.columns as usize]
            .iter()
            .any(|cell| cell.is_some())
    }

    /// Clear all cells
    pub fn reset(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Get a reference to the flat cell storage
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Export the grid as bytes into `out` (0 = empty, 1..=7 = kind index),
    /// reusing the caller's buffer.
    pub fn write_u8_grid(&self, out: &mut Vec<u8>) {
        out.clear();
        out.extend(
            self.cells
                .iter()
                .map(|cell| cell.map_or(0, |kind| kind.index())),
        );
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}
