//! Board module - the settled occupancy grid
//!
//! A 10x20 grid where each cell is empty or filled with a piece kind,
//! stored as a flat row-major array for cache locality. Coordinates:
//! (x, y) with x in 0..10 left to right, y in 0..20 top to bottom.
//! Cells change only through `merge` and `clear_full_rows`; the active
//! piece is never part of the board.

use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH * BOARD_HEIGHT) as usize;

/// The settled grid - 10 columns x 20 rows, flat storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Row-major cells (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Flat index for (x, y), or None when out of bounds
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Cell at (x, y); None when out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at (x, y). Returns false when out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether (x, y) is within bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Write a settled piece into the grid.
    ///
    /// `cells` are absolute board coordinates. Cells above the visible
    /// board (y < 0) are skipped, matching the source behavior for
    /// pieces that settle while partially off-screen.
    pub fn merge(&mut self, cells: &[(i8, i8)], kind: PieceKind) {
        for &(x, y) in cells {
            if y >= 0 {
                self.set(x, y, Some(kind));
            }
        }
    }

    /// Whether row `y` is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove every full row and compact the survivors downward.
    ///
    /// Surviving rows keep their relative order and shift down by the
    /// number of full rows below them; that many empty rows appear at
    /// the top. Returns the number of rows cleared. Two-pointer scan
    /// with `copy_within`, no allocation.
    pub fn clear_full_rows(&mut self) -> usize {
        let width = BOARD_WIDTH as usize;
        let mut cleared = 0;
        let mut write_y = BOARD_HEIGHT as usize;

        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        // Empty rows enter at the top.
        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared
    }

    /// Number of filled cells on the whole board
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Copy the grid into a 2D array (for snapshots)
    pub fn write_grid(&self, out: &mut [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        let width = BOARD_WIDTH as usize;
        for (y, row) in out.iter_mut().enumerate() {
            let start = y * width;
            row.copy_from_slice(&self.cells[start..start + width]);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
