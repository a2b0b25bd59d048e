//! Shape definitions and the rotation transform
//!
//! Each tetromino is an occupancy matrix with a natural bounding box
//! (the I piece is 1x4, the O 2x2, the rest 2x3). Rotation produces a
//! brand-new matrix with width and height swapped; there is no fixed
//! 4x4 frame and no precomputed orientation table.

use arrayvec::ArrayVec;

use crate::types::{PieceKind, BOARD_WIDTH};

/// Occupancy matrix for one piece orientation.
///
/// Rows are stored as bitmasks, bit `x` set when column `x` of that
/// row is occupied. Width and height never exceed 4.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShapeGrid {
    width: u8,
    height: u8,
    rows: [u8; 4],
}

impl ShapeGrid {
    const fn new(width: u8, height: u8, rows: [u8; 4]) -> Self {
        Self {
            width,
            height,
            rows,
        }
    }

    pub fn width(&self) -> u8 {
        self.width
    }

    pub fn height(&self) -> u8 {
        self.height
    }

    /// Whether local cell (x, y) is occupied
    #[inline(always)]
    pub fn occupied(&self, x: u8, y: u8) -> bool {
        y < self.height && x < self.width && (self.rows[y as usize] >> x) & 1 == 1
    }

    /// The occupied local cells in row-major order. Every tetromino
    /// has exactly four.
    pub fn cells(&self) -> ArrayVec<(i8, i8), 4> {
        let mut out = ArrayVec::new();
        for y in 0..self.height {
            for x in 0..self.width {
                if self.occupied(x, y) {
                    out.push((x as i8, y as i8));
                }
            }
        }
        out
    }

    /// A new grid rotated a quarter turn clockwise.
    ///
    /// Pure transform: the receiver is untouched, dimensions swap, and
    /// new cell (x', y') comes from old cell (y', h - 1 - x').
    pub fn rotated(&self) -> ShapeGrid {
        let (w, h) = (self.width, self.height);
        let mut rows = [0u8; 4];
        for y in 0..w {
            for x in 0..h {
                if self.occupied(y, h - 1 - x) {
                    rows[y as usize] |= 1 << x;
                }
            }
        }
        ShapeGrid::new(h, w, rows)
    }

    /// Spawn anchor for this orientation: horizontally centered
    /// (rounding left), topmost row at board row 0
    pub fn spawn_anchor(&self) -> (i8, i8) {
        (((BOARD_WIDTH - self.width) / 2) as i8, 0)
    }
}

/// Canonical (spawn) orientation for each kind
pub fn canonical_grid(kind: PieceKind) -> ShapeGrid {
    match kind {
        PieceKind::I => ShapeGrid::new(4, 1, [0b1111, 0, 0, 0]),
        PieceKind::O => ShapeGrid::new(2, 2, [0b11, 0b11, 0, 0]),
        PieceKind::T => ShapeGrid::new(3, 2, [0b111, 0b010, 0, 0]),
        PieceKind::L => ShapeGrid::new(3, 2, [0b111, 0b001, 0, 0]),
        PieceKind::J => ShapeGrid::new(3, 2, [0b111, 0b100, 0, 0]),
        PieceKind::S => ShapeGrid::new(3, 2, [0b011, 0b110, 0, 0]),
        PieceKind::Z => ShapeGrid::new(3, 2, [0b110, 0b011, 0, 0]),
    }
}
