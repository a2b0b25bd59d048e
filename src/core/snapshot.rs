//! Read-only session snapshot for the rendering layer.
//!
//! The renderer never touches live session state; it consumes a copied
//! view of the board, the active piece's absolute cells, the score and
//! the status.

use arrayvec::ArrayVec;

use crate::core::game::{ActivePiece, GameSession};
use crate::types::{Cell, PieceKind, Status, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: u8,
    /// Absolute board coordinates of the piece's occupied cells
    pub cells: [(i8, i8); 4],
}

impl From<&ActivePiece> for ActiveSnapshot {
    fn from(piece: &ActivePiece) -> Self {
        let cells: ArrayVec<(i8, i8), 4> = piece.cells();
        Self {
            kind: piece.kind,
            rotation: piece.rotation(),
            cells: cells.into_inner().unwrap_or([(0, 0); 4]),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub status: Status,
}

impl GameSnapshot {
    pub fn capture(session: &GameSession) -> Self {
        let mut board = [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        session.board().write_grid(&mut board);
        Self {
            board,
            active: session.active().map(ActiveSnapshot::from),
            score: session.score(),
            status: session.status(),
        }
    }
}
