//! Collision detection - pure predicate over board, shape and anchor
//!
//! Called before committing any move or rotation, and on every gravity
//! step. No side effects. The active piece's own cells are never in the
//! board, so there is nothing to exclude here.

use crate::core::board::Board;
use crate::core::shapes::ShapeGrid;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Whether `shape` anchored at `anchor` overlaps a wall, the floor, or
/// a filled cell.
///
/// For every occupied offset: x out of [0, W) collides, y >= H
/// collides, and a filled board cell collides. y < 0 (above the
/// visible board, during spawn) is allowed as long as x stays in
/// bounds.
pub fn collides(board: &Board, shape: &ShapeGrid, anchor: (i8, i8)) -> bool {
    shape.cells().iter().any(|&(dx, dy)| {
        let x = anchor.0 + dx;
        let y = anchor.1 + dy;
        x < 0
            || x >= BOARD_WIDTH as i8
            || y >= BOARD_HEIGHT as i8
            || (y >= 0 && board.is_occupied(x, y))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::shapes::canonical_grid;
    use crate::types::PieceKind;

    #[test]
    fn free_space_never_collides() {
        let board = Board::new();
        let shape = canonical_grid(PieceKind::T);
        assert!(!collides(&board, &shape, (3, 0)));
        assert!(!collides(&board, &shape, (0, 10)));
    }

    #[test]
    fn walls_and_floor_collide() {
        let board = Board::new();
        let shape = canonical_grid(PieceKind::T); // 3 wide, 2 tall

        assert!(collides(&board, &shape, (-1, 0)));
        assert!(collides(&board, &shape, (8, 0))); // right edge past x=9
        assert!(!collides(&board, &shape, (7, 0)));
        assert!(collides(&board, &shape, (3, 19))); // second row at y=20
        assert!(!collides(&board, &shape, (3, 18)));
    }

    #[test]
    fn rows_above_the_board_are_not_out_of_bounds() {
        let board = Board::new();
        let shape = canonical_grid(PieceKind::I).rotated(); // 1 wide, 4 tall
        assert!(!collides(&board, &shape, (5, -3)));
        // X bounds still apply above the board.
        assert!(collides(&board, &shape, (-1, -3)));
    }

    #[test]
    fn filled_cells_collide() {
        let mut board = Board::new();
        board.set(4, 1, Some(PieceKind::O));

        let shape = canonical_grid(PieceKind::T);
        assert!(collides(&board, &shape, (3, 0))); // stem lands on (4, 1)
        assert!(!collides(&board, &shape, (5, 0)));
    }

    // Invariant: a non-colliding anchor means every absolute cell
    // is inside the board and unfilled.
    #[test]
    fn non_colliding_anchor_implies_every_cell_free() {
        let mut board = Board::new();
        for x in 0..10 {
            if x != 4 {
                board.set(x, 19, Some(PieceKind::I));
            }
        }
        board.set(2, 10, Some(PieceKind::S));

        for kind in PieceKind::ALL {
            let mut shape = canonical_grid(kind);
            for _ in 0..4 {
                for ax in -2..12i8 {
                    for ay in 0..22i8 {
                        if collides(&board, &shape, (ax, ay)) {
                            continue;
                        }
                        for (dx, dy) in shape.cells() {
                            let (x, y) = (ax + dx, ay + dy);
                            assert!((0..10).contains(&x) && (0..20).contains(&y));
                            assert!(!board.is_occupied(x, y));
                        }
                    }
                }
                shape = shape.rotated();
            }
        }
    }
}
