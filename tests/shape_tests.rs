//! Shape and rotation tests against the public API

use blockfall::core::{canonical_grid, collides, Board};
use blockfall::types::PieceKind;

#[test]
fn every_kind_has_exactly_four_cells_in_every_orientation() {
    for kind in PieceKind::ALL {
        let mut grid = canonical_grid(kind);
        for turn in 0..4 {
            assert_eq!(grid.cells().len(), 4, "{:?} turn {}", kind, turn);
            grid = grid.rotated();
        }
    }
}

// Four rotations on an otherwise-empty board reproduce
// the original occupied cells.
#[test]
fn four_rotations_are_identity() {
    for kind in PieceKind::ALL {
        let original = canonical_grid(kind);
        let back = original.rotated().rotated().rotated().rotated();
        assert_eq!(back, original, "{:?}", kind);
        assert_eq!(back.cells(), original.cells(), "{:?}", kind);
    }
}

#[test]
fn rotation_swaps_bounding_box_dimensions() {
    for kind in PieceKind::ALL {
        let grid = canonical_grid(kind);
        let rotated = grid.rotated();
        assert_eq!(rotated.width(), grid.height(), "{:?}", kind);
        assert_eq!(rotated.height(), grid.width(), "{:?}", kind);
    }
}

#[test]
fn o_piece_is_rotation_invariant() {
    let o = canonical_grid(PieceKind::O);
    assert_eq!(o.rotated(), o);
}

#[test]
fn s_and_z_are_mirrored() {
    let s: Vec<_> = canonical_grid(PieceKind::S)
        .cells()
        .iter()
        .map(|&(x, y)| (2 - x, y))
        .collect();
    let mut mirrored = s;
    mirrored.sort_unstable();

    let mut z: Vec<_> = canonical_grid(PieceKind::Z).cells().into_iter().collect();
    z.sort_unstable();

    assert_eq!(mirrored, z);
}

#[test]
fn spawn_anchors_center_pieces_on_the_board() {
    // floor((10 - width) / 2), top row at y = 0.
    assert_eq!(canonical_grid(PieceKind::I).spawn_anchor(), (3, 0));
    assert_eq!(canonical_grid(PieceKind::O).spawn_anchor(), (4, 0));
    for kind in [
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ] {
        assert_eq!(canonical_grid(kind).spawn_anchor(), (3, 0), "{:?}", kind);
    }
}

#[test]
fn every_spawn_is_collision_free_on_an_empty_board() {
    let board = Board::new();
    for kind in PieceKind::ALL {
        let grid = canonical_grid(kind);
        assert!(!collides(&board, &grid, grid.spawn_anchor()), "{:?}", kind);
    }
}
