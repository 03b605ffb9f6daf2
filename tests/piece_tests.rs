//! Piece geometry and rotation tests

use versus_tetris::core::Piece;
use versus_tetris::types::{PieceKind, ALL_KINDS};

#[test]
fn test_all_shapes_fit_their_declared_grid() {
    for kind in ALL_KINDS {
        let piece = Piece::new(kind);
        let n = piece.size() as i8;
        for (x, y) in piece.block_positions() {
            assert!(x >= 0 && x < n, "{:?} column {} outside grid", kind, x);
            assert!(y >= 0 && y < n, "{:?} row {} outside grid", kind, y);
        }
    }
}

#[test]
fn test_grid_sizes_per_shape() {
    assert_eq!(Piece::new(PieceKind::O).size(), 2);
    assert_eq!(Piece::new(PieceKind::I).size(), 4);
    for kind in [
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ] {
        assert_eq!(Piece::new(kind).size(), 3);
    }
}

#[test]
fn test_rotation_inverts_for_every_shape_in_every_orientation() {
    for kind in ALL_KINDS {
        let mut piece = Piece::new(kind);
        for _ in 0..4 {
            let before = piece.clone();
            piece.rotate();
            let mut undone = piece.clone();
            undone.rotate_counter_clockwise();
            assert_eq!(undone, before, "{:?} rotation must invert exactly", kind);
        }
    }
}

#[test]
fn test_rotation_preserves_cell_count() {
    for kind in ALL_KINDS {
        let mut piece = Piece::new(kind);
        for _ in 0..4 {
            piece.rotate();
            assert_eq!(piece.block_positions().count(), 4);
        }
    }
}

#[test]
fn test_square_is_rotation_invariant() {
    let original = Piece::new(PieceKind::O);
    let mut piece = original.clone();
    piece.rotate();
    assert_eq!(piece, original);
}

#[test]
fn test_bounding_box_tracks_rotation() {
    let mut piece = Piece::new(PieceKind::I);
    let vertical = piece.bounding_box();
    assert_eq!((vertical.width(), vertical.height()), (1, 4));

    piece.rotate();
    let horizontal = piece.bounding_box();
    assert_eq!((horizontal.width(), horizontal.height()), (4, 1));
}

#[test]
fn test_kind_tokens_roundtrip() {
    for kind in ALL_KINDS {
        assert_eq!(PieceKind::from_str(kind.as_str()), Some(kind));
    }
    assert_eq!(PieceKind::from_str("T"), Some(PieceKind::T));
    assert_eq!(PieceKind::from_str("q"), None);
}

#[test]
fn test_mirrored_shapes_are_distinct() {
    let s: Vec<_> = Piece::new(PieceKind::S).block_positions().collect();
    let z: Vec<_> = Piece::new(PieceKind::Z).block_positions().collect();
    assert_ne!(s, z);

    let j: Vec<_> = Piece::new(PieceKind::J).block_positions().collect();
    let l: Vec<_> = Piece::new(PieceKind::L).block_positions().collect();
    assert_ne!(j, l);
}
