//! Piece module - tetromino geometry and in-place rotation
//!
//! Every shape is stored padded into its minimal enclosing square grid
//! (2x2 for O, 3x3 for T/S/Z/J/L, 4x4 for I). The square padding is what
//! makes clockwise rotation expressible as transpose-then-reverse-rows;
//! a tight bounding-box representation would break it.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// Largest local grid side used by any shape
pub const MAX_GRID: usize = 4;

/// Local (col, row) offset of an occupied cell within a piece grid
pub type BlockOffset = (i8, i8);

/// Extent of a piece's occupied cells within its local grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub min_x: i8,
    pub max_x: i8,
    pub min_y: i8,
    pub max_y: i8,
}

impl BoundingBox {
    /// Occupied width in cells
    pub fn width(&self) -> i8 {
        self.max_x - self.min_x + 1
    }

    /// Occupied height in cells
    pub fn height(&self) -> i8 {
        self.max_y - self.min_y + 1
    }
}

/// A tetromino: shape identifier plus its current local occupancy grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    kind: PieceKind,
    size: usize,
    grid: [[bool; MAX_GRID]; MAX_GRID],
}

/// Copy an N x N shape table into the fixed backing grid
fn pad<const N: usize>(rows: [[bool; N]; N]) -> [[bool; MAX_GRID]; MAX_GRID] {
    let mut grid = [[false; MAX_GRID]; MAX_GRID];
    for (i, row) in rows.iter().enumerate() {
        grid[i][..N].copy_from_slice(row);
    }
    grid
}

impl Piece {
    /// Create a piece in its spawn orientation
    pub fn new(kind: PieceKind) -> Self {
        const T: bool = true;
        const F: bool = false;

        let (size, grid) = match kind {
            PieceKind::O => (2, pad([[T, T], [T, T]])),
            PieceKind::I => (
                4,
                pad([
                    [F, T, F, F],
                    [F, T, F, F],
                    [F, T, F, F],
                    [F, T, F, F],
                ]),
            ),
            PieceKind::T => (3, pad([[F, F, F], [T, T, T], [F, T, F]])),
            PieceKind::S => (3, pad([[F, T, T], [T, T, F], [F, F, F]])),
            PieceKind::Z => (3, pad([[T, T, F], [F, T, T], [F, F, F]])),
            PieceKind::J => (3, pad([[T, F, F], [T, F, F], [T, T, F]])),
            PieceKind::L => (3, pad([[F, F, T], [F, F, T], [F, T, T]])),
        };

        Self { kind, size, grid }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    /// Side length of the local grid
    pub fn size(&self) -> usize {
        self.size
    }

    /// Iterate the (col, row) offsets of every occupied cell, row-major.
    ///
    /// Lazy and restartable; always reflects the current grid.
    pub fn block_positions(&self) -> BlockPositions<'_> {
        BlockPositions {
            piece: self,
            row: 0,
            col: 0,
        }
    }

    /// Collect the occupied offsets into a fixed-capacity buffer.
    ///
    /// Every shape has exactly four occupied cells, so this never spills.
    pub fn cells(&self) -> ArrayVec<BlockOffset, 4> {
        self.block_positions().collect()
    }

    /// Extent of the occupied cells within the local grid
    pub fn bounding_box(&self) -> BoundingBox {
        let mut bounds: Option<BoundingBox> = None;
        for (x, y) in self.block_positions() {
            bounds = Some(match bounds {
                None => BoundingBox {
                    min_x: x,
                    max_x: x,
                    min_y: y,
                    max_y: y,
                },
                Some(b) => BoundingBox {
                    min_x: b.min_x.min(x),
                    max_x: b.max_x.max(x),
                    min_y: b.min_y.min(y),
                    max_y: b.max_y.max(y),
                },
            });
        }
        // Every shape table has occupied cells, so the fold always produces a box.
        bounds.unwrap_or(BoundingBox {
            min_x: 0,
            max_x: 0,
            min_y: 0,
            max_y: 0,
        })
    }

    /// Rotate 90 degrees clockwise in place: transpose, then reverse each row
    pub fn rotate(&mut self) {
        self.transpose();
        for row in self.grid.iter_mut().take(self.size) {
            row[..self.size].reverse();
        }
    }

    /// Undo a clockwise rotation: transpose, then reverse each column.
    ///
    /// Only used to revert a rotation the board rejected.
    pub fn rotate_counter_clockwise(&mut self) {
        self.transpose();
        let n = self.size;
        for j in 0..n {
            for i in 0..n / 2 {
                let tmp = self.grid[i][j];
                self.grid[i][j] = self.grid[n - 1 - i][j];
                self.grid[n - 1 - i][j] = tmp;
            }
        }
    }

    fn transpose(&mut self) {
        let n = self.size;
        for i in 0..n {
            for j in (i + 1)..n {
                let tmp = self.grid[i][j];
                self.grid[i][j] = self.grid[j][i];
                self.grid[j][i] = tmp;
            }
        }
    }
}

/// Row-major iterator over a piece's occupied cells
#[derive(Debug, Clone)]
pub struct BlockPositions<'a> {
    piece: &'a Piece,
    row: usize,
    col: usize,
}

impl Iterator for BlockPositions<'_> {
    type Item = BlockOffset;

    fn next(&mut self) -> Option<Self::Item> {
        while self.row < self.piece.size {
            let (i, j) = (self.row, self.col);
            self.col += 1;
            if self.col == self.piece.size {
                self.col = 0;
                self.row += 1;
            }
            if self.piece.grid[i][j] {
                return Some((j as i8, i as i8));
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ALL_KINDS;

    #[test]
    fn test_every_shape_has_four_cells() {
        for kind in ALL_KINDS {
            let piece = Piece::new(kind);
            assert_eq!(
                piece.block_positions().count(),
                4,
                "{:?} must occupy four cells",
                kind
            );
        }
    }

    #[test]
    fn test_block_positions_row_major() {
        let piece = Piece::new(PieceKind::T);
        let positions: Vec<_> = piece.block_positions().collect();
        assert_eq!(positions, vec![(0, 1), (1, 1), (2, 1), (1, 2)]);
    }

    #[test]
    fn test_block_positions_restartable() {
        let piece = Piece::new(PieceKind::S);
        let first: Vec<_> = piece.block_positions().collect();
        let second: Vec<_> = piece.block_positions().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_line_piece_is_vertical() {
        let piece = Piece::new(PieceKind::I);
        let positions: Vec<_> = piece.block_positions().collect();
        assert_eq!(positions, vec![(1, 0), (1, 1), (1, 2), (1, 3)]);

        let bounds = piece.bounding_box();
        assert_eq!(bounds.width(), 1);
        assert_eq!(bounds.height(), 4);
    }

    #[test]
    fn test_square_bounding_box() {
        let bounds = Piece::new(PieceKind::O).bounding_box();
        assert_eq!((bounds.min_x, bounds.max_x), (0, 1));
        assert_eq!((bounds.min_y, bounds.max_y), (0, 1));
    }

    #[test]
    fn test_rotate_then_counter_clockwise_is_identity() {
        for kind in ALL_KINDS {
            let original = Piece::new(kind);
            let mut piece = original.clone();
            piece.rotate();
            piece.rotate_counter_clockwise();
            assert_eq!(piece, original, "{:?} rotation must invert exactly", kind);
        }
    }

    #[test]
    fn test_four_rotations_are_identity() {
        for kind in ALL_KINDS {
            let original = Piece::new(kind);
            let mut piece = original.clone();
            for _ in 0..4 {
                piece.rotate();
            }
            assert_eq!(piece, original);
        }
    }

    #[test]
    fn test_rotate_line_goes_horizontal() {
        let mut piece = Piece::new(PieceKind::I);
        piece.rotate();
        let positions: Vec<_> = piece.block_positions().collect();
        assert_eq!(positions, vec![(0, 1), (1, 1), (2, 1), (3, 1)]);
    }

    #[test]
    fn test_rotate_tee_clockwise() {
        let mut piece = Piece::new(PieceKind::T);
        piece.rotate();
        // Stem points left after one clockwise turn.
        let positions: Vec<_> = piece.block_positions().collect();
        assert_eq!(positions, vec![(1, 0), (0, 1), (1, 1), (1, 2)]);
    }

    #[test]
    fn test_cells_matches_block_positions() {
        for kind in ALL_KINDS {
            let piece = Piece::new(kind);
            let collected: Vec<_> = piece.cells().into_iter().collect();
            let iterated: Vec<_> = piece.block_positions().collect();
            assert_eq!(collected, iterated);
        }
    }
}
