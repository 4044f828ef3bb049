//! Shape catalog - tetromino stamps for every rotation state
//!
//! Each piece kind owns an ordered, immutable list of 4x4 stamps, one per
//! discrete rotation. Non-zero cells carry the kind's color id. List lengths
//! differ by symmetry: O has a single stamp, I/S/Z have two, T/J/L have four.
//! Rotating advances cyclically through the list; there is no separate
//! clockwise/counter-clockwise notion.

use crate::types::{PieceKind, STAMP_SIZE};

/// One rotation state of a piece: a 4x4 color-id matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stamp {
    cells: [[u8; STAMP_SIZE]; STAMP_SIZE],
}

impl Stamp {
    /// Build a stamp from a 0/1 occupancy mask and a color id.
    const fn from_mask(color: u8, mask: [[u8; STAMP_SIZE]; STAMP_SIZE]) -> Self {
        let mut cells = [[0u8; STAMP_SIZE]; STAMP_SIZE];
        let mut row = 0;
        while row < STAMP_SIZE {
            let mut col = 0;
            while col < STAMP_SIZE {
                if mask[row][col] != 0 {
                    cells[row][col] = color;
                }
                col += 1;
            }
            row += 1;
        }
        Self { cells }
    }

    /// Color id at (row, col); 0 means the sub-cell is empty.
    #[inline]
    pub fn cell(&self, row: usize, col: usize) -> u8 {
        self.cells[row][col]
    }

    /// Iterate the (row, col) positions of occupied sub-cells.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..STAMP_SIZE).flat_map(move |row| {
            (0..STAMP_SIZE)
                .filter_map(move |col| (self.cells[row][col] != 0).then_some((row, col)))
        })
    }

    /// Number of occupied sub-cells.
    pub fn occupied_count(&self) -> usize {
        self.occupied().count()
    }

    /// Color id shared by the occupied sub-cells (0 for an empty stamp).
    pub fn color_id(&self) -> u8 {
        self.occupied()
            .next()
            .map_or(0, |(row, col)| self.cells[row][col])
    }
}

/// Rotation-stamp list for a piece kind.
///
/// The list is `'static`, never empty, and every stamp in it decodes to
/// exactly four occupied cells of the kind's color id.
pub fn stamps(kind: PieceKind) -> &'static [Stamp] {
    match kind {
        PieceKind::I => &I_STAMPS,
        PieceKind::O => &O_STAMPS,
        PieceKind::T => &T_STAMPS,
        PieceKind::S => &S_STAMPS,
        PieceKind::Z => &Z_STAMPS,
        PieceKind::J => &J_STAMPS,
        PieceKind::L => &L_STAMPS,
    }
}

const I_STAMPS: [Stamp; 2] = [
    Stamp::from_mask(
        PieceKind::I.color_id(),
        [[1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    ),
    Stamp::from_mask(
        PieceKind::I.color_id(),
        [[0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0]],
    ),
];

const O_STAMPS: [Stamp; 1] = [Stamp::from_mask(
    PieceKind::O.color_id(),
    [[1, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
)];

const T_STAMPS: [Stamp; 4] = [
    Stamp::from_mask(
        PieceKind::T.color_id(),
        [[0, 1, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    ),
    Stamp::from_mask(
        PieceKind::T.color_id(),
        [[0, 1, 0, 0], [0, 1, 1, 0], [0, 1, 0, 0], [0, 0, 0, 0]],
    ),
    Stamp::from_mask(
        PieceKind::T.color_id(),
        [[0, 0, 0, 0], [1, 1, 1, 0], [0, 1, 0, 0], [0, 0, 0, 0]],
    ),
    Stamp::from_mask(
        PieceKind::T.color_id(),
        [[0, 1, 0, 0], [1, 1, 0, 0], [0, 1, 0, 0], [0, 0, 0, 0]],
    ),
];

const S_STAMPS: [Stamp; 2] = [
    Stamp::from_mask(
        PieceKind::S.color_id(),
        [[0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    ),
    Stamp::from_mask(
        PieceKind::S.color_id(),
        [[0, 1, 0, 0], [0, 1, 1, 0], [0, 0, 1, 0], [0, 0, 0, 0]],
    ),
];

const Z_STAMPS: [Stamp; 2] = [
    Stamp::from_mask(
        PieceKind::Z.color_id(),
        [[1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    ),
    Stamp::from_mask(
        PieceKind::Z.color_id(),
        [[0, 0, 1, 0], [0, 1, 1, 0], [0, 1, 0, 0], [0, 0, 0, 0]],
    ),
];

const J_STAMPS: [Stamp; 4] = [
    Stamp::from_mask(
        PieceKind::J.color_id(),
        [[1, 0, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    ),
    Stamp::from_mask(
        PieceKind::J.color_id(),
        [[0, 1, 1, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 0, 0, 0]],
    ),
    Stamp::from_mask(
        PieceKind::J.color_id(),
        [[0, 0, 0, 0], [1, 1, 1, 0], [0, 0, 1, 0], [0, 0, 0, 0]],
    ),
    Stamp::from_mask(
        PieceKind::J.color_id(),
        [[0, 1, 0, 0], [0, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0]],
    ),
];

const L_STAMPS: [Stamp; 4] = [
    Stamp::from_mask(
        PieceKind::L.color_id(),
        [[0, 0, 1, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]],
    ),
    Stamp::from_mask(
        PieceKind::L.color_id(),
        [[0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0]],
    ),
    Stamp::from_mask(
        PieceKind::L.color_id(),
        [[0, 0, 0, 0], [1, 1, 1, 0], [1, 0, 0, 0], [0, 0, 0, 0]],
    ),
    Stamp::from_mask(
        PieceKind::L.color_id(),
        [[1, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 0, 0, 0]],
    ),
];
