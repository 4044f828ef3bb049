//! Shared types for the engine
//! Pure data definitions used across every core module

use serde::{Deserialize, Serialize};

/// Default board dimensions (rows x cols, row 0 = top)
pub const DEFAULT_ROWS: usize = 20;
pub const DEFAULT_COLS: usize = 10;

/// Default number of upcoming pieces shown in previews
pub const DEFAULT_PREVIEW: usize = 3;

/// Side length of a rotation stamp matrix
pub const STAMP_SIZE: usize = 4;

/// Occupied sub-cells in every catalog stamp
pub const PIECE_CELLS: usize = 4;

/// Base points for a line clear; the full formula is `base * lines^2`
pub const LINE_CLEAR_BASE: u32 = 50;

/// Points for one successful player-initiated soft drop
pub const SOFT_DROP_POINT: u32 = 1;

/// Tetromino piece kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// All seven kinds, in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Color id this kind writes into grids and stamps (1..=7)
    pub const fn color_id(self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::O => 2,
            PieceKind::T => 3,
            PieceKind::S => 4,
            PieceKind::Z => 5,
            PieceKind::J => 6,
            PieceKind::L => 7,
        }
    }

    /// Kind for a color id, if it lies in the catalog's range
    pub fn from_color_id(id: u8) -> Option<Self> {
        match id {
            1 => Some(PieceKind::I),
            2 => Some(PieceKind::O),
            3 => Some(PieceKind::T),
            4 => Some(PieceKind::S),
            5 => Some(PieceKind::Z),
            6 => Some(PieceKind::J),
            7 => Some(PieceKind::L),
            _ => None,
        }
    }

    /// Single-character glyph for debug dumps
    pub fn glyph(self) -> char {
        match self {
            PieceKind::I => 'I',
            PieceKind::O => 'O',
            PieceKind::T => 'T',
            PieceKind::S => 'S',
            PieceKind::Z => 'Z',
            PieceKind::J => 'J',
            PieceKind::L => 'L',
        }
    }
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;

/// Who initiated a downward move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveSource {
    /// Periodic gravity tick; never scores
    Gravity,
    /// Player soft drop; scores when the move succeeds
    Player,
}

/// Construction-time failures
///
/// Gameplay rejections (blocked moves, blocked rotations, blocked spawns)
/// are ordinary return values, never errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("board dimensions must be non-zero, got {rows} rows x {cols} cols")]
    InvalidDimensions { rows: usize, cols: usize },
}
