//! Read-model types exported to presentation layers
//!
//! These are plain owned copies: a snapshot taken here never changes when the
//! engine moves on, unlike the live `&Board` borrow. Everything derives serde
//! so observation layers and tooling can encode the view directly.

use serde::{Deserialize, Serialize};

use crate::core::engine::ActivePiece;
use crate::types::PieceKind;

/// Owned color-id image of the grid (0 = empty, 1..=7 = piece color).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSnapshot {
    pub rows: usize,
    pub cols: usize,
    /// Flat cell storage, row-major (y * cols + x).
    pub cells: Vec<u8>,
}

impl GridSnapshot {
    /// All-empty snapshot with the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![0; rows * cols],
        }
    }

    /// Zero every cell, resizing only when the dimensions changed.
    pub fn reset(&mut self, rows: usize, cols: usize) {
        if self.rows != rows || self.cols != cols {
            self.rows = rows;
            self.cols = cols;
            self.cells = vec![0; rows * cols];
        } else {
            self.cells.fill(0);
        }
    }

    /// Color id at (x, y).
    #[inline]
    pub fn cell(&self, x: usize, y: usize) -> u8 {
        self.cells[y * self.cols + x]
    }

    /// One row of color ids.
    pub fn row(&self, y: usize) -> &[u8] {
        let start = y * self.cols;
        &self.cells[start..start + self.cols]
    }
}

/// Copy of the active piece's fields at snapshot time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: usize,
    pub x: i32,
    pub y: i32,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

/// Everything a renderer needs for one frame, recomputed per call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewData {
    /// None between a merge and the next spawn, or after a blocked spawn.
    pub active: Option<ActiveSnapshot>,
    /// Lowest legal row for the active piece; None without an active piece.
    pub ghost_y: Option<i32>,
    /// Upcoming piece kinds, nearest first.
    pub next: Vec<PieceKind>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snapshot_starts_empty() {
        let snap = GridSnapshot::new(4, 3);
        assert_eq!(snap.cells.len(), 12);
        assert!(snap.cells.iter().all(|&c| c == 0));
    }

    #[test]
    fn test_reset_keeps_buffer_on_same_dimensions() {
        let mut snap = GridSnapshot::new(4, 3);
        snap.cells[5] = 7;

        snap.reset(4, 3);
        assert_eq!(snap.cells.len(), 12);
        assert_eq!(snap.cells[5], 0);

        snap.reset(2, 2);
        assert_eq!(snap.rows, 2);
        assert_eq!(snap.cols, 2);
        assert_eq!(snap.cells.len(), 4);
    }

    #[test]
    fn test_cell_and_row_indexing_agree() {
        let mut snap = GridSnapshot::new(3, 4);
        snap.cells[4 + 2] = 5;

        assert_eq!(snap.cell(2, 1), 5);
        assert_eq!(snap.row(1), &[0, 0, 5, 0]);
    }

    #[test]
    fn test_active_snapshot_from_piece() {
        let piece = ActivePiece {
            kind: PieceKind::J,
            rotation: 2,
            x: -1,
            y: 7,
        };
        let snap = ActiveSnapshot::from(piece);

        assert_eq!(snap.kind, PieceKind::J);
        assert_eq!(snap.rotation, 2);
        assert_eq!(snap.x, -1);
        assert_eq!(snap.y, 7);
    }
}
