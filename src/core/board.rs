//! Board module - manages the game grid
//!
//! The grid is a rows x cols matrix where each cell is empty or filled with a
//! piece kind, stored as a flat row-major vector for cache locality.
//! Coordinates: (x, y) with x growing rightward and y growing downward;
//! row 0 is the top. Anchors are i32 so callers can probe positions outside
//! the grid; the collision check treats out-of-bounds as occupied.

use rand::Rng;

use crate::core::pieces::Stamp;
use crate::core::snapshot::GridSnapshot;
use crate::types::{Cell, EngineError, PieceKind};

/// The game board with construction-time dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    /// Flat cell storage, row-major (y * cols + x).
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty rows x cols board.
    ///
    /// Zero dimensions are a programming error in the caller, not a game
    /// event, and fail fast with a descriptive error.
    pub fn new(rows: usize, cols: usize) -> Result<Self, EngineError> {
        if rows == 0 || cols == 0 {
            return Err(EngineError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            rows,
            cols,
            cells: vec![None; rows * cols],
        })
    }

    /// Calculate the flat index for (x, y)
    /// Returns None if out of bounds
    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.cols as i32 || y < 0 || y >= self.rows as i32 {
            return None;
        }
        Some((y as usize) * self.cols + (x as usize))
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i32, y: i32, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Collision check for a stamp anchored at (anchor_x, anchor_y).
    ///
    /// True iff any occupied stamp cell maps outside the grid or onto a
    /// filled cell. This is the single legality predicate: movement,
    /// rotation, spawn, and the ghost projection all go through it.
    pub fn collides(&self, stamp: &Stamp, anchor_x: i32, anchor_y: i32) -> bool {
        for (row, col) in stamp.occupied() {
            let x = anchor_x + col as i32;
            let y = anchor_y + row as i32;
            if x < 0 || x >= self.cols as i32 || y < 0 || y >= self.rows as i32 {
                return true;
            }
            if self.cells[(y as usize) * self.cols + (x as usize)].is_some() {
                return true;
            }
        }
        false
    }

    /// Write a stamp's occupied cells into the grid as `kind`.
    ///
    /// Sub-cells falling outside the grid are skipped; callers that
    /// validated the anchor through [`Board::collides`] never hit that path.
    pub fn merge(&mut self, stamp: &Stamp, kind: PieceKind, anchor_x: i32, anchor_y: i32) {
        for (row, col) in stamp.occupied() {
            self.set(anchor_x + col as i32, anchor_y + row as i32, Some(kind));
        }
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= self.rows {
            return false;
        }
        let start = y * self.cols;
        self.cells[start..start + self.cols]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Indices of all full rows, top to bottom
    pub fn full_rows(&self) -> Vec<usize> {
        (0..self.rows).filter(|&y| self.is_row_full(y)).collect()
    }

    /// Clear every full row and compact the remainder downward.
    ///
    /// Builds the replacement grid in one bottom-up pass: non-full rows keep
    /// their relative order and slide toward the bottom, leaving empty rows
    /// at the top. Returns the cleared row indices in ascending order.
    pub fn clear_full_rows(&mut self) -> Vec<usize> {
        let mut cleared_rows = Vec::new();
        let mut next = vec![None; self.cells.len()];
        let mut write_y = self.rows;

        for read_y in (0..self.rows).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
                continue;
            }
            write_y -= 1;
            let src = read_y * self.cols;
            let dst = write_y * self.cols;
            next[dst..dst + self.cols].copy_from_slice(&self.cells[src..src + self.cols]);
        }

        self.cells = next;

        // Collected bottom-up; report ascending.
        cleared_rows.reverse();
        cleared_rows
    }

    /// Shift every row up by one and synthesize a garbage bottom row.
    ///
    /// Row 0 scrolls off the top. The new bottom row keeps one randomly
    /// chosen hole column empty; every other column is filled with
    /// probability 1/2. An all-empty draw is corrected by filling one random
    /// non-hole column, so the row is never a no-op (except on one-column
    /// boards, where the guaranteed hole wins).
    pub fn add_garbage_row<R: Rng>(&mut self, rng: &mut R) {
        self.cells.copy_within(self.cols.., 0);

        let bottom = (self.rows - 1) * self.cols;
        let hole = rng.gen_range(0..self.cols);
        let mut filled = 0usize;
        for col in 0..self.cols {
            self.cells[bottom + col] = if col != hole && rng.gen_bool(0.5) {
                filled += 1;
                Some(random_kind(rng))
            } else {
                None
            };
        }

        if filled == 0 && self.cols > 1 {
            let col = (hole + 1 + rng.gen_range(0..self.cols - 1)) % self.cols;
            self.cells[bottom + col] = Some(random_kind(rng));
        }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Count of filled cells on the whole board
    pub fn occupied_cells(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Owned color-id image of the grid.
    pub fn snapshot(&self) -> GridSnapshot {
        let mut out = GridSnapshot::new(self.rows, self.cols);
        self.snapshot_into(&mut out);
        out
    }

    /// Write the color-id image into `out`, reusing its buffer when the
    /// dimensions already match.
    pub fn snapshot_into(&self, out: &mut GridSnapshot) {
        out.reset(self.rows, self.cols);
        for (idx, cell) in self.cells.iter().enumerate() {
            out.cells[idx] = cell.map_or(0, |kind| kind.color_id());
        }
    }

    /// Multi-line glyph dump (`.` = empty) for debugging and test output.
    pub fn render_ascii(&self) -> String {
        let mut out = String::with_capacity(self.rows * (self.cols + 1));
        for y in 0..self.rows {
            for x in 0..self.cols {
                let cell = self.cells[y * self.cols + x];
                out.push(cell.map_or('.', |kind| kind.glyph()));
            }
            out.push('\n');
        }
        out
    }

    /// Create from a 2D vector for testing
    #[cfg(test)]
    pub fn from_cells(cells_2d: Vec<Vec<Cell>>) -> Self {
        let rows = cells_2d.len();
        assert!(rows > 0);
        let cols = cells_2d[0].len();
        assert!(cells_2d.iter().all(|row| row.len() == cols));

        let cells = cells_2d.into_iter().flatten().collect();
        Self { rows, cols, cells }
    }

    /// Convert to a 2D vector for testing
    #[cfg(test)]
    pub fn to_cells(&self) -> Vec<Vec<Cell>> {
        (0..self.rows)
            .map(|y| {
                let start = y * self.cols;
                self.cells[start..start + self.cols].to_vec()
            })
            .collect()
    }
}

fn random_kind<R: Rng>(rng: &mut R) -> PieceKind {
    PieceKind::ALL[rng.gen_range(0..PieceKind::ALL.len())]
}
