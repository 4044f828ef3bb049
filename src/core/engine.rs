//! Board engine - validated commands over grid, piece, queue, and score
//!
//! The engine composes the board, the shape catalog, the piece queue, and the
//! score counter into atomic operations. Every movement and rotation runs the
//! same candidate/validate/commit path through [`Board::collides`]; a rejected
//! command leaves all state untouched. The engine never halts itself: a
//! blocked spawn only raises the game-over flag, and the caller decides to
//! stop issuing commands.
//!
//! All calls are synchronous and single-threaded; callers driving the engine
//! from a timer and an input source at once must serialize access themselves.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::core::board::Board;
use crate::core::pieces::{stamps, Stamp};
use crate::core::queue::PieceQueue;
use crate::core::scoring::{score_for_drop, Score};
use crate::core::snapshot::{ActiveSnapshot, GridSnapshot, ViewData};
use crate::types::{EngineError, MoveSource, PieceKind, STAMP_SIZE};

/// Seed offset for the garbage stream, so garbage draws never advance the
/// piece sequence.
const GARBAGE_SEED_XOR: u64 = 0x9E37_79B9_7F4A_7C15;

/// Active falling piece: kind, rotation index, and top-left stamp anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: usize,
    pub x: i32,
    pub y: i32,
}

impl ActivePiece {
    /// Piece at its spawn position: rotation 0, horizontally centered, top row.
    pub fn spawn(kind: PieceKind, cols: usize) -> Self {
        let x = ((cols as i32 - STAMP_SIZE as i32) / 2).max(0);
        Self {
            kind,
            rotation: 0,
            x,
            y: 0,
        }
    }

    /// Stamp for the current rotation.
    pub fn stamp(&self) -> &'static Stamp {
        &stamps(self.kind)[self.rotation]
    }

    /// Number of rotation states for this piece's kind.
    pub fn rotation_count(&self) -> usize {
        stamps(self.kind).len()
    }
}

/// Outcome of a spawn attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SpawnResult {
    /// True iff the new piece already collided at its spawn anchor.
    pub game_over: bool,
}

/// Outcome of a landing's row scan.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ClearResult {
    pub lines_removed: usize,
    /// Grid state after compaction.
    pub grid: GridSnapshot,
    /// Indices of the removed rows, ascending, pre-compaction.
    pub cleared_rows: Vec<usize>,
    /// Left at 0 by [`GameEngine::clear_rows`]; the caller fills it from the
    /// scoring policy.
    pub score_bonus: u32,
}

/// The board/piece engine.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    queue: PieceQueue,
    garbage_rng: StdRng,
    score: Score,
    active: Option<ActivePiece>,
    game_over: bool,
}

impl GameEngine {
    /// Create an engine with an empty board and the default preview depth.
    ///
    /// No piece is active until the first [`GameEngine::spawn`] (or
    /// [`GameEngine::new_game`]).
    pub fn new(rows: usize, cols: usize, seed: u64) -> Result<Self, EngineError> {
        Ok(Self {
            board: Board::new(rows, cols)?,
            queue: PieceQueue::new(seed),
            garbage_rng: StdRng::seed_from_u64(seed ^ GARBAGE_SEED_XOR),
            score: Score::new(),
            active: None,
            game_over: false,
        })
    }

    /// Create an engine with an explicit preview depth.
    pub fn with_preview(
        rows: usize,
        cols: usize,
        seed: u64,
        depth: usize,
    ) -> Result<Self, EngineError> {
        let mut engine = Self::new(rows, cols, seed)?;
        engine.queue = PieceQueue::with_depth(seed, depth);
        Ok(engine)
    }

    /// Live borrow of the grid; reflects future engine state.
    ///
    /// Callers needing a stable image should take [`GameEngine::grid_snapshot`]
    /// instead.
    pub fn grid(&self) -> &Board {
        &self.board
    }

    /// Owned color-id copy of the grid, stable across later commands.
    pub fn grid_snapshot(&self) -> GridSnapshot {
        self.board.snapshot()
    }

    /// Copy of the active piece, if one is in play.
    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    /// Construction seed (for restarting with the same piece sequence).
    pub fn seed(&self) -> u64 {
        self.queue.seed()
    }

    pub fn score(&self) -> u32 {
        self.score.value()
    }

    /// Credit points to the running score (saturating).
    pub fn add_score(&mut self, points: u32) {
        self.score.add(points);
    }

    /// Shared candidate/validate/commit path for all three moves.
    fn try_shift(&mut self, dx: i32, dy: i32) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        if self.board.collides(active.stamp(), active.x + dx, active.y + dy) {
            return false;
        }

        self.active = Some(ActivePiece {
            x: active.x + dx,
            y: active.y + dy,
            ..active
        });
        true
    }

    /// Move the active piece one row down.
    ///
    /// A successful player-initiated move credits the soft-drop point; gravity
    /// never scores. Returns false on floor or stack contact (the landing
    /// signal: the caller then merges, clears, and respawns).
    pub fn move_down(&mut self, source: MoveSource) -> bool {
        let moved = self.try_shift(0, 1);
        self.score.add(score_for_drop(source, moved));
        moved
    }

    /// Move the active piece one column left.
    pub fn move_left(&mut self) -> bool {
        self.try_shift(-1, 0)
    }

    /// Move the active piece one column right.
    pub fn move_right(&mut self) -> bool {
        self.try_shift(1, 0)
    }

    /// Advance to the next rotation state, kicking off walls when needed.
    ///
    /// The kick tries the current anchor, then x+1, then x-1, with the next
    /// rotation's stamp. Never more than one column, never a row shift; this
    /// narrow rule is intentional and not the SRS kick table.
    pub fn rotate(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };

        let rotation = (active.rotation + 1) % active.rotation_count();
        let stamp = &stamps(active.kind)[rotation];

        for dx in [0, 1, -1] {
            if !self.board.collides(stamp, active.x + dx, active.y) {
                self.active = Some(ActivePiece {
                    rotation,
                    x: active.x + dx,
                    ..active
                });
                return true;
            }
        }
        false
    }

    /// Draw the next kind and place it at the spawn anchor.
    ///
    /// The queue head is consumed even when the spawn is blocked. A blocked
    /// spawn raises the game-over flag, leaves the grid unmodified, and holds
    /// no active piece.
    pub fn spawn(&mut self) -> SpawnResult {
        let kind = self.queue.draw();
        let piece = ActivePiece::spawn(kind, self.board.cols());

        if self.board.collides(piece.stamp(), piece.x, piece.y) {
            self.game_over = true;
            self.active = None;
        } else {
            self.game_over = false;
            self.active = Some(piece);
        }
        SpawnResult {
            game_over: self.game_over,
        }
    }

    /// Commit the active piece's cells into the grid.
    ///
    /// The piece is consumed; no piece is active until the next spawn. A call
    /// without an active piece does nothing.
    pub fn merge_active(&mut self) {
        if let Some(active) = self.active.take() {
            self.board
                .merge(active.stamp(), active.kind, active.x, active.y);
        }
    }

    /// Scan for full rows, compact the grid, and report what was removed.
    ///
    /// `score_bonus` is left at 0; the caller applies
    /// [`score_for_line_clear`](crate::core::scoring::score_for_line_clear)
    /// and credits the result via [`GameEngine::add_score`].
    pub fn clear_rows(&mut self) -> ClearResult {
        let cleared_rows = self.board.clear_full_rows();
        ClearResult {
            lines_removed: cleared_rows.len(),
            grid: self.board.snapshot(),
            cleared_rows,
            score_bonus: 0,
        }
    }

    /// Reset grid and score, then spawn the first piece of the new round.
    ///
    /// The piece sequence continues where it left off; construct a fresh
    /// engine from [`GameEngine::seed`] for a true replay.
    pub fn new_game(&mut self) {
        self.board.clear();
        self.score.reset();
        self.game_over = false;
        self.active = None;
        self.spawn();
    }

    /// Drop the active piece straight down until it rests.
    ///
    /// Returns the number of rows descended so the caller can score a
    /// player-initiated drop per row. The piece is left unmerged at its
    /// landing position.
    pub fn hard_drop(&mut self) -> u32 {
        let mut rows = 0;
        while self.try_shift(0, 1) {
            rows += 1;
        }
        rows
    }

    /// Lowest row the active piece could legally reach from its position.
    pub fn ghost_y(&self) -> Option<i32> {
        let active = self.active?;
        let stamp = active.stamp();

        let mut y = active.y;
        while !self.board.collides(stamp, active.x, y + 1) {
            y += 1;
        }
        Some(y)
    }

    /// Per-frame read model: active piece, ghost row, and previews.
    ///
    /// Recomputed on every call; the ghost depends on the live grid and is
    /// never cached.
    pub fn view_data(&self) -> ViewData {
        ViewData {
            active: self.active.map(ActiveSnapshot::from),
            ghost_y: self.ghost_y(),
            next: self.queue.previews().collect(),
        }
    }

    /// Scroll the stack up one row and inject a garbage row at the bottom.
    ///
    /// Fed by the dedicated garbage stream, so the piece sequence is
    /// unaffected. The active piece is not revalidated here; its next
    /// validated command sees the shifted grid.
    pub fn add_garbage_line(&mut self) {
        self.board.add_garbage_row(&mut self.garbage_rng);
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_active(&mut self, piece: Option<ActivePiece>) {
        self.active = piece;
    }
}
