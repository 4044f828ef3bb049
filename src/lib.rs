//! Falling-block board/piece engine - pure, deterministic, and testable
//!
//! This crate is the core of a falling-block puzzle game: the grid, the
//! active piece, collision detection, movement and rotation validation, line
//! clearing, spawning with game-over detection, and scoring. It has **zero
//! dependencies** on UI, audio, or I/O; menus, rendering, and timers live in
//! the calling layer and drive the engine through a narrow command/read
//! interface.
//!
//! # Module Structure
//!
//! - [`core::pieces`]: the seven tetromino catalogs, one 4x4 stamp per rotation
//! - [`core::board`]: the grid with collision, merge, line clear, and garbage
//! - [`core::queue`]: seeded uniform piece sequence with preview lookahead
//! - [`core::scoring`]: pure point functions and the running score counter
//! - [`core::engine`]: the orchestrator exposing validated commands
//! - [`core::snapshot`]: owned read-model types for presentation layers
//!
//! # Game Rules
//!
//! - **Movement**: left/right/down by one cell, validated against walls,
//!   floor, and the stack; rejected moves change nothing
//! - **Rotation**: cyclic through each piece's stamp list, with a single
//!   ±1-column wall kick (deliberately narrower than SRS)
//! - **Line clears**: full rows are removed together; remaining rows slide
//!   down in order and empty rows enter at the top
//! - **Scoring**: `50 * lines²` per clear, plus one point per successful
//!   player soft drop
//! - **Game over**: a spawn whose piece already collides raises a flag; the
//!   engine never halts itself
//! - **Garbage**: external game modes may inject a bottom row with one
//!   guaranteed hole
//!
//! # Determinism
//!
//! The same seed and the same command sequence reproduce the same game.
//! Garbage rows draw from a separate stream derived from the seed, so
//! injecting them never shifts the piece sequence.
//!
//! # Example
//!
//! ```
//! use blockfall::{score_for_line_clear, GameEngine, MoveSource};
//!
//! let mut engine = GameEngine::new(20, 10, 12345).unwrap();
//! engine.new_game();
//!
//! engine.move_left();
//! engine.rotate();
//! let rows = engine.hard_drop();
//! assert!(rows > 0);
//!
//! // The piece has landed: commit it, clear rows, score, spawn the next.
//! engine.merge_active();
//! let cleared = engine.clear_rows();
//! engine.add_score(score_for_line_clear(cleared.lines_removed));
//! let spawn = engine.spawn();
//! assert!(!spawn.game_over);
//! ```

pub mod core;
pub mod types;

// Re-export the public surface at the crate root
pub use crate::core::{
    score_for_drop, score_for_line_clear, stamps, ActivePiece, ActiveSnapshot, Board, ClearResult,
    GameEngine, GridSnapshot, PieceQueue, Score, SpawnResult, Stamp, ViewData,
};
pub use crate::types::{Cell, EngineError, MoveSource, PieceKind};
