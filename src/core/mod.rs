//! Core module - pure game logic with no external collaborators
//!
//! This module contains the grid, the shape catalog, the piece generator,
//! scoring, and the orchestrating engine. It performs no I/O and owns no
//! timers; callers drive it one synchronous command at a time.

pub mod board;
pub mod engine;
pub mod pieces;
pub mod queue;
pub mod scoring;
pub mod snapshot;

// Re-export commonly used types
pub use board::Board;
pub use engine::{ActivePiece, ClearResult, GameEngine, SpawnResult};
pub use pieces::{stamps, Stamp};
pub use queue::PieceQueue;
pub use scoring::{score_for_drop, score_for_line_clear, Score};
pub use snapshot::{ActiveSnapshot, GridSnapshot, ViewData};
