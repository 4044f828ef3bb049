//! Scoring policy - pure point functions and the running counter
//!
//! Line clears pay `50 * lines^2`, so clearing several rows at once is worth
//! more than the same rows cleared one at a time (a quadruple is 800 points
//! against 200 for four singles). A soft drop pays one point per row, but
//! only when the player asked for it; gravity ticks award nothing.

use crate::types::{MoveSource, LINE_CLEAR_BASE, SOFT_DROP_POINT};

/// Points for clearing `lines` rows in one landing.
pub fn score_for_line_clear(lines: usize) -> u32 {
    let lines = lines as u32;
    LINE_CLEAR_BASE.saturating_mul(lines.saturating_mul(lines))
}

/// Points for one downward move: 1 iff player-initiated and it succeeded.
pub fn score_for_drop(source: MoveSource, moved_down: bool) -> u32 {
    match (source, moved_down) {
        (MoveSource::Player, true) => SOFT_DROP_POINT,
        _ => 0,
    }
}

/// Monotone non-negative score counter.
///
/// `add` saturates instead of overflowing; `reset` is the only way the
/// value decreases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    value: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, points: u32) {
        self.value = self.value.saturating_add(points);
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn reset(&mut self) {
        self.value = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_clear_formula() {
        assert_eq!(score_for_line_clear(0), 0);
        assert_eq!(score_for_line_clear(1), 50);
        assert_eq!(score_for_line_clear(2), 200);
        assert_eq!(score_for_line_clear(3), 450);
        assert_eq!(score_for_line_clear(4), 800);
    }

    #[test]
    fn test_multi_clear_beats_singles() {
        assert!(score_for_line_clear(4) > 4 * score_for_line_clear(1));
        assert!(score_for_line_clear(2) > 2 * score_for_line_clear(1));
    }

    #[test]
    fn test_line_clear_saturates() {
        assert_eq!(score_for_line_clear(usize::MAX), u32::MAX);
    }

    #[test]
    fn test_drop_scores_only_player_success() {
        assert_eq!(score_for_drop(MoveSource::Player, true), 1);
        assert_eq!(score_for_drop(MoveSource::Player, false), 0);
        assert_eq!(score_for_drop(MoveSource::Gravity, true), 0);
        assert_eq!(score_for_drop(MoveSource::Gravity, false), 0);
    }

    #[test]
    fn test_counter_accumulates_and_resets() {
        let mut score = Score::new();
        assert_eq!(score.value(), 0);

        score.add(50);
        score.add(800);
        assert_eq!(score.value(), 850);

        score.add(0);
        assert_eq!(score.value(), 850);

        score.reset();
        assert_eq!(score.value(), 0);
    }

    #[test]
    fn test_counter_saturates_at_max() {
        let mut score = Score::new();
        score.add(u32::MAX);
        score.add(100);
        assert_eq!(score.value(), u32::MAX);
    }
}
