//! Score keeping - flat 100 points per cleared row
//!
//! The source awards `cleared * 100` with no level multiplier, combo,
//! or drop bonus; that rule is preserved as-is.

use crate::types::POINTS_PER_LINE;

/// Points awarded for clearing `lines` rows in one settle
pub fn line_clear_points(lines: usize) -> u32 {
    POINTS_PER_LINE * lines as u32
}

/// Accumulated score for one session
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScoreKeeper {
    score: u32,
}

impl ScoreKeeper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a settle that cleared `lines` rows
    pub fn record_clear(&mut self, lines: usize) {
        self.score = self.score.saturating_add(line_clear_points(lines));
    }

    pub fn value(&self) -> u32 {
        self.score
    }

    pub fn reset(&mut self) {
        self.score = 0;
    }
}
