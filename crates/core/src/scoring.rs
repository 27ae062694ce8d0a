//! Scoring module - line-clear points, levels and fall speed
//!
//! Rules:
//! - Clearing `n` rows in one fixing event scores `10 * 2^(n-1)`
//!   (1 -> 10, 2 -> 20, 3 -> 40, 4 -> 80). Three or four rows at once pay
//!   more than the same rows cleared one by one.
//! - The level rises by one when cumulative lines reach `10 * level`. This is
//!   checked once per fixing event, so a single clear crossing several
//!   thresholds still advances only one level.
//! - The fall interval is `1000ms * 0.9^(level - 1)` with no floor.

use std::time::Duration;

use crate::types::{
    BASE_FALL_MS, FALL_DECAY, LINES_PER_LEVEL, LINE_CLEAR_BASE_SCORE, STARTING_LEVEL,
};

/// Points for clearing `lines` rows at once.
pub fn line_clear_score(lines: usize) -> u32 {
    if lines == 0 {
        return 0;
    }
    let shift = (lines - 1).min(31) as u32;
    LINE_CLEAR_BASE_SCORE.saturating_mul(1u32 << shift)
}

/// Whether a session at `level` with `total_lines` cleared has earned the next level.
pub fn reaches_next_level(total_lines: u32, level: u32) -> bool {
    total_lines >= LINES_PER_LEVEL.saturating_mul(level)
}

/// Milliseconds between automatic falls at `level`.
pub fn fall_interval_ms(level: u32) -> f64 {
    let steps = level.saturating_sub(1).min(i32::MAX as u32) as i32;
    BASE_FALL_MS * FALL_DECAY.powi(steps)
}

/// [`fall_interval_ms`] as a `Duration`.
pub fn fall_interval(level: u32) -> Duration {
    Duration::from_secs_f64(fall_interval_ms(level) / 1000.0)
}

/// Outcome of recording one fixing event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    pub lines_cleared: u32,
    /// Points added by this event.
    pub points: u32,
    pub leveled_up: bool,
}

/// Score, level and cumulative lines of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Progress {
    pub score: u32,
    pub level: u32,
    pub lines: u32,
}

impl Progress {
    pub fn new() -> Self {
        Self {
            score: 0,
            level: STARTING_LEVEL,
            lines: 0,
        }
    }

    /// Apply the rows cleared by one fixing event.
    ///
    /// Zero rows change nothing, including the level check.
    pub fn record_clear(&mut self, lines_cleared: usize) -> ScoreResult {
        if lines_cleared == 0 {
            return ScoreResult::default();
        }

        let points = line_clear_score(lines_cleared);
        let lines = u32::try_from(lines_cleared).unwrap_or(u32::MAX);
        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(lines);

        let leveled_up = reaches_next_level(self.lines, self.level);
        if leveled_up {
            self.level = self.level.saturating_add(1);
        }

        ScoreResult {
            lines_cleared: lines,
            points,
            leveled_up,
        }
    }

    pub fn fall_interval_ms(&self) -> f64 {
        fall_interval_ms(self.level)
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

impl Default for Progress {
    fn default() -> Self {
        Self::new()
    }
}
