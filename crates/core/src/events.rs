//! Notifications emitted by the game for front-ends.
//!
//! Events are queued on [`crate::GameState`] while commands run and drained by
//! the driver (typically once per frame) with
//! [`GameState::drain_events`](crate::GameState::drain_events).

use crate::board::ClearedRows;
use crate::types::PieceKind;

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum GameEvent {
    /// The active piece was written into the board with its anchor at (x, y).
    PieceFixed { kind: PieceKind, x: i8, y: i8 },
    /// Full rows removed by one fixing event, top to bottom, with their prior colors.
    LinesCleared { rows: ClearedRows },
    /// `delta` is negative when a reset drops the score back to zero.
    ScoreChanged { score: u32, delta: i64 },
    LevelChanged { level: u32, fall_interval_ms: f64 },
    /// Terminal state reached; only a reset resumes play.
    GameOver { score: u32, level: u32, lines: u32 },
    Reset,
}

impl GameEvent {
    /// Short name, used for log lines.
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::PieceFixed { .. } => "piece_fixed",
            GameEvent::LinesCleared { .. } => "lines_cleared",
            GameEvent::ScoreChanged { .. } => "score_changed",
            GameEvent::LevelChanged { .. } => "level_changed",
            GameEvent::GameOver { .. } => "game_over",
            GameEvent::Reset => "reset",
        }
    }
}
