use crate::board::{HEIGHT, WIDTH};
use crate::pieces::ActivePiece;
use crate::types::{Cell, GameStatus, PieceKind, STARTING_LEVEL};

/// Plain-data copy of everything a renderer needs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    pub board: [[Cell; WIDTH]; HEIGHT],
    pub active: ActivePiece,
    pub piece_id: u32,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub fall_interval_ms: f64,
    pub status: GameStatus,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; WIDTH]; HEIGHT],
            active: ActivePiece::spawn(PieceKind::I),
            piece_id: 0,
            score: 0,
            level: STARTING_LEVEL,
            lines: 0,
            fall_interval_ms: crate::scoring::fall_interval_ms(STARTING_LEVEL),
            status: GameStatus::Running,
        }
    }
}
