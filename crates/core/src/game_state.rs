//! Game state module - manages the complete game state
//!
//! This module ties together all core components: board, pieces, piece source and scoring.
//! It handles piece movement, rotation, fixing, line clears and the game lifecycle.
//!
//! Each command runs to completion before returning, so callers only ever
//! observe the state before or after a whole tick (fall, fix, clear, spawn,
//! game-over check), never in between.

use std::time::Duration;

use crate::collision::fits;
use crate::events::GameEvent;
use crate::pieces::ActivePiece;
use crate::rng::{PieceSource, SimpleRng};
use crate::scoring::{self, Progress};
use crate::snapshot::GameSnapshot;
use crate::types::*;
use crate::Board;

/// What a downward step (tick or soft drop) did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The piece moved down one row.
    Fell,
    /// The piece could not fall: it was fixed, rows were cleared and a new piece spawned.
    Fixed { lines_cleared: u8 },
    /// The game is over; nothing happened.
    Ignored,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<S = SimpleRng> {
    board: Board,
    active: ActivePiece,
    source: S,
    progress: Progress,
    status: GameStatus,
    /// Monotonic id of spawned pieces (keeps counting across resets).
    piece_id: u32,
    /// Pending notifications for the front-end.
    events: Vec<GameEvent>,
}

impl GameState<SimpleRng> {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        Self::with_source(SimpleRng::new(seed))
    }
}

impl<S: PieceSource> GameState<S> {
    /// Create a running game drawing pieces from `source`, with the first piece spawned.
    pub fn with_source(mut source: S) -> Self {
        let active = ActivePiece::spawn(source.next_kind());
        Self {
            board: Board::new(),
            active,
            source,
            progress: Progress::new(),
            status: GameStatus::Running,
            piece_id: 1,
            events: Vec::new(),
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status == GameStatus::GameOver
    }

    pub fn score(&self) -> u32 {
        self.progress.score
    }

    pub fn level(&self) -> u32 {
        self.progress.level
    }

    pub fn lines(&self) -> u32 {
        self.progress.lines
    }

    pub fn piece_id(&self) -> u32 {
        self.piece_id
    }

    pub fn active(&self) -> &ActivePiece {
        &self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access, for tests and scripted setups.
    ///
    /// Changes made here are only judged by the next command (e.g. a filled
    /// top row ends the game on the next tick).
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Milliseconds until the next automatic fall; re-read after every tick.
    pub fn fall_interval_ms(&self) -> f64 {
        self.progress.fall_interval_ms()
    }

    pub fn fall_interval(&self) -> Duration {
        scoring::fall_interval(self.progress.level)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);
        out.active = self.active;
        out.piece_id = self.piece_id;
        out.score = self.progress.score;
        out.level = self.progress.level;
        out.lines = self.progress.lines;
        out.fall_interval_ms = self.fall_interval_ms();
        out.status = self.status;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Drain pending events in the order they happened.
    pub fn drain_events(&mut self) -> std::vec::Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    /// Apply an input action. Returns whether it changed anything.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop() != StepOutcome::Ignored,
            GameAction::Rotate => self.rotate(),
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }

    pub fn move_left(&mut self) -> bool {
        self.try_move(-1, 0)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_move(1, 0)
    }

    pub fn rotate(&mut self) -> bool {
        self.try_rotate()
    }

    /// Move the piece down one row, fixing it if it has landed.
    pub fn soft_drop(&mut self) -> StepOutcome {
        self.step_down()
    }

    /// Clock-driven fall; same rules as [`Self::soft_drop`].
    pub fn tick(&mut self) -> StepOutcome {
        self.step_down()
    }

    /// Translate the active piece if the target is free.
    ///
    /// Returns false (state unchanged) when blocked or when the game is over.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if self.is_game_over() {
            return false;
        }

        let target = self.active.moved(dx, dy);
        if !fits(&self.board, &target) {
            return false;
        }

        self.active = target;
        true
    }

    /// Rotate the active piece a quarter turn in place if the rotated shape fits.
    ///
    /// A blocked rotation is dropped, not retried.
    pub fn try_rotate(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }

        let candidate = self.active.with_shape(self.active.shape.rotated());
        if !fits(&self.board, &candidate) {
            return false;
        }

        self.active = candidate;
        true
    }

    /// Start over: empty board, initial score/level/lines, fresh piece, running.
    ///
    /// Queues `Reset`, followed by `ScoreChanged` / `LevelChanged` when the
    /// score or level actually moved back.
    pub fn reset(&mut self) {
        let before = self.progress;
        self.board.clear();
        self.progress.reset();
        self.status = GameStatus::Running;
        self.spawn_piece();

        self.events.push(GameEvent::Reset);
        if before.score != self.progress.score {
            self.events.push(GameEvent::ScoreChanged {
                score: self.progress.score,
                delta: i64::from(self.progress.score) - i64::from(before.score),
            });
        }
        if before.level != self.progress.level {
            self.events.push(GameEvent::LevelChanged {
                level: self.progress.level,
                fall_interval_ms: self.fall_interval_ms(),
            });
        }
    }

    fn step_down(&mut self) -> StepOutcome {
        if self.is_game_over() {
            return StepOutcome::Ignored;
        }

        let outcome = if self.try_move(0, 1) {
            StepOutcome::Fell
        } else {
            let lines_cleared = self.fix_active();
            self.spawn_piece();
            StepOutcome::Fixed { lines_cleared }
        };

        if self.board.is_top_row_occupied() {
            self.status = GameStatus::GameOver;
            self.events.push(GameEvent::GameOver {
                score: self.progress.score,
                level: self.progress.level,
                lines: self.progress.lines,
            });
        }

        outcome
    }

    /// Write the active piece into the board, clear full rows and update score.
    fn fix_active(&mut self) -> u8 {
        let active = self.active;
        self.board
            .lock_shape(&active.shape, active.x, active.y, active.color);
        self.events.push(GameEvent::PieceFixed {
            kind: active.kind,
            x: active.x,
            y: active.y,
        });

        let rows = self.board.clear_full_rows();
        let cleared = rows.len();
        if cleared == 0 {
            return 0;
        }

        let result = self.progress.record_clear(cleared);
        self.events.push(GameEvent::LinesCleared { rows });
        self.events.push(GameEvent::ScoreChanged {
            score: self.progress.score,
            delta: i64::from(result.points),
        });
        if result.leveled_up {
            self.events.push(GameEvent::LevelChanged {
                level: self.progress.level,
                fall_interval_ms: self.fall_interval_ms(),
            });
        }

        cleared as u8
    }

    fn spawn_piece(&mut self) {
        self.active = ActivePiece::spawn(self.source.next_kind());
        self.piece_id = self.piece_id.wrapping_add(1);
    }
}
