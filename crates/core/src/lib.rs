//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules, state management, and simulation logic.
//! It has **no dependencies** on UI, terminals or I/O, making it:
//!
//! - **Deterministic**: A seeded piece source produces identical games
//! - **Testable**: Every rule is covered by unit tests
//! - **Portable**: Can be driven by any front-end (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid of color tags, row fullness and row clearing
//! - [`pieces`]: the seven piece templates, shape matrices and rotation
//! - [`collision`]: overlap and bounds test for proposed placements
//! - [`rng`]: injectable piece sources (seeded, thread RNG, fixed sequence)
//! - [`scoring`]: line-clear points, level progression and fall interval
//! - [`game_state`]: the state machine tying everything together
//! - [`events`]: notifications for front-ends (lines cleared, game over, ...)
//! - [`snapshot`]: plain-data view of the game for renderers
//!
//! # Game Rules
//!
//! - Pieces are chosen uniformly at random from the seven kinds
//! - A piece spawns horizontally centered on the top row
//! - Rotation is a plain quarter turn of the shape matrix, rejected when blocked (no wall kicks)
//! - A piece that cannot fall is fixed into the board on the next tick
//! - Clearing `n` rows at once scores `10 * 2^(n-1)`
//! - Level rises by one once `10 * level` lines are cleared (at most once per fix)
//! - Fall interval is `1000ms * 0.9^(level - 1)`
//! - The game is over once anything is fixed in the top row
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameState, StepOutcome};
//! use blockfall_types::{GameAction, GameStatus};
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! assert_eq!(game.tick(), StepOutcome::Fell);
//!
//! assert_eq!(game.status(), GameStatus::Running);
//! assert_eq!(game.score(), 0);
//! assert_eq!(game.fall_interval_ms(), 1000.0);
//! ```
//!
//! # Timing
//!
//! The engine has no clock of its own. The driver calls
//! [`GameState::tick`](game_state::GameState::tick) whenever
//! [`GameState::fall_interval`](game_state::GameState::fall_interval) has
//! elapsed, re-reading the interval after every tick since it shrinks as the
//! level rises.

pub mod board;
pub mod collision;
pub mod events;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRow, ClearedRows};
pub use collision::{collides, fits};
pub use events::GameEvent;
pub use game_state::{GameState, StepOutcome};
pub use pieces::{definition, ActivePiece, PieceDefinition, Shape};
pub use rng::{PieceSource, RngSource, SequenceSource, SimpleRng, ThreadSource};
pub use scoring::{fall_interval_ms, line_clear_score, Progress, ScoreResult};
pub use snapshot::GameSnapshot;
