//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s. It holds no
//! state and knows nothing about the engine; the runner decides what to do
//! with each action.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, is_restart_key, should_quit};
