//! Terminal rendering for the block-falling game.
//!
//! The engine knows nothing about drawing. This crate maps a
//! [`core::GameSnapshot`] into a character framebuffer ([`GameView`], pure and
//! unit-testable) and flushes framebuffers to a real terminal
//! ([`TerminalRenderer`], diff redraws through crossterm).

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
