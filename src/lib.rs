//! Blockfall (workspace facade crate).
//!
//! Re-exports the engine, input mapping and terminal rendering crates under
//! `blockfall::{core,input,term,types}`, plus the runner's configuration and
//! event log.

pub mod config;
pub mod event_log;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;

pub use config::RunConfig;
pub use event_log::EventLog;
