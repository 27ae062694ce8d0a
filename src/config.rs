//! Runner configuration, read from environment variables.
//!
//! - `BLOCKFALL_SEED`: `u32` seed for a deterministic piece sequence.
//!   Unset or unparsable means unseeded play.
//! - `BLOCKFALL_EVENT_LOG`: path of a JSON-lines event log. Unset or empty
//!   disables logging.

pub const SEED_VAR: &str = "BLOCKFALL_SEED";
pub const EVENT_LOG_VAR: &str = "BLOCKFALL_EVENT_LOG";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunConfig {
    pub seed: Option<u32>,
    pub event_log: Option<String>,
}

impl RunConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from any key/value lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let seed = lookup(SEED_VAR).and_then(|s| s.trim().parse().ok());

        let event_log = lookup(EVENT_LOG_VAR)
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        Self { seed, event_log }
    }
}
