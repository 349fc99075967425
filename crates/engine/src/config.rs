//! Engine configuration
//!
//! Board size, animation pacing and the instant-resolution cap are fixed at
//! construction. Values can come from the environment:
//!
//! - `CANDY_WIDTH` / `CANDY_HEIGHT`: board size (default 9x9)
//! - `CANDY_DELAY_MS`: pause between animated phases (default 200)
//! - `CANDY_MAX_SYNC_ROUNDS`: cap on instant resolution rounds (default 1000)
//! - `CANDY_SEED`: fixed RNG seed (default: OS entropy)
//!
//! Unparsable values fall back to the defaults.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::EngineError;
use crate::types::{ANIMATION_DELAY_MS, BOARD_HEIGHT, BOARD_WIDTH, MAX_SYNC_ROUNDS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineConfig {
    pub width: usize,
    pub height: usize,
    pub animation_delay_ms: u64,
    pub max_sync_rounds: u32,
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            animation_delay_ms: ANIMATION_DELAY_MS,
            max_sync_rounds: MAX_SYNC_ROUNDS,
            seed: None,
        }
    }
}

fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    env::var(key).ok().and_then(|s| s.trim().parse().ok())
}

impl EngineConfig {
    /// Create from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            width: env_parse("CANDY_WIDTH").unwrap_or(defaults.width),
            height: env_parse("CANDY_HEIGHT").unwrap_or(defaults.height),
            animation_delay_ms: env_parse("CANDY_DELAY_MS").unwrap_or(defaults.animation_delay_ms),
            max_sync_rounds: env_parse("CANDY_MAX_SYNC_ROUNDS")
                .unwrap_or(defaults.max_sync_rounds),
            seed: env_parse("CANDY_SEED"),
        }
    }

    /// Same config with a fixed seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Same config with another board size
    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.width == 0 || self.height == 0 {
            return Err(EngineError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if self.max_sync_rounds == 0 {
            return Err(EngineError::InvalidConfig(
                "max_sync_rounds must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    pub fn animation_delay(&self) -> Duration {
        Duration::from_millis(self.animation_delay_ms)
    }
}
