use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default game speed, in ticks per second
pub const DEFAULT_TICK_RATE: u32 = 10;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Game ticks per second
    pub tick_rate: u32,
    /// Seed for fruit placement; entropy-seeded when absent
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_rate: DEFAULT_TICK_RATE,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with a custom speed
    pub fn new(tick_rate: u32) -> Self {
        Self {
            tick_rate,
            ..Default::default()
        }
    }

    /// Fix the fruit RNG seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Time between two ticks. A zero tick rate is treated as one per second.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(1000 / u64::from(self.tick_rate.max(1)))
    }
}
