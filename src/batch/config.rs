//! Batch run configuration.

use serde::{Deserialize, Serialize};

use crate::core::OrchardConfig;

/// Games per policy in a default batch.
pub const DEFAULT_GAMES: u64 = 500_000;

/// Configuration for a batch of independent games.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchConfig {
    /// Games played per policy.
    pub games: u64,

    /// Base seed. Each policy gets its own stream derived from it.
    pub seed: u64,

    /// Orchard rules shared by every game in the batch.
    pub orchard: OrchardConfig,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            games: DEFAULT_GAMES,
            seed: 42,
            orchard: OrchardConfig::default(),
        }
    }
}

impl BatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set games per policy.
    #[must_use]
    pub fn with_games(mut self, games: u64) -> Self {
        self.games = games;
        self
    }

    /// Set the base seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the orchard rules.
    #[must_use]
    pub fn with_orchard(mut self, orchard: OrchardConfig) -> Self {
        self.orchard = orchard;
        self
    }
}
