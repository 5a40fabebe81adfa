//! Win/loss tally for one policy batch.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Statistics collected while running a batch.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Policy the batch was played with.
    pub policy: String,

    /// Games played.
    pub games: u64,

    /// Games won.
    pub victories: u64,

    /// Games lost.
    pub defeats: u64,

    /// Turns played across all games.
    pub total_turns: u64,

    /// Basket rolls across all games.
    pub total_basket_plays: u64,

    /// Wall time spent playing.
    pub elapsed: Duration,
}

impl BatchReport {
    /// Create an empty report for a policy.
    pub fn new(policy: impl Into<String>) -> Self {
        Self {
            policy: policy.into(),
            ..Self::default()
        }
    }

    /// Tally one finished game.
    pub fn record(&mut self, won: bool, turns: u32, basket_plays: u32) {
        self.games += 1;
        if won {
            self.victories += 1;
        } else {
            self.defeats += 1;
        }
        self.total_turns += u64::from(turns);
        self.total_basket_plays += u64::from(basket_plays);
    }

    /// Win percentage rounded to two decimals.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            (self.victories as f64 / self.games as f64 * 10_000.0).round() / 100.0
        }
    }

    /// Average game length in turns.
    #[must_use]
    pub fn mean_turns(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_turns as f64 / self.games as f64
        }
    }

    /// Games per second of wall time.
    #[must_use]
    pub fn games_per_second(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs == 0.0 {
            0.0
        } else {
            self.games as f64 / secs
        }
    }
}

impl std::fmt::Display for BatchReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Elapsed: {:.3}s", self.elapsed.as_secs_f64())?;
        writeln!(f, "Algo: {}", self.policy)?;
        writeln!(f, "Victories: {}", self.victories)?;
        writeln!(f, "Defeats: {}", self.defeats)?;
        write!(f, "{:.2}%", self.win_rate())
    }
}
