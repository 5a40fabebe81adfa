//! Dice sources: seeded random rolls and scripted replays.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical rolls
//! - **Context streams**: Independent sequences per policy batch
//! - **Scriptable**: `ScriptedDice` replays a fixed sequence for tests
//!
//! ```
//! use verger_sim::core::{DiceSource, GameRng};
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//! assert_eq!(a.roll().unwrap(), b.roll().unwrap());
//! ```

use std::collections::VecDeque;
use std::hash::{Hash, Hasher};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use super::die::{DieFace, DIE_FACES};
use super::error::{OrchardError, Result};

/// Anything that can roll the orchard die.
pub trait DiceSource {
    /// Roll the die once.
    fn roll(&mut self) -> Result<DieFace>;
}

impl<D: DiceSource + ?Sized> DiceSource for &mut D {
    fn roll(&mut self) -> Result<DieFace> {
        (**self).roll()
    }
}

/// Seeded uniform die.
///
/// Uses ChaCha8 for speed while keeping the sequence reproducible per seed.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Create an independent stream for a specific context.
    ///
    /// The same context always produces the same stream from the same seed.
    #[must_use]
    pub fn for_context(&self, context: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;

        let mut hasher = DefaultHasher::new();
        self.seed.hash(&mut hasher);
        context.hash(&mut hasher);
        Self::new(hasher.finish())
    }

    /// Seed this stream was created from.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniform raw die value in `0..=5`.
    pub fn roll_value(&mut self) -> u8 {
        self.inner.gen_range(0..DIE_FACES)
    }
}

impl DiceSource for GameRng {
    fn roll(&mut self) -> Result<DieFace> {
        DieFace::from_value(self.roll_value())
    }
}

/// Replays a fixed sequence of rolls, then fails with `DiceExhausted`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedDice {
    rolls: VecDeque<DieFace>,
    served: usize,
}

impl ScriptedDice {
    /// Script from faces.
    pub fn new(faces: impl IntoIterator<Item = DieFace>) -> Self {
        Self {
            rolls: faces.into_iter().collect(),
            served: 0,
        }
    }

    /// Script from raw die values, rejecting anything outside `0..=5`.
    pub fn from_values(values: &[u8]) -> Result<Self> {
        let faces = values
            .iter()
            .map(|&v| DieFace::from_value(v))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(faces))
    }

    /// Rolls not yet served.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.rolls.len()
    }
}

impl DiceSource for ScriptedDice {
    fn roll(&mut self) -> Result<DieFace> {
        let face = self
            .rolls
            .pop_front()
            .ok_or(OrchardError::DiceExhausted { rolls: self.served })?;
        self.served += 1;
        Ok(face)
    }
}
