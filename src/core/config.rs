//! Orchard configuration.
//!
//! The game constants live here rather than in the engine so tests can
//! shrink the orchard to something traceable by hand.

use serde::{Deserialize, Serialize};

/// Fruits on each tree at the start of a game.
pub const FRUITS_PER_TREE: u32 = 10;

/// Steps the crow walks before reaching the orchard.
pub const CROW_STEPS: u32 = 9;

/// How many harvests a basket roll triggers.
///
/// Two variants of the game circulate: one harvests once per basket roll,
/// the other harvests a second time when fruit is still left.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BasketHarvest {
    /// One harvest per basket roll.
    Single,
    /// One harvest, then a second one if any fruit remains.
    #[default]
    DoubleIfAvailable,
}

impl BasketHarvest {
    /// Upper bound on harvests for a single basket roll.
    #[must_use]
    pub const fn max_harvests(self) -> u32 {
        match self {
            BasketHarvest::Single => 1,
            BasketHarvest::DoubleIfAvailable => 2,
        }
    }
}

/// Complete orchard configuration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrchardConfig {
    /// Fruits on each tree after a reset.
    pub fruits_per_tree: u32,

    /// Crow counter after a reset.
    pub crow_steps: u32,

    /// Harvests per basket roll.
    pub basket_harvest: BasketHarvest,
}

impl Default for OrchardConfig {
    fn default() -> Self {
        Self {
            fruits_per_tree: FRUITS_PER_TREE,
            crow_steps: CROW_STEPS,
            basket_harvest: BasketHarvest::default(),
        }
    }
}

impl OrchardConfig {
    /// Create the standard configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set fruits per tree.
    #[must_use]
    pub fn with_fruits_per_tree(mut self, fruits: u32) -> Self {
        self.fruits_per_tree = fruits;
        self
    }

    /// Set the crow's starting distance.
    #[must_use]
    pub fn with_crow_steps(mut self, steps: u32) -> Self {
        self.crow_steps = steps;
        self
    }

    /// Set basket harvest behavior.
    #[must_use]
    pub fn with_basket_harvest(mut self, basket: BasketHarvest) -> Self {
        self.basket_harvest = basket;
        self
    }
}
