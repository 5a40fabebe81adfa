//! # verger-sim
//!
//! Monte Carlo simulator for the Verger orchard dice game.
//!
//! Four trees carry fruit, a crow walks towards the orchard. Each turn one
//! die roll either picks a fruit from a tree, moves the crow, or fills the
//! basket. The basket lets a harvest policy choose which tree to take from,
//! and that choice is the only decision in the game.
//!
//! ## Design Principles
//!
//! 1. **Injectable randomness**: the engine takes any `DiceSource`, so games
//!    can be seeded or scripted roll by roll.
//!
//! 2. **Policies as a capability**: `HarvestPolicy` has a single operation,
//!    `select_harvest_target`. New policies need nothing else.
//!
//! 3. **Invariants as errors**: impossible transitions (a crow step past
//!    zero, a harvest from an empty orchard) come back as `OrchardError`.
//!
//! ## Modules
//!
//! - `core`: die faces, dice sources, orchard state, configuration, errors
//! - `harvest`: basket harvesting policies
//! - `rules`: turn resolution engine and single-game recording
//! - `batch`: batch runs and win/loss reports
//! - `display`: terminal rendering for single games

pub mod core;
pub mod harvest;
pub mod rules;
pub mod batch;
pub mod display;

// Re-export commonly used types
pub use crate::core::{
    BasketHarvest, OrchardConfig,
    DieFace, DiceSource, GameRng, ScriptedDice,
    OrchardState, Trees, TREE_COUNT,
    OrchardError, Result,
};

pub use crate::harvest::{HarvestPolicy, PolicyKind, Baseline, GreedyMax, GreedyMin};

pub use crate::rules::{GameEngine, GameResult, GameLog, play_recorded, find_showcase};

pub use crate::batch::{BatchConfig, BatchReport, BatchRunner};
