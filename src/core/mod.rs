//! Core types: die faces, dice sources, orchard state, configuration, errors.
//!
//! Nothing in here knows about harvest policies; the engine in `rules`
//! ties the pieces together.

pub mod config;
pub mod die;
pub mod error;
pub mod rng;
pub mod state;

pub use config::{BasketHarvest, OrchardConfig, CROW_STEPS, FRUITS_PER_TREE};
pub use die::{DieFace, BASKET_VALUE, CROW_VALUE, DIE_FACES, TREE_COUNT};
pub use error::{OrchardError, Result};
pub use rng::{DiceSource, GameRng, ScriptedDice};
pub use state::{OrchardState, Trees};
