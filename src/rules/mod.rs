//! Orchard game rules.
//!
//! `GameEngine` resolves die rolls into state changes and answers the
//! termination queries. Tree selection on basket rolls is delegated to a
//! `HarvestPolicy`. `replay` records whole games for rendering.

pub mod engine;
pub mod replay;

pub use engine::{GameEngine, GameResult};
pub use replay::{find_showcase, play_recorded, GameLog, SHOWCASE_MIN_BASKETS, SHOWCASE_TURNS};
