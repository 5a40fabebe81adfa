//! Basket harvesting policies.
//!
//! - `Baseline`: first tree with fruit
//! - `GreedyMax`: fullest tree
//! - `GreedyMin`: emptiest tree that still has fruit
//!
//! New policies only need to implement `HarvestPolicy`.

pub mod policy;

pub use policy::{Baseline, GreedyMax, GreedyMin, HarvestPolicy, PolicyKind};
