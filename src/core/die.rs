//! The orchard die.
//!
//! Six faces: one per tree, the basket, and the crow.

use serde::{Deserialize, Serialize};

use super::error::{OrchardError, Result};

/// Number of trees in the orchard (and of tree faces on the die).
pub const TREE_COUNT: usize = 4;

/// Number of faces on the die.
pub const DIE_FACES: u8 = 6;

/// Raw value of the basket face.
pub const BASKET_VALUE: u8 = 4;

/// Raw value of the crow face.
pub const CROW_VALUE: u8 = 5;

/// Outcome of a single die roll.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DieFace {
    /// Pick one fruit from the given tree, if it has any.
    Tree(usize),
    /// Harvest through the active policy.
    Basket,
    /// Move the crow one step closer.
    Crow,
}

impl DieFace {
    /// Convert a raw value in `0..=5` to a face.
    pub fn from_value(value: u8) -> Result<Self> {
        match value {
            v if (v as usize) < TREE_COUNT => Ok(DieFace::Tree(v as usize)),
            BASKET_VALUE => Ok(DieFace::Basket),
            CROW_VALUE => Ok(DieFace::Crow),
            other => Err(OrchardError::InvalidDieValue(other)),
        }
    }

    /// Raw value of this face.
    #[must_use]
    pub fn value(self) -> u8 {
        match self {
            DieFace::Tree(tree) => tree as u8,
            DieFace::Basket => BASKET_VALUE,
            DieFace::Crow => CROW_VALUE,
        }
    }
}

impl std::fmt::Display for DieFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DieFace::Tree(tree) => write!(f, "Tree({})", tree),
            DieFace::Basket => write!(f, "Basket"),
            DieFace::Crow => write!(f, "Crow"),
        }
    }
}
