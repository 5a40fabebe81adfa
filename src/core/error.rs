//! Invariant violations raised by the orchard engine.
//!
//! None of these are recoverable for the game instance that produced them.
//! They signal a broken turn resolution, a misbehaving harvest policy, or a
//! scripted dice source that ran dry.

use thiserror::Error;

/// Errors raised while resolving turns.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum OrchardError {
    /// A crow roll was resolved with the crow already home.
    #[error("negative crow step: the crow counter is already 0")]
    NegativeCrowStep,

    /// A harvest was requested with every tree empty.
    #[error("no fruit available for harvest")]
    NoFruitForHarvest,

    /// A harvest policy picked a tree that cannot give a fruit.
    #[error("harvest policy selected tree {tree}, which has no fruit")]
    EmptyTreeSelected {
        /// Index returned by the policy.
        tree: usize,
    },

    /// A raw die value outside `0..=5`.
    #[error("invalid die value {0}, expected 0..=5")]
    InvalidDieValue(u8),

    /// A scripted dice source has no rolls left.
    #[error("scripted dice exhausted after {rolls} rolls")]
    DiceExhausted {
        /// Rolls served before running out.
        rolls: usize,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, OrchardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_invariant() {
        assert_eq!(
            OrchardError::NegativeCrowStep.to_string(),
            "negative crow step: the crow counter is already 0"
        );
        assert_eq!(
            OrchardError::NoFruitForHarvest.to_string(),
            "no fruit available for harvest"
        );
        assert_eq!(
            OrchardError::EmptyTreeSelected { tree: 2 }.to_string(),
            "harvest policy selected tree 2, which has no fruit"
        );
        assert_eq!(
            OrchardError::DiceExhausted { rolls: 7 }.to_string(),
            "scripted dice exhausted after 7 rolls"
        );
    }
}
