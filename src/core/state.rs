//! Orchard state: fruit counters, crow counter and turn bookkeeping.
//!
//! The state is a plain value so every turn can be snapshotted by copy.
//! Counters only ever move down between resets.

use serde::{Deserialize, Serialize};

use super::config::OrchardConfig;
use super::die::{DieFace, TREE_COUNT};
use super::error::{OrchardError, Result};

/// Fruit counters, one per tree.
pub type Trees = [u32; TREE_COUNT];

/// Mutable state of one game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrchardState {
    /// Fruit left on each tree.
    pub trees: Trees,

    /// Steps left before the crow arrives.
    pub crow: u32,

    /// Turns played since the last reset.
    pub turns: u32,

    /// Basket rolls since the last reset.
    pub basket_plays: u32,

    /// Face rolled on the most recent turn.
    pub last_roll: Option<DieFace>,
}

impl OrchardState {
    /// Fresh state for the given configuration.
    #[must_use]
    pub fn new(config: &OrchardConfig) -> Self {
        Self {
            trees: [config.fruits_per_tree; TREE_COUNT],
            crow: config.crow_steps,
            turns: 0,
            basket_plays: 0,
            last_roll: None,
        }
    }

    /// State with explicit counters, turn bookkeeping zeroed.
    #[must_use]
    pub fn with_counters(trees: Trees, crow: u32) -> Self {
        Self {
            trees,
            crow,
            turns: 0,
            basket_plays: 0,
            last_roll: None,
        }
    }

    /// Sum of all fruit counters.
    #[must_use]
    pub fn remaining_fruits(&self) -> u32 {
        self.trees.iter().sum()
    }

    /// The crow arrived or the orchard is empty.
    #[must_use]
    pub fn has_finished(&self) -> bool {
        self.crow == 0 || self.remaining_fruits() == 0
    }

    /// The orchard is empty.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.remaining_fruits() == 0
    }

    /// Pick one fruit from a tree; an empty tree is left alone.
    ///
    /// Returns whether a fruit was picked.
    pub fn pick(&mut self, tree: usize) -> bool {
        match self.trees.get_mut(tree) {
            Some(count) if *count > 0 => {
                *count -= 1;
                true
            }
            _ => false,
        }
    }

    /// Remove one fruit from a tree chosen by a harvest policy.
    ///
    /// Unlike `pick`, an empty or unknown tree is an error.
    pub fn harvest_from(&mut self, tree: usize) -> Result<()> {
        if self.pick(tree) {
            Ok(())
        } else {
            Err(OrchardError::EmptyTreeSelected { tree })
        }
    }

    /// Move the crow one step closer.
    pub fn advance_crow(&mut self) -> Result<()> {
        self.crow = self
            .crow
            .checked_sub(1)
            .ok_or(OrchardError::NegativeCrowStep)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state() {
        let state = OrchardState::new(&OrchardConfig::default());
        assert_eq!(state.trees, [10, 10, 10, 10]);
        assert_eq!(state.crow, 9);
        assert_eq!(state.turns, 0);
        assert_eq!(state.basket_plays, 0);
        assert_eq!(state.last_roll, None);
        assert_eq!(state.remaining_fruits(), 40);
        assert!(!state.has_finished());
    }

    #[test]
    fn test_pick_empty_tree_is_noop() {
        let mut state = OrchardState::with_counters([0, 2, 0, 0], 3);
        assert!(!state.pick(0));
        assert!(state.pick(1));
        assert_eq!(state.trees, [0, 1, 0, 0]);
        assert!(!state.pick(TREE_COUNT));
    }

    #[test]
    fn test_harvest_from_empty_tree_fails() {
        let mut state = OrchardState::with_counters([0, 2, 0, 0], 3);
        assert_eq!(
            state.harvest_from(0),
            Err(OrchardError::EmptyTreeSelected { tree: 0 })
        );
        assert_eq!(state.harvest_from(1), Ok(()));
        assert_eq!(state.trees, [0, 1, 0, 0]);
    }

    #[test]
    fn test_advance_crow_stops_at_zero() {
        let mut state = OrchardState::with_counters([1, 1, 1, 1], 1);
        assert_eq!(state.advance_crow(), Ok(()));
        assert_eq!(state.crow, 0);
        assert_eq!(state.advance_crow(), Err(OrchardError::NegativeCrowStep));
        assert_eq!(state.crow, 0);
    }

    #[test]
    fn test_finish_conditions() {
        let lost = OrchardState::with_counters([1, 0, 0, 0], 0);
        assert!(lost.has_finished());
        assert!(!lost.has_won());

        let won = OrchardState::with_counters([0, 0, 0, 0], 4);
        assert!(won.has_finished());
        assert!(won.has_won());

        // Both exhausted: an empty orchard still counts as a win
        let both = OrchardState::with_counters([0, 0, 0, 0], 0);
        assert!(both.has_finished());
        assert!(both.has_won());
    }

    #[test]
    fn test_state_serde() {
        let mut state = OrchardState::with_counters([3, 1, 4, 1], 5);
        state.last_roll = Some(DieFace::Basket);

        let json = serde_json::to_string(&state).unwrap();
        let deserialized: OrchardState = serde_json::from_str(&json).unwrap();

        assert_eq!(state, deserialized);
    }
}
