//! Turn resolution for the orchard game.
//!
//! `GameEngine` owns the orchard state, a dice source and a harvest policy.
//! Each turn rolls the die once and applies the face:
//! - Tree face: pick one fruit from that tree if it has any
//! - Crow face: move the crow one step
//! - Basket face: harvest through the policy (once or twice, per config)
//!
//! The game ends when the crow arrives or the orchard is empty. An empty
//! orchard is a win even if the crow arrived on the same check.

use serde::{Deserialize, Serialize};

use crate::core::{
    DiceSource, DieFace, GameRng, OrchardConfig, OrchardError, OrchardState, Result,
};
use crate::harvest::HarvestPolicy;

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// All fruit harvested.
    Won,
    /// The crow arrived first.
    Lost,
}

impl GameResult {
    /// Check if the game was won.
    #[must_use]
    pub fn is_win(self) -> bool {
        self == GameResult::Won
    }
}

/// One orchard game, replayable through `reset`.
#[derive(Clone, Debug)]
pub struct GameEngine<P: HarvestPolicy, D: DiceSource = GameRng> {
    config: OrchardConfig,
    policy: P,
    dice: D,
    state: OrchardState,
}

impl<P: HarvestPolicy, D: DiceSource> GameEngine<P, D> {
    /// Create an engine with a fresh orchard.
    pub fn new(config: OrchardConfig, policy: P, dice: D) -> Self {
        Self {
            state: OrchardState::new(&config),
            config,
            policy,
            dice,
        }
    }

    /// Create an engine starting from an arbitrary state.
    ///
    /// `reset` still restores the configured starting state.
    pub fn with_state(config: OrchardConfig, policy: P, dice: D, state: OrchardState) -> Self {
        Self {
            config,
            policy,
            dice,
            state,
        }
    }

    /// Restore every counter to its starting value.
    pub fn reset(&mut self) {
        self.state = OrchardState::new(&self.config);
    }

    /// Roll the die without touching the orchard.
    pub fn roll_die(&mut self) -> Result<DieFace> {
        self.dice.roll()
    }

    /// Play a single turn and return the face rolled.
    pub fn play_one_turn(&mut self) -> Result<DieFace> {
        let face = self.roll_die()?;
        self.state.last_roll = Some(face);
        self.state.turns += 1;

        match face {
            DieFace::Tree(tree) => {
                self.state.pick(tree);
            }
            DieFace::Crow => self.state.advance_crow()?,
            DieFace::Basket => {
                self.state.basket_plays += 1;
                self.harvest()?;
                for _ in 1..self.config.basket_harvest.max_harvests() {
                    if self.remaining_fruits() == 0 {
                        break;
                    }
                    self.harvest()?;
                }
            }
        }

        Ok(face)
    }

    /// Play turns until the game ends. Returns whether it was won.
    ///
    /// Does not reset first; call `reset` between games.
    pub fn play(&mut self) -> Result<bool> {
        while !self.has_finished() {
            self.play_one_turn()?;
        }
        Ok(self.has_won())
    }

    /// Harvest one fruit from the tree the policy selects.
    ///
    /// Returns the tree harvested.
    pub fn harvest(&mut self) -> Result<usize> {
        if self.remaining_fruits() == 0 {
            return Err(OrchardError::NoFruitForHarvest);
        }
        let tree = self
            .policy
            .select_harvest_target(&self.state.trees)
            .ok_or(OrchardError::NoFruitForHarvest)?;
        self.state.harvest_from(tree)?;
        Ok(tree)
    }

    // === Queries ===

    /// Sum of all fruit counters.
    #[must_use]
    pub fn remaining_fruits(&self) -> u32 {
        self.state.remaining_fruits()
    }

    /// The crow arrived or the orchard is empty.
    #[must_use]
    pub fn has_finished(&self) -> bool {
        self.state.has_finished()
    }

    /// The orchard is empty.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.state.has_won()
    }

    /// Outcome if the game is over.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        if !self.has_finished() {
            None
        } else if self.has_won() {
            Some(GameResult::Won)
        } else {
            Some(GameResult::Lost)
        }
    }

    #[must_use]
    pub fn state(&self) -> &OrchardState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &OrchardConfig {
        &self.config
    }

    #[must_use]
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Consume the engine, returning its dice source.
    pub fn into_dice(self) -> D {
        self.dice
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BasketHarvest, ScriptedDice};
    use crate::harvest::{Baseline, GreedyMax, GreedyMin, HarvestPolicy};

    fn scripted<P: HarvestPolicy>(
        policy: P,
        trees: [u32; 4],
        crow: u32,
        rolls: &[u8],
    ) -> GameEngine<P, ScriptedDice> {
        GameEngine::with_state(
            OrchardConfig::default().with_basket_harvest(BasketHarvest::Single),
            policy,
            ScriptedDice::from_values(rolls).unwrap(),
            OrchardState::with_counters(trees, crow),
        )
    }

    #[test]
    fn test_tree_face_picks_fruit() {
        let mut engine = scripted(Baseline, [2, 2, 2, 2], 3, &[2]);
        assert_eq!(engine.play_one_turn(), Ok(DieFace::Tree(2)));
        assert_eq!(engine.state().trees, [2, 2, 1, 2]);
        assert_eq!(engine.state().turns, 1);
        assert_eq!(engine.state().last_roll, Some(DieFace::Tree(2)));
    }

    #[test]
    fn test_empty_tree_face_consumes_turn() {
        let mut engine = scripted(Baseline, [0, 2, 2, 2], 3, &[0]);
        engine.play_one_turn().unwrap();
        assert_eq!(engine.state().trees, [0, 2, 2, 2]);
        assert_eq!(engine.state().crow, 3);
        assert_eq!(engine.state().turns, 1);
    }

    #[test]
    fn test_crow_face_advances_crow() {
        let mut engine = scripted(Baseline, [1, 1, 1, 1], 3, &[5]);
        engine.play_one_turn().unwrap();
        assert_eq!(engine.state().crow, 2);
        assert_eq!(engine.remaining_fruits(), 4);
    }

    #[test]
    fn test_crow_face_past_zero_fails() {
        let mut engine = scripted(Baseline, [1, 1, 1, 1], 0, &[5]);
        assert_eq!(engine.play_one_turn(), Err(OrchardError::NegativeCrowStep));
    }

    #[test]
    fn test_basket_uses_policy() {
        let mut engine = scripted(GreedyMax, [3, 1, 4, 1], 3, &[4]);
        engine.play_one_turn().unwrap();
        assert_eq!(engine.state().trees, [3, 1, 3, 1]);
        assert_eq!(engine.state().basket_plays, 1);

        let mut engine = scripted(GreedyMin, [3, 1, 4, 1], 3, &[4]);
        engine.play_one_turn().unwrap();
        assert_eq!(engine.state().trees, [3, 0, 4, 1]);
    }

    #[test]
    fn test_basket_double_harvest() {
        let mut engine = GameEngine::with_state(
            OrchardConfig::default().with_basket_harvest(BasketHarvest::DoubleIfAvailable),
            Baseline,
            ScriptedDice::from_values(&[4]).unwrap(),
            OrchardState::with_counters([1, 2, 0, 0], 3),
        );
        engine.play_one_turn().unwrap();
        assert_eq!(engine.state().trees, [0, 1, 0, 0]);
        assert_eq!(engine.state().basket_plays, 1);
    }

    #[test]
    fn test_basket_double_harvest_stops_when_empty() {
        let mut engine = GameEngine::with_state(
            OrchardConfig::default().with_basket_harvest(BasketHarvest::DoubleIfAvailable),
            Baseline,
            ScriptedDice::from_values(&[4]).unwrap(),
            OrchardState::with_counters([0, 0, 1, 0], 3),
        );
        engine.play_one_turn().unwrap();
        assert_eq!(engine.remaining_fruits(), 0);
        assert_eq!(engine.result(), Some(GameResult::Won));
    }

    #[test]
    fn test_harvest_on_empty_orchard_fails() {
        let mut engine = scripted(Baseline, [0, 0, 0, 0], 3, &[]);
        assert_eq!(engine.harvest(), Err(OrchardError::NoFruitForHarvest));
        assert_eq!(engine.state().trees, [0, 0, 0, 0]);
    }

    #[test]
    fn test_harvest_rejects_empty_tree_choice() {
        struct AlwaysFirst;

        impl HarvestPolicy for AlwaysFirst {
            fn name(&self) -> &'static str {
                "Always-first"
            }

            fn select_harvest_target(&self, _trees: &[u32; 4]) -> Option<usize> {
                Some(0)
            }
        }

        let mut engine = scripted(AlwaysFirst, [0, 3, 0, 0], 3, &[]);
        assert_eq!(engine.harvest(), Err(OrchardError::EmptyTreeSelected { tree: 0 }));
    }

    #[test]
    fn test_reset_restores_config() {
        let mut engine = scripted(Baseline, [0, 0, 1, 0], 1, &[2]);
        engine.play().unwrap();
        assert!(engine.has_finished());

        engine.reset();
        assert_eq!(*engine.state(), OrchardState::new(engine.config()));
        assert_eq!(engine.result(), None);
    }

    #[test]
    fn test_result_prefers_win_when_both_exhausted() {
        let engine = scripted(Baseline, [0, 0, 0, 0], 0, &[]);
        assert_eq!(engine.result(), Some(GameResult::Won));
        assert!(GameResult::Won.is_win());
        assert!(!GameResult::Lost.is_win());
    }

    #[test]
    fn test_play_on_finished_game_rolls_nothing() {
        let mut engine = scripted(Baseline, [1, 0, 0, 0], 0, &[0]);
        assert_eq!(engine.play(), Ok(false));
        assert_eq!(engine.state().turns, 0);
        assert_eq!(engine.into_dice().remaining(), 1);
    }
}
