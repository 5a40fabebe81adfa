//! Single-game recording and showcase search.
//!
//! A recorded game keeps one state snapshot per turn (plus the starting
//! state) so it can be rendered after the fact.

use serde::{Deserialize, Serialize};

use crate::core::{DiceSource, OrchardState, Result};
use crate::harvest::HarvestPolicy;

use super::engine::{GameEngine, GameResult};

/// Turns in a showcase game.
pub const SHOWCASE_TURNS: u32 = 16;

/// A showcase game needs strictly more basket plays than this.
pub const SHOWCASE_MIN_BASKETS: u32 = 6;

/// Snapshots of one complete game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameLog {
    /// Starting state followed by the state after each turn.
    pub snapshots: Vec<OrchardState>,

    pub result: GameResult,
}

impl GameLog {
    /// State at the end of the game.
    #[must_use]
    pub fn final_state(&self) -> Option<&OrchardState> {
        self.snapshots.last()
    }

    /// Turns played.
    #[must_use]
    pub fn turns(&self) -> u32 {
        self.final_state().map_or(0, |state| state.turns)
    }

    /// A short, basket-heavy win: exactly 16 turns and more than 6 basket plays.
    #[must_use]
    pub fn is_showcase(&self) -> bool {
        self.result.is_win()
            && self
                .final_state()
                .is_some_and(|s| s.turns == SHOWCASE_TURNS && s.basket_plays > SHOWCASE_MIN_BASKETS)
    }
}

/// Reset the engine and play one game, recording every turn.
pub fn play_recorded<P: HarvestPolicy, D: DiceSource>(engine: &mut GameEngine<P, D>) -> Result<GameLog> {
    engine.reset();
    let mut snapshots = vec![*engine.state()];

    while !engine.has_finished() {
        engine.play_one_turn()?;
        snapshots.push(*engine.state());
    }

    let result = if engine.has_won() { GameResult::Won } else { GameResult::Lost };
    log::debug!("{:<32}{:?} after {} turns", "recorded game", result, engine.state().turns);

    Ok(GameLog { snapshots, result })
}

/// Replay games until one is a showcase, giving up after `max_attempts`.
pub fn find_showcase<P: HarvestPolicy, D: DiceSource>(
    engine: &mut GameEngine<P, D>,
    max_attempts: u64,
) -> Result<Option<GameLog>> {
    for attempt in 1..=max_attempts {
        let game = play_recorded(engine)?;
        if game.is_showcase() {
            log::info!("{:<32}{} attempts", "found showcase game", attempt);
            return Ok(Some(game));
        }
    }
    log::info!("{:<32}{} attempts", "no showcase game", max_attempts);
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{BasketHarvest, GameRng, OrchardConfig, ScriptedDice};
    use crate::harvest::{Baseline, GreedyMax};

    fn tiny() -> OrchardConfig {
        OrchardConfig::new()
            .with_fruits_per_tree(1)
            .with_crow_steps(2)
            .with_basket_harvest(BasketHarvest::Single)
    }

    #[test]
    fn test_play_recorded_snapshots_every_turn() {
        let dice = ScriptedDice::from_values(&[0, 5, 1, 2, 3]).unwrap();
        let mut engine = GameEngine::new(tiny(), Baseline, dice);

        let log = play_recorded(&mut engine).unwrap();

        assert_eq!(log.result, GameResult::Won);
        assert_eq!(log.snapshots.len(), 6);
        assert_eq!(log.snapshots[0], OrchardState::new(&tiny()));
        assert_eq!(log.snapshots[1].trees, [0, 1, 1, 1]);
        assert_eq!(log.snapshots[2].crow, 1);
        assert_eq!(log.turns(), 5);
        assert!(!log.is_showcase());
    }

    #[test]
    fn test_play_recorded_loss() {
        let dice = ScriptedDice::from_values(&[5, 0, 5]).unwrap();
        let mut engine = GameEngine::new(tiny(), Baseline, dice);

        let log = play_recorded(&mut engine).unwrap();

        assert_eq!(log.result, GameResult::Lost);
        assert_eq!(log.final_state().map(|s| s.trees), Some([0, 1, 1, 1]));
    }

    #[test]
    fn test_showcase_criterion() {
        // 8 double baskets leave [2, 2, 2, 2], then 8 tree rolls finish it.
        let config = OrchardConfig::new()
            .with_fruits_per_tree(6)
            .with_crow_steps(1)
            .with_basket_harvest(BasketHarvest::DoubleIfAvailable);
        let mut rolls = vec![4; 8];
        rolls.extend([0, 0, 1, 1, 2, 2, 3, 3]);
        let dice = ScriptedDice::from_values(&rolls).unwrap();
        let mut engine = GameEngine::new(config, GreedyMax, dice);

        let log = play_recorded(&mut engine).unwrap();

        assert_eq!(log.result, GameResult::Won);
        assert_eq!(log.turns(), SHOWCASE_TURNS);
        assert!(log.is_showcase());
    }

    #[test]
    fn test_find_showcase_gives_up() {
        // At most two fruits per turn: 40 fruits cannot go in 16 turns.
        let config = OrchardConfig::new().with_crow_steps(1);
        let mut engine = GameEngine::new(config, Baseline, GameRng::new(3));

        assert_eq!(find_showcase(&mut engine, 25).unwrap(), None);
    }
}
