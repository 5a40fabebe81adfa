//! Basket harvesting policies.
//!
//! A policy answers one question: given the fruit counters, which tree does
//! the basket take from? Returning `None` means there is nothing to take.

use serde::{Deserialize, Serialize};

use crate::core::Trees;

// =============================================================================
// Harvest Policy
// =============================================================================

/// Tree selection rule for basket rolls.
pub trait HarvestPolicy {
    /// Human-readable name used in reports.
    fn name(&self) -> &'static str;

    /// Index of the tree to harvest, or `None` if every tree is empty.
    ///
    /// Implementations must only return trees with fruit on them.
    fn select_harvest_target(&self, trees: &Trees) -> Option<usize>;
}

impl<P: HarvestPolicy + ?Sized> HarvestPolicy for &P {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn select_harvest_target(&self, trees: &Trees) -> Option<usize> {
        (**self).select_harvest_target(trees)
    }
}

impl<P: HarvestPolicy + ?Sized> HarvestPolicy for Box<P> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn select_harvest_target(&self, trees: &Trees) -> Option<usize> {
        (**self).select_harvest_target(trees)
    }
}

// =============================================================================
// Implementations
// =============================================================================

/// Takes from the first tree that still has fruit.
#[derive(Clone, Copy, Debug, Default)]
pub struct Baseline;

impl HarvestPolicy for Baseline {
    fn name(&self) -> &'static str {
        "Baseline"
    }

    fn select_harvest_target(&self, trees: &Trees) -> Option<usize> {
        trees.iter().position(|&count| count > 0)
    }
}

/// Takes from the fullest tree. Ties go to the lowest index.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyMax;

impl HarvestPolicy for GreedyMax {
    fn name(&self) -> &'static str {
        "Greedy-max"
    }

    fn select_harvest_target(&self, trees: &Trees) -> Option<usize> {
        let mut best: Option<(usize, u32)> = None;
        for (i, &count) in trees.iter().enumerate() {
            if count > best.map_or(0, |(_, max)| max) {
                best = Some((i, count));
            }
        }
        best.map(|(i, _)| i)
    }
}

/// Takes from the emptiest tree that still has fruit. Ties go to the lowest index.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyMin;

impl HarvestPolicy for GreedyMin {
    fn name(&self) -> &'static str {
        "Greedy-min"
    }

    fn select_harvest_target(&self, trees: &Trees) -> Option<usize> {
        trees
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count > 0)
            .min_by_key(|&(i, &count)| (count, i))
            .map(|(i, _)| i)
    }
}

// =============================================================================
// Policy Selection
// =============================================================================

/// The built-in policies, selectable by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PolicyKind {
    Baseline,
    GreedyMax,
    GreedyMin,
}

impl PolicyKind {
    /// Every built-in policy, in report order.
    pub const ALL: [PolicyKind; 3] = [PolicyKind::Baseline, PolicyKind::GreedyMax, PolicyKind::GreedyMin];
}

impl HarvestPolicy for PolicyKind {
    fn name(&self) -> &'static str {
        match self {
            PolicyKind::Baseline => Baseline.name(),
            PolicyKind::GreedyMax => GreedyMax.name(),
            PolicyKind::GreedyMin => GreedyMin.name(),
        }
    }

    fn select_harvest_target(&self, trees: &Trees) -> Option<usize> {
        match self {
            PolicyKind::Baseline => Baseline.select_harvest_target(trees),
            PolicyKind::GreedyMax => GreedyMax.select_harvest_target(trees),
            PolicyKind::GreedyMin => GreedyMin.select_harvest_target(trees),
        }
    }
}

impl std::fmt::Display for PolicyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for PolicyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PolicyKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown policy '{}', expected baseline, greedy-max or greedy-min", s))
    }
}
