//! Weighted rarity roller shared by loot rewards and enemy spawns.
//!
//! A roll in `[0, 100)` picks a bracket of tiers; the tiers' pools are
//! treated as one combined collection and an entry is drawn uniformly from
//! it. The drawn entry is cloned, so callers own an independent copy and
//! the catalog template is never reachable through it.

use log::debug;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::cards::{Card, Catalog, RarityPools, Rarity};
use crate::core::GameRng;
use crate::entity::Enemy;

/// Roll thresholds separating the four brackets.
///
/// | roll | tiers drawn from |
/// |---|---|
/// | `< common_below` | Common |
/// | `< rare_below` | Rare, Common |
/// | `< epic_below` | Epic, Rare, Common |
/// | otherwise | Legendary, Epic, Rare |
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RewardBrackets {
    pub common_below: f64,
    pub rare_below: f64,
    pub epic_below: f64,
}

impl Default for RewardBrackets {
    fn default() -> Self {
        Self {
            common_below: 50.0,
            rare_below: 80.0,
            epic_below: 95.0,
        }
    }
}

impl RewardBrackets {
    /// Tiers pooled together for `roll`.
    #[must_use]
    pub fn tiers(&self, roll: f64) -> &'static [Rarity] {
        if roll < self.common_below {
            &[Rarity::Common]
        } else if roll < self.rare_below {
            &[Rarity::Rare, Rarity::Common]
        } else if roll < self.epic_below {
            &[Rarity::Epic, Rarity::Rare, Rarity::Common]
        } else {
            &[Rarity::Legendary, Rarity::Epic, Rarity::Rare]
        }
    }
}

/// Draws rewards and enemies from rarity pools.
#[derive(Clone, Debug)]
pub struct RewardRoller {
    rng: GameRng,
    brackets: RewardBrackets,
}

impl RewardRoller {
    #[must_use]
    pub fn new(rng: GameRng, brackets: RewardBrackets) -> Self {
        Self { rng, brackets }
    }

    #[must_use]
    pub fn brackets(&self) -> &RewardBrackets {
        &self.brackets
    }

    /// Roll a bracket and draw from it. `None` when the bracket is empty.
    pub fn roll_from<T: Clone>(&mut self, pools: &RarityPools<T>) -> Option<T> {
        let roll = self.rng.roll_percent();
        self.pick_with_roll(roll, pools)
    }

    /// Draw from the bracket selected by a caller-supplied `roll`.
    pub fn pick_with_roll<T: Clone>(&mut self, roll: f64, pools: &RarityPools<T>) -> Option<T> {
        let selected: SmallVec<[&[T]; 3]> = self
            .brackets
            .tiers(roll)
            .iter()
            .map(|&rarity| pools.pool(rarity))
            .collect();

        let total: usize = selected.iter().map(|pool| pool.len()).sum();
        if total == 0 {
            debug!("roll {roll:.2}: bracket empty, nothing drawn");
            return None;
        }

        let mut index = self.rng.gen_range_usize(0..total);
        for pool in selected {
            if index < pool.len() {
                return Some(pool[index].clone());
            }
            index -= pool.len();
        }
        None
    }

    /// Draw a loot card from the equipment pools.
    pub fn roll_reward(&mut self, catalog: &Catalog) -> Option<Card> {
        self.roll_from(catalog.equipment())
    }

    /// Draw a fresh enemy at full HP from the creature pools.
    pub fn roll_enemy(&mut self, catalog: &Catalog) -> Option<Enemy> {
        self.roll_from(catalog.creatures()).map(Enemy::spawn)
    }
}
