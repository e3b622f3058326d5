//! Rarity-partitioned collections.

use serde::{Deserialize, Serialize};

use super::definition::Rarity;

/// One collection per rarity tier.
///
/// Used for both the equipment pools and the creature pools; the reward
/// roller only ever sees a `RarityPools<T>`, never which kind it holds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RarityPools<T> {
    pub common: Vec<T>,
    pub rare: Vec<T>,
    pub epic: Vec<T>,
    pub legendary: Vec<T>,
}

impl<T> Default for RarityPools<T> {
    fn default() -> Self {
        Self {
            common: Vec::new(),
            rare: Vec::new(),
            epic: Vec::new(),
            legendary: Vec::new(),
        }
    }
}

impl<T> RarityPools<T> {
    /// Create empty pools.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the pool for a tier.
    #[must_use]
    pub fn pool(&self, rarity: Rarity) -> &[T] {
        match rarity {
            Rarity::Common => &self.common,
            Rarity::Rare => &self.rare,
            Rarity::Epic => &self.epic,
            Rarity::Legendary => &self.legendary,
        }
    }

    /// Get a mutable pool for a tier.
    pub fn pool_mut(&mut self, rarity: Rarity) -> &mut Vec<T> {
        match rarity {
            Rarity::Common => &mut self.common,
            Rarity::Rare => &mut self.rare,
            Rarity::Epic => &mut self.epic,
            Rarity::Legendary => &mut self.legendary,
        }
    }

    /// Add an entry to a tier (builder pattern).
    #[must_use]
    pub fn with(mut self, rarity: Rarity, entry: T) -> Self {
        self.pool_mut(rarity).push(entry);
        self
    }

    /// Total entries across all tiers.
    #[must_use]
    pub fn len(&self) -> usize {
        Rarity::ALL.iter().map(|&r| self.pool(r).len()).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate over every entry, lowest tier first.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        Rarity::ALL.into_iter().flat_map(move |r| self.pool(r).iter())
    }
}
