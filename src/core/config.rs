//! Session configuration.
//!
//! `DungeonConfig` gathers the tunables the rules read: hand cap, reward
//! brackets, save key and encoding, per-class hooks. Defaults reproduce the
//! stock game; every field can be overridden with a `with_*` builder or read
//! from JSON.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::combat::ClassHooks;
use crate::persistence::SaveFormat;
use crate::reward::RewardBrackets;

/// Hand length above which attacking is locked until the player discards.
pub const HAND_SIZE_SOFT_CAP: usize = 2;

/// Storage key the whole save blob lives under.
pub const DEFAULT_SAVE_KEY: &str = "dungeonSave";

/// Classes shipped with the stock catalog.
pub const DEFAULT_CLASS_IDS: [&str; 4] = ["warrior", "archer", "mage", "classless"];

/// Configuration for one game session.
///
/// ## Example
///
/// ```
/// use dungeon_deck::core::DungeonConfig;
///
/// let config = DungeonConfig::default().with_seed(7).with_hand_soft_cap(3);
/// assert_eq!(config.hand_soft_cap, 3);
/// assert_eq!(config.save_key, "dungeonSave");
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DungeonConfig {
    /// Hand length above which the discard gate locks.
    pub hand_soft_cap: usize,

    /// Roll thresholds for rewards and spawns.
    pub brackets: RewardBrackets,

    /// Storage key for the save blob.
    pub save_key: String,

    /// Encoding of the save blob.
    pub save_format: SaveFormat,

    /// Reject a second voluntary play or discard within one round.
    pub single_action_per_round: bool,

    /// Pause handed to the presentation after each strike (milliseconds).
    pub hp_animation_ms: u64,

    /// Class definitions the catalog loads.
    pub class_ids: Vec<String>,

    /// Per-class behaviour at lifecycle points.
    pub class_hooks: ClassHooks,

    /// Fixed RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for DungeonConfig {
    fn default() -> Self {
        Self {
            hand_soft_cap: HAND_SIZE_SOFT_CAP,
            brackets: RewardBrackets::default(),
            save_key: DEFAULT_SAVE_KEY.to_string(),
            save_format: SaveFormat::default(),
            single_action_per_round: true,
            hp_animation_ms: 500,
            class_ids: DEFAULT_CLASS_IDS.iter().map(|id| (*id).to_string()).collect(),
            class_hooks: ClassHooks::default(),
            seed: None,
        }
    }
}

impl DungeonConfig {
    /// Parse a config from JSON; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn hp_animation(&self) -> Duration {
        Duration::from_millis(self.hp_animation_ms)
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_hand_soft_cap(mut self, cap: usize) -> Self {
        self.hand_soft_cap = cap;
        self
    }

    #[must_use]
    pub fn with_brackets(mut self, brackets: RewardBrackets) -> Self {
        self.brackets = brackets;
        self
    }

    #[must_use]
    pub fn with_save_key(mut self, key: impl Into<String>) -> Self {
        self.save_key = key.into();
        self
    }

    #[must_use]
    pub fn with_save_format(mut self, format: SaveFormat) -> Self {
        self.save_format = format;
        self
    }

    #[must_use]
    pub fn with_single_action_per_round(mut self, enforce: bool) -> Self {
        self.single_action_per_round = enforce;
        self
    }

    #[must_use]
    pub fn with_class_hooks(mut self, hooks: ClassHooks) -> Self {
        self.class_hooks = hooks;
        self
    }
}
