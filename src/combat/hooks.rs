//! Per-class hooks.
//!
//! Class abilities that bend the combat rules are data, keyed by class id,
//! and looked up at the lifecycle point they apply to. The stock table gives
//! the Archer first strike and 2 damage per voluntary discard.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::class_id_of;

/// Behaviour a class adds at combat lifecycle points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassHook {
    /// Pre-attack: this class always strikes before the enemy.
    pub strikes_first: bool,
    /// On-discard: flat damage dealt to a living enemy when the class
    /// discards as its round action.
    pub discard_damage: i32,
}

/// Hook table keyed by class id.
///
/// ```
/// use dungeon_deck::combat::ClassHooks;
///
/// let hooks = ClassHooks::default();
/// assert!(hooks.get("Archer").strikes_first);
/// assert_eq!(hooks.get("Warrior").discard_damage, 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClassHooks {
    hooks: FxHashMap<String, ClassHook>,
}

impl Default for ClassHooks {
    fn default() -> Self {
        Self::empty().with(
            "archer",
            ClassHook {
                strikes_first: true,
                discard_damage: 2,
            },
        )
    }
}

impl ClassHooks {
    /// A table with no hooks at all.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            hooks: FxHashMap::default(),
        }
    }

    /// Register a hook (builder pattern).
    #[must_use]
    pub fn with(mut self, class: &str, hook: ClassHook) -> Self {
        self.insert(class, hook);
        self
    }

    pub fn insert(&mut self, class: &str, hook: ClassHook) {
        self.hooks.insert(class_id_of(class), hook);
    }

    /// The hook for `class`; classes without an entry get the no-op hook.
    #[must_use]
    pub fn get(&self, class: &str) -> ClassHook {
        self.hooks.get(&class_id_of(class)).copied().unwrap_or_default()
    }
}
