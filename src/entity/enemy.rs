//! The enemy currently occupying the room.

use serde::{Deserialize, Serialize};

use crate::cards::{CreatureTemplate, Rarity};

/// A spawned creature: an owned copy of its template plus live HP.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enemy {
    pub template: CreatureTemplate,
    pub current_hp: i32,
}

impl Enemy {
    /// Spawn at full HP.
    #[must_use]
    pub fn spawn(template: CreatureTemplate) -> Self {
        let current_hp = template.hp.max(0);
        Self { template, current_hp }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.template.name
    }

    #[must_use]
    pub fn attack(&self) -> i32 {
        self.template.attack
    }

    #[must_use]
    pub fn max_hp(&self) -> i32 {
        self.template.hp.max(0)
    }

    #[must_use]
    pub fn rarity(&self) -> Rarity {
        self.template.rarity
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    /// Pull `current_hp` back into `[0, max_hp]`.
    pub fn clamp_hp(&mut self) {
        self.current_hp = self.current_hp.clamp(0, self.max_hp());
    }

    /// Lose up to `amount` HP (negative amounts do nothing). Returns HP lost.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let before = self.current_hp;
        self.current_hp = (self.current_hp - amount.max(0)).max(0);
        before - self.current_hp
    }
}
