//! The player character: base stats, equipment, and derived stats.
//!
//! ## Derived stats
//!
//! - `total_attack = attack + Σ equipped.attack`
//! - `total_defense = max(0, Σ equipped.armor)`
//! - `max_hp = hp` (equipment does not raise max HP)
//!
//! `current_hp` stays within `[0, max_hp]`: every mutation clamps.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardType, ClassDefinition};
use crate::core::EquipError;

/// Equipment slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Slot {
    Weapon,
    Armor,
    /// Class-specific slot accepting `any` cards.
    Any,
}

impl Slot {
    pub const ALL: [Slot; 3] = [Slot::Weapon, Slot::Armor, Slot::Any];
}

/// Which slots the player's class grants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotSet {
    pub weapon: bool,
    pub armor: bool,
    pub any: bool,
}

impl SlotSet {
    #[must_use]
    pub fn has(&self, slot: Slot) -> bool {
        match slot {
            Slot::Weapon => self.weapon,
            Slot::Armor => self.armor,
            Slot::Any => self.any,
        }
    }
}

/// What is currently equipped.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub weapon: Option<Card>,
    pub armor: Option<Card>,
    pub any: Option<Card>,
}

impl Equipment {
    #[must_use]
    pub fn get(&self, slot: Slot) -> Option<&Card> {
        match slot {
            Slot::Weapon => self.weapon.as_ref(),
            Slot::Armor => self.armor.as_ref(),
            Slot::Any => self.any.as_ref(),
        }
    }

    fn slot_mut(&mut self, slot: Slot) -> &mut Option<Card> {
        match slot {
            Slot::Weapon => &mut self.weapon,
            Slot::Armor => &mut self.armor,
            Slot::Any => &mut self.any,
        }
    }

    /// Every equipped card, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        Slot::ALL.into_iter().filter_map(move |slot| self.get(slot))
    }
}

/// The player character.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Class name (e.g. "Archer").
    pub name: String,
    /// Base max HP.
    pub hp: i32,
    pub current_hp: i32,
    /// Base attack.
    pub attack: i32,
    pub passive: String,
    pub ability: String,
    pub slots: SlotSet,
    pub equipment: Equipment,
}

impl Player {
    /// A fresh character of `class` at full HP with nothing equipped.
    #[must_use]
    pub fn from_class(class: &ClassDefinition) -> Self {
        Self {
            name: class.name.clone(),
            hp: class.hp,
            current_hp: class.hp.max(0),
            attack: class.attack,
            passive: class.passive.clone(),
            ability: class.ability.clone(),
            slots: SlotSet {
                weapon: class.slots.weapon > 0,
                armor: class.slots.armor > 0,
                any: class.slots.any > 0,
            },
            equipment: Equipment::default(),
        }
    }

    #[must_use]
    pub fn total_attack(&self) -> i32 {
        self.equipment.iter().map(Card::attack_bonus).fold(self.attack, i32::saturating_add)
    }

    #[must_use]
    pub fn total_defense(&self) -> i32 {
        self.equipment.iter().map(Card::armor_bonus).fold(0, i32::saturating_add).max(0)
    }

    #[must_use]
    pub fn max_hp(&self) -> i32 {
        self.hp.max(0)
    }

    #[must_use]
    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    /// Pull `current_hp` back into `[0, max_hp]`.
    pub fn clamp_hp(&mut self) {
        self.current_hp = self.current_hp.clamp(0, self.max_hp());
    }

    /// The slot a card of `card_type` would go into, if this player has one.
    ///
    /// Weapons and armor prefer their own slot and fall back to `any`.
    #[must_use]
    pub fn slot_for(&self, card_type: CardType) -> Option<Slot> {
        let slot = match card_type {
            CardType::Weapon => Slot::Weapon,
            CardType::Armor => Slot::Armor,
            CardType::Any => Slot::Any,
            CardType::Consumable => return None,
        };
        if self.slots.has(slot) {
            Some(slot)
        } else {
            self.slots.has(Slot::Any).then_some(Slot::Any)
        }
    }

    /// Put `card` into its slot, returning whatever was there before.
    ///
    /// The displaced card is handed back to the caller, not to the hand.
    pub fn equip(&mut self, card: Card) -> Result<Option<Card>, EquipError> {
        let slot = self.slot_for(card.card_type).ok_or_else(|| EquipError::InvalidSlot {
            card: card.name.clone(),
            card_type: card.card_type,
        })?;
        let previous = self.equipment.slot_mut(slot).replace(card);
        self.clamp_hp();
        Ok(previous)
    }

    /// Apply a consumable's heal, capped at max HP. Returns HP restored.
    ///
    /// `buff` and `damage` fields are ignored on this path.
    pub fn apply_consumable(&mut self, card: &Card) -> i32 {
        let before = self.current_hp;
        if let Some(heal) = card.heal {
            self.current_hp = self.current_hp.saturating_add(heal.max(0));
        }
        self.clamp_hp();
        self.current_hp - before
    }

    /// Lose up to `amount` HP (negative amounts do nothing). Returns HP lost.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let before = self.current_hp;
        self.current_hp = (self.current_hp - amount.max(0)).max(0);
        before - self.current_hp
    }
}
