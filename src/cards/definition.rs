//! Card, creature, and class definitions.
//!
//! These are the records the catalog loads from its definition sources.
//! Templates are never mutated after load: anything that lands in a hand,
//! an equipment slot, or the arena is an owned clone.

use serde::{Deserialize, Serialize};

/// Rarity tier. Drives both the visual tier and reward-roll weighting.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rarity {
    #[default]
    #[serde(alias = "common")]
    Common,
    #[serde(alias = "rare")]
    Rare,
    #[serde(alias = "epic")]
    Epic,
    #[serde(alias = "legendary")]
    Legendary,
}

impl Rarity {
    /// All tiers, lowest first.
    pub const ALL: [Rarity; 4] = [Rarity::Common, Rarity::Rare, Rarity::Epic, Rarity::Legendary];

    /// Lowercase name, as used in definition source names.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Rarity::Common => "common",
            Rarity::Rare => "rare",
            Rarity::Epic => "epic",
            Rarity::Legendary => "legendary",
        }
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Rarity::Common => "Common",
            Rarity::Rare => "Rare",
            Rarity::Epic => "Epic",
            Rarity::Legendary => "Legendary",
        };
        f.write_str(name)
    }
}

/// What a card is for.
///
/// `Any` cards only fit the class-specific `any` slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardType {
    Weapon,
    Armor,
    Any,
    Consumable,
}

impl CardType {
    /// True for cards that go into an equipment slot.
    #[must_use]
    pub const fn is_equipment(self) -> bool {
        !matches!(self, CardType::Consumable)
    }
}

/// A loot card.
///
/// ## Example
///
/// ```
/// use dungeon_deck::cards::{Card, CardType, Rarity};
///
/// let sword = Card::new("Short Sword", CardType::Weapon, Rarity::Common).with_attack(2);
/// assert_eq!(sword.attack_bonus(), 2);
/// assert_eq!(sword.armor_bonus(), 0);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub name: String,

    #[serde(rename = "type")]
    pub card_type: CardType,

    #[serde(default)]
    pub rarity: Rarity,

    #[serde(default)]
    pub attack: Option<i32>,

    #[serde(default)]
    pub armor: Option<i32>,

    #[serde(default)]
    pub heal: Option<i32>,

    #[serde(default)]
    pub damage: Option<i32>,

    #[serde(default)]
    pub buff: Option<i32>,

    #[serde(default)]
    pub description: String,
}

impl Card {
    /// Create a card with no stats.
    #[must_use]
    pub fn new(name: impl Into<String>, card_type: CardType, rarity: Rarity) -> Self {
        Self {
            name: name.into(),
            card_type,
            rarity,
            attack: None,
            armor: None,
            heal: None,
            damage: None,
            buff: None,
            description: String::new(),
        }
    }

    #[must_use]
    pub fn with_attack(mut self, attack: i32) -> Self {
        self.attack = Some(attack);
        self
    }

    #[must_use]
    pub fn with_armor(mut self, armor: i32) -> Self {
        self.armor = Some(armor);
        self
    }

    #[must_use]
    pub fn with_heal(mut self, heal: i32) -> Self {
        self.heal = Some(heal);
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attack contributed while equipped (0 when absent).
    #[must_use]
    pub fn attack_bonus(&self) -> i32 {
        self.attack.unwrap_or(0)
    }

    /// Armor contributed while equipped (0 when absent).
    #[must_use]
    pub fn armor_bonus(&self) -> i32 {
        self.armor.unwrap_or(0)
    }
}

/// An enemy definition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatureTemplate {
    pub name: String,
    pub hp: i32,
    pub attack: i32,
    #[serde(default)]
    pub rarity: Rarity,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub image: Option<String>,
}

impl CreatureTemplate {
    #[must_use]
    pub fn new(name: impl Into<String>, hp: i32, attack: i32, rarity: Rarity) -> Self {
        Self {
            name: name.into(),
            hp,
            attack,
            rarity,
            description: String::new(),
            image: None,
        }
    }
}

/// Slot counts granted by a class (each 0 or 1).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotCounts {
    #[serde(default)]
    pub weapon: u8,
    #[serde(default)]
    pub armor: u8,
    #[serde(default)]
    pub any: u8,
}

/// A playable class.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassDefinition {
    pub name: String,
    pub hp: i32,
    pub attack: i32,
    #[serde(default)]
    pub slots: SlotCounts,
    #[serde(default)]
    pub passive: String,
    #[serde(default)]
    pub ability: String,
}

impl ClassDefinition {
    #[must_use]
    pub fn new(name: impl Into<String>, hp: i32, attack: i32, slots: SlotCounts) -> Self {
        Self {
            name: name.into(),
            hp,
            attack,
            slots,
            passive: String::new(),
            ability: String::new(),
        }
    }

    /// Lookup key: the lowercased, trimmed class name.
    #[must_use]
    pub fn class_id(&self) -> String {
        class_id_of(&self.name)
    }
}

/// Normalise a class name into the key used by the roster and hook table.
#[must_use]
pub fn class_id_of(name: &str) -> String {
    name.trim().to_lowercase()
}
