//! Card catalog: every definition the game draws from.
//!
//! Loaded once at startup from a `CatalogSource` and never mutated after.
//! Loading is all-or-nothing: the first missing or malformed source aborts
//! with a `CatalogError` and no partial catalog is returned.

use log::info;
use rustc_hash::FxHashMap;
use serde::de::DeserializeOwned;

use super::definition::{class_id_of, Card, ClassDefinition, CreatureTemplate, Rarity};
use super::pools::RarityPools;
use super::source::CatalogSource;
use crate::core::CatalogError;

/// Source name of the consumable pool.
pub const CONSUMABLES_SOURCE: &str = "decks/consumables";

/// Source name of an equipment pool.
#[must_use]
pub fn equipment_source(rarity: Rarity) -> String {
    format!("decks/equips_{}", rarity.as_str())
}

/// Source name of a creature pool.
#[must_use]
pub fn creature_source(rarity: Rarity) -> String {
    format!("decks/creatures_{}", rarity.as_str())
}

/// Source name of a class definition.
#[must_use]
pub fn class_source(class_id: &str) -> String {
    format!("characters/{class_id}")
}

/// Immutable collection of equipment, consumables, creatures, and classes.
///
/// ## Example
///
/// ```
/// use dungeon_deck::cards::{Card, CardType, Catalog, CreatureTemplate, Rarity, RarityPools};
///
/// let equipment = RarityPools::new()
///     .with(Rarity::Common, Card::new("Club", CardType::Weapon, Rarity::Common).with_attack(1));
/// let creatures = RarityPools::new()
///     .with(Rarity::Common, CreatureTemplate::new("Rat", 4, 1, Rarity::Common));
///
/// let catalog = Catalog::from_parts(equipment, Vec::new(), creatures, Vec::new());
/// assert_eq!(catalog.equipment().len(), 1);
/// assert!(catalog.class("warrior").is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    equipment: RarityPools<Card>,
    consumables: Vec<Card>,
    creatures: RarityPools<CreatureTemplate>,
    classes: FxHashMap<String, ClassDefinition>,
    class_order: Vec<String>,
}

impl Catalog {
    /// Load every pool and the listed classes from `source`.
    pub fn load<S, I>(source: &S, class_ids: I) -> Result<Self, CatalogError>
    where
        S: CatalogSource + ?Sized,
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut equipment = RarityPools::new();
        let mut creatures = RarityPools::new();
        for rarity in Rarity::ALL {
            *equipment.pool_mut(rarity) = parse(source, &equipment_source(rarity))?;
            *creatures.pool_mut(rarity) = parse(source, &creature_source(rarity))?;
        }
        let consumables: Vec<Card> = parse(source, CONSUMABLES_SOURCE)?;

        let mut classes = Vec::new();
        for id in class_ids {
            let class: ClassDefinition = parse(source, &class_source(id.as_ref()))?;
            classes.push(class);
        }

        let catalog = Self::from_parts(equipment, consumables, creatures, classes);
        info!(
            "catalog loaded: {} equipment, {} consumables, {} creatures, {} classes",
            catalog.equipment.len(),
            catalog.consumables.len(),
            catalog.creatures.len(),
            catalog.class_order.len()
        );
        Ok(catalog)
    }

    /// Build a catalog from already-parsed definitions.
    #[must_use]
    pub fn from_parts(
        equipment: RarityPools<Card>,
        consumables: Vec<Card>,
        creatures: RarityPools<CreatureTemplate>,
        classes: Vec<ClassDefinition>,
    ) -> Self {
        let mut by_id = FxHashMap::default();
        let mut class_order = Vec::with_capacity(classes.len());
        for class in classes {
            let id = class.class_id();
            if by_id.insert(id.clone(), class).is_none() {
                class_order.push(id);
            }
        }

        Self {
            equipment,
            consumables,
            creatures,
            classes: by_id,
            class_order,
        }
    }

    /// Equipment pools (the reward pools).
    #[must_use]
    pub fn equipment(&self) -> &RarityPools<Card> {
        &self.equipment
    }

    #[must_use]
    pub fn consumables(&self) -> &[Card] {
        &self.consumables
    }

    /// Creature pools (the spawn pools).
    #[must_use]
    pub fn creatures(&self) -> &RarityPools<CreatureTemplate> {
        &self.creatures
    }

    /// Look up a class by name or id, case-insensitively.
    pub fn class(&self, name: &str) -> Result<&ClassDefinition, CatalogError> {
        let id = class_id_of(name);
        self.classes.get(&id).ok_or(CatalogError::UnknownClass(id))
    }

    /// Classes in load order.
    pub fn classes(&self) -> impl Iterator<Item = &ClassDefinition> {
        self.class_order.iter().filter_map(move |id| self.classes.get(id))
    }

    /// Every card that can sit in a hand: equipment then consumables.
    pub fn playable_cards(&self) -> impl Iterator<Item = &Card> {
        self.equipment.iter().chain(self.consumables.iter())
    }
}

fn parse<S, T>(source: &S, name: &str) -> Result<T, CatalogError>
where
    S: CatalogSource + ?Sized,
    T: DeserializeOwned,
{
    let text = source.read(name)?;
    serde_json::from_str(&text).map_err(|source| CatalogError::Malformed {
        name: name.to_string(),
        source,
    })
}
