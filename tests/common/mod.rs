//! Shared fixtures for the integration tests.
//!
//! Creature pools hold the same creature in every tier so fights play out
//! the same whatever the spawn roll lands on.

#![allow(dead_code)]

use dungeon_deck::cards::{Card, CardType, Catalog, ClassDefinition, CreatureTemplate, Rarity, RarityPools, SlotCounts};
use dungeon_deck::persistence::MemoryStore;
use dungeon_deck::presentation::ScriptedPresentation;
use dungeon_deck::{Dungeon, DungeonConfig};

pub type TestDungeon = Dungeon<ScriptedPresentation, MemoryStore>;

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn classes() -> Vec<ClassDefinition> {
    let armed = SlotCounts { weapon: 1, armor: 1, any: 0 };
    vec![
        ClassDefinition::new("Warrior", 20, 5, armed),
        ClassDefinition::new("Archer", 15, 4, armed),
        ClassDefinition::new("Mage", 12, 6, armed),
        ClassDefinition::new("Classless", 18, 4, SlotCounts { weapon: 0, armor: 0, any: 1 }),
    ]
}

/// One weapon or armor card per tier.
pub fn equipment() -> RarityPools<Card> {
    RarityPools::new()
        .with(Rarity::Common, Card::new("Club", CardType::Weapon, Rarity::Common).with_attack(1))
        .with(Rarity::Rare, Card::new("Chain Mail", CardType::Armor, Rarity::Rare).with_armor(2))
        .with(Rarity::Epic, Card::new("War Axe", CardType::Weapon, Rarity::Epic).with_attack(4))
        .with(Rarity::Legendary, Card::new("Aegis", CardType::Armor, Rarity::Legendary).with_armor(6))
}

pub fn consumables() -> Vec<Card> {
    vec![Card::new("Potion", CardType::Consumable, Rarity::Common).with_heal(5)]
}

/// `hp`/`attack` creature in every tier.
pub fn creatures(name: &str, hp: i32, attack: i32) -> RarityPools<CreatureTemplate> {
    Rarity::ALL
        .iter()
        .fold(RarityPools::new(), |pools, &rarity| {
            pools.with(rarity, CreatureTemplate::new(name, hp, attack, rarity))
        })
}

pub fn catalog_facing(name: &str, hp: i32, attack: i32) -> Catalog {
    Catalog::from_parts(equipment(), consumables(), creatures(name, hp, attack), classes())
}

pub fn dungeon_with(catalog: Catalog, config: DungeonConfig) -> TestDungeon {
    init_logging();
    Dungeon::new(config, catalog, ScriptedPresentation::new(), MemoryStore::new())
}

/// Seeded dungeon where every room holds a `hp`/`attack` creature.
pub fn dungeon_facing(name: &str, hp: i32, attack: i32) -> TestDungeon {
    dungeon_with(catalog_facing(name, hp, attack), DungeonConfig::default().with_seed(42))
}

pub fn player_hp(game: &TestDungeon) -> i32 {
    game.player().map_or(-1, |p| p.current_hp)
}

pub fn enemy_hp(game: &TestDungeon) -> i32 {
    game.enemy().map_or(-1, |e| e.current_hp)
}

/// A card every class with weapon/armor slots can hold.
pub fn spare_weapon(name: &str) -> Card {
    Card::new(name, CardType::Weapon, Rarity::Common).with_attack(1)
}
