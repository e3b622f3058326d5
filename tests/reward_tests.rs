//! Reward roller integration tests.

mod common;

use common::{catalog_facing, creatures, equipment};
use dungeon_deck::cards::{Card, CardType, Rarity, RarityPools};
use dungeon_deck::core::GameRng;
use dungeon_deck::reward::{RewardBrackets, RewardRoller};

fn roller(seed: u64) -> RewardRoller {
    RewardRoller::new(GameRng::new(seed), RewardBrackets::default())
}

/// Test that a roll of 40 only ever yields common cards.
#[test]
fn test_roll_40_is_common_only() {
    let pools = equipment()
        .with(Rarity::Common, Card::new("Dagger", CardType::Weapon, Rarity::Common).with_attack(2))
        .with(Rarity::Rare, Card::new("Bow", CardType::Weapon, Rarity::Rare).with_attack(3));
    let mut roller = roller(7);

    for _ in 0..1000 {
        let card = roller.pick_with_roll(40.0, &pools).unwrap();
        assert_eq!(card.rarity, Rarity::Common);
    }
}

/// Test the bracket boundaries.
#[test]
fn test_bracket_boundaries() {
    let brackets = RewardBrackets::default();

    assert_eq!(brackets.tiers(0.0), &[Rarity::Common]);
    assert_eq!(brackets.tiers(49.99), &[Rarity::Common]);
    assert_eq!(brackets.tiers(50.0), &[Rarity::Rare, Rarity::Common]);
    assert_eq!(brackets.tiers(80.0), &[Rarity::Epic, Rarity::Rare, Rarity::Common]);
    assert_eq!(brackets.tiers(95.0), &[Rarity::Legendary, Rarity::Epic, Rarity::Rare]);
    assert_eq!(brackets.tiers(99.99), &[Rarity::Legendary, Rarity::Epic, Rarity::Rare]);
}

/// Test that the top bracket never yields a common card.
#[test]
fn test_top_bracket_skips_common() {
    let mut roller = roller(3);
    for _ in 0..500 {
        let card = roller.pick_with_roll(97.5, &equipment()).unwrap();
        assert_ne!(card.rarity, Rarity::Common);
    }
}

/// Test that the pooled draw reaches every tier in the bracket.
#[test]
fn test_pooled_draw_covers_bracket() {
    let mut roller = roller(11);
    let mut seen = [false; 4];
    for _ in 0..500 {
        let card = roller.pick_with_roll(90.0, &equipment()).unwrap();
        seen[card.rarity as usize] = true;
    }
    assert_eq!(seen, [true, true, true, false]);
}

/// Test that a drawn card is independent of the catalog template.
#[test]
fn test_drawn_card_is_a_deep_copy() {
    let catalog = catalog_facing("Rat", 10, 3);
    let mut roller = roller(1);

    for _ in 0..50 {
        let mut card = roller.roll_reward(&catalog).unwrap();
        card.attack = Some(999);
        card.name.push_str(" (mutated)");
    }

    assert_eq!(catalog.equipment(), &equipment());
    for _ in 0..50 {
        let card = roller.roll_reward(&catalog).unwrap();
        assert_ne!(card.attack, Some(999));
        assert!(!card.name.ends_with("(mutated)"));
    }
}

/// Test that an empty bracket yields nothing.
#[test]
fn test_empty_bracket_yields_none() {
    let pools = RarityPools::new().with(Rarity::Legendary, Card::new("Aegis", CardType::Armor, Rarity::Legendary));
    let mut roller = roller(2);

    assert!(roller.pick_with_roll(10.0, &pools).is_none());
    assert!(roller.pick_with_roll(99.0, &pools).is_some());
    assert!(roller.pick_with_roll(50.0, &RarityPools::<Card>::new()).is_none());
}

/// Test that spawns come out at full HP and share the bracket routine.
#[test]
fn test_enemy_spawn_full_hp() {
    let catalog = catalog_facing("Wolf", 12, 4);
    let mut roller = roller(8);

    for _ in 0..100 {
        let enemy = roller.roll_enemy(&catalog).unwrap();
        assert_eq!(enemy.name(), "Wolf");
        assert_eq!(enemy.current_hp, 12);
        assert_eq!(enemy.max_hp(), 12);
    }

    let common_only = roller.pick_with_roll(10.0, &creatures("Wolf", 12, 4)).unwrap();
    assert_eq!(common_only.rarity, Rarity::Common);
}

/// Test that the same seed reproduces the same sequence.
#[test]
fn test_seeded_rolls_repeat() {
    let catalog = catalog_facing("Rat", 10, 3);
    let mut a = roller(99);
    let mut b = roller(99);

    for _ in 0..100 {
        assert_eq!(a.roll_reward(&catalog), b.roll_reward(&catalog));
    }
}

/// Test custom thresholds: everything below 100 is common.
#[test]
fn test_custom_brackets() {
    let brackets = RewardBrackets {
        common_below: 100.0,
        rare_below: 100.0,
        epic_below: 100.0,
    };
    let mut roller = RewardRoller::new(GameRng::new(4), brackets);

    for _ in 0..200 {
        assert_eq!(roller.roll_reward(&catalog_facing("Rat", 1, 1)).unwrap().rarity, Rarity::Common);
    }
}
