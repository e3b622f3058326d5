//! Persistence integration tests.
//!
//! Save after every change, resume from a store, and keep playing when the
//! store fails.

mod common;

use std::path::PathBuf;
use std::time::Duration;

use common::{catalog_facing, dungeon_facing, dungeon_with, enemy_hp, init_logging, player_hp, spare_weapon};
use dungeon_deck::cards::{CreatureTemplate, Rarity};
use dungeon_deck::core::{DungeonConfig, PersistenceError};
use dungeon_deck::entity::Enemy;
use dungeon_deck::persistence::{FileStore, KeyValueStore, MemoryStore, SaveFormat, SaveGateway, SaveState};
use dungeon_deck::presentation::{Presentation, ScriptedPresentation};
use dungeon_deck::Dungeon;

/// A store that refuses every write.
#[derive(Default)]
struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    fn put(&mut self, _key: &str, _blob: &[u8]) -> Result<(), PersistenceError> {
        Err(PersistenceError::Unavailable("read-only".into()))
    }

    fn get(&self, _key: &str) -> Result<Option<Vec<u8>>, PersistenceError> {
        Ok(None)
    }

    fn remove(&mut self, _key: &str) -> Result<(), PersistenceError> {
        Ok(())
    }
}

/// Reads the save file back every time the game pauses on a strike.
struct SaveFileWatcher {
    path: PathBuf,
    seen: Vec<(i32, i32)>,
}

impl Presentation for SaveFileWatcher {
    fn confirm(&mut self, _prompt: &str) -> bool {
        true
    }

    fn pace(&mut self, _duration: Duration) {
        let blob = std::fs::read(&self.path).unwrap();
        let state = SaveState::decode(&blob, SaveFormat::Json).unwrap();
        let player = state.player.map_or(-1, |p| p.current_hp);
        let enemy = state.enemy.map_or(-1, |e| e.current_hp);
        self.seen.push((player, enemy));
    }
}

fn resumed_from(store: MemoryStore, config: DungeonConfig) -> Dungeon<ScriptedPresentation, MemoryStore> {
    init_logging();
    Dungeon::new(config, catalog_facing("Rat", 30, 3), ScriptedPresentation::new(), store)
}

/// Test that every round is saved and a new process resumes it exactly.
#[test]
fn test_save_then_resume_reproduces_state() {
    let mut game = dungeon_facing("Rat", 30, 3);
    game.start_new_game("warrior").unwrap();
    game.play_card(0).unwrap();
    game.attack().unwrap();
    let saved = game.snapshot();

    let mut restored = resumed_from(game.store().clone(), DungeonConfig::default());
    assert!(restored.resume());

    assert_eq!(restored.snapshot(), saved);
    assert!(restored.attack_available());
}

/// Test the same round trip with the binary encoding.
#[test]
fn test_binary_saves() {
    let config = DungeonConfig::default().with_seed(5).with_save_format(SaveFormat::Binary);
    let mut game = dungeon_with(catalog_facing("Rat", 30, 3), config.clone());
    game.start_new_game("archer").unwrap();
    game.attack().unwrap();

    let mut restored = resumed_from(game.store().clone(), config);
    assert!(restored.resume());
    assert_eq!(restored.snapshot(), game.snapshot());
}

/// Test that the hand and round flags are not part of a save.
#[test]
fn test_hand_is_not_persisted() {
    let mut game = dungeon_facing("Rat", 30, 3);
    game.start_new_game("warrior").unwrap();
    game.grant_card(spare_weapon("Stick")).unwrap();
    game.discard_card(0).unwrap();

    let mut restored = resumed_from(game.store().clone(), DungeonConfig::default());
    assert!(restored.resume());

    assert!(restored.hand().is_empty());
    assert!(!restored.round().round_action_used);
}

/// Test that the save lives under the configured key only.
#[test]
fn test_custom_save_key() {
    let config = DungeonConfig::default().with_seed(1).with_save_key("slot-2");
    let mut game = dungeon_with(catalog_facing("Rat", 30, 3), config);
    game.start_new_game("mage").unwrap();

    assert!(game.store().contains("slot-2"));
    assert!(!game.store().contains("dungeonSave"));
    assert_eq!(game.store().len(), 1);
}

/// Test resuming with nothing saved.
#[test]
fn test_resume_without_save() {
    let mut game = dungeon_facing("Rat", 30, 3);
    assert!(!game.resume());
    assert!(!game.session().is_active());
}

/// Test that an unreadable save is treated as no save.
#[test]
fn test_resume_ignores_corrupt_save() {
    let mut store = MemoryStore::new();
    store.put("dungeonSave", b"{\"player\": 12").unwrap();

    let mut game = resumed_from(store, DungeonConfig::default());

    assert!(!game.resume());
    assert!(!game.session().is_active());
}

/// Test that a save holding a defeated enemy resumes into a fresh room.
#[test]
fn test_resume_replaces_defeated_enemy() {
    let mut game = dungeon_facing("Rat", 30, 3);
    game.start_new_game("warrior").unwrap();
    let mut state = game.snapshot();
    let mut dead = Enemy::spawn(CreatureTemplate::new("Rat", 30, 3, Rarity::Common));
    dead.current_hp = 0;
    state.enemy = Some(dead);

    let mut gateway = SaveGateway::new(MemoryStore::new(), "dungeonSave", SaveFormat::Json);
    gateway.save(&state).unwrap();

    let mut restored = resumed_from(gateway.store().clone(), DungeonConfig::default());
    assert!(restored.resume());
    assert_eq!(restored.enemy().map(|e| e.current_hp), Some(30));
}

/// Test that resumed HP is clamped into range.
#[test]
fn test_resume_clamps_hp() {
    let mut game = dungeon_facing("Rat", 30, 3);
    game.start_new_game("warrior").unwrap();
    let mut state = game.snapshot();
    if let Some(player) = state.player.as_mut() {
        player.current_hp = 999;
    }
    let blob = state.encode(SaveFormat::Json).unwrap();
    let mut store = MemoryStore::new();
    store.put("dungeonSave", &blob).unwrap();

    let mut restored = resumed_from(store, DungeonConfig::default());
    assert!(restored.resume());
    assert_eq!(player_hp(&restored), 20);
}

/// Test that a stale enemy HP above its template is clamped on resume.
#[test]
fn test_resume_clamps_enemy_hp() {
    let mut game = dungeon_facing("Rat", 30, 3);
    game.start_new_game("warrior").unwrap();
    let mut state = game.snapshot();
    if let Some(enemy) = state.enemy.as_mut() {
        enemy.current_hp = 999;
    }
    let mut store = MemoryStore::new();
    store.put("dungeonSave", &state.encode(SaveFormat::Json).unwrap()).unwrap();

    let mut restored = resumed_from(store, DungeonConfig::default());
    assert!(restored.resume());
    assert_eq!(enemy_hp(&restored), 30);
    assert_eq!(restored.snapshot().enemy.map(|e| e.current_hp), Some(30));
}

/// Test that each strike is on disk before the next strike plays out.
#[test]
fn test_each_strike_saved_before_the_next() {
    let dir = std::env::temp_dir().join(format!("dungeon-deck-strikes-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    init_logging();

    let store = FileStore::new(&dir);
    let watcher = SaveFileWatcher {
        path: store.path_for("dungeonSave"),
        seen: Vec::new(),
    };
    let mut game = Dungeon::new(
        DungeonConfig::default().with_seed(3),
        catalog_facing("Rat", 10, 3),
        watcher,
        store,
    );
    game.start_new_game("warrior").unwrap();
    game.presentation_mut().seen.clear();

    game.attack().unwrap();

    // Enemy strikes first on a fresh round, then the warrior hits back
    assert_eq!(game.presentation().seen, vec![(17, 10), (17, 5)]);

    let _ = std::fs::remove_dir_all(&dir);
}

/// Test that a failing store never stops play.
#[test]
fn test_save_failure_is_reported_not_fatal() {
    init_logging();
    let mut game = Dungeon::new(
        DungeonConfig::default().with_seed(9),
        catalog_facing("Rat", 30, 3),
        ScriptedPresentation::new(),
        ReadOnlyStore,
    );

    game.start_new_game("warrior").unwrap();
    game.attack().unwrap();

    assert_eq!(game.player().map(|p| p.current_hp), Some(17));
    let messages = game.presentation().messages();
    assert!(messages.iter().any(|m| m.starts_with("Could not save")));
}

/// Test the file-backed store through a whole save and resume.
#[test]
fn test_file_store_resume() {
    let dir = std::env::temp_dir().join(format!("dungeon-deck-resume-{}", std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    init_logging();

    let mut game = Dungeon::new(
        DungeonConfig::default().with_seed(4),
        catalog_facing("Rat", 30, 3),
        ScriptedPresentation::new(),
        FileStore::new(&dir),
    );
    game.start_new_game("warrior").unwrap();
    game.attack().unwrap();
    let saved = game.snapshot();

    let mut restored = Dungeon::new(
        DungeonConfig::default(),
        catalog_facing("Rat", 30, 3),
        ScriptedPresentation::new(),
        FileStore::new(&dir),
    );
    assert!(restored.resume());
    assert_eq!(restored.snapshot(), saved);

    restored.reset_session();
    assert!(!FileStore::new(&dir).path_for("dungeonSave").exists());

    let _ = std::fs::remove_dir_all(&dir);
}

/// Test that the JSON blob carries exactly the player and enemy.
#[test]
fn test_json_blob_shape() {
    let mut game = dungeon_facing("Rat", 30, 3);
    game.start_new_game("warrior").unwrap();

    let blob = game.store().get("dungeonSave").unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&blob).unwrap();
    let object = value.as_object().unwrap();

    assert_eq!(object.len(), 2);
    assert_eq!(value["player"]["name"], "Warrior");
    assert_eq!(SaveState::decode(&blob, SaveFormat::Json).unwrap(), game.snapshot());
}
