//! # dungeon-deck
//!
//! Core of a single-player card dungeon crawler: a class-based hero with
//! equipment slots fights randomly drawn enemies one room at a time,
//! collecting loot cards between fights.
//!
//! ## Design Principles
//!
//! 1. **Explicit Session**: All mutable state lives in one `GameSession`.
//!    Components take it as a parameter; nothing is global.
//!
//! 2. **Synchronous Core**: State transitions are instant. Animation delays
//!    and yes/no prompts go through the `Presentation` trait, so the whole
//!    game runs headless in tests.
//!
//! 3. **Data over Special Cases**: Class abilities are a hook table in
//!    `DungeonConfig`, not name checks in the rules.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, error types
//! - `cards`: Card, creature and class definitions; the catalog
//! - `reward`: Rarity-bracketed reward and spawn rolls
//! - `entity`: Player and enemy, derived stats, equipping
//! - `hand`: The hand and the discard gate
//! - `combat`: Round resolution and class hooks
//! - `session`: Session aggregate and the `Dungeon` controller
//! - `presentation`: Callbacks into the UI
//! - `persistence`: Key-value stores and the save gateway

pub mod cards;
pub mod combat;
pub mod core;
pub mod entity;
pub mod hand;
pub mod persistence;
pub mod presentation;
pub mod reward;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    CatalogError, CombatError, DungeonConfig, DungeonError, EquipError, GameRng, PersistenceError,
    HAND_SIZE_SOFT_CAP,
};

pub use crate::cards::{
    Card, CardType, Catalog, CatalogSource, ClassDefinition, CreatureTemplate, DirectorySource, MemorySource, Rarity,
    RarityPools, SlotCounts,
};

pub use crate::reward::{RewardBrackets, RewardRoller};

pub use crate::entity::{Enemy, Equipment, Player, Slot};

pub use crate::hand::{DiscardGate, Hand, LockState};

pub use crate::combat::{
    ClassHook, ClassHooks, CombatEngine, CombatPhase, Combatant, RoundOutcome, RoundReport, StrikeEvent,
};

pub use crate::session::{CommandOutcome, Dungeon, GameSession, RoundState};

pub use crate::presentation::{EffectCue, NullPresentation, Presentation, ScriptedPresentation};

pub use crate::persistence::{FileStore, KeyValueStore, MemoryStore, SaveFormat, SaveGateway, SaveState};
