//! Core types shared by every area: RNG, configuration, errors.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{DungeonConfig, DEFAULT_CLASS_IDS, DEFAULT_SAVE_KEY, HAND_SIZE_SOFT_CAP};
pub use error::{CatalogError, CombatError, DungeonError, EquipError, PersistenceError};
pub use rng::GameRng;
