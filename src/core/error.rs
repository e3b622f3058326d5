//! Error types.
//!
//! Each area has its own enum; `DungeonError` is what user commands return.
//! Player death, an empty reward roll, and a declined prompt are outcomes,
//! not errors.

use std::path::PathBuf;

use thiserror::Error;

use crate::cards::CardType;

/// Catalog failed to load. Fatal at startup.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("definition source `{name}` is missing")]
    Missing { name: String },

    #[error("failed to read `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("definition source `{name}` is malformed")]
    Malformed {
        name: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("unknown class `{0}`")]
    UnknownClass(String),
}

/// Equip attempted on a slot the card does not fit.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EquipError {
    #[error("cannot equip {card}: no {card_type:?} slot available")]
    InvalidSlot { card: String, card_type: CardType },
}

/// Attack rejected before any damage was applied.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CombatError {
    #[error("an attack is already resolving")]
    AlreadyResolving,

    #[error("discard down before attacking ({hand_len} cards in hand)")]
    DiscardRequired { hand_len: usize },

    #[error("no player and enemy to fight")]
    NoEncounter,

    #[error("a combatant is already down")]
    CombatantDown,
}

/// Durable storage could not be reached or its blob could not be coded.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PersistenceError {
    #[error("storage unavailable: {0}")]
    Unavailable(String),

    #[error("failed to encode save: {0}")]
    Encode(String),

    #[error("failed to decode save: {0}")]
    Decode(String),
}

/// Error returned by a user command.
#[derive(Debug, Error)]
pub enum DungeonError {
    #[error("no game in progress")]
    NoSession,

    #[error("hand index {index} out of range (hand holds {len})")]
    InvalidHandIndex { index: usize, len: usize },

    #[error("a card was already played or discarded this round")]
    RoundActionSpent,

    #[error(transparent)]
    Equip(#[from] EquipError),

    #[error(transparent)]
    Combat(#[from] CombatError),

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
