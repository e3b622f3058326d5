//! Card system: definitions, rarity pools, and the catalog.
//!
//! ## Key Types
//!
//! - `Card`: Loot card template (weapon, armor, any, consumable)
//! - `CreatureTemplate`: Enemy definition
//! - `ClassDefinition`: Playable class with base stats and slot counts
//! - `RarityPools<T>`: One collection per rarity tier
//! - `Catalog`: Everything above, loaded once from a `CatalogSource`

pub mod catalog;
pub mod definition;
pub mod pools;
pub mod source;

pub use catalog::Catalog;
pub use definition::{class_id_of, Card, CardType, ClassDefinition, CreatureTemplate, Rarity, SlotCounts};
pub use pools::RarityPools;
pub use source::{CatalogSource, DirectorySource, MemorySource};
