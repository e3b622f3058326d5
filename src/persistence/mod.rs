//! Persistence: a key-value store and the gateway that writes the save
//! blob into it.
//!
//! The whole save lives under one key and is overwritten after every state
//! change. There is no versioning; a blob that no longer decodes is treated
//! by the caller as "no save".

pub mod gateway;
pub mod store;

pub use gateway::{SaveFormat, SaveGateway, SaveState};
pub use store::{FileStore, KeyValueStore, MemoryStore};
