//! Where definition files come from.
//!
//! A source hands back raw JSON text by logical name (`equips_common`,
//! `creatures_epic`, `characters/archer`, ...). The catalog owns parsing.

use std::fs;
use std::path::PathBuf;

use rustc_hash::FxHashMap;

use crate::core::CatalogError;

/// Raw access to named definition files.
pub trait CatalogSource {
    /// Read the JSON text for `name`.
    ///
    /// Returns `CatalogError::Missing` when no such definition exists.
    fn read(&self, name: &str) -> Result<String, CatalogError>;
}

/// Reads `<root>/<name>.json` from disk.
///
/// Equipment and creature pools are expected under `decks/`, classes under
/// `characters/`, matching the stock asset layout.
#[derive(Clone, Debug)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.root.join(format!("{name}.json"))
    }
}

impl CatalogSource for DirectorySource {
    fn read(&self, name: &str) -> Result<String, CatalogError> {
        let path = self.path_for(name);
        match fs::read_to_string(&path) {
            Ok(text) => Ok(text),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                Err(CatalogError::Missing { name: name.to_string() })
            }
            Err(source) => Err(CatalogError::Io { path, source }),
        }
    }
}

/// In-memory definitions, keyed by name.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    files: FxHashMap<String, String>,
}

impl MemorySource {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a definition (builder pattern).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, json: impl Into<String>) -> Self {
        self.insert(name, json);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, json: impl Into<String>) {
        self.files.insert(name.into(), json.into());
    }
}

impl CatalogSource for MemorySource {
    fn read(&self, name: &str) -> Result<String, CatalogError> {
        self.files
            .get(name)
            .cloned()
            .ok_or_else(|| CatalogError::Missing { name: name.to_string() })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_source() {
        let source = MemorySource::new().with("decks/consumables", "[]");

        assert_eq!(source.read("decks/consumables").unwrap(), "[]");
        assert!(matches!(
            source.read("decks/equips_rare"),
            Err(CatalogError::Missing { name }) if name == "decks/equips_rare"
        ));
    }

    #[test]
    fn test_directory_source_missing_file() {
        let source = DirectorySource::new(std::env::temp_dir().join("dungeon-deck-no-such-dir"));
        assert!(matches!(source.read("decks/equips_common"), Err(CatalogError::Missing { .. })));
    }
}
