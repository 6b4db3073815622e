//! Catalog document schema

use crate::error::{Error, Result};
use indexmap::IndexMap;
use pullplan_core::MaterialRequirement;
use serde::{Deserialize, Serialize};

/// One catalog document: character name to ordered material list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    pub characters: IndexMap<String, Vec<MaterialRequirement>>,
}

/// Merged view over every loaded catalog document.
///
/// The catalog is read-only reference data; owned counts live elsewhere.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    characters: IndexMap<String, Vec<MaterialRequirement>>,
}

impl Catalog {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one character's requirement list. A name already present in
    /// the catalog is an error; documents never silently override each
    /// other.
    pub fn insert(&mut self, name: impl Into<String>, materials: Vec<MaterialRequirement>) -> Result<()> {
        let name = name.into();
        if self.characters.contains_key(&name) {
            return Err(Error::DuplicateEntry(name));
        }
        self.characters.insert(name, materials);
        Ok(())
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    /// All character names, sorted for stable display.
    pub fn character_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.characters.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn contains(&self, name: &str) -> bool {
        self.characters.contains_key(name)
    }

    /// Requirement list for one character.
    pub fn materials_for(&self, name: &str) -> Option<&[MaterialRequirement]> {
        self.characters.get(name).map(|m| m.as_slice())
    }

    /// Case-insensitive substring search over the roster. An empty query
    /// matches everyone.
    pub fn search(&self, query: &str) -> Vec<String> {
        let needle = query.to_lowercase();
        self.character_names()
            .into_iter()
            .filter(|name| name.to_lowercase().contains(&needle))
            .collect()
    }
}
