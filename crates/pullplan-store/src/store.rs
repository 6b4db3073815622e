//! Database store wrapper.

use crate::error::{Error, Result};
use crate::models::*;
use native_db::*;
use pullplan_core::{CalculatorInputs, OwnedMaterials};
use std::path::Path;
use std::sync::LazyLock;

// Static models for the database
static MODELS: LazyLock<Models> = LazyLock::new(|| {
    let mut models = Models::new();
    models.define::<SavedCalculator>().unwrap();
    models.define::<SavedChecklist>().unwrap();
    models.define::<SavedSettings>().unwrap();
    models
});

/// Durable store for calculator fields, checklists, and settings.
///
/// Loads never fail on missing state: an absent row reads back as the
/// default value, so first launch and a wiped database behave the same.
pub struct Store {
    db: Database<'static>,
}

impl Store {
    /// Open or create a database at the given path.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let db = Builder::new()
            .create(&MODELS, path.as_ref())
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(Self { db })
    }

    /// Create an in-memory database. State is dropped with the store;
    /// tests and dry runs use this in place of a file.
    pub fn in_memory() -> Result<Self> {
        let db = Builder::new()
            .create_in_memory(&MODELS)
            .map_err(|e| Error::Database(e.to_string()))?;
        Ok(Self { db })
    }

    /// Save the calculator fields, replacing any prior row.
    pub fn save_calculator(&self, inputs: &CalculatorInputs) -> Result<()> {
        let rw = self.db.rw_transaction()?;
        rw.upsert(SavedCalculator::from_inputs(inputs))?;
        rw.commit()?;
        Ok(())
    }

    /// Load the calculator fields. An absent row reads as the default
    /// (empty) state.
    pub fn load_calculator(&self) -> Result<CalculatorInputs> {
        let r = self.db.r_transaction()?;
        let saved: Option<SavedCalculator> = r.get().primary(SavedCalculator::KEY.to_string())?;
        Ok(saved.map(|s| s.to_inputs()).unwrap_or_default())
    }

    /// Save app settings, replacing any prior row.
    pub fn save_settings(&self, settings: &Settings) -> Result<()> {
        let rw = self.db.rw_transaction()?;
        rw.upsert(SavedSettings::from_settings(settings))?;
        rw.commit()?;
        Ok(())
    }

    /// Load app settings. An absent row reads as the defaults.
    pub fn load_settings(&self) -> Result<Settings> {
        let r = self.db.r_transaction()?;
        let saved: Option<SavedSettings> = r.get().primary(SavedSettings::KEY.to_string())?;
        Ok(saved.map(|s| s.to_settings()).unwrap_or_default())
    }

    /// Scoped handle over one character's persisted checklist.
    pub fn character(&self, name: &str) -> CharacterSlot<'_> {
        CharacterSlot {
            store: self,
            name: name.to_string(),
        }
    }

    /// Names of every character with a saved checklist.
    pub fn saved_characters(&self) -> Result<Vec<String>> {
        let r = self.db.r_transaction()?;
        let scan = r.scan().primary::<SavedChecklist>()?;
        let iter = scan.all()?;
        let rows: std::result::Result<Vec<SavedChecklist>, _> = iter.collect();
        let rows = rows.map_err(|e| Error::Database(e.to_string()))?;
        Ok(rows.into_iter().map(|row| row.character).collect())
    }
}

/// Read/write access to a single character's checklist row.
///
/// Each character owns exactly one row; rows for different characters
/// never touch each other.
pub struct CharacterSlot<'a> {
    store: &'a Store,
    name: String,
}

impl CharacterSlot<'_> {
    /// The character this handle is scoped to.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Load the owned-material map. Absent and unreadable rows both read
    /// as empty.
    pub fn load(&self) -> Result<OwnedMaterials> {
        let r = self.store.db.r_transaction()?;
        let row: Option<SavedChecklist> = r.get().primary(self.name.clone())?;
        Ok(row.map(|s| s.to_owned_materials()).unwrap_or_default())
    }

    /// Overwrite the owned-material map for this character.
    pub fn save(&self, owned: &OwnedMaterials) -> Result<()> {
        let rw = self.store.db.rw_transaction()?;
        rw.upsert(SavedChecklist::from_owned(&self.name, owned))?;
        rw.commit()?;
        Ok(())
    }

    /// Delete this character's checklist row, if any.
    pub fn clear(&self) -> Result<()> {
        let rw = self.store.db.rw_transaction()?;
        let row: Option<SavedChecklist> = rw.get().primary(self.name.clone())?;
        if let Some(row) = row {
            rw.remove(row)?;
        }
        rw.commit()?;
        Ok(())
    }
}

impl From<native_db::db_type::Error> for Error {
    fn from(err: native_db::db_type::Error) -> Self {
        Error::Database(err.to_string())
    }
}
