//! Pullplan Store - durable state over native_db
//!
//! Provides persistent storage for:
//! - Calculator input fields (single row, overwritten on every save)
//! - One checklist row per character, keyed by character name
//! - App settings (theme, language, last-selected character)
//!
//! Missing state never errors: loads return defaults so a fresh database
//! and a first launch are indistinguishable.

mod error;
mod models;
mod store;

pub use error::{Error, Result};
pub use models::{SavedCalculator, SavedChecklist, SavedSettings, Settings, Theme};
pub use store::{CharacterSlot, Store};
