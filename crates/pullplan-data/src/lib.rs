//! Pullplan Data - reference catalogs and locale bundles
//!
//! Loads the static documents the planner consumes:
//! - Character material catalogs (RON or JSON), merged across files
//! - Locale string bundles, one per language code
//!
//! Catalog contents are read-only reference data; the owned counts a
//! player tracks against them live in `pullplan-store`.

mod error;
mod loader;
mod locale;
mod schema;

pub use error::{Error, Result};
pub use loader::CatalogLoader;
pub use locale::{load_locale, LocaleBundle, Translator};
pub use schema::{Catalog, CatalogFile};
