//! Locale string bundles

use crate::error::{Error, Result};
use indexmap::IndexMap;
use std::fs;
use std::path::Path;

/// Display strings for one language, keyed by string ID.
pub type LocaleBundle = IndexMap<String, String>;

/// Load the bundle for a language code from a locale directory.
///
/// Looks for `<lang>.json`, then `<lang>.ron`.
pub fn load_locale(dir: impl AsRef<Path>, lang: &str) -> Result<LocaleBundle> {
    let dir = dir.as_ref();

    let json_path = dir.join(format!("{lang}.json"));
    if json_path.exists() {
        let content = fs::read_to_string(&json_path)?;
        return Ok(serde_json::from_str(&content)?);
    }

    let ron_path = dir.join(format!("{lang}.ron"));
    if ron_path.exists() {
        let content = fs::read_to_string(&ron_path)?;
        return Ok(ron::from_str(&content)?);
    }

    Err(Error::MissingLocale(lang.to_string()))
}

/// Resolves display string keys for the active language.
///
/// A failed language switch keeps the previous strings in place, so the
/// screen never goes blank over a missing bundle.
#[derive(Debug, Clone, Default)]
pub struct Translator {
    language: String,
    strings: LocaleBundle,
}

impl Translator {
    /// Load an initial bundle.
    pub fn load(dir: impl AsRef<Path>, lang: &str) -> Result<Self> {
        Ok(Self {
            language: lang.to_string(),
            strings: load_locale(dir, lang)?,
        })
    }

    /// Translator with no strings; every key echoes back.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The active language code.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Resolve a key, falling back to the key itself when the bundle has
    /// no entry for it.
    pub fn translate<'a>(&'a self, key: &'a str) -> &'a str {
        self.strings.get(key).map(String::as_str).unwrap_or(key)
    }

    /// Switch languages. Returns whether the new bundle loaded; on
    /// failure the current strings stay active.
    pub fn switch(&mut self, dir: impl AsRef<Path>, lang: &str) -> bool {
        match load_locale(dir, lang) {
            Ok(strings) => {
                self.language = lang.to_string();
                self.strings = strings;
                true
            }
            Err(err) => {
                tracing::warn!(
                    "locale {lang} failed to load ({err}), keeping {}",
                    self.language
                );
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locale_dir() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("en.json"),
            r#"{"app.title": "Pull Planner", "tab.pulls": "Pulls"}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("id.ron"),
            r#"{ "app.title": "Perencana Gacha" }"#,
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_load_locale_prefers_json_then_ron() {
        let dir = locale_dir();
        let en = load_locale(dir.path(), "en").unwrap();
        assert_eq!(en["app.title"], "Pull Planner");

        let id = load_locale(dir.path(), "id").unwrap();
        assert_eq!(id["app.title"], "Perencana Gacha");
    }

    #[test]
    fn test_missing_locale_is_an_error() {
        let dir = locale_dir();
        assert!(matches!(
            load_locale(dir.path(), "fr"),
            Err(Error::MissingLocale(lang)) if lang == "fr"
        ));
    }

    #[test]
    fn test_translate_falls_back_to_the_key() {
        let dir = locale_dir();
        let translator = Translator::load(dir.path(), "en").unwrap();
        assert_eq!(translator.translate("app.title"), "Pull Planner");
        assert_eq!(translator.translate("no.such.key"), "no.such.key");
    }

    #[test]
    fn test_failed_switch_keeps_prior_strings() {
        let dir = locale_dir();
        let mut translator = Translator::load(dir.path(), "en").unwrap();

        assert!(!translator.switch(dir.path(), "fr"));
        assert_eq!(translator.language(), "en");
        assert_eq!(translator.translate("app.title"), "Pull Planner");
    }

    #[test]
    fn test_successful_switch_swaps_strings() {
        let dir = locale_dir();
        let mut translator = Translator::load(dir.path(), "en").unwrap();

        assert!(translator.switch(dir.path(), "id"));
        assert_eq!(translator.language(), "id");
        assert_eq!(translator.translate("app.title"), "Perencana Gacha");
        // Keys absent from the new bundle still echo back.
        assert_eq!(translator.translate("tab.pulls"), "tab.pulls");
    }
}
