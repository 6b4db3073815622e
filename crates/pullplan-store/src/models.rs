//! Database models for persistent state.

use native_db::*;
use native_model::{native_model, Model};
use pullplan_core::{CalculatorInputs, GuaranteeMode, OwnedMaterials};
use serde::{Deserialize, Serialize};

/// Stored calculator fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 1, version = 1)]
#[native_db]
pub struct SavedCalculator {
    /// Always "calculator" - single row.
    #[primary_key]
    pub id: String,
    pub gems: String,
    pub fates: String,
    pub pity: String,
    pub target_pulls: String,
    /// Guarantee mode as stored text ("off"/"on").
    pub guarantee: String,
}

impl SavedCalculator {
    /// Primary key of the single calculator row.
    pub const KEY: &'static str = "calculator";

    /// Create from calculator inputs.
    pub fn from_inputs(inputs: &CalculatorInputs) -> Self {
        let guarantee = match inputs.guarantee {
            GuaranteeMode::Off => "off",
            GuaranteeMode::On => "on",
        };
        Self {
            id: Self::KEY.to_string(),
            gems: inputs.gems.clone(),
            fates: inputs.fates.clone(),
            pity: inputs.pity.clone(),
            target_pulls: inputs.target_pulls.clone(),
            guarantee: guarantee.to_string(),
        }
    }

    /// Convert back to calculator inputs. Unrecognized guarantee text
    /// reads as off.
    pub fn to_inputs(&self) -> CalculatorInputs {
        let guarantee = match self.guarantee.as_str() {
            "on" => GuaranteeMode::On,
            _ => GuaranteeMode::Off,
        };
        CalculatorInputs {
            gems: self.gems.clone(),
            fates: self.fates.clone(),
            pity: self.pity.clone(),
            target_pulls: self.target_pulls.clone(),
            guarantee,
        }
    }
}

/// Stored owned-material map for one character.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 2, version = 1)]
#[native_db]
pub struct SavedChecklist {
    /// Primary key - character name.
    #[primary_key]
    pub character: String,
    /// Serialized owned-material map.
    pub data: Vec<u8>,
}

impl SavedChecklist {
    /// Create from an owned-material map.
    pub fn from_owned(character: &str, owned: &OwnedMaterials) -> Self {
        let data = bincode::serialize(owned).unwrap_or_default();
        Self {
            character: character.to_string(),
            data,
        }
    }

    /// Decode the stored map. Unreadable payloads read as empty.
    pub fn to_owned_materials(&self) -> OwnedMaterials {
        match bincode::deserialize(&self.data) {
            Ok(owned) => owned,
            Err(err) => {
                tracing::debug!(
                    "stored checklist for {} is unreadable ({err}), reading as empty",
                    self.character
                );
                OwnedMaterials::default()
            }
        }
    }
}

/// Stored app settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[native_model(id = 3, version = 1)]
#[native_db]
pub struct SavedSettings {
    /// Always "settings" - single row.
    #[primary_key]
    pub id: String,
    /// Theme as stored text ("light"/"dark").
    pub theme: String,
    /// Locale code for display strings.
    pub language: String,
    /// Character selected when the checklist was last open.
    pub last_character: Option<String>,
}

impl SavedSettings {
    /// Primary key of the single settings row.
    pub const KEY: &'static str = "settings";

    /// Create from settings.
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            id: Self::KEY.to_string(),
            theme: settings.theme.as_str().to_string(),
            language: settings.language.clone(),
            last_character: settings.last_character.clone(),
        }
    }

    /// Convert back to settings. Unrecognized theme text reads as light.
    pub fn to_settings(&self) -> Settings {
        let theme = match self.theme.as_str() {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        };
        Settings {
            theme,
            language: self.language.clone(),
            last_character: self.last_character.clone(),
        }
    }
}

/// App-level settings bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub theme: Theme,
    /// Locale code ("en", "id", ...)
    pub language: String,
    pub last_character: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            language: "en".to_string(),
            last_character: None,
        }
    }
}

/// UI theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}
