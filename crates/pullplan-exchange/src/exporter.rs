//! Export calculator state to portable documents

use crate::error::{Error, Result};
use pullplan_core::CalculatorInputs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Fixed file name for exported calculator documents.
pub const EXPORT_FILE_NAME: &str = "pull_planner_data.json";

/// Current export document version.
const EXPORT_VERSION: u32 = 1;

/// Export format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    /// JSON document (the interchange default)
    Json,
    /// RON document
    Ron,
    /// Human-readable text summary
    Text,
}

/// Exporter for calculator state
pub struct Exporter<'a> {
    inputs: &'a CalculatorInputs,
}

impl<'a> Exporter<'a> {
    /// Create a new exporter
    pub fn new(inputs: &'a CalculatorInputs) -> Self {
        Self { inputs }
    }

    /// Export to a string in the specified format
    pub fn export(&self, format: ExportFormat) -> Result<String> {
        match format {
            ExportFormat::Json => self.to_json(),
            ExportFormat::Ron => self.to_ron(),
            ExportFormat::Text => Ok(self.to_text()),
        }
    }

    /// Export to a writer
    pub fn export_to<W: Write>(&self, writer: &mut W, format: ExportFormat) -> Result<()> {
        let content = self.export(format)?;
        writer
            .write_all(content.as_bytes())
            .map_err(|e| Error::Export(e.to_string()))?;
        Ok(())
    }

    /// Write the JSON document under its fixed name into a directory.
    /// Returns the written path.
    pub fn write_file(&self, dir: impl AsRef<Path>) -> Result<PathBuf> {
        let path = dir.as_ref().join(EXPORT_FILE_NAME);
        fs::write(&path, self.to_json()?)?;
        Ok(path)
    }

    /// Export to JSON format
    pub fn to_json(&self) -> Result<String> {
        let export = ExportDoc::from_inputs(self.inputs);
        serde_json::to_string_pretty(&export).map_err(|e| Error::Export(e.to_string()))
    }

    /// Export to RON format
    pub fn to_ron(&self) -> Result<String> {
        let export = ExportDoc::from_inputs(self.inputs);
        ron::ser::to_string_pretty(&export, ron::ser::PrettyConfig::default())
            .map_err(|e| Error::Export(e.to_string()))
    }

    /// Export to human-readable text format
    pub fn to_text(&self) -> String {
        let mut output = String::new();

        output.push_str("=== Pull Planner Export ===\n\n");
        output.push_str(&format!("Gems: {}\n", self.inputs.gems));
        output.push_str(&format!("Fates: {}\n", self.inputs.fates));
        output.push_str(&format!("Pity: {}\n", self.inputs.pity));
        output.push_str(&format!("Target pulls: {}\n", self.inputs.target_pulls));
        output.push_str(&format!("Guarantee: {}\n", self.inputs.guarantee));

        let report = self.inputs.report();
        output.push_str("\n=== Derived ===\n\n");
        output.push_str(&format!("Required gems: {}\n", report.required_gems));
        output.push_str(&format!("Shortfall: {}\n", report.shortfall));
        output.push_str(&format!("Convertible pulls: {}\n", report.convertible_pulls));
        output.push_str(&format!(
            "Feasible: {}\n",
            if report.feasible { "yes" } else { "no" }
        ));

        output
    }
}

/// Versioned envelope for exported calculator state.
///
/// Every field defaults on the way back in, so partial or older documents
/// import without erroring.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ExportDoc {
    #[serde(default)]
    pub version: u32,
    /// RFC 3339 stamp of the export; informational only, ignored on import
    #[serde(default)]
    pub exported_at: String,
    #[serde(default)]
    pub calculator: CalculatorInputs,
}

impl ExportDoc {
    pub(crate) fn from_inputs(inputs: &CalculatorInputs) -> Self {
        Self {
            version: EXPORT_VERSION,
            exported_at: chrono::Utc::now().to_rfc3339(),
            calculator: inputs.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pullplan_core::GuaranteeMode;

    fn inputs() -> CalculatorInputs {
        CalculatorInputs {
            gems: "1000".to_string(),
            fates: "5".to_string(),
            pity: "23".to_string(),
            target_pulls: "90".to_string(),
            guarantee: GuaranteeMode::On,
        }
    }

    #[test]
    fn test_export_json_carries_version_and_fields() {
        let json = Exporter::new(&inputs()).to_json().unwrap();
        assert!(json.contains("\"version\": 1"));
        assert!(json.contains("\"gems\": \"1000\""));
        assert!(json.contains("\"guarantee\": \"on\""));
    }

    #[test]
    fn test_export_ron() {
        let ron = Exporter::new(&inputs()).to_ron().unwrap();
        assert!(ron.contains("version"));
        assert!(ron.contains("calculator"));
    }

    #[test]
    fn test_export_text_summarizes_fields_and_report() {
        let text = Exporter::new(&inputs()).to_text();
        assert!(text.contains("Pull Planner Export"));
        assert!(text.contains("Gems: 1000"));
        assert!(text.contains("Guarantee: on"));
        assert!(text.contains("Required gems: 14400"));
        assert!(text.contains("Feasible: no"));
    }

    #[test]
    fn test_write_file_uses_the_fixed_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = Exporter::new(&inputs()).write_file(dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), EXPORT_FILE_NAME);
        assert!(path.exists());
    }
}
