//! Import calculator state from exported documents

use crate::error::{Error, Result};
use crate::exporter::ExportDoc;
use pullplan_core::CalculatorInputs;
use std::fs;
use std::path::Path;

/// Parse an exported document back into calculator state.
///
/// JSON is tried first, then RON. Fields missing from the document come
/// back as defaults; content that parses as neither format is an error.
/// Nothing is persisted here, the caller decides what to do with the
/// returned state.
pub fn import_str(content: &str) -> Result<CalculatorInputs> {
    if let Ok(doc) = serde_json::from_str::<ExportDoc>(content) {
        return Ok(doc.calculator);
    }
    if let Ok(doc) = ron::from_str::<ExportDoc>(content) {
        return Ok(doc.calculator);
    }
    Err(Error::Unreadable(
        "content is not a calculator export".to_string(),
    ))
}

/// Import from a file on disk, tagging any failure with the file name.
pub fn import_file(path: impl AsRef<Path>) -> Result<CalculatorInputs> {
    let path = path.as_ref();
    let file = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("<unknown>")
        .to_string();

    let content = fs::read_to_string(path).map_err(|e| Error::ImportFile {
        file: file.clone(),
        source: Box::new(Error::Io(e)),
    })?;
    import_str(&content).map_err(|e| Error::ImportFile {
        file,
        source: Box::new(e),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exporter::{ExportFormat, Exporter};
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
    fn test_json_export_imports_back_unchanged() {
        let json = Exporter::new(&inputs()).export(ExportFormat::Json).unwrap();
        assert_eq!(import_str(&json).unwrap(), inputs());
    }

    #[test]
    fn test_ron_export_imports_back_unchanged() {
        let ron = Exporter::new(&inputs()).export(ExportFormat::Ron).unwrap();
        assert_eq!(import_str(&ron).unwrap(), inputs());
    }

    #[test]
    fn test_missing_fields_import_as_defaults() {
        let state = import_str(r#"{"calculator": {"gems": "500"}}"#).unwrap();
        assert_eq!(state.gems, "500");
        assert_eq!(state.target_pulls, "");
        assert_eq!(state.guarantee, GuaranteeMode::Off);
    }

    #[test]
    fn test_empty_object_imports_as_default_state() {
        assert_eq!(import_str("{}").unwrap(), CalculatorInputs::default());
    }

    #[test]
    fn test_garbage_is_unreadable() {
        assert!(import_str("").is_err());
        assert!(import_str("definitely not a document").is_err());
    }

    #[test]
    fn test_import_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = Exporter::new(&inputs()).write_file(dir.path()).unwrap();
        assert_eq!(import_file(&path).unwrap(), inputs());
    }

    #[test]
    fn test_import_file_failure_names_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "garbage").unwrap();

        let err = import_file(&path).unwrap_err();
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_import_missing_file_names_the_file() {
        let err = import_file("no/such/export.json").unwrap_err();
        assert!(err.to_string().contains("export.json"));
    }
}
