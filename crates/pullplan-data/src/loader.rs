//! Catalog document loader

use crate::error::{Error, Result};
use crate::schema::{Catalog, CatalogFile};
use std::fs;
use std::path::Path;

/// Loader for character material catalogs.
///
/// Accepts RON and JSON documents. Files merge into one catalog; the same
/// character appearing in two documents is an error.
pub struct CatalogLoader {
    catalog: Catalog,
}

impl CatalogLoader {
    /// Create a new loader
    pub fn new() -> Self {
        Self {
            catalog: Catalog::new(),
        }
    }

    /// Load a single catalog file, dispatching on the extension. Unknown
    /// extensions are sniffed: JSON first, then RON.
    pub fn load_file(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match extension {
            "ron" => self.load_ron_str(&content),
            "json" => self.load_json_str(&content),
            _ => {
                if let Ok(file) = serde_json::from_str::<CatalogFile>(&content) {
                    return self.merge(file);
                }
                if let Ok(file) = ron::from_str::<CatalogFile>(&content) {
                    return self.merge(file);
                }
                Err(Error::UnrecognizedDocument(path.display().to_string()))
            }
        }
    }

    /// Load a catalog from a RON string
    pub fn load_ron_str(&mut self, content: &str) -> Result<()> {
        let file: CatalogFile = ron::from_str(content)?;
        self.merge(file)
    }

    /// Load a catalog from a JSON string
    pub fn load_json_str(&mut self, content: &str) -> Result<()> {
        let file: CatalogFile = serde_json::from_str(content)?;
        self.merge(file)
    }

    /// Load all catalog files from a directory, recursively.
    pub fn load_directory(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();

        if !path.is_dir() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Not a directory: {:?}", path),
            )));
        }

        for entry in fs::read_dir(path)? {
            let entry = entry?;
            let file_path = entry.path();

            if file_path.is_dir() {
                self.load_directory(&file_path)?;
            } else {
                let extension = file_path.extension().and_then(|e| e.to_str());
                if matches!(extension, Some("ron") | Some("json")) {
                    self.load_file(&file_path)?;
                }
            }
        }

        Ok(())
    }

    fn merge(&mut self, file: CatalogFile) -> Result<()> {
        for (name, materials) in file.characters {
            self.catalog.insert(name, materials)?;
        }
        Ok(())
    }

    /// Finish loading and return the merged catalog
    pub fn finish(self) -> Catalog {
        self.catalog
    }

    /// Get the catalog loaded so far (for inspection during loading)
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

impl Default for CatalogLoader {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RON_CATALOG: &str = r#"
    (
        characters: {
            "Ayaka": [
                (name: "Shivada Jade Sliver", category: "Gems", required: 1),
                (name: "Sakura Bloom", category: "Local Specialty", required: 168),
            ],
        },
    )
    "#;

    const JSON_CATALOG: &str = r#"
    {
        "characters": {
            "Hu Tao": [
                {"name": "Silk Flower", "category": "Local Specialty", "required": 168}
            ]
        }
    }
    "#;

    #[test]
    fn test_load_ron_catalog() {
        let mut loader = CatalogLoader::new();
        loader.load_ron_str(RON_CATALOG).unwrap();

        let catalog = loader.finish();
        let materials = catalog.materials_for("Ayaka").unwrap();
        assert_eq!(materials.len(), 2);
        assert_eq!(materials[0].name, "Shivada Jade Sliver");
        assert_eq!(materials[1].required, 168);
    }

    #[test]
    fn test_load_json_catalog() {
        let mut loader = CatalogLoader::new();
        loader.load_json_str(JSON_CATALOG).unwrap();

        let catalog = loader.finish();
        assert!(catalog.contains("Hu Tao"));
    }

    #[test]
    fn test_category_defaults_to_empty() {
        let mut loader = CatalogLoader::new();
        loader
            .load_json_str(r#"{"characters": {"Ayaka": [{"name": "Sakura Bloom", "required": 10}]}}"#)
            .unwrap();

        let catalog = loader.finish();
        assert_eq!(catalog.materials_for("Ayaka").unwrap()[0].category, "");
    }

    #[test]
    fn test_documents_merge_and_duplicates_error() {
        let mut loader = CatalogLoader::new();
        loader.load_ron_str(RON_CATALOG).unwrap();
        loader.load_json_str(JSON_CATALOG).unwrap();
        assert_eq!(loader.catalog().len(), 2);

        let err = loader.load_ron_str(RON_CATALOG).unwrap_err();
        assert!(matches!(err, Error::DuplicateEntry(name) if name == "Ayaka"));
    }

    #[test]
    fn test_load_directory_picks_up_both_formats() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("ayaka.ron"), RON_CATALOG).unwrap();
        let nested = dir.path().join("liyue");
        fs::create_dir(&nested).unwrap();
        fs::write(nested.join("hutao.json"), JSON_CATALOG).unwrap();
        fs::write(dir.path().join("notes.txt"), "not a catalog").unwrap();

        let mut loader = CatalogLoader::new();
        loader.load_directory(dir.path()).unwrap();

        let catalog = loader.finish();
        assert!(catalog.contains("Ayaka"));
        assert!(catalog.contains("Hu Tao"));
    }

    #[test]
    fn test_unknown_extension_is_sniffed() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.data");
        fs::write(&path, JSON_CATALOG).unwrap();

        let mut loader = CatalogLoader::new();
        loader.load_file(&path).unwrap();
        assert!(loader.catalog().contains("Hu Tao"));
    }

    #[test]
    fn test_garbage_document_is_an_error() {
        let mut loader = CatalogLoader::new();
        assert!(loader.load_json_str("not json").is_err());
        assert!(loader.load_ron_str("(characters: oops)").is_err());
    }

    #[test]
    fn test_load_directory_rejects_files() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.ron");
        fs::write(&path, RON_CATALOG).unwrap();

        let mut loader = CatalogLoader::new();
        assert!(loader.load_directory(&path).is_err());
    }
}
