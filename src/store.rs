// src/store.rs
use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;
use tracing::info;

use crate::config::AppConfig;
use crate::fixture::builtin_cv;
use crate::types::{CvRecord, Section};

/// Read-only CV data shared by the HTTP handlers and the report command.
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct CvStore {
    record: CvRecord,
}

impl CvStore {
    pub fn new(record: CvRecord) -> Self {
        Self { record }
    }

    pub fn builtin() -> Result<Self> {
        let record = CvRecord::from_value(builtin_cv()).context("Invalid built-in CV data")?;
        Ok(Self::new(record))
    }

    /// Load a CV document from a `.json`, `.yaml` or `.yml` file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read CV data: {}", path.display()))?;

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_lowercase());

        let value: Value = match extension.as_deref() {
            Some("json") => serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON CV data: {}", path.display()))?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML CV data: {}", path.display()))?,
            _ => anyhow::bail!(
                "Unsupported CV data file: {}. Use .json, .yaml or .yml",
                path.display()
            ),
        };

        let record = CvRecord::from_value(value)
            .with_context(|| format!("Invalid CV data in {}", path.display()))?;

        info!(
            "Loaded CV data from {} ({} sections)",
            path.display(),
            record.as_map().len()
        );
        Ok(Self::new(record))
    }

    pub fn from_config(config: &AppConfig) -> Result<Self> {
        match &config.cv_data_path {
            Some(path) => Self::load(path),
            None => {
                info!("No CV data path configured, serving built-in CV");
                Self::builtin()
            }
        }
    }

    pub fn record(&self) -> &CvRecord {
        &self.record
    }

    /// Raw section lookup. Only absence is a miss; empty content is returned as is.
    pub fn section(&self, section: Section) -> Option<&Value> {
        self.record.get(section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_builtin_has_every_section() {
        let store = CvStore::builtin().unwrap();
        for section in Section::ALL {
            assert!(store.section(section).is_some(), "missing {}", section);
        }
    }

    #[test]
    fn test_load_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(
            &dir,
            "cv.yaml",
            "Personal:\n  name: Jane Doe\n  email: jane@x.com\nCore Competencies:\n  - Rust\n",
        );

        let store = CvStore::load(&path).unwrap();
        let personal = store.section(Section::Personal).unwrap();
        assert_eq!(personal["email"], "jane@x.com");
        assert_eq!(
            store.section(Section::CoreCompetencies),
            Some(&serde_json::json!(["Rust"]))
        );
        assert!(store.section(Section::Education).is_none());
    }

    #[test]
    fn test_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "cv.json", r#"{"Education": []}"#);

        let store = CvStore::load(&path).unwrap();
        assert_eq!(store.section(Section::Education), Some(&serde_json::json!([])));
    }

    #[test]
    fn test_load_rejects_unknown_extension_and_non_object() {
        let dir = tempfile::tempdir().unwrap();
        let txt = write_file(&dir, "cv.txt", "{}");
        assert!(CvStore::load(&txt).is_err());

        let list = write_file(&dir, "cv.json", "[1, 2]");
        assert!(CvStore::load(&list).is_err());
    }

    #[test]
    fn test_from_config_defaults_to_builtin() {
        let store = CvStore::from_config(&AppConfig::default()).unwrap();
        assert!(!store.record().is_empty());
    }
}
