//! Configuration structures for the extraction pipeline.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ExtratorError, Result};

/// Main configuration for the extrator pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtratorConfig {
    /// Field extraction configuration.
    pub extraction: ExtractionConfig,

    /// PDF discovery and text extraction configuration.
    pub pdf: PdfConfig,

    /// Output writer configuration.
    pub output: OutputConfig,
}

/// Field extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractionConfig {
    /// Label whose value fills the claimant column.
    pub claimant_label: String,

    /// Number of characters examined after a label.
    pub label_window: usize,

    /// Rewrite the filing date as `YYYY-MM-DD` when it parses as a calendar date.
    pub normalize_dates: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            claimant_label: "Requerente".to_string(),
            label_window: 300,
            normalize_dates: false,
        }
    }
}

/// PDF discovery and text extraction configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// File extension (without the dot) of documents to process.
    pub extension: String,

    /// Match the extension case-sensitively.
    pub case_sensitive: bool,

    /// Separator inserted between the text of consecutive pages.
    pub page_separator: String,

    /// Retry with the whole-document decoder when every page comes back blank.
    pub fallback_extractor: bool,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            extension: "pdf".to_string(),
            case_sensitive: true,
            page_separator: "\n".to_string(),
            fallback_extractor: true,
        }
    }
}

/// Output writer configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Prefix CSV output with a UTF-8 byte order mark.
    pub csv_bom: bool,

    /// Worksheet name used for spreadsheet output.
    pub sheet_name: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            csv_bom: true,
            sheet_name: "resultados".to_string(),
        }
    }
}

impl ExtratorConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| ExtratorError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| ExtratorError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExtratorConfig::default();
        assert_eq!(config.extraction.claimant_label, "Requerente");
        assert_eq!(config.extraction.label_window, 300);
        assert!(!config.extraction.normalize_dates);
        assert_eq!(config.pdf.extension, "pdf");
        assert_eq!(config.pdf.page_separator, "\n");
        assert!(config.output.csv_bom);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: ExtratorConfig =
            serde_json::from_str(r#"{"extraction": {"normalize_dates": true}}"#).unwrap();
        assert!(config.extraction.normalize_dates);
        assert_eq!(config.extraction.claimant_label, "Requerente");
        assert_eq!(config.output.sheet_name, "resultados");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");

        let mut config = ExtratorConfig::default();
        config.extraction.claimant_label = "Interessado".to_string();
        config.save(&path).unwrap();

        let loaded = ExtratorConfig::from_file(&path).unwrap();
        assert_eq!(loaded.extraction.claimant_label, "Interessado");
    }

    #[test]
    fn test_invalid_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = ExtratorConfig::from_file(&path).unwrap_err();
        assert!(matches!(err, ExtratorError::Config(_)));
    }
}
