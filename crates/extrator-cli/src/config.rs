//! Configuration loading for the CLI.

use std::path::{Path, PathBuf};

use tracing::debug;

use extrator_core::ExtratorConfig;

/// Per-user configuration file location.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("extrator")
        .join("config.json")
}

/// Load the explicit config file if given, else the per-user one if present,
/// else defaults.
pub fn load(explicit: Option<&Path>) -> anyhow::Result<ExtratorConfig> {
    if let Some(path) = explicit {
        debug!("Loading config from {}", path.display());
        return Ok(ExtratorConfig::from_file(path)?);
    }

    let path = default_config_path();
    if path.is_file() {
        debug!("Loading config from {}", path.display());
        Ok(ExtratorConfig::from_file(&path)?)
    } else {
        Ok(ExtratorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.json");
        std::fs::write(&path, r#"{"output": {"sheet_name": "lote"}}"#).unwrap();

        let config = load(Some(&path)).unwrap();
        assert_eq!(config.output.sheet_name, "lote");
        assert_eq!(config.extraction.claimant_label, "Requerente");
    }

    #[test]
    fn test_missing_explicit_path_fails() {
        assert!(load(Some(Path::new("/nonexistent/extrator.json"))).is_err());
    }

    #[test]
    fn test_default_path_location() {
        let path = default_config_path();
        assert!(path.ends_with("extrator/config.json"));
    }
}
