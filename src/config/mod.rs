//! Application configuration loading from config.toml.

/// Category list configuration.
pub mod categories;
/// Storage backend selection and paths.
pub mod storage;

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;
use storage::StorageConfig;
use tracing::info;

/// The entire application configuration.
#[derive(Debug, Deserialize)]
pub struct AppConfig {
    /// Configured category list; one payment table exists per entry.
    #[serde(default = "categories::default_categories")]
    pub categories: Vec<String>,
    /// Storage backend settings.
    #[serde(default)]
    pub storage: StorageConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            categories: categories::default_categories(),
            storage: StorageConfig::default(),
        }
    }
}

impl AppConfig {
    /// Fails with [`Error::UnknownCategory`] unless `category` is configured.
    pub fn require_category(&self, category: &str) -> Result<()> {
        if self.categories.iter().any(|c| c == category) {
            Ok(())
        } else {
            Err(Error::UnknownCategory {
                category: category.to_string(),
            })
        }
    }
}

/// Loads configuration from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<AppConfig> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads the main application configuration.
///
/// The path comes from `CLUB_DUES_CONFIG` when set, defaulting to
/// `./config.toml`. A missing file is not an error — defaults apply — but a
/// malformed file is. A `DATA_DIR` environment variable overrides the
/// flat-file data directory.
pub fn load_app_configuration() -> Result<AppConfig> {
    let path = std::env::var("CLUB_DUES_CONFIG").unwrap_or_else(|_| "config.toml".to_string());

    let mut config = if Path::new(&path).exists() {
        load_config(&path)?
    } else {
        info!(path = %path, "no config file found, using defaults");
        AppConfig::default()
    };

    if let Ok(dir) = std::env::var("DATA_DIR") {
        config.storage.data_dir = dir.into();
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use storage::BackendKind;

    #[test]
    fn test_parse_full_config() {
        let toml_str = r#"
            categories = ["sub11", "sub12", "sub13"]

            [storage]
            backend = "workbook"
            data_dir = "ledger"
            workbook_path = "ledger/pagos.json"
            cache_ttl_secs = 30
        "#;

        let config: AppConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.categories, vec!["sub11", "sub12", "sub13"]);
        assert!(matches!(config.storage.backend, BackendKind::Workbook));
        assert_eq!(config.storage.cache_ttl_secs, 30);
    }

    #[test]
    fn test_defaults_fill_missing_sections() {
        let config: AppConfig = toml::from_str("").unwrap();
        assert_eq!(config.categories, categories::default_categories());
        assert!(matches!(config.storage.backend, BackendKind::Csv));
        assert_eq!(config.storage.cache_ttl_secs, 60);
    }

    #[test]
    fn test_require_category() {
        let config = AppConfig::default();
        assert!(config.require_category("2011").is_ok());
        assert!(matches!(
            config.require_category("primera"),
            Err(Error::UnknownCategory { .. })
        ));
    }
}
