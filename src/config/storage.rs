//! Storage backend selection and paths.

use serde::Deserialize;
use std::path::PathBuf;

/// Which backend persists the tables.
#[derive(Clone, Copy, Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    /// One delimited text file per table under `data_dir`.
    Csv,
    /// All tables inside one JSON document at `workbook_path`.
    Workbook,
    /// Process-local tables, discarded on exit.
    Memory,
}

/// Storage backend settings.
#[derive(Debug, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_backend")]
    pub backend: BackendKind,
    /// Flat-file data directory, created lazily.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Workbook document path.
    #[serde(default = "default_workbook_path")]
    pub workbook_path: PathBuf,
    /// How long a cached table snapshot stays fresh.
    #[serde(default = "default_cache_ttl_secs")]
    pub cache_ttl_secs: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            data_dir: default_data_dir(),
            workbook_path: default_workbook_path(),
            cache_ttl_secs: default_cache_ttl_secs(),
        }
    }
}

fn default_backend() -> BackendKind {
    BackendKind::Csv
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_workbook_path() -> PathBuf {
    PathBuf::from("data/pagos.json")
}

fn default_cache_ttl_secs() -> u64 {
    60
}
