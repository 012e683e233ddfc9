//! Shared test utilities.
//!
//! Helpers for setting up memory-backed storage and sample records with
//! sensible defaults.

use crate::config::AppConfig;
use crate::entities::roster::RosterRecord;
use crate::storage::{Backend, MemoryStore, Storage};
use chrono::NaiveDate;
use std::time::Duration;

/// A memory-backed [`Storage`] with a long cache TTL. This is the standard
/// setup for store-level tests.
pub fn memory_storage() -> Storage {
    Storage::new(
        Backend::Memory(MemoryStore::default()),
        Duration::from_secs(600),
    )
}

/// A small three-category configuration.
pub fn test_config() -> AppConfig {
    AppConfig {
        categories: vec![
            "sub11".to_string(),
            "sub12".to_string(),
            "sub13".to_string(),
        ],
        storage: crate::config::storage::StorageConfig::default(),
    }
}

/// A complete roster record for "Ana María Ruiz" with the given document id
/// and category.
pub fn sample_record(document: &str, category: &str) -> RosterRecord {
    RosterRecord {
        first_names: "Ana María".to_string(),
        last_names: "Ruiz".to_string(),
        document: document.to_string(),
        birth_date: NaiveDate::from_ymd_opt(2012, 3, 14),
        category: category.to_string(),
        guardian_name: "Carla Ruiz".to_string(),
        address: "Calle 10 #4-32".to_string(),
        guardian_document: "52001002".to_string(),
        email: "carla@example.com".to_string(),
        phone: "3001234567".to_string(),
    }
}
