//! Pluggable table storage.
//!
//! Every persisted collection in this system is a spreadsheet-shaped
//! [`Table`]: a fixed column header plus string-valued rows. Backends expose
//! the same whole-table contract — load, full-replace save, and idempotent
//! header creation — so the domain layer never sees which medium it is
//! talking to. There is no partial write: every mutation is read everything,
//! change it in memory, write everything back.

/// Flat-file backend: one delimited text file per table.
pub mod csv_file;
/// In-memory backend for tests and ephemeral runs.
pub mod memory;
/// Single-document backend: all tables inside one JSON file.
pub mod workbook;

use crate::cache::TableCache;
use crate::config::storage::{BackendKind, StorageConfig};
use crate::errors::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

pub use csv_file::CsvFileStore;
pub use memory::MemoryStore;
pub use workbook::WorkbookStore;

/// An ordered collection of rows sharing a fixed column header.
///
/// All cells are strings; numeric interpretation happens at the typed-record
/// boundary in `entities`, never here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Column labels, in storage order.
    pub header: Vec<String>,
    /// Data rows. Rows may be shorter than the header when read from a
    /// hand-edited file; normalization pads them before typed mapping.
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Creates an empty table with the given header and no rows.
    pub fn with_header(header: &[&str]) -> Self {
        Self {
            header: header.iter().map(|h| (*h).to_string()).collect(),
            rows: Vec::new(),
        }
    }

    /// Index of the first column with the given label.
    pub fn column(&self, label: &str) -> Option<usize> {
        self.header.iter().position(|h| h == label)
    }

    /// True when the table carries no usable header: either it was never
    /// written, or the stored header row is entirely empty cells.
    pub fn is_blank(&self) -> bool {
        self.header.iter().all(|h| h.trim().is_empty())
    }
}

/// The storage contract every backend satisfies.
///
/// `load_table` returns an empty [`Table`] for a table that was never
/// written. `save_table` replaces the entire stored table. `ensure_table` is
/// idempotent: it creates the table with the given header when absent, and
/// rewrites the header when the table exists but is blank.
#[allow(async_fn_in_trait)]
pub trait TableStore {
    async fn load_table(&self, name: &str) -> Result<Table>;
    async fn save_table(&self, name: &str, table: &Table) -> Result<()>;
    async fn ensure_table(&self, name: &str, header: &[&str]) -> Result<()>;
}

/// The configured backend, dispatched by variant.
pub enum Backend {
    CsvFile(CsvFileStore),
    Workbook(WorkbookStore),
    Memory(MemoryStore),
}

impl TableStore for Backend {
    async fn load_table(&self, name: &str) -> Result<Table> {
        match self {
            Self::CsvFile(store) => store.load_table(name).await,
            Self::Workbook(store) => store.load_table(name).await,
            Self::Memory(store) => store.load_table(name).await,
        }
    }

    async fn save_table(&self, name: &str, table: &Table) -> Result<()> {
        match self {
            Self::CsvFile(store) => store.save_table(name, table).await,
            Self::Workbook(store) => store.save_table(name, table).await,
            Self::Memory(store) => store.save_table(name, table).await,
        }
    }

    async fn ensure_table(&self, name: &str, header: &[&str]) -> Result<()> {
        match self {
            Self::CsvFile(store) => store.ensure_table(name, header).await,
            Self::Workbook(store) => store.ensure_table(name, header).await,
            Self::Memory(store) => store.ensure_table(name, header).await,
        }
    }
}

/// A backend wrapped with the read cache. This is what the domain layer
/// talks to.
///
/// Reads are served from the cache while the snapshot is fresh; a successful
/// save invalidates exactly the written table's cache entry and no other.
pub struct Storage {
    backend: Backend,
    cache: TableCache,
}

impl Storage {
    /// Wraps a backend with a read cache of the given time-to-live.
    pub fn new(backend: Backend, cache_ttl: Duration) -> Self {
        Self {
            backend,
            cache: TableCache::new(cache_ttl),
        }
    }

    /// Builds the backend selected by the storage configuration.
    pub fn from_config(config: &StorageConfig) -> Self {
        let backend = match config.backend {
            BackendKind::Csv => Backend::CsvFile(CsvFileStore::new(config.data_dir.clone())),
            BackendKind::Workbook => Backend::Workbook(WorkbookStore::new(&config.workbook_path)),
            BackendKind::Memory => Backend::Memory(MemoryStore::default()),
        };
        Self::new(backend, Duration::from_secs(config.cache_ttl_secs))
    }

    /// Loads a table, serving a cached snapshot when one is still fresh.
    pub async fn load_table(&self, name: &str) -> Result<Table> {
        if let Some(table) = self.cache.get(name).await {
            return Ok(table);
        }
        let table = self.backend.load_table(name).await?;
        self.cache.put(name, table.clone()).await;
        Ok(table)
    }

    /// Replaces the stored table and invalidates its cache entry.
    pub async fn save_table(&self, name: &str, table: &Table) -> Result<()> {
        self.backend.save_table(name, table).await?;
        self.cache.invalidate(name).await;
        debug!(table = name, rows = table.rows.len(), "table saved");
        Ok(())
    }

    /// Creates the table with the given header when absent or blank.
    ///
    /// The cache entry is dropped because this call may have written a
    /// header; callers only run it at bootstrap, never on the read path.
    pub async fn ensure_table(&self, name: &str, header: &[&str]) -> Result<()> {
        self.backend.ensure_table(name, header).await?;
        self.cache.invalidate(name).await;
        Ok(())
    }
}
