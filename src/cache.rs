//! Time-boxed read cache for table snapshots.
//!
//! Key is the table name; value is the table snapshot plus the instant it
//! was fetched. Entries expire after a fixed time-to-live and a successful
//! write invalidates exactly the written key — never the others.

use crate::storage::Table;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::trace;

struct CachedTable {
    table: Table,
    fetched_at: Instant,
}

/// Read-through snapshot cache keyed by table name.
pub struct TableCache {
    ttl: Duration,
    entries: RwLock<HashMap<String, CachedTable>>,
}

impl TableCache {
    /// Creates a cache whose entries stay fresh for `ttl`. A zero `ttl`
    /// disables caching: every entry is stale the moment it is stored.
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entries: RwLock::new(HashMap::new()),
        }
    }

    /// Returns the cached snapshot for `name` if it is still fresh.
    pub async fn get(&self, name: &str) -> Option<Table> {
        let entries = self.entries.read().await;
        let entry = entries.get(name)?;
        if entry.fetched_at.elapsed() >= self.ttl {
            trace!(table = name, "cache entry expired");
            return None;
        }
        trace!(table = name, "cache hit");
        Some(entry.table.clone())
    }

    /// Stores a snapshot for `name`, stamping it with the current instant.
    pub async fn put(&self, name: &str, table: Table) {
        let mut entries = self.entries.write().await;
        entries.insert(
            name.to_string(),
            CachedTable {
                table,
                fetched_at: Instant::now(),
            },
        );
    }

    /// Drops the entry for `name`, leaving every other key untouched.
    pub async fn invalidate(&self, name: &str) {
        let mut entries = self.entries.write().await;
        if entries.remove(name).is_some() {
            trace!(table = name, "cache entry invalidated");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_table() -> Table {
        Table {
            header: vec!["Jugador".to_string()],
            rows: vec![vec!["Ana Ruiz".to_string()]],
        }
    }

    #[tokio::test]
    async fn fresh_entry_is_served() {
        let cache = TableCache::new(Duration::from_secs(600));
        cache.put("sub11", sample_table()).await;
        assert_eq!(cache.get("sub11").await, Some(sample_table()));
    }

    #[tokio::test]
    async fn zero_ttl_expires_immediately() {
        let cache = TableCache::new(Duration::ZERO);
        cache.put("sub11", sample_table()).await;
        assert_eq!(cache.get("sub11").await, None);
    }

    #[tokio::test]
    async fn invalidate_drops_only_the_written_key() {
        let cache = TableCache::new(Duration::from_secs(600));
        cache.put("sub11", sample_table()).await;
        cache.put("sub12", sample_table()).await;

        cache.invalidate("sub11").await;

        assert_eq!(cache.get("sub11").await, None);
        assert_eq!(cache.get("sub12").await, Some(sample_table()));
    }
}
