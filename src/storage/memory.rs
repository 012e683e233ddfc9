//! In-memory backend: a process-local map of tables.
//!
//! Used by the test suite and by the `memory` backend setting for throwaway
//! runs. Shares the whole-table contract with the persistent backends.

use super::{Table, TableStore};
use crate::errors::Result;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<HashMap<String, Table>>,
}

impl TableStore for MemoryStore {
    async fn load_table(&self, name: &str) -> Result<Table> {
        let tables = self.tables.read().await;
        Ok(tables.get(name).cloned().unwrap_or_default())
    }

    async fn save_table(&self, name: &str, table: &Table) -> Result<()> {
        let mut tables = self.tables.write().await;
        tables.insert(name.to_string(), table.clone());
        Ok(())
    }

    async fn ensure_table(&self, name: &str, header: &[&str]) -> Result<()> {
        let mut tables = self.tables.write().await;
        let blank = tables.get(name).is_none_or(Table::is_blank);
        if blank {
            tables.insert(name.to_string(), Table::with_header(header));
        }
        Ok(())
    }
}
