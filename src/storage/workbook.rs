//! Single-document backend: every table lives inside one JSON file.
//!
//! This mirrors the remote-document storage variant of the system this crate
//! replaces, where the whole spreadsheet file was downloaded, patched in
//! memory, and re-uploaded on every mutation. Saving one table rewrites the
//! entire document, changed or not.

use super::{Table, TableStore};
use crate::errors::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::PathBuf;

#[derive(Debug, Default, Serialize, Deserialize)]
struct Workbook {
    tables: BTreeMap<String, Table>,
}

pub struct WorkbookStore {
    path: PathBuf,
}

impl WorkbookStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read_document(&self) -> Result<Workbook> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => Ok(serde_json::from_str(&contents)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Workbook::default()),
            Err(e) => Err(e.into()),
        }
    }

    async fn write_document(&self, workbook: &Workbook) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        let contents = serde_json::to_string_pretty(workbook)?;
        tokio::fs::write(&self.path, contents).await?;
        Ok(())
    }
}

impl TableStore for WorkbookStore {
    async fn load_table(&self, name: &str) -> Result<Table> {
        let workbook = self.read_document().await?;
        Ok(workbook.tables.get(name).cloned().unwrap_or_default())
    }

    async fn save_table(&self, name: &str, table: &Table) -> Result<()> {
        // Whole-document replace: read everything, swap one table, rewrite.
        let mut workbook = self.read_document().await?;
        workbook.tables.insert(name.to_string(), table.clone());
        self.write_document(&workbook).await
    }

    async fn ensure_table(&self, name: &str, header: &[&str]) -> Result<()> {
        let mut workbook = self.read_document().await?;
        let blank = workbook.tables.get(name).is_none_or(Table::is_blank);
        if blank {
            workbook
                .tables
                .insert(name.to_string(), Table::with_header(header));
            self.write_document(&workbook).await?;
        }
        Ok(())
    }
}
