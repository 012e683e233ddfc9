//! Flat-file backend: one delimited text file per table.
//!
//! Files live under a data directory that is created lazily on first write.
//! The format is plain CSV with double-quote escaping; every cell is text,
//! which sidesteps numeric-formatting surprises in other spreadsheet tools.

use super::{Table, TableStore};
use crate::errors::Result;
use std::io::ErrorKind;
use std::path::PathBuf;

pub struct CsvFileStore {
    dir: PathBuf,
}

impl CsvFileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn table_path(&self, name: &str) -> PathBuf {
        self.dir.join(format!("{name}.csv"))
    }
}

impl TableStore for CsvFileStore {
    async fn load_table(&self, name: &str) -> Result<Table> {
        match tokio::fs::read_to_string(self.table_path(name)).await {
            Ok(contents) => Ok(parse_table(&contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Table::default()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save_table(&self, name: &str, table: &Table) -> Result<()> {
        tokio::fs::create_dir_all(&self.dir).await?;
        tokio::fs::write(self.table_path(name), render_table(table)).await?;
        Ok(())
    }

    async fn ensure_table(&self, name: &str, header: &[&str]) -> Result<()> {
        let existing = self.load_table(name).await?;
        if existing.is_blank() {
            self.save_table(name, &Table::with_header(header)).await?;
        }
        Ok(())
    }
}

/// Parses CSV text into a table. The first line is the header; an empty
/// input yields an empty table.
pub fn parse_table(text: &str) -> Table {
    let mut lines = text.lines().filter(|l| !l.trim_end_matches('\r').is_empty());
    let header = match lines.next() {
        Some(line) => parse_row(line.trim_end_matches('\r')),
        None => return Table::default(),
    };
    let rows = lines
        .map(|line| parse_row(line.trim_end_matches('\r')))
        .collect();
    Table { header, rows }
}

/// Renders a table as CSV text, header first, one row per line.
pub fn render_table(table: &Table) -> String {
    let mut out = String::new();
    render_row(&mut out, &table.header);
    for row in &table.rows {
        render_row(&mut out, row);
    }
    out
}

fn render_row(out: &mut String, cells: &[String]) {
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        if cell.contains([',', '"', '\n']) {
            out.push('"');
            out.push_str(&cell.replace('"', "\"\""));
            out.push('"');
        } else {
            out.push_str(cell);
        }
    }
    out.push('\n');
}

fn parse_row(line: &str) -> Vec<String> {
    let mut result = Vec::new();
    let mut current_field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                if chars.peek() == Some(&'"') && in_quotes {
                    // Doubled quote inside a quoted field
                    current_field.push('"');
                    chars.next();
                } else {
                    in_quotes = !in_quotes;
                }
            }
            ',' if !in_quotes => {
                result.push(std::mem::take(&mut current_field));
            }
            _ => current_field.push(c),
        }
    }
    result.push(current_field);
    result
}
