//! Biographical roster operations.
//!
//! The roster (`Jugadores`) is keyed by document id. Adding a record also
//! seeds the player's row in the category payment table; the two writes are
//! not atomic — the roster write lands first and stands even if the
//! category write fails. Deleting a record cascades into the category table
//! by deriving the player's listed name from the record being removed.

use super::category;
use crate::config::AppConfig;
use crate::entities::player::PlayerRow;
use crate::entities::roster::{ROSTER_HEADER, ROSTER_TABLE, RosterRecord};
use crate::errors::{Error, Result};
use crate::storage::{Storage, Table};
use tracing::{info, warn};

/// What happened to the category-table side of a roster mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CategoryLink {
    /// The category row was created (or removed, for deletions).
    Linked,
    /// A row with the player's name already existed in the category table.
    AlreadyListed,
    /// No row with the player's name was found to cascade a deletion to.
    NotListed,
    /// The record's category is not configured; the category table was
    /// left alone.
    UnknownCategory,
}

/// A deleted roster record plus the result of its category-table cascade.
#[derive(Debug)]
pub struct RemovedRecord {
    pub record: RosterRecord,
    pub category_link: CategoryLink,
}

/// Loads the roster table with its canonical header, rows padded to width.
pub(crate) async fn load_roster(storage: &Storage) -> Result<Table> {
    let mut table = storage.load_table(ROSTER_TABLE).await?;
    if table.is_blank() {
        return Ok(Table::with_header(&ROSTER_HEADER));
    }
    let width = table.header.len();
    for row in &mut table.rows {
        row.resize(width, String::new());
    }
    Ok(table)
}

/// Typed view of the roster.
pub async fn records(storage: &Storage) -> Result<Vec<RosterRecord>> {
    let table = load_roster(storage).await?;
    table
        .rows
        .iter()
        .map(|row| RosterRecord::from_row(&table.header, row))
        .collect()
}

/// Appends a roster record and seeds the category payment row.
///
/// The category row is keyed by the record's full name. The returned
/// [`CategoryLink`] tells the caller whether that row was created, already
/// existed, or was skipped because the category is not configured.
///
/// # Errors
/// [`Error::EmptyDocument`] when the document id trims to nothing;
/// [`Error::DuplicateDocument`] when the id is already on the roster
/// (string equality, as stored).
pub async fn add_record(
    storage: &Storage,
    config: &AppConfig,
    record: &RosterRecord,
) -> Result<CategoryLink> {
    let document = record.document.trim();
    if document.is_empty() {
        return Err(Error::EmptyDocument);
    }

    let mut table = load_roster(storage).await?;
    if find_document(&table, document).is_some() {
        return Err(Error::DuplicateDocument {
            document: document.to_string(),
        });
    }
    table.rows.push(record.to_row());
    storage.save_table(ROSTER_TABLE, &table).await?;
    info!(document, "roster record added");

    if config.require_category(&record.category).is_err() {
        warn!(
            document,
            category = %record.category,
            "record kept, but its category is not configured; no payment row created"
        );
        return Ok(CategoryLink::UnknownCategory);
    }
    match category::add_player(storage, config, &record.category, &record.full_name()).await {
        Ok(_) => Ok(CategoryLink::Linked),
        Err(Error::DuplicatePlayer { name, category }) => {
            warn!(
                document,
                category = %category,
                name = %name,
                "category table already lists this name; row reused"
            );
            Ok(CategoryLink::AlreadyListed)
        }
        Err(e) => Err(e),
    }
}

/// Removes a roster record and cascades into its category table.
///
/// The category row to remove is derived from the record itself (its stored
/// name and category), so the cascade needs no duplicated key in the
/// category table.
///
/// # Errors
/// [`Error::DocumentNotFound`] when no record matches the document id.
pub async fn delete_record(
    storage: &Storage,
    config: &AppConfig,
    document: &str,
) -> Result<RemovedRecord> {
    let document = document.trim();
    let mut table = load_roster(storage).await?;
    let idx = find_document(&table, document).ok_or_else(|| Error::DocumentNotFound {
        document: document.to_string(),
    })?;

    let row = table.rows.remove(idx);
    let record = RosterRecord::from_row(&table.header, &row)?;
    storage.save_table(ROSTER_TABLE, &table).await?;
    info!(document, "roster record deleted");

    let category_link = if config.require_category(&record.category).is_err() {
        CategoryLink::UnknownCategory
    } else {
        match category::delete_player(storage, config, &record.category, &record.full_name()).await
        {
            Ok(_) => CategoryLink::Linked,
            Err(Error::PlayerNotFound { .. }) => {
                warn!(
                    document,
                    category = %record.category,
                    "no matching row in the category table; nothing to cascade"
                );
                CategoryLink::NotListed
            }
            Err(e) => return Err(e),
        }
    };
    Ok(RemovedRecord {
        record,
        category_link,
    })
}

/// Case-insensitive substring search across every roster field.
pub async fn find_records(storage: &Storage, query: &str) -> Result<Vec<RosterRecord>> {
    let wanted = query.trim().to_lowercase();
    let all = records(storage).await?;
    Ok(all
        .into_iter()
        .filter(|record| {
            record
                .to_row()
                .iter()
                .any(|cell| cell.to_lowercase().contains(&wanted))
        })
        .collect())
}

/// Derived-view join: a roster record together with its category payment
/// row, matched on the record's full name.
pub async fn record_with_payments(
    storage: &Storage,
    config: &AppConfig,
    document: &str,
) -> Result<(RosterRecord, Option<PlayerRow>)> {
    let document = document.trim();
    let all = records(storage).await?;
    let record = all
        .into_iter()
        .find(|r| r.document.trim() == document)
        .ok_or_else(|| Error::DocumentNotFound {
            document: document.to_string(),
        })?;

    if config.require_category(&record.category).is_err() {
        return Ok((record, None));
    }
    let full_name = record.full_name().to_lowercase();
    let payments = category::players(storage, config, &record.category)
        .await?
        .into_iter()
        .find(|p| p.name.trim().to_lowercase() == full_name);
    Ok((record, payments))
}

fn find_document(table: &Table, document: &str) -> Option<usize> {
    let col = table.column("Documento")?;
    table
        .rows
        .iter()
        .position(|row| row.get(col).is_some_and(|d| d.trim() == document))
}
