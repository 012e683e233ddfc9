//! Core business logic — framework-agnostic store operations.
//!
//! Every mutating operation here is a full read-modify-write of one table:
//! load it, change it in memory, save it whole. There is no partial update
//! and no cross-request locking; see the lost-update test in `category`.

/// Category payment matrices: players and monthly dues.
pub mod category;
/// One-off charge ledgers: uniforms and tournaments.
pub mod charges;
/// CSV download and compressed backup generation.
pub mod export;
/// Monthly totals, debtors, and player search.
pub mod report;
/// Biographical roster operations.
pub mod roster;

use crate::config::AppConfig;
use crate::entities::charge::{
    TOURNAMENT_HEADER, TOURNAMENTS_TABLE, UNIFORM_HEADER, UNIFORMS_TABLE,
};
use crate::entities::player::CATEGORY_HEADER;
use crate::entities::roster::{ROSTER_HEADER, ROSTER_TABLE};
use crate::errors::Result;
use crate::storage::Storage;
use tracing::info;

/// Creates every table the application expects, with canonical headers.
///
/// Idempotent: existing tables are left untouched, blank ones get their
/// header back. Run once at bootstrap (`club-dues init`).
pub async fn ensure_all_tables(storage: &Storage, config: &AppConfig) -> Result<()> {
    storage.ensure_table(ROSTER_TABLE, &ROSTER_HEADER).await?;
    for category in &config.categories {
        storage.ensure_table(category, &CATEGORY_HEADER).await?;
    }
    storage.ensure_table(UNIFORMS_TABLE, &UNIFORM_HEADER).await?;
    storage
        .ensure_table(TOURNAMENTS_TABLE, &TOURNAMENT_HEADER)
        .await?;
    info!(
        categories = config.categories.len(),
        "all tables ensured with canonical headers"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{memory_storage, test_config};

    #[tokio::test]
    async fn ensure_all_tables_is_idempotent() -> Result<()> {
        let storage = memory_storage();
        let config = test_config();

        ensure_all_tables(&storage, &config).await?;
        let roster = storage.load_table(ROSTER_TABLE).await?;
        assert_eq!(roster.header, ROSTER_HEADER);

        // Add a row, re-run, and the row must survive.
        let mut with_row = roster;
        with_row.rows.push(vec![String::new(); ROSTER_HEADER.len()]);
        storage.save_table(ROSTER_TABLE, &with_row).await?;
        ensure_all_tables(&storage, &config).await?;
        assert_eq!(storage.load_table(ROSTER_TABLE).await?, with_row);
        Ok(())
    }
}
