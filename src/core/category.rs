//! Category payment matrices.
//!
//! One table per configured category: a `Jugador` column plus the twelve
//! month columns. Names are unique within a category, compared
//! case-insensitively; amounts are whole pesos stored as digit strings.

use crate::config::AppConfig;
use crate::entities::month::Month;
use crate::entities::parse_amount;
use crate::entities::player::{CATEGORY_HEADER, PLAYER_COLUMN, PlayerRow};
use crate::errors::{Error, Result};
use crate::storage::{Storage, Table};
use tracing::info;

/// Loads a category table, normalized to the canonical layout.
///
/// A table that was never written comes back as the canonical empty table.
/// Missing month columns are back-filled with `"0"`, a missing `Jugador`
/// column is back-filled empty, empty month cells read as zero, and the
/// `Jugador` column is moved to the front. Columns outside the canonical
/// set are preserved here and rejected later by the typed mapping.
pub async fn load_category(
    storage: &Storage,
    config: &AppConfig,
    category: &str,
) -> Result<Table> {
    config.require_category(category)?;
    let raw = storage.load_table(category).await?;
    Ok(normalize(raw))
}

/// Typed view of a category table.
pub async fn players(
    storage: &Storage,
    config: &AppConfig,
    category: &str,
) -> Result<Vec<PlayerRow>> {
    let table = load_category(storage, config, category).await?;
    table
        .rows
        .iter()
        .map(|row| PlayerRow::from_row(category, &table.header, row))
        .collect()
}

/// Registers a player in a category with all twelve months unpaid.
///
/// # Errors
/// [`Error::EmptyName`] when the name trims to nothing;
/// [`Error::DuplicatePlayer`] when a case-insensitive match already exists.
pub async fn add_player(
    storage: &Storage,
    config: &AppConfig,
    category: &str,
    name: &str,
) -> Result<PlayerRow> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::EmptyName);
    }

    let mut table = load_category(storage, config, category).await?;
    if find_player(&table, name).is_some() {
        return Err(Error::DuplicatePlayer {
            name: name.to_string(),
            category: category.to_string(),
        });
    }

    let player = PlayerRow::new(name);
    table.rows.push(player.to_row());
    storage.save_table(category, &table).await?;
    info!(category, player = name, "player added");
    Ok(player)
}

/// Removes every row matching the name, case-insensitively.
///
/// Returns how many rows were removed.
pub async fn delete_player(
    storage: &Storage,
    config: &AppConfig,
    category: &str,
    name: &str,
) -> Result<usize> {
    let mut table = load_category(storage, config, category).await?;
    let wanted = name.trim().to_lowercase();
    let before = table.rows.len();
    table
        .rows
        .retain(|row| !row.first().is_some_and(|n| n.trim().to_lowercase() == wanted));
    let removed = before - table.rows.len();
    if removed == 0 {
        return Err(Error::PlayerNotFound {
            name: name.trim().to_string(),
            category: category.to_string(),
        });
    }

    storage.save_table(category, &table).await?;
    info!(category, player = name.trim(), removed, "player deleted");
    Ok(removed)
}

/// Records (or overwrites) one player's payment for one month.
///
/// The amount text is normalized first — thousands separators stripped,
/// empty input meaning zero — and the whole table is persisted on success.
///
/// # Errors
/// [`Error::PlayerNotFound`] when no row matches the name;
/// [`Error::InvalidAmount`] when the normalized text is not all digits (the
/// stored table is left untouched).
pub async fn record_payment(
    storage: &Storage,
    config: &AppConfig,
    category: &str,
    name: &str,
    month: Month,
    amount_text: &str,
) -> Result<u64> {
    let mut table = load_category(storage, config, category).await?;
    let row_idx = find_player(&table, name).ok_or_else(|| Error::PlayerNotFound {
        name: name.trim().to_string(),
        category: category.to_string(),
    })?;
    let amount = parse_amount(amount_text)?;

    let col = table.column(month.label()).ok_or_else(|| Error::Schema {
        table: category.to_string(),
        message: format!("missing column '{}'", month.label()),
    })?;
    table.rows[row_idx][col] = amount.to_string();
    storage.save_table(category, &table).await?;
    info!(
        category,
        player = name.trim(),
        month = %month,
        amount,
        "payment recorded"
    );
    Ok(amount)
}

/// Index of the first row whose name matches, case-insensitively.
fn find_player(table: &Table, name: &str) -> Option<usize> {
    let wanted = name.trim().to_lowercase();
    table
        .rows
        .iter()
        .position(|row| row.first().is_some_and(|n| n.trim().to_lowercase() == wanted))
}

/// Brings a raw stored table into the canonical category layout.
fn normalize(table: Table) -> Table {
    if table.is_blank() {
        return Table::with_header(&CATEGORY_HEADER);
    }

    let row_count = table.rows.len();
    let mut columns: Vec<(String, Vec<String>)> = table
        .header
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let cells = table
                .rows
                .iter()
                .map(|row| row.get(i).cloned().unwrap_or_default())
                .collect();
            (label.clone(), cells)
        })
        .collect();

    if !columns.iter().any(|(label, _)| label == PLAYER_COLUMN) {
        columns.insert(0, (PLAYER_COLUMN.to_string(), vec![String::new(); row_count]));
    }
    for month in Month::ALL {
        if !columns.iter().any(|(label, _)| label == month.label()) {
            columns.push((month.label().to_string(), vec!["0".to_string(); row_count]));
        }
    }
    if let Some(pos) = columns.iter().position(|(label, _)| label == PLAYER_COLUMN) {
        let player = columns.remove(pos);
        columns.insert(0, player);
    }
    for (label, cells) in &mut columns {
        if Month::ALL.iter().any(|m| m.label() == label.as_str()) {
            for cell in cells.iter_mut() {
                if cell.trim().is_empty() {
                    *cell = "0".to_string();
                }
            }
        }
    }

    Table {
        header: columns.iter().map(|(label, _)| label.clone()).collect(),
        rows: (0..row_count)
            .map(|r| columns.iter().map(|(_, cells)| cells[r].clone()).collect())
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::{memory_storage, test_config};

    #[tokio::test]
    async fn added_player_has_twelve_unpaid_months() -> Result<()> {
        let storage = memory_storage();
        let config = test_config();

        add_player(&storage, &config, "sub11", "Ana Ruiz").await?;

        let rows = players(&storage, &config, "sub11").await?;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].name, "Ana Ruiz");
        assert_eq!(rows[0].months, [0; 12]);
        Ok(())
    }

    #[tokio::test]
    async fn empty_name_is_rejected() {
        let storage = memory_storage();
        let config = test_config();

        assert!(matches!(
            add_player(&storage, &config, "sub11", "   ").await,
            Err(Error::EmptyName)
        ));
    }

    #[tokio::test]
    async fn duplicate_differing_only_in_case_is_rejected() -> Result<()> {
        let storage = memory_storage();
        let config = test_config();

        add_player(&storage, &config, "sub11", "Ana Ruiz").await?;
        assert!(matches!(
            add_player(&storage, &config, "sub11", "ANA RUIZ").await,
            Err(Error::DuplicatePlayer { .. })
        ));

        // Same name in a different category is fine.
        add_player(&storage, &config, "sub12", "Ana Ruiz").await?;
        Ok(())
    }

    #[tokio::test]
    async fn unknown_category_is_rejected_before_storage() {
        let storage = memory_storage();
        let config = test_config();

        assert!(matches!(
            add_player(&storage, &config, "primera", "Ana Ruiz").await,
            Err(Error::UnknownCategory { .. })
        ));
    }

    #[tokio::test]
    async fn payment_normalizes_and_persists() -> Result<()> {
        let storage = memory_storage();
        let config = test_config();
        add_player(&storage, &config, "sub11", "Ana Ruiz").await?;

        let amount =
            record_payment(&storage, &config, "sub11", "Ana Ruiz", Month::Marzo, "50.000").await?;
        assert_eq!(amount, 50_000);

        let rows = players(&storage, &config, "sub11").await?;
        assert_eq!(rows[0].amount(Month::Marzo), 50_000);
        assert_eq!(rows[0].amount(Month::Abril), 0);
        Ok(())
    }

    #[tokio::test]
    async fn invalid_amount_leaves_table_unchanged() -> Result<()> {
        let storage = memory_storage();
        let config = test_config();
        add_player(&storage, &config, "sub11", "Ana Ruiz").await?;
        record_payment(&storage, &config, "sub11", "Ana Ruiz", Month::Marzo, "50000").await?;

        let result =
            record_payment(&storage, &config, "sub11", "Ana Ruiz", Month::Marzo, "abc").await;
        assert!(matches!(result, Err(Error::InvalidAmount { .. })));

        let rows = players(&storage, &config, "sub11").await?;
        assert_eq!(rows[0].amount(Month::Marzo), 50_000);
        Ok(())
    }

    #[tokio::test]
    async fn payment_for_unknown_player_fails() -> Result<()> {
        let storage = memory_storage();
        let config = test_config();
        add_player(&storage, &config, "sub11", "Ana Ruiz").await?;

        assert!(matches!(
            record_payment(&storage, &config, "sub11", "Pedro", Month::Enero, "1000").await,
            Err(Error::PlayerNotFound { .. })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn delete_matches_case_insensitively() -> Result<()> {
        let storage = memory_storage();
        let config = test_config();
        add_player(&storage, &config, "sub11", "Ana Ruiz").await?;

        assert_eq!(delete_player(&storage, &config, "sub11", "ana ruiz").await?, 1);
        assert!(players(&storage, &config, "sub11").await?.is_empty());

        assert!(matches!(
            delete_player(&storage, &config, "sub11", "ana ruiz").await,
            Err(Error::PlayerNotFound { .. })
        ));
        Ok(())
    }

    #[tokio::test]
    async fn load_backfills_missing_columns() -> Result<()> {
        let storage = memory_storage();
        let config = test_config();

        // A hand-written file: name column not first, February missing.
        let partial = Table {
            header: vec!["Enero".to_string(), PLAYER_COLUMN.to_string()],
            rows: vec![vec!["50000".to_string(), "Ana Ruiz".to_string()]],
        };
        storage.save_table("sub11", &partial).await?;

        let table = load_category(&storage, &config, "sub11").await?;
        assert_eq!(table.header[0], PLAYER_COLUMN);
        assert!(table.header.iter().any(|h| h == "Febrero"));

        let rows = players(&storage, &config, "sub11").await?;
        assert_eq!(rows[0].name, "Ana Ruiz");
        assert_eq!(rows[0].amount(Month::Enero), 50_000);
        assert_eq!(rows[0].amount(Month::Febrero), 0);
        Ok(())
    }

    #[tokio::test]
    async fn never_written_category_loads_as_canonical_empty() -> Result<()> {
        let storage = memory_storage();
        let config = test_config();

        let table = load_category(&storage, &config, "sub11").await?;
        assert_eq!(table, Table::with_header(&CATEGORY_HEADER));
        Ok(())
    }

    /// Documents the lost-update hazard of whole-table replace: when a
    /// second read-modify-write cycle starts after the first one's read but
    /// before its write, the first write is lost. This asserts the current
    /// last-writer-wins behavior, not a guarantee worth preserving.
    #[tokio::test]
    async fn interleaved_read_modify_write_loses_the_first_write() -> Result<()> {
        let storage = memory_storage();
        let config = test_config();
        add_player(&storage, &config, "sub11", "Ana Ruiz").await?;

        let mut first = load_category(&storage, &config, "sub11").await?;
        let mut second = load_category(&storage, &config, "sub11").await?;

        first.rows.push(PlayerRow::new("Pedro Gil").to_row());
        storage.save_table("sub11", &first).await?;

        second.rows.push(PlayerRow::new("Luis Vera").to_row());
        storage.save_table("sub11", &second).await?;

        let names: Vec<String> = players(&storage, &config, "sub11")
            .await?
            .into_iter()
            .map(|p| p.name)
            .collect();
        assert_eq!(names, vec!["Ana Ruiz", "Luis Vera"]);
        Ok(())
    }
}
