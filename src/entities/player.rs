//! A player's row in a category payment matrix.

use super::Cells;
use super::month::Month;
use crate::errors::Result;
use serde::{Deserialize, Serialize};

/// Label of the player-name column in every category sheet.
pub const PLAYER_COLUMN: &str = "Jugador";

/// Canonical header of a category table: the player name followed by the
/// twelve month columns in calendar order.
pub const CATEGORY_HEADER: [&str; 13] = [
    PLAYER_COLUMN,
    "Enero",
    "Febrero",
    "Marzo",
    "Abril",
    "Mayo",
    "Junio",
    "Julio",
    "Agosto",
    "Septiembre",
    "Octubre",
    "Noviembre",
    "Diciembre",
];

/// One player's payment matrix row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerRow {
    /// Player's full name as listed in the category sheet.
    pub name: String,
    /// Amount paid per month, January through December. Zero means unpaid.
    pub months: [u64; 12],
}

impl PlayerRow {
    /// A freshly registered player: all twelve months unpaid.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            months: [0; 12],
        }
    }

    /// Amount recorded for the given month.
    pub fn amount(&self, month: Month) -> u64 {
        self.months[month.index()]
    }

    /// True when nothing has been recorded for the given month.
    pub fn owes(&self, month: Month) -> bool {
        self.amount(month) == 0
    }

    /// Maps a normalized table row into a typed record, failing closed.
    ///
    /// Columns are matched by label, so a sheet whose months were reordered
    /// by hand still maps correctly; a column outside the canonical set is a
    /// schema error, as is a non-digit amount cell.
    pub fn from_row(table: &str, header: &[String], row: &[String]) -> Result<Self> {
        let cells = Cells::new(table, &CATEGORY_HEADER, header, row)?;
        let name = cells.get(PLAYER_COLUMN)?.to_string();
        let mut months = [0u64; 12];
        for month in Month::ALL {
            months[month.index()] = cells.amount(month.label())?;
        }
        Ok(Self { name, months })
    }

    /// Renders the record back into a row in canonical column order.
    pub fn to_row(&self) -> Vec<String> {
        let mut row = Vec::with_capacity(CATEGORY_HEADER.len());
        row.push(self.name.clone());
        row.extend(self.months.iter().map(u64::to_string));
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    fn canonical_header() -> Vec<String> {
        CATEGORY_HEADER.iter().map(|h| (*h).to_string()).collect()
    }

    #[test]
    fn header_matches_month_order() {
        for (i, month) in Month::ALL.into_iter().enumerate() {
            assert_eq!(CATEGORY_HEADER[i + 1], month.label());
        }
    }

    #[test]
    fn row_round_trips() {
        let mut player = PlayerRow::new("Ana Ruiz");
        player.months[Month::Marzo.index()] = 50_000;

        let row = player.to_row();
        let decoded = PlayerRow::from_row("sub11", &canonical_header(), &row).unwrap();
        assert_eq!(decoded, player);
    }

    #[test]
    fn reordered_columns_still_map_by_label() {
        let header = vec![
            "Marzo".to_string(),
            PLAYER_COLUMN.to_string(),
            "Enero".to_string(),
            "Febrero".to_string(),
            "Abril".to_string(),
            "Mayo".to_string(),
            "Junio".to_string(),
            "Julio".to_string(),
            "Agosto".to_string(),
            "Septiembre".to_string(),
            "Octubre".to_string(),
            "Noviembre".to_string(),
            "Diciembre".to_string(),
        ];
        let mut row = vec!["50000".to_string(), "Ana Ruiz".to_string()];
        row.extend(std::iter::repeat_n("0".to_string(), 11));

        let decoded = PlayerRow::from_row("sub11", &header, &row).unwrap();
        assert_eq!(decoded.name, "Ana Ruiz");
        assert_eq!(decoded.amount(Month::Marzo), 50_000);
        assert_eq!(decoded.amount(Month::Enero), 0);
    }

    #[test]
    fn unknown_column_fails_closed() {
        let mut header = canonical_header();
        header.push("Saldo".to_string());
        let mut row = PlayerRow::new("Ana Ruiz").to_row();
        row.push("99".to_string());

        assert!(matches!(
            PlayerRow::from_row("sub11", &header, &row),
            Err(Error::Schema { .. })
        ));
    }

    #[test]
    fn corrupt_amount_cell_fails_closed() {
        let mut row = PlayerRow::new("Ana Ruiz").to_row();
        row[1] = "cincuenta".to_string();

        assert!(matches!(
            PlayerRow::from_row("sub11", &canonical_header(), &row),
            Err(Error::Schema { .. })
        ));
    }

    #[test]
    fn short_rows_read_missing_cells_as_zero() {
        let row = vec!["Ana Ruiz".to_string()];
        let decoded = PlayerRow::from_row("sub11", &canonical_header(), &row).unwrap();
        assert_eq!(decoded.months, [0; 12]);
    }
}
