//! Typed records for each table kind.
//!
//! Tables store strings; these types are the statically-typed view of each
//! table kind, mapped at the storage boundary. The mapping fails closed:
//! unknown columns and malformed cells are schema errors, never silently
//! coerced.

/// Payment amount text normalization.
pub mod amount;
/// Uniform and tournament charge rows.
pub mod charge;
/// The twelve fixed month columns.
pub mod month;
/// A player's row in a category payment matrix.
pub mod player;
/// Biographical roster records.
pub mod roster;

pub use amount::parse_amount;
pub use charge::{TournamentCharge, UniformCharge};
pub use month::Month;
pub use player::PlayerRow;
pub use roster::RosterRecord;

use crate::errors::{Error, Result};
use chrono::NaiveDate;

/// Label-addressed access to one table row, failing closed on columns
/// outside the expected set. Shared by every record mapper.
pub(crate) struct Cells<'a> {
    table: &'a str,
    header: &'a [String],
    row: &'a [String],
}

impl<'a> Cells<'a> {
    pub(crate) fn new(
        table: &'a str,
        expected: &[&str],
        header: &'a [String],
        row: &'a [String],
    ) -> Result<Self> {
        if let Some(unknown) = header.iter().find(|h| !expected.contains(&h.as_str())) {
            return Err(Error::Schema {
                table: table.to_string(),
                message: format!("unexpected column '{unknown}'"),
            });
        }
        Ok(Self { table, header, row })
    }

    /// The cell under `label`; a cell missing from a short row reads as "".
    pub(crate) fn get(&self, label: &str) -> Result<&'a str> {
        let idx = self
            .header
            .iter()
            .position(|h| h == label)
            .ok_or_else(|| Error::Schema {
                table: self.table.to_string(),
                message: format!("missing column '{label}'"),
            })?;
        Ok(self.row.get(idx).map_or("", String::as_str))
    }

    pub(crate) fn date(&self, label: &str) -> Result<NaiveDate> {
        let text = self.get(label)?.trim();
        NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|_| Error::Schema {
            table: self.table.to_string(),
            message: format!("invalid date '{text}', expected YYYY-MM-DD"),
        })
    }

    pub(crate) fn amount(&self, label: &str) -> Result<u64> {
        let text = self.get(label)?;
        parse_amount(text).map_err(|_| Error::Schema {
            table: self.table.to_string(),
            message: format!("column '{label}': invalid amount '{text}'"),
        })
    }
}
