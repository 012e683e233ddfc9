//! Biographical roster records.
//!
//! The roster is one table (`Jugadores`) with ten fixed columns, keyed by
//! the player's document id. Column labels are the stored wire format and
//! stay in Spanish; field names follow the crate's conventions.

use super::Cells;
use crate::errors::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Name of the roster table.
pub const ROSTER_TABLE: &str = "Jugadores";

/// Fixed roster columns, in storage order.
pub const ROSTER_HEADER: [&str; 10] = [
    "Nombres",
    "Apellidos",
    "Documento",
    "Fecha nacimiento",
    "Categoría",
    "Nombre acudiente",
    "Dirección",
    "Cédula acudiente",
    "Correo",
    "Contacto",
];

/// One player's biographical record.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RosterRecord {
    /// Given names.
    pub first_names: String,
    /// Family names.
    pub last_names: String,
    /// National document id; required, unique across the roster.
    pub document: String,
    /// Birth date, when known.
    pub birth_date: Option<NaiveDate>,
    /// Category the player is assigned to.
    pub category: String,
    /// Guardian's full name.
    pub guardian_name: String,
    /// Home address.
    pub address: String,
    /// Guardian's document id.
    pub guardian_document: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
}

impl RosterRecord {
    /// The name under which this player appears in category sheets:
    /// given names and family names joined with a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_names.trim(), self.last_names.trim())
            .trim()
            .to_string()
    }

    /// Maps a roster table row into a typed record, failing closed on
    /// unknown columns and malformed birth dates.
    pub fn from_row(header: &[String], row: &[String]) -> Result<Self> {
        let cells = Cells::new(ROSTER_TABLE, &ROSTER_HEADER, header, row)?;

        let birth_text = cells.get("Fecha nacimiento")?.trim();
        let birth_date = if birth_text.is_empty() {
            None
        } else {
            Some(cells.date("Fecha nacimiento")?)
        };

        Ok(Self {
            first_names: cells.get("Nombres")?.to_string(),
            last_names: cells.get("Apellidos")?.to_string(),
            document: cells.get("Documento")?.to_string(),
            birth_date,
            category: cells.get("Categoría")?.to_string(),
            guardian_name: cells.get("Nombre acudiente")?.to_string(),
            address: cells.get("Dirección")?.to_string(),
            guardian_document: cells.get("Cédula acudiente")?.to_string(),
            email: cells.get("Correo")?.to_string(),
            phone: cells.get("Contacto")?.to_string(),
        })
    }

    /// Renders the record as a row in [`ROSTER_HEADER`] order.
    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.first_names.clone(),
            self.last_names.clone(),
            self.document.clone(),
            self.birth_date.map(|d| d.to_string()).unwrap_or_default(),
            self.category.clone(),
            self.guardian_name.clone(),
            self.address.clone(),
            self.guardian_document.clone(),
            self.email.clone(),
            self.phone.clone(),
        ]
    }
}
