//! One-off charge rows: uniform purchases and tournament fees.
//!
//! Both ledgers are append-only; rows reference players and categories by
//! copied name, not by identity, so they survive roster changes unmodified.

use super::Cells;
use crate::errors::Result;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Name of the uniforms ledger table.
pub const UNIFORMS_TABLE: &str = "Uniformes";

/// Uniform ledger columns, in storage order.
pub const UNIFORM_HEADER: [&str; 5] = ["Jugador", "Categoría", "Fecha", "Valor", "Observaciones"];

/// Name of the tournaments ledger table.
pub const TOURNAMENTS_TABLE: &str = "Torneos";

/// Tournament ledger columns, in storage order.
pub const TOURNAMENT_HEADER: [&str; 6] = [
    "Jugador",
    "Categoría",
    "Nombre Torneo",
    "Fecha",
    "Valor",
    "Observaciones",
];

/// A uniform purchase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UniformCharge {
    /// Player the charge applies to.
    pub player: String,
    /// Category the player belongs to.
    pub category: String,
    /// Day of the purchase.
    pub date: NaiveDate,
    /// Amount charged.
    pub amount: u64,
    /// Free-text note.
    pub notes: String,
}

impl UniformCharge {
    pub fn from_row(header: &[String], row: &[String]) -> Result<Self> {
        let cells = Cells::new(UNIFORMS_TABLE, &UNIFORM_HEADER, header, row)?;
        Ok(Self {
            player: cells.get("Jugador")?.to_string(),
            category: cells.get("Categoría")?.to_string(),
            date: cells.date("Fecha")?,
            amount: cells.amount("Valor")?,
            notes: cells.get("Observaciones")?.to_string(),
        })
    }

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.player.clone(),
            self.category.clone(),
            self.date.to_string(),
            self.amount.to_string(),
            self.notes.clone(),
        ]
    }
}

/// A tournament fee.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TournamentCharge {
    /// Player the charge applies to.
    pub player: String,
    /// Category the player belongs to.
    pub category: String,
    /// Name of the tournament.
    pub tournament: String,
    /// Day of the tournament.
    pub date: NaiveDate,
    /// Amount charged.
    pub amount: u64,
    /// Free-text note.
    pub notes: String,
}

impl TournamentCharge {
    pub fn from_row(header: &[String], row: &[String]) -> Result<Self> {
        let cells = Cells::new(TOURNAMENTS_TABLE, &TOURNAMENT_HEADER, header, row)?;
        Ok(Self {
            player: cells.get("Jugador")?.to_string(),
            category: cells.get("Categoría")?.to_string(),
            tournament: cells.get("Nombre Torneo")?.to_string(),
            date: cells.date("Fecha")?,
            amount: cells.amount("Valor")?,
            notes: cells.get("Observaciones")?.to_string(),
        })
    }

    pub fn to_row(&self) -> Vec<String> {
        vec![
            self.player.clone(),
            self.category.clone(),
            self.tournament.clone(),
            self.date.to_string(),
            self.amount.to_string(),
            self.notes.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    fn uniform_header() -> Vec<String> {
        UNIFORM_HEADER.iter().map(|h| (*h).to_string()).collect()
    }

    fn sample_uniform() -> UniformCharge {
        UniformCharge {
            player: "Ana Ruiz".to_string(),
            category: "2012".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 2, 1).unwrap(),
            amount: 80_000,
            notes: "talla M".to_string(),
        }
    }

    #[test]
    fn uniform_round_trips() {
        let charge = sample_uniform();
        let decoded = UniformCharge::from_row(&uniform_header(), &charge.to_row()).unwrap();
        assert_eq!(decoded, charge);
    }

    #[test]
    fn tournament_round_trips() {
        let charge = TournamentCharge {
            player: "Ana Ruiz".to_string(),
            category: "2012".to_string(),
            tournament: "Copa Ciudad".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 6, 15).unwrap(),
            amount: 120_000,
            notes: String::new(),
        };
        let header: Vec<String> = TOURNAMENT_HEADER.iter().map(|h| (*h).to_string()).collect();
        let decoded = TournamentCharge::from_row(&header, &charge.to_row()).unwrap();
        assert_eq!(decoded, charge);
    }

    #[test]
    fn bad_date_fails_closed() {
        let mut row = sample_uniform().to_row();
        row[2] = "01/02/2026".to_string();
        assert!(matches!(
            UniformCharge::from_row(&uniform_header(), &row),
            Err(Error::Schema { .. })
        ));
    }

    #[test]
    fn unknown_column_fails_closed() {
        let mut header = uniform_header();
        header.push("Talla".to_string());
        let mut row = sample_uniform().to_row();
        row.push("M".to_string());
        assert!(matches!(
            UniformCharge::from_row(&header, &row),
            Err(Error::Schema { .. })
        ));
    }
}
