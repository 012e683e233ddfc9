//! One-off charge ledgers: uniform purchases and tournament fees.
//!
//! Both ledgers are append-only. A registration succeeds whenever the
//! storage write succeeds; there is no duplicate detection, and whatever
//! validation the surface layer performed is all the validation there is.

use crate::entities::charge::{
    TOURNAMENT_HEADER, TOURNAMENTS_TABLE, TournamentCharge, UNIFORM_HEADER, UNIFORMS_TABLE,
    UniformCharge,
};
use crate::errors::Result;
use crate::storage::{Storage, Table};
use tracing::info;

/// Appends a uniform purchase to the `Uniformes` ledger.
pub async fn register_uniform(storage: &Storage, charge: &UniformCharge) -> Result<()> {
    let mut table = load_ledger(storage, UNIFORMS_TABLE, &UNIFORM_HEADER).await?;
    table.rows.push(charge.to_row());
    storage.save_table(UNIFORMS_TABLE, &table).await?;
    info!(
        player = %charge.player,
        amount = charge.amount,
        "uniform charge registered"
    );
    Ok(())
}

/// Appends a tournament fee to the `Torneos` ledger.
pub async fn register_tournament(storage: &Storage, charge: &TournamentCharge) -> Result<()> {
    let mut table = load_ledger(storage, TOURNAMENTS_TABLE, &TOURNAMENT_HEADER).await?;
    table.rows.push(charge.to_row());
    storage.save_table(TOURNAMENTS_TABLE, &table).await?;
    info!(
        player = %charge.player,
        tournament = %charge.tournament,
        amount = charge.amount,
        "tournament charge registered"
    );
    Ok(())
}

/// Every uniform purchase, in insertion order.
pub async fn uniforms(storage: &Storage) -> Result<Vec<UniformCharge>> {
    let table = load_ledger(storage, UNIFORMS_TABLE, &UNIFORM_HEADER).await?;
    table
        .rows
        .iter()
        .map(|row| UniformCharge::from_row(&table.header, row))
        .collect()
}

/// Every tournament fee, in insertion order.
pub async fn tournaments(storage: &Storage) -> Result<Vec<TournamentCharge>> {
    let table = load_ledger(storage, TOURNAMENTS_TABLE, &TOURNAMENT_HEADER).await?;
    table
        .rows
        .iter()
        .map(|row| TournamentCharge::from_row(&table.header, row))
        .collect()
}

pub(crate) async fn load_ledger(
    storage: &Storage,
    name: &str,
    header: &[&str],
) -> Result<Table> {
    let mut table = storage.load_table(name).await?;
    if table.is_blank() {
        return Ok(Table::with_header(header));
    }
    let width = table.header.len();
    for row in &mut table.rows {
        row.resize(width, String::new());
    }
    Ok(table)
}
