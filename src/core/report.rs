//! Reporting over category tables: totals, debtors, search.
//!
//! Read-only; everything here is derived from the typed player rows and
//! formatted by the surface layer.

use super::category;
use crate::config::AppConfig;
use crate::entities::month::Month;
use crate::entities::player::PlayerRow;
use crate::errors::Result;
use crate::storage::Storage;

/// Income collected in one month across a whole category.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthlyTotal {
    pub month: Month,
    pub total: u64,
}

/// Per-month income for a category, all twelve months in calendar order.
pub async fn monthly_totals(
    storage: &Storage,
    config: &AppConfig,
    category: &str,
) -> Result<Vec<MonthlyTotal>> {
    let players = category::players(storage, config, category).await?;
    Ok(Month::ALL
        .into_iter()
        .map(|month| MonthlyTotal {
            month,
            total: players.iter().map(|p| p.amount(month)).sum(),
        })
        .collect())
}

/// Players who owe: zero recorded for the given month, or for at least one
/// month when no month is given.
pub async fn debtors(
    storage: &Storage,
    config: &AppConfig,
    category: &str,
    month: Option<Month>,
) -> Result<Vec<PlayerRow>> {
    let players = category::players(storage, config, category).await?;
    Ok(players
        .into_iter()
        .filter(|player| match month {
            Some(month) => player.owes(month),
            None => Month::ALL.into_iter().any(|m| player.owes(m)),
        })
        .collect())
}

/// Case-insensitive substring search on player names.
pub async fn find_players(
    storage: &Storage,
    config: &AppConfig,
    category: &str,
    query: &str,
) -> Result<Vec<PlayerRow>> {
    let wanted = query.trim().to_lowercase();
    let players = category::players(storage, config, category).await?;
    Ok(players
        .into_iter()
        .filter(|player| player.name.to_lowercase().contains(&wanted))
        .collect())
}
