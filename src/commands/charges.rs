//! Uniform and tournament charge commands.
//!
//! The category check and amount parsing happen here — the ledgers
//! themselves accept whatever the surface layer hands them.

use crate::config::AppConfig;
use crate::core::charges;
use crate::entities::charge::{TournamentCharge, UniformCharge};
use crate::entities::parse_amount;
use crate::errors::Result;
use crate::storage::Storage;
use chrono::{Local, NaiveDate};
use clap::Args;

#[derive(Args)]
pub struct UniformArgs {
    /// Player the charge applies to
    #[arg(long)]
    pub player: String,
    /// Player's category
    #[arg(long)]
    pub category: String,
    /// Day of the purchase, YYYY-MM-DD; defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,
    /// Amount charged
    #[arg(long)]
    pub amount: String,
    /// Free-text note
    #[arg(long, default_value = "")]
    pub notes: String,
}

#[derive(Args)]
pub struct TournamentArgs {
    /// Player the charge applies to
    #[arg(long)]
    pub player: String,
    /// Player's category
    #[arg(long)]
    pub category: String,
    /// Name of the tournament
    #[arg(long)]
    pub tournament: String,
    /// Day of the tournament, YYYY-MM-DD; defaults to today
    #[arg(long)]
    pub date: Option<NaiveDate>,
    /// Amount charged
    #[arg(long)]
    pub amount: String,
    /// Free-text note
    #[arg(long, default_value = "")]
    pub notes: String,
}

pub(crate) async fn run_uniform(
    args: UniformArgs,
    storage: &Storage,
    config: &AppConfig,
) -> Result<()> {
    config.require_category(&args.category)?;
    let charge = UniformCharge {
        player: args.player.trim().to_string(),
        category: args.category,
        date: args.date.unwrap_or_else(|| Local::now().date_naive()),
        amount: parse_amount(&args.amount)?,
        notes: args.notes,
    };
    charges::register_uniform(storage, &charge).await?;
    println!(
        "Registered uniform charge of {} for '{}' on {}.",
        charge.amount, charge.player, charge.date
    );
    Ok(())
}

pub(crate) async fn run_tournament(
    args: TournamentArgs,
    storage: &Storage,
    config: &AppConfig,
) -> Result<()> {
    config.require_category(&args.category)?;
    let charge = TournamentCharge {
        player: args.player.trim().to_string(),
        category: args.category,
        tournament: args.tournament.trim().to_string(),
        date: args.date.unwrap_or_else(|| Local::now().date_naive()),
        amount: parse_amount(&args.amount)?,
        notes: args.notes,
    };
    charges::register_tournament(storage, &charge).await?;
    println!(
        "Registered tournament charge of {} for '{}' ({}).",
        charge.amount, charge.player, charge.tournament
    );
    Ok(())
}
