//! CLI surface: argument parsing and command handlers.
//!
//! Handlers are thin: each one calls exactly one core operation and prints
//! the outcome. All business rules live in `core`.

/// Uniform and tournament charge commands.
pub mod charges;
/// CSV and backup export commands.
pub mod export;
/// Payment recording.
pub mod payments;
/// Category player management.
pub mod players;
/// Roster record management.
pub mod roster;
/// Table formatting helpers.
pub(crate) mod utils;
/// Read-only views: raw tables, totals, debtors.
pub mod view;

use crate::config::AppConfig;
use crate::errors::Result;
use crate::storage::Storage;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "club-dues",
    version,
    about = "Dues and roster ledger for a youth football school"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Manage players inside a category table
    Player {
        #[command(subcommand)]
        command: players::PlayerCommand,
    },
    /// Record a monthly dues payment
    Pay(payments::PayArgs),
    /// Manage biographical roster records
    Roster {
        #[command(subcommand)]
        command: roster::RosterCommand,
    },
    /// Register a uniform purchase
    Uniform(charges::UniformArgs),
    /// Register a tournament fee
    Tournament(charges::TournamentArgs),
    /// Print a stored table as-is
    View(view::ViewArgs),
    /// Monthly income totals for a category
    Summary(view::SummaryArgs),
    /// Players who still owe
    Debtors(view::DebtorsArgs),
    /// Create every table with its canonical header
    Init,
    /// Export data as CSV or a compressed backup
    Export {
        #[command(subcommand)]
        command: export::ExportCommand,
    },
}

/// Dispatches a parsed command line to its handler.
pub async fn run(cli: Cli, storage: &Storage, config: &AppConfig) -> Result<()> {
    match cli.command {
        Commands::Player { command } => players::run(command, storage, config).await,
        Commands::Pay(args) => payments::run(args, storage, config).await,
        Commands::Roster { command } => roster::run(command, storage, config).await,
        Commands::Uniform(args) => charges::run_uniform(args, storage, config).await,
        Commands::Tournament(args) => charges::run_tournament(args, storage, config).await,
        Commands::View(args) => view::run_view(args, storage).await,
        Commands::Summary(args) => view::run_summary(args, storage, config).await,
        Commands::Debtors(args) => view::run_debtors(args, storage, config).await,
        Commands::Init => {
            crate::core::ensure_all_tables(storage, config).await?;
            println!("All tables ready.");
            Ok(())
        }
        Commands::Export { command } => export::run(command, storage, config).await,
    }
}
