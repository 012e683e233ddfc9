//! Category player management commands.

use super::utils::format_table;
use crate::config::AppConfig;
use crate::core::category;
use crate::errors::Result;
use crate::storage::Storage;
use clap::Subcommand;

#[derive(Subcommand)]
pub enum PlayerCommand {
    /// Add a player with all twelve months unpaid
    Add {
        /// Category table to add the player to
        #[arg(long)]
        category: String,
        /// Player's full name
        name: String,
    },
    /// Remove a player, matching the name case-insensitively
    Delete {
        #[arg(long)]
        category: String,
        name: String,
    },
    /// Print the category's payment matrix
    List {
        #[arg(long)]
        category: String,
    },
}

pub(crate) async fn run(
    command: PlayerCommand,
    storage: &Storage,
    config: &AppConfig,
) -> Result<()> {
    match command {
        PlayerCommand::Add { category, name } => {
            let player = category::add_player(storage, config, &category, &name).await?;
            println!("Added '{}' to category {category}.", player.name);
        }
        PlayerCommand::Delete { category, name } => {
            let removed = category::delete_player(storage, config, &category, &name).await?;
            println!("Removed {removed} row(s) for '{}' from category {category}.", name.trim());
        }
        PlayerCommand::List { category } => {
            let table = category::load_category(storage, config, &category).await?;
            if table.rows.is_empty() {
                println!("No players registered in category {category}.");
            } else {
                print!("{}", format_table(&table.header, &table.rows));
            }
        }
    }
    Ok(())
}
