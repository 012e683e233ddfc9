//! Roster record management commands.

use super::utils::format_table;
use crate::config::AppConfig;
use crate::core::roster::{self, CategoryLink};
use crate::entities::month::Month;
use crate::entities::roster::{ROSTER_HEADER, RosterRecord};
use crate::errors::Result;
use crate::storage::Storage;
use chrono::NaiveDate;
use clap::{Args, Subcommand};

#[derive(Subcommand)]
pub enum RosterCommand {
    /// Add a biographical record and seed its category payment row
    Add(AddArgs),
    /// Delete a record by document id, cascading into the category table
    Delete {
        /// Document id of the record to remove
        document: String,
    },
    /// Search records by any field
    Find {
        /// Case-insensitive text to look for
        query: String,
    },
    /// Show one record together with its payment row
    Show {
        document: String,
    },
}

#[derive(Args)]
pub struct AddArgs {
    /// Given names
    #[arg(long)]
    pub first_names: String,
    /// Family names
    #[arg(long)]
    pub last_names: String,
    /// National document id (required, unique)
    #[arg(long)]
    pub document: String,
    /// Birth date, YYYY-MM-DD
    #[arg(long)]
    pub birth_date: Option<NaiveDate>,
    /// Category the player joins
    #[arg(long)]
    pub category: String,
    /// Guardian's full name
    #[arg(long, default_value = "")]
    pub guardian: String,
    /// Home address
    #[arg(long, default_value = "")]
    pub address: String,
    /// Guardian's document id
    #[arg(long, default_value = "")]
    pub guardian_document: String,
    /// Contact email
    #[arg(long, default_value = "")]
    pub email: String,
    /// Contact phone
    #[arg(long, default_value = "")]
    pub phone: String,
}

impl AddArgs {
    fn into_record(self) -> RosterRecord {
        RosterRecord {
            first_names: self.first_names.trim().to_string(),
            last_names: self.last_names.trim().to_string(),
            document: self.document.trim().to_string(),
            birth_date: self.birth_date,
            category: self.category.trim().to_string(),
            guardian_name: self.guardian.trim().to_string(),
            address: self.address.trim().to_string(),
            guardian_document: self.guardian_document.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
        }
    }
}

pub(crate) async fn run(
    command: RosterCommand,
    storage: &Storage,
    config: &AppConfig,
) -> Result<()> {
    match command {
        RosterCommand::Add(args) => {
            let record = args.into_record();
            let name = record.full_name();
            let link = roster::add_record(storage, config, &record).await?;
            match link {
                CategoryLink::Linked => println!(
                    "Added '{name}' to the roster and to category {}.",
                    record.category
                ),
                CategoryLink::AlreadyListed => println!(
                    "Added '{name}' to the roster; category {} already listed that name.",
                    record.category
                ),
                CategoryLink::NotListed => {}
                CategoryLink::UnknownCategory => println!(
                    "Added '{name}' to the roster, but category '{}' is not configured — \
                     no payment row was created.",
                    record.category
                ),
            }
        }
        RosterCommand::Delete { document } => {
            let removed = roster::delete_record(storage, config, &document).await?;
            let name = removed.record.full_name();
            match removed.category_link {
                CategoryLink::Linked => println!(
                    "Removed '{name}' from the roster and from category {}.",
                    removed.record.category
                ),
                CategoryLink::NotListed => println!(
                    "Removed '{name}' from the roster; category {} had no matching row.",
                    removed.record.category
                ),
                CategoryLink::AlreadyListed => {}
                CategoryLink::UnknownCategory => println!(
                    "Removed '{name}' from the roster; category '{}' is not configured.",
                    removed.record.category
                ),
            }
        }
        RosterCommand::Find { query } => {
            let records = roster::find_records(storage, &query).await?;
            if records.is_empty() {
                println!("No roster records match '{}'.", query.trim());
            } else {
                let header: Vec<String> = ROSTER_HEADER.iter().map(|h| (*h).to_string()).collect();
                let rows: Vec<Vec<String>> = records.iter().map(RosterRecord::to_row).collect();
                print!("{}", format_table(&header, &rows));
            }
        }
        RosterCommand::Show { document } => {
            let (record, payments) = roster::record_with_payments(storage, config, &document).await?;
            println!("{} (document {})", record.full_name(), record.document);
            println!("Category: {}", record.category);
            if let Some(date) = record.birth_date {
                println!("Born: {date}");
            }
            if !record.guardian_name.is_empty() {
                println!("Guardian: {} ({})", record.guardian_name, record.phone);
            }
            match payments {
                Some(player) => {
                    let header: Vec<String> =
                        Month::ALL.iter().map(|m| m.label().to_string()).collect();
                    let row: Vec<String> = player.months.iter().map(u64::to_string).collect();
                    print!("{}", format_table(&header, &[row]));
                }
                None => println!("No payment row in category '{}'.", record.category),
            }
        }
    }
    Ok(())
}
