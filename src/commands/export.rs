//! CSV and backup export commands.

use crate::config::AppConfig;
use crate::core::export;
use crate::errors::Result;
use crate::storage::Storage;
use clap::Subcommand;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum ExportCommand {
    /// Write one category table as CSV (stdout when no output file given)
    Csv {
        #[arg(long)]
        category: String,
        /// Output file; prints to stdout when omitted
        #[arg(long, short)]
        out: Option<PathBuf>,
    },
    /// Write a gzip-compressed backup of every table
    Backup {
        #[arg(long, short, default_value = "backup.json.gz")]
        out: PathBuf,
    },
}

pub(crate) async fn run(
    command: ExportCommand,
    storage: &Storage,
    config: &AppConfig,
) -> Result<()> {
    match command {
        ExportCommand::Csv { category, out } => {
            let text = export::category_csv(storage, config, &category).await?;
            match out {
                Some(path) => {
                    tokio::fs::write(&path, text).await?;
                    println!("Wrote category {category} to {}.", path.display());
                }
                None => print!("{text}"),
            }
        }
        ExportCommand::Backup { out } => {
            let bytes = export::backup(storage, config).await?;
            tokio::fs::write(&out, bytes).await?;
            println!("Wrote backup to {}.", out.display());
        }
    }
    Ok(())
}
