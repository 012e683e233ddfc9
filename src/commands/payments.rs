//! Payment recording.

use crate::config::AppConfig;
use crate::core::category;
use crate::entities::month::Month;
use crate::errors::Result;
use crate::storage::Storage;
use clap::Args;

#[derive(Args)]
pub struct PayArgs {
    /// Category the player is listed in
    #[arg(long)]
    pub category: String,
    /// Month label, e.g. Marzo
    #[arg(long)]
    pub month: String,
    /// Amount text; thousands separators are accepted, empty means zero
    #[arg(long)]
    pub amount: String,
    /// Player name as listed in the category table
    pub name: String,
}

pub(crate) async fn run(args: PayArgs, storage: &Storage, config: &AppConfig) -> Result<()> {
    let month = Month::from_label(&args.month)?;
    let amount = category::record_payment(
        storage,
        config,
        &args.category,
        &args.name,
        month,
        &args.amount,
    )
    .await?;
    println!(
        "Recorded {amount} for '{}' in {month} (category {}).",
        args.name.trim(),
        args.category
    );
    Ok(())
}
