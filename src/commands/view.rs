//! Read-only views: raw tables, monthly totals, debtors.

use super::utils::format_table;
use crate::config::AppConfig;
use crate::core::report;
use crate::entities::month::Month;
use crate::errors::Result;
use crate::storage::Storage;
use clap::Args;

#[derive(Args)]
pub struct ViewArgs {
    /// Table name: a category, Jugadores, Uniformes or Torneos
    pub table: String,
}

#[derive(Args)]
pub struct SummaryArgs {
    /// Category to total up
    #[arg(long)]
    pub category: String,
}

#[derive(Args)]
pub struct DebtorsArgs {
    /// Category to check
    #[arg(long)]
    pub category: String,
    /// Restrict to one month; otherwise anyone owing any month is listed
    #[arg(long)]
    pub month: Option<String>,
}

pub(crate) async fn run_view(args: ViewArgs, storage: &Storage) -> Result<()> {
    let table = storage.load_table(&args.table).await?;
    if table.is_blank() {
        println!("Table '{}' is empty.", args.table);
    } else {
        print!("{}", format_table(&table.header, &table.rows));
    }
    Ok(())
}

pub(crate) async fn run_summary(
    args: SummaryArgs,
    storage: &Storage,
    config: &AppConfig,
) -> Result<()> {
    let totals = report::monthly_totals(storage, config, &args.category).await?;
    let header = vec!["Mes".to_string(), "Total".to_string()];
    let rows: Vec<Vec<String>> = totals
        .iter()
        .map(|t| vec![t.month.to_string(), t.total.to_string()])
        .collect();
    print!("{}", format_table(&header, &rows));

    let year_total: u64 = totals.iter().map(|t| t.total).sum();
    println!("Year so far: {year_total}");
    Ok(())
}

pub(crate) async fn run_debtors(
    args: DebtorsArgs,
    storage: &Storage,
    config: &AppConfig,
) -> Result<()> {
    let month = args.month.as_deref().map(Month::from_label).transpose()?;
    let debtors = report::debtors(storage, config, &args.category, month).await?;
    if debtors.is_empty() {
        match month {
            Some(m) => println!("Everyone in {} has paid {m}.", args.category),
            None => println!("Everyone in {} is fully paid up.", args.category),
        }
        return Ok(());
    }

    match month {
        Some(m) => {
            println!("Owing for {m} in category {}:", args.category);
            for player in debtors {
                println!("  {}", player.name);
            }
        }
        None => {
            println!("Owing at least one month in category {}:", args.category);
            for player in debtors {
                let owed: Vec<&str> = Month::ALL
                    .into_iter()
                    .filter(|m| player.owes(*m))
                    .map(Month::label)
                    .collect();
                println!("  {} ({})", player.name, owed.join(", "));
            }
        }
    }
    Ok(())
}
