//! Export: per-category CSV text and the compressed all-tables backup.

use super::{category, charges, roster};
use crate::config::AppConfig;
use crate::entities::charge::{
    TOURNAMENT_HEADER, TOURNAMENTS_TABLE, UNIFORM_HEADER, UNIFORMS_TABLE,
};
use crate::entities::roster::ROSTER_TABLE;
use crate::errors::Result;
use crate::storage::{Storage, Table, csv_file};
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;

/// Everything the application stores, bundled for backup.
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackupBundle {
    /// Table name to snapshot, every category plus roster and ledgers.
    pub tables: BTreeMap<String, Table>,
}

/// Renders the current normalized category table as CSV text, for download.
pub async fn category_csv(storage: &Storage, config: &AppConfig, category: &str) -> Result<String> {
    let table = category::load_category(storage, config, category).await?;
    Ok(csv_file::render_table(&table))
}

/// Bundles every table into one gzip-compressed JSON document.
pub async fn backup(storage: &Storage, config: &AppConfig) -> Result<Vec<u8>> {
    let mut tables = BTreeMap::new();
    for name in &config.categories {
        tables.insert(
            name.clone(),
            category::load_category(storage, config, name).await?,
        );
    }
    tables.insert(ROSTER_TABLE.to_string(), roster::load_roster(storage).await?);
    tables.insert(
        UNIFORMS_TABLE.to_string(),
        charges::load_ledger(storage, UNIFORMS_TABLE, &UNIFORM_HEADER).await?,
    );
    tables.insert(
        TOURNAMENTS_TABLE.to_string(),
        charges::load_ledger(storage, TOURNAMENTS_TABLE, &TOURNAMENT_HEADER).await?,
    );

    let bundle = BackupBundle { tables };
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    serde_json::to_writer(&mut encoder, &bundle)?;
    let bytes = encoder.finish()?;
    info!(
        tables = bundle.tables.len(),
        bytes = bytes.len(),
        "backup bundle created"
    );
    Ok(bytes)
}

/// Decodes a backup produced by [`backup`].
pub fn read_backup(bytes: &[u8]) -> Result<BackupBundle> {
    let decoder = GzDecoder::new(bytes);
    Ok(serde_json::from_reader(decoder)?)
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::month::Month;
    use crate::test_utils::{memory_storage, sample_record, test_config};

    #[tokio::test]
    async fn csv_export_renders_the_normalized_table() -> Result<()> {
        let storage = memory_storage();
        let config = test_config();
        category::add_player(&storage, &config, "sub11", "Ana Ruiz").await?;
        category::record_payment(&storage, &config, "sub11", "Ana Ruiz", Month::Marzo, "50.000")
            .await?;

        let csv = category_csv(&storage, &config, "sub11").await?;
        let mut lines = csv.lines();
        assert_eq!(
            lines.next().unwrap(),
            "Jugador,Enero,Febrero,Marzo,Abril,Mayo,Junio,Julio,Agosto,Septiembre,Octubre,Noviembre,Diciembre"
        );
        assert_eq!(
            lines.next().unwrap(),
            "Ana Ruiz,0,0,50000,0,0,0,0,0,0,0,0,0"
        );
        Ok(())
    }

    #[tokio::test]
    async fn backup_bundles_every_table() -> Result<()> {
        let storage = memory_storage();
        let config = test_config();
        category::add_player(&storage, &config, "sub11", "Ana Ruiz").await?;
        roster::add_record(&storage, &config, &sample_record("1001", "sub12")).await?;

        let bytes = backup(&storage, &config).await?;
        let bundle = read_backup(&bytes)?;

        for name in &config.categories {
            assert!(bundle.tables.contains_key(name), "missing {name}");
        }
        assert!(bundle.tables.contains_key(ROSTER_TABLE));
        assert!(bundle.tables.contains_key(UNIFORMS_TABLE));
        assert!(bundle.tables.contains_key(TOURNAMENTS_TABLE));

        let sub11 = &bundle.tables["sub11"];
        assert_eq!(sub11.rows.len(), 1);
        assert_eq!(sub11.rows[0][0], "Ana Ruiz");
        Ok(())
    }
}
