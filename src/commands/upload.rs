use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::cli::Cli;
use crate::db;
use crate::ingest::{self, DryRunWriter, PersistingWriter};

pub fn run(cli: &Cli, path: &Path) -> Result<()> {
    if cli.dry_run {
        info!("dry run requested, no records will be written");
        let mut writer = DryRunWriter;
        ingest::run_ingestion(path, &mut writer)?;
        return Ok(());
    }

    let client = db::connect(&cli.host, cli.user.as_deref(), cli.password.as_deref())?;
    let mut writer = PersistingWriter::new(client);
    ingest::run_ingestion(path, &mut writer)?;

    Ok(())
}
