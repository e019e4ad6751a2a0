use anyhow::Result;
use tracing::info;

use crate::cli::Cli;
use crate::db;

pub fn run(cli: &Cli) -> Result<()> {
    let mut client = db::connect(&cli.host, cli.user.as_deref(), cli.password.as_deref())?;

    db::create_users_table(&mut client)?;

    info!("users table dropped and recreated");

    Ok(())
}
