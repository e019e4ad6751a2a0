mod cli;
mod commands;
mod db;
mod ingest;
mod model;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing::error;
use tracing_subscriber::EnvFilter;

use crate::cli::Cli;

fn main() {
    init_tracing();

    if let Err(err) = run() {
        error!(error = %err, "command failed");
        for cause in err.chain().skip(1) {
            error!(cause = %cause, "caused by");
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    if cli.create_table {
        return commands::create_table::run(&cli);
    }

    if let Some(path) = cli.file.clone() {
        return commands::upload::run(&cli, &path);
    }

    Cli::command()
        .print_help()
        .context("failed to render help text")?;
    std::process::exit(1);
}

fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
