use std::path::PathBuf;

use clap::{ArgAction, Parser};

// `-h` selects the PostgreSQL host, so the built-in short help flag is
// disabled and `--help` is wired up explicitly.
#[derive(Parser, Debug)]
#[command(
    name = "userload",
    version,
    about = "Load user records from a CSV file into PostgreSQL",
    disable_help_flag = true
)]
pub struct Cli {
    /// CSV file to process
    #[arg(long, conflicts_with = "create_table")]
    pub file: Option<PathBuf>,

    /// Drop and recreate the users table, then exit
    #[arg(long = "create_table")]
    pub create_table: bool,

    /// Parse and validate the file without touching the database
    #[arg(long = "dry_run")]
    pub dry_run: bool,

    /// PostgreSQL username
    #[arg(short = 'u')]
    pub user: Option<String>,

    /// PostgreSQL password
    #[arg(short = 'p')]
    pub password: Option<String>,

    /// PostgreSQL host
    #[arg(short = 'h', default_value = "localhost")]
    pub host: String,

    /// Print this help message
    #[arg(long, action = ArgAction::Help)]
    pub help: Option<bool>,
}
