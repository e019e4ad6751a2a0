use anyhow::{Context, Result};
use postgres::{Client, NoTls};
use tracing::info;

pub fn connect(host: &str, user: Option<&str>, password: Option<&str>) -> Result<Client> {
    let user = user.context("a PostgreSQL username is required (-u)")?;

    let mut config = postgres::Config::new();
    config.host(host).user(user);
    if let Some(password) = password {
        config.password(password);
    }

    // The database name falls back to the username, libpq-style.
    let client = config
        .connect(NoTls)
        .with_context(|| format!("failed to connect to PostgreSQL at {host}"))?;

    info!(host = %host, user = %user, "connected to database");

    Ok(client)
}

pub fn create_users_table(client: &mut Client) -> Result<()> {
    client
        .batch_execute(
            "
            DROP TABLE IF EXISTS users;

            CREATE TABLE users (
              id SERIAL PRIMARY KEY,
              name TEXT NOT NULL,
              surname TEXT NOT NULL,
              email TEXT NOT NULL UNIQUE
            );
            ",
        )
        .context("failed to create users table")?;

    Ok(())
}
