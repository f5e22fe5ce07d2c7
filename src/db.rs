//! PostgreSQL persistence for the color frequency table.
//!
//! One synchronous connection per run: open, ensure the table exists,
//! upsert every entry inside a single transaction, commit, drop. Connection
//! parameters come from five `DB_*` environment variables (a `.env` file is
//! honored when present).

use postgres::{Client, NoTls};
use std::env;
use thiserror::Error;

use crate::stats::FrequencyTable;

/// Errors that can occur while persisting frequencies.
#[derive(Error, Debug)]
pub enum DbError {
    #[error("missing environment variable {0}")]
    MissingVar(&'static str),
    #[error("database connection failed: {0}")]
    Connection(#[source] postgres::Error),
    #[error("database error: {0}")]
    Query(#[from] postgres::Error),
}

/// Connection parameters, sourced from the environment.
#[derive(Debug, Clone)]
pub struct DbConfig {
    pub name: String,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: String,
}

impl DbConfig {
    /// Read the five `DB_*` variables from the environment.
    pub fn from_env() -> Result<Self, DbError> {
        Ok(DbConfig {
            name: require_var("DB_NAME")?,
            user: require_var("DB_USER")?,
            password: require_var("DB_PASSWORD")?,
            host: require_var("DB_HOST")?,
            port: require_var("DB_PORT")?,
        })
    }

    /// Render as a libpq-style connection string.
    pub fn connection_string(&self) -> String {
        format!(
            "host={} port={} user={} password={} dbname={}",
            self.host, self.port, self.user, self.password, self.name
        )
    }
}

fn require_var(name: &'static str) -> Result<String, DbError> {
    env::var(name).map_err(|_| DbError::MissingVar(name))
}

/// Frequency table schema. `color_name` uniqueness is what makes the
/// upsert idempotent.
const CREATE_TABLE_SQL: &str = "CREATE TABLE IF NOT EXISTS color_frequencies (
    color_name TEXT PRIMARY KEY,
    frequency BIGINT NOT NULL
)";

/// Per-entry upsert keyed on `color_name`.
pub const UPSERT_SQL: &str = "INSERT INTO color_frequencies (color_name, frequency)
    VALUES ($1, $2)
    ON CONFLICT (color_name)
    DO UPDATE SET frequency = EXCLUDED.frequency";

/// Write the frequency table to PostgreSQL.
///
/// All upserts run in one transaction with a single commit; a failure on
/// any statement leaves the table untouched.
pub fn save_frequencies(config: &DbConfig, table: &FrequencyTable) -> Result<(), DbError> {
    let mut client =
        Client::connect(&config.connection_string(), NoTls).map_err(DbError::Connection)?;

    client.batch_execute(CREATE_TABLE_SQL)?;

    let mut transaction = client.transaction()?;
    for (color, count) in table.iter() {
        transaction.execute(UPSERT_SQL, &[&color, &(count as i64)])?;
    }
    transaction.commit()?;

    Ok(())
}
