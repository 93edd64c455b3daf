//! Environment configuration for the database connection and listener.

use crate::error::ConfigError;
use sqlx::postgres::PgConnectOptions;
use std::str::FromStr;

/// Port the HTTP listener binds on all interfaces.
pub const LISTEN_PORT: u16 = 9000;

const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_DB_NAME: &str = "postgres";

/// Database connection settings. Either a full `DATABASE_URL` or the individual
/// `DB_*` variables.
#[derive(Clone)]
pub enum DbConfig {
    Url(String),
    Parts {
        name: String,
        user: String,
        password: String,
        host: String,
        port: u16,
    },
}

impl DbConfig {
    /// Read from the process environment (after `dotenvy` has populated it).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get("DATABASE_URL") {
            return Ok(DbConfig::Url(url));
        }

        let required = |key: &'static str| get(key).ok_or(ConfigError::MissingVar(key));
        let port = match get("DB_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| ConfigError::InvalidVar {
                name: "DB_PORT",
                value: raw,
            })?,
            None => DEFAULT_DB_PORT,
        };

        Ok(DbConfig::Parts {
            name: get("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.into()),
            user: required("DB_USER")?,
            password: required("DB_PASSWORD")?,
            host: required("DB_HOST")?,
            port,
        })
    }

    pub fn connect_options(&self) -> Result<PgConnectOptions, ConfigError> {
        match self {
            DbConfig::Url(url) => PgConnectOptions::from_str(url).map_err(ConfigError::DatabaseUrl),
            DbConfig::Parts {
                name,
                user,
                password,
                host,
                port,
            } => Ok(PgConnectOptions::new()
                .host(host)
                .port(*port)
                .username(user)
                .password(password)
                .database(name)),
        }
    }
}

impl std::fmt::Debug for DbConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DbConfig::Url(_) => f.write_str("DbConfig::Url(<redacted>)"),
            DbConfig::Parts {
                name, user, host, port, ..
            } => f
                .debug_struct("DbConfig::Parts")
                .field("name", name)
                .field("user", user)
                .field("host", host)
                .field("port", port)
                .finish_non_exhaustive(),
        }
    }
}
