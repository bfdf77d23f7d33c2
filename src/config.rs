//! Environment-driven configuration.

use std::str::FromStr;

use crate::{db::options::EngineOptions, error::config::ConfigError};

/// Default HTTP bind address when `LISTEN_ADDR` is unset.
pub const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";

/// Application configuration read from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Database URI passed to [`crate::Db::init_app`] (`DATABASE_URL`).
    pub database_url: String,
    /// Engine overrides (`DATABASE_POOL_SIZE`, `DATABASE_MAX_OVERFLOW`,
    /// `DATABASE_POOL_PRE_PING`, `DATABASE_SQL_LOGGING`).
    pub engine: EngineOptions,
    /// HTTP bind address (`LISTEN_ADDR`).
    pub listen_addr: String,
}

impl Config {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Reads the configuration through `lookup`, which returns the value of a variable if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let mut engine = EngineOptions::new();
        if let Some(pool_size) = parse_var::<u32, _>(&lookup, "DATABASE_POOL_SIZE")? {
            engine = engine.pool_size(pool_size);
        }
        if let Some(max_overflow) = parse_var::<u32, _>(&lookup, "DATABASE_MAX_OVERFLOW")? {
            engine = engine.max_overflow(max_overflow);
        }
        if let Some(pre_ping) = parse_var::<bool, _>(&lookup, "DATABASE_POOL_PRE_PING")? {
            engine = engine.pool_pre_ping(pre_ping);
        }
        if let Some(sql_logging) = parse_var::<bool, _>(&lookup, "DATABASE_SQL_LOGGING")? {
            engine = engine.sql_logging(sql_logging);
        }

        let listen_addr = lookup("LISTEN_ADDR").unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string());

        Ok(Self {
            database_url,
            engine,
            listen_addr,
        })
    }
}

fn parse_var<T, F>(lookup: &F, var: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    lookup(var)
        .map(|value| {
            value
                .trim()
                .parse::<T>()
                .map_err(|e| ConfigError::InvalidEnvValue {
                    var: var.to_string(),
                    reason: e.to_string(),
                })
        })
        .transpose()
}
