//! Runtime configuration from the environment.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `DATABASE_URL` | `sqlite::memory:` |
//! | `DEPENDENCY_TIMEOUT_MS` | `3000` |
//! | `ACTOR_BUFFER_SIZE` | `32` |
//! | `DB_MAX_CONNECTIONS` | `5` (always `1` for in-memory databases) |
//!
//! A `.env` file in the working directory is loaded first, if present.

use crate::order_store::sql::is_in_memory;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    #[error("{var}={value:?} is invalid: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub database_url: String,
    /// Deadline for each account, catalog and store call.
    pub dependency_timeout: Duration,
    pub actor_buffer_size: usize,
    pub db_max_connections: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database_url: "sqlite::memory:".to_string(),
            dependency_timeout: Duration::from_millis(3000),
            actor_buffer_size: 32,
            db_max_connections: 1,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| "sqlite::memory:".to_string());
        let timeout_ms: u64 = positive(&lookup, "DEPENDENCY_TIMEOUT_MS", 3000)?;
        let actor_buffer_size = positive(&lookup, "ACTOR_BUFFER_SIZE", 32)?;
        let mut db_max_connections = positive(&lookup, "DB_MAX_CONNECTIONS", 5)?;
        if is_in_memory(&database_url) {
            db_max_connections = 1;
        }

        Ok(Self {
            database_url,
            dependency_timeout: Duration::from_millis(timeout_ms),
            actor_buffer_size,
            db_max_connections,
        })
    }
}

fn positive<T>(lookup: &impl Fn(&str) -> Option<String>, var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr + PartialOrd + Default,
    T::Err: std::fmt::Display,
{
    let Some(value) = lookup(var) else {
        return Ok(default);
    };
    let invalid = |reason: String| ConfigError::Invalid {
        var,
        value: value.clone(),
        reason,
    };
    let parsed = value.trim().parse::<T>().map_err(|e| invalid(e.to_string()))?;
    if parsed <= T::default() {
        return Err(invalid("must be greater than zero".to_string()));
    }
    Ok(parsed)
}
