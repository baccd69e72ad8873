// src/config.rs
use std::net::SocketAddr;
use thiserror::Error;

pub const DEFAULT_ADDR: &str = "127.0.0.1:8080";
pub const DEFAULT_DB_PATH: &str = "wanderlust.sqlite3";
pub const DEFAULT_SCHEMA_PATH: &str = "sql/schema.sql";
pub const DEFAULT_MAX_WORKERS: usize = 8;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("WANDERLUST_ADDR is not a socket address: {0}")]
    Addr(String),

    #[error("WANDERLUST_MAX_WORKERS must be a positive integer, got {0:?}")]
    Workers(String),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub addr: SocketAddr,
    pub db_path: String,
    pub schema_path: String,
    pub max_workers: usize,
}

impl Config {
    /// Reads `WANDERLUST_*` variables from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr_raw = lookup("WANDERLUST_ADDR").unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_raw
            .parse::<SocketAddr>()
            .map_err(|_| ConfigError::Addr(addr_raw.clone()))?;

        let max_workers = match lookup("WANDERLUST_MAX_WORKERS") {
            None => DEFAULT_MAX_WORKERS,
            Some(raw) => match raw.trim().parse::<usize>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::Workers(raw)),
            },
        };

        Ok(Self {
            addr,
            db_path: lookup("WANDERLUST_DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.to_string()),
            schema_path: lookup("WANDERLUST_SCHEMA_PATH")
                .unwrap_or_else(|| DEFAULT_SCHEMA_PATH.to_string()),
            max_workers,
        })
    }
}
