use std::{str::FromStr, time::Duration};

use crate::server::error::config::ConfigError;

pub static DEFAULT_DATABASE_URL: &str = "sqlite:///tmp/test.db?mode=rwc";
pub static DEFAULT_CATALOG_URL: &str = "https://www.swapi.tech/api";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CATALOG_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CURRENT_USER_ID: i32 = 1;

pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub catalog_url: String,
    pub catalog_timeout: Duration,
    /// Identity used for favorites when no authentication layer provides one
    pub current_user_id: i32,
}

impl Config {
    /// Read configuration from the process environment, every variable is optional
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build configuration from any variable source, used by [`Config::from_env`]
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            database_url: lookup("DATABASE_URL")
                .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            catalog_url: lookup("CATALOG_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_CATALOG_URL.to_string()),
            catalog_timeout: Duration::from_secs(parse_or(
                &lookup,
                "CATALOG_TIMEOUT_SECS",
                DEFAULT_CATALOG_TIMEOUT_SECS,
            )?),
            current_user_id: parse_or(&lookup, "CURRENT_USER_ID", DEFAULT_CURRENT_USER_ID)?,
        })
    }
}

fn parse_or<F, T>(lookup: &F, var: &str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(var) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: var.to_string(),
                reason: format!("{:?}: {}", value, e),
            }),
    }
}
