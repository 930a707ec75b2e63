//! Service configuration, read once at startup from the environment.

use anyhow::{bail, Context, Result};
use dotenv::dotenv;
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use std::env;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DatabaseConfig {
    pub name: String,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    /// Takes precedence over the individual connection fields when set.
    pub url: Option<String>,
    pub pool_size: u32,
    pub connect_timeout: Duration,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_body_size: usize,
}

impl Config {
    /// Loads `.env` if present, then reads the process environment.
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let text = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_owned());
        let database = DatabaseConfig {
            name: text("DB_NAME", "postgres"),
            user: text("DB_USER", "postgres"),
            password: text("DB_PASSWORD", "postgres"),
            host: text("DB_HOST", "localhost"),
            port: parse_or(&lookup, "DB_PORT", 5432)?,
            url: lookup("DATABASE_URL").filter(|url| !url.is_empty()),
            pool_size: parse_positive(&lookup, "DB_POOL_SIZE", 10)?,
            connect_timeout: Duration::from_secs(parse_positive(&lookup, "DB_CONNECT_TIMEOUT", 30)?),
        };
        let server = ServerConfig {
            host: text("SERVER_HOST", "127.0.0.1"),
            port: parse_or(&lookup, "SERVER_PORT", 5000)?,
            max_body_size: parse_or(&lookup, "MAX_BODY_SIZE", 1_048_576)?,
        };
        Ok(Self { database, server })
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match lookup(key) {
        Some(value) => value
            .trim()
            .parse()
            .with_context(|| format!("{} has an invalid value: {:?}", key, value)),
        None => Ok(default),
    }
}

/// The pool rejects a zero size or timeout by panicking, so zero is refused here.
fn parse_positive<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Default + PartialEq,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    let value = parse_or(lookup, key, default)?;
    if value == T::default() {
        bail!("{} must be positive", key);
    }
    Ok(value)
}

impl DatabaseConfig {
    pub fn database_url(&self) -> String {
        if let Some(url) = &self.url {
            return url.clone();
        }
        format!(
            "postgres://{}:{}@{}:{}/{}",
            utf8_percent_encode(&self.user, NON_ALPHANUMERIC),
            utf8_percent_encode(&self.password, NON_ALPHANUMERIC),
            self.host,
            self.port,
            utf8_percent_encode(&self.name, NON_ALPHANUMERIC),
        )
    }
}

impl ServerConfig {
    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
