//! Runtime configuration, read from the environment (and `.env` via dotenv).

use anyhow::{bail, Context, Result};
use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// `None` keeps the feedback log unbounded.
    pub feedback_capacity: Option<usize>,
    pub comment_capacity: Option<usize>,
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            feedback_capacity: None,
            comment_capacity: None,
            log_filter: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Config::default();

        let port: u16 = match get("PORT") {
            Some(raw) => raw
                .parse()
                .with_context(|| format!("PORT must be a port number, got {raw:?}"))?,
            None => defaults.port,
        };

        Ok(Config {
            host: get("HOST").unwrap_or(defaults.host),
            port,
            feedback_capacity: parse_capacity("FEEDBACK_STORE_CAPACITY", get("FEEDBACK_STORE_CAPACITY"))?,
            comment_capacity: parse_capacity("COMMENT_STORE_CAPACITY", get("COMMENT_STORE_CAPACITY"))?,
            log_filter: get("RUST_LOG").unwrap_or(defaults.log_filter),
        })
    }

    pub fn bind_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .with_context(|| format!("invalid bind address {}:{}", self.host, self.port))
    }
}

fn parse_capacity(key: &str, raw: Option<String>) -> Result<Option<usize>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let capacity: usize = raw
        .parse()
        .with_context(|| format!("{key} must be a positive integer, got {raw:?}"))?;
    if capacity == 0 {
        bail!("{key} must be greater than zero");
    }
    Ok(Some(capacity))
}
