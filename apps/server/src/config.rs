use std::{net::SocketAddr, str::FromStr, time::Duration};

use anyhow::{bail, Context};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DB_PATH: &str = "./db/goals.db";
const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 30_000;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(LogFormat::Text),
            "json" => Ok(LogFormat::Json),
            other => bail!("unknown log format '{}', expected 'text' or 'json'", other),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: SocketAddr,
    pub db_path: String,
    pub cors_allow: Vec<String>,
    pub request_timeout: Duration,
    pub log_format: LogFormat,
}

impl Config {
    /// Reads `GOALS_*` variables, honouring a `.env` file when present.
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr: SocketAddr = lookup("GOALS_LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse()
            .context("Invalid GOALS_LISTEN_ADDR")?;
        let db_path = lookup("GOALS_DB_PATH").unwrap_or_else(|| DEFAULT_DB_PATH.into());
        let cors_allow = lookup("GOALS_CORS_ALLOW_ORIGINS")
            .unwrap_or_else(|| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let timeout_ms: u64 = match lookup("GOALS_REQUEST_TIMEOUT_MS") {
            Some(raw) => raw
                .parse()
                .context("Invalid GOALS_REQUEST_TIMEOUT_MS")?,
            None => DEFAULT_REQUEST_TIMEOUT_MS,
        };
        let log_format = match lookup("GOALS_LOG_FORMAT") {
            Some(raw) => raw
                .parse::<LogFormat>()
                .context("Invalid GOALS_LOG_FORMAT")?,
            None => LogFormat::default(),
        };
        Ok(Self {
            listen_addr,
            db_path,
            cors_allow,
            request_timeout: Duration::from_millis(timeout_ms),
            log_format,
        })
    }
}
