use std::{net::SocketAddr, str::FromStr, time::Duration};

use anyhow::{bail, Context};

const DEFAULT_LISTEN_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_BACKEND_URL: &str = "http://localhost:8080";
const DEFAULT_STATIC_DIR: &str = "dist";
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
    /// Base URL of the goals API, without a trailing slash.
    pub backend_url: String,
    pub static_dir: String,
    /// Budget for one round trip to the goals API.
    pub request_timeout: Duration,
    pub log_format: LogFormat,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let listen_addr: SocketAddr = lookup("GOALS_WEB_LISTEN_ADDR")
            .unwrap_or_else(|| DEFAULT_LISTEN_ADDR.to_string())
            .parse()
            .context("Invalid GOALS_WEB_LISTEN_ADDR")?;
        let backend_url =
            lookup("GOALS_WEB_BACKEND_URL").unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
        reqwest::Url::parse(&backend_url).context("Invalid GOALS_WEB_BACKEND_URL")?;
        let static_dir =
            lookup("GOALS_WEB_STATIC_DIR").unwrap_or_else(|| DEFAULT_STATIC_DIR.to_string());
        let timeout_ms: u64 = match lookup("GOALS_WEB_REQUEST_TIMEOUT_MS") {
            Some(raw) => raw
                .parse()
                .context("Invalid GOALS_WEB_REQUEST_TIMEOUT_MS")?,
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
            backend_url: backend_url.trim_end_matches('/').to_string(),
            static_dir,
            request_timeout: Duration::from_millis(timeout_ms),
            log_format,
        })
    }
}
