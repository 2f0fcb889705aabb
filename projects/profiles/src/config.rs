use std::net::SocketAddr;

use interfaces_github_followers::index::DEFAULT_GITHUB_API_BASE_URL;
use thiserror::Error;
use utils_trace::{TraceFormat, UnknownTraceFormat};

pub const ADDR_VAR: &str = "PROFILES_ADDR";
pub const GITHUB_API_BASE_URL_VAR: &str = "GITHUB_API_BASE_URL";
pub const LOG_LEVEL_VAR: &str = "PROFILES_LOG_LEVEL";
pub const LOG_FORMAT_VAR: &str = "PROFILES_LOG_FORMAT";

const DEFAULT_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    pub github_api_base_url: String,
    pub log_level: String,
    pub log_format: TraceFormat,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("DotenvLoad: {source}")]
    DotenvLoad {
        #[source]
        source: dotenvy::Error,
    },

    #[error("InvalidAddr: {value}: {source}")]
    InvalidAddr {
        value: String,
        #[source]
        source: std::net::AddrParseError,
    },

    #[error("InvalidLogFormat: {source}")]
    InvalidLogFormat {
        #[from]
        source: UnknownTraceFormat,
    },

    #[error("EmptyGitHubApiBaseUrl")]
    EmptyGitHubApiBaseUrl,
}

impl Config {
    /// Loads `.env` when present, then reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(err) if err.not_found() => {}
            Err(source) => return Err(ConfigError::DotenvLoad { source }),
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let addr_value = lookup(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_string());
        let addr = addr_value
            .parse()
            .map_err(|source| ConfigError::InvalidAddr {
                value: addr_value.clone(),
                source,
            })?;

        let github_api_base_url = lookup(GITHUB_API_BASE_URL_VAR)
            .unwrap_or_else(|| DEFAULT_GITHUB_API_BASE_URL.to_string());
        if github_api_base_url.trim().is_empty() {
            return Err(ConfigError::EmptyGitHubApiBaseUrl);
        }

        let log_level = lookup(LOG_LEVEL_VAR).unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(value) => value.parse()?,
            None => TraceFormat::default(),
        };

        Ok(Config {
            addr,
            github_api_base_url,
            log_level,
            log_format,
        })
    }
}
