//! Process configuration read from the environment at startup.

use chrono::Duration;
use thiserror::Error;

use usersvc_observability::{LogFormat, ParseLogFormatError};

pub const DEFAULT_BIND_ADDR: &str = "localhost:8080";
pub const DEV_JWT_SECRET: &str = "dev-secret";
pub const DEFAULT_TOKEN_TTL_SECS: i64 = 3600;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("USERSVC_BIND_ADDR must not be empty")]
    EmptyBindAddr,

    #[error("USERSVC_TOKEN_TTL_SECS must be a positive integer, got '{0}'")]
    InvalidTokenTtl(String),

    #[error("USERSVC_LOG_FORMAT: {0}")]
    InvalidLogFormat(#[from] ParseLogFormatError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub bind_addr: String,
    pub jwt_secret: String,
    pub token_ttl: Duration,
    pub log_format: LogFormat,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            jwt_secret: DEV_JWT_SECRET.to_string(),
            token_ttl: Duration::seconds(DEFAULT_TOKEN_TTL_SECS),
            log_format: LogFormat::default(),
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from an arbitrary key lookup (unset keys take defaults).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(addr) = lookup("USERSVC_BIND_ADDR") {
            let addr = addr.trim();
            if addr.is_empty() {
                return Err(ConfigError::EmptyBindAddr);
            }
            config.bind_addr = addr.to_string();
        }

        if let Some(secret) = lookup("JWT_SECRET").filter(|s| !s.is_empty()) {
            config.jwt_secret = secret;
        }

        if let Some(raw) = lookup("USERSVC_TOKEN_TTL_SECS") {
            let secs = raw
                .trim()
                .parse::<i64>()
                .ok()
                .filter(|s| *s > 0)
                .ok_or_else(|| ConfigError::InvalidTokenTtl(raw.clone()))?;
            config.token_ttl = Duration::seconds(secs);
        }

        if let Some(raw) = lookup("USERSVC_LOG_FORMAT") {
            config.log_format = raw.parse()?;
        }

        Ok(config)
    }

    pub fn uses_dev_secret(&self) -> bool {
        self.jwt_secret == DEV_JWT_SECRET
    }
}
