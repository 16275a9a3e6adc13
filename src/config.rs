use crate::error::ConfigError;
use std::time::Duration;

pub const DEFAULT_GRAPHQL_URL: &str = "https://api.github.com/graphql";
pub const DEFAULT_REFRESH_SECS: u64 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub token: String,
    pub owner: String,
    pub name: String,
    pub graphql_url: String,
    pub refresh_interval: Duration,
    pub log_level: log::LevelFilter,
}

impl Config {
    /// Reads the process environment. Call `dotenv::dotenv()` first to pick up `.env`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String, ConfigError> {
            let value = lookup(key).ok_or_else(|| ConfigError::Missing(key.to_string()))?;
            let trimmed = value.trim();
            if trimmed.is_empty() {
                return Err(ConfigError::Empty(key.to_string()));
            }
            Ok(trimmed.to_string())
        };

        let token = required("GITHUB_TOKEN")?;
        let owner = required("REPO_OWNER")?;
        let name = required("REPO_NAME")?;

        let refresh_secs = lookup("REFRESH_SECS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_REFRESH_SECS);

        let graphql_url = lookup("GITHUB_GRAPHQL_URL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_GRAPHQL_URL.to_string());

        let log_level = lookup("LOG_LEVEL")
            .and_then(|s| s.trim().parse::<log::LevelFilter>().ok())
            .unwrap_or(log::LevelFilter::Info);

        Ok(Self {
            token,
            owner,
            name,
            graphql_url,
            refresh_interval: Duration::from_secs(refresh_secs),
            log_level,
        })
    }
}
