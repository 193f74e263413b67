//! PostgreSQL connection settings

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

const POOL_CEILING: u32 = 100;

/// URL variables read when `database.url` is not set, in order.
pub const URL_FALLBACK_VARS: [&str; 2] = ["DATABASE_URL", "PGURL"];

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// Unset runs the service on the in-memory store.
    pub url: Option<String>,
    pub min_connections: u32,
    pub max_connections: u32,
    pub acquire_timeout_secs: u64,
    pub idle_timeout_secs: u64,
    /// Apply `migrations/` at startup.
    pub run_migrations: bool,
}

impl DatabaseConfig {
    /// The connection URL, if one is set and not blank.
    pub fn url(&self) -> Option<&str> {
        self.url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn is_configured(&self) -> bool {
        self.url().is_some()
    }

    /// Takes the URL from the first fallback variable `lookup` knows,
    /// unless one is already configured.
    pub fn or_url_from(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if !self.is_configured() {
            self.url = URL_FALLBACK_VARS.into_iter().find_map(|key| lookup(key));
        }
        self
    }

    pub fn acquire_timeout(&self) -> Duration {
        Duration::from_secs(self.acquire_timeout_secs)
    }

    pub fn idle_timeout(&self) -> Duration {
        Duration::from_secs(self.idle_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if let Some(url) = self.url() {
            if !(url.starts_with("postgres://") || url.starts_with("postgresql://")) {
                return Err(ValidationError::DatabaseScheme);
            }
        }

        let pool_ok = self.min_connections <= self.max_connections
            && (1..=POOL_CEILING).contains(&self.max_connections);
        if !pool_ok {
            return Err(ValidationError::PoolSize {
                min: self.min_connections,
                configured: self.max_connections,
                max: POOL_CEILING,
            });
        }
        Ok(())
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: None,
            min_connections: 1,
            max_connections: 10,
            acquire_timeout_secs: 30,
            idle_timeout_secs: 600,
            run_migrations: true,
        }
    }
}
