//! Application configuration.
//!
//! Read from `RIVAL_GYM__<SECTION>__<KEY>` environment variables (and a
//! `.env` file in development), e.g. `RIVAL_GYM__SERVER__PORT=3000` or
//! `RIVAL_GYM__LOGGING__FORMAT=json`. `server.cors_origins` takes a comma
//! separated list. The database URL also falls back to `DATABASE_URL` and
//! then `PGURL`.
//!
//! ```no_run
//! use rival_gym::config::AppConfig;
//!
//! # fn main() -> Result<(), rival_gym::config::ConfigError> {
//! let config = AppConfig::load()?;
//! config.validate()?;
//! # Ok(())
//! # }
//! ```

mod database;
mod error;
mod logging;
mod server;

pub use database::{DatabaseConfig, URL_FALLBACK_VARS};
pub use error::{ConfigError, ValidationError};
pub use logging::{LogFormat, LoggingConfig};
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

const ENV_PREFIX: &str = "RIVAL_GYM";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub database: DatabaseConfig,
}

impl AppConfig {
    /// Loads settings from the environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Load` when a variable cannot be parsed into
    /// its setting's type.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let source = config::Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("__")
            .separator("__")
            .try_parsing(true)
            .list_separator(",")
            .with_list_parse_key("server.cors_origins");

        let config: AppConfig = config::Config::builder()
            .add_source(source)
            .build()?
            .try_deserialize()?;

        Ok(Self {
            database: config
                .database
                .or_url_from(|key| std::env::var(key).ok().filter(|v| !v.trim().is_empty())),
            ..config
        })
    }

    /// Checks every section. Production must run against PostgreSQL.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.logging.validate()?;
        self.database.validate()?;

        if self.server.is_production() && !self.database.is_configured() {
            return Err(ValidationError::RequiredInProduction("database.url"));
        }
        Ok(())
    }
}
