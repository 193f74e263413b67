//! Configuration errors

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// A setting that parsed but makes no sense.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0} must be set in production")]
    RequiredInProduction(&'static str),

    #[error("cannot listen on '{0}'")]
    BindAddress(String),

    #[error("request timeout must be between 1 and {max} seconds, got {got}")]
    RequestTimeout { got: u64, max: u64 },

    #[error("database URL must use the postgres:// or postgresql:// scheme")]
    DatabaseScheme,

    #[error("database pool needs 1..={max} connections with min <= max, got {min}..={configured}")]
    PoolSize { min: u32, configured: u32, max: u32 },

    #[error("unknown log filter '{0}'")]
    LogFilter(String),
}
