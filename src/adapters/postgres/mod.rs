//! PostgreSQL adapters - Database implementations for repository ports.
//!
//! - `PostgresMemberRepository` - Members with change and renewal logs
//! - `PostgresAttendanceRepository` - Attendance board and backup
//!
//! Statements are always parameterized. Each call checks a connection out
//! of the pool (or opens a transaction) and returns it when done.

mod attendance_repository;
mod member_repository;

pub use attendance_repository::PostgresAttendanceRepository;
pub use member_repository::PostgresMemberRepository;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

use crate::config::DatabaseConfig;
use crate::domain::foundation::{Currency, DomainError, ErrorCode, Money};

/// Embedded schema migrations from `migrations/`.
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");

/// Opens a connection pool and, if configured, brings the schema up to date.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DomainError> {
    let url = config.url().ok_or_else(|| {
        DomainError::new(ErrorCode::DatabaseError, "No database URL configured")
    })?;

    let pool = PgPoolOptions::new()
        .min_connections(config.min_connections)
        .max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout())
        .idle_timeout(config.idle_timeout())
        .connect(url)
        .await
        .map_err(|e| db_error("Failed to connect to database", e))?;

    if config.run_migrations {
        MIGRATOR
            .run(&pool)
            .await
            .map_err(|e| db_error("Failed to run migrations", e))?;
        tracing::info!("database migrations applied");
    }

    Ok(pool)
}

pub(crate) fn db_error(context: &str, e: impl std::fmt::Display) -> DomainError {
    tracing::error!(error = %e, "{}", context);
    DomainError::database(context, e)
}

pub(crate) fn money_from_db(minor_units: i64, currency: &str) -> Result<Money, DomainError> {
    let currency = Currency::from_code(currency)
        .map_err(|e| DomainError::new(ErrorCode::DatabaseError, e.to_string()))?;
    Ok(Money::from_minor_units(minor_units, currency))
}

/// Nullable fee columns: both present or the fee is unknown.
pub(crate) fn money_from_columns(
    minor_units: Option<i64>,
    currency: Option<&str>,
) -> Result<Option<Money>, DomainError> {
    match (minor_units, currency) {
        (Some(minor_units), Some(currency)) => money_from_db(minor_units, currency).map(Some),
        (Some(minor_units), None) => Ok(Some(Money::from_minor_units(minor_units, Currency::Egp))),
        _ => Ok(None),
    }
}
