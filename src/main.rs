use std::process::ExitCode;
use std::sync::Arc;

use tokio::net::TcpListener;

use rival_gym::adapters::http::{api_router, GymAppState};
use rival_gym::adapters::{
    postgres, InMemoryGymStore, PostgresAttendanceRepository, PostgresMemberRepository,
    SystemClock,
};
use rival_gym::config::AppConfig;
use rival_gym::observability::init_tracing;

#[tokio::main]
async fn main() -> ExitCode {
    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_tracing(&config.logging) {
        eprintln!("failed to initialise logging: {e}");
        return ExitCode::FAILURE;
    }

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "server exited with error");
            ExitCode::FAILURE
        }
    }
}

async fn run(config: AppConfig) -> Result<(), Box<dyn std::error::Error>> {
    config.validate()?;

    let clock = Arc::new(SystemClock);
    let state = if config.database.is_configured() {
        let pool = postgres::connect(&config.database).await?;
        tracing::info!("using PostgreSQL storage");
        GymAppState::new(
            Arc::new(PostgresMemberRepository::new(pool.clone())),
            Arc::new(PostgresAttendanceRepository::new(pool)),
            clock,
        )
    } else {
        tracing::warn!("no database configured, data is kept in memory only");
        let store = Arc::new(InMemoryGymStore::new());
        GymAppState::new(store.clone(), store, clock)
    };

    let addr = config.server.socket_addr()?;
    let app = api_router(state, &config.server);
    let listener = TcpListener::bind(addr).await?;
    tracing::info!(%addr, environment = ?config.server.environment, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
