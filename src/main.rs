//! HRMS Leave-Limit Service
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use hrms_core::config::AppConfig;
use hrms_core::error::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("HRMS_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!(
        "Starting HRMS leave-limit service v{}",
        env!("CARGO_PKG_VERSION")
    );

    // ── Step 1: Database connection + migrations ─────────────────
    let db_pool = hrms_database::connection::create_pool(&config.database).await?;
    hrms_database::migration::run_migrations(&db_pool).await?;

    // ── Step 2: Initialize repositories ──────────────────────────
    let employee_repo = Arc::new(
        hrms_database::repositories::employee::EmployeeRepository::new(db_pool.clone()),
    );
    let leave_limit_repo = Arc::new(
        hrms_database::repositories::leave_limit::LeaveLimitRepository::new(db_pool.clone()),
    );
    let user_repo = Arc::new(hrms_database::repositories::user::UserRepository::new(
        db_pool.clone(),
    ));

    // ── Step 3: Initialize services ──────────────────────────────
    let leave_limit_service = Arc::new(hrms_service::leave_limit::LeaveLimitService::new(
        Arc::clone(&leave_limit_repo),
        Arc::clone(&employee_repo),
        Arc::clone(&user_repo),
    ));
    let employee_service = Arc::new(hrms_service::employee::EmployeeService::new(Arc::clone(
        &employee_repo,
    )));

    // ── Step 4: Build and start HTTP server ──────────────────────
    let app_state = hrms_api::state::AppState {
        config: Arc::new(config.clone()),
        db_pool: db_pool.clone(),
        employee_repo,
        leave_limit_repo,
        user_repo,
        leave_limit_service,
        employee_service,
    };

    let app = hrms_api::build_app(app_state, &config.server.cors);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {addr}: {e}")))?;

    tracing::info!("HRMS leave-limit service listening on {addr}");

    // ── Step 5: Graceful shutdown ────────────────────────────────
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {e}")))?;

    db_pool.close().await;
    tracing::info!("HRMS leave-limit service shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
