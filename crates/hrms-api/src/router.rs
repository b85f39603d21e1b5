//! Route definitions for the HRMS HTTP API.
//!
//! All routes are organized by domain and mounted under `/api`.
//! The router receives `AppState` and passes it to all handlers via Axum's
//! `State` extractor.

use axum::{
    Router,
    routing::{delete, get, post, put},
};

use crate::handlers;
use crate::state::AppState;

/// Build the Axum router with all routes.
///
/// Receives the fully-constructed `AppState` and threads it through
/// every route via `.with_state(state)`.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(leave_limit_routes())
        .merge(health_routes());

    Router::new().nest("/api", api_routes).with_state(state)
}

/// Leave limit CRUD and employee picker endpoints
fn leave_limit_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/employee-leave-limits",
            get(handlers::leave_limit::list_limits),
        )
        .route(
            "/employee-leave-limits",
            post(handlers::leave_limit::save_limit),
        )
        .route(
            "/employee-leave-limits/employee/{employee_id}",
            get(handlers::leave_limit::get_employee_limits),
        )
        .route(
            "/employee-leave-limits/employees/dropdown",
            get(handlers::employee::employees_dropdown),
        )
        .route(
            "/employee-leave-limits/{id}",
            put(handlers::leave_limit::update_limit),
        )
        .route(
            "/employee-leave-limits/{id}",
            delete(handlers::leave_limit::delete_limit),
        )
}

/// Health check endpoints
fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/health/detailed", get(handlers::health::health_detailed))
}
