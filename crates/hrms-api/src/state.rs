//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use sqlx::PgPool;

use hrms_core::config::AppConfig;
use hrms_database::repositories::employee::EmployeeRepository;
use hrms_database::repositories::leave_limit::LeaveLimitRepository;
use hrms_database::repositories::user::UserRepository;
use hrms_service::employee::EmployeeService;
use hrms_service::leave_limit::LeaveLimitService;

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`.
/// All fields are `Arc`-wrapped for cheap cloning across tasks.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Application configuration
    pub config: Arc<AppConfig>,
    /// PostgreSQL connection pool
    pub db_pool: PgPool,

    /// Employee repository
    pub employee_repo: Arc<EmployeeRepository>,
    /// Leave limit repository
    pub leave_limit_repo: Arc<LeaveLimitRepository>,
    /// User repository
    pub user_repo: Arc<UserRepository>,

    /// Leave limit store service
    pub leave_limit_service: Arc<LeaveLimitService>,
    /// Employee picker service
    pub employee_service: Arc<EmployeeService>,
}
