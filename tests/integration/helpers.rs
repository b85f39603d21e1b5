//! Shared test helpers for integration tests.

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use hrms_api::state::AppState;
use hrms_core::config::AppConfig;

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
}

/// A decoded test response
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestApp {
    /// Create a new test application against the test database
    pub async fn new() -> Self {
        let config = AppConfig::load("test").expect("Failed to load test config");

        let db_pool = hrms_database::connection::create_pool(&config.database)
            .await
            .expect("Failed to connect to test database");

        hrms_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        Self::clean_database(&db_pool).await;

        let employee_repo = Arc::new(
            hrms_database::repositories::employee::EmployeeRepository::new(db_pool.clone()),
        );
        let leave_limit_repo = Arc::new(
            hrms_database::repositories::leave_limit::LeaveLimitRepository::new(db_pool.clone()),
        );
        let user_repo = Arc::new(hrms_database::repositories::user::UserRepository::new(
            db_pool.clone(),
        ));

        let leave_limit_service = Arc::new(hrms_service::leave_limit::LeaveLimitService::new(
            Arc::clone(&leave_limit_repo),
            Arc::clone(&employee_repo),
            Arc::clone(&user_repo),
        ));
        let employee_service = Arc::new(hrms_service::employee::EmployeeService::new(Arc::clone(
            &employee_repo,
        )));

        let state = AppState {
            config: Arc::new(config.clone()),
            db_pool: db_pool.clone(),
            employee_repo,
            leave_limit_repo,
            user_repo,
            leave_limit_service,
            employee_service,
        };

        let router = hrms_api::build_app(state, &config.server.cors);

        Self { router, db_pool }
    }

    /// Remove all rows so each test starts from a blank slate
    async fn clean_database(pool: &PgPool) {
        sqlx::query("TRUNCATE employee_leave_limits, employee_profiles, users CASCADE")
            .execute(pool)
            .await
            .expect("Failed to clean database");
    }

    /// Send a JSON request and decode the JSON response
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        acting_user: Option<Uuid>,
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(path);

        if let Some(user_id) = acting_user {
            builder = builder.header("x-user-id", user_id.to_string());
        }

        let request = match body {
            Some(json) => builder
                .header("content-type", "application/json")
                .body(Body::from(json.to_string()))
                .expect("Failed to build request"),
            None => builder.body(Body::empty()).expect("Failed to build request"),
        };

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Request failed");

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("Failed to read body");
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).expect("Response was not JSON")
        };

        TestResponse { status, body }
    }

    /// Seed an HR user
    pub async fn create_test_user(&self, username: &str) -> Uuid {
        sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO users (username, display_name) VALUES ($1, $2) RETURNING id",
        )
        .bind(username)
        .bind(format!("{username} (HR)"))
        .fetch_one(&self.db_pool)
        .await
        .expect("Failed to seed user")
    }

    /// Seed an employee profile
    pub async fn create_test_employee(
        &self,
        first_name: &str,
        last_name: &str,
        code: &str,
        department: &str,
    ) -> Uuid {
        sqlx::query_scalar::<_, Uuid>(
            "INSERT INTO employee_profiles (first_name, last_name, employee_code, department) \
             VALUES ($1, $2, $3, $4) RETURNING id",
        )
        .bind(first_name)
        .bind(last_name)
        .bind(code)
        .bind(department)
        .fetch_one(&self.db_pool)
        .await
        .expect("Failed to seed employee")
    }
}
