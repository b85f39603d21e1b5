//! Employee profile repository implementation.
//!
//! Read-only: employee onboarding lives in a different part of the HRMS.

use sqlx::PgPool;
use uuid::Uuid;

use hrms_core::error::{AppError, ErrorKind};
use hrms_core::result::AppResult;
use hrms_entity::employee::EmployeeProfile;

/// Repository for employee profile lookups.
#[derive(Debug, Clone)]
pub struct EmployeeRepository {
    pool: PgPool,
}

impl EmployeeRepository {
    /// Create a new employee repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find an employee by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<EmployeeProfile>> {
        sqlx::query_as::<_, EmployeeProfile>("SELECT * FROM employee_profiles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find employee by id", e)
            })
    }

    /// Find several employees by primary key in one round trip.
    pub async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<EmployeeProfile>> {
        sqlx::query_as::<_, EmployeeProfile>(
            "SELECT * FROM employee_profiles WHERE id = ANY($1)",
        )
        .bind(ids)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to find employees by ids", e)
        })
    }

    /// List all employees ordered by first name.
    pub async fn find_all(&self) -> AppResult<Vec<EmployeeProfile>> {
        sqlx::query_as::<_, EmployeeProfile>(
            "SELECT * FROM employee_profiles ORDER BY first_name ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list employees", e))
    }
}
